//! # Builders
//!
//! This module provides builder patterns for configuring the decoder.
//!
//! ## Modules
//!
//! - [`codec_builder`] - Builder for [`ResponseCodec`](crate::ResponseCodec)
//!
//! ## Usage
//!
//! Builders provide a fluent API with safe defaults taken from [`consts`](crate::consts).

pub mod codec_builder;

pub use codec_builder::CodecBuilder;
