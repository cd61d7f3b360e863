// src/encryptor/mod.rs

//! Vendor-side inverse of the decoding pipeline.
//!
//! Core API: `wrap(plaintext, &key)?` produces a field that `unwrap` accepts.
//! `wrap_response` builds a complete two-tier [`RawResponse`](crate::RawResponse).
//! Used for fixtures, tests and benchmarks; the decoder never calls it.

pub(crate) mod ecb;
pub(crate) mod pipeline;

pub use ecb::{encrypt_ecb_pkcs7, pkcs7_pad};
pub use pipeline::{deflate, mangle_as_latin1, wrap, wrap_response, wrap_with_framing};
