// src/crypto/mod.rs

//! Low-level crypto primitives (key derivation).
//!
//! Sub-modules for primitives; see crate root for re-exports.

pub mod kdf;
