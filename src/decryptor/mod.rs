// src/decryptor/mod.rs

//! Stage-by-stage decoding of a single obfuscated field.
//!
//! Core API: `unwrap(ciphertext_b64, &key)?` for one full pass.
//! Helpers: each stage is exposed on its own for diagnostics and custom flows.

pub(crate) mod ecb;
pub(crate) mod inflate;
pub(crate) mod pipeline;
pub(crate) mod text;

pub use ecb::{decode_base64, decrypt_ecb_pkcs7};
pub use inflate::{hex_bridge, inflate_bounded, Framing};
pub use pipeline::{unwrap, unwrap_with_options, UnwrapOptions, Unwrapper};
pub use text::{repair_latin1_mojibake, strip_enclosing_quotes};
