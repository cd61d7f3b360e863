// src/lib.rs

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
#[cfg(feature = "wrap")]
pub mod encryptor;
pub mod error;
pub mod response;

// High-level API
pub use response::{decrypt_response, strip_base_url, RawResponse, ResponseCodec};
pub use error::{ErrorKind, ResponseError, UnwrapError};

// Building blocks for custom flows and diagnostics
pub use builders::CodecBuilder;
pub use crypto::kdf::endpoint::{derive_endpoint_key, derive_endpoint_key_with_salt, KeySalt};
pub use decryptor::{unwrap, unwrap_with_options, UnwrapOptions, Unwrapper};
pub use response::recover_plaintext;

#[cfg(feature = "wrap")]
pub use encryptor::{wrap, wrap_response};

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, decrypt_plaintext_batch};
