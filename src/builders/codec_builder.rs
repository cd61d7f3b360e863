//! src/builders/codec_builder.rs
//! ResponseCodec builder: salt, size bounds and stream framing

use crate::crypto::kdf::endpoint::KeySalt;
use crate::decryptor::{Framing, UnwrapOptions};
use crate::response::ResponseCodec;

/// Fluent configuration for [`ResponseCodec`].
///
/// Defaults: [`ENDPOINT_KEY_SALT`](crate::consts::ENDPOINT_KEY_SALT),
/// [`DEFAULT_MAX_CIPHERTEXT_LEN`](crate::consts::DEFAULT_MAX_CIPHERTEXT_LEN),
/// [`DEFAULT_MAX_INFLATED_LEN`](crate::consts::DEFAULT_MAX_INFLATED_LEN),
/// raw DEFLATE framing.
///
/// # Thread Safety
///
/// The built codec is `Send + Sync` and holds no mutable state; one instance
/// can serve any number of concurrent decodes.
///
/// # Example
///
/// ```
/// use coinglass_codec::builders::CodecBuilder;
/// use coinglass_codec::decryptor::Framing;
///
/// let codec = CodecBuilder::new()
///     .with_max_inflated_len(1 << 20)
///     .with_framing(Framing::Raw)
///     .build();
/// assert_eq!(codec.options().max_inflated_len, 1 << 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodecBuilder {
    salt: KeySalt,
    options: UnwrapOptions,
}

impl CodecBuilder {
    /// Create builder with protocol defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the endpoint key salt (vendor API version change).
    #[must_use]
    pub fn with_key_salt(mut self, salt: KeySalt) -> Self {
        self.salt = salt;
        self
    }

    /// Cap accepted Base64 text length (minimum 1)
    #[must_use]
    pub fn with_max_ciphertext_len(mut self, len: usize) -> Self {
        self.options.max_ciphertext_len = len.max(1);
        self
    }

    /// Cap inflated output length (minimum 1)
    #[must_use]
    pub fn with_max_inflated_len(mut self, len: usize) -> Self {
        self.options.max_inflated_len = len.max(1);
        self
    }

    #[must_use]
    pub fn with_framing(mut self, framing: Framing) -> Self {
        self.options.framing = framing;
        self
    }

    #[must_use]
    pub fn salt(&self) -> &KeySalt {
        &self.salt
    }

    #[must_use]
    pub const fn options(&self) -> &UnwrapOptions {
        &self.options
    }

    #[must_use]
    pub fn build(self) -> ResponseCodec {
        ResponseCodec {
            salt: self.salt,
            options: self.options,
        }
    }
}
