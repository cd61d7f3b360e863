//! src/decryptor/pipeline.rs
//! The composite Unwrap primitive: decrypt → hex bridge → inflate → text repair

use crate::aliases::Aes128Key16;
use crate::consts::{DEFAULT_MAX_CIPHERTEXT_LEN, DEFAULT_MAX_INFLATED_LEN};
use crate::decryptor::ecb::{decode_base64, decrypt_ecb_pkcs7};
use crate::decryptor::inflate::{hex_bridge, inflate_bounded, Framing};
use crate::decryptor::text::{repair_latin1_mojibake, strip_enclosing_quotes};
use crate::error::{Stage, UnwrapError};

/// Safety bounds and framing for one Unwrap pass.
///
/// Build through [`CodecBuilder`](crate::builders::CodecBuilder) to get
/// clamped values; the fields are public for direct construction in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwrapOptions {
    /// Maximum Base64 text length accepted before decoding.
    pub max_ciphertext_len: usize,
    /// Maximum inflated output length.
    pub max_inflated_len: usize,
    pub framing: Framing,
}

impl Default for UnwrapOptions {
    fn default() -> Self {
        Self {
            max_ciphertext_len: DEFAULT_MAX_CIPHERTEXT_LEN,
            max_inflated_len: DEFAULT_MAX_INFLATED_LEN,
            framing: Framing::Raw,
        }
    }
}

/// One Unwrap pass over a Base64 field.
///
/// The orchestrator only talks to this trait, so both tiers can be observed
/// or faulted independently.
pub trait Unwrapper {
    fn unwrap_field(&self, ciphertext_b64: &str, key: &Aes128Key16)
        -> Result<String, UnwrapError>;
}

impl Unwrapper for UnwrapOptions {
    #[inline]
    fn unwrap_field(
        &self,
        ciphertext_b64: &str,
        key: &Aes128Key16,
    ) -> Result<String, UnwrapError> {
        unwrap_with_options(ciphertext_b64, key, self)
    }
}

/// Unwrap with [`UnwrapOptions::default`].
///
/// # Example
///
/// ```
/// use coinglass_codec::aliases::Aes128Key16;
/// use coinglass_codec::{unwrap, UnwrapError};
///
/// let key = Aes128Key16::new(*b"0123456789abcdef");
/// let err = unwrap("AAAA", &key).unwrap_err();
/// assert!(matches!(err, UnwrapError::Decrypt(_)));
/// ```
#[inline]
pub fn unwrap(ciphertext_b64: &str, key: &Aes128Key16) -> Result<String, UnwrapError> {
    unwrap_with_options(ciphertext_b64, key, &UnwrapOptions::default())
}

/// Full Unwrap pass. Pure: same input, same output.
pub fn unwrap_with_options(
    ciphertext_b64: &str,
    key: &Aes128Key16,
    options: &UnwrapOptions,
) -> Result<String, UnwrapError> {
    if ciphertext_b64.len() > options.max_ciphertext_len {
        return Err(UnwrapError::ResourceLimit {
            stage: Stage::Ciphertext,
            limit: options.max_ciphertext_len,
        });
    }

    let ciphertext = decode_base64(ciphertext_b64)?;
    let decrypted = decrypt_ecb_pkcs7(&ciphertext, key)?;
    let bridged = hex_bridge(&decrypted)?;
    let inflated = inflate_bounded(&bridged, options.framing, options.max_inflated_len)?;
    let repaired = repair_latin1_mojibake(&inflated)?;

    Ok(strip_enclosing_quotes(&repaired).to_owned())
}
