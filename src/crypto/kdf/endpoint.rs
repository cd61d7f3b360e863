//! src/crypto/kdf/endpoint.rs
//! First-tier key derivation: `base64(salt + path + salt)[..16]`

use crate::aliases::EndpointKey;
use crate::consts::{ENDPOINT_KEY_SALT, KEY_LEN, MIN_KEY_SALT_LEN};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Literal wrapped around the endpoint path during key derivation.
///
/// Guaranteed to be at least [`MIN_KEY_SALT_LEN`] bytes, which keeps
/// [`derive_endpoint_key_with_salt`] infallible for every path, including `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySalt(String);

impl KeySalt {
    /// Returns `None` if `salt` is shorter than [`MIN_KEY_SALT_LEN`] bytes.
    #[must_use]
    pub fn new(salt: impl Into<String>) -> Option<Self> {
        let salt = salt.into();
        (salt.len() >= MIN_KEY_SALT_LEN).then_some(Self(salt))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for KeySalt {
    fn default() -> Self {
        Self(ENDPOINT_KEY_SALT.to_owned())
    }
}

/// Derive the endpoint key for `endpoint_path` using [`ENDPOINT_KEY_SALT`].
///
/// The path is used verbatim: no trimming, no slash normalization, no query
/// stripping. A path that differs from the server's convention still yields a
/// key; the mismatch only surfaces later as a decryption failure.
///
/// Because the salt is 9 bytes, the first 16 Base64 characters only cover the
/// salt plus the first three bytes of the path. Every path beginning with
/// `/ap` shares one key.
///
/// # Example
///
/// ```
/// use coinglass_codec::derive_endpoint_key;
/// use secure_gate::RevealSecret;
///
/// let key = derive_endpoint_key("/api/marketHistory");
/// assert_eq!(key.expose_secret(), b"Y29pbmdsYXNzL2Fw");
/// ```
#[inline]
#[must_use]
pub fn derive_endpoint_key(endpoint_path: &str) -> EndpointKey {
    derive_endpoint_key_with_salt(&KeySalt::default(), endpoint_path)
}

/// Same as [`derive_endpoint_key`] with a caller-supplied salt.
#[must_use]
pub fn derive_endpoint_key_with_salt(salt: &KeySalt, endpoint_path: &str) -> EndpointKey {
    let salt = salt.as_str();
    let mut material = String::with_capacity(salt.len() * 2 + endpoint_path.len());
    material.push_str(salt);
    material.push_str(endpoint_path);
    material.push_str(salt);

    // Base64 output is pure ASCII, so byte offsets equal character offsets.
    let encoded = BASE64.encode(material.as_bytes());
    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&encoded.as_bytes()[..KEY_LEN]);
    EndpointKey::new(key)
}
