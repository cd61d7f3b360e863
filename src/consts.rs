//! # Constants
//!
//! This module defines the vendor protocol constants and the default safety
//! bounds used by the decoding pipeline.

/// Literal wrapped around the endpoint path before the endpoint key is derived.
///
/// The vendor builds the first-tier key as
/// `base64(SALT + path + SALT)[..16]`. This value was recovered from the
/// vendor's web client and may change between API versions; override it with
/// [`CodecBuilder::with_key_salt`](crate::builders::CodecBuilder::with_key_salt)
/// rather than editing pipeline code.
pub const ENDPOINT_KEY_SALT: &str = "coinglass";

/// AES-128 key length in bytes. Both endpoint and session keys must match it.
pub const KEY_LEN: usize = 16;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Default upper bound on accepted Base64 ciphertext text (8 MiB).
///
/// Checked before any decoding, so oversized network input never allocates.
pub const DEFAULT_MAX_CIPHERTEXT_LEN: usize = 8 * 1024 * 1024;

/// Default upper bound on inflated output (32 MiB).
///
/// DEFLATE reaches ratios above 1000:1, so a small body can expand far past
/// what the caller expects. Inflation stops once this many bytes are produced.
pub const DEFAULT_MAX_INFLATED_LEN: usize = 32 * 1024 * 1024;

/// Response header carrying the encrypted session key.
pub const SESSION_HEADER_NAME: &str = "user";

/// Key of the Base64 payload inside the vendor's JSON response body.
pub const BODY_DATA_FIELD: &str = "data";

/// Shortest salt (in bytes) that still yields at least [`KEY_LEN`] Base64
/// characters for an empty endpoint path.
pub const MIN_KEY_SALT_LEN: usize = 6;
