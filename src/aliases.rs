//! # Secure-Gate Type Aliases
//!
//! Key material is held in [`secure-gate`](https://github.com/Slurp9187/secure-gate)
//! fixed-size wrappers so it is zeroized on drop and only reachable through an
//! explicit `.expose_secret()`.
//!
//! ## Type Categories
//!
//! ### Generic Secure Buffers
//! - [`SpanBuffer<N>`] - Generic secure stack buffer for any size `N`
//!
//! ### Semantic Fixed-Size Types
//! - [`Aes128Key16`] - 16-byte AES-128 key
//! - [`EndpointKey`] - first-tier key derived from the request path
//! - [`SessionKey`] - second-tier key recovered from the response header

use crate::consts::KEY_LEN;

// ─────────────────────────────────────────────────────────────────────────────
// SpanBuffer: generic secure stack buffer (direct alias to secure-gate's Fixed)
// ─────────────────────────────────────────────────────────────────────────────
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type Aes128Key16 = SpanBuffer<KEY_LEN>;

// ─────────────────────────────────────────────────────────────────────────────
// Protocol keys: same shape, different provenance
// ─────────────────────────────────────────────────────────────────────────────

/// Derived from the endpoint path; never transmitted.
pub type EndpointKey = Aes128Key16;

/// Recovered from the session header; valid for one response only.
pub type SessionKey = Aes128Key16;

/// Copy a 16-byte slice into a fresh secure key.
///
/// Returns `None` unless `bytes` is exactly [`KEY_LEN`] long.
#[inline]
pub fn key_from_slice(bytes: &[u8]) -> Option<Aes128Key16> {
    let arr: [u8; KEY_LEN] = bytes.try_into().ok()?;
    Some(Aes128Key16::new(arr))
}
