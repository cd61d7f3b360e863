//! # Error Types
//!
//! Two layers of errors mirror the two layers of the protocol:
//!
//! - [`UnwrapError`]: a single decrypt → inflate → text-repair pass failed.
//! - [`ResponseError`]: the two-stage orchestrator failed; wraps the
//!   [`UnwrapError`] of whichever tier broke, so `source()` walks the full chain.

use thiserror::Error;

/// Pipeline stage that hit a resource bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Base64 ciphertext text, checked before decoding.
    Ciphertext,
    /// Inflated output.
    Inflate,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Ciphertext => f.write_str("ciphertext"),
            Stage::Inflate => f.write_str("inflated output"),
        }
    }
}

/// The error type for one pass of the Unwrap primitive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnwrapError {
    /// Base64 decoding, block alignment or PKCS#7 padding failed.
    ///
    /// Almost always a wrong key or corrupted transport data.
    #[error("Decrypt error: {0}")]
    Decrypt(String),

    /// The hex bridge or the DEFLATE stream was malformed or truncated.
    #[error("Inflate error: {0}")]
    Inflate(String),

    /// The inflated bytes did not survive the Latin-1 → UTF-8 repair.
    ///
    /// Decrypted data that is not text is a near-certain sign of a wrong key.
    #[error("Text repair error: {0}")]
    TextRepair(String),

    /// An input or output size exceeded the configured bound.
    #[error("Resource limit exceeded: {stage} larger than {limit} bytes")]
    ResourceLimit { stage: Stage, limit: usize },
}

/// The error type for [`decrypt_response`](crate::decrypt_response).
#[derive(Error, Debug)]
pub enum ResponseError {
    /// A required input field was absent or empty.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Unwrapping the session header with the endpoint key failed.
    #[error("Session key recovery failed")]
    SessionKeyRecovery(#[source] UnwrapError),

    /// The recovered session key is not a valid AES-128 key.
    ///
    /// Signals a protocol version mismatch or a wrong endpoint path.
    #[error("Invalid session key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Unwrapping the body with the session key failed.
    #[error("Payload recovery failed")]
    PayloadRecovery(#[source] UnwrapError),

    /// The recovered plaintext is not valid JSON. Carries the text for diagnostics.
    #[error("JSON parse error: {source}")]
    JsonParse {
        #[source]
        source: serde_json::Error,
        plaintext: String,
    },
}

/// Flattened classification of a [`ResponseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingField,
    Decrypt,
    Inflate,
    TextRepair,
    InvalidKeyLength,
    JsonParse,
    ResourceLimit,
}

impl UnwrapError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            UnwrapError::Decrypt(_) => ErrorKind::Decrypt,
            UnwrapError::Inflate(_) => ErrorKind::Inflate,
            UnwrapError::TextRepair(_) => ErrorKind::TextRepair,
            UnwrapError::ResourceLimit { .. } => ErrorKind::ResourceLimit,
        }
    }
}

impl ResponseError {
    /// Root-cause classification, looking through the tier wrappers.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ResponseError::MissingField(_) => ErrorKind::MissingField,
            ResponseError::SessionKeyRecovery(e) | ResponseError::PayloadRecovery(e) => e.kind(),
            ResponseError::InvalidKeyLength { .. } => ErrorKind::InvalidKeyLength,
            ResponseError::JsonParse { .. } => ErrorKind::JsonParse,
        }
    }

    /// The underlying Unwrap failure, if one of the tiers failed.
    #[must_use]
    pub const fn unwrap_cause(&self) -> Option<&UnwrapError> {
        match self {
            ResponseError::SessionKeyRecovery(e) | ResponseError::PayloadRecovery(e) => Some(e),
            _ => None,
        }
    }
}
