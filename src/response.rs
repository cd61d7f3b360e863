//! # Response Decoding
//!
//! Two-tier orchestration over a captured vendor response:
//!
//! 1. derive the endpoint key from the request path,
//! 2. unwrap the session header with it to recover the per-response session key,
//! 3. unwrap the body with the session key,
//! 4. parse the recovered text as JSON.
//!
//! Every step exits early on failure; the body is never touched unless a
//! valid session key was recovered first.

use crate::aliases::key_from_slice;
use crate::consts::{BODY_DATA_FIELD, KEY_LEN};
use crate::crypto::kdf::endpoint::{derive_endpoint_key_with_salt, KeySalt};
use crate::decryptor::{UnwrapOptions, Unwrapper};
use crate::error::ResponseError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// The three fields the codec needs from a captured HTTP response.
///
/// The transport layer must hand these over byte-for-byte: no trimming, no
/// re-encoding, no whitespace normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    /// Request path exactly as sent, e.g. `/api/marketHistory`.
    pub endpoint_path: String,
    /// Value of the session response header.
    #[serde(default)]
    pub header_session: Option<String>,
    /// Base64 payload from the response body.
    #[serde(default)]
    pub body: Option<String>,
}

impl RawResponse {
    pub fn new(
        endpoint_path: impl Into<String>,
        header_session: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            endpoint_path: endpoint_path.into(),
            header_session: Some(header_session.into()),
            body: Some(body.into()),
        }
    }

    /// Build from the vendor's JSON envelope (`{"code":"0","data":"<b64>",...}`).
    ///
    /// A missing or non-string `data` member leaves `body` empty, which the
    /// orchestrator reports as a missing field.
    pub fn from_envelope(
        endpoint_path: impl Into<String>,
        header_session: Option<&str>,
        envelope: &Value,
    ) -> Self {
        Self {
            endpoint_path: endpoint_path.into(),
            header_session: header_session.map(str::to_owned),
            body: envelope
                .get(BODY_DATA_FIELD)
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }
}

/// Strip a configured base URL from a full request URL.
///
/// Only an exact prefix is removed; the query string and everything else are
/// kept verbatim. Returns `url` unchanged when it does not start with `base_url`.
///
/// ```
/// use coinglass_codec::strip_base_url;
///
/// assert_eq!(
///     strip_base_url("https://capi.example.com/api/marketHistory", "https://capi.example.com"),
///     "/api/marketHistory"
/// );
/// ```
#[must_use]
pub fn strip_base_url<'a>(url: &'a str, base_url: &str) -> &'a str {
    url.strip_prefix(base_url).unwrap_or(url)
}

#[inline]
fn required<'a>(field: Option<&'a str>, name: &'static str) -> Result<&'a str, ResponseError> {
    field
        .filter(|v| !v.is_empty())
        .ok_or(ResponseError::MissingField(name))
}

/// Run both tiers and return the recovered plaintext, unparsed.
///
/// Generic over [`Unwrapper`] so each tier can be observed independently.
pub fn recover_plaintext<U>(
    response: &RawResponse,
    salt: &KeySalt,
    unwrapper: &U,
) -> Result<String, ResponseError>
where
    U: Unwrapper + ?Sized,
{
    let header = required(response.header_session.as_deref(), "header_session")?;
    let body = required(response.body.as_deref(), "body")?;

    let endpoint_key = derive_endpoint_key_with_salt(salt, &response.endpoint_path);

    let session_text = unwrapper
        .unwrap_field(header, &endpoint_key)
        .map_err(ResponseError::SessionKeyRecovery)?;

    let session_key =
        key_from_slice(session_text.as_bytes()).ok_or(ResponseError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: session_text.len(),
        })?;
    drop(session_text);

    unwrapper
        .unwrap_field(body, &session_key)
        .map_err(ResponseError::PayloadRecovery)
}

/// Configured response decoder. Cheap to share across threads.
///
/// Create with [`CodecBuilder`](crate::builders::CodecBuilder) or
/// [`ResponseCodec::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseCodec {
    pub(crate) salt: KeySalt,
    pub(crate) options: UnwrapOptions,
}

impl ResponseCodec {
    #[must_use]
    pub fn salt(&self) -> &KeySalt {
        &self.salt
    }

    #[must_use]
    pub const fn options(&self) -> &UnwrapOptions {
        &self.options
    }

    /// Recover the plaintext JSON text without parsing it.
    pub fn decrypt_plaintext(&self, response: &RawResponse) -> Result<String, ResponseError> {
        debug!(
            endpoint = %response.endpoint_path,
            header_len = response.header_session.as_deref().map_or(0, str::len),
            body_len = response.body.as_deref().map_or(0, str::len),
            "decoding response"
        );

        match recover_plaintext(response, &self.salt, &self.options) {
            Ok(plaintext) => {
                debug!(
                    endpoint = %response.endpoint_path,
                    plaintext_len = plaintext.len(),
                    "response decoded"
                );
                Ok(plaintext)
            }
            Err(e) => {
                warn!(
                    endpoint = %response.endpoint_path,
                    kind = ?e.kind(),
                    error = %e,
                    "response could not be decoded"
                );
                Err(e)
            }
        }
    }

    /// Recover and parse the payload as a JSON value.
    pub fn decrypt_response(&self, response: &RawResponse) -> Result<Value, ResponseError> {
        self.decrypt_response_as(response)
    }

    /// Recover and deserialize the payload into `T`.
    pub fn decrypt_response_as<T>(&self, response: &RawResponse) -> Result<T, ResponseError>
    where
        T: DeserializeOwned,
    {
        let plaintext = self.decrypt_plaintext(response)?;
        match serde_json::from_str(&plaintext) {
            Ok(value) => Ok(value),
            Err(source) => Err(ResponseError::JsonParse { source, plaintext }),
        }
    }
}

/// Decode a response with the default codec.
///
/// # Example
///
/// ```
/// use coinglass_codec::{decrypt_response, ErrorKind, RawResponse};
///
/// let response = RawResponse {
///     endpoint_path: "/api/marketHistory".into(),
///     header_session: None,
///     body: Some("AAAA".into()),
/// };
/// let err = decrypt_response(&response).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MissingField);
/// ```
pub fn decrypt_response(response: &RawResponse) -> Result<Value, ResponseError> {
    ResponseCodec::default().decrypt_response(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_fields_count_as_missing() {
        let resp = RawResponse::new("/api/marketHistory", "", "QUJD");
        let err = decrypt_response(&resp).unwrap_err();
        assert!(matches!(err, ResponseError::MissingField("header_session")));

        let resp = RawResponse::new("/api/marketHistory", "QUJD", "");
        let err = decrypt_response(&resp).unwrap_err();
        assert!(matches!(err, ResponseError::MissingField("body")));
    }

    #[test]
    fn envelope_extraction() {
        let envelope = json!({"code": "0", "msg": "success", "data": "QUJD", "success": true});
        let resp = RawResponse::from_envelope("/api/x", Some("SEVBRA=="), &envelope);
        assert_eq!(resp.body.as_deref(), Some("QUJD"));
        assert_eq!(resp.header_session.as_deref(), Some("SEVBRA=="));

        let envelope = json!({"code": "0", "data": {"nested": true}});
        let resp = RawResponse::from_envelope("/api/x", None, &envelope);
        assert_eq!(resp.body, None);
        assert_eq!(resp.header_session, None);
    }

    #[test]
    fn base_url_strip_is_verbatim() {
        let base = "https://capi.example.com";
        assert_eq!(
            strip_base_url("https://capi.example.com/api/marketHistory?pageNum=1", base),
            "/api/marketHistory?pageNum=1"
        );
        assert_eq!(strip_base_url("/api/marketHistory", base), "/api/marketHistory");
    }

    #[test]
    fn raw_response_deserializes_with_absent_fields() {
        let resp: RawResponse =
            serde_json::from_str(r#"{"endpoint_path":"/api/x","body":"QUJD"}"#).unwrap();
        assert_eq!(resp.header_session, None);
        assert_eq!(resp.body.as_deref(), Some("QUJD"));
    }
}
