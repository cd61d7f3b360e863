//! tests/response_tests.rs
//! Two-tier orchestration: vectors, ordering, typed decoding

mod common;

use coinglass_codec::aliases::Aes128Key16;
use secure_gate::RevealSecret;
use coinglass_codec::{
    decrypt_response, recover_plaintext, ErrorKind, KeySalt, RawResponse, ResponseCodec,
    ResponseError, UnwrapError, UnwrapOptions, Unwrapper,
};
use common::{load_json, API_PREFIX_KEY, MARKET_HISTORY_PATH};
use serde::Deserialize;
use serde_json::{json, Value};
use std::cell::RefCell;

#[derive(Debug, Deserialize)]
struct ResponseVector {
    desc: String,
    endpoint_path: String,
    header: String,
    body: String,
    expected: Value,
}

/// Records the key of every Unwrap call before delegating.
struct SpyUnwrapper {
    inner: UnwrapOptions,
    calls: RefCell<Vec<[u8; 16]>>,
}

impl SpyUnwrapper {
    fn new() -> Self {
        Self {
            inner: UnwrapOptions::default(),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl Unwrapper for SpyUnwrapper {
    fn unwrap_field(
        &self,
        ciphertext_b64: &str,
        key: &Aes128Key16,
    ) -> Result<String, UnwrapError> {
        self.calls.borrow_mut().push(*key.expose_secret());
        self.inner.unwrap_field(ciphertext_b64, key)
    }
}

fn vector_response(v: &ResponseVector) -> RawResponse {
    RawResponse::new(&v.endpoint_path, &v.header, &v.body)
}

#[test]
fn response_vectors_decode() {
    let vectors: Vec<ResponseVector> = load_json("response_vectors.json");
    assert!(!vectors.is_empty());

    for v in &vectors {
        let got = decrypt_response(&vector_response(v))
            .unwrap_or_else(|e| panic!("{}: {e}", v.desc));
        assert_eq!(got, v.expected, "{}", v.desc);
    }
}

#[test]
fn market_history_scenario() {
    let vectors: Vec<ResponseVector> = load_json("response_vectors.json");
    let v = &vectors[0];
    assert_eq!(v.endpoint_path, MARKET_HISTORY_PATH);

    let got = decrypt_response(&vector_response(v)).unwrap();
    assert_eq!(got, json!({"ok": true, "n": 1}));
}

#[test]
fn header_is_unwrapped_first_with_endpoint_key() {
    let vectors: Vec<ResponseVector> = load_json("response_vectors.json");
    let spy = SpyUnwrapper::new();

    let plaintext = recover_plaintext(&vector_response(&vectors[0]), &KeySalt::default(), &spy)
        .unwrap();
    assert_eq!(plaintext, r#"{"ok":true,"n":1}"#);

    let calls = spy.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(&calls[0], API_PREFIX_KEY);
    assert_eq!(&calls[1], b"Qm9wZWRUaWRlMjAy");
}

#[test]
fn corrupted_header_never_reaches_body() {
    let vectors: Vec<ResponseVector> = load_json("response_vectors.json");
    let mut resp = vector_response(&vectors[0]);
    // Flip one Base64 character inside the first block.
    let mut header = resp.header_session.take().unwrap().into_bytes();
    header[3] = if header[3] == b'A' { b'B' } else { b'A' };
    resp.header_session = Some(String::from_utf8(header).unwrap());

    let spy = SpyUnwrapper::new();
    let err = recover_plaintext(&resp, &KeySalt::default(), &spy).unwrap_err();

    assert!(matches!(err, ResponseError::SessionKeyRecovery(_)));
    assert_eq!(spy.calls.borrow().len(), 1, "body must not be unwrapped");
}

#[test]
fn missing_fields_never_unwrap() {
    let spy = SpyUnwrapper::new();
    let resp = RawResponse {
        endpoint_path: MARKET_HISTORY_PATH.into(),
        header_session: None,
        body: Some("QUJD".into()),
    };
    let err = recover_plaintext(&resp, &KeySalt::default(), &spy).unwrap_err();
    assert!(matches!(err, ResponseError::MissingField("header_session")));

    let resp = RawResponse {
        endpoint_path: MARKET_HISTORY_PATH.into(),
        header_session: Some("QUJD".into()),
        body: None,
    };
    let err = recover_plaintext(&resp, &KeySalt::default(), &spy).unwrap_err();
    assert!(matches!(err, ResponseError::MissingField("body")));
    assert_eq!(err.to_string(), "Missing field: body");

    assert!(spy.calls.borrow().is_empty());
}

#[test]
fn wrong_endpoint_path_fails_session_recovery() {
    let vectors: Vec<ResponseVector> = load_json("response_vectors.json");
    let mut resp = vector_response(&vectors[0]);
    resp.endpoint_path = "/v2/marketHistory".into();

    let err = decrypt_response(&resp).unwrap_err();
    assert!(matches!(err, ResponseError::SessionKeyRecovery(_)));
    assert!(err.unwrap_cause().is_some());
}

#[test]
fn envelope_round_trip() {
    let vectors: Vec<ResponseVector> = load_json("response_vectors.json");
    let v = &vectors[0];
    let envelope = json!({"code": "0", "msg": "success", "data": v.body, "success": true});

    let resp = RawResponse::from_envelope(&v.endpoint_path, Some(&v.header), &envelope);
    assert_eq!(decrypt_response(&resp).unwrap(), v.expected);
}

#[test]
fn typed_decoding() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Flow {
        symbol: String,
        flow: f64,
        exchange: String,
    }

    let vectors: Vec<ResponseVector> = load_json("response_vectors.json");
    let v = vectors
        .iter()
        .find(|v| v.expected.is_array())
        .expect("array vector present");

    let flows: Vec<Flow> = ResponseCodec::default()
        .decrypt_response_as(&vector_response(v))
        .unwrap();
    assert_eq!(
        flows,
        vec![Flow {
            symbol: "ETH".into(),
            flow: -12.5,
            exchange: "币安".into(),
        }]
    );
}

#[test]
fn typed_decoding_schema_drift_is_json_error() {
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Unexpected {
        totally_different: u64,
    }

    let vectors: Vec<ResponseVector> = load_json("response_vectors.json");
    let err = ResponseCodec::default()
        .decrypt_response_as::<Unexpected>(&vector_response(&vectors[0]))
        .unwrap_err();

    match err {
        ResponseError::JsonParse { plaintext, .. } => {
            assert_eq!(plaintext, r#"{"ok":true,"n":1}"#);
        }
        other => panic!("expected JsonParse, got {other:?}"),
    }
}

#[test]
fn plaintext_is_available_unparsed() {
    let vectors: Vec<ResponseVector> = load_json("response_vectors.json");
    let text = ResponseCodec::default()
        .decrypt_plaintext(&vector_response(&vectors[2]))
        .unwrap();
    assert_eq!(text, r#"{"list":[1,2,3],"next":null}"#);
}

#[cfg(feature = "wrap")]
mod wrapped {
    use super::*;
    use coinglass_codec::wrap_response;

    #[test]
    fn wrap_response_round_trip() {
        let session = Aes128Key16::new(*b"s3ss10nK3yABCDEF");
        let payload = r#"{"whales":[{"addr":"0xabc","usd":1.5e6}],"note":"巨鲸"}"#;
        let resp =
            wrap_response("/api/whale/alerts", &KeySalt::default(), &session, payload).unwrap();

        let value = decrypt_response(&resp).unwrap();
        assert_eq!(value["note"], "巨鲸");
        assert_eq!(value["whales"][0]["addr"], "0xabc");
    }

    #[test]
    fn custom_salt_round_trip() {
        let salt = KeySalt::new("vendor-v2").unwrap();
        let session = Aes128Key16::new(*b"0000111122223333");
        let resp = wrap_response(MARKET_HISTORY_PATH, &salt, &session, "[1,2]").unwrap();

        let codec = coinglass_codec::CodecBuilder::new()
            .with_key_salt(salt)
            .build();
        assert_eq!(codec.decrypt_response(&resp).unwrap(), json!([1, 2]));

        // The default salt derives a different endpoint key.
        let err = decrypt_response(&resp).unwrap_err();
        assert!(matches!(err, ResponseError::SessionKeyRecovery(_)));
        assert_ne!(err.kind(), ErrorKind::InvalidKeyLength);
    }
}
