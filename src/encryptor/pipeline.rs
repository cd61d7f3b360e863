//! src/encryptor/pipeline.rs
//! Latin-1 mangle → DEFLATE → ECB → Base64, and full two-tier responses

use crate::aliases::Aes128Key16;
use secure_gate::RevealSecret;
use crate::crypto::kdf::endpoint::{derive_endpoint_key_with_salt, KeySalt};
use crate::decryptor::Framing;
use crate::encryptor::ecb::encrypt_ecb_pkcs7;
use crate::response::RawResponse;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use flate2::write::{DeflateEncoder, ZlibEncoder};
use flate2::Compression;
use std::io::{self, Write};

/// Read each UTF-8 byte of `text` as a Latin-1 code point and re-encode as UTF-8.
///
/// Inverse of [`repair_latin1_mojibake`](crate::decryptor::repair_latin1_mojibake).
#[must_use]
pub fn mangle_as_latin1(text: &str) -> String {
    text.bytes().map(char::from).collect()
}

/// Compress `data` with the given framing.
pub fn deflate(data: &[u8], framing: Framing) -> io::Result<Vec<u8>> {
    match framing {
        Framing::Raw => {
            let mut enc = DeflateEncoder::new(Vec::new(), Compression::best());
            enc.write_all(data)?;
            enc.finish()
        }
        Framing::Zlib => {
            let mut enc = ZlibEncoder::new(Vec::new(), Compression::best());
            enc.write_all(data)?;
            enc.finish()
        }
    }
}

/// Produce a Base64 field that unwraps to `plaintext` under `key`.
#[inline]
pub fn wrap(plaintext: &str, key: &Aes128Key16) -> io::Result<String> {
    wrap_with_framing(plaintext, key, Framing::Raw)
}

pub fn wrap_with_framing(
    plaintext: &str,
    key: &Aes128Key16,
    framing: Framing,
) -> io::Result<String> {
    let compressed = deflate(mangle_as_latin1(plaintext).as_bytes(), framing)?;
    Ok(BASE64.encode(encrypt_ecb_pkcs7(&compressed, key)))
}

/// Build a complete response as the vendor would serve it.
///
/// The session key travels as a quoted string, the way the vendor's server
/// serializes it; the decoder strips the quotes. `session_key` is expected
/// to be ASCII, as vendor keys are.
pub fn wrap_response(
    endpoint_path: &str,
    salt: &KeySalt,
    session_key: &Aes128Key16,
    payload: &str,
) -> io::Result<RawResponse> {
    let endpoint_key = derive_endpoint_key_with_salt(salt, endpoint_path);
    let session_text = String::from_utf8_lossy(session_key.expose_secret());
    let header = wrap(&format!("\"{session_text}\""), &endpoint_key)?;
    let body = wrap(payload, session_key)?;
    Ok(RawResponse::new(endpoint_path, header, body))
}
