//! src/decryptor/ecb.rs
//! Base64 → AES-128-ECB → PKCS#7 strip

use crate::aliases::Aes128Key16;
use secure_gate::RevealSecret;
use crate::consts::BLOCK_SIZE;
use crate::error::UnwrapError;
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes128Dec, Block as AesBlock};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Strict standard-alphabet Base64 decode. No whitespace is tolerated.
#[inline]
pub fn decode_base64(text: &str) -> Result<Vec<u8>, UnwrapError> {
    BASE64
        .decode(text)
        .map_err(|e| UnwrapError::Decrypt(format!("invalid Base64: {e}")))
}

/// Decrypt `ciphertext` block by block (ECB, no IV) and strip PKCS#7 padding.
pub fn decrypt_ecb_pkcs7(ciphertext: &[u8], key: &Aes128Key16) -> Result<Vec<u8>, UnwrapError> {
    if ciphertext.is_empty() {
        return Err(UnwrapError::Decrypt("empty ciphertext".into()));
    }
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(UnwrapError::Decrypt(format!(
            "ciphertext length {} is not a multiple of {BLOCK_SIZE}",
            ciphertext.len()
        )));
    }

    let cipher = Aes128Dec::new(key.expose_secret().into());
    let mut plaintext = ciphertext.to_vec();
    for chunk in plaintext.chunks_exact_mut(BLOCK_SIZE) {
        cipher.decrypt_block(AesBlock::from_mut_slice(chunk));
    }

    let unpadded = pkcs7_unpadded_len(&plaintext)?;
    plaintext.truncate(unpadded);
    Ok(plaintext)
}

/// Length of `plaintext` without its PKCS#7 pad.
///
/// `plaintext` must be a non-empty multiple of [`BLOCK_SIZE`].
fn pkcs7_unpadded_len(plaintext: &[u8]) -> Result<usize, UnwrapError> {
    let last_block = plaintext.len() / BLOCK_SIZE - 1;
    let pad = plaintext[plaintext.len() - 1];

    if pad == 0 || usize::from(pad) > BLOCK_SIZE {
        return Err(UnwrapError::Decrypt(format!(
            "invalid PKCS#7 padding at block {last_block}: pad value {pad}"
        )));
    }

    let start = plaintext.len() - usize::from(pad);
    if plaintext[start..].iter().any(|&b| b != pad) {
        return Err(UnwrapError::Decrypt(format!(
            "corrupt PKCS#7 padding at block {last_block}"
        )));
    }

    Ok(start)
}
