//! src/encryptor/ecb.rs
//! PKCS#7 pad → AES-128-ECB encrypt, mirror of `decryptor/ecb.rs`

use crate::aliases::Aes128Key16;
use secure_gate::RevealSecret;
use crate::consts::BLOCK_SIZE;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes128Enc, Block as AesBlock};

/// Append 1..=16 bytes of value N so the length becomes a multiple of [`BLOCK_SIZE`].
#[must_use]
pub fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let pad = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + pad);
    padded.extend_from_slice(data);
    // pad is 1..=16, always fits a byte
    padded.resize(data.len() + pad, pad as u8);
    padded
}

/// Pad and encrypt each block independently (ECB, no IV).
#[must_use]
pub fn encrypt_ecb_pkcs7(data: &[u8], key: &Aes128Key16) -> Vec<u8> {
    let cipher = Aes128Enc::new(key.expose_secret().into());
    let mut out = pkcs7_pad(data);
    for chunk in out.chunks_exact_mut(BLOCK_SIZE) {
        cipher.encrypt_block(AesBlock::from_mut_slice(chunk));
    }
    out
}
