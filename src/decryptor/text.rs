//! src/decryptor/text.rs
//! Latin-1 mojibake repair and quote stripping

use crate::error::UnwrapError;

/// Undo one round of "UTF-8 bytes read as Latin-1, then re-encoded as UTF-8".
///
/// `bytes` is decoded as UTF-8; every resulting character must be a Latin-1
/// code point (`U+0000..=U+00FF`) and is mapped back to that single byte. The
/// recovered byte sequence is then decoded as UTF-8 again.
///
/// Pure ASCII passes through unchanged.
pub fn repair_latin1_mojibake(bytes: &[u8]) -> Result<String, UnwrapError> {
    let mangled = std::str::from_utf8(bytes)
        .map_err(|e| UnwrapError::TextRepair(format!("inflated bytes are not UTF-8: {e}")))?;

    let mut raw = Vec::with_capacity(mangled.len());
    for (position, ch) in mangled.chars().enumerate() {
        let byte = u8::try_from(ch).map_err(|_| {
            UnwrapError::TextRepair(format!(
                "character U+{:04X} at position {position} is outside Latin-1",
                u32::from(ch)
            ))
        })?;
        raw.push(byte);
    }

    String::from_utf8(raw).map_err(|e| {
        UnwrapError::TextRepair(format!("repaired bytes are not UTF-8: {}", e.utf8_error()))
    })
}

/// Remove one `"` from each end, but only when both ends carry one.
///
/// A lone `"` is left as is: its first and last character are the same
/// character, not an enclosing pair.
#[inline]
#[must_use]
pub fn strip_enclosing_quotes(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
