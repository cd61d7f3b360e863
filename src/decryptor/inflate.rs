//! src/decryptor/inflate.rs
//! Hex bridge + size-bounded DEFLATE inflate

use crate::error::{Stage, UnwrapError};
use flate2::{Decompress, FlushDecompress, Status};

/// Container around the DEFLATE stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    /// Bare DEFLATE, no header or trailer. The vendor protocol.
    #[default]
    Raw,
    /// zlib header + Adler-32 trailer.
    Zlib,
}

impl Framing {
    #[inline]
    const fn has_zlib_header(self) -> bool {
        matches!(self, Framing::Zlib)
    }
}

/// Render `decrypted` as lowercase hex, then parse the hex text back into bytes.
///
/// The vendor's client inflates the bytes parsed out of the hex text rather
/// than the decrypted bytes. Both paths agree for well-formed input; keeping
/// the bridge keeps failure behaviour identical to the vendor's.
pub fn hex_bridge(decrypted: &[u8]) -> Result<Vec<u8>, UnwrapError> {
    let hex_text = hex::encode(decrypted);
    hex::decode(hex_text).map_err(|e| UnwrapError::Inflate(format!("malformed hex text: {e}")))
}

/// Inflate `input`, never holding more than `max_len + 1` output bytes.
///
/// Fails with [`UnwrapError::Inflate`] on a corrupt or truncated stream and
/// with [`UnwrapError::ResourceLimit`] once output would exceed `max_len`.
pub fn inflate_bounded(
    input: &[u8],
    framing: Framing,
    max_len: usize,
) -> Result<Vec<u8>, UnwrapError> {
    let too_large = || UnwrapError::ResourceLimit {
        stage: Stage::Inflate,
        limit: max_len,
    };

    let cap_limit = max_len.saturating_add(1);
    let mut decoder = Decompress::new(framing.has_zlib_header());
    let mut out = Vec::with_capacity(input.len().saturating_mul(4).max(64).min(cap_limit));

    loop {
        if out.len() == out.capacity() {
            if out.len() >= cap_limit {
                return Err(too_large());
            }
            let grow = out.capacity().max(64).min(cap_limit - out.len());
            out.reserve_exact(grow);
        }

        let in_before = decoder.total_in();
        let out_before = decoder.total_out();
        let consumed = usize::try_from(in_before)
            .map_err(|_| UnwrapError::Inflate("input offset overflow".into()))?;

        let status = decoder
            .decompress_vec(&input[consumed..], &mut out, FlushDecompress::None)
            .map_err(|e| UnwrapError::Inflate(format!("corrupt deflate stream: {e}")))?;

        if out.len() > max_len {
            return Err(too_large());
        }

        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                let progressed =
                    decoder.total_in() != in_before || decoder.total_out() != out_before;
                // Output space left over and nothing moved: input ran dry mid-stream.
                if !progressed && out.len() < out.capacity() {
                    return Err(UnwrapError::Inflate("truncated deflate stream".into()));
                }
            }
        }
    }
}
