//! src/batch_ops.rs
//! Parallel decoding of independent responses (rayon)

#[cfg(feature = "batch-ops")]
use rayon::prelude::*;
#[cfg(feature = "batch-ops")]
use serde_json::Value;

#[cfg(feature = "batch-ops")]
use crate::{RawResponse, ResponseCodec, ResponseError};

/// Decode every response in parallel.
///
/// Returns one result per input, in input order. A failing response never
/// aborts the rest of the batch.
#[cfg(feature = "batch-ops")]
pub fn decrypt_batch(
    codec: &ResponseCodec,
    responses: &[RawResponse],
) -> Vec<Result<Value, ResponseError>> {
    responses
        .par_iter()
        .map(|response| codec.decrypt_response(response))
        .collect()
}

/// Recover plaintext for every response in parallel, without JSON parsing.
#[cfg(feature = "batch-ops")]
pub fn decrypt_plaintext_batch(
    codec: &ResponseCodec,
    responses: &[RawResponse],
) -> Vec<Result<String, ResponseError>> {
    responses
        .par_iter()
        .map(|response| codec.decrypt_plaintext(response))
        .collect()
}
