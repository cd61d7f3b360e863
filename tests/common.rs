//! tests/common.rs
//! Common constants and the vector loader shared across test files

use serde::Deserialize;
use std::path::Path;

/// Key used by the single-tier vectors in `unwrap_vectors.json` and `fault_vectors.json`.
#[allow(dead_code)] // Used across multiple test files
pub const TEST_KEY: &[u8; 16] = b"0123456789abcdef";

/// Path used by the end-to-end scenario.
#[allow(dead_code)]
pub const MARKET_HISTORY_PATH: &str = "/api/marketHistory";

/// Endpoint key every `/ap...` path derives to under the default salt.
#[allow(dead_code)]
pub const API_PREFIX_KEY: &[u8; 16] = b"Y29pbmdsYXNzL2Fw";

/// Load a JSON fixture from tests/vector/data/.
#[allow(dead_code)]
pub fn load_json<T>(filename: &str) -> T
where
    T: for<'de> Deserialize<'de>,
{
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vector")
        .join("data")
        .join(filename);

    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {filename}: {e}"));

    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {filename}: {e}"))
}
