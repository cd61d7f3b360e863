//! Key derivation for the first protocol tier.

pub mod endpoint;
