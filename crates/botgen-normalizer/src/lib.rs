//! botgen normalizer: validates a raw block list and produces a
//! [`botgen_types::NormalizedConfig`].

mod fields;
mod legacy;
mod normalizer;

pub use legacy::from_legacy;
pub use normalizer::{normalize, NormalizeResult, Normalizer};
