//! # Core models for vcfreq
//!
//! Shared types for the decompose-and-enrich pipeline: one [`CanonicalRecord`] per
//! alternative allele, the [`LookupKey`] that joins a record to its external
//! allele-frequency lookup, and the [`FrequencyResult`] that lookup resolves to.
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::VcfError;
pub use models::{CanonicalRecord, FrequencyMap, FrequencyResult, LookupKey, VariantStats};
