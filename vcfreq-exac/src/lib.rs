//! # Allele-frequency enrichment
//!
//! Resolves one [`FrequencyResult`](vcfreq_core::FrequencyResult) per
//! [`LookupKey`](vcfreq_core::LookupKey) with a fixed pool of worker threads fed
//! from a bounded queue. Results land in a key-indexed map, so completion order
//! never matters to callers.
pub mod client;
pub mod consts;
pub mod engine;
pub mod error;
pub mod utils;

pub use client::{ExacClient, ExacClientBuilder, classify_response};
pub use engine::{EnrichmentEngine, FrequencySource};
pub use error::EnrichError;
