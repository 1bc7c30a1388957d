//! # vcfreq
//!
//! Decomposes multi-allelic VCF records into one record per alternative allele,
//! derives read-support statistics from INFO, looks up each allele's population
//! frequency in ExAC with a bounded pool of workers and writes the annotated table.
//!
//! The building blocks live in their own crates and are re-exported here;
//! [`pipeline`] wires them together.

#[doc(inline)]
pub use vcfreq_core as core;

#[cfg(feature = "vcf")]
#[doc(inline)]
pub use vcfreq_vcf as vcf;

#[cfg(feature = "exac")]
#[doc(inline)]
pub use vcfreq_exac as exac;

#[cfg(feature = "io")]
#[doc(inline)]
pub use vcfreq_io as io;

#[cfg(all(feature = "vcf", feature = "exac", feature = "io"))]
pub mod pipeline;
