//! # Annotated report assembly and output
//!
//! Joins decomposed records with their allele frequencies into an
//! [`AnnotatedReport`], applies the verbose/concise column policy and writes the
//! result as a tab-delimited file (optionally gzipped).
//!
pub mod error;
pub mod report;
pub mod write;

// re-expose core functions
pub use error::*;
pub use report::*;
pub use write::*;
