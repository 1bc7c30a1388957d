//! # VCF record decomposition
//!
//! Turns the lines of a VCF file into:
//!
//! - the metadata blob (`##` lines, verbatim)
//! - the column names (the `#CHROM` header plus the derived statistic columns)
//! - one [`CanonicalRecord`](vcfreq_core::CanonicalRecord) per alternative allele,
//!   each with type, depth, supporting reads and percentage of supporting reads
//!   taken from the INFO column

pub mod decompose;
pub mod info;
pub mod vcf;

pub use decompose::{DecomposedVcf, LineKind, VcfDecomposer, classify_line, decompose_variant_line};
pub use vcf::{decompose_lines, decompose_reader, decompose_vcf};
