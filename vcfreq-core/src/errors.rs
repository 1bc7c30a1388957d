use thiserror::Error;

/// Errors raised while decomposing a VCF into canonical records.
///
/// Every structural variant carries the 1-based line number of the offending source line.
#[derive(Error, Debug)]
pub enum VcfError {
    #[error("Can't read VCF: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: variant record found before the #CHROM header line")]
    MissingHeader { line: usize },

    #[error("line {line}: expected at least {expected} tab-separated fields, found {found}")]
    TooFewFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: header declares {expected} columns but the record has {found}")]
    ColumnCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: POS is not a non-negative integer: {value:?}")]
    InvalidPosition { line: usize, value: String },

    #[error("line {line}: invalid allele {value:?}")]
    InvalidAllele { line: usize, value: String },

    #[error("line {line}: INFO is missing the {key} key")]
    MissingInfoKey { line: usize, key: &'static str },

    #[error("line {line}: {key} is not numeric: {value:?}")]
    InvalidNumber {
        line: usize,
        key: &'static str,
        value: String,
    },

    #[error("line {line}: {alleles} alternative alleles but {values} AO values")]
    AlleleCountMismatch {
        line: usize,
        alleles: usize,
        values: usize,
    },

    #[error("line {line}: DP is zero, percentage of supporting reads is undefined")]
    ZeroDepth { line: usize },
}

pub type Result<T> = std::result::Result<T, VcfError>;
