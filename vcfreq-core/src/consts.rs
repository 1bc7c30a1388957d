//! Column names, column positions and sentinel values shared across the workspace.

// Fixed VCF column positions (0-based)
pub const CHROM_COL: usize = 0;
pub const POS_COL: usize = 1;
pub const REF_COL: usize = 3;
pub const ALT_COL: usize = 4;
pub const INFO_COL: usize = 7;

/// Minimum number of tab-separated fields on a variant line.
pub const MIN_VARIANT_FIELDS: usize = 8;

pub const METADATA_PREFIX: &str = "##";
pub const HEADER_PREFIX: &str = "#";

pub const FIELD_DELIMITER: char = '\t';
pub const ALLELE_DELIMITER: char = ',';
pub const INFO_DELIMITER: char = ';';
pub const KEY_DELIMITER: char = '-';

// INFO keys that feed the derived statistics
pub const INFO_TYPE: &str = "TYPE";
pub const INFO_DEPTH: &str = "DP";
pub const INFO_SUPPORTING_READS: &str = "AO";

/// Names of the derived statistic columns, in output order.
pub const DERIVED_COLUMNS: [&str; 4] = [
    "Type of Variation",
    "Sequence Depth Coverage at Variation Site",
    "Number Of Reads Supporting Variant",
    "% Reads Supporting Variant",
];

pub const FREQUENCY_COLUMN: &str = "Allele Frequency of Variant";

/// Source columns removed from the report when verbose output is off.
pub const CONCISE_DROPPED_COLUMNS: [&str; 6] = ["FILTER", "INFO", "ID", "FORMAT", "normal", "vaf5"];

// Frequency sentinels
pub const NOT_AVAILABLE: &str = "Not Available";
pub const LOOKUP_ERROR: &str = "error";
