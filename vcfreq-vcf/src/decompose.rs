//! Multi-allelic decomposition and read-support statistics.

use log::{debug, warn};

use vcfreq_core::consts::{
    ALLELE_DELIMITER, ALT_COL, DERIVED_COLUMNS, FIELD_DELIMITER, HEADER_PREFIX, INFO_COL,
    INFO_DEPTH, INFO_SUPPORTING_READS, INFO_TYPE, KEY_DELIMITER, METADATA_PREFIX,
    MIN_VARIANT_FIELDS, POS_COL, REF_COL,
};
use vcfreq_core::errors::{Result, VcfError};
use vcfreq_core::utils::percent_supporting;
use vcfreq_core::{CanonicalRecord, LookupKey, VariantStats};

use crate::info::{parse_count, required_info_value};

/// What a raw VCF line is, judged by its leading characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Metadata,
    Header,
    Variant,
    Blank,
}

pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with(METADATA_PREFIX) {
        LineKind::Metadata
    } else if line.starts_with(HEADER_PREFIX) {
        LineKind::Header
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Variant
    }
}

///
/// Result of decomposing a whole VCF.
///
#[derive(Debug, Clone, Default)]
pub struct DecomposedVcf {
    /// All `##` lines, verbatim and newline terminated.
    pub metadata: String,
    /// Header columns followed by the derived statistic columns.
    pub columns: Vec<String>,
    /// One record per alternative allele, in file order.
    pub records: Vec<CanonicalRecord>,
    /// Number of variant lines read (before decomposition).
    pub variant_lines: usize,
}

impl DecomposedVcf {
    pub fn keys(&self) -> impl Iterator<Item = &LookupKey> {
        self.records.iter().map(|r| &r.key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

///
/// Line-by-line builder for a [DecomposedVcf].
///
/// Feed every line of the file through [VcfDecomposer::push_line] and call
/// [VcfDecomposer::finish] once the input is exhausted.
///
#[derive(Debug, Default)]
pub struct VcfDecomposer {
    metadata: String,
    header: Option<Vec<String>>,
    records: Vec<CanonicalRecord>,
    variant_lines: usize,
    line_number: usize,
}

impl VcfDecomposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, raw: &str) -> Result<()> {
        self.line_number += 1;
        let line = raw.trim_end_matches(['\n', '\r']);

        match classify_line(line) {
            LineKind::Metadata => {
                self.metadata.push_str(line);
                self.metadata.push('\n');
            }
            LineKind::Header => {
                if self.header.is_some() {
                    warn!(
                        "line {}: ignoring additional header line after #CHROM",
                        self.line_number
                    );
                } else {
                    self.header = Some(line.trim().split(FIELD_DELIMITER).map(String::from).collect());
                }
            }
            LineKind::Blank => {}
            LineKind::Variant => {
                let n_columns = match &self.header {
                    Some(header) => header.len(),
                    None => {
                        return Err(VcfError::MissingHeader {
                            line: self.line_number,
                        });
                    }
                };
                let records = decompose_variant_line(line, self.line_number, n_columns)?;
                if records.len() > 1 {
                    debug!(
                        "line {}: split {} alternative alleles",
                        self.line_number,
                        records.len()
                    );
                }
                self.variant_lines += 1;
                self.records.extend(records);
            }
        }

        Ok(())
    }

    pub fn finish(self) -> DecomposedVcf {
        let columns = match self.header {
            Some(mut header) => {
                header.extend(DERIVED_COLUMNS.iter().map(|c| c.to_string()));
                header
            }
            None => Vec::new(),
        };

        DecomposedVcf {
            metadata: self.metadata,
            columns,
            records: self.records,
            variant_lines: self.variant_lines,
        }
    }
}

fn validate_allele(allele: &str, line: usize) -> Result<()> {
    if allele.is_empty() || allele.contains(KEY_DELIMITER) {
        return Err(VcfError::InvalidAllele {
            line,
            value: allele.to_string(),
        });
    }
    Ok(())
}

///
/// Decompose one variant line into a record per alternative allele.
///
/// # Arguments
/// - line: the variant line, without its line terminator
/// - line_number: 1-based position of the line in the file, for error messages
/// - n_columns: number of columns declared by the header
///
pub fn decompose_variant_line(
    line: &str,
    line_number: usize,
    n_columns: usize,
) -> Result<Vec<CanonicalRecord>> {
    let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();
    if fields.len() < MIN_VARIANT_FIELDS {
        return Err(VcfError::TooFewFields {
            line: line_number,
            expected: MIN_VARIANT_FIELDS,
            found: fields.len(),
        });
    }
    if fields.len() != n_columns {
        return Err(VcfError::ColumnCountMismatch {
            line: line_number,
            expected: n_columns,
            found: fields.len(),
        });
    }

    let pos = fields[POS_COL];
    if pos.is_empty() || !pos.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VcfError::InvalidPosition {
            line: line_number,
            value: pos.to_string(),
        });
    }
    validate_allele(fields[REF_COL], line_number)?;

    let alleles: Vec<&str> = fields[ALT_COL].split(ALLELE_DELIMITER).collect();
    for allele in &alleles {
        validate_allele(allele, line_number)?;
    }

    let info = fields[INFO_COL];
    let variation_type = required_info_value(info, INFO_TYPE, line_number)?;
    let depth_text = required_info_value(info, INFO_DEPTH, line_number)?;
    let depth = parse_count(depth_text, INFO_DEPTH, line_number)?;
    let supporting_text = required_info_value(info, INFO_SUPPORTING_READS, line_number)?;

    // AO is per allele only on multi-allelic lines
    let supporting: Vec<&str> = if alleles.len() > 1 {
        supporting_text.split(ALLELE_DELIMITER).collect()
    } else {
        vec![supporting_text]
    };
    if supporting.len() != alleles.len() {
        return Err(VcfError::AlleleCountMismatch {
            line: line_number,
            alleles: alleles.len(),
            values: supporting.len(),
        });
    }

    let mut records = Vec::with_capacity(alleles.len());
    for (allele, reads_text) in alleles.iter().zip(supporting) {
        let reads = parse_count(reads_text, INFO_SUPPORTING_READS, line_number)?;
        let percent = percent_supporting(reads, depth)
            .ok_or(VcfError::ZeroDepth { line: line_number })?;

        let mut record_fields: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        record_fields[ALT_COL] = allele.to_string();

        let stats = VariantStats {
            variation_type: variation_type.to_string(),
            depth: depth_text.to_string(),
            supporting_reads: reads_text.to_string(),
            percent_supporting: percent,
        };
        records.push(CanonicalRecord::new(record_fields, stats));
    }

    Ok(records)
}
