use log::debug;

use vcfreq_core::FrequencyMap;
use vcfreq_core::consts::{CONCISE_DROPPED_COLUMNS, FREQUENCY_COLUMN};
use vcfreq_vcf::DecomposedVcf;

use crate::error::{ReportError, Result};

///
/// The final annotated table: one row per decomposed record, in decomposition order.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotatedReport {
    /// `##` metadata lines written ahead of the table; empty in concise output.
    pub metadata: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

///
/// Join every record with the frequency resolved for its lookup key.
///
/// Row order is the record order of `vcf`; the map is only read by key, so the
/// order in which lookups completed has no influence on the report.
///
/// # Arguments
/// - vcf: the decomposed input
/// - frequencies: a complete map covering every record's key
///
pub fn merge(vcf: DecomposedVcf, frequencies: &FrequencyMap) -> Result<AnnotatedReport> {
    let mut columns = vcf.columns;
    columns.push(FREQUENCY_COLUMN.to_string());

    let mut rows = Vec::with_capacity(vcf.records.len());
    for (i, record) in vcf.records.iter().enumerate() {
        let frequency = frequencies
            .get(&record.key)
            .ok_or_else(|| ReportError::MissingFrequency(record.key.to_string()))?;

        let mut row = record.to_row();
        row.push(frequency.to_string());
        if row.len() != columns.len() {
            return Err(ReportError::RowWidth {
                row: i,
                expected: columns.len(),
                found: row.len(),
            });
        }
        rows.push(row);
    }

    Ok(AnnotatedReport {
        metadata: vcf.metadata,
        columns,
        rows,
    })
}

fn retain_by_mask(values: Vec<String>, keep: &[bool]) -> Vec<String> {
    values
        .into_iter()
        .zip(keep)
        .filter_map(|(value, &k)| k.then_some(value))
        .collect()
}

impl AnnotatedReport {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Values of one column, top to bottom. `None` if the column is unknown or a
    /// row is too short to hold it.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let i = self.column_index(name)?;
        self.rows
            .iter()
            .map(|row| row.get(i).map(String::as_str))
            .collect()
    }

    ///
    /// Remove the named columns that are present. Absent names are ignored.
    ///
    /// # Returns
    /// - the number of columns removed
    ///
    pub fn drop_columns(&mut self, names: &[&str]) -> usize {
        let keep: Vec<bool> = self
            .columns
            .iter()
            .map(|c| !names.contains(&c.as_str()))
            .collect();
        let dropped = keep.iter().filter(|k| !**k).count();
        if dropped == 0 {
            return 0;
        }

        self.columns = retain_by_mask(std::mem::take(&mut self.columns), &keep);
        for row in self.rows.iter_mut() {
            *row = retain_by_mask(std::mem::take(row), &keep);
        }
        dropped
    }

    ///
    /// Apply the output verbosity: verbose keeps everything, concise drops the
    /// metadata blob and the FILTER/INFO/ID/FORMAT/caller sample columns.
    ///
    pub fn with_verbosity(mut self, verbose: bool) -> Self {
        if !verbose {
            let dropped = self.drop_columns(&CONCISE_DROPPED_COLUMNS);
            debug!("Concise output: dropped {} columns", dropped);
            self.metadata.clear();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use vcfreq_core::{FrequencyResult, LookupKey};
    use vcfreq_vcf::decompose_lines;

    #[fixture]
    fn vcf() -> DecomposedVcf {
        decompose_lines([
            "##fileformat=VCFv4.1",
            "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tnormal",
            "1\t10\trs1\tG\tA,T\t50\tPASS\tTYPE=snp;DP=10;AO=3,2\tGT\t0/1",
            "2\t20\t.\tC\tG\t60\tPASS\tTYPE=snp;DP=4;AO=1\tGT\t1/1",
        ])
        .unwrap()
    }

    #[fixture]
    fn frequencies() -> FrequencyMap {
        vec![
            (LookupKey::new("1", "10", "G", "A"), FrequencyResult::Value("0.25".into())),
            (LookupKey::new("1", "10", "G", "T"), FrequencyResult::NotAvailable),
            (LookupKey::new("2", "20", "C", "G"), FrequencyResult::Error),
        ]
        .into_iter()
        .collect()
    }

    #[rstest]
    fn test_merge_keeps_record_order(vcf: DecomposedVcf, frequencies: FrequencyMap) {
        let report = merge(vcf, &frequencies).unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(report.columns.last().unwrap(), FREQUENCY_COLUMN);
        assert_eq!(report.column("ALT").unwrap(), vec!["A", "T", "G"]);
        assert_eq!(
            report.column(FREQUENCY_COLUMN).unwrap(),
            vec!["0.25", "Not Available", "error"]
        );
        assert_eq!(
            report.column("% Reads Supporting Variant").unwrap(),
            vec!["30.0", "20.0", "25.0"]
        );
        assert_eq!(report.metadata, "##fileformat=VCFv4.1\n");
    }

    #[rstest]
    fn test_merge_missing_frequency(vcf: DecomposedVcf) {
        let partial: FrequencyMap = vec![(
            LookupKey::new("1", "10", "G", "A"),
            FrequencyResult::Value("0.25".into()),
        )]
        .into_iter()
        .collect();

        let err = merge(vcf, &partial).unwrap_err();
        assert!(matches!(err, ReportError::MissingFrequency(ref key) if key == "1-10-G-T"));
    }

    #[rstest]
    fn test_duplicate_keys_share_a_value(frequencies: FrequencyMap) {
        let vcf = decompose_lines([
            "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO",
            "2\t20\t.\tC\tG\t60\tPASS\tTYPE=snp;DP=4;AO=1",
            "2\t20\t.\tC\tG\t61\tPASS\tTYPE=snp;DP=8;AO=1",
        ])
        .unwrap();

        let report = merge(vcf, &frequencies).unwrap();
        assert_eq!(report.len(), 2);
        assert_eq!(report.column("QUAL").unwrap(), vec!["60", "61"]);
        assert_eq!(report.column(FREQUENCY_COLUMN).unwrap(), vec!["error", "error"]);
    }

    #[rstest]
    fn test_concise_drops_present_columns_only(vcf: DecomposedVcf, frequencies: FrequencyMap) {
        let report = merge(vcf, &frequencies).unwrap().with_verbosity(false);

        // vaf5 isn't in this header; that's fine
        assert_eq!(
            report.columns,
            vec![
                "#CHROM",
                "POS",
                "REF",
                "ALT",
                "QUAL",
                "Type of Variation",
                "Sequence Depth Coverage at Variation Site",
                "Number Of Reads Supporting Variant",
                "% Reads Supporting Variant",
                "Allele Frequency of Variant",
            ]
        );
        assert!(report.rows.iter().all(|r| r.len() == report.columns.len()));
        assert_eq!(
            report.rows[0],
            vec!["1", "10", "G", "A", "50", "snp", "10", "3", "30.0", "0.25"]
        );
        assert!(report.metadata.is_empty());
    }

    #[rstest]
    fn test_verbose_keeps_everything(vcf: DecomposedVcf, frequencies: FrequencyMap) {
        let merged = merge(vcf, &frequencies).unwrap();
        let verbose = merged.clone().with_verbosity(true);
        assert_eq!(verbose, merged);
        assert_eq!(verbose.columns.len(), 10 + 4 + 1);
    }

    #[rstest]
    fn test_column_with_short_rows() {
        let report = AnnotatedReport {
            metadata: String::new(),
            columns: vec!["#CHROM".to_string(), "POS".to_string()],
            rows: vec![
                vec!["1".to_string(), "10".to_string()],
                vec!["2".to_string()],
            ],
        };
        assert_eq!(report.column("#CHROM").unwrap(), vec!["1", "2"]);
        assert_eq!(report.column("POS"), None);
        assert_eq!(report.column("QUAL"), None);
    }

    #[rstest]
    fn test_drop_columns_absent() {
        let mut report = AnnotatedReport {
            metadata: String::new(),
            columns: vec!["#CHROM".to_string(), "POS".to_string()],
            rows: vec![vec!["1".to_string(), "10".to_string()]],
        };
        assert_eq!(report.drop_columns(&["FORMAT", "vaf5"]), 0);
        assert_eq!(report.columns.len(), 2);
    }
}
