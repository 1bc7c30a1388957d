use crate::consts::{ALT_COL, CHROM_COL, POS_COL, REF_COL};
use crate::models::LookupKey;
use crate::utils::format_percentage;

///
/// Statistics derived from the INFO column of a variant line.
///
/// `depth` and `supporting_reads` keep the source text verbatim; the percentage is
/// computed from their numeric values.
///
#[derive(PartialEq, Debug, Clone)]
pub struct VariantStats {
    pub variation_type: String,
    pub depth: String,
    pub supporting_reads: String,
    pub percent_supporting: f64,
}

impl VariantStats {
    ///
    /// Render the statistics as the four derived report columns.
    ///
    pub fn to_columns(&self) -> [String; 4] {
        [
            self.variation_type.clone(),
            self.depth.clone(),
            self.supporting_reads.clone(),
            format_percentage(self.percent_supporting),
        ]
    }
}

///
/// One decomposed variant allele.
///
/// `fields` holds every source column in header order, with the ALT column narrowed
/// to this record's single allele.
///
#[derive(PartialEq, Debug, Clone)]
pub struct CanonicalRecord {
    pub fields: Vec<String>,
    pub stats: VariantStats,
    pub key: LookupKey,
}

impl CanonicalRecord {
    pub fn new(fields: Vec<String>, stats: VariantStats) -> Self {
        let key = {
            let field = |i: usize| fields.get(i).map(String::as_str).unwrap_or_default();
            LookupKey::new(field(CHROM_COL), field(POS_COL), field(REF_COL), field(ALT_COL))
        };
        CanonicalRecord { fields, stats, key }
    }

    pub fn chrom(&self) -> &str {
        self.field(CHROM_COL)
    }

    pub fn pos(&self) -> &str {
        self.field(POS_COL)
    }

    pub fn ref_allele(&self) -> &str {
        self.field(REF_COL)
    }

    pub fn alt_allele(&self) -> &str {
        self.field(ALT_COL)
    }

    fn field(&self, i: usize) -> &str {
        self.fields.get(i).map(String::as_str).unwrap_or_default()
    }

    ///
    /// Source columns followed by the derived statistic columns.
    ///
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(self.fields.len() + 5);
        row.extend(self.fields.iter().cloned());
        row.extend(self.stats.to_columns());
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn record() -> CanonicalRecord {
        let fields = ["1", "1158631", ".", "A", "G", "2965.1", ".", "TYPE=snp;DP=10;AO=3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let stats = VariantStats {
            variation_type: "snp".to_string(),
            depth: "10".to_string(),
            supporting_reads: "3".to_string(),
            percent_supporting: 30.0,
        };
        CanonicalRecord::new(fields, stats)
    }

    #[rstest]
    fn test_record_key(record: CanonicalRecord) {
        assert_eq!(record.key.as_str(), "1-1158631-A-G");
        assert_eq!(record.chrom(), "1");
        assert_eq!(record.pos(), "1158631");
        assert_eq!(record.ref_allele(), "A");
        assert_eq!(record.alt_allele(), "G");
    }

    #[rstest]
    fn test_record_row(record: CanonicalRecord) {
        assert_eq!(
            record.to_row(),
            vec![
                "1", "1158631", ".", "A", "G", "2965.1", ".", "TYPE=snp;DP=10;AO=3", "snp", "10",
                "3", "30.0"
            ]
        );
    }
}
