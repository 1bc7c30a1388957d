use std::fmt::{self, Display};

use crate::consts::KEY_DELIMITER;

///
/// Lookup key of one decomposed allele: `chromosome-position-reference-alternative`.
///
/// The same string is used as the query path of the frequency service and as the
/// join key between a [CanonicalRecord](crate::CanonicalRecord) and its frequency.
/// The decomposer only admits numeric positions and alleles free of `-`, so the
/// key can always be split back from the right into its four parts.
///
#[derive(Eq, PartialEq, Hash, Ord, PartialOrd, Debug, Clone)]
pub struct LookupKey(String);

impl LookupKey {
    pub fn new(chrom: &str, pos: &str, ref_allele: &str, alt_allele: &str) -> Self {
        let mut key =
            String::with_capacity(chrom.len() + pos.len() + ref_allele.len() + alt_allele.len() + 3);
        key.push_str(chrom);
        key.push(KEY_DELIMITER);
        key.push_str(pos);
        key.push(KEY_DELIMITER);
        key.push_str(ref_allele);
        key.push(KEY_DELIMITER);
        key.push_str(alt_allele);
        LookupKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    ///
    /// Split the key back into `(chrom, pos, ref, alt)`.
    ///
    /// Chromosome names may themselves contain `-`, so the split runs from the right.
    ///
    pub fn parts(&self) -> Option<(&str, &str, &str, &str)> {
        let mut it = self.0.rsplitn(4, KEY_DELIMITER);
        let alt = it.next()?;
        let ref_allele = it.next()?;
        let pos = it.next()?;
        let chrom = it.next()?;
        Some((chrom, pos, ref_allele, alt))
    }
}

impl Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LookupKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
