use std::fmt::{self, Display};

use fxhash::FxHashMap;

use crate::consts::{LOOKUP_ERROR, NOT_AVAILABLE};
use crate::models::LookupKey;

///
/// Outcome of one allele-frequency lookup.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum FrequencyResult {
    /// The service returned an allele frequency, kept as the service rendered it.
    Value(String),
    /// The service answered but has no frequency for the allele.
    NotAvailable,
    /// The request failed, timed out, or returned an unusable body.
    Error,
}

impl FrequencyResult {
    pub fn as_str(&self) -> &str {
        match self {
            FrequencyResult::Value(v) => v,
            FrequencyResult::NotAvailable => NOT_AVAILABLE,
            FrequencyResult::Error => LOOKUP_ERROR,
        }
    }
}

impl Display for FrequencyResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Completed mapping from lookup key to frequency, one entry per distinct key.
///
#[derive(Debug, Clone, Default)]
pub struct FrequencyMap {
    entries: FxHashMap<LookupKey, FrequencyResult>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &LookupKey) -> Option<&FrequencyResult> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count how many lookups ended in each sentinel: `(not_available, errors)`.
    pub fn sentinel_counts(&self) -> (usize, usize) {
        self.entries
            .values()
            .fold((0, 0), |(na, err), value| match value {
                FrequencyResult::NotAvailable => (na + 1, err),
                FrequencyResult::Error => (na, err + 1),
                FrequencyResult::Value(_) => (na, err),
            })
    }
}

impl FromIterator<(LookupKey, FrequencyResult)> for FrequencyMap {
    fn from_iter<T: IntoIterator<Item = (LookupKey, FrequencyResult)>>(iter: T) -> Self {
        FrequencyMap {
            entries: iter.into_iter().collect(),
        }
    }
}
