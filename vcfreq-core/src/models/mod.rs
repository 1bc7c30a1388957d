pub mod frequency;
pub mod key;
pub mod record;

// re-export for cleaner imports
pub use self::frequency::{FrequencyMap, FrequencyResult};
pub use self::key::LookupKey;
pub use self::record::{CanonicalRecord, VariantStats};
