//! Constants for frequency lookups.

/// Environment variable name for overriding the frequency service endpoint.
///
/// When set, this overrides [DEFAULT_EXAC_API].
///
/// # Example
///
/// ```bash
/// export EXAC_API=http://localhost:8080/rest/variant/variant/
/// ```
pub const EXAC_API_ENV: &str = "EXAC_API";

/// Default ExAC variant endpoint. The lookup key is appended verbatim.
pub const DEFAULT_EXAC_API: &str = "http://exac.hms.harvard.edu/rest/variant/variant/";

/// JSON attribute holding the allele frequency in a variant response.
pub const ALLELE_FREQ_ATTR: &str = "allele_freq";

/// Default number of lookup workers.
pub const DEFAULT_WORKERS: usize = 200;

/// Queue slots per worker.
pub const QUEUE_SLOTS_PER_WORKER: usize = 2;

/// Name prefix of lookup worker threads.
pub const WORKER_THREAD_PREFIX: &str = "exac-lookup";

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
