use thiserror::Error;

/// Configuration and thread-pool errors of the enrichment engine and its client.
///
/// Per-key lookup failures never surface here; they resolve to
/// [FrequencyResult::Error](vcfreq_core::FrequencyResult::Error).
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Worker count must be a positive integer, got {0}")]
    InvalidWorkerCount(usize),

    #[error("Frequency service URL must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),

    #[error("Request timeout must be greater than zero")]
    InvalidTimeout,

    #[error("Failed to spawn lookup worker ({spawned} of {requested} running)")]
    WorkerSpawn {
        spawned: usize,
        requested: usize,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EnrichError>;
