//! Bounded-concurrency lookup engine.
//!
//! ```text
//!   keys ──► bounded queue (2 × workers) ──► worker 1 ─┐
//!                                        ├─► worker 2 ─┼─► DashMap<LookupKey, FrequencyResult>
//!                                        └─► worker W ─┘
//! ```
//!
//! The submitting thread blocks until the queue is drained and every worker has
//! exited, so the returned map is always complete.

use std::thread;

use crossbeam_channel::bounded;
use dashmap::DashMap;
use fxhash::FxHashSet;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use vcfreq_core::{FrequencyMap, FrequencyResult, LookupKey};

use super::consts::{QUEUE_SLOTS_PER_WORKER, WORKER_THREAD_PREFIX};
use super::error::{EnrichError, Result};

/// Anything that can resolve a lookup key to a frequency.
///
/// Implementations are shared by all workers, hence `Sync`. Failures must be
/// reported as [FrequencyResult::Error], never by panicking.
pub trait FrequencySource: Sync {
    fn fetch(&self, key: &LookupKey) -> FrequencyResult;
}

impl<F> FrequencySource for F
where
    F: Fn(&LookupKey) -> FrequencyResult + Sync,
{
    fn fetch(&self, key: &LookupKey) -> FrequencyResult {
        self(key)
    }
}

/// Fixed pool of lookup workers over a [FrequencySource].
pub struct EnrichmentEngine<S: FrequencySource> {
    source: S,
    workers: usize,
    show_progress: bool,
}

impl<S: FrequencySource> EnrichmentEngine<S> {
    ///
    /// Create an engine with `workers` lookup threads.
    ///
    /// # Errors
    /// - [EnrichError::InvalidWorkerCount] when `workers` is zero
    ///
    pub fn new(source: S, workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(EnrichError::InvalidWorkerCount(workers));
        }
        Ok(EnrichmentEngine {
            source,
            workers,
            show_progress: false,
        })
    }

    /// Draw a progress bar on stderr while lookups run.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    ///
    /// Resolve every key, returning one entry per distinct key.
    ///
    /// Duplicate keys are looked up once. Blocks until all lookups have finished.
    ///
    /// # Errors
    /// - [EnrichError::WorkerSpawn] when the OS refuses a worker thread
    ///
    pub fn resolve<'k, I>(&self, keys: I) -> Result<FrequencyMap>
    where
        I: IntoIterator<Item = &'k LookupKey>,
    {
        let mut seen: FxHashSet<&LookupKey> = FxHashSet::default();
        let distinct: Vec<&LookupKey> = keys.into_iter().filter(|k| seen.insert(*k)).collect();
        drop(seen);

        let total = distinct.len();
        if total == 0 {
            return Ok(FrequencyMap::new());
        }

        let n_workers = self.workers.min(total);
        let results: DashMap<LookupKey, FrequencyResult> = DashMap::with_capacity(total);
        let bar = self.progress_bar(total as u64);
        let (key_tx, key_rx) = bounded::<&LookupKey>(n_workers * QUEUE_SLOTS_PER_WORKER);

        debug!("Starting {} lookup workers for {} keys", n_workers, total);

        thread::scope(|scope| -> Result<()> {
            for i in 0..n_workers {
                let rx = key_rx.clone();
                let results = &results;
                let bar = &bar;
                let source = &self.source;

                let spawned = thread::Builder::new()
                    .name(format!("{}-{}", WORKER_THREAD_PREFIX, i))
                    .spawn_scoped(scope, move || {
                        for key in rx {
                            let value = source.fetch(key);
                            results.insert(key.clone(), value);
                            bar.inc(1);
                        }
                    });

                if let Err(e) = spawned {
                    // closing the channel lets the workers already running exit
                    drop(key_tx);
                    drop(key_rx);
                    return Err(EnrichError::WorkerSpawn {
                        spawned: i,
                        requested: n_workers,
                        source: e,
                    });
                }
            }

            // Drop our copy so workers see a closed channel once the sender is gone
            drop(key_rx);

            for key in distinct {
                if key_tx.send(key).is_err() {
                    break; // all workers gone
                }
            }
            drop(key_tx);
            Ok(())
        })
        .inspect_err(|_| bar.abandon())?;

        bar.finish_and_clear();

        let map: FrequencyMap = results.into_iter().collect();
        debug_assert_eq!(map.len(), total);

        let (not_available, errors) = map.sentinel_counts();
        info!(
            "Resolved {} allele frequencies with {} workers ({} not available, {} errors)",
            map.len(),
            n_workers,
            not_available,
            errors
        );

        Ok(map)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lookups ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
        );
        bar
    }
}
