//! End-to-end annotation: parse, decompose, enrich, merge, write.
//!
//! The output file is only created once every lookup has resolved, so a run
//! that fails or is interrupted part way never leaves a partial report behind.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use vcfreq_core::FrequencyMap;
use vcfreq_exac::consts::{DEFAULT_TIMEOUT_SECS, DEFAULT_WORKERS};
use vcfreq_exac::{EnrichmentEngine, ExacClient, FrequencySource};
use vcfreq_io::{AnnotatedReport, merge, write_report};
use vcfreq_vcf::{DecomposedVcf, decompose_vcf};

/// Knobs for a full annotation run.
#[derive(Debug, Clone)]
pub struct AnnotationOptions {
    /// Keep metadata and every source column
    pub verbose: bool,
    /// Number of concurrent lookups
    pub workers: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// Frequency endpoint; `None` means `$EXAC_API` or the public ExAC server
    pub base_url: Option<String>,
    pub show_progress: bool,
}

impl Default for AnnotationOptions {
    fn default() -> Self {
        AnnotationOptions {
            verbose: false,
            workers: DEFAULT_WORKERS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            base_url: None,
            show_progress: false,
        }
    }
}

///
/// Resolve frequencies for every record of `vcf` and build the report.
///
/// # Arguments
/// - vcf: decomposed input
/// - engine: the lookup pool
/// - verbose: keep metadata and every source column
///
pub fn annotate<S: FrequencySource>(
    vcf: DecomposedVcf,
    engine: &EnrichmentEngine<S>,
    verbose: bool,
) -> Result<AnnotatedReport> {
    let frequencies: FrequencyMap = engine.resolve(vcf.keys())?;
    let report = merge(vcf, &frequencies).context("Failed to merge allele frequencies")?;
    Ok(report.with_verbosity(verbose))
}

///
/// Annotate `input` using an existing engine and write the report to `output`.
///
/// # Returns
/// - the number of rows written
///
pub fn annotate_file<S, P, Q>(
    input: P,
    output: Q,
    engine: &EnrichmentEngine<S>,
    verbose: bool,
) -> Result<usize>
where
    S: FrequencySource,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let output = output.as_ref();

    info!("Parsing VCF...");
    let vcf = decompose_vcf(input)?;

    info!("Fetching allele frequencies...");
    let report = annotate(vcf, engine, verbose)?;

    write_report(&report, output)
        .with_context(|| format!("Failed to write report: {}", output.display()))?;
    info!("Wrote {} rows to {}", report.len(), output.display());

    Ok(report.len())
}

///
/// Run the whole pipeline against the ExAC service.
///
/// # Arguments
/// - input: VCF path (plain or gzipped)
/// - output: report path; `.gz` selects gzip output
/// - options: verbosity, worker count, timeout and endpoint
///
pub fn run_annotation<P, Q>(input: P, output: Q, options: &AnnotationOptions) -> Result<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut builder = ExacClient::builder().with_timeout(options.timeout);
    if let Some(url) = &options.base_url {
        builder = builder.with_base_url(url.clone());
    }
    let client = builder.finish()?;
    info!("Using frequency endpoint {}", client.base_url);

    let engine = EnrichmentEngine::new(client, options.workers)?.with_progress(options.show_progress);

    let rows = annotate_file(input, output, &engine, options.verbose)?;
    info!("Done!");

    Ok(rows)
}
