//! VCF reading.
//!
//! Reads a VCF file (plain text or gzipped/bgzf) line by line and feeds it through
//! a [VcfDecomposer].

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use vcfreq_core::errors::Result as VcfResult;
use vcfreq_core::utils::get_dynamic_reader;

use crate::decompose::{DecomposedVcf, VcfDecomposer};

/// Decompose every line produced by `reader`.
pub fn decompose_reader<R: BufRead>(mut reader: R) -> VcfResult<DecomposedVcf> {
    let mut decomposer = VcfDecomposer::new();
    let mut line_buf = String::new();

    loop {
        line_buf.clear();
        if reader.read_line(&mut line_buf)? == 0 {
            break;
        }
        decomposer.push_line(&line_buf)?;
    }

    Ok(decomposer.finish())
}

/// Decompose lines already held in memory.
pub fn decompose_lines<I, S>(lines: I) -> VcfResult<DecomposedVcf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut decomposer = VcfDecomposer::new();
    for line in lines {
        decomposer.push_line(line.as_ref())?;
    }
    Ok(decomposer.finish())
}

/// Open a VCF file, auto-detecting gzip/bgzf compression, and decompose it.
pub fn decompose_vcf<P: AsRef<Path>>(path: P) -> Result<DecomposedVcf> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    let vcf = decompose_reader(reader)
        .with_context(|| format!("Failed to decompose VCF: {}", path.display()))?;

    info!(
        "Decomposed {} variant lines from {} into {} records",
        vcf.variant_lines,
        path.display(),
        vcf.len()
    );

    Ok(vcf)
}
