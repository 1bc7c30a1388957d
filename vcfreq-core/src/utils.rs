use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or a plain text file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = matches!(
        path.extension().and_then(OsStr::to_str),
        Some("gz") | Some("bgz")
    );
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    // 256KB buffer for large VCF files
    Ok(BufReader::with_capacity(256 * 1024, file))
}

///
/// Percentage of reads supporting an allele, `100 * supporting / depth`.
///
/// Returns `None` when depth is zero.
///
pub fn percent_supporting(supporting: f64, depth: f64) -> Option<f64> {
    if depth == 0.0 {
        return None;
    }
    Some(100.0 * supporting / depth)
}

///
/// Format a percentage as its shortest round-trip decimal, keeping a trailing `.0`
/// on integral values (`30.0`, `33.333333333333336`). Very small values switch to
/// Rust's exponent form (`5e-5`).
///
pub fn format_percentage(value: f64) -> String {
    format!("{:?}", value)
}
