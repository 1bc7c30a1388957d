//! INFO column access.

use vcfreq_core::consts::INFO_DELIMITER;
use vcfreq_core::errors::{Result, VcfError};

///
/// Value of `key` in a `;`-separated `key=value` INFO blob, if present.
///
/// Only an exact key match counts: looking up `DP` does not match `DPB=...`.
///
pub fn info_value<'a>(info: &'a str, key: &str) -> Option<&'a str> {
    info.split(INFO_DELIMITER)
        .find_map(|entry| entry.strip_prefix(key)?.strip_prefix('='))
}

/// Like [info_value], but a missing key is an error for `line`.
pub fn required_info_value<'a>(info: &'a str, key: &'static str, line: usize) -> Result<&'a str> {
    info_value(info, key).ok_or(VcfError::MissingInfoKey { line, key })
}

///
/// Parse a read count or depth. Must be a finite, non-negative number.
///
pub fn parse_count(text: &str, key: &'static str, line: usize) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(VcfError::InvalidNumber {
            line,
            key,
            value: text.to_string(),
        }),
    }
}
