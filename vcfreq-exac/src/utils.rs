use std::env;

use super::consts::{DEFAULT_EXAC_API, EXAC_API_ENV};

/// Get default frequency service endpoint from environment variable
///
/// # Returns
/// - base url that lookup keys are appended to
pub fn get_default_exac_api() -> String {
    env::var(EXAC_API_ENV).unwrap_or_else(|_| DEFAULT_EXAC_API.to_string())
}
