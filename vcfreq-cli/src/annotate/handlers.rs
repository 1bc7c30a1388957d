use std::num::NonZeroUsize;
use std::time::Duration;

use anyhow::Result;
use clap::ArgMatches;
use tracing::warn;

use vcfreq::pipeline::{AnnotationOptions, run_annotation};

use super::cli::{API_ARG, INPUT_ARG, OUTPUT_ARG, QUIET_ARG, TIMEOUT_ARG, VERBOSE_ARG, WORKERS_ARG};

///
/// Interpret the boolean-like verbosity token.
///
/// # Returns
/// - `None` when the token is not recognised
///
pub fn parse_verbose_token(token: &str) -> Option<bool> {
    match token {
        "True" | "true" | "1" => Some(true),
        "False" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Collect pipeline options from parsed arguments.
pub fn options_from_matches(matches: &ArgMatches) -> AnnotationOptions {
    let defaults = AnnotationOptions::default();

    let verbose = match matches.get_one::<String>(VERBOSE_ARG) {
        None => false,
        Some(token) => parse_verbose_token(token).unwrap_or_else(|| {
            warn!(
                "Unrecognised verbose value '{}', expected True or False; using concise output",
                token
            );
            false
        }),
    };

    let workers = matches
        .get_one::<NonZeroUsize>(WORKERS_ARG)
        .map(|n| n.get())
        .unwrap_or(defaults.workers);

    let timeout = matches
        .get_one::<u64>(TIMEOUT_ARG)
        .map(|secs| Duration::from_secs(*secs))
        .unwrap_or(defaults.timeout);

    AnnotationOptions {
        verbose,
        workers,
        timeout,
        base_url: matches.get_one::<String>(API_ARG).cloned(),
        show_progress: !matches.get_flag(QUIET_ARG),
    }
}

pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>(INPUT_ARG)
        .expect("Input path is required");
    let output = matches
        .get_one::<String>(OUTPUT_ARG)
        .expect("Output path is required");

    let options = options_from_matches(matches);
    run_annotation(input, output, &options)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::annotate::cli::create_annotate_cli;

    #[rstest]
    #[case("True", Some(true))]
    #[case("true", Some(true))]
    #[case("1", Some(true))]
    #[case("False", Some(false))]
    #[case("false", Some(false))]
    #[case("0", Some(false))]
    #[case("yes", None)]
    #[case("", None)]
    fn test_parse_verbose_token(#[case] token: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_verbose_token(token), expected);
    }

    #[rstest]
    fn test_options_defaults() {
        let matches = create_annotate_cli()
            .try_get_matches_from(["vcfreq", "in.vcf", "out.tsv"])
            .unwrap();
        let options = options_from_matches(&matches);

        assert!(!options.verbose);
        assert_eq!(options.workers, 200);
        assert_eq!(options.timeout, Duration::from_secs(30));
        assert_eq!(options.base_url, None);
        assert!(options.show_progress);
    }

    #[rstest]
    fn test_options_overrides() {
        let matches = create_annotate_cli()
            .try_get_matches_from([
                "vcfreq",
                "in.vcf",
                "out.tsv",
                "true",
                "16",
                "--api",
                "http://localhost:8080/rest/variant/variant/",
                "--timeout",
                "5",
                "--quiet",
            ])
            .unwrap();
        let options = options_from_matches(&matches);

        assert!(options.verbose);
        assert_eq!(options.workers, 16);
        assert_eq!(options.timeout, Duration::from_secs(5));
        assert_eq!(
            options.base_url.as_deref(),
            Some("http://localhost:8080/rest/variant/variant/")
        );
        assert!(!options.show_progress);
    }

    #[rstest]
    fn test_unknown_verbose_token_is_concise() {
        let matches = create_annotate_cli()
            .try_get_matches_from(["vcfreq", "in.vcf", "out.tsv", "maybe"])
            .unwrap();
        assert!(!options_from_matches(&matches).verbose);
    }
}
