use std::num::NonZeroUsize;

use clap::{Arg, ArgAction, Command, value_parser};

use vcfreq::exac::consts::{DEFAULT_TIMEOUT_SECS, DEFAULT_WORKERS, EXAC_API_ENV};

pub const ANNOTATE_CMD: &str = "vcfreq";

pub const INPUT_ARG: &str = "input";
pub const OUTPUT_ARG: &str = "output";
pub const VERBOSE_ARG: &str = "verbose";
pub const WORKERS_ARG: &str = "workers";
pub const API_ARG: &str = "api";
pub const TIMEOUT_ARG: &str = "timeout";
pub const QUIET_ARG: &str = "quiet";

const EXTENDED_HELP: &str = "\
Each variant line of the input VCF is split into one row per alternative allele.
For every allele four columns are derived from INFO:

  Type of Variation                           TYPE
  Sequence Depth Coverage at Variation Site   DP
  Number Of Reads Supporting Variant          AO (the allele's own value)
  % Reads Supporting Variant                  100 * AO / DP

The allele frequency of each chrom-pos-ref-alt key is then fetched from the ExAC
variant API and appended as 'Allele Frequency of Variant'. Variants ExAC does not
know are reported as 'Not Available'; failed lookups (HTTP errors, timeouts,
unreadable responses) are reported as 'error' and never stop the run.

Verbose output keeps the ## metadata lines and every input column. Concise output
drops the metadata and the FILTER, INFO, ID, FORMAT, normal and vaf5 columns.

Inputs ending in .gz or .bgz are decompressed; an output ending in .gz is written
gzip compressed. Set RUST_LOG to control log verbosity.

Examples:
  vcfreq sample.vcf annotated.tsv
  vcfreq sample.vcf.gz annotated.tsv.gz true 50";

pub fn create_annotate_cli() -> Command {
    Command::new(ANNOTATE_CMD)
        .author("Databio")
        .about("Split multi-allelic VCF records and annotate each allele with its ExAC allele frequency.")
        .arg_required_else_help(true)
        .after_long_help(EXTENDED_HELP)
        .arg(
            Arg::new(INPUT_ARG)
                .required(true)
                .help("Path to the input VCF file (plain, .gz or .bgz)"),
        )
        .arg(
            Arg::new(OUTPUT_ARG)
                .required(true)
                .help("Path to the tab-delimited output (.gz for gzip)"),
        )
        .arg(
            Arg::new(VERBOSE_ARG)
                .help("Keep metadata and every input column: True/False (default False)"),
        )
        .arg(
            Arg::new(WORKERS_ARG)
                .value_parser(value_parser!(NonZeroUsize))
                .help(format!(
                    "Number of concurrent frequency lookups (default {})",
                    DEFAULT_WORKERS
                )),
        )
        .arg(
            Arg::new(API_ARG)
                .long(API_ARG)
                .value_name("URL")
                .help(format!(
                    "Base URL of the variant endpoint (default: ${} or the public ExAC server)",
                    EXAC_API_ENV
                )),
        )
        .arg(
            Arg::new(TIMEOUT_ARG)
                .long(TIMEOUT_ARG)
                .value_name("SECONDS")
                .value_parser(value_parser!(u64).range(1..))
                .help(format!(
                    "Per-request timeout in seconds (default {})",
                    DEFAULT_TIMEOUT_SECS
                )),
        )
        .arg(
            Arg::new(QUIET_ARG)
                .long(QUIET_ARG)
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Only log warnings and errors; no progress bar"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_cli_definition() {
        create_annotate_cli().debug_assert();
    }

    #[rstest]
    fn test_positionals() {
        let matches = create_annotate_cli()
            .try_get_matches_from(["vcfreq", "in.vcf", "out.tsv", "True", "8"])
            .unwrap();

        assert_eq!(matches.get_one::<String>(INPUT_ARG).unwrap(), "in.vcf");
        assert_eq!(matches.get_one::<String>(OUTPUT_ARG).unwrap(), "out.tsv");
        assert_eq!(matches.get_one::<String>(VERBOSE_ARG).unwrap(), "True");
        assert_eq!(
            matches.get_one::<NonZeroUsize>(WORKERS_ARG).unwrap().get(),
            8
        );
        assert_eq!(matches.get_one::<u64>(TIMEOUT_ARG), None);
        assert!(!matches.get_flag(QUIET_ARG));
    }

    #[rstest]
    #[case(&["vcfreq", "in.vcf"])]
    #[case(&["vcfreq", "in.vcf", "out.tsv", "False", "many"])]
    #[case(&["vcfreq", "in.vcf", "out.tsv", "False", "0"])]
    #[case(&["vcfreq", "in.vcf", "out.tsv", "--timeout", "0"])]
    fn test_usage_errors(#[case] args: &[&str]) {
        assert!(create_annotate_cli().try_get_matches_from(args).is_err());
    }

    #[rstest]
    fn test_no_arguments_shows_help() {
        let err = create_annotate_cli()
            .try_get_matches_from(["vcfreq"])
            .unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }
}
