mod annotate;

use std::process::ExitCode;

use anyhow::Result;
use clap::Command;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "vcfreq";
    pub const BIN_NAME: &str = "vcfreq";

    /// A lone `help` argument prints the extended documentation.
    pub const HELP_TOKEN: &str = "help";
}

fn build_parser() -> Command {
    annotate::cli::create_annotate_cli()
        .name(consts::PKG_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
}

/// True for a lone `help` argument, e.g. `vcfreq help`.
fn is_help_request(args: &[String]) -> bool {
    args.len() == 2 && args[1] == consts::HELP_TOKEN
}

/// Long help, including the annotation overview.
fn extended_help() -> String {
    build_parser().render_long_help().to_string()
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // also installs the `log` bridge, so library logs come through here
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if is_help_request(&args) {
        println!("{}", extended_help());
        return Ok(());
    }

    let matches = build_parser().get_matches_from(args);
    init_logging(matches.get_flag(annotate::cli::QUIET_ARG));

    annotate::handlers::run_annotate(&matches)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
