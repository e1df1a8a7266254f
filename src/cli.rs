//! Command-line interface for prisma-sort.
//!
//! Defines CLI arguments using clap builder API

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

/// Schema location used when no path is given
pub const DEFAULT_SCHEMA_PATH: &str = "./prisma/schema.prisma";

/// CLI arguments parsed from command line
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Prisma schema file to sort
    pub schema: PathBuf,

    /// Print the sorted schema instead of writing it
    pub stdout: bool,

    /// Exit with an error if the schema is not already sorted
    pub check: bool,

    /// Skip the external formatter
    pub no_format: bool,

    /// Formatter command override
    pub formatter: Option<String>,

    /// Don't inject default createdAt/updatedAt fields
    pub no_timestamps: bool,

    /// Config file path
    pub config: Option<PathBuf>,

    /// Silent mode (no status output)
    pub silent: bool,

    /// Enable debug output
    pub debug: bool,
}

/// Build the clap Command for parsing CLI arguments
#[must_use]
pub fn build_cli() -> Command {
    Command::new("prisma-sort")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort Prisma model fields: id first, fields alphabetically, timestamps last")
        .arg(
            Arg::new("schema")
                .help("Prisma schema file to sort")
                .value_name("SCHEMA")
                .default_value(DEFAULT_SCHEMA_PATH)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stdout")
                .short('s')
                .long("stdout")
                .help("Print the sorted schema to stdout instead of modifying the file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Fail if the schema is not sorted, without modifying it")
                .action(ArgAction::SetTrue)
                .conflicts_with("stdout"),
        )
        .arg(
            Arg::new("no-format")
                .long("no-format")
                .help("Don't run the formatter after sorting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("formatter")
                .long("formatter")
                .help("Formatter command to run after sorting [default: npx prisma format]")
                .value_name("CMD"),
        )
        .arg(
            Arg::new("no-timestamps")
                .long("no-timestamps")
                .help("Don't add missing createdAt/updatedAt fields")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file (overrides auto-discovery)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("debug")
                .short('D')
                .long("debug")
                .help("Enable debug output (shows config, per-model field counts, formatter command)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('S')
                .long("silent")
                .help("Silent mode (no status output)")
                .action(ArgAction::SetTrue),
        )
}

/// Parse CLI arguments from command line
#[must_use]
pub fn parse_args() -> CliArgs {
    args_from_matches(&build_cli().get_matches())
}

/// Parse CLI arguments from an iterator (for testing)
#[must_use]
pub fn parse_args_from<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    args_from_matches(&build_cli().get_matches_from(args))
}

/// Convert clap `ArgMatches` to `CliArgs`
fn args_from_matches(matches: &clap::ArgMatches) -> CliArgs {
    CliArgs {
        schema: matches
            .get_one::<PathBuf>("schema")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH)),
        stdout: matches.get_flag("stdout"),
        check: matches.get_flag("check"),
        no_format: matches.get_flag("no-format"),
        formatter: matches.get_one::<String>("formatter").cloned(),
        no_timestamps: matches.get_flag("no-timestamps"),
        config: matches.get_one::<PathBuf>("config").cloned(),
        silent: matches.get_flag("silent"),
        debug: matches.get_flag("debug"),
    }
}
