//! prisma-sort - Field reordering for Prisma schema files

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, Write};

use anyhow::Context;
use prisma_sort::process::{run_formatter, sort_schema_file, OutputMode, SortOutcome};
use prisma_sort::{parse_args, CliArgs, Config, Result};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = parse_args();
    let config = build_config(&args)?;

    let mode = if args.stdout {
        OutputMode::Stdout
    } else if args.check {
        OutputMode::Check
    } else {
        OutputMode::InPlace
    };

    if !args.silent && mode == OutputMode::InPlace {
        eprintln!("Sorting: {}", args.schema.display());
    }

    let outcome = sort_schema_file(
        &args.schema,
        &config.sort_options(),
        mode,
        &mut io::stdout(),
    )?;

    if args.debug {
        print_outcome_debug(&outcome);
    }

    match mode {
        OutputMode::Stdout => return Ok(()),
        OutputMode::Check => {
            if outcome.changed {
                anyhow::bail!("{} is not sorted", outcome.path.display());
            }
            if !args.silent {
                eprintln!("{} is already sorted.", outcome.path.display());
            }
            return Ok(());
        }
        OutputMode::InPlace => {}
    }

    if !args.silent {
        eprintln!("Prisma fields sorted successfully!");
    }

    if !config.format {
        return Ok(());
    }

    // The sorted file is already on disk; a formatter failure leaves it unformatted
    let command = config.formatter_command()?;
    if args.debug {
        eprintln!(
            "[DEBUG] Running formatter: {}",
            command.display_for(&outcome.path)
        );
    }
    let formatter_stdout = run_formatter(&command, &outcome.path).with_context(|| {
        format!(
            "{} was sorted but could not be formatted",
            outcome.path.display()
        )
    })?;
    io::stdout().write_all(formatter_stdout.as_bytes())?;

    Ok(())
}

/// Build configuration from CLI args and config files
///
/// An explicit `--config` file replaces auto-discovery, which starts at the
/// schema file's directory.
fn build_config(args: &CliArgs) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        if args.debug {
            eprintln!(
                "[DEBUG] Using explicit config file: {}",
                config_path.display()
            );
        }
        Config::from_toml_file(config_path)?
    } else {
        if args.debug {
            let discovered = Config::discover_config_files(&args.schema);
            if discovered.is_empty() {
                eprintln!(
                    "[DEBUG] No config files discovered for: {}",
                    args.schema.display()
                );
            } else {
                eprintln!("[DEBUG] Discovered config files for {}:", args.schema.display());
                for f in &discovered {
                    eprintln!("[DEBUG]   - {}", f.display());
                }
            }
        }
        Config::from_discovered_files(&args.schema)
    };

    // Override with CLI arguments
    if args.no_format {
        config.format = false;
    }
    if let Some(formatter) = &args.formatter {
        config.formatter.clone_from(formatter);
    }
    if args.no_timestamps {
        config.insert_timestamps = false;
    }

    if args.debug {
        print_config_debug(&config);
    }

    // Validate configuration
    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

/// Print configuration values in debug mode
fn print_config_debug(config: &Config) {
    eprintln!("[DEBUG] Configuration:");
    match toml::to_string(config) {
        Ok(rendered) => {
            for line in rendered.lines() {
                eprintln!("[DEBUG]   {line}");
            }
        }
        Err(e) => eprintln!("[DEBUG]   <unprintable: {e}>"),
    }
}

/// Print per-model field counts in debug mode
fn print_outcome_debug(outcome: &SortOutcome) {
    eprintln!(
        "[DEBUG] {}: {} model(s), changed: {}",
        outcome.path.display(),
        outcome.blocks.len(),
        outcome.changed
    );
    for block in &outcome.blocks {
        eprintln!(
            "[DEBUG]   model {}: {} id, {} fields, {} timestamps, {} injected, {} blank dropped",
            block.name,
            block.identifiers,
            block.others,
            block.timestamps,
            block.injected,
            block.blank_dropped
        );
    }
}
