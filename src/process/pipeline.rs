//! Read, reorder, write pipeline
//!
//! Runs the steps strictly in sequence:
//! - Read the schema file (nothing is written if this fails)
//! - Reorder every model block
//! - Write the result back, print it, or only compare it, depending on [`OutputMode`]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::sort::{reorder_with_report, BlockReport, SortOptions};
use crate::Result;

/// What to do with the reordered schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Overwrite the schema file in place
    #[default]
    InPlace,
    /// Write the result to the given writer, leave the file untouched
    Stdout,
    /// Only report whether the file would change
    Check,
}

/// Result of sorting one schema file
#[derive(Debug, Clone)]
pub struct SortOutcome {
    /// Absolute path of the schema file
    pub path: PathBuf,
    /// Whether reordering changed the text
    pub changed: bool,
    /// Whether the file on disk was rewritten
    pub written: bool,
    /// Per-model summaries
    pub blocks: Vec<BlockReport>,
}

/// Sort the fields of a schema file
///
/// In [`OutputMode::Stdout`] the sorted text goes to `output`; the other
/// modes do not touch it.
pub fn sort_schema_file<W: Write>(
    path: &Path,
    options: &SortOptions,
    mode: OutputMode,
    output: &mut W,
) -> Result<SortOutcome> {
    let schema_path = std::path::absolute(path)
        .with_context(|| format!("Error resolving schema path {}", path.display()))?;

    let original = std::fs::read_to_string(&schema_path)
        .with_context(|| format!("Error reading schema file {}", schema_path.display()))?;

    let reordered = reorder_with_report(&original, options);
    let changed = reordered.text != original;

    let written = match mode {
        OutputMode::InPlace => {
            std::fs::write(&schema_path, &reordered.text).with_context(|| {
                format!("Error writing sorted schema {}", schema_path.display())
            })?;
            true
        }
        OutputMode::Stdout => {
            output.write_all(reordered.text.as_bytes())?;
            false
        }
        OutputMode::Check => false,
    };

    Ok(SortOutcome {
        path: schema_path,
        changed,
        written,
        blocks: reordered.blocks,
    })
}
