//! Schema file processing.
//!
//! This module runs the end-to-end sort of one schema file:
//!
//! - [`pipeline`]: Reads the file, reorders its models, and writes the result
//!   back (or prints it, or only checks it)
//! - [`formatter`]: Runs the external Prisma formatter over the written file
//!
//! The formatter only runs after a successful in-place write. If it fails the
//! reordered schema stays on disk unformatted.

pub mod formatter;
pub mod pipeline;

pub use formatter::{run_formatter, FormatterCommand, DEFAULT_FORMATTER};
pub use pipeline::{sort_schema_file, OutputMode, SortOutcome};
