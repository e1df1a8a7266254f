//! prisma-sort - Field reordering for Prisma schema files
//!
//! Puts `id` fields first, sorts the remaining fields alphabetically and keeps
//! `createdAt`/`updatedAt` last, then hands the file to `prisma format`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::struct_excessive_bools)]

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod process;
pub mod sort;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs, DEFAULT_SCHEMA_PATH};
pub use config::Config;
pub use error::Result;
pub use sort::{reorder, reorder_with, SortOptions};
