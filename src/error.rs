//! Error types and result aliases for prisma-sort.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//!
//! The reordering transform itself never fails; errors only come from file
//! I/O, configuration loading and the external formatter.

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
