//! Prisma schema scanning.
//!
//! This module finds the pieces of a schema the reorderer works on:
//! - [`block`]: Locates `model` blocks and splits them into header, body and footer
//! - [`patterns`]: Precompiled regex patterns for Prisma syntax elements
//!
//! Scanning is purely textual. Nested blocks and multi-line attributes are
//! not understood; a block ends at the first closing brace.

pub mod block;
pub mod patterns;

pub use block::{find_model_blocks, BlockLines, ModelBlock};
