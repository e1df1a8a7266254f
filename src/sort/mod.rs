//! Field reordering for Prisma models.
//!
//! - [`classify`]: Decides whether a field line is an identifier, a timestamp, or anything else
//! - [`reorder`]: Rebuilds each model block with ids first and timestamps last
//!
//! The transform is pure: it takes the schema text and returns new text, and
//! never fails.

pub mod classify;
pub mod reorder;

pub use classify::{classify, FieldKind, CREATED_AT_MARKER, UPDATED_AT_MARKER};
pub use reorder::{
    reorder, reorder_with, reorder_with_report, BlockReport, FieldGroups, Reordered, SortOptions,
    DEFAULT_CREATED_AT_LINE, DEFAULT_UPDATED_AT_LINE,
};
