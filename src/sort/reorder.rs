//! Model field reordering
//!
//! Rewrites the body of every model block as:
//! 1. identifier fields, in their original order
//! 2. other fields, sorted by trimmed text
//! 3. timestamp fields, in their original order, followed by any injected defaults
//!
//! Blank body lines are dropped. Everything outside model blocks, and the
//! header and footer line of each block, is copied through unchanged.

use crate::parser::{find_model_blocks, BlockLines};

use super::classify::{classify, mentions_created_at, mentions_updated_at, FieldKind};

/// Line injected when a model has no `createdAt` field
pub const DEFAULT_CREATED_AT_LINE: &str = "    createdAt DateTime @default(now())";

/// Line injected when a model has no `updatedAt` field
pub const DEFAULT_UPDATED_AT_LINE: &str = "    updatedAt DateTime @updatedAt";

/// Options controlling the reorder transform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptions {
    /// Inject default timestamp fields when missing (default: true)
    pub insert_timestamps: bool,
    /// Line injected for a missing `createdAt`
    pub created_at_line: String,
    /// Line injected for a missing `updatedAt`
    pub updated_at_line: String,
}

impl Default for SortOptions {
    fn default() -> Self {
        SortOptions {
            insert_timestamps: true,
            created_at_line: DEFAULT_CREATED_AT_LINE.to_string(),
            updated_at_line: DEFAULT_UPDATED_AT_LINE.to_string(),
        }
    }
}

/// Body lines of one model, grouped by [`FieldKind`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldGroups<'a> {
    pub identifiers: Vec<&'a str>,
    pub others: Vec<&'a str>,
    pub timestamps: Vec<&'a str>,
    /// Number of blank lines dropped from the body
    pub blank: usize,
}

impl<'a> FieldGroups<'a> {
    /// Group body lines, dropping blank ones
    #[must_use]
    pub fn from_body(body: &[&'a str]) -> Self {
        let mut groups = FieldGroups::default();
        for &line in body {
            if line.trim().is_empty() {
                groups.blank += 1;
                continue;
            }
            match classify(line) {
                FieldKind::Identifier => groups.identifiers.push(line),
                FieldKind::Timestamp => groups.timestamps.push(line),
                FieldKind::Other => groups.others.push(line),
            }
        }
        groups
    }

    /// Sort the other fields by trimmed text
    ///
    /// Stable, so lines with equal trimmed text keep their original order.
    pub fn sort_others(&mut self) {
        self.others.sort_by(|a, b| a.trim().cmp(b.trim()));
    }

    /// Default timestamp lines this model is missing, `createdAt` first
    #[must_use]
    pub fn missing_timestamps<'o>(&self, options: &'o SortOptions) -> Vec<&'o str> {
        let mut missing = Vec::new();
        if !options.insert_timestamps {
            return missing;
        }
        if !self.timestamps.iter().any(|line| mentions_created_at(line)) {
            missing.push(options.created_at_line.as_str());
        }
        if !self.timestamps.iter().any(|line| mentions_updated_at(line)) {
            missing.push(options.updated_at_line.as_str());
        }
        missing
    }
}

/// Summary of what happened to one model block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockReport {
    pub name: String,
    pub identifiers: usize,
    pub others: usize,
    pub timestamps: usize,
    /// Number of default timestamp lines injected (0-2)
    pub injected: usize,
    /// Number of blank lines dropped
    pub blank_dropped: usize,
}

/// Result of reordering a whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reordered {
    /// The transformed document
    pub text: String,
    /// One report per rewritten model block, in document order
    pub blocks: Vec<BlockReport>,
}

/// Reorder every model block using the default options
#[must_use]
pub fn reorder(document: &str) -> String {
    reorder_with(document, &SortOptions::default())
}

/// Reorder every model block using the given options
#[must_use]
pub fn reorder_with(document: &str, options: &SortOptions) -> String {
    reorder_with_report(document, options).text
}

/// Reorder every model block and report per-block field counts
#[must_use]
pub fn reorder_with_report(document: &str, options: &SortOptions) -> Reordered {
    let mut text = String::with_capacity(document.len() + 128);
    let mut blocks = Vec::new();
    let mut last_end = 0;

    for block in find_model_blocks(document) {
        text.push_str(&document[last_end..block.span.start]);
        // Blocks without a `model Name {` header line are left alone
        if let Some(lines) = block.lines() {
            let (rebuilt, report) = rebuild_block(block.name, &lines, options);
            text.push_str(&rebuilt);
            blocks.push(report);
        } else {
            text.push_str(block.text);
        }
        last_end = block.span.end;
    }
    text.push_str(&document[last_end..]);

    Reordered { text, blocks }
}

/// Reassemble one block: header, ids, sorted others, timestamps, footer
fn rebuild_block(
    name: &str,
    lines: &BlockLines<'_>,
    options: &SortOptions,
) -> (String, BlockReport) {
    let mut groups = FieldGroups::from_body(&lines.body);
    groups.sort_others();
    let injected = groups.missing_timestamps(options);

    let mut out: Vec<&str> = Vec::with_capacity(lines.body.len() + injected.len() + 2);
    out.push(lines.header);
    out.extend(&groups.identifiers);
    out.extend(&groups.others);
    out.extend(&groups.timestamps);
    out.extend(&injected);
    out.push(lines.footer);

    let report = BlockReport {
        name: name.to_string(),
        identifiers: groups.identifiers.len(),
        others: groups.others.len(),
        timestamps: groups.timestamps.len(),
        injected: injected.len(),
        blank_dropped: groups.blank,
    };
    (out.join("\n"), report)
}
