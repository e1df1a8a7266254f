//! Model block detection
//!
//! Locates `model Name { ... }` spans in a schema document and splits each
//! span into its header line, body lines and footer line.

use std::ops::Range;

use super::patterns::MODEL_BLOCK_RE;

/// A model block matched in a schema document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBlock<'a> {
    /// Model name (the identifier after `model`)
    pub name: &'a str,
    /// Byte range of the matched block in the document
    pub span: Range<usize>,
    /// Matched text, from `model` through the closing `}`
    pub text: &'a str,
}

/// The lines of a model block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLines<'a> {
    /// First line, e.g. `model User {`
    pub header: &'a str,
    /// Lines between header and footer, blank lines included
    pub body: Vec<&'a str>,
    /// Last line, normally `}`
    pub footer: &'a str,
}

impl<'a> ModelBlock<'a> {
    /// Split the block into header, body and footer lines
    ///
    /// Returns `None` for a block written on a single line, which has no
    /// separate header and footer, and for a block whose `{` sits on its own
    /// line, where the brace would otherwise be sorted as a field.
    #[must_use]
    pub fn lines(&self) -> Option<BlockLines<'a>> {
        let mut lines: Vec<&'a str> = self.text.split('\n').collect();
        if lines.len() < 2 {
            return None;
        }
        let footer = lines.pop()?;
        let header = lines.remove(0);
        if !header.contains('{') {
            return None;
        }
        Some(BlockLines {
            header,
            body: lines,
            footer,
        })
    }
}

/// Find every model block in a document, in document order
#[must_use]
pub fn find_model_blocks(document: &str) -> Vec<ModelBlock<'_>> {
    MODEL_BLOCK_RE
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(ModelBlock {
                name: name.as_str(),
                span: whole.range(),
                text: whole.as_str(),
            })
        })
        .collect()
}
