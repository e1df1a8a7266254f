/// Regex patterns for Prisma schema syntax
///
/// All patterns are compiled once at startup using `LazyLock`.
///
/// Prisma keywords are lowercase, so every pattern is case-sensitive.
use std::sync::LazyLock;

use regex::Regex;

/// Build a regex from a compile-time constant pattern.
///
/// # Panics
///
/// Panics if the pattern is invalid. This is acceptable because all patterns
/// in this module are compile-time constants that are verified by tests.
/// The panic occurs at first access of the `LazyLock` static.
fn build_re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| panic!("Invalid regex pattern: {pattern}"))
}

// MODEL: `model Name {` ... `}`, body may not contain a closing brace.
// Capture group 1 is the model name.
pub static MODEL_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| build_re(r"model\s+(\w+)\s+\{[^}]+\}"));

// Identifier field: `id` followed by whitespace, checked against the trimmed line
pub static ID_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| build_re(r"^id\s"));
