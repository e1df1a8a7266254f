//! Field line classification
//!
//! Every non-blank body line of a model block falls into exactly one
//! [`FieldKind`]. Checks are textual: the identifier check looks at the
//! first token, the timestamp check is a plain substring search.

use crate::parser::patterns::ID_FIELD_RE;

/// Marker for the creation timestamp field
pub const CREATED_AT_MARKER: &str = "createdAt";

/// Marker for the update timestamp field
pub const UPDATED_AT_MARKER: &str = "updatedAt";

/// Category of a field line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Primary key field (`id ...`), placed first
    Identifier,
    /// `createdAt` / `updatedAt` field, placed last
    Timestamp,
    /// Everything else, sorted alphabetically
    Other,
}

/// Classify a field line
///
/// The identifier check wins over the timestamp check, so
/// `id String @default(createdAt)` is an identifier.
#[must_use]
pub fn classify(line: &str) -> FieldKind {
    if is_identifier_field(line) {
        FieldKind::Identifier
    } else if is_timestamp_field(line) {
        FieldKind::Timestamp
    } else {
        FieldKind::Other
    }
}

/// Check if the trimmed line starts with `id` followed by whitespace
#[must_use]
pub fn is_identifier_field(line: &str) -> bool {
    ID_FIELD_RE.is_match(line.trim())
}

/// Check if the line mentions either timestamp marker
#[must_use]
pub fn is_timestamp_field(line: &str) -> bool {
    mentions_created_at(line) || mentions_updated_at(line)
}

#[must_use]
pub fn mentions_created_at(line: &str) -> bool {
    line.contains(CREATED_AT_MARKER)
}

#[must_use]
pub fn mentions_updated_at(line: &str) -> bool {
    line.contains(UPDATED_AT_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_identifier() {
        assert_eq!(classify("  id String @id"), FieldKind::Identifier);
        assert_eq!(classify("id Int @id @default(autoincrement())"), FieldKind::Identifier);
        assert_eq!(classify("\tid\tString"), FieldKind::Identifier);
    }

    #[test]
    fn test_classify_timestamp() {
        assert_eq!(classify("  createdAt DateTime @default(now())"), FieldKind::Timestamp);
        assert_eq!(classify("  updatedAt DateTime @updatedAt"), FieldKind::Timestamp);
        // Substring match, not field name match
        assert_eq!(classify("  lastUpdatedAt DateTime"), FieldKind::Other);
        assert_eq!(classify("  postCreatedAt DateTime"), FieldKind::Other);
        assert_eq!(classify("  createdAtLocal String"), FieldKind::Timestamp);
    }

    #[test]
    fn test_classify_identifier_precedence() {
        assert_eq!(
            classify("  id String @default(createdAt)"),
            FieldKind::Identifier
        );
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify("  email String @unique"), FieldKind::Other);
        assert_eq!(classify("  identity String"), FieldKind::Other);
        assert_eq!(classify("  userId String"), FieldKind::Other);
        assert_eq!(classify("  @@index([email])"), FieldKind::Other);
    }

    #[test]
    fn test_both_markers_on_one_line() {
        let line = "  touched DateTime // createdAt or updatedAt";
        assert_eq!(classify(line), FieldKind::Timestamp);
        assert!(mentions_created_at(line));
        assert!(mentions_updated_at(line));
    }
}
