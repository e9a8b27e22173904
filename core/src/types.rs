//! Offset-bearing value types produced by the locator and consumed by the
//! filters and the splice orchestrator.
//!
//! All offsets are byte offsets into the UTF-8 document text, half-open
//! (`begin..end`). The locator and the document buffer share this one
//! convention, so no position translation happens between them.

use serde::{Deserialize, Serialize};

/// One located image embed (`![alt](target "title")`) in a document.
///
/// Invariant: `tag_begin <= alt_begin <= alt_end <= tag_end`. An empty
/// alt span (`alt_begin == alt_end`) marks a tag with missing alt-text.
/// Tags are ephemeral: rebuilt on every scan, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTag {
    /// Raw embed target exactly as written in source (not yet decoded).
    pub target: String,
    /// Byte range of the whole embed syntax.
    pub tag_begin: usize,
    pub tag_end: usize,
    /// Byte range of the alt-text content, nested inside the tag range.
    pub alt_begin: usize,
    pub alt_end: usize,
}

impl ImageTag {
    /// Whether the embed already carries alt-text.
    pub fn has_alt(&self) -> bool {
        self.alt_end > self.alt_begin
    }
}

/// One selection span (or a zero-width caret) supplied by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub begin: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Build a range from two endpoints in either order. A selection's
    /// anchor may sit after its head, so the endpoints are sorted here.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            begin: a.min(b),
            end: a.max(b),
        }
    }

    /// Zero-width range representing a cursor position.
    pub fn caret(offset: usize) -> Self {
        Self {
            begin: offset,
            end: offset,
        }
    }
}

/// Handle to a file found in the vault. Carries the normalized lookup path
/// and the bare file name (used for media-type detection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultFile {
    pub path: String,
    pub name: String,
}

impl VaultFile {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or("").to_string();
        Self { path, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_selection_endpoints_are_sorted() {
        let sel = SelectionRange::new(9, 4);
        assert_eq!(sel.begin, 4);
        assert_eq!(sel.end, 9);
    }

    #[test]
    fn caret_is_zero_width() {
        let sel = SelectionRange::caret(7);
        assert_eq!(sel.begin, sel.end);
    }

    #[test]
    fn vault_file_name_is_last_segment() {
        let file = VaultFile::new("notes/img/cat.png");
        assert_eq!(file.name, "cat.png");
        let root = VaultFile::new("cat.png");
        assert_eq!(root.name, "cat.png");
    }

    #[test]
    fn empty_alt_span_is_missing() {
        let tag = ImageTag {
            target: "a.png".into(),
            tag_begin: 0,
            tag_end: 11,
            alt_begin: 2,
            alt_end: 2,
        };
        assert!(!tag.has_alt());
    }
}
