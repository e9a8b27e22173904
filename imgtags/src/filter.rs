//! Tag filter policies.
//!
//! Pure predicates deciding which located tags are eligible for
//! (re)generation. Selection ranges are normalized once at construction,
//! so `matches` stays a cheap comparison in the orchestrator's loop.

use autoalt_core::{ImageTag, SelectionRange};

/// Which located tags a command should (re)generate.
#[derive(Debug, Clone)]
pub enum TagFilter {
    /// Only tags with empty alt-text.
    Missing,
    /// Every tag.
    All,
    /// Tags overlapping any of the given selection ranges (the host adds a
    /// zero-width caret range when no selection exists).
    Selection(Vec<SelectionRange>),
}

impl TagFilter {
    /// Build a selection filter, normalizing each raw endpoint pair. A
    /// selection's anchor may be placed after its head.
    pub fn selection(ranges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self::Selection(
            ranges
                .into_iter()
                .map(|(a, b)| SelectionRange::new(a, b))
                .collect(),
        )
    }

    pub fn matches(&self, tag: &ImageTag) -> bool {
        match self {
            Self::Missing => !tag.has_alt(),
            Self::All => true,
            Self::Selection(ranges) => ranges.iter().any(|sel| overlaps(sel, tag)),
        }
    }
}

/// Inclusive interval intersection of a selection with `[tag_begin,
/// tag_end]`. Boundary-inclusive on purpose: a caret sitting exactly on an
/// embed's edge still selects it.
fn overlaps(sel: &SelectionRange, tag: &ImageTag) -> bool {
    sel.begin <= tag.tag_end && sel.end >= tag.tag_begin
}
