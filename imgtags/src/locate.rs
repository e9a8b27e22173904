//! Image-embed locator.
//!
//! Recognizes the flat micro-grammar only: `!`, a bracketed alt span that
//! the first `]` terminates (nested brackets are not supported), then
//! immediately a parenthesized target, optionally followed by whitespace
//! and a title clause that is discarded. Neither span crosses a newline.
//! Malformed embeds simply never match; that is a precision limitation,
//! not an error.

use once_cell::sync::Lazy;
use regex::Regex;

use autoalt_core::ImageTag;

static IMAGE_EMBED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]\n]*)\]\(([^)\s]*)(?:\s+[^)\n]*)?\)").unwrap());

/// Scan the whole document text and return every image embed, leftmost
/// first, non-overlapping, with byte-offset ranges for the full tag and
/// for the alt-text span.
///
/// The target is returned exactly as written; decoding and normalization
/// belong to [`crate::path::build_image_path`].
pub fn locate_images(text: &str) -> Vec<ImageTag> {
    IMAGE_EMBED
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).unwrap();
            let alt = caps.get(1).unwrap();
            let target = caps.get(2).unwrap();
            ImageTag {
                target: target.as_str().to_string(),
                tag_begin: whole.start(),
                tag_end: whole.end(),
                alt_begin: alt.start(),
                alt_end: alt.end(),
            }
        })
        .collect()
}
