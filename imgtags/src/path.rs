//! Embed-target path resolution.
//!
//! Embed targets are commonly percent-encoded (spaces in particular), so
//! the raw target is decoded first, joined onto the document's folder, and
//! normalized into a vault-relative forward-slash path. Remote URLs are
//! not distinguished from local paths; an `https://...` target simply
//! resolves to a path no vault lookup will ever find, and the tag is
//! skipped downstream. No existence check happens here.

use std::borrow::Cow;

/// Resolve a raw embed target against a base directory into a normalized
/// vault path. An empty `base_dir` means the vault root.
pub fn build_image_path(base_dir: &str, raw_target: &str) -> String {
    let decoded = match urlencoding::decode(raw_target) {
        Ok(s) => s,
        // Undecodable sequences: keep the target as written.
        Err(_) => Cow::Borrowed(raw_target),
    };
    if base_dir.is_empty() {
        normalize_path(&decoded)
    } else {
        normalize_path(&format!("{}/{}", base_dir, decoded))
    }
}

/// Collapse a path to canonical vault form: forward slashes only, no
/// empty or `.` segments, `..` resolved against preceding segments (a
/// leading `..` that cannot pop anything is dropped rather than escaping
/// the vault root).
fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}
