use std::ops::Range;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::VaultFile;

/// The host's live document buffer.
///
/// The engine never mutates text directly; every edit goes through
/// `replace_range`, which owns the real mutation (and any position
/// remapping for other views the host may display).
pub trait DocumentBuffer: Send {
    /// Snapshot of the full document text.
    fn text(&self) -> String;

    /// Splice `replacement` over the byte range `range` of the document.
    fn replace_range(&mut self, range: Range<usize>, replacement: &str);
}

/// An owned string is the simplest document buffer: offsets are byte
/// offsets into the buffer itself, the same convention the locator uses.
impl DocumentBuffer for String {
    fn text(&self) -> String {
        self.clone()
    }

    fn replace_range(&mut self, range: Range<usize>, replacement: &str) {
        String::replace_range(self, range, replacement);
    }
}

/// File lookup and binary read against the host's vault.
#[async_trait]
pub trait Vault: Send + Sync {
    /// Find a file at a normalized vault-relative path. `None` means the
    /// target is unresolvable (missing, or a remote URL we don't handle).
    fn file_by_path(&self, path: &str) -> Option<VaultFile>;

    /// Read the file's raw bytes.
    async fn read_binary(&self, file: &VaultFile) -> Result<Vec<u8>>;
}

/// Vision-model collaborator: turn image bytes into a description string.
#[async_trait]
pub trait AltGenerator: Send + Sync {
    async fn generate(&self, filename: &str, image: &[u8], prompt: &str) -> Result<String>;
}
