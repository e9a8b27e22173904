//! Filesystem-backed vault.
//!
//! Lookup paths are vault-relative forward-slash paths as produced by the
//! path resolver; they are joined onto the vault root for actual I/O.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use autoalt_core::{Vault, VaultFile};

pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Vault for FsVault {
    fn file_by_path(&self, path: &str) -> Option<VaultFile> {
        let full = self.root.join(path);
        full.is_file().then(|| VaultFile::new(path))
    }

    async fn read_binary(&self, file: &VaultFile) -> Result<Vec<u8>> {
        let full = self.root.join(&file.path);
        tokio::fs::read(&full)
            .await
            .with_context(|| format!("Failed to read image file: {}", full.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn finds_and_reads_existing_files() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("img")).unwrap();
        std::fs::write(dir.path().join("img/a.png"), b"pngbytes").unwrap();

        let vault = FsVault::new(dir.path());
        let file = vault.file_by_path("img/a.png").expect("file should resolve");
        assert_eq!(file.name, "a.png");
        assert_eq!(vault.read_binary(&file).await.unwrap(), b"pngbytes");
    }

    #[tokio::test]
    async fn missing_and_non_file_paths_do_not_resolve() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("img")).unwrap();

        let vault = FsVault::new(dir.path());
        assert!(vault.file_by_path("img/missing.png").is_none());
        // Directories are not files.
        assert!(vault.file_by_path("img").is_none());
    }
}
