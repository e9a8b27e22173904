//! Settings file read/write.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::schema::AltTextSettings;

/// Settings file name within the config directory.
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Resolve the autoalt config directory.
/// Priority: `AUTOALT_CONFIG_DIR` env > `~/.autoalt/`.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("AUTOALT_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".autoalt");
    }
    PathBuf::from(".autoalt")
}

/// Full path to the settings file.
pub fn settings_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(SETTINGS_FILE_NAME)
}

/// Load settings from disk. A missing file means first run: defaults.
/// Stored fields are overlaid on the defaults, so partial or stale files
/// still load.
pub async fn load_settings(path: &Path) -> Result<AltTextSettings> {
    if !path.exists() {
        debug!(path = %path.display(), "Settings file does not exist; using defaults");
        return Ok(AltTextSettings::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    let data: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse settings JSON at: {}", path.display()))?;

    debug!(path = %path.display(), "Loaded settings");
    Ok(AltTextSettings::from_value(data))
}

/// Persist settings to disk (write to temp file, rename). The scrub
/// policy is applied here: unless the sync flag is on, the credential is
/// never written.
pub async fn save_settings(settings: &AltTextSettings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let persistable = settings.to_persistable();
    let json = serde_json::to_string_pretty(&persistable)
        .context("Failed to serialize settings to JSON")?;

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, json.as_bytes())
        .await
        .with_context(|| format!("Failed to write temp settings: {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .await
        .with_context(|| format!("Failed to rename temp settings to: {}", path.display()))?;

    info!(path = %path.display(), "Wrote settings");
    Ok(())
}
