mod vault;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, warn};

use autoalt_config::{config_dir, load_settings, save_settings, settings_file_path, AltTextSettings};
use autoalt_generation::AltGen;
use autoalt_imgtags::TagFilter;
use autoalt_splice::generate_and_update;
use vault::FsVault;

#[derive(Parser)]
#[command(name = "autoalt")]
#[command(about = "autoalt — generate Markdown image alt-text with a vision model")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate alt-text for image embeds that are missing it
    Missing(GenerateArgs),
    /// Generate or regenerate alt-text for every image embed
    All(GenerateArgs),
    /// Generate or regenerate alt-text for embeds overlapping a selection
    Selection {
        #[command(flatten)]
        args: GenerateArgs,
        /// Byte range BEGIN..END; repeatable. Reversed endpoints are accepted.
        #[arg(long = "range", value_parser = parse_range)]
        ranges: Vec<(usize, usize)>,
        /// Cursor byte offset (zero-width selection)
        #[arg(long)]
        cursor: Option<usize>,
    },
    /// Inspect or update stored settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Markdown document to update in place
    file: PathBuf,
    /// Vault root directory (defaults to the document's folder)
    #[arg(long)]
    vault: Option<PathBuf>,
    /// Override the configured model identifier
    #[arg(long)]
    model: Option<String>,
    /// API key (falls back to AUTOALT_API_KEY, then ANTHROPIC_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
    /// Override the configured prompt
    #[arg(long)]
    prompt: Option<String>,
    /// Override the configured output template
    #[arg(long)]
    template: Option<String>,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print stored settings with the credential masked
    Show,
    /// Update stored settings
    Set {
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        api_key: Option<String>,
        #[arg(long)]
        prompt: Option<String>,
        #[arg(long)]
        template: Option<String>,
        /// Opt in (true) or out (false) of persisting the API key to disk
        #[arg(long)]
        sync_sensitive: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Missing(args) => run_generate(args, TagFilter::Missing).await,
        Commands::All(args) => run_generate(args, TagFilter::All).await,
        Commands::Selection {
            args,
            ranges,
            cursor,
        } => {
            let mut ranges = ranges;
            if let Some(offset) = cursor {
                ranges.push((offset, offset));
            }
            if ranges.is_empty() {
                bail!("selection needs at least one --range or a --cursor");
            }
            run_generate(args, TagFilter::selection(ranges)).await
        }
        Commands::Config { command } => run_config(command).await,
    }
}

async fn run_generate(args: GenerateArgs, filter: TagFilter) -> Result<()> {
    let settings = effective_settings(&args).await?;
    if settings.api_key.is_empty() {
        bail!("no API key: pass --api-key, set AUTOALT_API_KEY/ANTHROPIC_API_KEY, or store one with `autoalt config set`");
    }

    let mut text = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("Failed to read document: {}", args.file.display()))?;

    let doc_dir = args
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let vault_root = args.vault.clone().unwrap_or_else(|| doc_dir.clone());
    let base_dir = base_dir_for(&doc_dir, &vault_root);
    debug!(vault = %vault_root.display(), base_dir = %base_dir, "Resolved vault layout");

    let vault = FsVault::new(&vault_root);
    let generator = AltGen::new(&settings.api_key, &settings.model);

    let replaced =
        generate_and_update(&mut text, &vault, &generator, &settings, &base_dir, &filter).await?;

    if replaced > 0 {
        tokio::fs::write(&args.file, &text)
            .await
            .with_context(|| format!("Failed to write document: {}", args.file.display()))?;
    }
    println!(
        "{}: {} alt-text{} updated",
        args.file.display(),
        replaced,
        if replaced == 1 { "" } else { "s" }
    );
    Ok(())
}

/// Stored settings overlaid with command-line and environment overrides.
async fn effective_settings(args: &GenerateArgs) -> Result<AltTextSettings> {
    let mut settings = load_settings(&settings_file_path(&config_dir())).await?;
    if let Some(model) = &args.model {
        settings.model = model.clone();
    }
    if let Some(prompt) = &args.prompt {
        settings.prompt = prompt.clone();
    }
    if let Some(template) = &args.template {
        settings.template = template.clone();
    }
    if let Some(key) = &args.api_key {
        settings.api_key = key.clone();
    } else if let Ok(key) = std::env::var("AUTOALT_API_KEY") {
        settings.api_key = key;
    } else if settings.api_key.is_empty() {
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            settings.api_key = key;
        }
    }
    Ok(settings)
}

async fn run_config(command: ConfigCommands) -> Result<()> {
    let path = settings_file_path(&config_dir());
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(&path).await?;
            let mut value = serde_json::to_value(&settings)?;
            if let Some(obj) = value.as_object_mut() {
                if !settings.api_key.is_empty() {
                    obj.insert("apiKey".into(), serde_json::Value::String("***".into()));
                }
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        ConfigCommands::Set {
            model,
            api_key,
            prompt,
            template,
            sync_sensitive,
        } => {
            let mut settings = load_settings(&path).await?;
            if let Some(model) = model {
                settings.model = model;
            }
            if let Some(key) = api_key {
                settings.api_key = key;
            }
            if let Some(prompt) = prompt {
                settings.prompt = prompt;
            }
            if let Some(template) = template {
                settings.template = template;
            }
            if let Some(sync) = sync_sensitive {
                settings.sync_sensitive_settings = sync;
            }
            if !settings.api_key.is_empty() && !settings.sync_sensitive_settings {
                warn!("API key will NOT be persisted; enable --sync-sensitive true to store it (unencrypted)");
            }
            save_settings(&settings, &path).await?;
            println!("Settings written to {}", path.display());
        }
    }
    Ok(())
}

/// Vault-relative base directory of the document's folder, empty at the
/// vault root (or when the folder sits outside the vault).
fn base_dir_for(doc_dir: &Path, vault_root: &Path) -> String {
    match doc_dir.strip_prefix(vault_root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => String::new(),
    }
}

/// Parse `BEGIN..END` into an endpoint pair. Order is normalized later.
fn parse_range(s: &str) -> Result<(usize, usize), String> {
    let (a, b) = s
        .split_once("..")
        .ok_or_else(|| format!("expected BEGIN..END, got: {s}"))?;
    let begin = a.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let end = b.trim().parse::<usize>().map_err(|e| e.to_string())?;
    Ok((begin, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ranges_in_either_order() {
        assert_eq!(parse_range("3..17").unwrap(), (3, 17));
        assert_eq!(parse_range("17..3").unwrap(), (17, 3));
        assert!(parse_range("17").is_err());
        assert!(parse_range("a..b").is_err());
    }

    #[test]
    fn base_dir_is_relative_to_vault_root() {
        assert_eq!(
            base_dir_for(Path::new("vault/notes/daily"), Path::new("vault")),
            "notes/daily"
        );
        assert_eq!(base_dir_for(Path::new("vault"), Path::new("vault")), "");
        // Outside the vault: root-relative fallback.
        assert_eq!(base_dir_for(Path::new("elsewhere"), Path::new("vault")), "");
    }
}
