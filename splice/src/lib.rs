//! Splice orchestrator.
//!
//! One command invocation: scan the document for image tags, filter down
//! to the eligible set, and for each eligible tag resolve its file, ask
//! the vision model for a description, and rewrite the alt-text span.
//!
//! Edits are applied in strictly descending offset order. Every
//! replacement can change the document's length, so processing
//! earliest-to-latest would invalidate the offsets of every
//! not-yet-processed tag; highest-offset-first keeps each remaining tag's
//! offsets valid because all edits so far land strictly after it.
//!
//! Processing is sequential by design: one generation request in flight
//! at a time, awaited to completion before the next tag begins.

use anyhow::{Context, Result};
use tracing::{debug, info};

use autoalt_config::{render_template, AltTextSettings};
use autoalt_core::{AltGenerator, DocumentBuffer, Vault};
use autoalt_imgtags::{build_image_path, locate_images, TagFilter};

/// Run one generate-and-splice pass over the document.
///
/// `base_dir` is the document's containing folder (vault-relative), or
/// empty at the vault root. Returns the number of replacements issued.
///
/// A tag whose resolved path has no file is skipped silently. A failing
/// generation request aborts the batch; replacements already applied
/// (tags physically later in the document) stay in place.
pub async fn generate_and_update(
    doc: &mut dyn DocumentBuffer,
    vault: &dyn Vault,
    generator: &dyn AltGenerator,
    settings: &AltTextSettings,
    base_dir: &str,
    filter: &TagFilter,
) -> Result<usize> {
    let tags = locate_images(&doc.text());
    let mut eligible: Vec<_> = tags.into_iter().filter(|t| filter.matches(t)).collect();
    debug!(eligible = eligible.len(), "Located eligible image tags");

    // Descending offset order: see module docs.
    eligible.reverse();

    let mut replaced = 0;
    for tag in &eligible {
        let path = build_image_path(base_dir, &tag.target);
        let Some(file) = vault.file_by_path(&path) else {
            debug!(target = %tag.target, path = %path, "No file at resolved path; skipping tag");
            continue;
        };

        let bytes = vault
            .read_binary(&file)
            .await
            .with_context(|| format!("Failed to read image: {}", file.path))?;
        let description = generator
            .generate(&file.name, &bytes, &settings.prompt)
            .await
            .with_context(|| format!("Description generation failed for: {}", file.name))?;

        let rendered = render_template(&settings.template, &description);
        doc.replace_range(tag.alt_begin..tag.alt_end, &rendered);
        replaced += 1;
    }

    info!(replaced, "Applied alt-text replacements");
    Ok(replaced)
}
