//! Settings for the autoalt tool.
//!
//! A single JSON settings file holds the provider credential, model
//! identifier, prompt, and output template. The credential is sensitive:
//! unless the user explicitly opts in, it is scrubbed before anything is
//! written to disk and must be re-supplied each session.

pub mod io;
pub mod schema;

pub use io::{config_dir, load_settings, save_settings, settings_file_path};
pub use schema::{render_template, AltTextSettings, DESC_TOKEN};
