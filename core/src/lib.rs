//! Core types, collaborator traits, and the error enum shared by every
//! autoalt crate.
//!
//! The engine never touches the host application directly: the document
//! buffer, the vault, and the vision model are all reached through the
//! traits defined here, so the whole pipeline can run against in-memory
//! fakes in tests.

pub mod error;
pub mod traits;
pub mod types;

pub use error::AltTextError;
pub use traits::{AltGenerator, DocumentBuffer, Vault};
pub use types::{ImageTag, SelectionRange, VaultFile};
