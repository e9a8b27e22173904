//! Vision generation — describe images with a vision-capable LLM.
//!
//! The engine hands this crate a file name, raw image bytes, and a prompt;
//! it infers a media type from the extension, base64-encodes the bytes,
//! and asks the Anthropic Messages API for a description.

pub mod altgen;
pub mod mime;

pub use altgen::AltGen;
pub use mime::media_type_for;
