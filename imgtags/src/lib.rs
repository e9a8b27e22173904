//! Image-tag location and classification.
//!
//! One-pass scan of raw Markdown text for the image-embed micro-grammar
//! `![alt](target "title")`, yielding byte-precise [`ImageTag`] records,
//! plus the path resolver that maps embed targets onto vault paths and
//! the filter policies that decide which tags get (re)generated.

pub mod filter;
pub mod locate;
pub mod path;

pub use filter::TagFilter;
pub use locate::locate_images;
pub use path::build_image_path;
