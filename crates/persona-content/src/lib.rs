//! Markdown content loading for the persona site.
//!
//! This crate reads a directory of markdown files with YAML frontmatter and
//! produces validated [`ContentItem`] records. Malformed files are reported
//! per-file rather than failing the whole load.

pub mod document;
pub mod frontmatter;
pub mod loader;
pub mod slug;

pub use document::{ContentError, ContentItem};
pub use frontmatter::{extract_frontmatter, FrontmatterError, RawFrontmatter};
pub use loader::{load_content, LoadFailure, LoadOutcome};
pub use slug::slug_from_filename;
