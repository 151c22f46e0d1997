//! Filename to slug conversion.

use std::path::Path;

/// Derive a URL-safe slug from a content file name.
///
/// `content/posts/2026-02-14-memory.md` becomes `2026-02-14-memory`.
/// Characters outside `[a-z0-9-]` are folded to dashes and runs collapse.
pub fn slug_from_filename(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");

    slugify(stem)
}

/// Convert arbitrary text to a URL-safe slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
