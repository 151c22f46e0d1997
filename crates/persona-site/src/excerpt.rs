//! Plain-text excerpts from markdown bodies.

use std::sync::LazyLock;

use regex::Regex;

static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*_`]+").unwrap());

/// First prose paragraph of a markdown body, with inline markup stripped.
/// Used as the fallback description for listings and feed items.
pub fn excerpt(body: &str) -> String {
    let paragraph = body
        .split("\n\n")
        .map(str::trim)
        .find(|p| {
            !p.is_empty()
                && !p.starts_with('#')
                && !p.starts_with("```")
                && !p.starts_with('>')
                && !p.starts_with("- ")
                && !p.starts_with("<")
        })
        .unwrap_or("");

    let flattened = paragraph.replace('\n', " ");
    let without_links = LINK.replace_all(&flattened, "$1");
    EMPHASIS.replace_all(&without_links, "").trim().to_string()
}
