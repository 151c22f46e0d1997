//! Frontmatter extraction and parsing.

use serde::Deserialize;

/// Raw frontmatter as it appears in a content file.
///
/// Every field is optional at this stage; required-field checks happen when
/// the raw block is promoted to item metadata, so that a missing field can be
/// reported by name instead of as a generic YAML error.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawFrontmatter {
    /// Page title
    #[serde(default)]
    pub title: Option<String>,

    /// Publication date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,

    /// One-line description for listings and feeds
    #[serde(default)]
    pub description: Option<String>,

    /// Canonical URL override
    #[serde(default)]
    pub canonical: Option<String>,

    /// Drafts are skipped at publish time
    #[serde(default)]
    pub draft: bool,
}

/// Extract frontmatter from markdown content.
///
/// Returns the parsed frontmatter and the remaining body after the closing
/// delimiter. Content without a leading `---` has no frontmatter.
pub fn extract_frontmatter(source: &str) -> Result<(Option<RawFrontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    let frontmatter: RawFrontmatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((Some(frontmatter), remaining.trim_start()))
}

/// Errors that can occur when parsing a frontmatter block.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}
