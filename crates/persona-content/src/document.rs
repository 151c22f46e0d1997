//! Content items and their validation.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::frontmatter::{extract_frontmatter, FrontmatterError, RawFrontmatter};

/// A single validated content document.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    /// Unique, filename-derived identifier
    pub slug: String,

    /// Section directory under the content root (e.g. `posts`), empty for
    /// top-level pages
    pub section: String,

    /// Page title
    pub title: String,

    /// Publication date
    pub date: NaiveDate,

    /// One-line description
    pub description: Option<String>,

    /// Canonical URL override from frontmatter
    pub canonical: Option<String>,

    /// Raw markdown body with the frontmatter stripped
    pub body: String,

    /// Drafts are loaded but never published
    pub draft: bool,
}

impl ContentItem {
    /// Parse and validate one content document.
    ///
    /// The slug and section are derived from the file location by the loader;
    /// this function owns the frontmatter contract: `title` and `date` are
    /// required, and `date` must be a real calendar date.
    pub fn parse(source: &str, slug: String, section: String) -> Result<Self, ContentError> {
        let (frontmatter, body) = extract_frontmatter(source)?;

        let raw = frontmatter.ok_or(ContentError::MissingField { field: "title" })?;

        Self::from_raw(raw, body.to_string(), slug, section)
    }

    fn from_raw(
        raw: RawFrontmatter,
        body: String,
        slug: String,
        section: String,
    ) -> Result<Self, ContentError> {
        let title = match raw.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(ContentError::MissingField { field: "title" }),
        };

        let date_str = match raw.date {
            Some(d) if !d.trim().is_empty() => d,
            _ => return Err(ContentError::MissingField { field: "date" }),
        };

        let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
            .map_err(|_| ContentError::InvalidDate { value: date_str })?;

        Ok(Self {
            slug,
            section,
            title,
            date,
            description: raw.description.filter(|d| !d.trim().is_empty()),
            canonical: raw.canonical.filter(|c| !c.trim().is_empty()),
            body,
            draft: raw.draft,
        })
    }

    /// Site-relative output path without extension, e.g. `posts/hello`.
    pub fn output_stem(&self) -> String {
        if self.section.is_empty() {
            self.slug.clone()
        } else {
            format!("{}/{}", self.section, self.slug)
        }
    }

    /// Site-relative HTML output path.
    pub fn html_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.html", self.output_stem()))
    }

    /// Site-relative markdown output path.
    pub fn md_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.md", self.output_stem()))
    }

    /// Canonical absolute URL, honoring a frontmatter override.
    pub fn canonical_url(&self, base_url: &str) -> String {
        if let Some(canonical) = &self.canonical {
            return canonical.clone();
        }
        format!("{}/{}.html", base_url.trim_end_matches('/'), self.output_stem())
    }
}

/// Errors for a single malformed content document.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("missing required frontmatter field `{field}`")]
    MissingField { field: &'static str },

    #[error("invalid date `{value}` (expected YYYY-MM-DD)")]
    InvalidDate { value: String },

    #[error("duplicate slug `{slug}` (already defined by another file)")]
    DuplicateSlug { slug: String },

    #[error(transparent)]
    Frontmatter(#[from] FrontmatterError),

    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),
}
