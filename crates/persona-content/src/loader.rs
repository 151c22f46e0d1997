//! Content directory loading.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::document::{ContentError, ContentItem};
use crate::slug::slug_from_filename;

/// One file that failed to load, with the reason.
#[derive(Debug)]
pub struct LoadFailure {
    /// Source file path
    pub path: PathBuf,

    /// What was wrong with it
    pub error: ContentError,
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

/// Result of loading a content directory.
///
/// A malformed file lands in `failures` and never aborts the load; callers
/// decide whether any failure makes the overall run unsuccessful.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Successfully validated, publishable items
    pub items: Vec<ContentItem>,

    /// Per-file failures
    pub failures: Vec<LoadFailure>,

    /// Number of drafts skipped
    pub drafts_skipped: usize,
}

/// Load every markdown file under `content_dir`.
///
/// The section of an item is its parent directory relative to the content
/// root (`content/posts/x.md` → section `posts`). Slugs must be unique across
/// the whole site; a second file claiming a taken slug fails that file.
pub fn load_content(content_dir: &Path) -> Result<LoadOutcome, std::io::Error> {
    if !content_dir.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("content directory not found: {}", content_dir.display()),
        ));
    }

    let mut outcome = LoadOutcome::default();
    let mut seen_slugs: HashSet<String> = HashSet::new();

    for entry in WalkDir::new(content_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "md" {
            continue;
        }

        match load_one(path, content_dir, &mut seen_slugs) {
            Ok(Some(item)) => outcome.items.push(item),
            Ok(None) => {
                tracing::debug!("Skipping draft: {}", path.display());
                outcome.drafts_skipped += 1;
            }
            Err(error) => {
                tracing::warn!("Skipping {}: {}", path.display(), error);
                outcome.failures.push(LoadFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    Ok(outcome)
}

fn load_one(
    path: &Path,
    content_dir: &Path,
    seen_slugs: &mut HashSet<String>,
) -> Result<Option<ContentItem>, ContentError> {
    let source = fs::read_to_string(path)?;

    let slug = slug_from_filename(path);
    let section = section_of(path, content_dir);

    let item = ContentItem::parse(&source, slug, section)?;

    if item.draft {
        return Ok(None);
    }

    if !seen_slugs.insert(item.output_stem()) {
        return Err(ContentError::DuplicateSlug {
            slug: item.slug.clone(),
        });
    }

    Ok(Some(item))
}

/// Parent directory of a file relative to the content root, as the section.
fn section_of(path: &Path, content_dir: &Path) -> String {
    path.strip_prefix(content_dir)
        .ok()
        .and_then(|rel| rel.parent())
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn loads_items_across_sections() {
        let temp = tempdir().unwrap();
        write(
            temp.path(),
            "posts/first.md",
            "---\ntitle: First\ndate: 2026-02-14\n---\nbody one",
        );
        write(
            temp.path(),
            "about.md",
            "---\ntitle: About\ndate: 2026-01-01\n---\nbody two",
        );

        let outcome = load_content(temp.path()).unwrap();

        assert_eq!(outcome.items.len(), 2);
        assert!(outcome.failures.is_empty());

        let first = outcome.items.iter().find(|i| i.slug == "first").unwrap();
        assert_eq!(first.section, "posts");

        let about = outcome.items.iter().find(|i| i.slug == "about").unwrap();
        assert_eq!(about.section, "");
    }

    #[test]
    fn malformed_file_fails_alone() {
        let temp = tempdir().unwrap();
        write(
            temp.path(),
            "posts/good.md",
            "---\ntitle: Good\ndate: 2026-02-14\n---\nok",
        );
        write(temp.path(), "posts/bad.md", "---\ntitle: No Date\n---\nnope");

        let outcome = load_content(temp.path()).unwrap();

        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.items[0].slug, "good");
        assert_eq!(outcome.failures.len(), 1);
        assert!(outcome.failures[0].path.ends_with("posts/bad.md"));
        assert!(matches!(
            outcome.failures[0].error,
            ContentError::MissingField { field: "date" }
        ));
    }

    #[test]
    fn duplicate_slug_fails_later_file() {
        let temp = tempdir().unwrap();
        write(
            temp.path(),
            "posts/echo.md",
            "---\ntitle: Echo\ndate: 2026-02-14\n---\none",
        );
        // Same stem after slug sanitation
        write(
            temp.path(),
            "posts/echo .md",
            "---\ntitle: Echo Too\ndate: 2026-02-15\n---\ntwo",
        );

        let outcome = load_content(temp.path()).unwrap();

        assert_eq!(outcome.items.len(), 1);
        assert_eq!(outcome.failures.len(), 1);
        assert!(matches!(
            outcome.failures[0].error,
            ContentError::DuplicateSlug { .. }
        ));
    }

    #[test]
    fn drafts_are_skipped_silently() {
        let temp = tempdir().unwrap();
        write(
            temp.path(),
            "posts/wip.md",
            "---\ntitle: WIP\ndate: 2026-02-14\ndraft: true\n---\nnot yet",
        );

        let outcome = load_content(temp.path()).unwrap();

        assert!(outcome.items.is_empty());
        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.drafts_skipped, 1);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let missing = PathBuf::from("/definitely/not/here");
        assert!(load_content(&missing).is_err());
    }

    #[test]
    fn non_markdown_files_are_ignored() {
        let temp = tempdir().unwrap();
        write(temp.path(), "posts/notes.txt", "not content");

        let outcome = load_content(temp.path()).unwrap();

        assert!(outcome.items.is_empty());
        assert!(outcome.failures.is_empty());
    }
}
