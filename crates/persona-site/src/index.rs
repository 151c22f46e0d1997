//! The site index: an ordered view over all published items.

use chrono::NaiveDate;
use persona_content::ContentItem;

use crate::excerpt::excerpt;

/// A lightweight reference to one published page.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub slug: String,
    pub section: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Site-relative path, e.g. `posts/memory.html`
    pub path: String,
    /// Absolute canonical URL
    pub url: String,
}

/// All published pages, sorted newest first, ties broken by slug ascending.
///
/// Rebuilt wholesale on every build from the loaded items; the discovery
/// index, feed, and sitemap all read from this one ordering, so the three
/// documents always agree.
#[derive(Debug, Default)]
pub struct SiteIndex {
    entries: Vec<IndexEntry>,
}

impl SiteIndex {
    pub fn from_items(items: &[ContentItem], base_url: &str) -> Self {
        let mut entries: Vec<IndexEntry> = items
            .iter()
            .map(|item| IndexEntry {
                slug: item.slug.clone(),
                section: item.section.clone(),
                title: item.title.clone(),
                description: item
                    .description
                    .clone()
                    .unwrap_or_else(|| excerpt(&item.body)),
                date: item.date,
                path: format!("{}.html", item.output_stem()),
                url: item.canonical_url(base_url),
            })
            .collect();

        entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

        Self { entries }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Newest publication date across the index, if any.
    pub fn newest_date(&self) -> Option<NaiveDate> {
        self.entries.first().map(|e| e.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(slug: &str, date: &str) -> ContentItem {
        ContentItem::parse(
            &format!("---\ntitle: {slug}\ndate: {date}\ndescription: d\n---\nbody"),
            slug.into(),
            "posts".into(),
        )
        .unwrap()
    }

    #[test]
    fn orders_by_date_descending() {
        let items = vec![item("a", "2026-02-14"), item("b", "2026-02-16")];

        let index = SiteIndex::from_items(&items, "https://persona.example");
        let slugs: Vec<_> = index.entries().iter().map(|e| e.slug.as_str()).collect();

        assert_eq!(slugs, vec!["b", "a"]);
    }

    #[test]
    fn equal_dates_break_ties_by_slug_ascending() {
        let items = vec![
            item("zebra", "2026-02-14"),
            item("apple", "2026-02-14"),
            item("mango", "2026-02-14"),
        ];

        let index = SiteIndex::from_items(&items, "https://persona.example");
        let slugs: Vec<_> = index.entries().iter().map(|e| e.slug.as_str()).collect();

        assert_eq!(slugs, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn ordering_is_idempotent_across_rebuilds() {
        let items = vec![
            item("b", "2026-02-16"),
            item("a", "2026-02-14"),
            item("c", "2026-02-16"),
        ];

        let first = SiteIndex::from_items(&items, "https://persona.example");
        let second = SiteIndex::from_items(&items, "https://persona.example");

        assert_eq!(first.entries(), second.entries());
    }

    #[test]
    fn entry_paths_and_urls_agree() {
        let items = vec![item("memory", "2026-02-14")];

        let index = SiteIndex::from_items(&items, "https://persona.example");
        let entry = &index.entries()[0];

        assert_eq!(entry.path, "posts/memory.html");
        assert_eq!(entry.url, "https://persona.example/posts/memory.html");
    }

    #[test]
    fn missing_description_falls_back_to_excerpt() {
        let item = ContentItem::parse(
            "---\ntitle: T\ndate: 2026-01-01\n---\nOpening line of the body.\n\nMore text.",
            "t".into(),
            "posts".into(),
        )
        .unwrap();

        let index = SiteIndex::from_items(&[item], "https://persona.example");

        assert_eq!(index.entries()[0].description, "Opening line of the body.");
    }
}
