//! Sitemap and robots.txt generation.

use crate::index::SiteIndex;

/// Build the sitemap: the home page, the demos page, then every published
/// item's canonical URL in index order.
pub fn build_sitemap(base_url: &str, index: &SiteIndex) -> String {
    let base = base_url.trim_end_matches('/');

    let mut urls: Vec<String> = vec![format!("{base}/"), format!("{base}/demos.html")];
    urls.extend(index.entries().iter().map(|e| e.url.clone()));

    let entries: Vec<String> = urls
        .iter()
        .map(|url| format!("  <url>\n    <loc>{}</loc>\n  </url>", url))
        .collect();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
        entries.join("\n")
    )
}

/// Companion robots.txt pointing crawlers at the sitemap.
pub fn build_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_content::ContentItem;

    #[test]
    fn sitemap_lists_every_canonical_url() {
        let item = ContentItem::parse(
            "---\ntitle: Memory\ndate: 2026-02-14\n---\nbody",
            "memory".into(),
            "posts".into(),
        )
        .unwrap();
        let index = SiteIndex::from_items(&[item], "https://persona.example");

        let xml = build_sitemap("https://persona.example/", &index);

        assert!(xml.contains("<loc>https://persona.example/</loc>"));
        assert!(xml.contains("<loc>https://persona.example/demos.html</loc>"));
        assert!(xml.contains("<loc>https://persona.example/posts/memory.html</loc>"));
    }

    #[test]
    fn robots_points_at_sitemap() {
        let robots = build_robots("https://persona.example");

        assert!(robots.contains("Sitemap: https://persona.example/sitemap.xml"));
    }
}
