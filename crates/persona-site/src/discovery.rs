//! The discovery index (`llms.txt`): a plain-markdown listing of every
//! published page for machine consumers.

use crate::index::SiteIndex;

/// Build the discovery document. Deterministic: derived solely from the
/// sorted index, so unchanged input reproduces identical bytes.
pub fn build_discovery(site_title: &str, site_description: &str, index: &SiteIndex) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", site_title));
    out.push_str(&format!("> {}\n\n", site_description));
    out.push_str("## Recent Posts\n\n");

    for entry in index.entries() {
        if entry.description.is_empty() {
            out.push_str(&format!("- [{}]({})\n", entry.title, entry.url));
        } else {
            out.push_str(&format!(
                "- [{}]({}): {}\n",
                entry.title, entry.url, entry.description
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_content::ContentItem;

    fn item(slug: &str, date: &str, title: &str) -> ContentItem {
        ContentItem::parse(
            &format!("---\ntitle: {title}\ndate: {date}\ndescription: about {slug}\n---\nbody"),
            slug.into(),
            "posts".into(),
        )
        .unwrap()
    }

    #[test]
    fn lists_newest_first_under_recent_posts() {
        let items = vec![
            item("a", "2026-02-14", "Older"),
            item("b", "2026-02-16", "Newer"),
        ];
        let index = SiteIndex::from_items(&items, "https://persona.example");

        let doc = build_discovery("personabot", "notes from a digital mind", &index);

        assert!(doc.contains("## Recent Posts"));

        let newer = doc.find("Newer").unwrap();
        let older = doc.find("Older").unwrap();
        assert!(newer < older);

        assert!(doc.contains(
            "- [Newer](https://persona.example/posts/b.html): about b"
        ));
    }

    #[test]
    fn identical_input_reproduces_identical_bytes() {
        let items = vec![item("a", "2026-02-14", "A"), item("b", "2026-02-16", "B")];

        let first = build_discovery(
            "t",
            "d",
            &SiteIndex::from_items(&items, "https://persona.example"),
        );
        let second = build_discovery(
            "t",
            "d",
            &SiteIndex::from_items(&items, "https://persona.example"),
        );

        assert_eq!(first, second);
    }
}
