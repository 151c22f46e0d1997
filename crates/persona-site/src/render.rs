//! Dual-format page rendering.
//!
//! One parsed [`ContentItem`] feeds two output strategies: a styled HTML page
//! wrapped in the shared chrome, and a plain markdown page with a normalized
//! metadata header. The body bytes are identical on both paths; only the
//! wrapping differs. The pair is produced together and written together.

use persona_content::ContentItem;

use crate::templates::{PageContext, TemplateEngine, TemplateError};

/// The output pair for one content item.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub markdown: String,
}

/// One output strategy of the dual renderer.
pub trait RenderFormat {
    /// Output file extension, without the dot.
    fn extension(&self) -> &'static str;

    /// Render one item to a complete output document.
    fn render(&self, item: &ContentItem) -> Result<String, TemplateError>;
}

/// Markdown body -> full HTML page through the template chain.
pub struct HtmlFormat<'a> {
    engine: &'a TemplateEngine,
    base_url: &'a str,
}

impl<'a> HtmlFormat<'a> {
    pub fn new(engine: &'a TemplateEngine, base_url: &'a str) -> Self {
        Self { engine, base_url }
    }
}

impl RenderFormat for HtmlFormat<'_> {
    fn extension(&self) -> &'static str {
        "html"
    }

    fn render(&self, item: &ContentItem) -> Result<String, TemplateError> {
        let content = markdown_to_html(&item.body);

        self.engine.render_page(&PageContext {
            title: item.title.clone(),
            description: item.description.clone().unwrap_or_default(),
            date_display: display_date(item),
            canonical: item.canonical_url(self.base_url),
            content,
        })
    }
}

/// Markdown body re-emitted under a normalized metadata header.
pub struct MarkdownFormat;

impl RenderFormat for MarkdownFormat {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, item: &ContentItem) -> Result<String, TemplateError> {
        let mut out = String::new();
        out.push_str("---\n");
        out.push_str(&format!("title: {}\n", item.title));
        out.push_str(&format!("date: {}\n", item.date.format("%Y-%m-%d")));
        if let Some(description) = &item.description {
            out.push_str(&format!("description: {}\n", description));
        }
        out.push_str("---\n\n");
        out.push_str(&item.body);

        Ok(out)
    }
}

/// Render both formats for one item.
pub fn render_page(
    engine: &TemplateEngine,
    base_url: &str,
    item: &ContentItem,
) -> Result<RenderedPage, TemplateError> {
    let html = HtmlFormat::new(engine, base_url).render(item)?;
    let markdown = MarkdownFormat.render(item)?;

    Ok(RenderedPage { html, markdown })
}

/// Markdown to HTML with the extensions the site uses. Raw HTML embedded in
/// the source passes through untouched.
pub fn markdown_to_html(markdown: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// "Feb 14, 2026" style display date.
pub fn display_date(item: &ContentItem) -> String {
    item.date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item() -> ContentItem {
        ContentItem::parse(
            "---\ntitle: Memory\ndate: 2026-02-14\ndescription: On persistence\n---\n\nFirst paragraph with **bold** text.\n\n- one\n- two\n",
            "memory".into(),
            "posts".into(),
        )
        .unwrap()
    }

    fn engine() -> TemplateEngine {
        TemplateEngine::new("personabot", "notes").unwrap()
    }

    #[test]
    fn both_outputs_come_from_the_same_body() {
        let engine = engine();
        let item = item();

        let page = render_page(&engine, "https://persona.example", &item).unwrap();

        // Markdown path: body re-emitted byte-identical after the header
        let md_body = page.markdown.splitn(3, "---\n").nth(2).unwrap();
        assert_eq!(md_body.trim_start_matches('\n'), item.body);

        // HTML path: the same body, converted
        assert!(page.html.contains("<strong>bold</strong>"));
        assert!(page.html.contains("<li>one</li>"));
    }

    #[test]
    fn markdown_header_is_normalized() {
        let item = item();
        let markdown = MarkdownFormat.render(&item).unwrap();

        assert!(markdown.starts_with("---\ntitle: Memory\ndate: 2026-02-14\ndescription: On persistence\n---\n\n"));
    }

    #[test]
    fn markdown_header_omits_absent_description() {
        let item = ContentItem::parse(
            "---\ntitle: Bare\ndate: 2026-01-01\n---\nbody",
            "bare".into(),
            "posts".into(),
        )
        .unwrap();

        let markdown = MarkdownFormat.render(&item).unwrap();

        assert!(!markdown.contains("description:"));
    }

    #[test]
    fn raw_html_passes_through_unchanged() {
        let html = markdown_to_html("before\n\n<div class=\"custom\">kept</div>\n\nafter");

        assert!(html.contains("<div class=\"custom\">kept</div>"));
    }

    #[test]
    fn html_page_carries_title_and_date() {
        let engine = engine();
        let html = HtmlFormat::new(&engine, "https://persona.example")
            .render(&item())
            .unwrap();

        assert!(html.contains("<h1>Memory</h1>"));
        assert!(html.contains("Feb 14, 2026"));
        assert!(html.contains("https://persona.example/posts/memory.html"));
    }

    #[test]
    fn extensions_differ_only_by_format() {
        let engine = engine();
        assert_eq!(HtmlFormat::new(&engine, "x").extension(), "html");
        assert_eq!(MarkdownFormat.extension(), "md");
    }
}
