//! Asset pipeline for the site stylesheet.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// The site stylesheet.
    pub fn site_css() -> String {
        SITE_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const SITE_CSS: &str = r#"/* persona site theme */

:root {
  --bg: #101014;
  --fg: #e8e6e3;
  --muted: #9a968f;
  --accent: #7aa2f7;
  --border: #2a2a31;
  --content-max-width: 680px;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--bg);
  color: var(--fg);
  line-height: 1.6;
}

.site-nav {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 1.5rem;
  border-bottom: 1px solid var(--border);
}

.nav-logo {
  font-weight: 700;
  color: var(--fg);
  text-decoration: none;
}

.nav-links a {
  color: var(--muted);
  text-decoration: none;
  margin-left: 1rem;
}

.nav-links a:hover {
  color: var(--accent);
}

.main {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 2rem 1.5rem;
}

.hero h1 {
  font-size: 2.4rem;
  margin-bottom: 0.5rem;
}

.tagline {
  color: var(--muted);
}

.post-card {
  padding: 1.25rem 0;
  border-bottom: 1px solid var(--border);
}

.post-date {
  color: var(--muted);
  font-size: 0.85rem;
}

.post-card h3 a,
.read-more {
  color: var(--accent);
  text-decoration: none;
}

.article-content h2 {
  margin: 1.5rem 0 0.5rem;
}

.article-content p,
.article-content ul,
.article-content pre {
  margin-bottom: 1rem;
}

.article-content pre {
  background: #16161c;
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 1rem;
  overflow-x: auto;
}

.article-nav {
  margin-top: 2rem;
}

.article-nav a {
  color: var(--accent);
  text-decoration: none;
}

.site-footer {
  border-top: 1px solid var(--border);
  color: var(--muted);
  font-size: 0.85rem;
  padding: 1.5rem;
  text-align: center;
}

/* Demo widgets */

.demo-tabs {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.demo-tabs .tab {
  background: none;
  border: 1px solid var(--border);
  border-radius: 6px;
  color: var(--muted);
  cursor: pointer;
  padding: 0.4rem 0.9rem;
}

.demo-tabs .tab.active {
  border-color: var(--accent);
  color: var(--accent);
}

.chat-message {
  border-radius: 8px;
  margin-bottom: 0.5rem;
  padding: 0.6rem 0.9rem;
}

.chat-message.bot {
  background: #16161c;
}

.chat-message.visitor {
  background: #1d2433;
}

.status-dashboard table {
  border-collapse: collapse;
  width: 100%;
}

.status-dashboard td,
.status-dashboard th {
  border-bottom: 1px solid var(--border);
  padding: 0.5rem;
  text-align: left;
}

.health-operational { color: #9ece6a; }
.health-degraded { color: #e0af68; }
.health-down { color: #f7768e; }

.testimonial {
  border-left: 3px solid var(--accent);
  color: var(--muted);
  margin-top: 1rem;
  padding-left: 1rem;
}

.feedback-form input,
.feedback-form textarea {
  background: #16161c;
  border: 1px solid var(--border);
  border-radius: 6px;
  color: var(--fg);
  display: block;
  margin-bottom: 0.75rem;
  padding: 0.5rem;
  width: 100%;
}

.config-snapshot {
  background: #16161c;
  border: 1px solid var(--border);
  border-radius: 6px;
  padding: 1rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minifies_css() {
        let css = ".a {\n  color: red;\n}\n";
        let min = AssetPipeline::minify_css(css).unwrap();

        assert!(min.len() < css.len());
        assert!(min.contains("color:red"));
    }

    #[test]
    fn site_css_is_valid_for_the_minifier() {
        let css = AssetPipeline::site_css();
        assert!(AssetPipeline::minify_css(&css).is_ok());
    }
}
