//! Template engine for the site chrome.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{context, Environment};

/// Every template the builder renders. A custom template directory must
/// provide all of them; the embedded defaults cover the rest of the time.
const TEMPLATE_NAMES: [&str; 6] = [
    "base.html",
    "nav.html",
    "footer.html",
    "page.html",
    "index.html",
    "demos.html",
];

/// A post card on the home page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PostCard {
    pub title: String,
    pub description: String,
    pub date_display: String,
    pub href: String,
}

/// Context for rendering one content page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    pub title: String,
    pub description: String,
    pub date_display: String,
    pub canonical: String,
    /// Rendered body HTML
    pub content: String,
}

/// Template errors are fatal to the build: the shared chrome is required.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template `{name}` not found in {dir}")]
    Missing { name: &'static str, dir: PathBuf },

    #[error("failed to read template `{name}`: {source}")]
    Read {
        name: &'static str,
        source: std::io::Error,
    },

    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),
}

/// Template engine using minijinja.
#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
    site_title: String,
    site_description: String,
}

impl TemplateEngine {
    /// Engine with the embedded default templates.
    pub fn new(site_title: &str, site_description: &str) -> Result<Self, TemplateError> {
        let mut env = Environment::new();

        for (name, source) in [
            ("base.html", BASE_TEMPLATE),
            ("nav.html", NAV_TEMPLATE),
            ("footer.html", FOOTER_TEMPLATE),
            ("page.html", PAGE_TEMPLATE),
            ("index.html", INDEX_TEMPLATE),
            ("demos.html", DEMOS_TEMPLATE),
        ] {
            env.add_template_owned(name.to_string(), source.to_string())?;
        }

        Ok(Self {
            env,
            site_title: site_title.to_string(),
            site_description: site_description.to_string(),
        })
    }

    /// Engine loading every template from a directory. A missing or
    /// unreadable file is an error; there is no partial fallback, so a page
    /// never renders against a mix of custom and default chrome.
    pub fn from_dir(
        dir: &Path,
        site_title: &str,
        site_description: &str,
    ) -> Result<Self, TemplateError> {
        let mut env = Environment::new();

        for name in TEMPLATE_NAMES {
            let path = dir.join(name);
            if !path.exists() {
                return Err(TemplateError::Missing {
                    name,
                    dir: dir.to_path_buf(),
                });
            }
            let source =
                fs::read_to_string(&path).map_err(|source| TemplateError::Read { name, source })?;
            env.add_template_owned(name.to_string(), source)?;
        }

        Ok(Self {
            env,
            site_title: site_title.to_string(),
            site_description: site_description.to_string(),
        })
    }

    /// Render one content page into the base/nav/footer chain.
    pub fn render_page(&self, page: &PageContext) -> Result<String, TemplateError> {
        let tmpl = self.env.get_template("page.html")?;

        Ok(tmpl.render(context! {
            site_title => &self.site_title,
            site_description => &self.site_description,
            title => &page.title,
            description => &page.description,
            date_display => &page.date_display,
            canonical => &page.canonical,
            content => &page.content,
        })?)
    }

    /// Render the home page with its post cards.
    pub fn render_home(&self, posts: &[PostCard]) -> Result<String, TemplateError> {
        let tmpl = self.env.get_template("index.html")?;

        Ok(tmpl.render(context! {
            site_title => &self.site_title,
            site_description => &self.site_description,
            title => &self.site_title,
            description => &self.site_description,
            canonical => "",
            posts => posts,
        })?)
    }

    /// Render the demos page around a widget shell snapshot.
    pub fn render_demos(&self, shell_html: &str) -> Result<String, TemplateError> {
        let tmpl = self.env.get_template("demos.html")?;

        Ok(tmpl.render(context! {
            site_title => &self.site_title,
            site_description => &self.site_description,
            title => "Demos",
            description => "Interactive demo widgets",
            canonical => "",
            shell => shell_html,
        })?)
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} // {{ site_title }}</title>
  <meta name="description" content="{{ description }}">
  {% if canonical %}<link rel="canonical" href="{{ canonical }}">
  {% endif %}<link rel="alternate" type="application/rss+xml" title="{{ site_title }}" href="/rss.xml">
  <link rel="stylesheet" href="/assets/site.css">
</head>
<body>
  {% include "nav.html" %}
  <main class="main">
    {% block content %}{% endblock %}
  </main>
  {% include "footer.html" %}
</body>
</html>"##;

const NAV_TEMPLATE: &str = r##"<nav class="site-nav">
  <a href="/" class="nav-logo">{{ site_title }}</a>
  <div class="nav-links">
    <a href="/">Blog</a>
    <a href="/demos.html">Demos</a>
    <a href="/llms.txt">llms.txt</a>
    <a href="/rss.xml">RSS</a>
  </div>
</nav>"##;

const FOOTER_TEMPLATE: &str = r##"<footer class="site-footer">
  <p>{{ site_description }}</p>
  <p>Static HTML, no trackers. Every page has a <code>.md</code> twin for machine readers.</p>
</footer>"##;

const PAGE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<header class="article-header">
  <div class="post-date">{{ date_display }}</div>
  <h1>{{ title }}</h1>
</header>

<article class="article-content">
{{ content | safe }}
</article>

<nav class="article-nav">
  <a href="/">&larr; Back to blog</a>
</nav>
{% endblock %}"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<header class="hero">
  <h1>{{ site_title }}</h1>
  <p class="tagline">{{ site_description }}</p>
</header>

<section class="posts">
  <h2>Latest Posts</h2>
  {% for post in posts %}
  <article class="post-card">
    <div class="post-date">{{ post.date_display }}</div>
    <h3><a href="{{ post.href }}">{{ post.title }}</a></h3>
    <p>{{ post.description }}</p>
    <a href="{{ post.href }}" class="read-more">Continue reading &rarr;</a>
  </article>
  {% endfor %}
</section>
{% endblock %}"##;

const DEMOS_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<header class="article-header">
  <h1>Demos</h1>
  <p class="post-date">Decorative widgets with purely local state</p>
</header>

{{ shell | safe }}
{% endblock %}"##;
