//! The site builder: load, render, assemble, write.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use persona_content::{load_content, LoadFailure};

use crate::assets::AssetPipeline;
use crate::discovery::build_discovery;
use crate::feed::{build_feed, FeedError};
use crate::index::SiteIndex;
use crate::pages;
use crate::render::render_page;
use crate::sitemap::{build_robots, build_sitemap};
use crate::templates::{TemplateEngine, TemplateError};

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Source content directory
    pub content_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Absolute site URL, no trailing slash required
    pub base_url: String,

    /// Site title
    pub title: String,

    /// Site description (hero tagline, feed description)
    pub description: String,

    /// Optional directory of template overrides
    pub templates_dir: Option<PathBuf>,

    /// Minify the emitted stylesheet
    pub minify: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("public"),
            base_url: "https://persona.example".to_string(),
            title: "persona".to_string(),
            description: "An AI assistant's notes on code, data & consciousness".to_string(),
            templates_dir: None,
            minify: true,
        }
    }
}

/// Result of a build.
///
/// Per-file content failures are carried here rather than as an error: the
/// build finishes everything it can, and the caller turns a non-empty
/// failure list into a non-zero outcome.
#[derive(Debug)]
pub struct BuildReport {
    /// Pages generated from content items (each is an HTML/markdown pair)
    pub pages: usize,

    /// Content files that failed to load
    pub failures: Vec<LoadFailure>,

    /// Drafts skipped
    pub drafts_skipped: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Errors that abort a build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("failed to read content: {0}")]
    Content(String),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Static site builder.
#[derive(Debug)]
pub struct SiteBuilder {
    config: SiteConfig,
    engine: TemplateEngine,
}

impl SiteBuilder {
    /// Create a builder, loading template overrides if configured. A missing
    /// template file fails here: nothing can render without the chrome.
    pub fn new(config: SiteConfig) -> Result<Self, BuildError> {
        let engine = match &config.templates_dir {
            Some(dir) => TemplateEngine::from_dir(dir, &config.title, &config.description)?,
            None => TemplateEngine::new(&config.title, &config.description)?,
        };

        Ok(Self { config, engine })
    }

    /// Build the whole site.
    ///
    /// Items render independently; the aggregates are derived afterwards
    /// from the one sorted index so the discovery doc, feed, and sitemap
    /// always describe the same page set.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let start = Instant::now();
        let out = &self.config.output_dir;

        fs::create_dir_all(out).map_err(|source| BuildError::Write {
            path: out.clone(),
            source,
        })?;

        let outcome = load_content(&self.config.content_dir)
            .map_err(|e| BuildError::Content(e.to_string()))?;

        // Render and write every item's output pair. Item order does not
        // matter here; the aggregates below apply the final sort.
        outcome
            .items
            .par_iter()
            .map(|item| {
                let page = render_page(&self.engine, &self.config.base_url, item)?;

                write_file(&out.join(item.html_path()), &page.html)?;
                write_file(&out.join(item.md_path()), &page.markdown)?;

                Ok(())
            })
            .collect::<Result<Vec<()>, BuildError>>()?;

        let index = SiteIndex::from_items(&outcome.items, &self.config.base_url);

        write_file(&out.join("index.html"), &pages::render_home(&self.engine, &index)?)?;
        write_file(&out.join("demos.html"), &pages::render_demos(&self.engine)?)?;
        write_file(
            &out.join("llms.txt"),
            &build_discovery(&self.config.title, &self.config.description, &index),
        )?;
        write_file(
            &out.join("rss.xml"),
            &build_feed(
                &self.config.title,
                &self.config.description,
                &self.config.base_url,
                &index,
            )?,
        )?;
        write_file(
            &out.join("sitemap.xml"),
            &build_sitemap(&self.config.base_url, &index),
        )?;
        write_file(&out.join("robots.txt"), &build_robots(&self.config.base_url))?;

        self.write_assets()?;

        let report = BuildReport {
            pages: outcome.items.len(),
            failures: outcome.failures,
            drafts_skipped: outcome.drafts_skipped,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: out.clone(),
        };

        tracing::info!(
            "Built {} pages ({} failed, {} drafts) in {}ms",
            report.pages,
            report.failures.len(),
            report.drafts_skipped,
            report.duration_ms
        );

        Ok(report)
    }

    fn write_assets(&self) -> Result<(), BuildError> {
        let css = AssetPipeline::site_css();
        let css = if self.config.minify {
            match AssetPipeline::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("CSS minification failed, writing unminified: {}", e);
                    css
                }
            }
        } else {
            css
        };

        write_file(&self.config.output_dir.join("assets/site.css"), &css)
    }
}

/// Write one output file, creating parent directories. Any failure is fatal
/// to the build; partially written output is left in place.
fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| BuildError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}
