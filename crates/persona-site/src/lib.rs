//! Static site builder for the persona site.
//!
//! Takes the validated content set from `persona-content` and writes the
//! deployable tree: an HTML page and a markdown companion for every item,
//! the home and demos pages, and the discovery index, feed, and sitemap.

pub mod assets;
pub mod builder;
pub mod discovery;
pub mod excerpt;
pub mod feed;
pub mod index;
pub mod pages;
pub mod render;
pub mod sitemap;
pub mod templates;

pub use builder::{BuildError, BuildReport, SiteBuilder, SiteConfig};
pub use index::{IndexEntry, SiteIndex};
pub use render::{HtmlFormat, MarkdownFormat, RenderFormat, RenderedPage};
pub use templates::{TemplateEngine, TemplateError};
