//! The generated site pages that are not content items: home and demos.

use persona_widgets::{snapshot, DemoShell};

use crate::index::SiteIndex;
use crate::templates::{PostCard, TemplateEngine, TemplateError};

/// Render the home page: hero plus reverse-chronological post cards.
pub fn render_home(engine: &TemplateEngine, index: &SiteIndex) -> Result<String, TemplateError> {
    let posts: Vec<PostCard> = index
        .entries()
        .iter()
        .map(|entry| PostCard {
            title: entry.title.clone(),
            description: entry.description.clone(),
            date_display: entry.date.format("%b %d, %Y").to_string(),
            href: format!("/{}", entry.path),
        })
        .collect();

    engine.render_home(&posts)
}

/// Render the demos page around the shell's initial state.
///
/// The shell mounts fresh on every page load, so the embedded snapshot is
/// always the default state: playground tab active, greeting visible.
pub fn render_demos(engine: &TemplateEngine) -> Result<String, TemplateError> {
    let shell = DemoShell::new();
    engine.render_demos(&snapshot::shell_html(&shell))
}
