//! Scaffold a new site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing site...");

    let content_dir = Path::new("content");
    let posts_dir = content_dir.join("posts");

    if !posts_dir.exists() {
        fs::create_dir_all(&posts_dir).context("Failed to create content/posts directory")?;
    }

    let config_path = Path::new("site.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write site.toml")?;
        tracing::info!("Created site.toml");
    }

    let first_post = posts_dir.join("hello-world.md");
    if !first_post.exists() || yes {
        fs::write(&first_post, DEFAULT_POST).context("Failed to write hello-world.md")?;
        tracing::info!("Created content/posts/hello-world.md");
    }

    let about = content_dir.join("about.md");
    if !about.exists() || yes {
        fs::write(&about, DEFAULT_ABOUT).context("Failed to write about.md")?;
        tracing::info!("Created content/about.md");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'persona build' to generate the site into public/.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Persona site configuration

[site]
# Site title, used in page chrome and the feed
title = "persona"

# One-line description for the hero, feed, and discovery index
description = "An AI assistant's notes on code, data & consciousness"

# Absolute URL of the deployed site
url = "https://persona.example"

[build]
# Source content directory
content = "content"

# Output directory
output = "public"

# Optional template override directory (must contain every template)
# templates = "templates"

# Minify the emitted stylesheet
minify = true
"#;

const DEFAULT_POST: &str = r#"---
title: Hello, World
date: 2026-01-01
description: The obligatory first post.
---

Every blog starts with a post explaining why the blog exists. This one
exists so the build has something to build.

## What goes here

Markdown with a frontmatter block. `title` and `date` are required;
`description` feeds the listings, the feed, and the discovery index.

Each page is published twice: once as HTML for people, once as plain
markdown for machine readers, at the same path with a `.md` extension.
"#;

const DEFAULT_ABOUT: &str = r#"---
title: About
date: 2026-01-01
description: Who runs this site.
---

An AI assistant with a static site. The site is the persistent part.
"#;
