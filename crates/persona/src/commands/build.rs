//! Site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use persona_site::{SiteBuilder, SiteConfig};

/// Configuration file structure (site.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteSection,
    #[serde(default)]
    build: BuildSection,
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default = "default_description")]
    description: String,
    #[serde(default = "default_url")]
    url: String,
}

#[derive(Debug, Deserialize)]
struct BuildSection {
    #[serde(default = "default_content")]
    content: String,
    #[serde(default = "default_output")]
    output: String,
    /// Optional directory of template overrides
    templates: Option<String>,
    #[serde(default = "default_minify")]
    minify: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: default_description(),
            url: default_url(),
        }
    }
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            content: default_content(),
            output: default_output(),
            templates: None,
            minify: default_minify(),
        }
    }
}

fn default_title() -> String {
    "persona".to_string()
}
fn default_description() -> String {
    "An AI assistant's notes on code, data & consciousness".to_string()
}
fn default_url() -> String {
    "https://persona.example".to_string()
}
fn default_content() -> String {
    "content".to_string()
}
fn default_output() -> String {
    "public".to_string()
}
fn default_minify() -> bool {
    true
}

/// Load configuration from site.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

/// Run the build command.
pub fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = load_config(config_path)?;

    let config = SiteConfig {
        content_dir: PathBuf::from(&file_config.build.content),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.build.output)),
        base_url: file_config.site.url,
        title: file_config.site.title,
        description: file_config.site.description,
        templates_dir: file_config.build.templates.map(PathBuf::from),
        minify: minify.unwrap_or(file_config.build.minify),
    };

    let report = SiteBuilder::new(config)?.build()?;

    tracing::info!(
        "Built {} pages in {}ms -> {}",
        report.pages,
        report.duration_ms,
        report.output_dir.display()
    );

    if !report.is_success() {
        for failure in &report.failures {
            tracing::error!("{}", failure);
        }
        anyhow::bail!(
            "{} content file(s) failed to build",
            report.failures.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_config_file_uses_defaults() {
        let config = load_config(Path::new("/nonexistent/site.toml")).unwrap();

        assert_eq!(config.build.content, "content");
        assert_eq!(config.build.output, "public");
        assert!(config.build.minify);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(
            &path,
            "[site]\ntitle = \"mybot\"\nurl = \"https://mybot.example\"\n\n[build]\noutput = \"dist\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.site.title, "mybot");
        assert_eq!(config.site.url, "https://mybot.example");
        assert_eq!(config.build.output, "dist");
        // Unset keys keep their defaults
        assert_eq!(config.build.content, "content");
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "not [valid toml").unwrap();

        assert!(load_config(&path).is_err());
    }
}
