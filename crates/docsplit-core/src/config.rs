//! Generator configuration (`docsplit.config.json`).
//!
//! Every field has a default, so a missing file or a partial file both work.
//! Paths are relative to the project root, which is the directory holding the
//! config file.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocsplitError, Result};
use crate::placeholder::{default_placeholders, Placeholder, PlaceholderTable};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "docsplit.config.json";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Source markdown template.
    pub input: PathBuf,
    /// Output for hosts that render images inline.
    pub static_output: PathBuf,
    /// Output for the templating host.
    pub dynamic_output: PathBuf,
    /// Metadata used to render the output preambles.
    pub project: ProjectInfo,
    /// Substitution rules, in declaration order.
    pub placeholders: Vec<Placeholder>,
}

/// Project metadata for the static header and the dynamic front matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub title: String,
    /// Project page; also the target of every `[demo](...)` link.
    pub site_url: String,
    pub tagline: String,
    pub badge_label: String,
    pub badge_url: String,
    /// Jekyll layout for the dynamic output.
    pub layout: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            title: "A lightweight range slider with expandable timeline".into(),
            site_url: "https://artoonie.github.io/timeline-range-slider".into(),
            tagline: "The project page has dynamic sliders you can interact with.".into(),
            badge_label: "Node.js CI".into(),
            badge_url:
                "https://github.com/artoonie/timeline-range-slider/workflows/Node.js%20CI/badge.svg"
                    .into(),
            layout: "default".into(),
        }
    }
}

impl ProjectInfo {
    /// Site URL without its scheme, used as the link text.
    pub fn site_label(&self) -> &str {
        self.site_url
            .strip_prefix("https://")
            .or_else(|| self.site_url.strip_prefix("http://"))
            .unwrap_or(&self.site_url)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("docs/readme-generator.md"),
            static_output: PathBuf::from("README.md"),
            dynamic_output: PathBuf::from("index.md"),
            project: ProjectInfo::default(),
            placeholders: default_placeholders(),
        }
    }
}

impl GeneratorConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| DocsplitError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| DocsplitError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load a config file, falling back to the built-in defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Write this config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| DocsplitError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        std::fs::write(path, json + "\n")?;
        Ok(())
    }

    /// Reject output paths the change source cannot see.
    ///
    /// Git reports root-relative names, so an absolute output or one that
    /// climbs out of the root with `..` would never be found dirty.
    pub fn validate_outputs(&self) -> Result<()> {
        for path in [&self.static_output, &self.dynamic_output] {
            let reason = if path.is_absolute() || path.has_root() {
                "must be relative to the project root"
            } else if path.components().any(|c| matches!(c, Component::ParentDir)) {
                "must not leave the project root"
            } else if path.file_name().is_none() {
                "must name a file"
            } else {
                continue;
            };
            return Err(DocsplitError::InvalidOutputPath {
                path: path.clone(),
                reason: reason.into(),
            });
        }
        Ok(())
    }

    /// Validate the placeholders and build the lookup table.
    pub fn placeholder_table(&self) -> Result<PlaceholderTable> {
        PlaceholderTable::new(self.placeholders.clone())
    }
}

/// Directory that config-relative paths resolve against.
pub fn project_root(config_path: &Path) -> PathBuf {
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
