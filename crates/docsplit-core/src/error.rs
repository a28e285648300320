//! Unified error types for docsplit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while generating documentation outputs.
#[derive(Error, Debug)]
pub enum DocsplitError {
    // --- Configuration ---

    /// The configuration file (`docsplit.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `init` was asked to write a config over an existing one.
    #[error("config file already exists: {0}")]
    ConfigExists(PathBuf),

    /// A placeholder entry is malformed (bad name, duplicate, empty include path).
    #[error("invalid placeholder '{name}': {reason}")]
    InvalidPlaceholder { name: String, reason: String },

    /// An output path that git could never report as changed.
    #[error("invalid output path {}: {reason}", .path.display())]
    InvalidOutputPath { path: PathBuf, reason: String },

    // --- Input ---

    /// The source markdown template could not be read.
    #[error("template not found: {path}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Output guard ---

    /// An output file has uncommitted edits that the generator would overwrite.
    #[error("file {} is dirty, refusing to overwrite", .path.display())]
    DirtyOutput { path: PathBuf },

    /// One or more outputs do not match what the template would generate.
    #[error("outputs out of date: {}", display_paths(.paths))]
    StaleOutput { paths: Vec<PathBuf> },

    // --- Version control ---

    /// A required external tool (`git`) is not installed.
    #[error("required tool '{name}' not found (install: {install})")]
    MissingTool { name: String, install: String },

    /// Querying version control for changed files failed.
    #[error("git error: {0}")]
    Vcs(String),

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Alias for `Result<T, DocsplitError>`.
pub type Result<T> = std::result::Result<T, DocsplitError>;
