//! Compile-time embedded preamble templates.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/docsplit-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Trailing newlines in these files are significant: they end up verbatim in the outputs.

/// Title, project link, tagline and CI badge for the static output.
pub const STATIC_PREAMBLE: &str = include_str!("../../../../templates/preamble/static.md.hbs");

/// Jekyll front matter for the dynamic output.
pub const DYNAMIC_PREAMBLE: &str = include_str!("../../../../templates/preamble/dynamic.md.hbs");
