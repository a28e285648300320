//! Core library for docsplit.
//!
//! Turns one markdown template into two documents: a static page with images
//! embedded inline (for a repository README) and a dynamic page that pulls live
//! demos in with Jekyll `capture`/`include_relative` directives (for a project site).
//!
//! - [`expander`]: the single-pass line substitution
//! - [`placeholder`]: the immutable table of recognised placeholder lines
//! - [`guard`]: the decision not to overwrite uncommitted hand edits
//! - [`vcs`]: where the set of uncommitted paths comes from (`git diff`)
//! - [`generator`]: read, expand, guard and write, or check without writing
//! - [`config`], [`templates`]: configuration and preamble rendering

pub mod config;
pub mod error;
pub mod expander;
pub mod generator;
pub mod guard;
pub mod placeholder;
pub mod templates;
pub mod vcs;
