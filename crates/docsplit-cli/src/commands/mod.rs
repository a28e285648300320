//! CLI command implementations for docsplit.
//!
//! Each module corresponds to a subcommand (`docsplit <command>`).

pub mod check;
pub mod generate;
pub mod init;
pub mod placeholders;
