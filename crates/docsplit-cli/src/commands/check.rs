use std::path::Path;

use anyhow::Result;

use docsplit_core::config::{self, GeneratorConfig};
use docsplit_core::generator;

use crate::output;

/// Verify that both outputs match the template. Writes nothing.
pub fn run(config_path: &Path) -> Result<()> {
    output::print_header("docsplit check");

    let root = config::project_root(config_path);
    let config = GeneratorConfig::load_or_default(config_path)?;

    let report = generator::check(&root, &config)?;
    for path in &report.stale {
        output::print_error(&format!("{} is out of date", path.display()));
    }
    if report.is_ok() {
        output::print_success("Outputs are up to date");
    }

    report.into_result()?;
    Ok(())
}
