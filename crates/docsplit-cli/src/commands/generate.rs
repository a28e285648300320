use std::path::Path;

use anyhow::Result;

use docsplit_core::config::{self, GeneratorConfig};
use docsplit_core::error::DocsplitError;
use docsplit_core::generator::{self, OutputStatus};
use docsplit_core::vcs::{ChangeSource, ChangedPaths, GitCli};

use crate::output;

/// Expand the template and write the static and dynamic outputs.
///
/// Unless `no_vcs` is set, outputs with uncommitted edits in git are only
/// overwritten when the edit already matches the generated content.
pub fn run(config_path: &Path, no_vcs: bool) -> Result<()> {
    output::print_header("docsplit generate");

    let root = config::project_root(config_path);
    let config = GeneratorConfig::load_or_default(config_path)?;

    output::print_key_value("Template", &config.input.display().to_string());

    output::print_step(1, 2, "Collecting uncommitted changes");
    let changes: Box<dyn ChangeSource> = if no_vcs {
        tracing::warn!("git check disabled; hand edits to outputs will be overwritten");
        Box::new(ChangedPaths::new())
    } else {
        Box::new(GitCli::new(&root)?)
    };

    output::print_step(2, 2, "Expanding template and writing outputs");
    let report = match generator::generate(&root, &config, changes.as_ref()) {
        Ok(report) => report,
        Err(DocsplitError::DirtyOutput { path }) => {
            output::print_error(&format!(
                "{} has uncommitted edits that differ from the generated output",
                path.display()
            ));
            output::print_error(&format!(
                "move the edit into {} or discard it, then run again",
                config.input.display()
            ));
            return Err(DocsplitError::DirtyOutput { path }.into());
        }
        Err(e) => return Err(e.into()),
    };

    for out in &report.outputs {
        let status = match out.status {
            OutputStatus::Created => "created",
            OutputStatus::Updated => "updated",
            OutputStatus::Unchanged => "unchanged",
        };
        output::print_key_value(
            &out.path.display().to_string(),
            &format!("{status} ({} bytes)", out.size_bytes),
        );
    }

    output::print_success(&format!(
        "Generated {} outputs ({} placeholders expanded)",
        report.outputs.len(),
        report.substitutions
    ));

    Ok(())
}
