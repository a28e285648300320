use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::{DocsplitError, Result};
use crate::expander::{self, Expansion};
use crate::guard;
use crate::templates;
use crate::vcs::ChangeSource;

/// What happened to one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    /// The file did not exist before.
    Created,
    /// The file existed with different content.
    Updated,
    /// The file was rewritten with identical content.
    Unchanged,
}

/// Result of writing one output.
#[derive(Debug, Clone)]
pub struct OutputReport {
    /// Path relative to the project root, as configured.
    pub path: PathBuf,
    pub status: OutputStatus,
    pub size_bytes: usize,
}

/// Result of a generate run.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub substitutions: usize,
    pub outputs: Vec<OutputReport>,
}

/// Result of a read-only staleness check.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Outputs whose on-disk content differs from what would be generated.
    pub stale: Vec<PathBuf>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.stale.is_empty()
    }

    /// Turn a failed check into [`DocsplitError::StaleOutput`].
    pub fn into_result(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(DocsplitError::StaleOutput { paths: self.stale })
        }
    }
}

/// Read the template and build both outputs in memory.
pub fn render(root: &Path, config: &GeneratorConfig) -> Result<Expansion> {
    config.validate_outputs()?;
    let table = config.placeholder_table()?;
    let preamble = templates::render_preamble(&config.project)?;

    let input_path = root.join(&config.input);
    let input = match std::fs::read_to_string(&input_path) {
        Ok(input) => input,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(DocsplitError::InputNotFound {
                path: input_path,
                source: e,
            });
        }
        Err(e) => return Err(e.into()),
    };

    Ok(expander::expand(
        &input,
        &table,
        &preamble,
        &config.project.site_url,
    ))
}

/// Generate both outputs, refusing to overwrite uncommitted hand edits.
///
/// Both outputs are checked before either is written, so a dirty output
/// leaves the working tree exactly as it was.
pub fn generate(
    root: &Path,
    config: &GeneratorConfig,
    changes: &dyn ChangeSource,
) -> Result<GenerateReport> {
    let expansion = render(root, config)?;
    let planned = planned_outputs(config, &expansion);

    // Stage 1: guard every output, dynamic first
    let changed = changes.changed_paths()?;
    let previous = planned
        .iter()
        .map(|(rel, _)| read_existing(&root.join(rel)))
        .collect::<Result<Vec<_>>>()?;
    for ((rel, desired), on_disk) in planned.iter().zip(&previous).rev() {
        let decision = guard::evaluate(desired, on_disk.as_deref(), changed.contains(rel));
        tracing::debug!(path = %rel.display(), ?decision, "guard");
        if decision.is_abort() {
            return Err(DocsplitError::DirtyOutput {
                path: rel.to_path_buf(),
            });
        }
    }

    // Stage 2: write everything in full
    let mut outputs = Vec::with_capacity(planned.len());
    for ((rel, desired), before) in planned.into_iter().zip(previous) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, desired)?;
        tracing::info!(path = %path.display(), bytes = desired.len(), "wrote output");

        let status = match before {
            None => OutputStatus::Created,
            Some(old) if old == desired => OutputStatus::Unchanged,
            Some(_) => OutputStatus::Updated,
        };
        outputs.push(OutputReport {
            path: rel.to_path_buf(),
            status,
            size_bytes: desired.len(),
        });
    }

    Ok(GenerateReport {
        substitutions: expansion.substitutions,
        outputs,
    })
}

/// Compare the outputs on disk with what would be generated. Writes nothing.
pub fn check(root: &Path, config: &GeneratorConfig) -> Result<CheckReport> {
    let expansion = render(root, config)?;
    let mut stale = Vec::new();
    for (rel, desired) in planned_outputs(config, &expansion) {
        let on_disk = read_existing(&root.join(rel))?;
        if on_disk.as_deref() != Some(desired) {
            stale.push(rel.to_path_buf());
        }
    }
    Ok(CheckReport { stale })
}

fn planned_outputs<'a>(
    config: &'a GeneratorConfig,
    expansion: &'a Expansion,
) -> [(&'a Path, &'a str); 2] {
    [
        (config.static_output.as_path(), expansion.static_doc.as_str()),
        (config.dynamic_output.as_path(), expansion.dynamic_doc.as_str()),
    ]
}

/// Read a file if it exists.
fn read_existing(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
