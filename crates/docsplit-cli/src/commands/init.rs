use std::path::Path;

use anyhow::Result;

use docsplit_core::config::{self, GeneratorConfig};
use docsplit_core::error::DocsplitError;

use crate::output;

/// Write a config file populated with the built-in defaults.
pub fn run(config_path: &Path, force: bool) -> Result<()> {
    output::print_header("docsplit init");

    if config_path.exists() && !force {
        return Err(DocsplitError::ConfigExists(config_path.to_path_buf()).into());
    }

    let config = GeneratorConfig::default();
    config.save(config_path)?;
    output::print_success(&format!("Wrote {}", config_path.display()));

    let root = config::project_root(config_path);
    if !root.join(&config.input).exists() {
        output::print_warning(&format!(
            "template {} does not exist yet",
            config.input.display()
        ));
    }

    println!();
    println!("  Next steps:");
    println!("    edit {} to match your project", config_path.display());
    println!("    docsplit placeholders");
    println!("    docsplit generate");
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(config::CONFIG_FILE);
        run(&path, false).unwrap();

        let loaded = GeneratorConfig::load(&path).unwrap();
        assert_eq!(loaded, GeneratorConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(config::CONFIG_FILE);
        std::fs::write(&path, "{}").unwrap();

        assert!(run(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

        run(&path, true).unwrap();
        assert_eq!(GeneratorConfig::load(&path).unwrap().placeholders.len(), 6);
    }
}
