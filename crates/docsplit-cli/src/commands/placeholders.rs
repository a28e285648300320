use std::path::Path;

use anyhow::Result;

use docsplit_core::config::GeneratorConfig;

use crate::output;

/// Print the placeholder table.
pub fn run(config_path: &Path, json: bool) -> Result<()> {
    let config = GeneratorConfig::load_or_default(config_path)?;
    let table = config.placeholder_table()?;

    if json {
        let entries: Vec<_> = table.iter().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    output::print_header(&format!("docsplit placeholders ({})", table.len()));
    for p in table.iter() {
        println!("{}", p.key());
        output::print_key_value("include", &p.include);
        output::print_key_value(
            "image",
            p.image.as_deref().unwrap_or("(none, static output drops the line)"),
        );
    }

    Ok(())
}
