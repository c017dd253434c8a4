//! `botgen catalog`: list supported block types.

use anyhow::Result;
use botgen::BlockSpec;

pub fn catalog(json: bool) -> Result<()> {
    if json {
        println!("{}", botgen::block_catalog_json());
    } else {
        print!("{}", render_catalog(&botgen::block_catalog()));
    }
    Ok(())
}

/// Plain-text listing: one line per block type plus its fields.
pub fn render_catalog(specs: &[BlockSpec]) -> String {
    let width = specs
        .iter()
        .map(|s| s.block_type.as_str().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for spec in specs {
        out.push_str(&format!(
            "{:<width$}  {}{}\n",
            spec.block_type.as_str(),
            spec.label,
            if spec.repeatable { " (repeatable)" } else { "" },
        ));
        out.push_str(&format!("{:<width$}  {}\n", "", spec.description));
        if !spec.required_fields.is_empty() {
            out.push_str(&format!(
                "{:<width$}  required: {}\n",
                "",
                spec.required_fields.join(", ")
            ));
        }
        if !spec.optional_fields.is_empty() {
            out.push_str(&format!(
                "{:<width$}  optional: {}\n",
                "",
                spec.optional_fields.join(", ")
            ));
        }
    }
    out
}
