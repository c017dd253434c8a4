//! `botgen generate`: request JSON in, Python program out.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use botgen::{GenerateResult, GeneratorConfig, LiteralPolicy};
use tracing::info;

use super::{read_input, GenerateArgs};

/// Resolve the generator config from an optional TOML file and CLI flags.
/// Flags win over the file.
pub fn load_config(path: Option<&Path>, reject_newlines: bool) -> Result<GeneratorConfig> {
    let mut config = match path {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if reject_newlines {
        config = config.with_literal_policy(LiteralPolicy::Reject);
    }
    Ok(config)
}

/// Run the pipeline for `args`. Structural request errors are returned as
/// errors; block warnings are not.
pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let config = load_config(args.config.as_deref(), args.reject_newlines)?;
    let input = read_input(&args.input)?;
    let result = if args.legacy {
        botgen::generate_legacy_json(&input, &config)
    } else {
        botgen::generate_json(&input, &config)
    };
    result.with_context(|| format!("cannot generate from {}", args.input.display()))
}

pub fn generate(args: &GenerateArgs, json: bool, quiet: bool) -> Result<()> {
    let result = run_generate(args)?;

    if let Some(path) = &args.output {
        fs::write(path, &result.program_text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(
            path = %path.display(),
            handlers = result.fragments.len(),
            hash = %result.program_hash,
            "program written"
        );
    }

    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &result)?;
        writeln!(stdout)?;
    } else {
        if args.output.is_none() {
            stdout.write_all(result.program_text.as_bytes())?;
        }
        if !quiet {
            eprint!("{}", render_warnings(&result));
        }
    }
    Ok(())
}

/// Human-readable warning listing, one warning per line plus an optional
/// indented hint.
pub fn render_warnings(result: &GenerateResult) -> String {
    let mut out = String::new();
    for warning in result.diagnostics.iter() {
        out.push_str(&format!("warning: {warning}\n"));
        if let Some(hint) = &warning.suggestion {
            out.push_str(&format!("  = help: {hint}\n"));
        }
    }
    if !result.diagnostics.is_empty() {
        out.push_str(&format!(
            "{} block(s) skipped, {} handler(s) generated\n",
            result.diagnostics.len(),
            result.fragments.len()
        ));
    }
    out
}
