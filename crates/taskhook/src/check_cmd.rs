use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use taskhook_core::{OutputFormat, TaskState};
use taskhook_hooks::config;

#[derive(Serialize)]
struct Binding<'a> {
    state: TaskState,
    template: &'a str,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    path: String,
    exists: bool,
    bindings: Vec<Binding<'a>>,
    diagnostics: Vec<String>,
}

/// Handle `taskhook check`. Returns exit code 1 when any line was rejected.
pub(crate) fn handle_check(config_path: &Path, format: OutputFormat) -> Result<i32> {
    let exists = config_path.exists();
    let parsed = config::parse(config_path);

    match format {
        OutputFormat::Json => {
            let output = CheckOutput {
                path: config_path.display().to_string(),
                exists,
                bindings: parsed
                    .commands
                    .iter()
                    .map(|(state, template)| Binding { state, template })
                    .collect(),
                diagnostics: parsed.diagnostics.iter().map(ToString::to_string).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            if !exists {
                eprintln!("No hook config at {}", config_path.display());
            }
            for (state, template) in parsed.commands.iter() {
                println!("{state}: {template}");
            }
            for diagnostic in &parsed.diagnostics {
                eprintln!("warning: {diagnostic}");
            }
        }
    }

    Ok(if parsed.diagnostics.is_empty() { 0 } else { 1 })
}
