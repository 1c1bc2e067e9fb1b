use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use taskhook_core::{Label, OutputFormat, TaskState};
use taskhook_hooks::{SubstitutionContext, load_hook_config};

/// Identifiers and labels supplied on the command line.
pub(crate) struct RenderArgs {
    pub state: TaskState,
    pub task_id: Option<String>,
    pub framework_id: Option<String>,
    pub container_id: Option<String>,
    pub labels: Vec<Label>,
}

#[derive(Serialize)]
struct RenderOutput<'a> {
    state: TaskState,
    command: Option<&'a str>,
}

/// Handle `taskhook render`. Returns exit code 1 when no hook is bound.
pub(crate) fn handle_render(
    config_path: &Path,
    args: RenderArgs,
    format: OutputFormat,
) -> Result<i32> {
    let config = load_hook_config(config_path);

    let mut ctx = SubstitutionContext::new().with_labels(args.labels);
    ctx.task_id = args.task_id;
    ctx.framework_id = args.framework_id;
    ctx.container_id = args.container_id;

    let command = config.prepare_command(args.state, &ctx);

    match format {
        OutputFormat::Json => {
            let output = RenderOutput {
                state: args.state,
                command: command.as_deref(),
            };
            println!("{}", serde_json::to_string(&output)?);
        }
        OutputFormat::Text => match &command {
            Some(command) => println!("{command}"),
            None => eprintln!(
                "No hook bound for state {} in {}",
                args.state,
                config_path.display()
            ),
        },
    }

    Ok(if command.is_some() { 0 } else { 1 })
}
