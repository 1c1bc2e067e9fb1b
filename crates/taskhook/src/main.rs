use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

mod check_cmd;
mod cli;
mod render_cmd;

use cli::{Cli, Commands};
use render_cmd::RenderArgs;
use taskhook_core::{OutputFormat, TaskState};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (output to stderr, initialize only once)
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("taskhook=debug,taskhook_hooks=debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .ok();

    let exit_code = match cli.command {
        Commands::Render {
            state,
            task_id,
            framework_id,
            container_id,
            labels,
        } => {
            let config_path = resolve_config_path(cli.config)?;
            render_cmd::handle_render(
                &config_path,
                RenderArgs {
                    state,
                    task_id,
                    framework_id,
                    container_id,
                    labels,
                },
                cli.format,
            )?
        }
        Commands::Check => {
            let config_path = resolve_config_path(cli.config)?;
            check_cmd::handle_check(&config_path, cli.format)?
        }
        Commands::States => {
            print_states(cli.format)?;
            0
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path,
        None => taskhook_hooks::default_hooks_path()
            .context("cannot determine the default hook config path; pass --config")?,
    };
    tracing::debug!(path = %path.display(), "Using hook config");
    Ok(path)
}

fn print_states(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&TaskState::ALL)?);
        }
        OutputFormat::Text => {
            for state in TaskState::ALL {
                println!("{state}");
            }
        }
    }
    Ok(())
}
