use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taskhook_core::{Label, OutputFormat, TaskState};

#[derive(Parser)]
#[command(name = "taskhook", version)]
#[command(about = "Render shell hooks bound to task lifecycle states")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json)
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Hook binding file (defaults to the user config dir hooks.cfg)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the command bound to a task state, with placeholders substituted
    Render {
        /// Task state keyword (STAGING, RUNNING, FAILED, ...)
        #[arg(long)]
        state: TaskState,

        /// Task id substituted for \T
        #[arg(long)]
        task_id: Option<String>,

        /// Framework id substituted for \F
        #[arg(long)]
        framework_id: Option<String>,

        /// Container id substituted for \C
        #[arg(long)]
        container_id: Option<String>,

        /// Task label as KEY=VALUE; repeatable, first match wins
        #[arg(long = "label", value_name = "KEY=VALUE")]
        labels: Vec<Label>,
    },

    /// Validate the hook binding file and list accepted bindings
    Check,

    /// List recognized task state keywords
    States,
}
