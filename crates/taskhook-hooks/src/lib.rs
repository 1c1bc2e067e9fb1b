//! Shell command hooks for task lifecycle transitions.
//!
//! An operator binds a command template to a task state in a plain-text
//! file. When a task enters that state, the template is rendered against the
//! task's identifiers, labels and the current time; running the resulting
//! command is left to the caller.
//!
//! ## Example Config
//!
//! ```text
//! RUNNING /bin/notify.sh \T \D
//! FAILED  /bin/alert.sh {service} {service.owner}
//! ```
//!
//! ## Template Variables
//!
//! - `\T`, `\F`, `\C`: task, framework and container id
//! - `\D`: current time, `DD-MM-YYYY HH:MM:SS`
//! - `\\`, `\{`: literal backslash and brace
//! - `{key}`: task label value
//! - `{key.path}`: field of a JSON-encoded label value
//!
//! Values that cannot be resolved render as `?`.

pub mod config;
pub mod context;
pub mod hook_config;
pub mod json_path;
pub mod label;
pub mod template;

// Re-export key types
pub use config::{
    ConfigDiagnostic, HOOKS_FILE_NAME, ParsedConfig, StateCommandMap, default_hooks_path,
};
pub use context::SubstitutionContext;
pub use hook_config::{HookConfig, load_hook_config};
pub use label::{LabelPath, UNRESOLVED};
pub use taskhook_core::{Label, TaskState};
pub use template::render;
