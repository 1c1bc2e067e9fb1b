//! State-to-command bindings ready for rendering.

use std::path::Path;

use taskhook_core::TaskState;

use crate::config::{self, StateCommandMap};
use crate::context::SubstitutionContext;
use crate::template;

/// Loaded hook bindings.
///
/// Read-only once built, so a shared reference (or an `Arc`) can be used
/// from any number of threads without locking.
#[derive(Debug, Clone, Default)]
pub struct HookConfig {
    commands: StateCommandMap,
}

impl HookConfig {
    pub fn new(commands: StateCommandMap) -> Self {
        Self { commands }
    }

    /// Raw template bound to `state`.
    pub fn template_for(&self, state: TaskState) -> Option<&str> {
        self.commands.get(state)
    }

    /// All bindings in state declaration order.
    pub fn bindings(&self) -> impl Iterator<Item = (TaskState, &str)> {
        self.commands.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Render the command bound to `state`, or `None` if no hook is bound.
    pub fn prepare_command(&self, state: TaskState, ctx: &SubstitutionContext) -> Option<String> {
        let template = self.commands.get(state)?;
        let command = template::render(template, ctx);
        tracing::debug!(state = %state, command = %command, "Prepared hook command");
        Some(command)
    }
}

/// Load hook bindings from `path`, skipping bad lines.
pub fn load_hook_config(path: &Path) -> HookConfig {
    HookConfig::new(config::parse(path).commands)
}
