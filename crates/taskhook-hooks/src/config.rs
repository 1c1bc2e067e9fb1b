//! Hook binding file loading.
//!
//! Each non-blank line binds one task state to a command template:
//!
//! ```text
//! RUNNING /bin/notify.sh \T \D
//! FAILED  /bin/alert.sh {service} {service.owner}
//! ```
//!
//! The first token is the state keyword; the template is the rest of the
//! line after leading spaces and tabs, kept verbatim. Bad lines are logged
//! and skipped, never fatal. Each line is decoded on its own, so a line that
//! is not valid UTF-8 only loses that line.
//!
//! Lines whose first token starts with `#` are comments. They are skipped
//! without a warning instead of being reported as unrecognized states, so
//! `#RUNNING /bin/x` disables a binding quietly.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use taskhook_core::TaskState;

/// Default file name of the hook binding file.
pub const HOOKS_FILE_NAME: &str = "hooks.cfg";

/// Problem found while loading the hook binding file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigDiagnostic {
    #[error("line {line}: unrecognized status \"{keyword}\"")]
    UnknownState { line: usize, keyword: String },

    #[error("line {line}: duplicated status \"{state}\"")]
    DuplicateState { line: usize, state: TaskState },

    #[error("line {line}: empty command for status \"{state}\"")]
    EmptyCommand { line: usize, state: TaskState },

    #[error("line {line}: not valid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error("cannot read hook config {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },
}

/// Command templates keyed by task state, at most one per state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateCommandMap(BTreeMap<TaskState, String>);

impl StateCommandMap {
    pub fn get(&self, state: TaskState) -> Option<&str> {
        self.0.get(&state).map(String::as_str)
    }

    pub fn contains(&self, state: TaskState) -> bool {
        self.0.contains_key(&state)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bindings in state declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (TaskState, &str)> {
        self.0.iter().map(|(state, cmd)| (*state, cmd.as_str()))
    }

    /// Returns `false` and leaves the map unchanged if `state` is already bound.
    fn bind(&mut self, state: TaskState, command: String) -> bool {
        if self.0.contains_key(&state) {
            return false;
        }
        self.0.insert(state, command);
        true
    }
}

/// Keeps the first template seen for each state.
impl FromIterator<(TaskState, String)> for StateCommandMap {
    fn from_iter<I: IntoIterator<Item = (TaskState, String)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (state, command) in iter {
            map.bind(state, command);
        }
        map
    }
}

/// Outcome of loading a hook binding file.
#[derive(Debug, Clone, Default)]
pub struct ParsedConfig {
    pub commands: StateCommandMap,
    /// Every skipped line or read failure, in file order.
    pub diagnostics: Vec<ConfigDiagnostic>,
}

/// Load bindings from `path`.
///
/// A missing file yields an empty map. A file that exists but cannot be read
/// is treated the same way, with a diagnostic.
pub fn parse(path: &Path) -> ParsedConfig {
    match fs::read(path) {
        Ok(content) => parse_bytes(&content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "Hook config does not exist");
            ParsedConfig::default()
        }
        Err(e) => {
            let diagnostic = ConfigDiagnostic::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            };
            tracing::warn!("{diagnostic}");
            ParsedConfig {
                commands: StateCommandMap::default(),
                diagnostics: vec![diagnostic],
            }
        }
    }
}

/// Parse hook bindings from in-memory text.
pub fn parse_content(content: &str) -> ParsedConfig {
    parse_bytes(content.as_bytes())
}

/// Parse hook bindings from raw file contents, one `\n`-terminated record
/// at a time.
pub fn parse_bytes(content: &[u8]) -> ParsedConfig {
    let mut parsed = ParsedConfig::default();

    for (index, raw) in content.split(|b| *b == b'\n').enumerate() {
        let line = index + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        match std::str::from_utf8(raw) {
            Ok(record) => parse_record(&mut parsed, line, record),
            Err(_) => {
                let diagnostic = ConfigDiagnostic::InvalidUtf8 { line };
                tracing::warn!("{diagnostic}");
                parsed.diagnostics.push(diagnostic);
            }
        }
    }

    parsed
}

fn parse_record(parsed: &mut ParsedConfig, line: usize, raw: &str) {
    let record = raw.trim_start();
    if record.is_empty() || record.starts_with('#') {
        return;
    }

    let (keyword, rest) = record
        .split_once(char::is_whitespace)
        .unwrap_or((record, ""));

    let diagnostic = match keyword.parse::<TaskState>() {
        Err(_) => ConfigDiagnostic::UnknownState {
            line,
            keyword: keyword.to_string(),
        },
        Ok(state) if parsed.commands.contains(state) => {
            ConfigDiagnostic::DuplicateState { line, state }
        }
        Ok(state) => {
            let command = rest.trim_start_matches([' ', '\t']);
            if command.is_empty() {
                ConfigDiagnostic::EmptyCommand { line, state }
            } else {
                tracing::info!(state = %state, "Command for status {state}: {command}");
                parsed.commands.bind(state, command.to_string());
                return;
            }
        }
    };

    tracing::warn!("{diagnostic}");
    parsed.diagnostics.push(diagnostic);
}

/// Resolve the default hook binding file path
/// (`~/.config/taskhook/hooks.cfg` on Linux).
pub fn default_hooks_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "taskhook")
        .map(|dirs| dirs.config_dir().join(HOOKS_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
