use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lifecycle state reported for a task by the node agent.
///
/// Keywords are upper-case and matched case-sensitively, both in the hook
/// config file and on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Staging,
    Starting,
    Running,
    Finished,
    Killing,
    Killed,
    Failed,
    Lost,
    Error,
}

impl TaskState {
    /// Every state, in declaration order.
    pub const ALL: [TaskState; 9] = [
        Self::Staging,
        Self::Starting,
        Self::Running,
        Self::Finished,
        Self::Killing,
        Self::Killed,
        Self::Failed,
        Self::Lost,
        Self::Error,
    ];

    /// Returns the config-file keyword for this state.
    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Staging => "STAGING",
            Self::Starting => "STARTING",
            Self::Running => "RUNNING",
            Self::Finished => "FINISHED",
            Self::Killing => "KILLING",
            Self::Killed => "KILLED",
            Self::Failed => "FAILED",
            Self::Lost => "LOST",
            Self::Error => "ERROR",
        }
    }

    /// Returns `true` for states a task never leaves.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Finished | Self::Killed | Self::Failed | Self::Lost | Self::Error
        )
    }
}

impl std::str::FromStr for TaskState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_keyword() == s)
            .ok_or_else(|| CoreError::UnknownState(s.to_string()))
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_keyword())
    }
}

/// A key/value label attached to a task status update.
///
/// Label collections keep their source order and may repeat keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub value: String,
}

impl Label {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl std::str::FromStr for Label {
    type Err = CoreError;

    /// Parses `KEY=VALUE`, splitting on the first `=`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self::new(key, value)),
            _ => Err(CoreError::InvalidLabel(s.to_string())),
        }
    }
}

/// Output format for CLI responses
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
