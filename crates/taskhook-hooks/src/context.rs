//! Per-event values available to hook command templates.

use chrono::{DateTime, Local};
use taskhook_core::Label;

/// Values substituted into a template for one task status event.
///
/// Built fresh for every `prepare_command` call and never shared between
/// calls.
#[derive(Debug, Clone)]
pub struct SubstitutionContext {
    /// Substituted for `\T`.
    pub task_id: Option<String>,
    /// Substituted for `\F`.
    pub framework_id: Option<String>,
    /// Substituted for `\C`.
    pub container_id: Option<String>,
    /// Searched in order by `{key}` expressions; the first matching key wins.
    pub labels: Vec<Label>,
    /// Substituted for `\D`.
    pub now: DateTime<Local>,
}

impl SubstitutionContext {
    /// Empty context stamped with the current local time.
    pub fn new() -> Self {
        Self::at(Local::now())
    }

    /// Empty context stamped with `now`.
    pub fn at(now: DateTime<Local>) -> Self {
        Self {
            task_id: None,
            framework_id: None,
            container_id: None,
            labels: Vec::new(),
            now,
        }
    }

    pub fn with_task_id(mut self, id: impl Into<String>) -> Self {
        self.task_id = Some(id.into());
        self
    }

    pub fn with_framework_id(mut self, id: impl Into<String>) -> Self {
        self.framework_id = Some(id.into());
        self
    }

    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = Some(id.into());
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.push(Label::new(key, value));
        self
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels.extend(labels);
        self
    }
}

impl Default for SubstitutionContext {
    fn default() -> Self {
        Self::new()
    }
}
