//! Resolution of `{key}` and `{key.path}` brace expressions.

use taskhook_core::Label;

use crate::json_path;

/// Substituted for any value that cannot be resolved.
pub const UNRESOLVED: &str = "?";

/// Target of one brace expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelPath {
    /// Label key, matched exactly.
    pub key: String,
    /// Path into the label value parsed as JSON. `None` when the expression
    /// had no unescaped `.`.
    pub nested: Option<String>,
}

impl LabelPath {
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            nested: None,
        }
    }

    pub fn nested(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            nested: Some(path.into()),
        }
    }
}

/// Resolve `path` against `labels`, returning [`UNRESOLVED`] on any failure.
///
/// The first label whose key equals `path.key` is used. Without a nested
/// path (or with an empty one) its raw value is returned; otherwise the value
/// must parse as a JSON object containing the nested path.
pub fn resolve(labels: &[Label], path: &LabelPath) -> String {
    let Some(label) = labels.iter().find(|label| label.key == path.key) else {
        tracing::warn!(key = %path.key, "No label for brace expression");
        return UNRESOLVED.to_string();
    };

    let nested = match path.nested.as_deref() {
        None | Some("") => return label.value.clone(),
        Some(nested) => nested,
    };

    let value: serde_json::Value = match serde_json::from_str(&label.value) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = %path.key, "Label value is not valid JSON: {e}");
            return UNRESOLVED.to_string();
        }
    };

    if !value.is_object() {
        tracing::warn!(key = %path.key, "Label value is not a JSON object");
        return UNRESOLVED.to_string();
    }

    match json_path::find(&value, nested) {
        Some(found) => json_path::render_value(found),
        None => {
            tracing::warn!(key = %path.key, path = %nested, "Path not found in label value");
            UNRESOLVED.to_string()
        }
    }
}
