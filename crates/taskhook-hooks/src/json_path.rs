//! Dotted-path lookup into a parsed JSON label value.
//!
//! Path grammar:
//! - segments are separated by `.`; `\.` is a literal dot inside a segment
//! - a segment may end in one or more `[N]` suffixes indexing into arrays
//!
//! `a.b\.c[1]` walks `root["a"]["b.c"][1]`.

use serde_json::Value;

/// Walk `path` from `root`. Returns `None` as soon as a segment is missing
/// or the value at that point has the wrong shape.
pub fn find<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in split_path(path) {
        let (name, indices) = split_indices(&segment);
        if !name.is_empty() || indices.is_empty() {
            current = current.as_object()?.get(name)?;
        }
        for index in indices {
            current = current.as_array()?.get(index)?;
        }
    }
    Some(current)
}

/// Text substituted for a resolved value: strings without quotes, anything
/// else as compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn split_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' if chars.peek() == Some(&'.') => {
                chars.next();
                current.push('.');
            }
            '.' => segments.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    segments.push(current);
    segments
}

fn split_indices(segment: &str) -> (&str, Vec<usize>) {
    let mut name = segment;
    let mut indices = Vec::new();
    while let Some(body) = name.strip_suffix(']') {
        let Some(open) = body.rfind('[') else {
            break;
        };
        let Ok(index) = body[open + 1..].parse::<usize>() else {
            break;
        };
        indices.push(index);
        name = &body[..open];
    }
    indices.reverse();
    (name, indices)
}
