//! Hook command template rendering.
//!
//! Templates are expanded in a single left-to-right pass driven by
//! [`transition`], a pure function of the current [`ParserState`] and the
//! next input character. The returned [`Action`] is applied by [`render`].
//!
//! Top-level escapes:
//! - `\T`, `\F`, `\C`: task, framework and container id (`?` when absent)
//! - `\D`: current local time as `DD-MM-YYYY HH:MM:SS`
//! - `\\`, `\{`: literal backslash and brace
//!
//! Brace expressions:
//! - `{key}`: raw value of the first label named `key`
//! - `{key.path}`: label value parsed as JSON, walked along `path`
//! - `\.` and `\}` inside braces: literal dot and closing brace
//!
//! Only the first unescaped `.` in a brace expression separates the key from
//! the path. Anything unresolvable renders as `?`.

use crate::context::SubstitutionContext;
use crate::label::{self, LabelPath, UNRESOLVED};

/// `\D` output format.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Position of the renderer within the template grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    Normal,
    /// After a top-level `\`.
    Escape,
    /// Inside `{`, before the first unescaped `.`.
    Key,
    /// After `\` inside the key.
    KeyEscape,
    /// Inside `{`, after the first unescaped `.`.
    Nested,
    /// After `\` inside the nested path.
    NestedEscape,
}

impl ParserState {
    /// Whether the state lies inside an open brace expression.
    pub fn in_brace(self) -> bool {
        matches!(
            self,
            Self::Key | Self::KeyEscape | Self::Nested | Self::NestedEscape
        )
    }

    /// Action taken when the template ends in this state.
    ///
    /// An open brace expression is still resolved with whatever has been
    /// buffered; a dangling top-level `\` stops rendering.
    pub fn at_end(self) -> Action {
        match self {
            Self::Normal => Action::Consume,
            Self::Escape => Action::Stop,
            Self::Key | Self::KeyEscape | Self::Nested | Self::NestedEscape => Action::Resolve,
        }
    }
}

/// Effect of one input character on the output and parser buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Copy the character to the output.
    Emit(char),
    /// Drop the character.
    Consume,
    /// Expand a top-level escape code.
    Expand(char),
    /// Append to the key buffer.
    PushKey(char),
    /// First unescaped `.`: switch from key to nested path.
    BeginNested,
    /// Append to the nested path buffer.
    PushNested(char),
    /// Append `\.` to the nested path so the path walker keeps the dot
    /// inside its segment.
    PushNestedEscapedDot,
    /// Resolve the buffered brace expression, emit the result, clear buffers.
    Resolve,
    /// Unexpected escaped character inside a brace expression; dropped.
    Reject(char),
    /// Stop rendering and return the output built so far.
    Stop,
}

/// Result of [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: Action,
    pub next: ParserState,
}

impl Transition {
    fn new(action: Action, next: ParserState) -> Self {
        Self { action, next }
    }
}

/// The template grammar as a transition table.
pub fn transition(state: ParserState, ch: char) -> Transition {
    use Action::*;
    use ParserState::*;

    match (state, ch) {
        (Normal, '\\') => Transition::new(Consume, Escape),
        (Normal, '{') => Transition::new(Consume, Key),
        (Normal, c) => Transition::new(Emit(c), Normal),

        (Escape, c) => Transition::new(Expand(c), Normal),

        (Key, '\\') => Transition::new(Consume, KeyEscape),
        (Key, '.') => Transition::new(BeginNested, Nested),
        (Key, '}') => Transition::new(Resolve, Normal),
        (Key, c) => Transition::new(PushKey(c), Key),

        (KeyEscape, c @ ('.' | '}')) => Transition::new(PushKey(c), Key),
        (KeyEscape, c) => Transition::new(Reject(c), Key),

        (Nested, '\\') => Transition::new(Consume, NestedEscape),
        (Nested, '}') => Transition::new(Resolve, Normal),
        (Nested, c) => Transition::new(PushNested(c), Nested),

        (NestedEscape, '.') => Transition::new(PushNestedEscapedDot, Nested),
        (NestedEscape, '}') => Transition::new(PushNested('}'), Nested),
        (NestedEscape, c) => Transition::new(Reject(c), Nested),
    }
}

/// Buffers for the brace expression currently being scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserContext {
    pub key: String,
    pub nested: String,
    /// Set once the first unescaped `.` has been seen.
    pub separator_seen: bool,
}

impl ParserContext {
    /// Take the buffered expression, leaving the buffers empty.
    pub fn take_path(&mut self) -> LabelPath {
        let taken = std::mem::take(self);
        LabelPath {
            key: taken.key,
            nested: taken.separator_seen.then_some(taken.nested),
        }
    }
}

/// Expand `template` against `ctx`.
///
/// Never fails: malformed input is logged and skipped, unresolvable values
/// render as `?`.
pub fn render(template: &str, ctx: &SubstitutionContext) -> String {
    let mut renderer = Renderer::new(ctx, template.len());

    for ch in template.chars() {
        let Transition { action, next } = transition(renderer.state, ch);
        if !renderer.apply(action) {
            return renderer.output;
        }
        renderer.state = next;
    }

    renderer.finish()
}

struct Renderer<'a> {
    ctx: &'a SubstitutionContext,
    state: ParserState,
    parser: ParserContext,
    output: String,
}

impl<'a> Renderer<'a> {
    fn new(ctx: &'a SubstitutionContext, capacity: usize) -> Self {
        Self {
            ctx,
            state: ParserState::Normal,
            parser: ParserContext::default(),
            output: String::with_capacity(capacity),
        }
    }

    /// Returns `false` when rendering must stop.
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Emit(c) => self.output.push(c),
            Action::Consume => {}
            Action::Expand(code) => self.expand(code),
            Action::PushKey(c) => self.parser.key.push(c),
            Action::BeginNested => self.parser.separator_seen = true,
            Action::PushNested(c) => self.parser.nested.push(c),
            Action::PushNestedEscapedDot => self.parser.nested.push_str("\\."),
            Action::Resolve => {
                let path = self.parser.take_path();
                self.output.push_str(&label::resolve(&self.ctx.labels, &path));
            }
            Action::Reject(c) => {
                tracing::warn!("Unexpected symbol \\{c} inside brace expression in hook command");
            }
            Action::Stop => {
                tracing::warn!("Trailing backslash in hook command");
                return false;
            }
        }
        true
    }

    fn expand(&mut self, code: char) {
        match code {
            'T' => push_or_unresolved(&mut self.output, self.ctx.task_id.as_deref()),
            'F' => push_or_unresolved(&mut self.output, self.ctx.framework_id.as_deref()),
            'C' => push_or_unresolved(&mut self.output, self.ctx.container_id.as_deref()),
            'D' => self
                .output
                .push_str(&self.ctx.now.format(TIMESTAMP_FORMAT).to_string()),
            '\\' | '{' => self.output.push(code),
            other => tracing::warn!("Unexpected symbol \\{other} in hook command"),
        }
    }

    fn finish(mut self) -> String {
        if self.state.in_brace() {
            tracing::warn!(
                key = %self.parser.key,
                "Unterminated brace expression in hook command"
            );
        }
        self.apply(self.state.at_end());
        self.output
    }
}

fn push_or_unresolved(output: &mut String, value: Option<&str>) {
    output.push_str(value.unwrap_or(UNRESOLVED));
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
