//! Rendering of selection sets, operations, and argument values as GraphQL
//! text.
//!
//! Every node implements [`std::fmt::Display`] with the same output as its
//! `to_graphql_string()` method. Rendering never fails: [`Raw`] selections
//! are emitted verbatim and are the caller's responsibility.
//!
//! Layout rules:
//!
//! * A non-empty selection set renders as `{`, a newline, each selection
//!   indented by [`INDENT`] on its own line, a newline, and `}`. An empty
//!   selection set renders as the empty string.
//! * A field renders as `alias: name(arg: value, ...)` followed by a space
//!   and its sub-selection when it has one. Arguments keep insertion order.
//! * An inline fragment renders as `... on Type {...}` and an operation as
//!   `<keyword> {...}`.

use crate::Value;
use crate::operation::FieldSelection;
use crate::operation::InlineFragment;
use crate::operation::Operation;
use crate::operation::Raw;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use std::fmt;
use std::fmt::Display;
use std::fmt::Write;

/// The indentation added for each level of selection set nesting.
pub const INDENT: &str = "  ";

/// Escape `text` for use inside a double-quoted GraphQL string literal.
///
/// Backslash, double-quote, backspace, form feed, newline, carriage return,
/// and tab get single-character backslash escapes. Every other character is
/// passed through unchanged.
pub fn escape_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\u{8}' => escaped.push_str("\\b"),
            '\u{c}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            ch => escaped.push(ch),
        }
    }
    escaped
}

fn write_quoted(f: &mut impl Write, text: &str) -> fmt::Result {
    f.write_char('"')?;
    f.write_str(escape_string(text).as_str())?;
    f.write_char('"')
}

/// Write `text` with every line that holds more than whitespace prefixed by
/// [`INDENT`].
fn write_indented(f: &mut impl Write, text: &str) -> fmt::Result {
    for (idx, line) in text.split('\n').enumerate() {
        if idx > 0 {
            f.write_char('\n')?;
        }
        if !line.trim().is_empty() {
            f.write_str(INDENT)?;
        }
        f.write_str(line)?;
    }
    Ok(())
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("true"),
            Self::Bool(false) => f.write_str("false"),
            Self::Custom(custom) => Display::fmt(custom.literal(), f),
            Self::Enum(member_name) => f.write_str(member_name),
            // `{:?}` keeps a fractional part (`1.0`), so the literal reads back
            // as a Float rather than an Int.
            Self::Float(float) => write!(f, "{float:?}"),
            Self::Int(int) => Display::fmt(int, f),
            Self::List(items) => {
                f.write_char('[')?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_char(' ')?;
                    }
                    Display::fmt(item, f)?;
                }
                f.write_char(']')
            },
            Self::Null => f.write_str("null"),
            Self::Object(entries) => {
                f.write_char('{')?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            },
            Self::String(text) => write_quoted(f, text),
        }
    }
}

impl Value {
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}

impl Display for FieldSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(alias) = self.alias() {
            write!(f, "{alias}: ")?;
        }
        f.write_str(self.name())?;

        if !self.arguments().is_empty() {
            f.write_char('(')?;
            for (idx, (arg_name, arg_value)) in self.arguments().iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg_name}: {arg_value}")?;
            }
            f.write_char(')')?;
        }

        if let Some(selection_set) = self.selection_set().filter(|set| !set.is_empty()) {
            write!(f, " {selection_set}")?;
        }
        Ok(())
    }
}

impl FieldSelection {
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}

impl Display for InlineFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "... on {} {}", self.on_type_name(), self.selection_set())
    }
}

impl InlineFragment {
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}

impl Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => Display::fmt(field, f),
            Self::InlineFragment(fragment) => Display::fmt(fragment, f),
            Self::Raw(raw) => Display::fmt(raw, f),
        }
    }
}

impl Display for SelectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        f.write_str("{\n")?;
        for (idx, selection) in self.iter().enumerate() {
            if idx > 0 {
                f.write_char('\n')?;
            }
            write_indented(f, selection.to_string().as_str())?;
        }
        f.write_str("\n}")
    }
}

impl SelectionSet {
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.selection_set())
    }
}

impl Operation {
    /// The document to send to a server for this operation.
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }
}
