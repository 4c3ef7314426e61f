//! Serialization of PDF primitive values.
//!
//! [`PdfPrimitive`] is the closed set of value kinds that may appear as operands
//! or inside a graphics-state dictionary. Anything else must provide its own
//! rendering through [`PdfRepr`] and enters the set as [`PdfPrimitive::Raw`].

use crate::traits::PdfRepr;
use itertools::Itertools;
use std::fmt;
use std::sync::Arc;
use vellum_types::number_to_str;

/// A PDF name object. Rendered with a leading solidus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(Arc<str>);

impl Name {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PdfPrimitive {
    /// Pre-rendered text, emitted verbatim.
    Raw(String),
    Name(Name),
    /// A literal string, emitted in parentheses.
    Str(String),
    /// A byte string, emitted as hexadecimal.
    Bytes(Vec<u8>),
    Integer(i64),
    Real(f64),
    Bool(bool),
    Null,
    Array(Vec<PdfPrimitive>),
    /// A dictionary. Entries keep their insertion order.
    Dict(Vec<(Name, PdfPrimitive)>),
}

impl PdfPrimitive {
    /// Wraps a value that knows how to render itself.
    pub fn from_repr(value: &impl PdfRepr) -> Self {
        PdfPrimitive::Raw(value.pdf_repr())
    }

    pub fn render(&self) -> String {
        match self {
            PdfPrimitive::Raw(raw) => raw.clone(),
            PdfPrimitive::Name(name) => name.to_string(),
            PdfPrimitive::Str(text) => format!("({})", escape_literal(text)),
            PdfPrimitive::Bytes(bytes) => {
                format!("<{}>", bytes.iter().map(|b| format!("{b:02x}")).join(""))
            }
            PdfPrimitive::Integer(value) => number_to_str(*value as f64),
            PdfPrimitive::Real(value) => number_to_str(*value),
            PdfPrimitive::Bool(value) => value.to_string(),
            PdfPrimitive::Null => "null".to_string(),
            PdfPrimitive::Array(items) => {
                format!("[{}]", items.iter().map(PdfPrimitive::render).join(" "))
            }
            PdfPrimitive::Dict(entries) => {
                let body = entries
                    .iter()
                    .map(|(key, value)| format!("{} {}", key, value.render()))
                    .join("\n");
                format!("<< {body} >>")
            }
        }
    }
}

fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '(' | ')' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

impl fmt::Display for PdfPrimitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<f64> for PdfPrimitive {
    fn from(value: f64) -> Self {
        PdfPrimitive::Real(value)
    }
}

impl From<i64> for PdfPrimitive {
    fn from(value: i64) -> Self {
        PdfPrimitive::Integer(value)
    }
}

impl From<bool> for PdfPrimitive {
    fn from(value: bool) -> Self {
        PdfPrimitive::Bool(value)
    }
}

impl From<Name> for PdfPrimitive {
    fn from(name: Name) -> Self {
        PdfPrimitive::Name(name)
    }
}

impl From<&str> for PdfPrimitive {
    fn from(text: &str) -> Self {
        PdfPrimitive::Str(text.to_string())
    }
}

impl From<Vec<PdfPrimitive>> for PdfPrimitive {
    fn from(items: Vec<PdfPrimitive>) -> Self {
        PdfPrimitive::Array(items)
    }
}

impl<T: Into<PdfPrimitive>> From<Option<T>> for PdfPrimitive {
    fn from(value: Option<T>) -> Self {
        value.map_or(PdfPrimitive::Null, Into::into)
    }
}
