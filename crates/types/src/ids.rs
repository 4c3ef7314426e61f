//! Newtype wrapper for graphics-state resource names.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// The resource name under which an interned style dictionary is declared in a
/// page's `/ExtGState` resources (for example `GS0`).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub struct StyleName(Arc<str>);

impl StyleName {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Name for the `index`-th interned dictionary.
    pub fn numbered(index: usize) -> Self {
        Self(format!("GS{index}").into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StyleName {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for StyleName {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for StyleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
