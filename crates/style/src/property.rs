//! The three-state value carried by every style property.

use std::fmt;

/// A style property value.
///
/// `Inherit` defers to the enclosing context during a merge. `Unset` is an
/// explicit "no value" that stops inheritance; it is only meaningful for the
/// properties that take part in paint-rule detection (colors and stroke width).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Property<T> {
    #[default]
    Inherit,
    Unset,
    Value(T),
}

impl<T> Property<T> {
    pub fn is_inherit(&self) -> bool {
        matches!(self, Property::Inherit)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Property::Unset)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Property::Value(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Property::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Property<&T> {
        match self {
            Property::Inherit => Property::Inherit,
            Property::Unset => Property::Unset,
            Property::Value(value) => Property::Value(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Property<U> {
        match self {
            Property::Inherit => Property::Inherit,
            Property::Unset => Property::Unset,
            Property::Value(value) => Property::Value(f(value)),
        }
    }

    /// This value, or `parent` when this one is `Inherit`.
    pub fn or_inherit(self, parent: Property<T>) -> Property<T> {
        match self {
            Property::Inherit => parent,
            other => other,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Property::Inherit => "inherit",
            Property::Unset => "unset",
            Property::Value(_) => "a value",
        }
    }
}

impl<T> From<T> for Property<T> {
    fn from(value: T) -> Self {
        Property::Value(value)
    }
}

impl<T: fmt::Display> fmt::Display for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Inherit => f.write_str("INHERIT"),
            Property::Unset => f.write_str("None"),
            Property::Value(value) => value.fmt(f),
        }
    }
}
