use thiserror::Error;
use vellum_types::ColorError;

/// Errors raised when a style property is assigned or parsed.
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("{property} value {value} not in range [0, 1]")]
    OutOfRange { property: &'static str, value: f64 },

    #[error("{property} must be a finite non-negative number, got {value}")]
    Negative { property: &'static str, value: f64 },

    #[error("{value:?} is not a valid {property}")]
    InvalidValue { property: &'static str, value: String },

    #[error("{property} cannot be {found}")]
    InvalidType {
        property: &'static str,
        found: &'static str,
    },

    #[error("{input:?} is not a hex color: {reason}")]
    HexFormat { input: String, reason: &'static str },

    #[error("no dash pattern to set the phase on")]
    NoDashPattern,

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("invalid style definition: {0}")]
    Json(#[from] serde_json::Error),
}
