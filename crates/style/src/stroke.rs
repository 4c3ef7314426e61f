//! Stroke line caps, joins and dash patterns.

use crate::coerce::coercive_enum;
use crate::error::StyleError;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use vellum_render_core::PdfPrimitive;
use vellum_types::number_to_str;

coercive_enum! {
    /// The shape drawn at the open ends of stroked subpaths.
    pub enum StrokeCapStyle ("stroke cap style") : numeric {
        Butt = ("BUTT", 0),
        Round = ("ROUND", 1),
        /// Projecting square cap extending half the line width past the end.
        Square = ("SQUARE", 2),
    }
}

coercive_enum! {
    /// The shape drawn where two stroked segments meet.
    pub enum StrokeJoinStyle ("stroke join style") : numeric {
        Miter = ("MITER", 0),
        Round = ("ROUND", 1),
        Bevel = ("BEVEL", 2),
    }
}

/// Dash lengths paired with the phase at which the pattern starts.
///
/// An empty pattern is a solid line.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DashPattern {
    lengths: Vec<f64>,
    phase: f64,
}

impl DashPattern {
    pub fn new(lengths: Vec<f64>, phase: f64) -> Result<Self, StyleError> {
        for &length in &lengths {
            check_non_negative("stroke dash length", length)?;
        }
        Ok(Self {
            lengths,
            phase: check_non_negative("stroke dash phase", phase)?,
        })
    }

    pub fn solid() -> Self {
        Self::default()
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub(crate) fn with_phase(&self, phase: f64) -> Result<Self, StyleError> {
        Ok(Self {
            lengths: self.lengths.clone(),
            phase: check_non_negative("stroke dash phase", phase)?,
        })
    }

    fn lengths_primitive(&self) -> PdfPrimitive {
        PdfPrimitive::Array(self.lengths.iter().copied().map(PdfPrimitive::Real).collect())
    }

    /// The `[[lengths] phase]` array stored under `/D`.
    pub fn to_pdf_primitive(&self) -> PdfPrimitive {
        PdfPrimitive::Array(vec![self.lengths_primitive(), PdfPrimitive::Real(self.phase)])
    }

    /// The inline `d` operator, e.g. `[3 1] 0 d`.
    pub fn operator(&self) -> String {
        format!("{} {} d", self.lengths_primitive(), number_to_str(self.phase))
    }
}

impl fmt::Display for DashPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.lengths.iter().map(|l| number_to_str(*l)).join(", "))
    }
}

pub(crate) fn check_non_negative(property: &'static str, value: f64) -> Result<f64, StyleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(StyleError::Negative { property, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_styles_accept_integers_and_names() {
        assert_eq!(StrokeCapStyle::try_from(2_i64).unwrap(), StrokeCapStyle::Square);
        assert_eq!("round".parse::<StrokeJoinStyle>().unwrap(), StrokeJoinStyle::Round);
        assert_eq!("2".parse::<StrokeJoinStyle>().unwrap(), StrokeJoinStyle::Bevel);
        assert_eq!(StrokeJoinStyle::Bevel.as_int(), 2);
        assert!(matches!(
            StrokeCapStyle::try_from(3_i64),
            Err(StyleError::InvalidValue { property: "stroke cap style", .. })
        ));
    }

    #[test]
    fn numeric_styles_deserialize_from_int_or_string() {
        let caps: Vec<StrokeCapStyle> = serde_json::from_str(r#"[1, "SQUARE", "butt"]"#).unwrap();
        assert_eq!(caps, vec![StrokeCapStyle::Round, StrokeCapStyle::Square, StrokeCapStyle::Butt]);
        assert!(serde_json::from_str::<StrokeCapStyle>("7").is_err());
    }

    #[test]
    fn dash_pattern_renders_both_forms() {
        let dash = DashPattern::new(vec![3.0, 1.5], 2.0).unwrap();
        assert_eq!(dash.operator(), "[3 1.5] 2 d");
        assert_eq!(dash.to_pdf_primitive().render(), "[[3 1.5] 2]");
        assert_eq!(DashPattern::solid().operator(), "[] 0 d");
    }

    #[test]
    fn dash_pattern_rejects_negative_lengths() {
        assert!(matches!(
            DashPattern::new(vec![1.0, -1.0], 0.0),
            Err(StyleError::Negative { property: "stroke dash length", .. })
        ));
    }
}
