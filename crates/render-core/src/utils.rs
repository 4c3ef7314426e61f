//! Operator helpers shared by the drawing renderer.

use crate::traits::PdfRepr;
use vellum_types::{Color, Transform};

/// Which painting operation a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintTarget {
    Fill,
    Stroke,
}

/// Renders a color-setting operator, e.g. `1 0 0 rg` or `0.5 G`.
pub fn color_operator(color: &Color, target: PaintTarget) -> String {
    let operator = match target {
        PaintTarget::Fill => color.operator().to_string(),
        PaintTarget::Stroke => color.operator().to_uppercase(),
    };
    format!("{} {}", color.pdf_repr(), operator)
}

/// Renders a transform as a `cm` operator.
pub fn transform_operator(transform: &Transform) -> String {
    format!("{} cm", transform.pdf_repr())
}
