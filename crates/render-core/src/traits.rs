use itertools::Itertools;
use vellum_types::{number_to_str, Color, Point, Transform};

/// A value that renders itself into PDF syntax.
pub trait PdfRepr {
    fn pdf_repr(&self) -> String;
}

impl PdfRepr for Point {
    fn pdf_repr(&self) -> String {
        format!("{} {}", number_to_str(self.x), number_to_str(self.y))
    }
}

impl PdfRepr for Transform {
    fn pdf_repr(&self) -> String {
        [self.a, self.b, self.c, self.d, self.e, self.f]
            .into_iter()
            .map(number_to_str)
            .join(" ")
    }
}

impl PdfRepr for Color {
    /// The channel operands, without the color operator.
    fn pdf_repr(&self) -> String {
        self.colors().into_iter().map(number_to_str).join(" ")
    }
}
