#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use vellum::{DrawingContext, Point, RenderOutput, StyleRegistry};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// US Letter height in points.
pub const PAGE_HEIGHT: f64 = 792.0;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders `drawing` with a fresh registry at scale 1 on a Letter page.
pub fn render_fresh(drawing: &DrawingContext) -> (RenderOutput, StyleRegistry) {
    let mut registry = StyleRegistry::new();
    let output = drawing.render(Point::default(), 1.0, PAGE_HEIGHT, &mut registry);
    (output, registry)
}

/// Renders a single path on its own.
pub fn render_path(path: vellum::PaintedPath) -> RenderOutput {
    let mut drawing = DrawingContext::new();
    drawing.add_item(path);
    render_fresh(&drawing).0
}
