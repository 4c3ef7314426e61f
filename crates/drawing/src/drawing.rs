//! The top-level drawing and its render entry points.

use crate::context::{GraphicsContext, RenderPass};
use crate::element::PathElement;
use crate::error::DrawingError;
use crate::path::PaintedPath;
use crate::registry::StyleRegistry;
use serde::{Deserialize, Serialize};
use std::io::Write;
use vellum_render_core::transform_operator;
use vellum_style::GraphicsStyle;
use vellum_types::{Point, StyleName, Transform};

/// Page placement for a render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Where the pen starts before the first element, in document units.
    pub first_point: Point,
    /// Document units per PDF point.
    pub scale: f64,
    /// Page height in PDF points, used to flip the y axis.
    pub page_height: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            first_point: Point::default(),
            scale: 1.0,
            page_height: 0.0,
        }
    }
}

/// The result of rendering a drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOutput {
    /// Content-stream operators, ready to embed verbatim.
    pub operators: String,
    /// Graphics-state names the page's `/ExtGState` resources must declare,
    /// in first-use order.
    pub style_names: Vec<StyleName>,
}

impl RenderOutput {
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

/// A top-level item of a drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingItem {
    Context(GraphicsContext),
    Path(PaintedPath),
}

impl From<GraphicsContext> for DrawingItem {
    fn from(context: GraphicsContext) -> Self {
        DrawingItem::Context(context)
    }
}

impl From<PaintedPath> for DrawingItem {
    fn from(path: PaintedPath) -> Self {
        DrawingItem::Path(path)
    }
}

/// The root of a vector drawing on a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingContext {
    items: Vec<DrawingItem>,
}

impl DrawingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: impl Into<DrawingItem>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    pub fn items(&self) -> &[DrawingItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders the drawing, interning graphics-state dictionaries in
    /// `registry`.
    ///
    /// Output is bracketed in `q`/`Q` and starts with a `cm` that flips the y
    /// axis about half of `page_height` and then scales by `scale`, so that
    /// drawing coordinates have a top-left origin. An empty drawing renders
    /// nothing.
    pub fn render(
        &self,
        first_point: Point,
        scale: f64,
        page_height: f64,
        registry: &mut StyleRegistry,
    ) -> RenderOutput {
        let mut pass = RenderPass::new(registry, false);
        let operators = self.render_items(&mut pass, first_point, scale, page_height);
        let (style_names, _) = pass.finish();
        RenderOutput {
            operators,
            style_names,
        }
    }

    pub fn render_with(&self, config: &RenderConfig, registry: &mut StyleRegistry) -> RenderOutput {
        self.render(config.first_point, config.scale, config.page_height, registry)
    }

    /// Renders exactly like [`render`](Self::render) and also writes an
    /// indented tree of what every node resolved to into `sink`.
    pub fn render_debug(
        &self,
        first_point: Point,
        scale: f64,
        page_height: f64,
        registry: &mut StyleRegistry,
        sink: &mut impl Write,
    ) -> Result<RenderOutput, DrawingError> {
        let mut pass = RenderPass::new(registry, true);
        let operators = self.render_items(&mut pass, first_point, scale, page_height);
        let (style_names, trace) = pass.finish();
        if let Some(trace) = trace {
            sink.write_all(trace.as_bytes())?;
        }
        Ok(RenderOutput {
            operators,
            style_names,
        })
    }

    fn render_items(
        &self,
        pass: &mut RenderPass<'_>,
        first_point: Point,
        scale: f64,
        page_height: f64,
    ) -> String {
        if self.items.is_empty() {
            return String::new();
        }

        let style = GraphicsStyle::drawing_defaults();

        let base_transform = Transform::scaling(1.0, -1.0)
            .about(0.0, page_height / 2.0)
            .scale(scale, scale);

        let mut render_list = vec!["q".to_string(), transform_operator(&base_transform)];
        let mut last = PathElement::Move(first_point);

        pass.write_trace("ROOT\n");
        let count = self.items.len();
        for (index, item) in self.items.iter().enumerate() {
            let pfx = if index + 1 == count {
                pass.write_trace(" └─ ");
                "    "
            } else {
                pass.write_trace(" ├─ ");
                " │  "
            };
            let (rendered, next) = match item {
                DrawingItem::Context(context) => {
                    let (list, next) = context.build_render_list(pass, &style, &last, true, pfx);
                    (list.join(" "), next)
                }
                DrawingItem::Path(path) => path.render(pass, &style, &last, pfx),
            };
            last = next;
            if !rendered.is_empty() {
                render_list.push(rendered);
            }
        }
        render_list.push("Q".to_string());

        log::debug!("Rendered drawing with {count} top-level item(s)");
        render_list.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_types::rgb8;

    #[test]
    fn empty_drawing_renders_nothing() {
        let mut registry = StyleRegistry::new();
        let output = DrawingContext::new().render(Point::default(), 1.0, 792.0, &mut registry);
        assert!(output.is_empty());
        assert!(output.style_names.is_empty());
    }

    #[test]
    fn flips_the_page_and_applies_scale() {
        let mut registry = StyleRegistry::new();
        let mut path = PaintedPath::new(0.0, 0.0);
        path.line_to(10.0, 10.0);
        let mut drawing = DrawingContext::new();
        drawing.add_item(path);

        let output = drawing.render(Point::default(), 2.0, 100.0, &mut registry);
        assert_eq!(output.operators, "q 2 0 0 -2 0 200 cm q 0 0 m 10 10 l h n Q Q");
    }

    #[test]
    fn style_names_follow_first_use() {
        let mut registry = StyleRegistry::new();
        registry.intern("<< /Type /ExtGState\n/LW 9 >>");

        let mut thin = PaintedPath::new(0.0, 0.0);
        thin.line_to(1.0, 1.0);
        thin.style_mut().set_stroke_width(1.0).unwrap().set_stroke_color(rgb8(0, 0, 0, None));
        let mut faint = thin.clone();
        faint.style_mut().set_fill_opacity(0.5).unwrap();

        let mut drawing = DrawingContext::new();
        drawing.add_item(faint).add_item(thin.clone()).add_item(thin);

        let output = drawing.render(Point::default(), 1.0, 0.0, &mut registry);
        let names: Vec<&str> = output.style_names.iter().map(StyleName::as_str).collect();
        assert_eq!(names, ["GS1", "GS2"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn render_with_reads_the_config() {
        let config: RenderConfig = serde_json::from_str(r#"{"scale": 0.5, "pageHeight": 20}"#).unwrap();
        assert_eq!(config.first_point, Point::default());

        let mut path = PaintedPath::new(0.0, 0.0);
        path.line_to(4.0, 0.0);
        let mut drawing = DrawingContext::new();
        drawing.add_item(path);

        let mut registry = StyleRegistry::new();
        let direct = drawing.render(Point::default(), 0.5, 20.0, &mut registry);
        let configured = drawing.render_with(&config, &mut registry);
        assert_eq!(direct, configured);
    }

    #[test]
    fn debug_render_matches_plain_render() {
        let mut path = PaintedPath::new(0.0, 0.0);
        path.line_to(5.0, 0.0).arc_to(5.0, 5.0, 0.0, false, true, 10.0, 5.0);
        path.style_mut().set_stroke_width(2.0).unwrap();
        let mut group = GraphicsContext::new();
        group.add_item(path.clone());
        let mut drawing = DrawingContext::new();
        drawing.add_item(path).add_item(group);

        let mut plain_registry = StyleRegistry::new();
        let plain = drawing.render(Point::default(), 1.0, 50.0, &mut plain_registry);
        let mut debug_registry = StyleRegistry::new();
        let mut trace = Vec::new();
        let traced = drawing
            .render_debug(Point::default(), 1.0, 50.0, &mut debug_registry, &mut trace)
            .unwrap();

        assert_eq!(plain, traced);
        let trace = String::from_utf8(trace).unwrap();
        assert!(trace.starts_with("ROOT\n ├─ GraphicsContext {\n"), "{trace}");
        assert!(trace.contains(" │      paint_rule: auto (inherited)\n"), "{trace}");
        assert!(trace.contains("\n └─ GraphicsContext {\n"), "{trace}");
        assert!(trace.contains("resolved to:\n"), "{trace}");
    }
}
