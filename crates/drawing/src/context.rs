//! Style scopes of the scene graph and the render pass that walks them.

use crate::element::PathElement;
use crate::path::{ClippingPath, PaintedPath};
use crate::registry::StyleRegistry;
use vellum_render_core::{color_operator, transform_operator, PaintTarget};
use vellum_style::{GraphicsStyle, Property};
use vellum_types::{StyleName, Transform};

/// Anything that can sit inside a [`GraphicsContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicsItem {
    Element(PathElement),
    Context(GraphicsContext),
    Path(PaintedPath),
}

impl From<PathElement> for GraphicsItem {
    fn from(element: PathElement) -> Self {
        GraphicsItem::Element(element)
    }
}

impl From<GraphicsContext> for GraphicsItem {
    fn from(context: GraphicsContext) -> Self {
        GraphicsItem::Context(context)
    }
}

impl From<PaintedPath> for GraphicsItem {
    fn from(path: PaintedPath) -> Self {
        GraphicsItem::Path(path)
    }
}

impl GraphicsItem {
    pub(crate) fn render(
        &self,
        pass: &mut RenderPass<'_>,
        style: &GraphicsStyle,
        previous: &PathElement,
        pfx: &str,
    ) -> (String, PathElement) {
        match self {
            GraphicsItem::Element(element) => match pass.trace.as_mut() {
                Some(trace) => element.render_debug(style, previous, trace, pfx),
                None => element.render(style, previous),
            },
            GraphicsItem::Context(context) => {
                let (list, last) = context.build_render_list(pass, style, previous, true, pfx);
                (list.join(" "), last)
            }
            GraphicsItem::Path(path) => path.render(pass, style, previous, pfx),
        }
    }
}

/// State shared by every node during one render: the document's registry, the
/// style names this render referenced, and the optional debug trace.
pub(crate) struct RenderPass<'r> {
    registry: &'r mut StyleRegistry,
    used: Vec<StyleName>,
    pub(crate) trace: Option<String>,
}

impl<'r> RenderPass<'r> {
    pub(crate) fn new(registry: &'r mut StyleRegistry, tracing: bool) -> Self {
        Self {
            registry,
            used: Vec::new(),
            trace: tracing.then(String::new),
        }
    }

    fn intern(&mut self, dict: &str) -> StyleName {
        let name = self.registry.intern(dict);
        if !self.used.contains(&name) {
            self.used.push(name.clone());
        }
        name
    }

    pub(crate) fn write_trace(&mut self, text: &str) {
        if let Some(trace) = self.trace.as_mut() {
            trace.push_str(text);
        }
    }

    pub(crate) fn is_tracing(&self) -> bool {
        self.trace.is_some()
    }

    pub(crate) fn finish(self) -> (Vec<StyleName>, Option<String>) {
        (self.used, self.trace)
    }
}

/// A scope that applies a style, an optional transform and an optional clipping
/// path to an ordered list of items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphicsContext {
    style: GraphicsStyle,
    items: Vec<GraphicsItem>,
    transform: Option<Transform>,
    clipping_path: Option<Box<ClippingPath>>,
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> &GraphicsStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut GraphicsStyle {
        &mut self.style
    }

    pub fn set_style(&mut self, style: GraphicsStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.transform.as_ref()
    }

    pub fn set_transform(&mut self, transform: Option<Transform>) -> &mut Self {
        self.transform = transform;
        self
    }

    pub fn clipping_path(&self) -> Option<&ClippingPath> {
        self.clipping_path.as_deref()
    }

    pub fn set_clipping_path(&mut self, clipping_path: Option<ClippingPath>) -> &mut Self {
        self.clipping_path = clipping_path.map(Box::new);
        self
    }

    pub fn items(&self) -> &[GraphicsItem] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut Vec<GraphicsItem> {
        &mut self.items
    }

    pub fn add_item(&mut self, item: impl Into<GraphicsItem>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    pub fn remove_last_item(&mut self) -> Option<GraphicsItem> {
        self.items.pop()
    }

    /// Appends `other`'s items to this context. `other`'s style, transform and
    /// clipping path are dropped.
    pub fn merge(&mut self, other: GraphicsContext) -> &mut Self {
        self.items.extend(other.items);
        self
    }

    /// Renders this context to a list of operator strings.
    ///
    /// Graphics-state entries and color/dash operators come from this
    /// context's own style; the items are rendered with `style` merged over it.
    /// With `push_stack` the output is wrapped in `q`/`Q`. An empty context
    /// renders nothing and leaves `previous` untouched.
    pub(crate) fn build_render_list(
        &self,
        pass: &mut RenderPass<'_>,
        style: &GraphicsStyle,
        previous: &PathElement,
        push_stack: bool,
        pfx: &str,
    ) -> (Vec<String>, PathElement) {
        if self.items.is_empty() {
            pass.write_trace("GraphicsContext (empty)\n");
            return (Vec::new(), previous.clone());
        }

        let merged = GraphicsStyle::merge(style, &self.style);
        if pass.is_tracing() {
            let header = self.describe(&merged, pfx);
            pass.write_trace(&header);
        }

        let mut render_list = Vec::new();
        if let Some(dict) = self.style.to_pdf_dict() {
            let name = pass.intern(&dict);
            render_list.push(format!("/{name} gs"));
        }
        if let Property::Value(color) = self.style.fill_color() {
            render_list.push(color_operator(&color, PaintTarget::Fill));
        }
        if let Property::Value(color) = self.style.stroke_color() {
            render_list.push(color_operator(&color, PaintTarget::Stroke));
        }
        if let Property::Value(dash) = self.style.stroke_dash() {
            render_list.push(dash.operator());
        }

        if let Some(clipping_path) = &self.clipping_path {
            pass.write_trace(&format!("{pfx} ├─ "));
            let (rendered, _) =
                clipping_path.render(pass, &merged, previous, &format!("{pfx} │  "));
            if !rendered.is_empty() {
                render_list.push(rendered);
            }
        }

        let mut last = previous.clone();
        let count = self.items.len();
        for (index, item) in self.items.iter().enumerate() {
            let child_pfx = if index + 1 == count {
                pass.write_trace(&format!("{pfx} └─ "));
                format!("{pfx}    ")
            } else {
                pass.write_trace(&format!("{pfx} ├─ "));
                format!("{pfx} │  ")
            };
            let (rendered, next) = item.render(pass, &merged, &last, &child_pfx);
            last = next;
            if !rendered.is_empty() {
                render_list.push(rendered);
            }
        }

        if let Some(transform) = &self.transform {
            render_list.insert(0, transform_operator(transform));
        }
        if push_stack {
            render_list.insert(0, "q".to_string());
            render_list.push("Q".to_string());
        }
        log::trace!("Rendered graphics context with {count} item(s)");
        (render_list, last)
    }

    /// Trace header listing the resolved properties; ones this context does
    /// not set itself are marked as inherited.
    fn describe(&self, merged: &GraphicsStyle, pfx: &str) -> String {
        let resolved = merged.explicit_properties();
        if resolved.is_empty() {
            return "GraphicsContext\n".to_string();
        }
        let own: Vec<&str> = self
            .style
            .explicit_properties()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        let mut out = String::from("GraphicsContext {\n");
        for (name, value) in resolved {
            let origin = if own.contains(&name) { "" } else { " (inherited)" };
            out.push_str(&format!("{pfx}    {name}: {value}{origin}\n"));
        }
        out.push_str(&format!("{pfx}}}┐\n"));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_types::{rgb8, Point};

    fn render(context: &GraphicsContext, style: &GraphicsStyle, registry: &mut StyleRegistry) -> (String, Vec<StyleName>) {
        let mut pass = RenderPass::new(registry, false);
        let (list, _) = context.build_render_list(&mut pass, style, &PathElement::Move(Point::default()), true, "");
        let (used, _) = pass.finish();
        (list.join(" "), used)
    }

    fn line_context() -> GraphicsContext {
        let mut context = GraphicsContext::new();
        context
            .add_item(PathElement::Move(Point::new(0.0, 0.0)))
            .add_item(PathElement::Line(Point::new(10.0, 0.0)));
        context
    }

    #[test]
    fn empty_context_renders_nothing() {
        let mut registry = StyleRegistry::new();
        let mut context = GraphicsContext::new();
        context.style_mut().set_stroke_width(3.0).unwrap();
        let (text, used) = render(&context, &GraphicsStyle::new(), &mut registry);
        assert_eq!(text, "");
        assert!(used.is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn wraps_items_in_a_stack_frame() {
        let mut registry = StyleRegistry::new();
        let (text, _) = render(&line_context(), &GraphicsStyle::new(), &mut registry);
        assert_eq!(text, "q 0 0 m 10 0 l Q");
    }

    #[test]
    fn emits_state_and_color_operators_in_order() {
        let mut registry = StyleRegistry::new();
        let mut context = line_context();
        context
            .style_mut()
            .set_stroke_width(2.0)
            .unwrap()
            .set_fill_color(rgb8(255, 0, 0, None))
            .set_stroke_color(rgb8(0, 0, 255, None))
            .set_stroke_dash_pattern(vec![3.0, 1.0])
            .unwrap();
        context.set_transform(Some(Transform::translation(5.0, 5.0)));

        let (text, used) = render(&context, &GraphicsStyle::new(), &mut registry);
        assert_eq!(
            text,
            "q 1 0 0 1 5 5 cm /GS0 gs 1 0 0 rg 0 0 1 RG [3 1] 0 d 0 0 m 10 0 l Q"
        );
        assert_eq!(used, vec![StyleName::from("GS0")]);
        assert!(registry.lookup_by_name("GS0").unwrap().contains("/LW 2"));
    }

    #[test]
    fn inherited_properties_do_not_reemit() {
        let mut registry = StyleRegistry::new();
        let mut parent = GraphicsStyle::new();
        parent.set_stroke_width(4.0).unwrap().set_fill_color(rgb8(0, 255, 0, None));
        let (text, _) = render(&line_context(), &parent, &mut registry);
        assert_eq!(text, "q 0 0 m 10 0 l Q");
        assert!(registry.is_empty());
    }

    #[test]
    fn nested_contexts_reuse_registered_names() {
        let mut registry = StyleRegistry::new();
        let mut inner = line_context();
        inner.style_mut().set_fill_opacity(0.5).unwrap();
        let mut outer = GraphicsContext::new();
        outer.add_item(inner.clone()).add_item(inner);

        let (text, used) = render(&outer, &GraphicsStyle::new(), &mut registry);
        assert_eq!(text.matches("/GS0 gs").count(), 2);
        assert_eq!(used.len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn merge_appends_items_only() {
        let mut first = line_context();
        let mut second = line_context();
        second.style_mut().set_stroke_width(9.0).unwrap();
        second.set_transform(Some(Transform::uniform_scaling(2.0)));
        first.merge(second);
        assert_eq!(first.items().len(), 4);
        assert!(first.style().stroke_width().is_inherit());
        assert!(first.transform().is_none());
    }

    #[test]
    fn trace_marks_inherited_properties() {
        let mut registry = StyleRegistry::new();
        let mut context = line_context();
        context.style_mut().set_stroke_width(1.0).unwrap();
        let mut parent = GraphicsStyle::new();
        parent.set_auto_close(true).unwrap();

        let mut pass = RenderPass::new(&mut registry, true);
        context.build_render_list(&mut pass, &parent, &PathElement::Move(Point::default()), true, "");
        let (_, trace) = pass.finish();
        let trace = trace.unwrap();
        assert!(trace.starts_with("GraphicsContext {\n"));
        assert!(trace.contains("    auto_close: true (inherited)\n"));
        assert!(trace.contains("    stroke_width: 1\n"));
        assert!(trace.contains("}┐\n ├─ Move(pt=(x=0, y=0))\n └─ Line(pt=(x=10, y=0))\n"));
    }
}
