//! Fluent path construction.
//!
//! A [`PaintedPath`] records elements into a tree of [`GraphicsContext`]s.
//! Transform groups open a child context that is attached to its parent when
//! the group ends. The builder also tracks whether the current subpath is open
//! so that starting a new subpath (or rendering) can close the previous one in
//! the context where it was drawn.

use crate::arc::EllipticalArc;
use crate::context::{GraphicsContext, GraphicsItem, RenderPass};
use crate::element::{CubicBezier, PathElement, QuadraticBezier};
use std::borrow::Cow;
use std::ops::{Deref, DerefMut};
use vellum_style::{
    ClippingPathIntersectionRule, GraphicsStyle, IntersectionRule, PathPaintRule, Property,
    StyleError,
};
use vellum_types::{Point, Transform};

/// Locates a context inside the builder: `depth` selects the root (0) or an
/// open transform group, then `indices` walk down through attached child
/// contexts.
#[derive(Debug, Clone, Default, PartialEq)]
struct ContextPath {
    depth: usize,
    indices: Vec<usize>,
}

fn descend<'a>(context: &'a mut GraphicsContext, indices: &[usize]) -> Option<&'a mut GraphicsContext> {
    match indices.split_first() {
        None => Some(context),
        Some((&index, rest)) => match context.items_mut().get_mut(index)? {
            GraphicsItem::Context(child) => descend(child, rest),
            _ => None,
        },
    }
}

/// A path that is painted according to its resolved style.
///
/// ```
/// use vellum_drawing::PaintedPath;
///
/// let mut path = PaintedPath::new(10.0, 10.0);
/// path.line_to(50.0, 10.0).line_to(30.0, 40.0).close();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedPath {
    root: GraphicsContext,
    open_groups: Vec<GraphicsContext>,
    closed: bool,
    close_target: ContextPath,
    starter_move: Option<PathElement>,
}

impl PaintedPath {
    /// Starts a path whose first subpath begins at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        let mut path = Self {
            root: GraphicsContext::new(),
            open_groups: Vec::new(),
            closed: true,
            close_target: ContextPath::default(),
            starter_move: None,
        };
        path.move_to(x, y);
        path
    }

    // --- Root context properties ---

    pub fn root(&self) -> &GraphicsContext {
        &self.root
    }

    pub fn style(&self) -> &GraphicsStyle {
        self.root.style()
    }

    pub fn style_mut(&mut self) -> &mut GraphicsStyle {
        self.root.style_mut()
    }

    pub fn transform(&self) -> Option<&Transform> {
        self.root.transform()
    }

    pub fn set_transform(&mut self, transform: Option<Transform>) -> &mut Self {
        self.root.set_transform(transform);
        self
    }

    pub fn auto_close(&self) -> Property<bool> {
        self.style().auto_close()
    }

    pub fn set_auto_close(&mut self, auto_close: impl Into<Property<bool>>) -> Result<&mut Self, StyleError> {
        self.style_mut().set_auto_close(auto_close)?;
        Ok(self)
    }

    pub fn paint_rule(&self) -> Property<PathPaintRule> {
        self.style().paint_rule()
    }

    pub fn set_paint_rule(
        &mut self,
        rule: impl Into<Property<PathPaintRule>>,
    ) -> Result<&mut Self, StyleError> {
        self.style_mut().set_paint_rule(rule)?;
        Ok(self)
    }

    pub fn clipping_path(&self) -> Option<&ClippingPath> {
        self.root.clipping_path()
    }

    pub fn set_clipping_path(&mut self, clipping_path: Option<ClippingPath>) -> &mut Self {
        self.root.set_clipping_path(clipping_path);
        self
    }

    // --- Context bookkeeping ---

    fn current_context(&mut self) -> &mut GraphicsContext {
        match self.open_groups.last_mut() {
            Some(group) => group,
            None => &mut self.root,
        }
    }

    fn current_path(&self) -> ContextPath {
        ContextPath {
            depth: self.open_groups.len(),
            indices: Vec::new(),
        }
    }

    fn context_at(&mut self, at: &ContextPath) -> Option<&mut GraphicsContext> {
        let base = match at.depth {
            0 => &mut self.root,
            depth => self.open_groups.get_mut(depth - 1)?,
        };
        descend(base, &at.indices)
    }

    fn insert_implicit_close_if_open(&mut self) {
        if self.closed {
            return;
        }
        let target = std::mem::take(&mut self.close_target);
        match self.context_at(&target) {
            Some(context) => {
                context.add_item(PathElement::ImplicitClose);
            }
            None => log::warn!("Lost track of the open subpath at {target:?}; not closing it"),
        }
        self.close_target = self.current_path();
        self.closed = true;
    }

    /// Applies `transform` to every element added inside `build`. The group
    /// becomes a child context of the current one once `build` returns.
    pub fn transform_group(&mut self, transform: Transform, build: impl FnOnce(&mut Self)) -> &mut Self {
        let mut group = GraphicsContext::new();
        group.set_transform(Some(transform));
        self.open_groups.push(group);

        build(self);

        if let Some(group) = self.open_groups.pop() {
            let depth = self.open_groups.len() + 1;
            let parent = self.current_context();
            let index = parent.items().len();
            parent.add_item(group);
            if self.close_target.depth == depth {
                self.close_target.depth -= 1;
                self.close_target.indices.insert(0, index);
            }
        }
        self
    }

    /// Appends an item to the current context, first materializing any pending
    /// subpath start.
    pub fn add_path_element(&mut self, item: impl Into<GraphicsItem>) -> &mut Self {
        if let Some(starter) = self.starter_move.take() {
            self.closed = false;
            self.current_context().add_item(starter);
            self.close_target = self.current_path();
        }
        self.current_context().add_item(item);
        self
    }

    // --- Subpaths ---

    /// Starts a new subpath at `(x, y)`, implicitly closing the previous one.
    /// A move that is never followed by another element is dropped.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.insert_implicit_close_if_open();
        self.starter_move = Some(PathElement::Move(Point::new(x, y)));
        self
    }

    pub fn move_relative(&mut self, x: f64, y: f64) -> &mut Self {
        self.insert_implicit_close_if_open();
        self.starter_move = Some(PathElement::RelativeMove(Point::new(x, y)));
        self
    }

    /// Explicitly closes the current subpath and starts the next one at the
    /// current point.
    pub fn close(&mut self) -> &mut Self {
        self.add_path_element(PathElement::Close);
        self.closed = true;
        self.move_relative(0.0, 0.0)
    }

    // --- Segments ---

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.add_path_element(PathElement::Line(Point::new(x, y)))
    }

    pub fn line_relative(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.add_path_element(PathElement::RelativeLine(Point::new(dx, dy)))
    }

    pub fn horizontal_line_to(&mut self, x: f64) -> &mut Self {
        self.add_path_element(PathElement::HorizontalLine(x))
    }

    pub fn horizontal_line_relative(&mut self, dx: f64) -> &mut Self {
        self.add_path_element(PathElement::RelativeHorizontalLine(dx))
    }

    pub fn vertical_line_to(&mut self, y: f64) -> &mut Self {
        self.add_path_element(PathElement::VerticalLine(y))
    }

    pub fn vertical_line_relative(&mut self, dy: f64) -> &mut Self {
        self.add_path_element(PathElement::RelativeVerticalLine(dy))
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        self.add_path_element(PathElement::BezierCurve(CubicBezier::new(
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(x3, y3),
        )))
    }

    /// A cubic curve whose control and end points are all offsets from the
    /// current point.
    pub fn curve_relative(
        &mut self,
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
        dx3: f64,
        dy3: f64,
    ) -> &mut Self {
        self.add_path_element(PathElement::RelativeBezierCurve(CubicBezier::new(
            Point::new(dx1, dy1),
            Point::new(dx2, dy2),
            Point::new(dx3, dy3),
        )))
    }

    pub fn quadratic_curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.add_path_element(PathElement::QuadraticBezierCurve(QuadraticBezier::new(
            Point::new(x1, y1),
            Point::new(x2, y2),
        )))
    }

    pub fn quadratic_curve_relative(&mut self, dx1: f64, dy1: f64, dx2: f64, dy2: f64) -> &mut Self {
        self.add_path_element(PathElement::RelativeQuadraticBezierCurve(QuadraticBezier::new(
            Point::new(dx1, dy1),
            Point::new(dx2, dy2),
        )))
    }

    /// An elliptical arc to `(x, y)`. `rotation` is in degrees. A zero radius
    /// draws a straight line instead.
    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        positive_sweep: bool,
        x: f64,
        y: f64,
    ) -> &mut Self {
        if rx == 0.0 || ry == 0.0 {
            return self.line_to(x, y);
        }
        self.add_path_element(PathElement::Arc(EllipticalArc::new(
            Point::new(rx.abs(), ry.abs()),
            rotation.to_radians(),
            large_arc,
            positive_sweep,
            Point::new(x, y),
        )))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_relative(
        &mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        positive_sweep: bool,
        dx: f64,
        dy: f64,
    ) -> &mut Self {
        if rx == 0.0 || ry == 0.0 {
            return self.line_relative(dx, dy);
        }
        self.add_path_element(PathElement::RelativeArc(EllipticalArc::new(
            Point::new(rx.abs(), ry.abs()),
            rotation.to_radians(),
            large_arc,
            positive_sweep,
            Point::new(dx, dy),
        )))
    }

    // --- Shapes ---

    /// Adds a closed rectangle subpath. With both corner radii non-zero the
    /// corners are rounded with quarter-ellipse arcs; otherwise a native
    /// rectangle is emitted.
    pub fn rectangle(&mut self, x: f64, y: f64, w: f64, h: f64, rx: f64, ry: f64) -> &mut Self {
        if rx == 0.0 || ry == 0.0 {
            self.insert_implicit_close_if_open();
            return self.add_path_element(PathElement::Rectangle {
                org: Point::new(x, y),
                size: Point::new(w, h),
            });
        }

        let rx = rx.abs();
        let ry = ry.abs();
        self.move_to(x + rx, y)
            .line_to(x + w - rx, y)
            .arc_to(rx, ry, 0.0, false, true, x + w, y + ry)
            .line_to(x + w, y + h - ry)
            .arc_to(rx, ry, 0.0, false, true, x + w - rx, y + h)
            .line_to(x + rx, y + h)
            .arc_to(rx, ry, 0.0, false, true, x, y + h - ry)
            .line_to(x, y + ry)
            .arc_to(rx, ry, 0.0, false, true, x + rx, y)
            .close()
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64) -> &mut Self {
        self.ellipse(cx, cy, r, r)
    }

    /// Adds a closed ellipse as four quarter arcs, starting from its rightmost
    /// point.
    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) -> &mut Self {
        let rx = rx.abs();
        let ry = ry.abs();
        self.move_to(cx + rx, cy)
            .arc_to(rx, ry, 0.0, false, true, cx, cy + ry)
            .arc_to(rx, ry, 0.0, false, true, cx - rx, cy)
            .arc_to(rx, ry, 0.0, false, true, cx, cy - ry)
            .arc_to(rx, ry, 0.0, false, true, cx + rx, cy)
            .close()
    }

    // --- Rendering ---

    /// The root context as it renders: any still-open subpath gets its implicit
    /// close.
    fn closed_root(&self) -> Cow<'_, GraphicsContext> {
        if self.closed {
            return Cow::Borrowed(&self.root);
        }
        let mut root = self.root.clone();
        let target = &self.close_target;
        match descend(&mut root, &target.indices) {
            Some(context) if target.depth == 0 => {
                context.add_item(PathElement::ImplicitClose);
            }
            _ => log::warn!("Lost track of the open subpath at {target:?}; not closing it"),
        }
        Cow::Owned(root)
    }

    pub(crate) fn render(
        &self,
        pass: &mut RenderPass<'_>,
        style: &GraphicsStyle,
        previous: &PathElement,
        pfx: &str,
    ) -> (String, PathElement) {
        let root = self.closed_root();
        let (mut render_list, last) = root.build_render_list(pass, style, previous, true, pfx);
        let paint_rule = GraphicsStyle::merge(style, root.style()).resolve_paint_rule();
        let at = render_list.len().saturating_sub(1);
        render_list.insert(at, paint_rule.value().to_string());
        (render_list.join(" "), last)
    }
}

/// A path that restricts painting of its enclosing context instead of being
/// painted itself.
///
/// It dereferences to [`PaintedPath`] for building. Unless its style says
/// otherwise it paints with `n`, and it renders without a save/restore pair so
/// that the clip stays in effect for the enclosing context.
#[derive(Debug, Clone, PartialEq)]
pub struct ClippingPath(PaintedPath);

impl ClippingPath {
    pub fn new(x: f64, y: f64) -> Self {
        let mut path = PaintedPath::new(x, y);
        *path.style_mut() = GraphicsStyle::with_paint_rule(PathPaintRule::DontPaint);
        Self(path)
    }

    pub fn into_inner(self) -> PaintedPath {
        self.0
    }

    pub(crate) fn render(
        &self,
        pass: &mut RenderPass<'_>,
        style: &GraphicsStyle,
        previous: &PathElement,
        pfx: &str,
    ) -> (String, PathElement) {
        pass.write_trace("<ClippingPath> ");
        let root = self.0.closed_root();
        let (mut render_list, last) = root.build_render_list(pass, style, previous, false, pfx);
        let merged = GraphicsStyle::merge(style, root.style());
        let intersection = merged
            .intersection_rule()
            .value()
            .copied()
            .unwrap_or(IntersectionRule::Nonzero);
        render_list.push(ClippingPathIntersectionRule::from(intersection).value().to_string());
        render_list.push(merged.resolve_paint_rule().value().to_string());
        (render_list.join(" "), last)
    }
}

impl Deref for ClippingPath {
    type Target = PaintedPath;

    fn deref(&self) -> &PaintedPath {
        &self.0
    }
}

impl DerefMut for ClippingPath {
    fn deref_mut(&mut self) -> &mut PaintedPath {
        &mut self.0
    }
}
