//! Path segments and their content-stream operators.
//!
//! Every element renders against the element before it. Relative elements
//! resolve to their absolute equivalent, and that absolute element is what the
//! next element sees as `previous`.

use crate::arc::EllipticalArc;
use itertools::Itertools;
use std::fmt;
use vellum_render_core::PdfRepr;
use vellum_style::{GraphicsStyle, Property};
use vellum_types::{number_to_str, Point};

/// A cubic Bézier segment starting at the previous element's end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub c1: Point,
    pub c2: Point,
    pub end: Point,
}

impl CubicBezier {
    pub fn new(c1: Point, c2: Point, end: Point) -> Self {
        Self { c1, c2, end }
    }

    pub fn operator(&self) -> String {
        format!(
            "{} {} {} c",
            self.c1.pdf_repr(),
            self.c2.pdf_repr(),
            self.end.pdf_repr()
        )
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c1={}, c2={}, end={}", self.c1, self.c2, self.end)
    }
}

/// A quadratic Bézier segment, drawn by raising it to the equivalent cubic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub ctrl: Point,
    pub end: Point,
}

impl QuadraticBezier {
    pub fn new(ctrl: Point, end: Point) -> Self {
        Self { ctrl, end }
    }

    /// The cubic with the same shape when drawn from `start`.
    pub fn to_cubic(&self, start: Point) -> CubicBezier {
        CubicBezier {
            c1: start + (self.ctrl - start) * (2.0 / 3.0),
            c2: self.end + (self.ctrl - self.end) * (2.0 / 3.0),
            end: self.end,
        }
    }
}

impl fmt::Display for QuadraticBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctrl={}, end={}", self.ctrl, self.end)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PathElement {
    Move(Point),
    RelativeMove(Point),
    Line(Point),
    RelativeLine(Point),
    HorizontalLine(f64),
    RelativeHorizontalLine(f64),
    VerticalLine(f64),
    RelativeVerticalLine(f64),
    BezierCurve(CubicBezier),
    RelativeBezierCurve(CubicBezier),
    QuadraticBezierCurve(QuadraticBezier),
    RelativeQuadraticBezierCurve(QuadraticBezier),
    Arc(EllipticalArc),
    RelativeArc(EllipticalArc),
    /// A native `re` rectangle from its origin corner and size.
    Rectangle { org: Point, size: Point },
    /// Closes the subpath only when the resolved style has auto-close enabled.
    ImplicitClose,
    Close,
}

impl PathElement {
    /// The absolute point this element ends on, for elements that know it
    /// without looking at their predecessor.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            PathElement::Move(pt) | PathElement::Line(pt) => Some(*pt),
            PathElement::BezierCurve(curve) => Some(curve.end),
            PathElement::QuadraticBezierCurve(curve) => Some(curve.end),
            PathElement::Arc(arc) => Some(arc.end),
            PathElement::Rectangle { org, .. } => Some(*org),
            _ => None,
        }
    }

    /// Renders this element after `previous`, returning the operator text (which
    /// may be empty) and the element that the next one should treat as previous.
    pub fn render(&self, style: &GraphicsStyle, previous: &PathElement) -> (String, PathElement) {
        let start = previous.end_point().unwrap_or_default();
        match self {
            PathElement::Move(pt) => (format!("{} m", pt.pdf_repr()), self.clone()),
            PathElement::Line(pt) => (format!("{} l", pt.pdf_repr()), self.clone()),
            PathElement::BezierCurve(curve) => (curve.operator(), self.clone()),
            PathElement::QuadraticBezierCurve(curve) => {
                (curve.to_cubic(start).operator(), self.clone())
            }
            PathElement::Arc(arc) => {
                let curves = arc.approximate(start);
                let Some(last) = curves.last().copied() else {
                    if start == arc.end {
                        return (String::new(), previous.clone());
                    }
                    return PathElement::Line(arc.end).render(style, previous);
                };
                (
                    curves.iter().map(CubicBezier::operator).join(" "),
                    PathElement::BezierCurve(last),
                )
            }
            PathElement::Rectangle { org, size } => (
                format!("{} {} re", org.pdf_repr(), size.pdf_repr()),
                PathElement::Line(*org),
            ),
            PathElement::ImplicitClose => {
                let text = if style.auto_close() == Property::Value(true) {
                    "h"
                } else {
                    ""
                };
                (text.to_string(), previous.clone())
            }
            PathElement::Close => ("h".to_string(), previous.clone()),
            relative => relative.resolve(start).render(style, previous),
        }
    }

    /// The absolute element equivalent to this one when drawn from `start`.
    /// Absolute elements resolve to themselves.
    pub fn resolve(&self, start: Point) -> PathElement {
        match self {
            PathElement::RelativeMove(pt) => PathElement::Move(start + *pt),
            PathElement::RelativeLine(pt) => PathElement::Line(start + *pt),
            PathElement::HorizontalLine(x) => PathElement::Line(Point::new(*x, start.y)),
            PathElement::RelativeHorizontalLine(dx) => {
                PathElement::Line(Point::new(start.x + dx, start.y))
            }
            PathElement::VerticalLine(y) => PathElement::Line(Point::new(start.x, *y)),
            PathElement::RelativeVerticalLine(dy) => {
                PathElement::Line(Point::new(start.x, start.y + dy))
            }
            PathElement::RelativeBezierCurve(curve) => PathElement::BezierCurve(CubicBezier {
                c1: start + curve.c1,
                c2: start + curve.c2,
                end: start + curve.end,
            }),
            PathElement::RelativeQuadraticBezierCurve(curve) => {
                PathElement::QuadraticBezierCurve(QuadraticBezier {
                    ctrl: start + curve.ctrl,
                    end: start + curve.end,
                })
            }
            PathElement::RelativeArc(arc) => PathElement::Arc(EllipticalArc {
                end: start + arc.end,
                ..*arc
            }),
            absolute => absolute.clone(),
        }
    }

    /// Like [`render`](Self::render), also writing one trace line describing
    /// what the element resolved to. Arcs list their curves as a sub-tree under
    /// `pfx`.
    pub fn render_debug(
        &self,
        style: &GraphicsStyle,
        previous: &PathElement,
        trace: &mut String,
        pfx: &str,
    ) -> (String, PathElement) {
        let start = previous.end_point().unwrap_or_default();
        let (rendered, resolved) = self.render(style, previous);
        match self {
            PathElement::Move(_)
            | PathElement::Line(_)
            | PathElement::BezierCurve(_)
            | PathElement::ImplicitClose
            | PathElement::Close => {
                trace.push_str(&format!("{self}\n"));
            }
            PathElement::QuadraticBezierCurve(curve) => {
                let cubic = PathElement::BezierCurve(curve.to_cubic(start));
                trace.push_str(&format!("{self} resolved to {cubic}\n"));
            }
            PathElement::Rectangle { .. } => {
                trace.push_str(&format!("{self} resolved to {rendered}\n"));
            }
            PathElement::Arc(_) | PathElement::RelativeArc(_) => {
                let arc = match self.resolve(start) {
                    PathElement::Arc(arc) => arc,
                    _ => return (rendered, resolved),
                };
                if let PathElement::Line(_) = resolved {
                    trace.push_str(&format!("{self} resolved to {resolved}\n"));
                    return (rendered, resolved);
                }
                let curves = arc.approximate(start);
                trace.push_str(&format!("{self} resolved to:\n"));
                match curves.split_last() {
                    None => trace.push_str(&format!("{pfx} └─ nothing\n")),
                    Some((last, rest)) => {
                        for curve in rest {
                            trace.push_str(&format!("{pfx} ├─ BezierCurve({curve})\n"));
                        }
                        trace.push_str(&format!("{pfx} └─ BezierCurve({last})\n"));
                    }
                }
            }
            _ => {
                trace.push_str(&format!("{self} resolved to {resolved}\n"));
            }
        }
        (rendered, resolved)
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::Move(pt) => write!(f, "Move(pt={pt})"),
            PathElement::RelativeMove(pt) => write!(f, "RelativeMove(pt={pt})"),
            PathElement::Line(pt) => write!(f, "Line(pt={pt})"),
            PathElement::RelativeLine(pt) => write!(f, "RelativeLine(pt={pt})"),
            PathElement::HorizontalLine(x) => write!(f, "HorizontalLine(x={})", number_to_str(*x)),
            PathElement::RelativeHorizontalLine(x) => {
                write!(f, "RelativeHorizontalLine(x={})", number_to_str(*x))
            }
            PathElement::VerticalLine(y) => write!(f, "VerticalLine(y={})", number_to_str(*y)),
            PathElement::RelativeVerticalLine(y) => {
                write!(f, "RelativeVerticalLine(y={})", number_to_str(*y))
            }
            PathElement::BezierCurve(curve) => write!(f, "BezierCurve({curve})"),
            PathElement::RelativeBezierCurve(curve) => write!(f, "RelativeBezierCurve({curve})"),
            PathElement::QuadraticBezierCurve(curve) => write!(f, "QuadraticBezierCurve({curve})"),
            PathElement::RelativeQuadraticBezierCurve(curve) => {
                write!(f, "RelativeQuadraticBezierCurve({curve})")
            }
            PathElement::Arc(arc) => write!(f, "Arc({arc})"),
            PathElement::RelativeArc(arc) => write!(f, "RelativeArc({arc})"),
            PathElement::Rectangle { org, size } => write!(f, "Rectangle(org={org}, size={size})"),
            PathElement::ImplicitClose => f.write_str("ImplicitClose()"),
            PathElement::Close => f.write_str("Close()"),
        }
    }
}
