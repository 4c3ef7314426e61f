//! Vector drawing model rendered to PDF content-stream operators.
//!
//! Build [`PaintedPath`]s (optionally grouped in [`GraphicsContext`]s), add them
//! to a [`DrawingContext`], and render it against a per-document
//! [`StyleRegistry`]:
//!
//! ```
//! use vellum_drawing::{DrawingContext, PaintedPath, StyleRegistry};
//! use vellum_types::{rgb8, Point};
//!
//! let mut path = PaintedPath::new(0.0, 0.0);
//! path.rectangle(10.0, 10.0, 80.0, 40.0, 0.0, 0.0);
//! path.style_mut().set_fill_color(rgb8(200, 30, 30, None));
//!
//! let mut drawing = DrawingContext::new();
//! drawing.add_item(path);
//!
//! let mut registry = StyleRegistry::new();
//! let output = drawing.render(Point::default(), 1.0, 792.0, &mut registry);
//! assert!(output.operators.contains(" re "));
//! ```

pub mod arc;
pub mod context;
pub mod drawing;
pub mod element;
pub mod error;
pub mod path;
pub mod registry;

pub use arc::{subdivide_sweep, EllipticalArc};
pub use context::{GraphicsContext, GraphicsItem};
pub use drawing::{DrawingContext, DrawingItem, RenderConfig, RenderOutput};
pub use element::{CubicBezier, PathElement, QuadraticBezier};
pub use error::DrawingError;
pub use path::{ClippingPath, PaintedPath};
pub use registry::StyleRegistry;
