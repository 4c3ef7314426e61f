//! Vector drawing for PDF pages.
//!
//! This crate gathers the workspace crates behind one dependency:
//!
//! - [`types`]: points, transforms, device colors
//! - [`style`]: inheritable graphics styles and their configuration
//! - [`render_core`]: PDF primitive serialization
//! - [`drawing`]: paths, scene graph and the renderer

pub use vellum_drawing as drawing;
pub use vellum_render_core as render_core;
pub use vellum_style as style;
pub use vellum_types as types;

pub use vellum_drawing::{
    ClippingPath, DrawingContext, DrawingError, GraphicsContext, PaintedPath, PathElement,
    RenderConfig, RenderOutput, StyleRegistry,
};
pub use vellum_style::{GraphicsStyle, Property, StyleError};
pub use vellum_types::{Color, Point, StyleName, Transform};
