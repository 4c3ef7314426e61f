mod coerce;
pub mod blend;
pub mod config;
pub mod error;
pub mod graphics_style;
pub mod paint;
pub mod parsers;
pub mod property;
pub mod stroke;

pub use blend::BlendMode;
pub use config::{DashDef, StyleDef};
pub use error::StyleError;
pub use graphics_style::{GraphicsStyle, MERGE_PROPERTIES};
pub use paint::{ClippingPathIntersectionRule, IntersectionRule, PathPaintRule};
pub use parsers::{parse_dash_pattern, parse_hex_color};
pub use property::Property;
pub use stroke::{DashPattern, StrokeCapStyle, StrokeJoinStyle};
