pub mod color;
pub mod geometry;
pub mod ids;
pub mod number;

pub use color::{cmyk8, gray8, rgb8, Color, ColorError, DeviceCmyk, DeviceGray, DeviceRgb};
pub use geometry::{Point, Transform};
pub use ids::StyleName;
pub use number::{number_to_str, round8};
