//! PDF primitive serialization for content-stream operators.
//!
//! - [`PdfPrimitive`] covers the value kinds that appear as operator operands
//!   and inside graphics-state dictionaries
//! - [`PdfRepr`] lets geometry and color types render themselves
//! - [`utils`] holds the small operator helpers shared by renderers

mod primitive;
mod traits;
pub mod utils;

pub use primitive::{Name, PdfPrimitive};
pub use traits::PdfRepr;
pub use utils::{color_operator, transform_operator, PaintTarget};
