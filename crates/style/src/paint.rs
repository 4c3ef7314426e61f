//! Fill rules and path painting operators.

use crate::coerce::coercive_enum;

coercive_enum! {
    /// The algorithm that decides which regions lie inside a path.
    pub enum IntersectionRule ("intersection rule") {
        /// Nonzero winding number.
        Nonzero = ("NONZERO", "nonzero"),
        /// Even-odd crossing count.
        EvenOdd = ("EVENODD", "evenodd"),
    }
}

coercive_enum! {
    /// How a finished path is painted. The value is the PDF painting operator.
    pub enum PathPaintRule ("path paint rule") {
        Stroke = ("STROKE", "S"),
        FillNonzero = ("FILL_NONZERO", "f"),
        FillEvenOdd = ("FILL_EVENODD", "f*"),
        StrokeFillNonzero = ("STROKE_FILL_NONZERO", "B"),
        StrokeFillEvenOdd = ("STROKE_FILL_EVENODD", "B*"),
        /// End the path without painting it. Used for clipping paths.
        DontPaint = ("DONT_PAINT", "n"),
        /// Pick one of the other rules from the colors and stroke width in effect.
        Auto = ("AUTO", "auto"),
    }
}

coercive_enum! {
    /// The clipping operator appended after a clipping path.
    pub enum ClippingPathIntersectionRule ("clipping path intersection rule") {
        Nonzero = ("NONZERO", "W"),
        EvenOdd = ("EVENODD", "W*"),
    }
}

impl From<IntersectionRule> for ClippingPathIntersectionRule {
    fn from(rule: IntersectionRule) -> Self {
        match rule {
            IntersectionRule::Nonzero => ClippingPathIntersectionRule::Nonzero,
            IntersectionRule::EvenOdd => ClippingPathIntersectionRule::EvenOdd,
        }
    }
}
