//! The sparse, inheritable set of drawing appearance properties.

use crate::blend::BlendMode;
use crate::error::StyleError;
use crate::paint::{IntersectionRule, PathPaintRule};
use crate::parsers::parse_hex_color;
use crate::property::Property;
use crate::stroke::{check_non_negative, DashPattern, StrokeCapStyle, StrokeJoinStyle};
use vellum_render_core::{Name, PdfPrimitive};
use vellum_types::{Color, DeviceCmyk, DeviceGray, DeviceRgb};

/// Property names in merge order. Also the order used in debug listings.
pub const MERGE_PROPERTIES: [&str; 14] = [
    "paint_rule",
    "auto_close",
    "intersection_rule",
    "fill_color",
    "fill_opacity",
    "stroke_color",
    "stroke_opacity",
    "blend_mode",
    "stroke_width",
    "stroke_cap_style",
    "stroke_join_style",
    "stroke_miter_limit",
    "stroke_dash_pattern",
    "stroke_dash_phase",
];

/// Which painting operations an automatic paint rule has found evidence for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PaintWants {
    stroke: bool,
    fill: Option<IntersectionRule>,
}

const PAINT_RULE_LOOKUP: [(PaintWants, PathPaintRule); 6] = [
    (PaintWants { stroke: false, fill: None }, PathPaintRule::DontPaint),
    (PaintWants { stroke: true, fill: None }, PathPaintRule::Stroke),
    (
        PaintWants { stroke: false, fill: Some(IntersectionRule::Nonzero) },
        PathPaintRule::FillNonzero,
    ),
    (
        PaintWants { stroke: false, fill: Some(IntersectionRule::EvenOdd) },
        PathPaintRule::FillEvenOdd,
    ),
    (
        PaintWants { stroke: true, fill: Some(IntersectionRule::Nonzero) },
        PathPaintRule::StrokeFillNonzero,
    ),
    (
        PaintWants { stroke: true, fill: Some(IntersectionRule::EvenOdd) },
        PathPaintRule::StrokeFillEvenOdd,
    ),
];

/// Drawing appearance properties, each of which may be inherited.
///
/// A default style inherits everything. Setters validate eagerly, so a style
/// that exists is always renderable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphicsStyle {
    paint_rule: Property<PathPaintRule>,
    auto_close: Property<bool>,
    intersection_rule: Property<IntersectionRule>,
    fill_color: Property<Color>,
    fill_opacity: Property<f64>,
    stroke_color: Property<Color>,
    stroke_opacity: Property<f64>,
    blend_mode: Property<BlendMode>,
    stroke_width: Property<f64>,
    stroke_cap_style: Property<StrokeCapStyle>,
    stroke_join_style: Property<StrokeJoinStyle>,
    stroke_miter_limit: Property<f64>,
    /// Pattern and phase live together so one can never be set without the other.
    stroke_dash: Property<DashPattern>,
}

fn reject_unset<T>(property: &'static str, value: Property<T>) -> Result<Property<T>, StyleError> {
    if value.is_unset() {
        Err(StyleError::InvalidType { property, found: value.kind() })
    } else {
        Ok(value)
    }
}

fn check_opacity(property: &'static str, value: Property<f64>) -> Result<Property<f64>, StyleError> {
    match reject_unset(property, value)? {
        Property::Value(v) if !(0.0..=1.0).contains(&v) => {
            Err(StyleError::OutOfRange { property, value: v })
        }
        other => Ok(other),
    }
}

impl GraphicsStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The style a drawing starts from: auto-close on, automatic paint rule and
    /// nonzero winding. Everything else inherits the PDF defaults.
    pub fn drawing_defaults() -> Self {
        Self {
            paint_rule: Property::Value(PathPaintRule::Auto),
            auto_close: Property::Value(true),
            intersection_rule: Property::Value(IntersectionRule::Nonzero),
            ..Self::default()
        }
    }

    /// A style that sets only the paint rule and inherits everything else.
    pub fn with_paint_rule(rule: PathPaintRule) -> Self {
        Self {
            paint_rule: Property::Value(rule),
            ..Self::default()
        }
    }

    /// Resolves `child` against `parent`: every property `child` inherits is
    /// taken from `parent`.
    pub fn merge(parent: &GraphicsStyle, child: &GraphicsStyle) -> GraphicsStyle {
        GraphicsStyle {
            paint_rule: child.paint_rule.or_inherit(parent.paint_rule),
            auto_close: child.auto_close.or_inherit(parent.auto_close),
            intersection_rule: child.intersection_rule.or_inherit(parent.intersection_rule),
            fill_color: child.fill_color.or_inherit(parent.fill_color),
            fill_opacity: child.fill_opacity.or_inherit(parent.fill_opacity),
            stroke_color: child.stroke_color.or_inherit(parent.stroke_color),
            stroke_opacity: child.stroke_opacity.or_inherit(parent.stroke_opacity),
            blend_mode: child.blend_mode.or_inherit(parent.blend_mode),
            stroke_width: child.stroke_width.or_inherit(parent.stroke_width),
            stroke_cap_style: child.stroke_cap_style.or_inherit(parent.stroke_cap_style),
            stroke_join_style: child.stroke_join_style.or_inherit(parent.stroke_join_style),
            stroke_miter_limit: child.stroke_miter_limit.or_inherit(parent.stroke_miter_limit),
            stroke_dash: child.stroke_dash.clone().or_inherit(parent.stroke_dash.clone()),
        }
    }

    // --- Getters ---

    pub fn paint_rule(&self) -> Property<PathPaintRule> {
        self.paint_rule
    }

    pub fn auto_close(&self) -> Property<bool> {
        self.auto_close
    }

    pub fn intersection_rule(&self) -> Property<IntersectionRule> {
        self.intersection_rule
    }

    pub fn fill_color(&self) -> Property<Color> {
        self.fill_color
    }

    pub fn fill_opacity(&self) -> Property<f64> {
        self.fill_opacity
    }

    pub fn stroke_color(&self) -> Property<Color> {
        self.stroke_color
    }

    pub fn stroke_opacity(&self) -> Property<f64> {
        self.stroke_opacity
    }

    pub fn blend_mode(&self) -> Property<BlendMode> {
        self.blend_mode
    }

    pub fn stroke_width(&self) -> Property<f64> {
        self.stroke_width
    }

    pub fn stroke_cap_style(&self) -> Property<StrokeCapStyle> {
        self.stroke_cap_style
    }

    pub fn stroke_join_style(&self) -> Property<StrokeJoinStyle> {
        self.stroke_join_style
    }

    pub fn stroke_miter_limit(&self) -> Property<f64> {
        self.stroke_miter_limit
    }

    pub fn stroke_dash(&self) -> Property<&DashPattern> {
        self.stroke_dash.as_ref()
    }

    pub fn stroke_dash_pattern(&self) -> Property<&[f64]> {
        self.stroke_dash.as_ref().map(DashPattern::lengths)
    }

    pub fn stroke_dash_phase(&self) -> Property<f64> {
        self.stroke_dash.as_ref().map(DashPattern::phase)
    }

    // --- Setters ---

    pub fn set_paint_rule(
        &mut self,
        rule: impl Into<Property<PathPaintRule>>,
    ) -> Result<&mut Self, StyleError> {
        self.paint_rule = reject_unset("paint rule", rule.into())?;
        Ok(self)
    }

    pub fn set_auto_close(&mut self, auto_close: impl Into<Property<bool>>) -> Result<&mut Self, StyleError> {
        self.auto_close = reject_unset("auto close", auto_close.into())?;
        Ok(self)
    }

    pub fn set_intersection_rule(
        &mut self,
        rule: impl Into<Property<IntersectionRule>>,
    ) -> Result<&mut Self, StyleError> {
        self.intersection_rule = reject_unset("intersection rule", rule.into())?;
        Ok(self)
    }

    /// Sets the fill color. A color carrying an alpha also sets the fill opacity.
    pub fn set_fill_color(&mut self, color: impl Into<Property<Color>>) -> &mut Self {
        let color = color.into();
        if let Some(alpha) = color.value().and_then(Color::alpha) {
            self.fill_opacity = Property::Value(alpha);
        }
        self.fill_color = color;
        self
    }

    /// Sets the fill color from a `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` string.
    pub fn set_fill_color_hex(&mut self, hex: &str) -> Result<&mut Self, StyleError> {
        let color = Color::from(parse_hex_color(hex)?);
        Ok(self.set_fill_color(color))
    }

    pub fn set_fill_opacity(&mut self, opacity: impl Into<Property<f64>>) -> Result<&mut Self, StyleError> {
        self.fill_opacity = check_opacity("fill opacity", opacity.into())?;
        Ok(self)
    }

    /// Sets the stroke color. A color carrying an alpha also sets the stroke opacity.
    pub fn set_stroke_color(&mut self, color: impl Into<Property<Color>>) -> &mut Self {
        let color = color.into();
        if let Some(alpha) = color.value().and_then(Color::alpha) {
            self.stroke_opacity = Property::Value(alpha);
        }
        self.stroke_color = color;
        self
    }

    pub fn set_stroke_color_hex(&mut self, hex: &str) -> Result<&mut Self, StyleError> {
        let color = Color::from(parse_hex_color(hex)?);
        Ok(self.set_stroke_color(color))
    }

    pub fn set_stroke_opacity(&mut self, opacity: impl Into<Property<f64>>) -> Result<&mut Self, StyleError> {
        self.stroke_opacity = check_opacity("stroke opacity", opacity.into())?;
        Ok(self)
    }

    pub fn set_blend_mode(&mut self, mode: impl Into<Property<BlendMode>>) -> Result<&mut Self, StyleError> {
        self.blend_mode = reject_unset("blend mode", mode.into())?;
        Ok(self)
    }

    /// Sets the stroke width. `Unset` disables stroking under the automatic
    /// paint rule.
    pub fn set_stroke_width(&mut self, width: impl Into<Property<f64>>) -> Result<&mut Self, StyleError> {
        let width = width.into();
        if let Property::Value(w) = width {
            check_non_negative("stroke width", w)?;
        }
        self.stroke_width = width;
        Ok(self)
    }

    pub fn set_stroke_cap_style(
        &mut self,
        style: impl Into<Property<StrokeCapStyle>>,
    ) -> Result<&mut Self, StyleError> {
        self.stroke_cap_style = reject_unset("stroke cap style", style.into())?;
        Ok(self)
    }

    pub fn set_stroke_join_style(
        &mut self,
        style: impl Into<Property<StrokeJoinStyle>>,
    ) -> Result<&mut Self, StyleError> {
        self.stroke_join_style = reject_unset("stroke join style", style.into())?;
        Ok(self)
    }

    pub fn set_stroke_miter_limit(&mut self, limit: impl Into<Property<f64>>) -> Result<&mut Self, StyleError> {
        let limit = reject_unset("stroke miter limit", limit.into())?;
        if let Property::Value(l) = limit {
            check_non_negative("stroke miter limit", l)?;
        }
        self.stroke_miter_limit = limit;
        Ok(self)
    }

    /// Sets the dash lengths, keeping the current phase (or 0 when there is no
    /// pattern yet). `Unset` stores an empty pattern, which strokes solid lines.
    pub fn set_stroke_dash_pattern(
        &mut self,
        lengths: impl Into<Property<Vec<f64>>>,
    ) -> Result<&mut Self, StyleError> {
        self.stroke_dash = match lengths.into() {
            Property::Inherit => Property::Inherit,
            Property::Unset => Property::Value(DashPattern::solid()),
            Property::Value(lengths) => {
                let phase = self.stroke_dash.value().map_or(0.0, DashPattern::phase);
                Property::Value(DashPattern::new(lengths, phase)?)
            }
        };
        Ok(self)
    }

    /// Sets the dash phase of the current pattern. Setting it to `Inherit` does
    /// nothing.
    pub fn set_stroke_dash_phase(&mut self, phase: impl Into<Property<f64>>) -> Result<&mut Self, StyleError> {
        if let Property::Value(phase) = reject_unset("stroke dash phase", phase.into())? {
            let pattern = self.stroke_dash.value().ok_or(StyleError::NoDashPattern)?;
            self.stroke_dash = Property::Value(pattern.with_phase(phase)?);
        }
        Ok(self)
    }

    pub fn set_stroke_dash(&mut self, dash: impl Into<Property<DashPattern>>) -> &mut Self {
        self.stroke_dash = dash.into();
        self
    }

    // --- Resolution ---

    /// The painting operator for a path drawn with this (merged) style.
    ///
    /// An automatic rule strokes when a stroke color is set and the stroke width
    /// is not unset, and fills when a fill color is set.
    pub fn resolve_paint_rule(&self) -> PathPaintRule {
        match self.paint_rule {
            Property::Value(rule) if rule != PathPaintRule::Auto => rule,
            _ => {
                let wants = PaintWants {
                    stroke: self.stroke_color.is_value() && !self.stroke_width.is_unset(),
                    fill: self.fill_color.is_value().then(|| {
                        self.intersection_rule
                            .value()
                            .copied()
                            .unwrap_or(IntersectionRule::Nonzero)
                    }),
                };
                PAINT_RULE_LOOKUP
                    .iter()
                    .find(|(candidate, _)| *candidate == wants)
                    .map_or(PathPaintRule::StrokeFillNonzero, |(_, rule)| *rule)
            }
        }
    }

    /// The entries this style contributes to a graphics-state dictionary, in
    /// key order.
    fn pdf_dict_entries(&self) -> Vec<(Name, PdfPrimitive)> {
        let mut entries = Vec::new();
        if let Some(&alpha) = self.fill_opacity.value() {
            entries.push((Name::from("ca"), PdfPrimitive::Real(alpha)));
        }
        if let Some(mode) = self.blend_mode.value() {
            entries.push((Name::from("BM"), PdfPrimitive::Name(Name::from(mode.value()))));
        }
        if let Some(&alpha) = self.stroke_opacity.value() {
            entries.push((Name::from("CA"), PdfPrimitive::Real(alpha)));
        }
        if let Some(&width) = self.stroke_width.value() {
            entries.push((Name::from("LW"), PdfPrimitive::Real(width)));
        }
        if let Some(cap) = self.stroke_cap_style.value() {
            entries.push((Name::from("LC"), PdfPrimitive::Integer(cap.as_int())));
        }
        if let Some(join) = self.stroke_join_style.value() {
            entries.push((Name::from("LJ"), PdfPrimitive::Integer(join.as_int())));
        }
        if let Some(&limit) = self.stroke_miter_limit.value() {
            entries.push((Name::from("ML"), PdfPrimitive::Real(limit)));
        }
        if let Some(dash) = self.stroke_dash.value() {
            entries.push((Name::from("D"), dash.to_pdf_primitive()));
        }
        entries
    }

    /// Serializes the dictionary-expressible properties as an `/ExtGState`
    /// dictionary, or `None` when there are none to write.
    pub fn to_pdf_dict(&self) -> Option<String> {
        let entries = self.pdf_dict_entries();
        if entries.is_empty() {
            return None;
        }
        let mut dict = vec![(Name::from("Type"), PdfPrimitive::Name(Name::from("ExtGState")))];
        dict.extend(entries);
        Some(PdfPrimitive::Dict(dict).render())
    }

    /// Every non-inherited property as `(name, rendered value)`, in merge order.
    pub fn explicit_properties(&self) -> Vec<(&'static str, String)> {
        let rendered = [
            self.paint_rule.map(|v| v.to_string()),
            self.auto_close.map(|v| v.to_string()),
            self.intersection_rule.map(|v| v.to_string()),
            self.fill_color.map(|v| describe_color(&v)),
            self.fill_opacity.map(|v| v.to_string()),
            self.stroke_color.map(|v| describe_color(&v)),
            self.stroke_opacity.map(|v| v.to_string()),
            self.blend_mode.map(|v| v.to_string()),
            self.stroke_width.map(|v| v.to_string()),
            self.stroke_cap_style.map(|v| v.member_name().to_string()),
            self.stroke_join_style.map(|v| v.member_name().to_string()),
            self.stroke_miter_limit.map(|v| v.to_string()),
            self.stroke_dash.as_ref().map(|v| v.to_string()),
            self.stroke_dash_phase().map(|v| v.to_string()),
        ];
        MERGE_PROPERTIES
            .iter()
            .zip(rendered)
            .filter(|(_, value)| !value.is_inherit())
            .map(|(name, value)| (*name, value.to_string()))
            .collect()
    }
}

impl From<DeviceRgb> for Property<Color> {
    fn from(color: DeviceRgb) -> Self {
        Property::Value(color.into())
    }
}

impl From<DeviceGray> for Property<Color> {
    fn from(color: DeviceGray) -> Self {
        Property::Value(color.into())
    }
}

impl From<DeviceCmyk> for Property<Color> {
    fn from(color: DeviceCmyk) -> Self {
        Property::Value(color.into())
    }
}

fn describe_color(color: &Color) -> String {
    let space = match color {
        Color::Rgb(_) => "DeviceRGB",
        Color::Gray(_) => "DeviceGray",
        Color::Cmyk(_) => "DeviceCMYK",
    };
    let channels: Vec<String> = color.colors().iter().map(|c| c.to_string()).collect();
    match color.alpha() {
        Some(alpha) => format!("{space}({}, a={alpha})", channels.join(", ")),
        None => format!("{space}({})", channels.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_types::{gray8, rgb8};

    fn red() -> Color {
        Color::from(rgb8(255, 0, 0, None))
    }

    fn busy_style() -> GraphicsStyle {
        let mut style = GraphicsStyle::new();
        style
            .set_paint_rule(PathPaintRule::FillEvenOdd)
            .unwrap()
            .set_fill_opacity(0.5)
            .unwrap()
            .set_stroke_width(2.0)
            .unwrap()
            .set_stroke_dash_pattern(vec![3.0, 1.0])
            .unwrap()
            .set_stroke_dash_phase(1.0)
            .unwrap();
        style.set_fill_color(red()).set_stroke_color(Property::Unset);
        style
    }

    #[test]
    fn drawing_defaults_set_only_the_drawing_properties() {
        let defaults = GraphicsStyle::drawing_defaults();
        assert_eq!(defaults.paint_rule(), Property::Value(PathPaintRule::Auto));
        assert_eq!(defaults.auto_close(), Property::Value(true));
        assert_eq!(defaults.intersection_rule(), Property::Value(IntersectionRule::Nonzero));
        assert!(defaults.to_pdf_dict().is_none());
        assert_eq!(defaults.explicit_properties().len(), 3);
    }

    #[test]
    fn with_paint_rule_sets_nothing_else() {
        let style = GraphicsStyle::with_paint_rule(PathPaintRule::DontPaint);
        assert_eq!(style.paint_rule(), Property::Value(PathPaintRule::DontPaint));
        assert_eq!(style.explicit_properties().len(), 1);
    }

    #[test]
    fn merging_with_an_all_inherit_style_is_neutral() {
        let style = busy_style();
        let empty = GraphicsStyle::new();
        assert_eq!(GraphicsStyle::merge(&style, &empty), style);
        assert_eq!(GraphicsStyle::merge(&empty, &style), style);
    }

    #[test]
    fn child_values_override_parent_values() {
        let parent = busy_style();
        let mut child = GraphicsStyle::new();
        child.set_stroke_width(Property::Unset).unwrap();
        child.set_fill_color(Color::from(gray8(0, None)));
        let merged = GraphicsStyle::merge(&parent, &child);
        assert_eq!(merged.stroke_width(), Property::Unset);
        assert_eq!(merged.fill_color(), Property::Value(Color::from(gray8(0, None))));
        assert_eq!(merged.fill_opacity(), Property::Value(0.5));
    }

    #[test]
    fn merge_is_associative_down_a_chain() {
        let mut a = GraphicsStyle::new();
        a.set_stroke_width(1.0).unwrap();
        let mut b = GraphicsStyle::new();
        b.set_blend_mode(BlendMode::Multiply).unwrap();
        let c = busy_style();
        let left = GraphicsStyle::merge(&GraphicsStyle::merge(&a, &b), &c);
        let right = GraphicsStyle::merge(&a, &GraphicsStyle::merge(&b, &c));
        assert_eq!(left, right);
    }

    #[test]
    fn dash_pattern_and_phase_merge_as_a_unit() {
        let mut parent = GraphicsStyle::new();
        parent.set_stroke_dash_pattern(vec![4.0]).unwrap().set_stroke_dash_phase(2.0).unwrap();
        let mut child = GraphicsStyle::new();
        child.set_stroke_dash_pattern(vec![1.0, 1.0]).unwrap();
        let merged = GraphicsStyle::merge(&parent, &child);
        assert_eq!(merged.stroke_dash_pattern(), Property::Value(&[1.0, 1.0][..]));
        assert_eq!(merged.stroke_dash_phase(), Property::Value(0.0));
    }

    #[test]
    fn color_alpha_sets_matching_opacity() {
        let mut style = GraphicsStyle::new();
        style.set_fill_color(Color::from(rgb8(0, 0, 255, Some(0))));
        assert_eq!(style.fill_opacity(), Property::Value(0.0));
        assert!(style.stroke_opacity().is_inherit());

        style.set_stroke_color_hex("#00000080").unwrap();
        assert_eq!(style.stroke_opacity(), Property::Value(128.0 / 255.0));
    }

    #[test]
    fn color_without_alpha_leaves_opacity_alone() {
        let mut style = GraphicsStyle::new();
        style.set_fill_opacity(0.3).unwrap();
        style.set_fill_color_hex("#abc").unwrap();
        assert_eq!(style.fill_opacity(), Property::Value(0.3));
        assert_eq!(
            style.fill_color(),
            Property::Value(Color::from(rgb8(0xaa, 0xbb, 0xcc, None)))
        );
    }

    #[test]
    fn rejects_bad_assignments() {
        let mut style = GraphicsStyle::new();
        assert!(matches!(
            style.set_fill_opacity(1.5),
            Err(StyleError::OutOfRange { property: "fill opacity", .. })
        ));
        assert!(matches!(
            style.set_stroke_opacity(Property::Unset),
            Err(StyleError::InvalidType { property: "stroke opacity", found: "unset" })
        ));
        assert!(matches!(style.set_stroke_width(-1.0), Err(StyleError::Negative { .. })));
        assert!(matches!(style.set_fill_color_hex("red"), Err(StyleError::HexFormat { .. })));
        assert_eq!(style, GraphicsStyle::new());
    }

    #[test]
    fn dash_phase_needs_a_pattern() {
        let mut style = GraphicsStyle::new();
        assert!(matches!(style.set_stroke_dash_phase(1.0), Err(StyleError::NoDashPattern)));
        style.set_stroke_dash_phase(Property::Inherit).unwrap();
        assert!(style.stroke_dash().is_inherit());

        style.set_stroke_dash_pattern(vec![2.0]).unwrap();
        style.set_stroke_dash_phase(0.5).unwrap();
        style.set_stroke_dash_pattern(vec![5.0, 1.0]).unwrap();
        assert_eq!(style.stroke_dash_phase(), Property::Value(0.5));
    }

    #[test]
    fn unset_dash_pattern_is_solid() {
        let mut style = GraphicsStyle::new();
        style.set_stroke_dash_pattern(Property::Unset).unwrap();
        assert_eq!(style.stroke_dash(), Property::Value(&DashPattern::solid()));
    }

    #[test]
    fn auto_paint_rule_resolution() {
        let mut stroke_only = GraphicsStyle::new();
        stroke_only.set_paint_rule(PathPaintRule::Auto).unwrap();
        stroke_only.set_stroke_color(red());
        stroke_only.set_stroke_width(1.0).unwrap();
        assert_eq!(stroke_only.resolve_paint_rule(), PathPaintRule::Stroke);

        let mut fill_only = GraphicsStyle::new();
        fill_only.set_paint_rule(PathPaintRule::Auto).unwrap();
        fill_only.set_fill_color(red());
        assert_eq!(fill_only.resolve_paint_rule(), PathPaintRule::FillNonzero);

        fill_only.set_intersection_rule(IntersectionRule::EvenOdd).unwrap();
        assert_eq!(fill_only.resolve_paint_rule(), PathPaintRule::FillEvenOdd);

        fill_only.set_stroke_color(red());
        assert_eq!(fill_only.resolve_paint_rule(), PathPaintRule::StrokeFillEvenOdd);

        let mut neither = GraphicsStyle::new();
        neither.set_paint_rule(PathPaintRule::Auto).unwrap();
        assert_eq!(neither.resolve_paint_rule(), PathPaintRule::DontPaint);
    }

    #[test]
    fn unset_stroke_width_disables_auto_stroke() {
        let mut style = GraphicsStyle::new();
        style.set_stroke_color(red()).set_fill_color(red());
        style.set_stroke_width(Property::Unset).unwrap();
        assert_eq!(style.resolve_paint_rule(), PathPaintRule::FillNonzero);
    }

    #[test]
    fn explicit_paint_rule_wins() {
        let mut style = GraphicsStyle::new();
        style.set_paint_rule(PathPaintRule::StrokeFillEvenOdd).unwrap();
        assert_eq!(style.resolve_paint_rule(), PathPaintRule::StrokeFillEvenOdd);
    }

    #[test]
    fn pdf_dict_has_fixed_key_order() {
        let mut style = GraphicsStyle::new();
        style
            .set_stroke_dash_pattern(vec![2.0, 1.0])
            .unwrap()
            .set_stroke_join_style(StrokeJoinStyle::Round)
            .unwrap()
            .set_stroke_cap_style(StrokeCapStyle::Square)
            .unwrap()
            .set_stroke_width(0.5)
            .unwrap()
            .set_stroke_opacity(0.25)
            .unwrap()
            .set_blend_mode(BlendMode::Screen)
            .unwrap()
            .set_fill_opacity(0.75)
            .unwrap()
            .set_stroke_miter_limit(4.0)
            .unwrap();
        assert_eq!(
            style.to_pdf_dict().unwrap(),
            "<< /Type /ExtGState\n/ca 0.75\n/BM /Screen\n/CA 0.25\n/LW 0.5\n/LC 2\n/LJ 1\n/ML 4\n/D [[2 1] 0] >>"
        );
    }

    #[test]
    fn colors_and_rules_stay_out_of_the_dict() {
        let mut style = GraphicsStyle::new();
        style.set_fill_color(red()).set_stroke_color(red());
        style.set_paint_rule(PathPaintRule::Stroke).unwrap();
        style.set_stroke_width(Property::Unset).unwrap();
        assert_eq!(style.to_pdf_dict(), None);
    }

    #[test]
    fn explicit_properties_skip_inherited_ones() {
        let mut style = GraphicsStyle::new();
        style.set_auto_close(false).unwrap();
        style.set_stroke_cap_style(StrokeCapStyle::Round).unwrap();
        style.set_stroke_color(Property::Unset);
        assert_eq!(
            style.explicit_properties(),
            vec![
                ("auto_close", "false".to_string()),
                ("stroke_color", "None".to_string()),
                ("stroke_cap_style", "ROUND".to_string()),
            ]
        );
    }
}
