//! JSON-facing description of a [`GraphicsStyle`].
//!
//! Every field is optional; an absent field inherits. Colors are hex strings and
//! an explicit `null` marks a color or stroke width as unset. Enumerations accept
//! their PDF spelling or their name, and cap/join styles accept integers.
//!
//! ```json
//! {
//!   "paintRule": "auto",
//!   "fillColor": "#336699",
//!   "strokeColor": null,
//!   "strokeDashPattern": "[3 1] 2",
//!   "blendMode": "multiply"
//! }
//! ```

use crate::blend::BlendMode;
use crate::error::StyleError;
use crate::graphics_style::GraphicsStyle;
use crate::paint::{IntersectionRule, PathPaintRule};
use crate::parsers::parse_dash_pattern;
use crate::property::Property;
use crate::stroke::{StrokeCapStyle, StrokeJoinStyle};
use serde::{Deserialize, Deserializer, Serialize};

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn nullable_to_property<T>(value: Option<Option<T>>) -> Property<T> {
    match value {
        None => Property::Inherit,
        Some(None) => Property::Unset,
        Some(Some(v)) => Property::Value(v),
    }
}

/// A dash pattern as a single length, a list of lengths, or text such as
/// `"3 1"` or `"[3 1] 2"`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DashDef {
    Single(f64),
    Lengths(Vec<f64>),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paint_rule: Option<PathPaintRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_close: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intersection_rule: Option<IntersectionRule>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<BlendMode>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_cap_style: Option<StrokeCapStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_join_style: Option<StrokeJoinStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_miter_limit: Option<f64>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub stroke_dash_pattern: Option<Option<DashDef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dash_phase: Option<f64>,
}

impl TryFrom<StyleDef> for GraphicsStyle {
    type Error = StyleError;

    /// Applies each present field through the validating setters, so a bad
    /// definition fails with the same error as the equivalent API call.
    fn try_from(def: StyleDef) -> Result<Self, Self::Error> {
        let mut style = GraphicsStyle::new();
        if let Some(rule) = def.paint_rule {
            style.set_paint_rule(rule)?;
        }
        if let Some(auto_close) = def.auto_close {
            style.set_auto_close(auto_close)?;
        }
        if let Some(rule) = def.intersection_rule {
            style.set_intersection_rule(rule)?;
        }
        match def.fill_color {
            Some(Some(hex)) => {
                style.set_fill_color_hex(&hex)?;
            }
            Some(None) => {
                style.set_fill_color(Property::Unset);
            }
            None => {}
        }
        match def.stroke_color {
            Some(Some(hex)) => {
                style.set_stroke_color_hex(&hex)?;
            }
            Some(None) => {
                style.set_stroke_color(Property::Unset);
            }
            None => {}
        }
        // Explicit opacities override the alpha of the hex colors above.
        if let Some(opacity) = def.fill_opacity {
            style.set_fill_opacity(opacity)?;
        }
        if let Some(opacity) = def.stroke_opacity {
            style.set_stroke_opacity(opacity)?;
        }
        if let Some(mode) = def.blend_mode {
            style.set_blend_mode(mode)?;
        }
        style.set_stroke_width(nullable_to_property(def.stroke_width))?;
        if let Some(cap) = def.stroke_cap_style {
            style.set_stroke_cap_style(cap)?;
        }
        if let Some(join) = def.stroke_join_style {
            style.set_stroke_join_style(join)?;
        }
        if let Some(limit) = def.stroke_miter_limit {
            style.set_stroke_miter_limit(limit)?;
        }
        match nullable_to_property(def.stroke_dash_pattern) {
            Property::Inherit => {}
            Property::Unset => {
                style.set_stroke_dash_pattern(Property::<Vec<f64>>::Unset)?;
            }
            Property::Value(DashDef::Single(length)) => {
                style.set_stroke_dash_pattern(vec![length])?;
            }
            Property::Value(DashDef::Lengths(lengths)) => {
                style.set_stroke_dash_pattern(lengths)?;
            }
            Property::Value(DashDef::Text(text)) => {
                style.set_stroke_dash(parse_dash_pattern(&text)?.into_pattern()?);
            }
        }
        if let Some(phase) = def.stroke_dash_phase {
            style.set_stroke_dash_phase(phase)?;
        }
        Ok(style)
    }
}

impl GraphicsStyle {
    /// Builds a style from a JSON [`StyleDef`].
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let def: StyleDef = serde_json::from_str(json)?;
        GraphicsStyle::try_from(def)
    }
}
