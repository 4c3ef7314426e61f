use crate::coerce::coercive_enum;

coercive_enum! {
    /// Blend modes for compositing painted content onto the backdrop. The value
    /// is the PDF name.
    pub enum BlendMode ("blend mode") {
        Normal = ("NORMAL", "Normal"),
        Multiply = ("MULTIPLY", "Multiply"),
        Screen = ("SCREEN", "Screen"),
        Overlay = ("OVERLAY", "Overlay"),
        Darken = ("DARKEN", "Darken"),
        Lighten = ("LIGHTEN", "Lighten"),
        ColorDodge = ("COLOR_DODGE", "ColorDodge"),
        ColorBurn = ("COLOR_BURN", "ColorBurn"),
        HardLight = ("HARD_LIGHT", "HardLight"),
        SoftLight = ("SOFT_LIGHT", "SoftLight"),
        Difference = ("DIFFERENCE", "Difference"),
        Exclusion = ("EXCLUSION", "Exclusion"),
        Hue = ("HUE", "Hue"),
        Saturation = ("SATURATION", "Saturation"),
        Color = ("COLOR", "Color"),
        Luminosity = ("LUMINOSITY", "Luminosity"),
    }
}
