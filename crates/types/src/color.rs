//! Device color spaces with optional alpha.
//!
//! Every channel is a real number in `[0, 1]`. Alpha is optional: `None` means the
//! color does not specify an opacity, which is different from full opacity.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("{component} value {value} not in range [0, 1]")]
    OutOfRange { component: &'static str, value: f64 },
}

fn check_range(component: &'static str, value: f64) -> Result<f64, ColorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange { component, value })
    }
}

fn check_alpha(alpha: Option<f64>) -> Result<Option<f64>, ColorError> {
    alpha.map(|a| check_range("alpha", a)).transpose()
}

fn from_u8(value: u8) -> f64 {
    f64::from(value) / 255.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceRgb {
    r: f64,
    g: f64,
    b: f64,
    a: Option<f64>,
}

impl DeviceRgb {
    pub const OPERATOR: &'static str = "rg";

    pub fn new(r: f64, g: f64, b: f64, a: Option<f64>) -> Result<Self, ColorError> {
        Ok(Self {
            r: check_range("red", r)?,
            g: check_range("green", g)?,
            b: check_range("blue", b)?,
            a: check_alpha(a)?,
        })
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn a(&self) -> Option<f64> {
        self.a
    }

    pub fn colors(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceGray {
    g: f64,
    a: Option<f64>,
}

impl DeviceGray {
    pub const OPERATOR: &'static str = "g";

    pub fn new(g: f64, a: Option<f64>) -> Result<Self, ColorError> {
        Ok(Self {
            g: check_range("gray", g)?,
            a: check_alpha(a)?,
        })
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn a(&self) -> Option<f64> {
        self.a
    }

    pub fn colors(&self) -> [f64; 1] {
        [self.g]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceCmyk {
    c: f64,
    m: f64,
    y: f64,
    k: f64,
    a: Option<f64>,
}

impl DeviceCmyk {
    pub const OPERATOR: &'static str = "k";

    pub fn new(c: f64, m: f64, y: f64, k: f64, a: Option<f64>) -> Result<Self, ColorError> {
        Ok(Self {
            c: check_range("cyan", c)?,
            m: check_range("magenta", m)?,
            y: check_range("yellow", y)?,
            k: check_range("black", k)?,
            a: check_alpha(a)?,
        })
    }

    pub fn a(&self) -> Option<f64> {
        self.a
    }

    pub fn colors(&self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }
}

/// A drawing color in one of the device color spaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Color {
    Rgb(DeviceRgb),
    Gray(DeviceGray),
    Cmyk(DeviceCmyk),
}

impl Color {
    /// The fill operator for this color space. The stroke operator is the
    /// upper-case form.
    pub fn operator(&self) -> &'static str {
        match self {
            Color::Rgb(_) => DeviceRgb::OPERATOR,
            Color::Gray(_) => DeviceGray::OPERATOR,
            Color::Cmyk(_) => DeviceCmyk::OPERATOR,
        }
    }

    /// Channel values without alpha.
    pub fn colors(&self) -> Vec<f64> {
        match self {
            Color::Rgb(c) => c.colors().to_vec(),
            Color::Gray(c) => c.colors().to_vec(),
            Color::Cmyk(c) => c.colors().to_vec(),
        }
    }

    pub fn alpha(&self) -> Option<f64> {
        match self {
            Color::Rgb(c) => c.a,
            Color::Gray(c) => c.a,
            Color::Cmyk(c) => c.a,
        }
    }
}

impl From<DeviceRgb> for Color {
    fn from(color: DeviceRgb) -> Self {
        Color::Rgb(color)
    }
}

impl From<DeviceGray> for Color {
    fn from(color: DeviceGray) -> Self {
        Color::Gray(color)
    }
}

impl From<DeviceCmyk> for Color {
    fn from(color: DeviceCmyk) -> Self {
        Color::Cmyk(color)
    }
}

/// Builds an RGB color from 8-bit channels.
pub fn rgb8(r: u8, g: u8, b: u8, a: Option<u8>) -> DeviceRgb {
    DeviceRgb {
        r: from_u8(r),
        g: from_u8(g),
        b: from_u8(b),
        a: a.map(from_u8),
    }
}

/// Builds a gray level from an 8-bit channel.
pub fn gray8(g: u8, a: Option<u8>) -> DeviceGray {
    DeviceGray {
        g: from_u8(g),
        a: a.map(from_u8),
    }
}

/// Builds a CMYK color from 8-bit channels.
pub fn cmyk8(c: u8, m: u8, y: u8, k: u8, a: Option<u8>) -> DeviceCmyk {
    DeviceCmyk {
        c: from_u8(c),
        m: from_u8(m),
        y: from_u8(y),
        k: from_u8(k),
        a: a.map(from_u8),
    }
}
