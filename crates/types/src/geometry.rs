//! Two-dimensional points and affine transforms.
//!
//! Points are row vectors `[x y 1]` and transforms act on them from the right, so
//! `point * a * b` applies `a` first and `b` second. Composition with `*` is
//! therefore left-to-right in application order.

use crate::number::{number_to_str, round8};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A coordinate or displacement in the drawing plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length of the vector.
    pub fn mag(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Signed angle in radians from `self` to `other`, in `(-π, π]`.
    ///
    /// The sign follows the cross product `self.x * other.y - self.y * other.x`: a
    /// non-negative cross product gives a non-negative angle. In the y-down
    /// document frame that is a clockwise turn.
    ///
    /// Both vectors must have a non-zero length; a zero-length operand yields NaN.
    pub fn angle(self, other: Point) -> f64 {
        let sign = if self.x * other.y - self.y * other.x >= 0.0 {
            1.0
        } else {
            -1.0
        };
        let cosine = round8(self.dot(other) / (self.mag() * other.mag())).clamp(-1.0, 1.0);
        sign * cosine.acos()
    }

    /// Applies an affine transform to this point.
    pub fn transform(self, transform: &Transform) -> Point {
        Point {
            x: transform.a * self.x + transform.c * self.y + transform.e,
            y: transform.b * self.x + transform.d * self.y + transform.f,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        point * self
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, scalar: f64) -> Point {
        Point::new(self.x / scalar, self.y / scalar)
    }
}

impl Mul<Transform> for Point {
    type Output = Point;

    fn mul(self, transform: Transform) -> Point {
        self.transform(&transform)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={}, y={})", number_to_str(self.x), number_to_str(self.y))
    }
}

/// An affine matrix `[[a b 0] [c d 0] [e f 1]]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub const fn translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    pub const fn scaling(x: f64, y: f64) -> Self {
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Scales both axes by the same factor.
    pub const fn uniform_scaling(factor: f64) -> Self {
        Self::scaling(factor, factor)
    }

    /// Rotation by `theta` radians. Positive angles turn clockwise in the y-down
    /// document frame.
    pub fn rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    pub fn rotation_d(theta_degrees: f64) -> Self {
        Self::rotation(theta_degrees * PI / 180.0)
    }

    /// Shear by `x` along the horizontal axis and `y` along the vertical axis.
    pub const fn shearing(x: f64, y: f64) -> Self {
        Self::new(1.0, y, x, 1.0, 0.0, 0.0)
    }

    pub const fn uniform_shearing(factor: f64) -> Self {
        Self::shearing(factor, factor)
    }

    pub fn translate(self, x: f64, y: f64) -> Self {
        self * Self::translation(x, y)
    }

    pub fn scale(self, x: f64, y: f64) -> Self {
        self * Self::scaling(x, y)
    }

    pub fn scale_uniform(self, factor: f64) -> Self {
        self * Self::uniform_scaling(factor)
    }

    pub fn rotate(self, theta: f64) -> Self {
        self * Self::rotation(theta)
    }

    pub fn rotate_d(self, theta_degrees: f64) -> Self {
        self * Self::rotation_d(theta_degrees)
    }

    pub fn shear(self, x: f64, y: f64) -> Self {
        self * Self::shearing(x, y)
    }

    /// Re-centers this transform on `(x, y)` instead of the origin.
    ///
    /// The result is `translation(-x, -y) * self * translation(x, y)`: points are
    /// moved so that `(x, y)` sits on the origin, transformed, then moved back.
    pub fn about(self, x: f64, y: f64) -> Self {
        Self::translation(-x, -y) * self * Self::translation(x, y)
    }
}

impl Mul for Transform {
    type Output = Transform;

    /// Composes two transforms; `self` is applied first.
    fn mul(self, other: Transform) -> Transform {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }
}

impl Mul<f64> for Transform {
    type Output = Transform;

    fn mul(self, scalar: f64) -> Transform {
        Transform::new(
            self.a * scalar,
            self.b * scalar,
            self.c * scalar,
            self.d * scalar,
            self.e * scalar,
            self.f * scalar,
        )
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "transform: [{} {} 0; {} {} 0; {} {} 1]",
            number_to_str(self.a),
            number_to_str(self.b),
            number_to_str(self.c),
            number_to_str(self.d),
            number_to_str(self.e),
            number_to_str(self.f),
        )
    }
}
