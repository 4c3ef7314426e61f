//! Elliptical arcs approximated by cubic Bézier curves.
//!
//! An arc is given in endpoint form: radii, x-axis rotation, the large-arc and
//! sweep flags, and the end point. The start point is wherever the path
//! currently is. Conversion goes through the center parameterization, then the
//! angular sweep is cut into pieces of at most a quarter turn, each
//! approximated on the unit circle and mapped onto the ellipse.

use crate::element::CubicBezier;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use vellum_types::{number_to_str, round8, Point, Transform};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc {
    pub radii: Point,
    /// Rotation of the ellipse's x axis, in radians.
    pub rotation: f64,
    pub large: bool,
    pub sweep: bool,
    pub end: Point,
}

impl EllipticalArc {
    pub fn new(radii: Point, rotation: f64, large: bool, sweep: bool, end: Point) -> Self {
        Self {
            radii,
            rotation,
            large,
            sweep,
            end,
        }
    }

    /// Approximates the arc from `start` to `self.end` as a chain of cubic
    /// curves. Each curve starts where the previous one ended; the first starts
    /// at `start`.
    ///
    /// Radii too small to span the endpoints are scaled up uniformly until they
    /// do. The last curve always ends exactly on `self.end`.
    ///
    /// Yields no curves for coincident endpoints, for a zero radius, and for a
    /// small arc whose endpoints are too close to tell apart angularly.
    /// [`PathElement`](crate::PathElement) draws the last two as a line.
    pub fn approximate(&self, start: Point) -> Vec<CubicBezier> {
        if start == self.end {
            log::debug!("arc from {start} ends where it starts, nothing to draw");
            return Vec::new();
        }

        let mut rx = self.radii.x.abs();
        let mut ry = self.radii.y.abs();
        if rx == 0.0 || ry == 0.0 {
            return Vec::new();
        }

        let prime = ((start - self.end) * 0.5) * Transform::rotation(-self.rotation);

        let lambda = (prime.x / rx).powi(2) + (prime.y / ry).powi(2);
        if lambda > 1.0 {
            let grow = lambda.sqrt();
            rx *= grow;
            ry *= grow;
        }

        let sign = if self.large != self.sweep { 1.0 } else { -1.0 };
        let rxry2 = (rx * ry).powi(2);
        let rxpy2 = (rx * prime.y).powi(2);
        let rypx2 = (ry * prime.x).powi(2);
        // Clamped: after the radius correction the numerator is zero up to noise.
        let numerator = round8(rxry2 - rxpy2 - rypx2).max(0.0);
        let factor = sign * (numerator / (rxpy2 + rypx2)).sqrt();
        let center_prime = Point::new(rx * prime.y / ry, -ry * prime.x / rx) * factor;
        let center = center_prime * Transform::rotation(self.rotation) + (start + self.end) * 0.5;

        let arc_start = Point::new(
            (prime.x - center_prime.x) / rx,
            (prime.y - center_prime.y) / ry,
        );
        let arc_end = Point::new(
            (-prime.x - center_prime.x) / rx,
            (-prime.y - center_prime.y) / ry,
        );

        let theta = Point::new(1.0, 0.0).angle(arc_start);
        let mut delta = arc_start.angle(arc_end);
        if !self.sweep && delta > 0.0 {
            delta -= TAU;
        } else if self.sweep && delta < 0.0 {
            delta += TAU;
        } else if delta == 0.0 {
            if !self.large {
                log::debug!("arc from {start} to {} is too short to curve", self.end);
                return Vec::new();
            }
            delta = if self.sweep { TAU } else { -TAU };
        }
        let sweep_sign = if delta >= 0.0 { 1.0 } else { -1.0 };

        let placement = Transform::scaling(1.0, sweep_sign)
            .rotate(theta)
            .scale(rx, ry)
            .rotate(self.rotation)
            .translate(center.x, center.y);

        let mut curves: Vec<CubicBezier> = subdivide_sweep(delta)
            .into_iter()
            .map(|curve| CubicBezier {
                c1: curve.c1 * placement,
                c2: curve.c2 * placement,
                end: curve.end * placement,
            })
            .collect();
        if let Some(last) = curves.last_mut() {
            last.end = self.end;
        }
        curves
    }
}

impl fmt::Display for EllipticalArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "radii={}, rotation={}, large={}, sweep={}, end={}",
            self.radii,
            number_to_str(self.rotation),
            self.large,
            self.sweep,
            self.end
        )
    }
}

/// Approximates a counter-clockwise sweep of `|sweep|` radians around the unit
/// circle, starting at `(1, 0)`.
///
/// The sweep is divided into the fewest equal pieces of at most a quarter
/// turn. Each piece uses the standard control-point distance
/// `4/3 * tan(θ/4)`.
pub fn subdivide_sweep(sweep: f64) -> Vec<CubicBezier> {
    let sweep = sweep.abs();
    let chunks = round8(sweep / FRAC_PI_2).ceil() as usize;
    if chunks == 0 {
        return Vec::new();
    }

    let segment = sweep / chunks as f64;
    let kappa = 4.0 / 3.0 * (segment / 4.0).tan();
    let (sin, cos) = segment.sin_cos();
    let first = CubicBezier::new(
        Point::new(1.0, kappa),
        Point::new(cos + kappa * sin, sin - kappa * cos),
        Point::new(cos, sin),
    );

    (0..chunks)
        .map(|i| {
            let turn = Transform::rotation(i as f64 * segment);
            CubicBezier {
                c1: first.c1 * turn,
                c2: first.c2 * turn,
                end: first.end * turn,
            }
        })
        .collect()
}
