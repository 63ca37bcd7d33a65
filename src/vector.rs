//! Planar vectors and the products that distinguish scalars from vectors.
//!
//! - scalar × vector: a vector, parallel (σ > 0), anti-parallel (σ < 0) or zero
//! - dot product: a scalar, |a||b|cos θ
//! - 2-D cross product: the z-component |a||b|sin θ, a signed area whose sign
//!   gives the rotational sense (out of / into the page)

use std::ops::{Add, Mul, Neg, Sub};

use crate::circuit::TOLERANCE;

/// A 2-D vector with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Direction in degrees, counter-clockwise from +x, in (-180, 180].
    pub fn angle_deg(&self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    pub fn scale(&self, s: f64) -> Vec2 {
        Vec2::new(self.x * s, self.y * s)
    }

    pub fn dot(&self, other: &Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3-D cross product of `(x, y, 0)` vectors.
    pub fn cross_z(&self, other: &Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Projection of `self` onto `onto`, or `None` when `onto` is zero.
    pub fn project_onto(&self, onto: &Vec2) -> Option<Vec2> {
        let norm_sq = onto.dot(onto);
        if norm_sq == 0.0 {
            None
        } else {
            Some(onto.scale(self.dot(onto) / norm_sq))
        }
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude() < TOLERANCE
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, s: f64) -> Vec2 {
        self.scale(s)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, v: Vec2) -> Vec2 {
        v.scale(self)
    }
}

/// Angle between two vectors in degrees, in [0, 180]. `None` if either is zero.
pub fn angle_between(a: &Vec2, b: &Vec2) -> Option<f64> {
    let denom = a.magnitude() * b.magnitude();
    if denom == 0.0 {
        return None;
    }
    let cos = (a.dot(b) / denom).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// How `scalar * v` relates to `v`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Parallel,
    AntiParallel,
    Zero,
}

impl Alignment {
    pub fn describe(&self) -> &'static str {
        match self {
            Alignment::Parallel => "same direction as input",
            Alignment::AntiParallel => "opposite direction (negative scalar)",
            Alignment::Zero => "zero vector",
        }
    }
}

pub fn alignment(scalar: f64, v: &Vec2) -> Alignment {
    if scalar == 0.0 || v.is_zero() {
        Alignment::Zero
    } else if scalar > 0.0 {
        Alignment::Parallel
    } else {
        Alignment::AntiParallel
    }
}

/// Rotational sense of a 2-D cross product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Counter-clockwise from a to b; +z, out of the page.
    OutOfPage,
    /// Clockwise; -z, into the page.
    IntoPage,
    /// Parallel or zero vectors.
    Zero,
}

impl Orientation {
    pub fn describe(&self) -> &'static str {
        match self {
            Orientation::OutOfPage => "OUT of page",
            Orientation::IntoPage => "INTO page",
            Orientation::Zero => "zero",
        }
    }
}

pub fn orientation(cross_z: f64) -> Orientation {
    if cross_z.abs() < TOLERANCE {
        Orientation::Zero
    } else if cross_z > 0.0 {
        Orientation::OutOfPage
    } else {
        Orientation::IntoPage
    }
}

/// Scalar × vector worked example.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledVector {
    pub scalar: f64,
    pub input: Vec2,
    pub output: Vec2,
    pub alignment: Alignment,
}

pub fn scale_vector(scalar: f64, input: Vec2) -> ScaledVector {
    ScaledVector {
        scalar,
        input,
        output: input * scalar,
        alignment: alignment(scalar, &input),
    }
}

/// Vector × vector worked example: both products of one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorProducts {
    pub a: Vec2,
    pub b: Vec2,
    pub dot: f64,
    /// Projection of `a` onto `b`.
    pub projection: Option<Vec2>,
    pub angle_deg: Option<f64>,
    pub cross_z: f64,
    pub orientation: Orientation,
}

pub fn products(a: Vec2, b: Vec2) -> VectorProducts {
    let cross_z = a.cross_z(&b);
    VectorProducts {
        a,
        b,
        dot: a.dot(&b),
        projection: a.project_onto(&b),
        angle_deg: angle_between(&a, &b),
        cross_z,
        orientation: orientation(cross_z),
    }
}
