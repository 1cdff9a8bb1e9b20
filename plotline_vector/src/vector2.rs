// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use kurbo::{Point, Vec2};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `hypot`, `atan2`, `sin`, `cos`

/// A 2D point/vector with always-finite components.
///
/// The fields are public for ergonomic construction and pattern matching,
/// mirroring [`kurbo::Vec2`]. The validated entry points ([`Vector2::new`]
/// and the arithmetic methods) are what uphold the finiteness invariant;
/// code that writes the fields directly is expected to supply finite
/// values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// The x component.
    pub x: f64,
    /// The y component.
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector, substituting `0.0` for any non-finite component.
    ///
    /// A non-finite input is a caller bug somewhere upstream (for example
    /// an uninitialized pixel delta); it is logged and neutralized here so
    /// that it cannot poison view state.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
        }
    }

    /// Returns the unit vector for the given angle in radians.
    ///
    /// A non-finite angle logs a warning and yields [`Vector2::ZERO`].
    #[must_use]
    pub fn from_angle(theta: f64) -> Self {
        if !theta.is_finite() {
            log::warn!("Vector2::from_angle: non-finite angle {theta}");
            return Self::ZERO;
        }
        Self {
            x: theta.cos(),
            y: theta.sin(),
        }
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the magnitude (Euclidean length) of the vector.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the angle of the vector in radians.
    #[must_use]
    pub fn heading(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Adds `rhs` to this vector in place.
    ///
    /// A non-finite operand logs a warning and leaves the receiver
    /// unchanged.
    #[allow(
        clippy::should_implement_trait,
        reason = "the mutating form is part of the primary API; `Add` is also implemented"
    )]
    pub fn add(&mut self, rhs: Self) {
        if !rhs.is_finite() {
            log::warn!("Vector2::add: skipped non-finite operand {rhs:?}");
            return;
        }
        self.x += rhs.x;
        self.y += rhs.y;
    }

    /// Subtracts `rhs` from this vector in place.
    ///
    /// A non-finite operand logs a warning and leaves the receiver
    /// unchanged.
    #[allow(
        clippy::should_implement_trait,
        reason = "the mutating form is part of the primary API; `Sub` is also implemented"
    )]
    pub fn sub(&mut self, rhs: Self) {
        if !rhs.is_finite() {
            log::warn!("Vector2::sub: skipped non-finite operand {rhs:?}");
            return;
        }
        self.x -= rhs.x;
        self.y -= rhs.y;
    }

    /// Multiplies this vector by a scalar in place.
    ///
    /// A non-finite scalar logs a warning and leaves the receiver
    /// unchanged.
    pub fn mult(&mut self, scalar: f64) {
        if !scalar.is_finite() {
            log::warn!("Vector2::mult: skipped non-finite scalar {scalar}");
            return;
        }
        self.x *= scalar;
        self.y *= scalar;
    }

    /// Divides this vector by a scalar in place.
    ///
    /// Division by zero is a warning-class condition: it is logged and the
    /// receiver is left unchanged. A non-finite scalar is handled the same
    /// way.
    #[allow(
        clippy::should_implement_trait,
        reason = "the mutating form is part of the primary API; no `Div` impl exists"
    )]
    pub fn div(&mut self, scalar: f64) {
        if !scalar.is_finite() {
            log::warn!("Vector2::div: skipped non-finite scalar {scalar}");
            return;
        }
        if scalar == 0.0 {
            log::warn!("Vector2::div: division by zero");
            return;
        }
        self.x /= scalar;
        self.y /= scalar;
    }

    /// Normalizes this vector to magnitude 1 in place.
    ///
    /// A zero vector cannot be normalized; the attempt is logged and the
    /// receiver is left unchanged.
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        self.div(mag);
    }

    /// Sets the magnitude of this vector to `value`, keeping its direction.
    ///
    /// Follows the same skip-and-warn policy as [`Vector2::normalize`] and
    /// [`Vector2::mult`] for zero vectors and non-finite values.
    pub fn set_magnitude(&mut self, value: f64) {
        if !value.is_finite() {
            log::warn!("Vector2::set_magnitude: skipped non-finite value {value}");
            return;
        }
        let mag = self.magnitude();
        if mag == 0.0 {
            log::warn!("Vector2::set_magnitude: zero vector has no direction");
            return;
        }
        self.x = self.x / mag * value;
        self.y = self.y / mag * value;
    }

    /// Copies the components of `other` into this vector.
    ///
    /// Non-finite components in `other` are logged and skipped.
    pub fn set(&mut self, other: Self) {
        if !other.is_finite() {
            log::warn!("Vector2::set: skipped non-finite operand {other:?}");
            return;
        }
        *self = other;
    }

    /// Returns the sum of two vectors (pure form of [`Vector2::add`]).
    #[must_use]
    pub fn sum(a: Self, b: Self) -> Self {
        let mut out = a;
        Self::add(&mut out, b);
        out
    }

    /// Returns `a - b` (pure form of [`Vector2::sub`]).
    #[must_use]
    pub fn diff(a: Self, b: Self) -> Self {
        let mut out = a;
        Self::sub(&mut out, b);
        out
    }

    /// Returns this vector scaled by `k` (pure form of [`Vector2::mult`]).
    #[must_use]
    pub fn scaled(self, k: f64) -> Self {
        let mut out = self;
        out.mult(k);
        out
    }

    /// Returns this vector normalized to magnitude 1.
    ///
    /// Returns the vector unchanged if it is the zero vector.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut out = self;
        out.normalize();
        out
    }

    /// Linearly interpolates between `a` and `b` at parameter `t`.
    ///
    /// `t = 0` yields `a` and `t = 1` yields `b`; `t` is not clamped. A
    /// non-finite `t` logs a warning and yields `a`.
    #[must_use]
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        if !t.is_finite() {
            log::warn!("Vector2::lerp: skipped non-finite parameter {t}");
            return a;
        }
        Self {
            x: (1.0 - t) * a.x + t * b.x,
            y: (1.0 - t) * a.y + t * b.y,
        }
    }

    /// Converts to a [`kurbo::Point`].
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Converts to a [`kurbo::Vec2`].
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("Vector2: non-finite component {value} replaced with 0");
        0.0
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::sum(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::diff(self, rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.scaled(-1.0)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scaled(rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.add(rhs);
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub(rhs);
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.mult(rhs);
    }
}

impl From<Point> for Vector2 {
    fn from(pt: Point) -> Self {
        Self::new(pt.x, pt.y)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Self {
        v.to_point()
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        v.to_vec2()
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
