//! Fixed-length floating point vectors.
//!
//! [`Vector`] is a plain `Copy` value: every operation returns a new vector,
//! and the compound assignment operators only ever touch the vector they are
//! called on.

use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::MathError;

/// An `N`-component vector of `f64`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const N: usize>(pub [f64; N]);

/// The 2D vector used throughout the simulation.
pub type Vec2 = Vector<2>;

impl<const N: usize> Vector<N> {
    /// The vector with every component zero.
    pub const ZERO: Self = Vector([0.0; N]);

    /// Builds a vector from a runtime slice, failing if its length is not `N`.
    pub fn from_slice(components: &[f64]) -> Result<Self, MathError> {
        let elements: [f64; N] = components.try_into().map_err(|_| MathError::LengthMismatch {
            expected: N,
            found: components.len(),
        })?;
        Ok(Vector(elements))
    }

    pub fn components(&self) -> &[f64; N] {
        &self.0
    }

    pub fn dot(self, other: Self) -> f64 {
        self.0.iter().zip(other.0.iter()).map(|(a, b)| a * b).sum()
    }

    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Unit vector in the same direction. The zero vector normalizes to itself.
    pub fn norm(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Self::ZERO;
        }
        self * (1.0 / mag)
    }

    pub fn is_zero(self) -> bool {
        self.0.iter().all(|c| *c == 0.0)
    }

    pub fn is_finite(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Signed length of `self` along the unit direction of `axis`.
    ///
    /// Projecting onto the zero vector gives `0.0`.
    pub fn project(self, axis: Self) -> f64 {
        self.dot(axis.norm())
    }

    /// The vector parallel to `axis` whose scalar projection onto `c` is `projection`.
    ///
    /// Used to turn a penetration depth measured along a contact normal back
    /// into a displacement along a velocity. Returns zero when `axis` is
    /// perpendicular to `c` or either of them is zero.
    pub fn inverse_projection(axis: Self, c: Self, projection: f64) -> Self {
        let direction = axis.norm();
        let cosine = direction.dot(c.norm());
        if cosine == 0.0 {
            return Self::ZERO;
        }
        direction * (projection / cosine)
    }

    /// Mirror image of `self` across the line through the origin along `axis`.
    pub fn reflect(self, axis: Self) -> Self {
        let along = axis.norm();
        along * (2.0 * self.dot(along)) - self
    }
}

impl Vec2 {
    pub const X: Vec2 = Vector([1.0, 0.0]);
    pub const Y: Vec2 = Vector([0.0, 1.0]);

    pub const fn new(x: f64, y: f64) -> Self {
        Vector([x, y])
    }

    pub fn x(self) -> f64 {
        self.0[0]
    }

    pub fn y(self) -> f64 {
        self.0[1]
    }

    /// The 2D pseudo cross product: z component of `self × other` in 3D.
    pub fn cross(self, other: Self) -> f64 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// `self` rotated 90° counter-clockwise.
    pub fn perp(self) -> Self {
        Vec2::new(-self.y(), self.x())
    }

    /// Rotates counter-clockwise by `theta` radians.
    ///
    /// Same result as `Matrix::rotation(theta).transform(self)`, without
    /// building the matrix.
    pub fn rotate(self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Vec2::new(cos * self.x() - sin * self.y(), sin * self.x() + cos * self.y())
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Vec2::new(self.x().min(other.x()), self.y().min(other.y()))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Vec2::new(self.x().max(other.x()), self.y().max(other.y()))
    }
}

/// Cross product of a scalar angular velocity with a lever arm: `ω × r`.
pub fn cross_scalar(omega: f64, r: Vec2) -> Vec2 {
    r.perp() * omega
}

/// Unit normal of the edge running from `a` to `b`.
pub fn edge_normal(a: Vec2, b: Vec2) -> Vec2 {
    (b - a).perp().norm()
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self {
        self *= rhs;
        self
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a += b;
        }
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a -= b;
        }
    }
}

impl<const N: usize> MulAssign<f64> for Vector<N> {
    fn mul_assign(&mut self, rhs: f64) {
        for a in self.0.iter_mut() {
            *a *= rhs;
        }
    }
}
