//! Error types for rphys2d.

use thiserror::Error;

/// Errors from vector, matrix and triangle primitives.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// A vector was built from the wrong number of components.
    #[error("vector length mismatch: expected {expected}, got {found}")]
    LengthMismatch {
        /// Length the operation needed.
        expected: usize,
        /// Length that was supplied.
        found: usize,
    },

    /// Matrix product of operands whose inner dimensions differ.
    #[error("multiplication of {lhs_rows}x{lhs_cols} with {rhs_rows}x{rhs_cols} matrices undefined")]
    NonConformable {
        /// Rows of the left operand.
        lhs_rows: usize,
        /// Columns of the left operand.
        lhs_cols: usize,
        /// Rows of the right operand.
        rhs_rows: usize,
        /// Columns of the right operand.
        rhs_cols: usize,
    },

    /// A triangle vertex was addressed outside `0..3`.
    #[error("triangle vertex index {0} out of range 0..3")]
    TriangleIndex(usize),
}

/// Errors raised while building a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Mass must be finite and non-negative.
    #[error("invalid mass {0}: must be finite and >= 0")]
    InvalidMass(f64),

    /// Circle radius must be finite and positive.
    #[error("invalid radius {0}: must be finite and > 0")]
    InvalidRadius(f64),

    /// Restitution must lie in `[0, 1]`.
    #[error("invalid restitution {0}: must be in [0, 1]")]
    InvalidRestitution(f64),

    /// Friction coefficients must be finite and non-negative.
    #[error("invalid friction coefficient {0}: must be finite and >= 0")]
    InvalidFriction(f64),

    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// The vertex loop encloses no area.
    #[error("degenerate polygon: signed area is zero")]
    DegeneratePolygon,

    /// Ear clipping found no ear; the loop is not a simple polygon.
    #[error("cannot triangulate polygon: no ear among {remaining} remaining vertices")]
    Triangulation {
        /// Vertices left when clipping stalled.
        remaining: usize,
    },
}

/// Errors in a [`WorldConfig`](crate::WorldConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Arena width and height must be finite and positive.
    #[error("invalid arena size {width}x{height}")]
    ArenaSize {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },

    /// The fixed step must be finite and positive.
    #[error("invalid time step {0}")]
    TimeStep(f64),

    /// A solver tolerance was negative or not finite.
    #[error("invalid tolerance `{name}` = {value}")]
    Tolerance {
        /// Which tolerance.
        name: &'static str,
        /// Its value.
        value: f64,
    },
}
