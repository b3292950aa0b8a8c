use crate::error::MathError;
use crate::shape::Projection;
use crate::vector::{Vec2, edge_normal};

/// Three vertices, in counter-clockwise order for triangles produced by
/// polygon triangulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Vec2; 3],
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Triangle { vertices: [a, b, c] }
    }

    pub fn vertices(&self) -> &[Vec2; 3] {
        &self.vertices
    }

    pub fn vertex(&self, index: usize) -> Result<Vec2, MathError> {
        self.vertices.get(index).copied().ok_or(MathError::TriangleIndex(index))
    }

    pub fn set_vertex(&mut self, index: usize, vertex: Vec2) -> Result<(), MathError> {
        let slot = self.vertices.get_mut(index).ok_or(MathError::TriangleIndex(index))?;
        *slot = vertex;
        Ok(())
    }

    /// Signed area; positive when the vertices wind counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices;
        0.5 * (b - a).cross(c - a)
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn project(&self, axis: Vec2) -> Projection {
        Projection::of_points(self.vertices, axis)
    }

    /// Whether `point` lies inside or on the boundary.
    ///
    /// The point is projected onto each edge normal; it is contained exactly
    /// when no normal separates it from the triangle.
    pub fn contains(&self, point: Vec2) -> bool {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)].into_iter().all(|(from, to)| {
            let axis = edge_normal(from, to);
            if axis.is_zero() {
                return true;
            }
            self.project(axis).contains(point.dot(axis))
        })
    }

    pub fn rotated(&self, theta: f64) -> Self {
        Triangle {
            vertices: self.vertices.map(|v| v.rotate(theta)),
        }
    }

    pub fn translated(&self, offset: Vec2) -> Self {
        Triangle {
            vertices: self.vertices.map(|v| v + offset),
        }
    }
}
