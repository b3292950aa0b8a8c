use crate::aabb::Aabb;
use crate::body::Body;
use crate::error::ShapeError;
use crate::shape::{Projection, Shape};
use crate::vector::Vec2;

/// A solid disc.
#[derive(Clone, Debug)]
pub struct Circle {
    body: Body,
    radius: f64,
    bounds: Aabb,
}

impl Circle {
    /// Wraps `body` in a disc of the given radius and sets its moment of
    /// inertia to `m r² / 2`.
    pub fn new(mut body: Body, radius: f64) -> Result<Self, ShapeError> {
        body.validate()?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ShapeError::InvalidRadius(radius));
        }
        body.set_inertia(0.5 * body.mass() * radius * radius);
        let bounds = Aabb::around(body.position, radius);
        Ok(Circle { body, radius, bounds })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> Vec2 {
        self.body.position
    }
}

impl Shape for Circle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn bounds(&self) -> Aabb {
        self.bounds
    }

    fn refresh_bounds(&mut self) {
        self.bounds = Aabb::around(self.body.position, self.radius);
    }

    fn project(&self, axis: Vec2) -> Projection {
        let center = self.body.position.project(axis);
        Projection {
            min: center - self.radius,
            max: center + self.radius,
        }
    }

    /// A disc looks the same at every orientation.
    fn rotate_geometry(&mut self) {}
}
