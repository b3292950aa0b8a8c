//! The behavior every concrete shape provides, and the closed set of shapes.

use crate::aabb::Aabb;
use crate::body::Body;
use crate::circle::Circle;
use crate::polygon::Polygon;
use crate::vector::Vec2;

/// The interval a shape covers when projected onto an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    /// Projects points onto `axis`, which is expected to be a unit vector.
    ///
    /// An empty point set projects to the empty interval `[+inf, -inf]`.
    pub fn of_points(points: impl IntoIterator<Item = Vec2>, axis: Vec2) -> Self {
        points.into_iter().fold(
            Projection {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |p, point| {
                let d = point.dot(axis);
                Projection {
                    min: p.min.min(d),
                    max: p.max.max(d),
                }
            },
        )
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Depth of the overlap along the axis: the smaller distance needed to
    /// push one interval clear of the other. Negative when disjoint.
    pub fn overlap(&self, other: &Projection) -> f64 {
        (self.max - other.min).min(other.max - self.min)
    }
}

/// Shape-specific operations on top of a shared [`Body`].
pub trait Shape {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Bounding box as of the last movement.
    fn bounds(&self) -> Aabb;

    /// Recomputes [`Shape::bounds`] from the current position and geometry.
    fn refresh_bounds(&mut self);

    /// Interval covered along `axis`, which need not be normalized.
    fn project(&self, axis: Vec2) -> Projection;

    /// Brings the geometry in line with the body's current orientation.
    /// Cheap when the orientation has not changed since the last call.
    fn rotate_geometry(&mut self);

    /// Moves the body without changing its velocity.
    fn translate(&mut self, offset: Vec2) {
        self.body_mut().position += offset;
        self.refresh_bounds();
    }

    /// Integrates the body over `dt` and updates the geometry to match,
    /// including any orientation set directly on the body since.
    fn integrate(&mut self, dt: f64) {
        self.body_mut().integrate(dt);
        self.rotate_geometry();
        self.refresh_bounds();
    }
}

/// A body the world can simulate.
#[derive(Clone, Debug)]
pub enum Entity {
    Circle(Circle),
    Polygon(Polygon),
}

impl Entity {
    pub fn body(&self) -> &Body {
        match self {
            Entity::Circle(circle) => circle.body(),
            Entity::Polygon(polygon) => polygon.body(),
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Entity::Circle(circle) => circle.body_mut(),
            Entity::Polygon(polygon) => polygon.body_mut(),
        }
    }
}

impl From<Circle> for Entity {
    fn from(circle: Circle) -> Self {
        Entity::Circle(circle)
    }
}

impl From<Polygon> for Entity {
    fn from(polygon: Polygon) -> Self {
        Entity::Polygon(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_overlap() {
        let a = Projection { min: 0.0, max: 4.0 };
        let b = Projection { min: 3.0, max: 10.0 };
        assert_eq!(a.overlap(&b), 1.0);
        assert_eq!(b.overlap(&a), 1.0);

        let c = Projection { min: 5.0, max: 6.0 };
        assert!(a.overlap(&c) < 0.0);
        assert_eq!(a.overlap(&Projection { min: 4.0, max: 6.0 }), 0.0);
    }

    #[test]
    fn projection_of_points() {
        let p = Projection::of_points([Vec2::new(1.0, 2.0), Vec2::new(-3.0, 0.0)], Vec2::X);
        assert_eq!(p, Projection { min: -3.0, max: 1.0 });
        assert!(p.contains(0.0));
        assert!(!p.contains(1.5));
    }
}
