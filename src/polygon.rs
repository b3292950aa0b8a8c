//! Polygons: mass properties, triangulation and oriented geometry.

use crate::aabb::Aabb;
use crate::body::Body;
use crate::error::ShapeError;
use crate::shape::{Projection, Shape};
use crate::triangle::Triangle;
use crate::vector::Vec2;

/// Whether every interior angle of a polygon is at most 180°.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Convexity {
    Convex,
    NonConvex,
}

/// A solid simple polygon.
///
/// The outline is stored counter-clockwise and relative to the center of
/// mass, which is the body's position. Convex polygons keep their oriented
/// outline current; non-convex ones keep their oriented triangles current
/// instead, since collisions run on the triangles.
#[derive(Clone, Debug)]
pub struct Polygon {
    body: Body,
    outline: Vec<Vec2>,
    triangulation: Vec<Triangle>,
    convexity: Convexity,
    vertices: Vec<Vec2>,
    triangles: Vec<Triangle>,
    /// Orientation the oriented geometry was last derived at.
    oriented_at: f64,
    bounds: Aabb,
}

impl Polygon {
    /// Builds a polygon from a vertex loop given relative to `body.position`.
    ///
    /// The loop may wind either way. The body is moved onto the loop's center
    /// of mass and given the matching moment of inertia.
    pub fn new(mut body: Body, vertices: Vec<Vec2>) -> Result<Self, ShapeError> {
        body.validate()?;
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices(vertices.len()));
        }
        let mut vertices = vertices;
        if signed_area(&vertices) < 0.0 {
            vertices.reverse();
        }
        let center = center_of_mass(&vertices)?;
        let outline: Vec<Vec2> = vertices.iter().map(|v| *v - center).collect();
        let inertia = moment_of_inertia(&outline, body.mass())?;
        let triangulation = triangulate(&outline)?;
        let convexity = classify(&outline);

        body.position += center.rotate(body.theta);
        body.set_inertia(inertia);

        let mut polygon = Polygon {
            body,
            outline,
            triangulation,
            convexity,
            vertices: Vec::new(),
            triangles: Vec::new(),
            oriented_at: f64::NAN,
            bounds: Aabb::around(Vec2::ZERO, 0.0),
        };
        polygon.rotate_geometry();
        polygon.refresh_bounds();
        Ok(polygon)
    }

    /// Axis-aligned `width x height` box centered on `body.position`.
    pub fn rectangle(body: Body, width: f64, height: f64) -> Result<Self, ShapeError> {
        let (w, h) = (width / 2.0, height / 2.0);
        Polygon::new(
            body,
            vec![
                Vec2::new(-w, -h),
                Vec2::new(w, -h),
                Vec2::new(w, h),
                Vec2::new(-w, h),
            ],
        )
    }

    pub fn convexity(&self) -> Convexity {
        self.convexity
    }

    /// The counter-clockwise outline at zero orientation, relative to the center of mass.
    pub fn outline(&self) -> &[Vec2] {
        &self.outline
    }

    /// Triangles of the outline at zero orientation.
    pub fn triangulation(&self) -> &[Triangle] {
        &self.triangulation
    }

    pub fn area(&self) -> f64 {
        signed_area(&self.outline)
    }

    /// Outline vertices in world space.
    pub fn world_vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        let position = self.body.position;
        let theta = self.body.theta;
        self.outline.iter().map(move |v| v.rotate(theta) + position)
    }

    /// Triangles in world space, for rendering.
    pub fn world_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        let position = self.body.position;
        let theta = self.body.theta;
        let (reference, rotation) = match self.convexity {
            Convexity::Convex => (&self.triangulation, theta),
            Convexity::NonConvex => (&self.triangles, 0.0),
        };
        reference
            .iter()
            .map(move |t| t.rotated(rotation).translated(position))
    }

    /// Convex pieces of the oriented geometry, relative to the center of mass:
    /// the whole outline for a convex polygon, its triangles otherwise.
    pub fn convex_pieces(&self) -> impl Iterator<Item = &[Vec2]> + '_ {
        let (whole, parts): (Option<&[Vec2]>, &[Triangle]) = match self.convexity {
            Convexity::Convex => (Some(self.vertices.as_slice()), &[]),
            Convexity::NonConvex => (None, self.triangles.as_slice()),
        };
        whole
            .into_iter()
            .chain(parts.iter().map(|t| t.vertices().as_slice()))
    }

    fn oriented_points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.convex_pieces().flat_map(|piece| piece.iter().copied())
    }
}

impl Shape for Polygon {
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
        let position = self.body.position;
        self.bounds = Aabb::from_points(self.oriented_points().map(|v| v + position))
            .unwrap_or(Aabb::around(position, 0.0));
    }

    /// Interval over every vertex and the centroid.
    fn project(&self, axis: Vec2) -> Projection {
        let axis = axis.norm();
        let position = self.body.position;
        Projection::of_points(
            self.oriented_points()
                .map(|v| v + position)
                .chain(std::iter::once(position)),
            axis,
        )
    }

    /// Re-derives the oriented geometry from the reference outline, so
    /// repeated rotation does not accumulate error.
    fn rotate_geometry(&mut self) {
        let theta = self.body.theta;
        if theta == self.oriented_at {
            return;
        }
        self.oriented_at = theta;
        match self.convexity {
            Convexity::Convex => {
                self.vertices = self.outline.iter().map(|v| v.rotate(theta)).collect();
            }
            Convexity::NonConvex => {
                self.triangles = self.triangulation.iter().map(|t| t.rotated(theta)).collect();
            }
        }
    }
}

/// Shoelace signed area; positive for counter-clockwise loops.
pub fn signed_area(vertices: &[Vec2]) -> f64 {
    0.5 * edges(vertices).map(|(a, b)| a.cross(b)).sum::<f64>()
}

/// Area-weighted centroid of a vertex loop.
pub fn center_of_mass(vertices: &[Vec2]) -> Result<Vec2, ShapeError> {
    let area = checked_area(vertices)?;
    let weighted = edges(vertices).fold(Vec2::ZERO, |sum, (a, b)| sum + (a + b) * a.cross(b));
    Ok(weighted * (1.0 / (6.0 * area)))
}

/// Moment of inertia of a uniform lamina about the origin of its vertex coordinates.
pub fn moment_of_inertia(vertices: &[Vec2], mass: f64) -> Result<f64, ShapeError> {
    checked_area(vertices)?;
    let (numerator, denominator) = edges(vertices).fold((0.0, 0.0), |(num, den), (a, b)| {
        let c = a.cross(b);
        (num + c * (a.dot(a) + a.dot(b) + b.dot(b)), den + c)
    });
    Ok(mass / 6.0 * numerator / denominator)
}

/// Splits a simple polygon into `n - 2` triangles by ear clipping.
///
/// The loop may wind either way; triangles keep its winding. At each round
/// the first vertex in loop order that forms an empty convex corner is
/// clipped.
pub fn triangulate(vertices: &[Vec2]) -> Result<Vec<Triangle>, ShapeError> {
    if vertices.len() < 3 {
        return Err(ShapeError::TooFewVertices(vertices.len()));
    }
    let orientation = checked_area(vertices)?.signum();
    let mut remaining: Vec<usize> = (0..vertices.len()).collect();
    let mut triangles = Vec::with_capacity(vertices.len() - 2);

    while remaining.len() > 3 {
        let count = remaining.len();
        let ear = (0..count).find(|&i| {
            let prev = remaining[(i + count - 1) % count];
            let cur = remaining[i];
            let next = remaining[(i + 1) % count];
            let (a, b, c) = (vertices[prev], vertices[cur], vertices[next]);
            if (b - a).cross(c - b) * orientation <= 0.0 {
                return false;
            }
            let candidate = Triangle::new(a, b, c);
            !remaining
                .iter()
                .filter(|&&j| j != prev && j != cur && j != next)
                .any(|&j| candidate.contains(vertices[j]))
        });
        let Some(i) = ear else {
            return Err(ShapeError::Triangulation { remaining: count });
        };
        let prev = remaining[(i + count - 1) % count];
        let next = remaining[(i + 1) % count];
        triangles.push(Triangle::new(vertices[prev], vertices[remaining[i]], vertices[next]));
        remaining.remove(i);
    }
    triangles.push(Triangle::new(
        vertices[remaining[0]],
        vertices[remaining[1]],
        vertices[remaining[2]],
    ));
    Ok(triangles)
}

/// Classifies a loop by the turn direction at each corner.
pub fn classify(vertices: &[Vec2]) -> Convexity {
    let orientation = signed_area(vertices).signum();
    let count = vertices.len();
    let reflex = (0..count).any(|i| {
        let a = vertices[(i + count - 1) % count];
        let b = vertices[i];
        let c = vertices[(i + 1) % count];
        (b - a).cross(c - b) * orientation < 0.0
    });
    if reflex { Convexity::NonConvex } else { Convexity::Convex }
}

pub(crate) fn edges(vertices: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let count = vertices.len();
    (0..count).map(move |i| (vertices[i], vertices[(i + 1) % count]))
}

/// Signed area, or an error when the loop encloses (numerically) nothing.
fn checked_area(vertices: &[Vec2]) -> Result<f64, ShapeError> {
    let area = signed_area(vertices);
    let extent = Aabb::from_points(vertices.iter().copied())
        .map(|b| b.width() * b.height())
        .unwrap_or(0.0);
    if !area.is_finite() || area.abs() <= 1e-12 * extent || area == 0.0 {
        return Err(ShapeError::DegeneratePolygon);
    }
    Ok(area)
}
