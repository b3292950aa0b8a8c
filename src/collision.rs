//! Narrow-phase contact generation and impulse response.
//!
//! Every [`Contact`] normal points from the first body of a pair toward the
//! second. The `collide_*` functions run the whole pipeline for one pair:
//! bounding-box cull, exact test, de-penetration, then impulses.

use log::{trace, warn};

use crate::body::Body;
use crate::circle::Circle;
use crate::config::WorldConfig;
use crate::polygon::{Polygon, edges};
use crate::shape::{Projection, Shape};
use crate::vector::{Vec2, edge_normal};

/// Support points closer than this (relative to their extent) are averaged.
const SUPPORT_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Unit normal from the first body toward the second.
    pub normal: Vec2,
    /// Overlap along `normal`; zero for bodies that are just touching.
    pub depth: f64,
    /// World-space point the impulses act at.
    pub point: Vec2,
}

impl Contact {
    /// The same contact seen from the second body.
    pub fn flipped(self) -> Self {
        Contact {
            normal: -self.normal,
            ..self
        }
    }
}

/// Outcome of the impulse step for one contact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Response {
    /// The bodies are already moving apart.
    Separating,
    /// Neither approaching nor separating; forces into the contact were cancelled.
    Resting,
    /// Both bodies are immovable.
    Immovable,
    Impulse { normal: f64, tangent: f64 },
}

pub fn circle_circle_contact(a: &Circle, b: &Circle) -> Option<Contact> {
    let offset = b.center() - a.center();
    let reach = a.radius() + b.radius();
    let distance_squared = offset.magnitude_squared();
    if distance_squared > reach * reach {
        return None;
    }
    let distance = distance_squared.sqrt();
    let normal = if distance > 0.0 {
        offset * (1.0 / distance)
    } else {
        Vec2::Y
    };
    let depth = reach - distance;
    Some(Contact {
        normal,
        depth,
        point: a.center() + normal * (a.radius() - 0.5 * depth),
    })
}

/// Deepest contact between the circle and any convex piece of the polygon.
pub fn circle_polygon_contact(a: &Circle, b: &Polygon) -> Option<Contact> {
    let position = b.body().position;
    deepest(
        b.convex_pieces()
            .map(|piece| circle_convex_contact(a, &in_world(piece, position))),
    )
}

/// Deepest contact over every pair of convex pieces.
pub fn polygon_polygon_contact(a: &Polygon, b: &Polygon) -> Option<Contact> {
    let pieces_b: Vec<Vec<Vec2>> = b
        .convex_pieces()
        .map(|piece| in_world(piece, b.body().position))
        .collect();
    let position = a.body().position;
    deepest(a.convex_pieces().flat_map(|piece| {
        let piece = in_world(piece, position);
        pieces_b.iter().map(move |other| convex_contact(&piece, other))
    }))
}

pub fn collide_circles(a: &mut Circle, b: &mut Circle, config: &WorldConfig) -> Option<Contact> {
    resolve(a, b, config, circle_circle_contact)
}

pub fn collide_circle_polygon(
    a: &mut Circle,
    b: &mut Polygon,
    config: &WorldConfig,
) -> Option<Contact> {
    resolve(a, b, config, circle_polygon_contact)
}

pub fn collide_polygon_circle(
    a: &mut Polygon,
    b: &mut Circle,
    config: &WorldConfig,
) -> Option<Contact> {
    collide_circle_polygon(b, a, config).map(Contact::flipped)
}

pub fn collide_polygons(a: &mut Polygon, b: &mut Polygon, config: &WorldConfig) -> Option<Contact> {
    resolve(a, b, config, polygon_polygon_contact)
}

/// Keeps a circle inside the arena.
///
/// At most one wall per axis is handled per call. Returns the contacts, with
/// normals pointing from the circle into the wall.
pub fn collide_circle_walls(a: &mut Circle, config: &WorldConfig) -> Vec<Contact> {
    let mut contacts = Vec::new();
    for axis in [Vec2::X, Vec2::Y] {
        let bounds = a.bounds();
        let (low, high, limit) = if axis == Vec2::X {
            (bounds.min.x(), bounds.max.x(), config.width)
        } else {
            (bounds.min.y(), bounds.max.y(), config.height)
        };
        let (normal, depth) = if low <= 0.0 {
            (-axis, -low)
        } else if high >= limit {
            (axis, high - limit)
        } else {
            continue;
        };
        if depth > 0.0 {
            a.translate(-normal * depth);
        }
        let contact = Contact {
            normal,
            depth,
            point: a.center() + normal * a.radius(),
        };
        let mut wall = Body::fixed().with_restitution(1.0);
        let response = respond(a.body_mut(), &mut wall, &contact, config);
        trace!("wall contact {contact:?}: {response:?}");
        contacts.push(contact);
    }
    contacts
}

/// Polygons are not kept inside the arena.
pub fn collide_polygon_walls(_a: &mut Polygon, _config: &WorldConfig) -> Vec<Contact> {
    Vec::new()
}

/// Impulse step for a contact whose normal points from `a` toward `b`.
pub fn respond(a: &mut Body, b: &mut Body, contact: &Contact, config: &WorldConfig) -> Response {
    let n = contact.normal;
    let ra = contact.point - a.position;
    let rb = contact.point - b.position;
    let relative = b.point_velocity(rb) - a.point_velocity(ra);
    let approach = relative.dot(n);

    if approach.abs() <= config.resting_epsilon {
        a.cancel_force_along(n);
        b.cancel_force_along(-n);
        return Response::Resting;
    }
    if approach > 0.0 {
        return Response::Separating;
    }

    let Some(normal) = impulse_along(a, b, ra, rb, n, -(1.0 + a.restitution.min(b.restitution)) * approach) else {
        return Response::Immovable;
    };
    a.apply_impulse(-(n * normal), ra);
    b.apply_impulse(n * normal, rb);

    let relative = b.point_velocity(rb) - a.point_velocity(ra);
    let tangent = (relative - n * relative.dot(n)).norm();
    let mut friction = 0.0;
    if !tangent.is_zero() {
        let bound = a.kinetic_friction.max(b.kinetic_friction) * normal;
        if let Some(stopping) = impulse_along(a, b, ra, rb, tangent, -relative.dot(tangent)) {
            friction = stopping.clamp(-bound, bound);
            a.apply_impulse(-(tangent * friction), ra);
            b.apply_impulse(tangent * friction, rb);
        }
    }
    Response::Impulse {
        normal,
        tangent: friction,
    }
}

/// Impulse magnitude along `direction` that changes the relative point
/// velocity by `change`, or `None` when nothing can move.
fn impulse_along(a: &Body, b: &Body, ra: Vec2, rb: Vec2, direction: Vec2, change: f64) -> Option<f64> {
    let ka = ra.cross(direction);
    let kb = rb.cross(direction);
    let effective = a.inv_mass() + b.inv_mass() + ka * ka * a.inv_inertia() + kb * kb * b.inv_inertia();
    (effective > 0.0).then(|| change / effective)
}

fn resolve<A: Shape, B: Shape>(
    a: &mut A,
    b: &mut B,
    config: &WorldConfig,
    detect: fn(&A, &B) -> Option<Contact>,
) -> Option<Contact> {
    if !a.bounds().overlaps(&b.bounds()) {
        return None;
    }
    let initial = detect(a, b)?;
    if !depenetrate(a, b, initial, config, detect) {
        warn!(
            "bodies at {:?} and {:?} still overlap after {} passes",
            a.body().position,
            b.body().position,
            config.max_depenetration_iterations
        );
    }
    let contact = detect(a, b).unwrap_or(initial);
    let response = respond(a.body_mut(), b.body_mut(), &contact, config);
    trace!("contact {contact:?}: {response:?}");
    Some(contact)
}

/// Moves the pair apart until the overlap is within the slop. Returns false
/// if the pass budget ran out first.
///
/// Bodies are rewound along their velocities for at most one time step;
/// anything deeper is split along the normal instead. The rewound time is
/// not replayed afterwards.
fn depenetrate<A: Shape, B: Shape>(
    a: &mut A,
    b: &mut B,
    mut contact: Contact,
    config: &WorldConfig,
    detect: fn(&A, &B) -> Option<Contact>,
) -> bool {
    for _ in 0..config.max_depenetration_iterations {
        if contact.depth <= config.penetration_slop {
            return true;
        }
        let relative = a.body().velocity - b.body().velocity;
        // A rewind longer than one step is not this step's motion.
        let rewind = (relative.dot(contact.normal) > config.resting_epsilon)
            .then(|| {
                let travel = Vec2::inverse_projection(relative, contact.normal, contact.depth);
                travel.magnitude() / relative.magnitude()
            })
            .filter(|t| *t <= config.time_step);
        if let Some(t) = rewind {
            let (va, vb) = (a.body().velocity, b.body().velocity);
            a.translate(-(va * t));
            b.translate(-(vb * t));
        } else if !split(a, b, &contact) {
            return false;
        }
        contact = match detect(a, b) {
            None => return true,
            Some(next) if next.depth < contact.depth => next,
            Some(next) => {
                if !split(a, b, &next) {
                    return false;
                }
                match detect(a, b) {
                    None => return true,
                    Some(after) => after,
                }
            }
        };
    }
    contact.depth <= config.penetration_slop
}

/// Pushes the pair apart along the normal, each by its share of inverse mass.
fn split<A: Shape, B: Shape>(a: &mut A, b: &mut B, contact: &Contact) -> bool {
    let (wa, wb) = (a.body().inv_mass(), b.body().inv_mass());
    let total = wa + wb;
    if total <= 0.0 {
        return false;
    }
    let push = contact.normal * (contact.depth / total);
    a.translate(-(push * wa));
    b.translate(push * wb);
    true
}

fn circle_convex_contact(circle: &Circle, piece: &[Vec2]) -> Option<Contact> {
    let center = circle.center();
    let closest = piece.iter().copied().min_by(|p, q| {
        (*p - center)
            .magnitude_squared()
            .total_cmp(&(*q - center).magnitude_squared())
    })?;
    let axes = edges(piece)
        .map(|(p, q)| edge_normal(p, q))
        .chain(std::iter::once((closest - center).norm()));

    let mut best: Option<(f64, Vec2)> = None;
    for axis in axes.filter(|axis| !axis.is_zero()) {
        let found = penetration(
            circle.project(axis),
            Projection::of_points(piece.iter().copied(), axis),
            axis,
        )?;
        if best.is_none_or(|(depth, _)| found.0 < depth) {
            best = Some(found);
        }
    }
    let (depth, normal) = best?;
    Some(Contact {
        normal,
        depth,
        point: center + normal * circle.radius(),
    })
}

/// Separating-axis test between two convex loops in world space.
fn convex_contact(a: &[Vec2], b: &[Vec2]) -> Option<Contact> {
    let mut best: Option<(f64, Vec2, bool)> = None;
    for (reference, on_a) in [(a, true), (b, false)] {
        for (p, q) in edges(reference) {
            let axis = edge_normal(p, q);
            if axis.is_zero() {
                continue;
            }
            let (depth, normal) = penetration(
                Projection::of_points(a.iter().copied(), axis),
                Projection::of_points(b.iter().copied(), axis),
                axis,
            )?;
            if best.is_none_or(|(best_depth, _, _)| depth < best_depth) {
                best = Some((depth, normal, on_a));
            }
        }
    }
    let (depth, normal, on_a) = best?;
    Some(Contact {
        normal,
        depth,
        point: contact_point(a, b, normal, on_a),
    })
}

/// Overlap along `axis`, with the axis turned to point from `a` toward `b`.
fn penetration(a: Projection, b: Projection, axis: Vec2) -> Option<(f64, Vec2)> {
    let depth = a.overlap(&b);
    if depth < 0.0 {
        return None;
    }
    let normal = if a.max - b.min <= b.max - a.min { axis } else { -axis };
    Some((depth, normal))
}

/// Average of the vertices lying inside the other loop; falls back to the
/// deepest vertices of the incident loop when none do.
fn contact_point(a: &[Vec2], b: &[Vec2], normal: Vec2, reference_on_a: bool) -> Vec2 {
    let inside: Vec<Vec2> = a
        .iter()
        .copied()
        .filter(|p| convex_contains(b, *p))
        .chain(b.iter().copied().filter(|p| convex_contains(a, *p)))
        .collect();
    if !inside.is_empty() {
        return average(&inside);
    }
    if reference_on_a {
        support(b, -normal)
    } else {
        support(a, normal)
    }
}

fn convex_contains(piece: &[Vec2], point: Vec2) -> bool {
    edges(piece).all(|(p, q)| {
        let axis = edge_normal(p, q);
        axis.is_zero() || Projection::of_points(piece.iter().copied(), axis).contains(point.dot(axis))
    })
}

/// Average of the points furthest along `direction`.
fn support(points: &[Vec2], direction: Vec2) -> Vec2 {
    let extent = points
        .iter()
        .map(|p| p.dot(direction))
        .fold(f64::NEG_INFINITY, f64::max);
    let tolerance = SUPPORT_TOLERANCE * (1.0 + extent.abs());
    let extreme: Vec<Vec2> = points
        .iter()
        .copied()
        .filter(|p| p.dot(direction) >= extent - tolerance)
        .collect();
    average(&extreme)
}

fn average(points: &[Vec2]) -> Vec2 {
    points.iter().fold(Vec2::ZERO, |sum, p| sum + *p) * (1.0 / points.len() as f64)
}

fn in_world(piece: &[Vec2], position: Vec2) -> Vec<Vec2> {
    piece.iter().map(|v| *v + position).collect()
}

fn deepest(contacts: impl Iterator<Item = Option<Contact>>) -> Option<Contact> {
    contacts.flatten().max_by(|x, y| x.depth.total_cmp(&y.depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn approx_eq_vec(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x(), b.x()) && approx_eq(a.y(), b.y())
    }

    fn ball(position: Vec2, velocity: Vec2, radius: f64) -> Circle {
        Circle::new(Body::new(1.0).with_position(position).with_velocity(velocity), radius).unwrap()
    }

    fn config() -> WorldConfig {
        WorldConfig::new(100.0, 100.0)
    }

    #[test]
    fn circle_contact_geometry() {
        let a = ball(Vec2::new(0.0, 0.0), Vec2::ZERO, 2.0);
        let b = ball(Vec2::new(3.0, 0.0), Vec2::ZERO, 2.0);
        let contact = circle_circle_contact(&a, &b).unwrap();
        assert!(approx_eq_vec(contact.normal, Vec2::X));
        assert_eq!(contact.depth, 1.0);
        assert!(approx_eq_vec(contact.point, Vec2::new(1.5, 0.0)));

        let far = ball(Vec2::new(4.5, 0.0), Vec2::ZERO, 2.0);
        assert_eq!(circle_circle_contact(&a, &far), None);

        let touching = ball(Vec2::new(0.0, 4.0), Vec2::ZERO, 2.0);
        assert_eq!(circle_circle_contact(&a, &touching).unwrap().depth, 0.0);
    }

    #[test]
    fn coincident_circles_use_up() {
        let a = ball(Vec2::new(1.0, 1.0), Vec2::ZERO, 1.0);
        let b = ball(Vec2::new(1.0, 1.0), Vec2::ZERO, 1.0);
        assert_eq!(circle_circle_contact(&a, &b).unwrap().normal, Vec2::Y);
    }

    #[test]
    fn head_on_elastic_exchange() {
        let mut a = ball(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 5.0);
        let mut b = ball(Vec2::new(9.0, 0.0), Vec2::new(-10.0, 0.0), 5.0);
        let contact = collide_circles(&mut a, &mut b, &config()).unwrap();
        assert!(approx_eq_vec(contact.normal, Vec2::X));
        assert!(approx_eq(a.center().x(), -0.5));
        assert!(approx_eq(b.center().x(), 9.5));
        assert!(approx_eq_vec(a.body().velocity, Vec2::new(-10.0, 0.0)));
        assert!(approx_eq_vec(b.body().velocity, Vec2::new(10.0, 0.0)));
        assert!(approx_eq(a.body().omega, 0.0));
    }

    #[test]
    fn grazing_overlap_is_split_not_rewound() {
        // Barely closing along the normal but fast sideways: rewinding along
        // the velocity would throw `b` far down the y axis.
        let mut a = ball(Vec2::new(0.0, 0.0), Vec2::ZERO, 5.0);
        let mut b = ball(Vec2::new(8.0, 0.0), Vec2::new(-0.002, 100.0), 5.0);
        collide_circles(&mut a, &mut b, &config()).unwrap();
        assert!(approx_eq_vec(a.center(), Vec2::new(-1.0, 0.0)));
        assert!(approx_eq_vec(b.center(), Vec2::new(9.0, 0.0)));
    }

    #[test]
    fn resting_contact_cancels_pushing_force() {
        let mut a = ball(Vec2::new(0.0, 0.0), Vec2::ZERO, 5.0);
        let mut b = ball(Vec2::new(9.5, 0.0), Vec2::ZERO, 5.0);
        a.body_mut().add_force(Vec2::new(3.0, 1.0));
        b.body_mut().add_force(Vec2::new(2.0, 0.0));
        collide_circles(&mut a, &mut b, &config()).unwrap();
        assert!(approx_eq(a.center().x(), -0.25));
        assert!(approx_eq(b.center().x(), 9.75));
        assert_eq!(a.body().net_force(), Vec2::new(0.0, 1.0));
        assert_eq!(b.body().net_force(), Vec2::new(2.0, 0.0));
        assert_eq!(a.body().velocity, Vec2::ZERO);
    }

    #[test]
    fn broad_phase_miss_has_no_effect() {
        let mut a = ball(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 1.0);
        let mut b = ball(Vec2::new(5.0, 0.0), Vec2::new(-1.0, 0.0), 1.0);
        assert_eq!(collide_circles(&mut a, &mut b, &config()), None);
        assert_eq!(a.body().velocity, Vec2::new(1.0, 0.0));
        assert_eq!(b.center(), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn overlapping_boxes() {
        let a = Polygon::rectangle(Body::new(1.0), 2.0, 2.0).unwrap();
        let b = Polygon::rectangle(Body::new(1.0).with_position(Vec2::new(1.75, 0.5)), 2.0, 2.0).unwrap();
        let contact = polygon_polygon_contact(&a, &b).unwrap();
        assert!(approx_eq_vec(contact.normal, Vec2::X));
        assert!(approx_eq(contact.depth, 0.25));
        assert!(approx_eq_vec(contact.point, Vec2::new(0.875, 0.25)));
        assert!(approx_eq_vec(polygon_polygon_contact(&b, &a).unwrap().normal, -Vec2::X));

        let apart = Polygon::rectangle(Body::new(1.0).with_position(Vec2::new(2.5, 0.0)), 2.0, 2.0).unwrap();
        assert_eq!(polygon_polygon_contact(&a, &apart), None);
    }

    #[test]
    fn rotated_box_is_separated_by_its_own_axis() {
        // Corner-to-corner along the diagonal: the world axes overlap but
        // the diamond's edge normals separate the pair.
        let a = Polygon::rectangle(Body::new(1.0), 2.0, 2.0).unwrap();
        let diamond = Polygon::rectangle(
            Body::new(1.0)
                .with_position(Vec2::new(2.3, 2.3))
                .with_orientation(std::f64::consts::FRAC_PI_4),
            2.0,
            2.0,
        )
        .unwrap();
        assert!(a.bounds().overlaps(&diamond.bounds()));
        assert_eq!(polygon_polygon_contact(&a, &diamond), None);
    }

    #[test]
    fn circle_on_box() {
        let circle = ball(Vec2::new(0.0, 1.5), Vec2::ZERO, 1.0);
        let block = Polygon::rectangle(Body::new(1.0), 2.0, 2.0).unwrap();
        let contact = circle_polygon_contact(&circle, &block).unwrap();
        assert!(approx_eq_vec(contact.normal, -Vec2::Y));
        assert!(approx_eq(contact.depth, 0.5));
        assert!(approx_eq_vec(contact.point, Vec2::new(0.0, 0.5)));
    }

    #[test]
    fn circle_near_corner_is_separated_by_vertex_axis() {
        let block = Polygon::rectangle(Body::new(1.0), 2.0, 2.0).unwrap();
        let circle = ball(Vec2::new(1.6, 1.6), Vec2::ZERO, 0.8);
        assert!(circle.bounds().overlaps(&block.bounds()));
        assert_eq!(circle_polygon_contact(&circle, &block), None);
    }

    #[test]
    fn box_lands_on_static_slab() {
        let mut falling = Polygon::rectangle(
            Body::new(1.0)
                .with_position(Vec2::new(0.0, 1.9))
                .with_velocity(Vec2::new(0.0, -1.0))
                .with_restitution(0.0),
            2.0,
            2.0,
        )
        .unwrap();
        let mut slab = Polygon::rectangle(Body::fixed(), 10.0, 2.0).unwrap();
        let contact = collide_polygons(&mut falling, &mut slab, &config()).unwrap();
        assert!(approx_eq_vec(contact.normal, -Vec2::Y));
        assert!(approx_eq(falling.body().position.y(), 2.0));
        assert!(approx_eq_vec(falling.body().velocity, Vec2::ZERO));
        assert!(approx_eq(falling.body().omega, 0.0));
        assert_eq!(slab.body().position, Vec2::ZERO);
    }

    #[test]
    fn polygon_circle_order_flips_normal() {
        let mut block = Polygon::rectangle(Body::fixed(), 2.0, 2.0).unwrap();
        let mut circle = ball(Vec2::new(0.0, 1.5), Vec2::new(0.0, -2.0), 1.0);
        let contact = collide_polygon_circle(&mut block, &mut circle, &config()).unwrap();
        assert!(approx_eq_vec(contact.normal, Vec2::Y));
        assert!(approx_eq_vec(circle.body().velocity, Vec2::new(0.0, 2.0)));
    }

    #[test]
    fn wall_friction_spins_a_sliding_ball() {
        let mut circle = Circle::new(
            Body::new(1.0)
                .with_position(Vec2::new(50.0, 0.9))
                .with_velocity(Vec2::new(5.0, -2.0))
                .with_restitution(0.0)
                .with_friction(0.5, 0.5),
            1.0,
        )
        .unwrap();
        let contacts = collide_circle_walls(&mut circle, &config());
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].normal, -Vec2::Y);
        assert!(approx_eq(circle.center().y(), 1.0));
        assert!(approx_eq_vec(circle.body().velocity, Vec2::new(4.0, 0.0)));
        assert!(approx_eq(circle.body().omega, -2.0));
    }

    #[test]
    fn wall_rebound_uses_body_restitution() {
        let mut circle = Circle::new(
            Body::new(2.0)
                .with_position(Vec2::new(99.5, 50.0))
                .with_velocity(Vec2::new(4.0, 3.0))
                .with_restitution(0.5),
            1.0,
        )
        .unwrap();
        collide_circle_walls(&mut circle, &config());
        assert!(approx_eq(circle.center().x(), 99.0));
        assert!(approx_eq_vec(circle.body().velocity, Vec2::new(-2.0, 3.0)));
    }

    #[test]
    fn corner_hits_both_walls() {
        let mut circle = ball(Vec2::new(0.5, 0.5), Vec2::new(-1.0, -1.0), 1.0);
        let contacts = collide_circle_walls(&mut circle, &config());
        assert_eq!(contacts.len(), 2);
        assert!(approx_eq_vec(circle.center(), Vec2::new(1.0, 1.0)));
        assert!(approx_eq_vec(circle.body().velocity, Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn polygon_walls_do_nothing() {
        let mut block = Polygon::rectangle(Body::new(1.0).with_position(Vec2::new(-5.0, -5.0)), 2.0, 2.0).unwrap();
        assert!(collide_polygon_walls(&mut block, &config()).is_empty());
        assert_eq!(block.body().position, Vec2::new(-5.0, -5.0));
    }

    #[test]
    fn two_static_bodies_stay_put() {
        let mut a = Circle::new(Body::fixed(), 1.0).unwrap();
        let mut b = Circle::new(Body::fixed().with_position(Vec2::new(1.0, 0.0)), 1.0).unwrap();
        let contact = collide_circles(&mut a, &mut b, &config()).unwrap();
        assert_eq!(contact.depth, 1.0);
        assert_eq!(a.center(), Vec2::ZERO);
        assert_eq!(b.center(), Vec2::new(1.0, 0.0));
    }
}
