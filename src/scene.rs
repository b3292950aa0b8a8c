//! The demo scene: fixed ramps, a cup, and a stream of falling bodies.

use log::debug;
use rphys2d::{Body, BodyId, Circle, Polygon, ShapeError, Vec2, World};

/// Ramps as (center x, center y, angle in radians, length).
const RAMPS: [(f64, f64, f64, f64); 3] = [
    (220.0, 420.0, -0.35, 300.0),
    (580.0, 300.0, 0.35, 300.0),
    (250.0, 200.0, -0.2, 260.0),
];
/// Bodies this far below the arena floor are dropped.
const FALL_LIMIT: f64 = -200.0;

/// Sets up the static geometry.
///
/// # Arguments
///
/// * `world` - The world to add the ramps and the cup to
pub fn set_up(world: &mut World) -> Result<(), ShapeError> {
    for (x, y, angle, length) in RAMPS {
        let body = Body::fixed()
            .with_position(Vec2::new(x, y))
            .with_orientation(angle)
            .with_friction(0.4, 0.3);
        world.add_body(Polygon::rectangle(body, length, 14.0)?);
    }

    // A U-shaped cup, which is non-convex and so collides per triangle.
    let cup = vec![
        Vec2::new(-70.0, -40.0),
        Vec2::new(70.0, -40.0),
        Vec2::new(70.0, 40.0),
        Vec2::new(55.0, 40.0),
        Vec2::new(55.0, -25.0),
        Vec2::new(-55.0, -25.0),
        Vec2::new(-55.0, 40.0),
        Vec2::new(-70.0, 40.0),
    ];
    let body = Body::fixed()
        .with_position(Vec2::new(560.0, 80.0))
        .with_friction(0.4, 0.3);
    world.add_body(Polygon::new(body, cup)?);
    Ok(())
}

/// Drops a ball, or every so often a spinning box, at a random spot near the top.
///
/// # Arguments
///
/// * `world` - The world to add the body to
/// * `width` - Arena width, used to pick the horizontal position
/// * `height` - Arena height, used to pick the drop height
pub fn spawn(world: &mut World, width: f64, height: f64) -> Result<Option<BodyId>, ShapeError> {
    let x: f64 = rand::random_range(30.0..(width - 30.0));
    let v: f64 = rand::random_range(-80.0..80.0);
    let size: f64 = rand::random_range(6.0..14.0);
    let body = Body::new(size * size * 0.01)
        .with_position(Vec2::new(x, height - 40.0))
        .with_velocity(Vec2::new(v, 0.0))
        .with_friction(0.3, 0.2);

    if rand::random_range(0..5) == 0 {
        let body = body
            .with_restitution(0.2)
            .with_angular_velocity(rand::random_range(-3.0..3.0));
        Ok(world.add_body(Polygon::rectangle(body, 2.0 * size, 2.0 * size)?))
    } else {
        Ok(world.add_body(Circle::new(body.with_restitution(0.6), size)?))
    }
}

/// Removes bodies that fell out of the arena. Circles are held in by the
/// walls, so in practice this only catches polygons.
pub fn cleanup(world: &mut World) {
    let fallen: Vec<BodyId> = world
        .ids()
        .filter(|id| {
            world
                .body(*id)
                .is_some_and(|body| body.position.y() < FALL_LIMIT)
        })
        .collect();
    for id in fallen {
        world.remove(id);
        debug!("{id:?} left the arena");
    }
}
