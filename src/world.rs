//! The simulation world: owns every body and advances them together.

use std::collections::HashMap;

use log::{debug, error, warn};

use crate::body::Body;
use crate::circle::Circle;
use crate::collision::{
    collide_circle_walls, collide_circles, collide_polygon_circle, collide_polygon_walls,
    collide_polygons,
};
use crate::config::WorldConfig;
use crate::error::ConfigError;
use crate::polygon::Polygon;
use crate::shape::{Entity, Shape};
use crate::triangle::Triangle;
use crate::vector::Vec2;

/// Handle to a body registered in a [`World`].
///
/// Ids are never reused, so a handle to a removed body stays dead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Circle(usize),
    Polygon(usize),
}

/// What a renderer needs to draw one body.
#[derive(Clone, Debug, PartialEq)]
pub enum Renderable {
    Circle {
        center: Vec2,
        radius: f64,
        orientation: f64,
    },
    /// World-space triangles covering the polygon.
    Polygon { triangles: Vec<Triangle> },
}

pub struct World {
    config: WorldConfig,
    circles: HashMap<usize, Circle>,
    polygons: HashMap<usize, Polygon>,
    circle_id: usize,
    polygon_id: usize,
}

impl World {
    pub fn new(config: WorldConfig) -> Result<World, ConfigError> {
        config.validate()?;
        Ok(World {
            config,
            circles: HashMap::new(),
            polygons: HashMap::new(),
            circle_id: 0,
            polygon_id: 0,
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Registers a shape and returns its handle.
    ///
    /// Only shapes can be registered; a bare [`Body`] has no geometry to
    /// collide with:
    ///
    /// ```compile_fail
    /// # use rphys2d::{Body, World, WorldConfig};
    /// let mut world = World::new(WorldConfig::default()).unwrap();
    /// world.add_body(Body::new(1.0));
    /// ```
    ///
    /// A shape whose position, velocity or orientation is not finite is
    /// logged and dropped, and `None` is returned.
    pub fn add_body(&mut self, entity: impl Into<Entity>) -> Option<BodyId> {
        let mut entity = entity.into();
        if !entity.body().is_finite() {
            error!("refusing body with non-finite state: {:?}", entity.body());
            return None;
        }
        let weight = self.config.gravity * entity.body().mass();
        entity.body_mut().add_force(weight);

        let id = match entity {
            Entity::Circle(circle) => {
                let idx = self.circle_id;
                self.circle_id += 1;
                self.circles.insert(idx, circle);
                BodyId::Circle(idx)
            }
            Entity::Polygon(polygon) => {
                let idx = self.polygon_id;
                self.polygon_id += 1;
                self.polygons.insert(idx, polygon);
                BodyId::Polygon(idx)
            }
        };
        debug!("added {id:?}");
        Some(id)
    }

    pub fn remove(&mut self, id: BodyId) -> Option<Entity> {
        let removed = match id {
            BodyId::Circle(idx) => self.circles.remove(&idx).map(Entity::Circle),
            BodyId::Polygon(idx) => self.polygons.remove(&idx).map(Entity::Polygon),
        };
        if removed.is_some() {
            debug!("removed {id:?}");
        }
        removed
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        match id {
            BodyId::Circle(idx) => self.circles.get(&idx).map(Shape::body),
            BodyId::Polygon(idx) => self.polygons.get(&idx).map(Shape::body),
        }
    }

    /// Mutable access to a body's state.
    ///
    /// Position or orientation changed this way reaches the shape's bounding
    /// box and collision geometry at the next step.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        match id {
            BodyId::Circle(idx) => self.circles.get_mut(&idx).map(Shape::body_mut),
            BodyId::Polygon(idx) => self.polygons.get_mut(&idx).map(Shape::body_mut),
        }
    }

    pub fn circle(&self, id: BodyId) -> Option<&Circle> {
        match id {
            BodyId::Circle(idx) => self.circles.get(&idx),
            BodyId::Polygon(_) => None,
        }
    }

    pub fn polygon(&self, id: BodyId) -> Option<&Polygon> {
        match id {
            BodyId::Polygon(idx) => self.polygons.get(&idx),
            BodyId::Circle(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.circles.len() + self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live handles, circles first, each kind in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.circle_ids()
            .map(BodyId::Circle)
            .chain(self.polygon_ids().map(BodyId::Polygon))
    }

    /// Adds a force for the next step only. Returns false for a dead handle.
    pub fn apply_force(&mut self, id: BodyId, force: Vec2) -> bool {
        match self.body_mut(id) {
            Some(body) => {
                body.add_force(force);
                true
            }
            None => false,
        }
    }

    /// Advances the world by [`WorldConfig::time_step`].
    pub fn tick(&mut self) {
        self.step(self.config.time_step);
    }

    /// Integrates every body over `dt`, then resolves collisions.
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            warn!("ignoring step of {dt}");
            return;
        }
        for circle in self.circles.values_mut() {
            circle.integrate(dt);
        }
        for polygon in self.polygons.values_mut() {
            polygon.integrate(dt);
        }
        self.apply_gravity();
        self.handle_collisions();
    }

    pub fn for_each_renderable(&self, mut callback: impl FnMut(Renderable)) {
        for idx in self.polygon_ids() {
            let Some(polygon) = self.polygons.get(&idx) else {
                continue;
            };
            callback(Renderable::Polygon {
                triangles: polygon.world_triangles().collect(),
            });
        }
        for idx in self.circle_ids() {
            let Some(circle) = self.circles.get(&idx) else {
                continue;
            };
            callback(Renderable::Circle {
                center: circle.center(),
                radius: circle.radius(),
                orientation: circle.body().theta,
            });
        }
    }

    fn circle_ids(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.circle_id).filter(|idx| self.circles.contains_key(idx))
    }

    fn polygon_ids(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.polygon_id).filter(|idx| self.polygons.contains_key(idx))
    }

    fn apply_gravity(&mut self) {
        let gravity = self.config.gravity;
        if gravity.is_zero() {
            return;
        }
        for circle in self.circles.values_mut() {
            let body = circle.body_mut();
            body.add_force(gravity * body.mass());
        }
        for polygon in self.polygons.values_mut() {
            let body = polygon.body_mut();
            body.add_force(gravity * body.mass());
        }
    }

    fn handle_collisions(&mut self) {
        let polygon_ids: Vec<usize> = self.polygon_ids().collect();
        let circle_ids: Vec<usize> = self.circle_ids().collect();

        for (n, idx) in polygon_ids.iter().enumerate() {
            for o_idx in &polygon_ids[n + 1..] {
                let [Some(polygon), Some(other)] = self.polygons.get_disjoint_mut([idx, o_idx]) else {
                    continue;
                };
                collide_polygons(polygon, other, &self.config);
            }
        }

        for idx in &polygon_ids {
            for o_idx in &circle_ids {
                let (Some(polygon), Some(circle)) = (self.polygons.get_mut(idx), self.circles.get_mut(o_idx)) else {
                    continue;
                };
                collide_polygon_circle(polygon, circle, &self.config);
            }
        }

        for (n, idx) in circle_ids.iter().enumerate() {
            for o_idx in &circle_ids[n + 1..] {
                let [Some(circle), Some(other)] = self.circles.get_disjoint_mut([idx, o_idx]) else {
                    continue;
                };
                collide_circles(circle, other, &self.config);
            }
        }

        for idx in &circle_ids {
            if let Some(circle) = self.circles.get_mut(idx) {
                collide_circle_walls(circle, &self.config);
            }
        }
        for idx in &polygon_ids {
            if let Some(polygon) = self.polygons.get_mut(idx) {
                collide_polygon_walls(polygon, &self.config);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aabb::Aabb;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn ball(x: f64, y: f64) -> Circle {
        Circle::new(Body::new(1.0).with_position(Vec2::new(x, y)), 5.0).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        assert_eq!(
            World::new(WorldConfig::new(-1.0, 5.0)).err(),
            Some(ConfigError::ArenaSize { width: -1.0, height: 5.0 })
        );
    }

    #[test]
    fn registration_and_removal() {
        let mut world = World::new(WorldConfig::default()).unwrap();
        assert!(world.is_empty());
        let first = world.add_body(ball(100.0, 100.0)).unwrap();
        let block = world
            .add_body(Polygon::rectangle(Body::fixed().with_position(Vec2::new(300.0, 50.0)), 40.0, 10.0).unwrap())
            .unwrap();
        let second = world.add_body(ball(200.0, 100.0)).unwrap();
        assert_eq!(world.len(), 3);
        assert_eq!(world.ids().collect::<Vec<_>>(), vec![first, second, block]);
        assert!(world.circle(first).is_some());
        assert!(world.polygon(first).is_none());
        assert_eq!(world.body(block).unwrap().position, Vec2::new(300.0, 50.0));

        assert!(matches!(world.remove(first), Some(Entity::Circle(_))));
        assert!(world.remove(first).is_none());
        assert!(world.body(first).is_none());
        assert!(!world.apply_force(first, Vec2::X));
        assert_eq!(world.ids().collect::<Vec<_>>(), vec![second, block]);

        let third = world.add_body(ball(300.0, 300.0)).unwrap();
        assert_ne!(third, first);
    }

    #[test]
    fn rejects_non_finite_state() {
        let mut world = World::new(WorldConfig::default()).unwrap();
        let bad = Circle::new(Body::new(1.0).with_velocity(Vec2::new(f64::NAN, 0.0)), 1.0).unwrap();
        assert_eq!(world.add_body(bad), None);
        assert!(world.is_empty());
    }

    #[test]
    fn gravity_is_applied_every_step() {
        let config = WorldConfig::default().with_gravity(Vec2::new(0.0, -10.0));
        let mut world = World::new(config).unwrap();
        let id = world.add_body(ball(400.0, 300.0)).unwrap();
        world.step(0.1);
        let body = world.body(id).unwrap();
        assert!(approx_eq(body.velocity.y(), -1.0));
        assert!(approx_eq(body.position.y(), 299.95));
        world.step(0.1);
        assert!(approx_eq(world.body(id).unwrap().velocity.y(), -2.0));
    }

    #[test]
    fn static_bodies_ignore_gravity_and_forces() {
        let config = WorldConfig::default().with_gravity(Vec2::new(0.0, -10.0));
        let mut world = World::new(config).unwrap();
        let id = world
            .add_body(Polygon::rectangle(Body::fixed().with_position(Vec2::new(400.0, 100.0)), 50.0, 10.0).unwrap())
            .unwrap();
        assert!(world.apply_force(id, Vec2::new(5.0, 5.0)));
        for _ in 0..10 {
            world.tick();
        }
        assert_eq!(world.body(id).unwrap().position, Vec2::new(400.0, 100.0));
    }

    #[test]
    fn applied_force_lasts_one_step() {
        let mut world = World::new(WorldConfig::default()).unwrap();
        let id = world.add_body(ball(400.0, 300.0)).unwrap();
        world.apply_force(id, Vec2::new(2.0, 0.0));
        world.step(0.5);
        assert!(approx_eq(world.body(id).unwrap().velocity.x(), 1.0));
        world.step(0.5);
        assert!(approx_eq(world.body(id).unwrap().velocity.x(), 1.0));
    }

    #[test]
    fn bad_step_is_ignored() {
        let mut world = World::new(WorldConfig::default()).unwrap();
        let body = Body::new(1.0)
            .with_position(Vec2::new(100.0, 100.0))
            .with_velocity(Vec2::new(1.0, 0.0));
        let id = world.add_body(Circle::new(body, 1.0).unwrap()).unwrap();
        world.step(-1.0);
        world.step(f64::NAN);
        assert_eq!(world.body(id).unwrap().position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn renderables() {
        let mut world = World::new(WorldConfig::default()).unwrap();
        world.add_body(ball(100.0, 100.0));
        world.add_body(Polygon::rectangle(Body::fixed().with_position(Vec2::new(300.0, 50.0)), 40.0, 10.0).unwrap());
        let mut circles = 0;
        let mut triangles = 0;
        world.for_each_renderable(|renderable| match renderable {
            Renderable::Circle { center, radius, .. } => {
                assert_eq!(center, Vec2::new(100.0, 100.0));
                assert_eq!(radius, 5.0);
                circles += 1;
            }
            Renderable::Polygon { triangles: t } => triangles += t.len(),
        });
        assert_eq!(circles, 1);
        assert_eq!(triangles, 2);
    }

    #[test]
    fn orientation_set_by_hand_reaches_collision_geometry() {
        let mut world = World::new(WorldConfig::default()).unwrap();
        let bar = Body::new(1.0).with_position(Vec2::new(400.0, 300.0));
        let id = world.add_body(Polygon::rectangle(bar, 100.0, 10.0).unwrap()).unwrap();
        world.body_mut(id).unwrap().theta = std::f64::consts::FRAC_PI_2;
        world.step(1.0 / 240.0);

        let bounds = world.polygon(id).unwrap().bounds();
        assert!(approx_eq(bounds.width(), 10.0), "{bounds:?}");
        assert!(approx_eq(bounds.height(), 100.0), "{bounds:?}");

        let mut drawn = Vec::new();
        world.for_each_renderable(|renderable| {
            if let Renderable::Polygon { triangles } = renderable {
                drawn.extend(triangles.iter().flat_map(|t| *t.vertices()));
            }
        });
        let drawn = Aabb::from_points(drawn).unwrap();
        assert!(approx_eq(drawn.width(), bounds.width()));
        assert!(approx_eq(drawn.height(), bounds.height()));
    }

    #[test]
    fn balls_stay_in_the_arena() {
        let config = WorldConfig::new(200.0, 200.0).with_gravity(Vec2::new(0.0, -50.0));
        let mut world = World::new(config).unwrap();
        let ids: Vec<BodyId> = (0..6)
            .filter_map(|i| {
                let body = Body::new(1.0)
                    .with_position(Vec2::new(20.0 + 30.0 * i as f64, 100.0))
                    .with_velocity(Vec2::new(40.0 - 15.0 * i as f64, 10.0 * i as f64))
                    .with_restitution(0.5);
                world.add_body(Circle::new(body, 8.0).unwrap())
            })
            .collect();
        for _ in 0..2000 {
            world.tick();
        }
        for id in ids {
            let position = world.body(id).unwrap().position;
            assert!((0.0..=200.0).contains(&position.x()), "{position:?}");
            assert!((0.0..=200.0).contains(&position.y()), "{position:?}");
        }
    }
}
