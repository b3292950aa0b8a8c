//! 2D rigid body simulation of circles and polygons.
//!
//! Bodies are built from a [`Body`] (mass, kinematic state and material)
//! wrapped in a [`Circle`] or a [`Polygon`], then registered with a
//! [`World`]. Each step integrates every body and resolves collisions:
//! bounding boxes cull pairs, separating-axis tests find contacts, and
//! impulses with restitution and friction answer them.
//!
//! ```
//! use rphys2d::{Body, Circle, Polygon, Vec2, World, WorldConfig};
//!
//! let config = WorldConfig::new(800.0, 600.0).with_gravity(Vec2::new(0.0, -98.0));
//! let mut world = World::new(config)?;
//! let ramp = Body::fixed().with_position(Vec2::new(400.0, 100.0)).with_orientation(0.2);
//! world.add_body(Polygon::rectangle(ramp, 300.0, 20.0)?);
//! let ball = Body::new(1.0).with_position(Vec2::new(400.0, 300.0)).with_restitution(0.5);
//! let id = world.add_body(Circle::new(ball, 10.0)?).unwrap();
//! for _ in 0..240 {
//!     world.tick();
//! }
//! assert!(world.body(id).unwrap().position.y() < 300.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aabb;
pub mod body;
pub mod circle;
pub mod collision;
pub mod config;
pub mod error;
pub mod matrix;
pub mod polygon;
pub mod shape;
pub mod triangle;
pub mod vector;
pub mod world;

pub use aabb::Aabb;
pub use body::Body;
pub use circle::Circle;
pub use collision::{Contact, Response};
pub use config::WorldConfig;
pub use error::{ConfigError, MathError, ShapeError};
pub use matrix::Matrix;
pub use polygon::{Convexity, Polygon};
pub use shape::{Entity, Projection, Shape};
pub use triangle::Triangle;
pub use vector::{Vec2, Vector};
pub use world::{BodyId, Renderable, World};
