//! Rigid body state and the motion integrator.

use std::f64::consts::TAU;

use crate::error::ShapeError;
use crate::vector::{Vec2, cross_scalar};

/// Kinematic and material state shared by every shape.
///
/// A mass of zero stands for infinite mass: the body ignores forces and
/// impulses but keeps whatever velocity it is given.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    mass: f64,
    inv_mass: f64,
    inertia: f64,
    inv_inertia: f64,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Orientation in radians, kept in `[0, 2π)`.
    pub theta: f64,
    pub omega: f64,
    pub alpha: f64,
    pub static_friction: f64,
    pub kinetic_friction: f64,
    pub restitution: f64,
    net_force: Vec2,
    net_torque: f64,
}

impl Body {
    /// A body at rest at the origin, with no friction and restitution 1.
    ///
    /// Its moment of inertia is zero until a shape assigns one.
    pub fn new(mass: f64) -> Self {
        Body {
            mass,
            inv_mass: inverse(mass),
            inertia: 0.0,
            inv_inertia: 0.0,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            theta: 0.0,
            omega: 0.0,
            alpha: 0.0,
            static_friction: 0.0,
            kinetic_friction: 0.0,
            restitution: 1.0,
            net_force: Vec2::ZERO,
            net_torque: 0.0,
        }
    }

    /// An immovable body.
    pub fn fixed() -> Self {
        Body::new(0.0)
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_orientation(mut self, theta: f64) -> Self {
        self.theta = theta.rem_euclid(TAU);
        self
    }

    pub fn with_angular_velocity(mut self, omega: f64) -> Self {
        self.omega = omega;
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_friction(mut self, static_friction: f64, kinetic_friction: f64) -> Self {
        self.static_friction = static_friction;
        self.kinetic_friction = kinetic_friction;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    pub fn inv_inertia(&self) -> f64 {
        self.inv_inertia
    }

    pub fn net_force(&self) -> Vec2 {
        self.net_force
    }

    pub fn net_torque(&self) -> f64 {
        self.net_torque
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    pub(crate) fn set_inertia(&mut self, inertia: f64) {
        self.inertia = inertia;
        self.inv_inertia = inverse(inertia);
    }

    /// Checks the material parameters a shape constructor relies on.
    pub(crate) fn validate(&self) -> Result<(), ShapeError> {
        if !self.mass.is_finite() || self.mass < 0.0 {
            return Err(ShapeError::InvalidMass(self.mass));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ShapeError::InvalidRestitution(self.restitution));
        }
        for mu in [self.static_friction, self.kinetic_friction] {
            if !mu.is_finite() || mu < 0.0 {
                return Err(ShapeError::InvalidFriction(mu));
            }
        }
        Ok(())
    }

    /// Whether the kinematic state is free of NaN and infinities.
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.velocity.is_finite()
            && self.theta.is_finite()
            && self.omega.is_finite()
            && self.net_force.is_finite()
            && self.net_torque.is_finite()
    }

    /// Accumulates a force for the next integration step.
    pub fn add_force(&mut self, force: Vec2) {
        self.net_force += force;
    }

    pub fn add_torque(&mut self, torque: f64) {
        self.net_torque += torque;
    }

    /// Removes the part of the accumulated force that points along `direction`.
    ///
    /// Only the component with positive projection is removed, so a force
    /// pulling away from a contact survives.
    pub(crate) fn cancel_force_along(&mut self, direction: Vec2) {
        let n = direction.norm();
        let pushing = self.net_force.dot(n);
        if pushing > 0.0 {
            self.net_force -= n * pushing;
        }
    }

    /// Applies an impulse at `lever`, measured from the center of mass.
    pub fn apply_impulse(&mut self, impulse: Vec2, lever: Vec2) {
        self.velocity += impulse * self.inv_mass;
        self.omega += lever.cross(impulse) * self.inv_inertia;
    }

    /// Velocity of the material point at `lever` from the center of mass.
    pub fn point_velocity(&self, lever: Vec2) -> Vec2 {
        self.velocity + cross_scalar(self.omega, lever)
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared() + 0.5 * self.inertia * self.omega * self.omega
    }

    /// Advances the body by `dt` and returns the change in orientation.
    ///
    /// Position moves with the old velocity before the velocity is updated.
    /// The accumulated force and torque are consumed and cleared.
    pub fn integrate(&mut self, dt: f64) -> f64 {
        self.acceleration = self.net_force * self.inv_mass;
        self.position += self.acceleration * (0.5 * dt * dt) + self.velocity * dt;
        self.velocity += self.acceleration * dt;

        self.alpha = self.net_torque * self.inv_inertia;
        let delta = self.alpha * 0.5 * dt * dt + self.omega * dt;
        self.omega += self.alpha * dt;
        self.theta = (self.theta + delta).rem_euclid(TAU);

        self.net_force = Vec2::ZERO;
        self.net_torque = 0.0;
        delta
    }
}

fn inverse(value: f64) -> f64 {
    if value > 0.0 { 1.0 / value } else { 0.0 }
}
