use crate::error::ConfigError;
use crate::vector::Vec2;

/// Parameters a [`World`](crate::World) is built with.
///
/// The arena spans `[0, width] x [0, height]` with `y` pointing up.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    /// Step used by [`World::tick`](crate::World::tick).
    pub time_step: f64,
    /// Acceleration applied to every body, as a force of `mass * gravity`.
    pub gravity: Vec2,
    /// Upper bound on de-penetration passes per contact.
    pub max_depenetration_iterations: usize,
    /// Relative normal speeds within this band count as resting contact.
    pub resting_epsilon: f64,
    /// Penetration depth below which bodies are considered separated.
    pub penetration_slop: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            width: 800.0,
            height: 600.0,
            time_step: 1.0 / 240.0,
            gravity: Vec2::ZERO,
            max_depenetration_iterations: 32,
            resting_epsilon: 1e-3,
            penetration_slop: 1e-9,
        }
    }
}

impl WorldConfig {
    pub fn new(width: f64, height: f64) -> Self {
        WorldConfig {
            width,
            height,
            ..WorldConfig::default()
        }
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_max_depenetration_iterations(mut self, iterations: usize) -> Self {
        self.max_depenetration_iterations = iterations;
        self
    }

    pub fn with_resting_epsilon(mut self, epsilon: f64) -> Self {
        self.resting_epsilon = epsilon;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::ArenaSize {
                width: self.width,
                height: self.height,
            });
        }
        if !positive(self.time_step) {
            return Err(ConfigError::TimeStep(self.time_step));
        }
        for (name, value) in [
            ("resting_epsilon", self.resting_epsilon),
            ("penetration_slop", self.penetration_slop),
            ("gravity.x", self.gravity.x()),
            ("gravity.y", self.gravity.y()),
        ] {
            if !value.is_finite() || (name != "gravity.x" && name != "gravity.y" && value < 0.0) {
                return Err(ConfigError::Tolerance { name, value });
            }
        }
        Ok(())
    }
}
