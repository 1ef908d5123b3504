//! Scene geometry and the user-tunable physical parameters.

use crate::error::SimError;
use crate::float::Float;
use crate::vec::Vec2;

/// Scene layout and integration settings, fixed for a session.
///
/// Coordinates are canvas-local with y growing downward; the floor is the
/// bottom edge of the canvas.
///
/// # Builder Pattern
/// ```
/// use tether::config::SimConfig;
/// use tether::vec::Vec2;
///
/// let config: SimConfig<f64> = SimConfig::new(800.0, 600.0)
///     .with_radius(20.0)
///     .with_gravity(Vec2::new(0.0, 9.81))
///     .with_time_step(1.0 / 60.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig<F: Float> {
    /// Canvas width.
    pub width: F,
    /// Canvas height; also the floor line.
    pub height: F,
    /// Radius shared by the anchor and the bob. Default: 25.
    pub radius: F,
    /// Distance of the anchor below the top edge. Default: 100.
    pub anchor_height: F,
    /// Constant force added every tick (not scaled by mass). Default: (0, 10).
    pub gravity: Vec2<F>,
    /// Fixed integration step per tick. Default: 0.1.
    pub time_step: F,
}

impl<F: Float> SimConfig<F> {
    /// Default scene for a canvas of the given size.
    pub fn new(width: F, height: F) -> Self {
        SimConfig {
            width,
            height,
            radius: F::from_f64(25.0),
            anchor_height: F::from_f64(100.0),
            gravity: Vec2::new(F::zero(), F::from_f64(10.0)),
            time_step: F::from_f64(0.1),
        }
    }

    pub fn with_radius(mut self, radius: F) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_anchor_height(mut self, anchor_height: F) -> Self {
        self.anchor_height = anchor_height;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let positive = |v: F| v.is_finite() && v > F::zero();
        if !positive(self.width) || !positive(self.height) {
            return Err(SimError::InvalidDimensions);
        }
        if !positive(self.radius) {
            return Err(SimError::InvalidRadius);
        }
        if !positive(self.time_step) {
            return Err(SimError::InvalidTimeStep);
        }
        Ok(())
    }

    /// y coordinate of the floor.
    pub fn floor_y(&self) -> F { self.height }

    /// Fixed end of the spring, centered horizontally.
    pub fn anchor_position(&self) -> Vec2<F> {
        Vec2::new(self.width * F::half(), self.anchor_height)
    }

    /// Where the bob starts and where reset puts it: the canvas center.
    pub fn initial_position(&self) -> Vec2<F> {
        Vec2::new(self.width * F::half(), self.height * F::half())
    }

    /// Spring rest length: ten units short of half the canvas height.
    pub fn rest_length(&self) -> F {
        self.height * F::half() - F::from_f64(10.0)
    }
}

/// Parameters read from the controls each time the simulation starts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StartParams<F: Float> {
    /// Bob mass. Must be positive. Default: 30.
    pub mass: F,
    /// Hooke constant. Any finite value. Default: 1.
    pub spring_constant: F,
    /// Velocity-proportional drag coefficient. Default: 0.2.
    pub air_friction: F,
}

impl<F: Float> StartParams<F> {
    pub fn new(mass: F, spring_constant: F, air_friction: F) -> Self {
        StartParams { mass, spring_constant, air_friction }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !self.mass.is_finite() || self.mass <= F::zero() {
            return Err(SimError::InvalidMass);
        }
        if !self.spring_constant.is_finite() {
            return Err(SimError::InvalidSpringConstant);
        }
        if !self.air_friction.is_finite() || self.air_friction < F::zero() {
            return Err(SimError::InvalidAirFriction);
        }
        Ok(())
    }
}

impl<F: Float> Default for StartParams<F> {
    fn default() -> Self {
        StartParams {
            mass: F::from_f64(30.0),
            spring_constant: F::one(),
            air_friction: F::from_f64(0.2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_geometry() {
        let c: SimConfig<f64> = SimConfig::new(800.0, 600.0);
        assert_eq!(c.anchor_position(), Vec2::new(400.0, 100.0));
        assert_eq!(c.initial_position(), Vec2::new(400.0, 300.0));
        assert_eq!(c.rest_length(), 290.0);
        assert_eq!(c.floor_y(), 600.0);
    }

    #[test]
    fn config_rejects_bad_values() {
        let ok: SimConfig<f64> = SimConfig::new(800.0, 600.0);
        assert_eq!(ok.validate(), Ok(()));
        assert_eq!(SimConfig::new(0.0, 600.0).validate(), Err(SimError::InvalidDimensions));
        assert_eq!(
            SimConfig::new(800.0, f64::NAN).validate(),
            Err(SimError::InvalidDimensions)
        );
        assert_eq!(ok.clone().with_radius(-1.0).validate(), Err(SimError::InvalidRadius));
        assert_eq!(ok.with_time_step(0.0).validate(), Err(SimError::InvalidTimeStep));
    }

    #[test]
    fn params_validation() {
        assert_eq!(StartParams::<f64>::default().validate(), Ok(()));
        assert_eq!(StartParams::new(0.0, 1.0, 0.2).validate(), Err(SimError::InvalidMass));
        assert_eq!(StartParams::new(-3.0, 1.0, 0.2).validate(), Err(SimError::InvalidMass));
        assert_eq!(
            StartParams::new(30.0, f64::INFINITY, 0.2).validate(),
            Err(SimError::InvalidSpringConstant)
        );
        assert_eq!(
            StartParams::new(30.0, 1.0, -0.1).validate(),
            Err(SimError::InvalidAirFriction)
        );
        // Negative spring constants are unusual but allowed.
        assert_eq!(StartParams::new(30.0, -1.0, 0.0).validate(), Ok(()));
    }
}
