//! Step observer trait for monitoring simulation ticks.

use crate::float::Float;
use crate::vec::Vec2;

/// Trait for observing the physics half of a tick.
///
/// Implement this to inspect forces and integration (debugging, plotting,
/// energy checks). All methods have default no-op implementations. While a
/// drag suspends physics only `on_step_complete` fires.
pub trait StepObserver<F: Float> {
    /// Called with the force list just before it is applied.
    fn on_forces(&mut self, _forces: &[Vec2<F>]) {}

    /// Called after the bob has been integrated.
    fn on_integrate(&mut self, _position: Vec2<F>, _velocity: Vec2<F>) {}

    /// Called when the floor clamp engaged during this tick.
    fn on_floor_contact(&mut self) {}

    /// Called when a tick (physics and render) is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
