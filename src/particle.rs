//! Point masses integrated with semi-implicit Euler.

use crate::float::Float;
use crate::vec::Vec2;

/// A round point mass with explicit velocity and acceleration.
///
/// Movable particles are advanced by [`Particle::integrate`]. A pinned
/// particle (the spring anchor) has zero mass and ignores forces and
/// integration entirely; it only moves through [`Particle::set_position`].
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub mass: F,
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub radius: F,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    /// A movable particle at rest. `mass` must be positive.
    pub fn new(radius: F, mass: F, position: Vec2<F>) -> Self {
        Particle {
            mass,
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            radius,
            pinned: false,
        }
    }

    /// A fixed, zero-mass endpoint.
    pub fn anchor(radius: F, position: Vec2<F>) -> Self {
        Particle {
            mass: F::zero(),
            position,
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            radius,
            pinned: true,
        }
    }

    /// Replaces the acceleration with `sum(forces) / mass`.
    ///
    /// Callers guarantee `mass > 0`; pinned particles are left untouched.
    pub fn apply_forces<I>(&mut self, forces: I)
    where
        I: IntoIterator<Item = Vec2<F>>,
    {
        if self.pinned {
            return;
        }
        let total: Vec2<F> = forces.into_iter().sum();
        self.acceleration = total.scale(F::one() / self.mass);
    }

    /// Advances one step of length `dt`, then clamps to the floor at `floor_y`.
    ///
    /// Position moves with the velocity from *before* this step; only then is
    /// the velocity updated. Returns `true` if the floor clamp engaged.
    pub fn integrate(&mut self, dt: F, floor_y: F) -> bool {
        if self.pinned {
            return false;
        }
        self.position = self.position + self.velocity.scale(dt);
        self.velocity = self.velocity + self.acceleration.scale(dt);
        self.clamp_to_floor(floor_y)
    }

    /// Keeps the particle's lowest point at or above `floor_y` (y grows downward).
    pub fn clamp_to_floor(&mut self, floor_y: F) -> bool {
        let limit = floor_y - self.radius;
        if self.position.y > limit {
            self.position.y = limit;
            self.velocity.y = F::zero();
            self.acceleration.y = F::zero();
            true
        } else {
            false
        }
    }

    /// Overwrites the position directly, bypassing integration.
    pub fn set_position(&mut self, position: Vec2<F>) {
        self.position = position;
    }

    /// Zeroes velocity and acceleration.
    pub fn halt(&mut self) {
        self.velocity = Vec2::zero();
        self.acceleration = Vec2::zero();
    }

    /// Puts the particle back at `position`, at rest.
    pub fn restore(&mut self, position: Vec2<F>) {
        self.position = position;
        self.halt();
    }

    /// Whether `point` lies strictly inside the particle's disc.
    pub fn contains(&self, point: Vec2<F>) -> bool {
        self.position.distance(point) < self.radius
    }
}
