//! Linear (Hookean) springs between two particles.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Separations shorter than this produce no spring force.
const MIN_SEPARATION: f64 = 1e-10;

/// A linear spring joining particles `a` and `b` of a particle slice.
///
/// The spring does not own its endpoints; it stores their indices and reads
/// their positions whenever a force is requested.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub spring_constant: F,
    rest_length: F,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, spring_constant: F, rest_length: F) -> Self {
        Spring { a, b, spring_constant, rest_length }
    }

    pub fn rest_length(&self) -> F { self.rest_length }

    pub fn set_spring_constant(&mut self, spring_constant: F) {
        self.spring_constant = spring_constant;
    }

    /// Force acting on particle `b`.
    ///
    /// # Panics
    /// Panics if `a` or `b` is out of bounds for `particles`.
    pub fn force(&self, particles: &[Particle<F>]) -> Vec2<F> {
        self.force_between(&particles[self.a], &particles[self.b])
    }

    /// Hooke force on `p2` exerted through the spring from `p1`.
    ///
    /// A stretched spring pulls `p2` toward `p1`, a compressed one pushes it
    /// away. Coincident endpoints yield the zero vector.
    pub fn force_between(&self, p1: &Particle<F>, p2: &Particle<F>) -> Vec2<F> {
        let displacement = p1.position - p2.position;
        let distance = displacement.length();
        if distance.is_near_zero(F::from_f64(MIN_SEPARATION)) {
            return Vec2::zero();
        }
        let magnitude = self.spring_constant * (distance - self.rest_length);
        displacement.scale(magnitude / distance)
    }

    /// Current length of the spring.
    ///
    /// # Panics
    /// Panics if `a` or `b` is out of bounds for `particles`.
    pub fn length(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].position.distance(particles[self.b].position)
    }
}
