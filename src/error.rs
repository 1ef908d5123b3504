//! Error types for simulation setup.

use core::fmt;

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Spring constant must be finite.
    InvalidSpringConstant,
    /// Air friction must be finite and non-negative.
    InvalidAirFriction,
    /// Canvas width and height must be positive and finite.
    InvalidDimensions,
    /// Particle radius must be positive and finite.
    InvalidRadius,
    /// Time step must be positive and finite.
    InvalidTimeStep,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass => write!(f, "mass must be positive and finite"),
            SimError::InvalidSpringConstant => write!(f, "spring constant must be finite"),
            SimError::InvalidAirFriction => {
                write!(f, "air friction must be finite and non-negative")
            }
            SimError::InvalidDimensions => {
                write!(f, "canvas width and height must be positive and finite")
            }
            SimError::InvalidRadius => write!(f, "particle radius must be positive and finite"),
            SimError::InvalidTimeStep => write!(f, "time step must be positive and finite"),
        }
    }
}

impl core::error::Error for SimError {}
