//! A spring-mass toy for interactive canvases.
//!
//! `tether` simulates one round bob hanging from a fixed anchor by a linear
//! spring, under gravity, velocity-proportional air drag and a floor. The host
//! drives it one frame at a time and can grab the bob with a pointer.
//!
//! # Features
//!
//! - **Semi-implicit Euler**: Position advances on the old velocity, then velocity on acceleration
//! - **Fixed time step**: Independent of wall-clock frame timing, fully deterministic
//! - **Floor clamp**: The bob never sinks below the canvas bottom
//! - **Pointer dragging**: Explicit Idle/Dragging state machine with a single event entry point
//! - **Host traits**: Rendering, status text and frame scheduling are supplied by the embedder
//! - **Observable**: Monitor forces and integration via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use tether::{NullHost, SimConfig, Simulation, StartParams, TickOutcome};
//!
//! let mut sim: Simulation<f64> = Simulation::new(SimConfig::new(800.0, 600.0)).unwrap();
//! sim.start(StartParams::default(), &mut NullHost).unwrap();
//! for _ in 0..100 {
//!     assert_eq!(sim.tick(&mut NullHost), TickOutcome::Continued);
//! }
//! assert!(sim.particle().position.y <= 575.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod config;
pub mod error;
pub mod host;
pub mod observer;
pub mod interaction;
pub mod simulation;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use spring::Spring;
pub use config::{SimConfig, StartParams};
pub use error::SimError;
pub use host::{FrameScheduler, Host, NullHost, Renderer, Status, StatusSink};
pub use observer::{NoOpStepObserver, StepObserver};
pub use interaction::{DragController, DragState, PointerEvent, PointerResponse};
pub use simulation::{Simulation, StartOutcome, TickOutcome};
