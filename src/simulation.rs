//! The simulation session: one bob hung from a fixed anchor by a spring.

use tracing::{debug, info, warn};

use crate::config::{SimConfig, StartParams};
use crate::error::SimError;
use crate::float::Float;
use crate::host::{Host, Renderer, Status};
use crate::interaction::{DragController, DragState, PointerEvent, PointerResponse};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::spring::Spring;

/// Index of the fixed anchor in [`Simulation::particles`].
pub const ANCHOR: usize = 0;
/// Index of the movable bob in [`Simulation::particles`].
pub const BOB: usize = 1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// The run flag flipped and a tick chain is live.
    Started,
    /// Already running; nothing changed.
    AlreadyRunning,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick ran and the next frame was requested.
    Continued,
    /// Not running: no physics, no render, no new frame.
    Halted,
}

/// A single spring-mass session.
///
/// All mutable state lives here: the two particles, the spring, the run flag
/// and the drag state. Ticks, pointer events and resets each take `&mut self`,
/// so no two of them can touch the particles at once.
pub struct Simulation<F: Float> {
    particles: [Particle<F>; 2],
    spring: Spring<F>,
    config: SimConfig<F>,
    params: StartParams<F>,
    running: bool,
    frame_pending: bool,
    drag: DragController,
}

impl<F: Float> Simulation<F> {
    /// Builds a stopped session with the bob resting at the canvas center.
    pub fn new(config: SimConfig<F>) -> Result<Self, SimError> {
        config.validate()?;
        let params = StartParams::default();
        let anchor = Particle::anchor(config.radius, config.anchor_position());
        let bob = Particle::new(config.radius, params.mass, config.initial_position());
        let spring = Spring::new(ANCHOR, BOB, params.spring_constant, config.rest_length());
        Ok(Simulation {
            particles: [anchor, bob],
            spring,
            config,
            params,
            running: false,
            frame_pending: false,
            drag: DragController::new(),
        })
    }

    /// Loads `params` into the model and begins ticking.
    ///
    /// The first tick runs immediately and requests the next frame. If a frame
    /// from an earlier run is still outstanding, that frame carries the chain
    /// instead, so there is never more than one chain alive.
    pub fn start<H: Host<F>>(
        &mut self,
        params: StartParams<F>,
        host: &mut H,
    ) -> Result<StartOutcome, SimError> {
        if self.running {
            debug!("start ignored, already running");
            return Ok(StartOutcome::AlreadyRunning);
        }
        if let Err(err) = params.validate() {
            warn!(%err, "start rejected");
            return Err(err);
        }

        self.particles[BOB].mass = params.mass;
        self.spring.set_spring_constant(params.spring_constant);
        self.params = params;
        self.running = true;
        info!(
            mass = ?params.mass,
            spring_constant = ?params.spring_constant,
            air_friction = ?params.air_friction,
            "simulation started"
        );
        host.set_status(Status::Running);

        if self.frame_pending {
            debug!("resuming on outstanding frame");
        } else {
            self.tick(host);
        }
        Ok(StartOutcome::Started)
    }

    /// Clears the run flag. A frame already requested becomes a no-op.
    pub fn stop<H: Host<F>>(&mut self, host: &mut H) {
        self.running = false;
        info!("simulation stopped");
        host.set_status(Status::Stopped);
    }

    /// Stops, puts the bob back at its starting point at rest, and draws once.
    ///
    /// Any drag in progress is abandoned.
    pub fn reset<H: Host<F>>(&mut self, host: &mut H) {
        self.running = false;
        self.drag.cancel();
        let start = self.config.initial_position();
        self.particles[BOB].restore(start);
        info!(position = ?start, "simulation reset");
        host.set_status(Status::Stopped);
        self.render(host);
    }

    /// One frame: forces, integration, render, then request the next frame.
    pub fn tick<H: Host<F>>(&mut self, host: &mut H) -> TickOutcome {
        self.tick_observed(host, &mut NoOpStepObserver)
    }

    pub fn tick_observed<H: Host<F>, O: StepObserver<F>>(
        &mut self,
        host: &mut H,
        observer: &mut O,
    ) -> TickOutcome {
        self.frame_pending = false;
        if !self.running {
            return TickOutcome::Halted;
        }

        if self.physics_enabled() {
            self.step_physics(observer);
        }
        self.render(host);
        observer.on_step_complete();

        self.frame_pending = true;
        host.request_frame();
        TickOutcome::Continued
    }

    fn step_physics<O: StepObserver<F>>(&mut self, observer: &mut O) {
        let drag = self.particles[BOB].velocity.scale(-self.params.air_friction);
        let forces = [self.spring.force(&self.particles), drag, self.config.gravity];
        observer.on_forces(&forces);

        let bob = &mut self.particles[BOB];
        bob.apply_forces(forces);
        let contact = bob.integrate(self.config.time_step, self.config.floor_y());
        observer.on_integrate(bob.position, bob.velocity);
        if contact {
            observer.on_floor_contact();
        }
    }

    /// Draws the current scene: bob, anchor, then the spring between them.
    pub fn render<R: Renderer<F>>(&self, renderer: &mut R) {
        let [anchor, bob] = &self.particles;
        renderer.clear(self.config.width, self.config.height);
        renderer.fill_circle(bob.position, bob.radius);
        renderer.fill_circle(anchor.position, anchor.radius);
        renderer.line(anchor.position, bob.position);
    }

    /// Routes a pointer event through the drag state machine.
    pub fn handle_pointer_event(&mut self, event: PointerEvent<F>) -> PointerResponse {
        let [anchor, bob] = &mut self.particles;
        self.drag.handle(event, bob, anchor, &self.config, self.running)
    }

    pub fn is_running(&self) -> bool { self.running }

    /// False exactly while a drag is active.
    pub fn physics_enabled(&self) -> bool { !self.drag.is_dragging() }

    pub fn drag_state(&self) -> DragState { self.drag.state() }

    pub fn status(&self) -> Status {
        if self.running { Status::Running } else { Status::Stopped }
    }

    /// The movable bob.
    pub fn particle(&self) -> &Particle<F> { &self.particles[BOB] }

    pub fn anchor(&self) -> &Particle<F> { &self.particles[ANCHOR] }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }

    pub fn spring(&self) -> &Spring<F> { &self.spring }

    pub fn params(&self) -> &StartParams<F> { &self.params }

    pub fn config(&self) -> &SimConfig<F> { &self.config }
}
