//! Pointer dragging of the bob.
//!
//! A single entry point, [`DragController::handle`], receives every pointer
//! event and dispatches on the current [`DragState`]. While dragging, the
//! bob's position is overwritten directly and physics is suspended.

use tracing::{debug, trace};

use crate::config::SimConfig;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// A pointer event in canvas-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent<F: Float> {
    Down(Vec2<F>),
    Move(Vec2<F>),
    Up,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// What a pointer event did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerResponse {
    /// Nothing happened in the current state.
    Ignored,
    DragStarted,
    Moved,
    /// The move left the allowed region; the bob kept its last position.
    MoveRejected,
    DragEnded,
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        DragController { state: DragState::Idle }
    }

    pub fn state(&self) -> DragState { self.state }

    pub fn is_dragging(&self) -> bool { self.state == DragState::Dragging }

    /// Drop any drag in progress without touching the bob.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!("drag cancelled");
        }
        self.state = DragState::Idle;
    }

    pub fn handle<F: Float>(
        &mut self,
        event: PointerEvent<F>,
        bob: &mut Particle<F>,
        anchor: &Particle<F>,
        config: &SimConfig<F>,
        running: bool,
    ) -> PointerResponse {
        match (self.state, event) {
            (DragState::Idle, PointerEvent::Down(point)) => {
                trace!(pointer = ?point, particle = ?bob.position, "pointer down");
                if running && bob.contains(point) {
                    bob.halt();
                    self.state = DragState::Dragging;
                    debug!(at = ?point, "drag started");
                    PointerResponse::DragStarted
                } else {
                    PointerResponse::Ignored
                }
            }
            (DragState::Dragging, PointerEvent::Move(point)) => {
                if within_drag_region(point, bob.radius, anchor, config) {
                    bob.set_position(point);
                    PointerResponse::Moved
                } else {
                    trace!(pointer = ?point, "drag move rejected");
                    PointerResponse::MoveRejected
                }
            }
            (DragState::Dragging, PointerEvent::Up) => {
                self.state = DragState::Idle;
                debug!(at = ?bob.position, "drag ended");
                PointerResponse::DragEnded
            }
            _ => PointerResponse::Ignored,
        }
    }
}

/// The bob must stay fully on the canvas and below the anchor.
fn within_drag_region<F: Float>(
    point: Vec2<F>,
    radius: F,
    anchor: &Particle<F>,
    config: &SimConfig<F>,
) -> bool {
    point.x >= radius
        && point.x <= config.width - radius
        && point.y <= config.height - radius
        && point.y >= anchor.position.y + radius
}
