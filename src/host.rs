//! Traits the embedding environment implements: drawing, status text and
//! frame scheduling.

use core::fmt;

use crate::float::Float;
use crate::vec::Vec2;

/// Run state reported to the status display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Stopped,
}

impl Status {
    /// The literal label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Status::Running => "Status: Running",
            Status::Stopped => "Status: Stopped",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A 2D drawing surface. Nothing it returns feeds back into the physics.
pub trait Renderer<F: Float> {
    /// Wipe the whole canvas before a frame.
    fn clear(&mut self, _width: F, _height: F) {}

    fn fill_circle(&mut self, center: Vec2<F>, radius: F);

    fn line(&mut self, from: Vec2<F>, to: Vec2<F>);
}

/// Receives the status label on every start, stop and reset.
pub trait StatusSink {
    fn set_status(&mut self, status: Status);
}

/// Arranges for `tick` to be called once more, before the next display refresh.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

/// Everything a simulation needs from its environment.
pub trait Host<F: Float>: Renderer<F> + StatusSink + FrameScheduler {}

impl<F: Float, T: Renderer<F> + StatusSink + FrameScheduler> Host<F> for T {}

/// A host that discards everything. Useful for headless stepping.
pub struct NullHost;

impl<F: Float> Renderer<F> for NullHost {
    fn fill_circle(&mut self, _center: Vec2<F>, _radius: F) {}
    fn line(&mut self, _from: Vec2<F>, _to: Vec2<F>) {}
}

impl StatusSink for NullHost {
    fn set_status(&mut self, _status: Status) {}
}

impl FrameScheduler for NullHost {
    fn request_frame(&mut self) {}
}
