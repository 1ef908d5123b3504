use tether::{
    FrameScheduler, PointerEvent, PointerResponse, Renderer, SimConfig, Simulation, StartParams,
    StartOutcome, Status, StatusSink, Vec2,
};
use wasm_bindgen::prelude::*;

const CMD_CLEAR: f64 = 0.0;
const CMD_CIRCLE: f64 = 1.0;
const CMD_LINE: f64 = 2.0;

/// Collects one frame of draw commands plus status and scheduling requests
/// for the JS side to replay.
#[derive(Default)]
struct CanvasBridge {
    commands: Vec<f64>,
    status: Option<Status>,
    frame_requested: bool,
}

impl Renderer<f64> for CanvasBridge {
    fn clear(&mut self, width: f64, height: f64) {
        // A clear starts a new frame; older commands are stale.
        self.commands.clear();
        self.commands.extend_from_slice(&[CMD_CLEAR, width, height]);
    }

    fn fill_circle(&mut self, center: Vec2<f64>, radius: f64) {
        self.commands.extend_from_slice(&[CMD_CIRCLE, center.x, center.y, radius]);
    }

    fn line(&mut self, from: Vec2<f64>, to: Vec2<f64>) {
        self.commands.extend_from_slice(&[CMD_LINE, from.x, from.y, to.x, to.y]);
    }
}

impl StatusSink for CanvasBridge {
    fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }
}

impl FrameScheduler for CanvasBridge {
    fn request_frame(&mut self) {
        self.frame_requested = true;
    }
}

// ---- Spring Demo ----

#[wasm_bindgen]
pub struct SpringDemo {
    sim: Simulation<f64>,
    bridge: CanvasBridge,
}

#[wasm_bindgen]
impl SpringDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Result<SpringDemo, JsValue> {
        let sim = Simulation::new(SimConfig::new(width, height))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let mut bridge = CanvasBridge::default();
        sim.render(&mut bridge);
        Ok(SpringDemo { sim, bridge })
    }

    /// Reads the three control values. Returns true if a new run began.
    pub fn start(&mut self, spring_constant: f64, air_friction: f64, mass: f64) -> Result<bool, JsValue> {
        let params = StartParams::new(mass, spring_constant, air_friction);
        self.sim
            .start(params, &mut self.bridge)
            .map(|outcome| outcome == StartOutcome::Started)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn stop(&mut self) {
        self.sim.stop(&mut self.bridge);
    }

    pub fn reset(&mut self) {
        self.sim.reset(&mut self.bridge);
    }

    /// Call from `requestAnimationFrame`. Returns true if another frame is wanted.
    pub fn tick(&mut self) -> bool {
        self.bridge.frame_requested = false;
        self.sim.tick(&mut self.bridge);
        core::mem::take(&mut self.bridge.frame_requested)
    }

    /// True if the last start/tick asked for a frame that JS has not scheduled yet.
    pub fn take_frame_request(&mut self) -> bool {
        core::mem::take(&mut self.bridge.frame_requested)
    }

    /// Returns true if the press grabbed the bob.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.sim.handle_pointer_event(PointerEvent::Down(Vec2::new(x, y)))
            == PointerResponse::DragStarted
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.sim.handle_pointer_event(PointerEvent::Move(Vec2::new(x, y)));
    }

    pub fn pointer_up(&mut self) {
        self.sim.handle_pointer_event(PointerEvent::Up);
    }

    /// The label for the status element.
    pub fn status(&self) -> String {
        self.bridge.status.unwrap_or(self.sim.status()).to_string()
    }

    /// Latest frame as flat commands:
    /// `[0, w, h]` clear, `[1, x, y, r]` circle, `[2, x1, y1, x2, y2]` line.
    pub fn draw_list(&self) -> Vec<f64> {
        self.bridge.commands.clone()
    }

    pub fn is_running(&self) -> bool {
        self.sim.is_running()
    }
}
