use tether::{
    FrameScheduler, PointerEvent, PointerResponse, Renderer, SimConfig, SimError, Simulation,
    StartOutcome, StartParams, Status, StatusSink, TickOutcome, Vec2,
};

#[derive(Debug, Clone, PartialEq)]
enum Draw {
    Clear,
    Circle(Vec2<f64>, f64),
    Line(Vec2<f64>, Vec2<f64>),
}

#[derive(Default)]
struct RecordingHost {
    frames: usize,
    statuses: Vec<Status>,
    draws: Vec<Draw>,
}

impl Renderer<f64> for RecordingHost {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.draws.push(Draw::Clear);
    }
    fn fill_circle(&mut self, center: Vec2<f64>, radius: f64) {
        self.draws.push(Draw::Circle(center, radius));
    }
    fn line(&mut self, from: Vec2<f64>, to: Vec2<f64>) {
        self.draws.push(Draw::Line(from, to));
    }
}

impl StatusSink for RecordingHost {
    fn set_status(&mut self, status: Status) {
        self.statuses.push(status);
    }
}

impl FrameScheduler for RecordingHost {
    fn request_frame(&mut self) {
        self.frames += 1;
    }
}

fn sim() -> Simulation<f64> {
    Simulation::new(SimConfig::new(800.0, 600.0)).unwrap()
}

#[test]
fn double_start_schedules_one_chain() {
    let mut s = sim();
    let mut host = RecordingHost::default();
    assert_eq!(s.start(StartParams::default(), &mut host), Ok(StartOutcome::Started));
    assert_eq!(s.start(StartParams::default(), &mut host), Ok(StartOutcome::AlreadyRunning));
    assert_eq!(host.frames, 1);
    assert_eq!(host.statuses, vec![Status::Running]);
}

#[test]
fn each_tick_requests_exactly_one_frame() {
    let mut s = sim();
    let mut host = RecordingHost::default();
    s.start(StartParams::default(), &mut host).unwrap();
    for _ in 0..10 {
        assert_eq!(s.tick(&mut host), TickOutcome::Continued);
    }
    assert_eq!(host.frames, 11);
}

#[test]
fn pending_frame_after_stop_is_noop() {
    let mut s = sim();
    let mut host = RecordingHost::default();
    s.start(StartParams::default(), &mut host).unwrap();
    s.stop(&mut host);
    let before = s.particle().clone();
    let draws = host.draws.len();

    assert_eq!(s.tick(&mut host), TickOutcome::Halted);
    assert_eq!(s.particle(), &before);
    assert_eq!(host.frames, 1);
    assert_eq!(host.draws.len(), draws);
    assert_eq!(host.statuses, vec![Status::Running, Status::Stopped]);
}

#[test]
fn restart_before_pending_frame_keeps_single_chain() {
    let mut s = sim();
    let mut host = RecordingHost::default();
    s.start(StartParams::default(), &mut host).unwrap();
    s.stop(&mut host);
    s.start(StartParams::default(), &mut host).unwrap();
    // The frame requested by the first run is still outstanding.
    assert_eq!(host.frames, 1);
    assert_eq!(s.tick(&mut host), TickOutcome::Continued);
    assert_eq!(host.frames, 2);
}

#[test]
fn restart_after_chain_ended_ticks_immediately() {
    let mut s = sim();
    let mut host = RecordingHost::default();
    s.start(StartParams::default(), &mut host).unwrap();
    s.stop(&mut host);
    s.tick(&mut host);
    s.start(StartParams::default(), &mut host).unwrap();
    assert_eq!(host.frames, 2);
}

#[test]
fn invalid_params_do_not_start() {
    let mut s = sim();
    let mut host = RecordingHost::default();
    let r = s.start(StartParams::new(30.0, 1.0, f64::NAN), &mut host);
    assert_eq!(r, Err(SimError::InvalidAirFriction));
    assert!(!s.is_running());
    assert!(host.statuses.is_empty());
    assert_eq!(host.frames, 0);
}

#[test]
fn frame_draws_bob_anchor_then_spring() {
    let mut s = sim();
    let mut host = RecordingHost::default();
    s.start(StartParams::default(), &mut host).unwrap();
    let bob = s.particle().position;
    let anchor = s.anchor().position;
    assert_eq!(
        host.draws,
        vec![
            Draw::Clear,
            Draw::Circle(bob, 25.0),
            Draw::Circle(anchor, 25.0),
            Draw::Line(anchor, bob),
        ]
    );
}

#[test]
fn reset_restores_and_draws_once() {
    let mut s = sim();
    let mut host = RecordingHost::default();
    s.start(StartParams::default(), &mut host).unwrap();
    for _ in 0..50 {
        s.tick(&mut host);
    }
    assert_ne!(s.particle().position, Vec2::new(400.0, 300.0));
    host.draws.clear();

    s.reset(&mut host);
    let bob = s.particle();
    assert!(!s.is_running());
    assert_eq!(bob.position, Vec2::new(400.0, 300.0));
    assert_eq!(bob.velocity, Vec2::zero());
    assert_eq!(bob.acceleration, Vec2::zero());
    assert_eq!(host.statuses.last(), Some(&Status::Stopped));
    assert_eq!(host.draws.len(), 4);
    assert_eq!(host.draws[1], Draw::Circle(Vec2::new(400.0, 300.0), 25.0));
}

#[test]
fn reset_cancels_drag() {
    let mut s = sim();
    let mut host = RecordingHost::default();
    s.start(StartParams::default(), &mut host).unwrap();
    let at = s.particle().position;
    assert_eq!(s.handle_pointer_event(PointerEvent::Down(at)), PointerResponse::DragStarted);

    s.reset(&mut host);
    assert!(s.physics_enabled());
    assert_eq!(
        s.handle_pointer_event(PointerEvent::Move(Vec2::new(300.0, 400.0))),
        PointerResponse::Ignored
    );
    assert_eq!(s.particle().position, Vec2::new(400.0, 300.0));
}

#[test]
fn stop_reports_stopped_status() {
    let mut s = sim();
    let mut host = RecordingHost::default();
    s.stop(&mut host);
    assert_eq!(host.statuses, vec![Status::Stopped]);
    assert_eq!(s.status().to_string(), "Status: Stopped");
}
