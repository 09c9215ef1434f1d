use drape::{
    ClothScene, ClothConfig, SceneConfig, Corner, LoopControl, PointerEvent, StepObserver,
    NoOpStepObserver, Vec2,
};

fn scene() -> ClothScene<f32> {
    ClothScene::new(ClothConfig::new().with_grid_size(10), SceneConfig::new()).unwrap()
}

#[test]
fn dragged_corner_lands_on_pointer() {
    let mut scene = scene();
    let events = [
        PointerEvent::Pressed { x: 255.0, y: 245.0 },
        PointerEvent::Moved { x: 180.0, y: 320.0 },
    ];
    assert_eq!(scene.frame(events, &mut NoOpStepObserver), LoopControl::Continue);
    assert_eq!(scene.grabbed(), Some(Corner::TopLeft));
    assert_eq!(scene.grid().corner_position(Corner::TopLeft), Vec2::new(180.0, 320.0));
    assert_eq!(scene.handles()[0], Vec2::new(170.0, 310.0));
}

#[test]
fn pin_override_wins_over_relaxation() {
    // The top-right corner's horizontal edge is not anchored, so relaxation
    // drags it every frame; the override must still put it on the pointer.
    let mut scene = scene();
    let right = scene.grid().pin_target(Corner::TopRight);
    scene.frame([PointerEvent::Pressed { x: right.x, y: right.y }], &mut NoOpStepObserver);
    for i in 0..20 {
        let target = Vec2::new(400.0 + i as f32, 200.0);
        scene.frame([PointerEvent::Moved { x: target.x, y: target.y }], &mut NoOpStepObserver);
        assert_eq!(scene.grid().corner_position(Corner::TopRight), target);
        assert_eq!(scene.grid().corner_position(Corner::TopLeft), Vec2::new(250.0, 250.0));
    }
}

#[test]
fn release_leaves_corner_where_it_was_dropped() {
    let mut scene = scene();
    scene.frame(
        [
            PointerEvent::Pressed { x: 250.0, y: 250.0 },
            PointerEvent::Moved { x: 300.0, y: 200.0 },
            PointerEvent::Released,
            PointerEvent::Moved { x: 0.0, y: 0.0 },
        ],
        &mut NoOpStepObserver,
    );
    assert_eq!(scene.grabbed(), None);
    for _ in 0..10 {
        scene.frame(Vec::new(), &mut NoOpStepObserver);
    }
    assert_eq!(scene.grid().corner_position(Corner::TopLeft), Vec2::new(300.0, 200.0));
}

#[test]
fn press_away_from_handles_grabs_nothing() {
    let mut scene = scene();
    scene.frame(
        [PointerEvent::Pressed { x: 600.0, y: 600.0 }, PointerEvent::Moved { x: 10.0, y: 10.0 }],
        &mut NoOpStepObserver,
    );
    assert_eq!(scene.grabbed(), None);
    assert_eq!(scene.grid().corner_position(Corner::TopLeft), Vec2::new(250.0, 250.0));
}

#[derive(Default)]
struct FrameLog {
    integrations: usize,
    passes: usize,
    overrides: usize,
    frames: usize,
}

impl StepObserver for FrameLog {
    fn on_integrate(&mut self) { self.integrations += 1; }
    fn on_relax_pass(&mut self, _pass: usize) { self.passes += 1; }
    fn on_pins_applied(&mut self) { self.overrides += 1; }
    fn on_step_complete(&mut self) { self.frames += 1; }
}

#[test]
fn observer_sees_each_stage() {
    let mut scene = scene();
    let mut log = FrameLog::default();
    for _ in 0..3 {
        scene.frame(Vec::new(), &mut log);
    }
    assert_eq!(scene.frame([PointerEvent::CloseRequested], &mut log), LoopControl::Exit);
    assert_eq!(scene.frame(Vec::new(), &mut log), LoopControl::Exit);
    assert_eq!(log.integrations, 4);
    assert_eq!(log.passes, 8);
    assert_eq!(log.overrides, 4);
    assert_eq!(log.frames, 4);
}
