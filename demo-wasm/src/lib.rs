use drape::{ClothConfig, ClothScene, Corner, LoopControl, PointerEvent, SceneConfig, StepObserver};
use wasm_bindgen::prelude::*;

/// Counts completed frames so the page can show simulated time.
#[derive(Default)]
struct FrameCounter {
    frames: u64,
}

impl StepObserver for FrameCounter {
    fn on_step_complete(&mut self) {
        self.frames += 1;
    }
}

// ---- Cloth Demo ----

/// Browser host for the cloth scene.
///
/// The page owns the canvas, the `requestAnimationFrame` loop and the event
/// listeners. Pointer events are queued here and drained by `update`, one
/// call per animation frame.
#[wasm_bindgen]
pub struct ClothDemo {
    scene: ClothScene<f32>,
    pending: Vec<PointerEvent<f32>>,
    counter: FrameCounter,
}

#[wasm_bindgen]
impl ClothDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ClothDemo, JsError> {
        let scene = ClothScene::new(ClothConfig::new(), SceneConfig::new())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ClothDemo {
            scene,
            pending: Vec::new(),
            counter: FrameCounter::default(),
        })
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.pending.push(PointerEvent::Pressed { x, y });
    }

    pub fn pointer_up(&mut self) {
        self.pending.push(PointerEvent::Released);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pending.push(PointerEvent::Moved { x, y });
    }

    pub fn close(&mut self) {
        self.pending.push(PointerEvent::CloseRequested);
    }

    /// Advance one frame. Returns false once the scene has been closed.
    pub fn update(&mut self) -> bool {
        let events = std::mem::take(&mut self.pending);
        self.scene.frame(events, &mut self.counter) == LoopControl::Continue
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        let pos = self.scene.grid().positions();
        let mut out = Vec::with_capacity(pos.len() * 2);
        for p in &pos {
            out.push(p.x);
            out.push(p.y);
        }
        out
    }

    /// Returns [lx, ly, rx, ry]: top-left corners of the two handle circles
    pub fn handles(&self) -> Vec<f32> {
        let [left, right] = self.scene.handles();
        vec![left.x, left.y, right.x, right.y]
    }

    /// 0 for the top-left handle, 1 for the top-right, -1 when idle
    pub fn grabbed(&self) -> i32 {
        match self.scene.grabbed() {
            Some(Corner::TopLeft) => 0,
            Some(Corner::TopRight) => 1,
            None => -1,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.scene.grid().size()
    }

    pub fn handle_radius(&self) -> f32 {
        self.scene.scene_config().handle_radius
    }

    pub fn window_width(&self) -> f32 {
        self.scene.scene_config().window_width
    }

    pub fn window_height(&self) -> f32 {
        self.scene.scene_config().window_height
    }

    pub fn frame_rate(&self) -> u32 {
        self.scene.scene_config().frame_rate
    }

    /// Simulated seconds: frames times the fixed timestep.
    pub fn simulated_time(&self) -> f64 {
        self.counter.frames as f64 * self.scene.config().timestep as f64
    }
}
