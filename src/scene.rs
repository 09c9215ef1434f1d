//! The frame loop: physics, pointer input, pin override, render data.

use crate::float::Float;
use crate::vec::Vec2;
use crate::grid::{ClothGrid, Corner};
use crate::config::{ClothConfig, SceneConfig};
use crate::pointer::{DragController, PointerEvent};
use crate::error::ClothError;
use crate::observer::StepObserver;

/// Whether the host should keep running its loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// A cloth hanging from two draggable corners.
///
/// Each call to [`ClothScene::frame`] advances simulation time by one fixed
/// timestep, whatever the wall-clock interval since the last call. Hosts
/// cap their frame rate at [`SceneConfig::frame_rate`]; a slower host sees
/// slower cloth.
pub struct ClothScene<F: Float> {
    grid: ClothGrid<F>,
    config: ClothConfig<F>,
    scene: SceneConfig<F>,
    drag: DragController<F>,
    closed: bool,
}

impl<F: Float> ClothScene<F> {
    pub fn new(config: ClothConfig<F>, scene: SceneConfig<F>) -> Result<Self, ClothError> {
        scene.validate()?;
        let grid = ClothGrid::new(&config)?;
        let drag = DragController::new(scene.handle_radius);
        Ok(ClothScene { grid, config, scene, drag, closed: false })
    }

    /// Run one frame: integrate, relax, drain `events`, override the pins.
    ///
    /// Returns [`LoopControl::Exit`] once a close request has been seen; the
    /// frame carrying the request still completes, later calls do nothing.
    pub fn frame<I, O>(&mut self, events: I, observer: &mut O) -> LoopControl
    where
        I: IntoIterator<Item = PointerEvent<F>>,
        O: StepObserver,
    {
        if self.closed {
            return LoopControl::Exit;
        }

        self.grid.advance(&self.config, observer);

        for event in events {
            if event == PointerEvent::CloseRequested {
                self.closed = true;
            }
            self.drag.handle(&event, &mut self.grid);
        }

        self.grid.apply_pins(observer);
        observer.on_step_complete();

        if self.closed {
            LoopControl::Exit
        } else {
            LoopControl::Continue
        }
    }

    /// Top-left corners of the two handle circles, in [`Corner::ALL`] order.
    pub fn handles(&self) -> [Vec2<F>; 2] {
        let r = self.scene.handle_radius;
        Corner::ALL.map(|corner| {
            let p = self.grid.corner_position(corner);
            Vec2::new(p.x - r, p.y - r)
        })
    }

    pub fn grid(&self) -> &ClothGrid<F> { &self.grid }
    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn scene_config(&self) -> &SceneConfig<F> { &self.scene }
    pub fn grabbed(&self) -> Option<Corner> { self.drag.grabbed() }
    pub fn is_closed(&self) -> bool { self.closed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoOpStepObserver;

    #[test]
    fn handles_offset_by_radius() {
        let scene: ClothScene<f32> = ClothScene::new(ClothConfig::new(), SceneConfig::new()).unwrap();
        let [left, right] = scene.handles();
        assert_eq!(left, Vec2::new(240.0, 240.0));
        // 39 * 5 + 10 pin offset to the right of the origin.
        assert_eq!(right, Vec2::new(250.0 + 195.0 + 10.0 - 10.0, 240.0));
    }

    #[test]
    fn close_finishes_the_frame_then_stops() {
        let config = ClothConfig::new().with_grid_size(5).with_pin_offset(Vec2::zero());
        let mut scene: ClothScene<f32> = ClothScene::new(config, SceneConfig::new()).unwrap();
        let before = scene.grid().position_at(4, 4);
        let control = scene.frame([PointerEvent::CloseRequested], &mut NoOpStepObserver);
        assert_eq!(control, LoopControl::Exit);
        assert!(scene.is_closed());
        let after_close = scene.grid().position_at(4, 4);
        assert_ne!(after_close, before);
        let none: [PointerEvent<f32>; 0] = [];
        assert_eq!(scene.frame(none, &mut NoOpStepObserver), LoopControl::Exit);
        assert_eq!(scene.grid().position_at(4, 4), after_close);
    }

    #[test]
    fn invalid_scene_config_is_rejected() {
        let result: Result<ClothScene<f64>, _> =
            ClothScene::new(ClothConfig::new(), SceneConfig::new().with_handle_radius(f64::NAN));
        assert!(matches!(result, Err(ClothError::InvalidHandleRadius)));
    }
}
