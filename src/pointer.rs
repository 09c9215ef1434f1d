//! Pointer input: dragging the pinned corners by their handles.

use crate::float::Float;
use crate::vec::Vec2;
use crate::grid::{ClothGrid, Corner};

/// Input events a host feeds into the scene, in arrival order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent<F: Float> {
    Pressed { x: F, y: F },
    Released,
    Moved { x: F, y: F },
    CloseRequested,
}

/// Tracks which corner handle, if any, the pointer is holding.
#[derive(Clone, Debug, PartialEq)]
pub struct DragController<F: Float> {
    radius: F,
    grabbed: Option<Corner>,
}

impl<F: Float> DragController<F> {
    pub fn new(radius: F) -> Self {
        DragController { radius, grabbed: None }
    }

    /// The handle under `point`, top-left first when both overlap.
    ///
    /// Hit area is the square of half-extent `radius` around the pin target.
    pub fn hit_test(&self, grid: &ClothGrid<F>, point: Vec2<F>) -> Option<Corner> {
        Corner::ALL.into_iter().find(|&corner| {
            let d = point - grid.pin_target(corner);
            d.x.abs() <= self.radius && d.y.abs() <= self.radius
        })
    }

    /// Apply one event to the drag state and the grid's pin targets.
    ///
    /// Close requests are not a drag concern and are ignored here.
    pub fn handle(&mut self, event: &PointerEvent<F>, grid: &mut ClothGrid<F>) {
        match *event {
            PointerEvent::Pressed { x, y } => {
                self.grabbed = self.hit_test(grid, Vec2::new(x, y));
            }
            PointerEvent::Released => self.grabbed = None,
            PointerEvent::Moved { x, y } => {
                if let Some(corner) = self.grabbed {
                    grid.set_pin_target(corner, Vec2::new(x, y));
                }
            }
            PointerEvent::CloseRequested => {}
        }
    }

    pub fn grabbed(&self) -> Option<Corner> {
        self.grabbed
    }

    pub fn radius(&self) -> F {
        self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClothConfig;

    fn grid() -> ClothGrid<f32> {
        // Top-left at (0, 0), top-right target at (20, 0).
        let config = ClothConfig::new()
            .with_grid_size(3)
            .with_origin(Vec2::new(0.0, 0.0))
            .with_pin_offset(Vec2::new(10.0, 0.0));
        ClothGrid::new(&config).unwrap()
    }

    #[test]
    fn press_inside_square_grabs() {
        let grid = grid();
        let drag = DragController::new(10.0f32);
        assert_eq!(drag.hit_test(&grid, Vec2::new(-10.0, 10.0)), Some(Corner::TopLeft));
        assert_eq!(drag.hit_test(&grid, Vec2::new(25.0, -3.0)), Some(Corner::TopRight));
        assert_eq!(drag.hit_test(&grid, Vec2::new(10.0, 40.0)), None);
    }

    #[test]
    fn overlapping_handles_prefer_top_left() {
        let grid = grid();
        let drag = DragController::new(15.0f32);
        assert_eq!(drag.hit_test(&grid, Vec2::new(10.0, 0.0)), Some(Corner::TopLeft));
    }

    #[test]
    fn motion_without_grab_is_ignored() {
        let mut grid = grid();
        let mut drag = DragController::new(10.0f32);
        drag.handle(&PointerEvent::Moved { x: 100.0, y: 100.0 }, &mut grid);
        assert_eq!(grid.pin_target(Corner::TopLeft), Vec2::new(0.0, 0.0));
        assert_eq!(grid.pin_target(Corner::TopRight), Vec2::new(20.0, 0.0));
    }

    #[test]
    fn drag_follows_pointer_until_release() {
        let mut grid = grid();
        let mut drag = DragController::new(10.0f32);
        drag.handle(&PointerEvent::Pressed { x: 21.0, y: 1.0 }, &mut grid);
        assert_eq!(drag.grabbed(), Some(Corner::TopRight));
        drag.handle(&PointerEvent::Moved { x: 60.0, y: 30.0 }, &mut grid);
        assert_eq!(grid.pin_target(Corner::TopRight), Vec2::new(60.0, 30.0));
        drag.handle(&PointerEvent::Released, &mut grid);
        drag.handle(&PointerEvent::Moved { x: 0.0, y: 0.0 }, &mut grid);
        assert_eq!(grid.pin_target(Corner::TopRight), Vec2::new(60.0, 30.0));
        assert_eq!(drag.grabbed(), None);
    }
}
