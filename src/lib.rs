//! Verlet cloth with Jakobsen constraint relaxation.
//!
//! `drape` simulates a square grid of point masses hanging from two
//! draggable top corners. Every frame integrates positions with Verlet,
//! relaxes the neighbour distance constraints a fixed number of times, then
//! snaps the pinned corners to wherever the pointer put them.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Jakobsen relaxation**: Fixed-pass, in-order constraint projection
//!   with anchored edges at the pinned corners
//! - **Pointer dragging**: Hit-testing and drag tracking for the corner handles
//! - **Render data**: Row and column polylines plus handle positions
//! - **Observable**: Monitor frames via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod solver;
pub mod grid;
pub mod pointer;
pub mod scene;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::{DistanceConstraint, Pin};
pub use grid::{ClothGrid, Corner};
pub use pointer::{DragController, PointerEvent};
pub use scene::{ClothScene, LoopControl};
pub use config::{ClothConfig, SceneConfig};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::ClothError;
