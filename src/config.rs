//! Configuration for the cloth and the interactive scene around it.

use crate::float::Float;
use crate::vec::Vec2;
use crate::error::ClothError;
use crate::particle::Particle;
use crate::constraint::DistanceConstraint;
use core::mem::size_of;

pub const DEFAULT_GRID_SIZE: usize = 40;
pub const DEFAULT_SPACING: f32 = 5.0;
pub const DEFAULT_GRAVITY: f32 = 9.8;
pub const DEFAULT_TIMESTEP: f32 = 1.0 / 20.0;
pub const DEFAULT_RELAXATION_PASSES: usize = 2;
pub const DEFAULT_WINDOW_SIZE: f32 = 750.0;
pub const DEFAULT_HANDLE_RADIUS: f32 = 10.0;
pub const DEFAULT_FRAME_RATE: u32 = 150;

/// Physical and layout parameters of the cloth.
///
/// # Builder Pattern
/// ```
/// use drape::config::ClothConfig;
/// use drape::vec::Vec2;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_grid_size(10)
///     .with_spacing(8.0)
///     .with_gravity(Vec2::new(0.0, 20.0))
///     .with_relaxation_passes(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig<F: Float> {
    /// Particles per row and per column. Default: 40.
    pub grid_size: usize,
    /// Rest length between neighbours. Default: 5.0.
    pub spacing: F,
    /// Acceleration of every free particle, y downward. Default: (0, 9.8).
    pub gravity: Vec2<F>,
    /// Fixed simulation time per frame. Default: 1/20 s.
    pub timestep: F,
    /// Relaxation sweeps per frame. Default: 2.
    pub relaxation_passes: usize,
    /// Position of the top-left particle. Default: a third of the window.
    pub origin: Vec2<F>,
    /// Shift applied to the top-right pin at startup. Default: (10, 0).
    pub pin_offset: Vec2<F>,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with the reference values.
    pub fn new() -> Self {
        let third = F::from_f32(DEFAULT_WINDOW_SIZE / 3.0);
        ClothConfig {
            grid_size: DEFAULT_GRID_SIZE,
            spacing: F::from_f32(DEFAULT_SPACING),
            gravity: Vec2::new(F::zero(), F::from_f32(DEFAULT_GRAVITY)),
            timestep: F::from_f32(DEFAULT_TIMESTEP),
            relaxation_passes: DEFAULT_RELAXATION_PASSES,
            origin: Vec2::new(third, third),
            pin_offset: Vec2::new(F::from_f32(10.0), F::zero()),
        }
    }

    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_spacing(mut self, spacing: F) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_timestep(mut self, timestep: F) -> Self {
        self.timestep = timestep;
        self
    }

    pub fn with_relaxation_passes(mut self, passes: usize) -> Self {
        self.relaxation_passes = passes;
        self
    }

    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_pin_offset(mut self, pin_offset: Vec2<F>) -> Self {
        self.pin_offset = pin_offset;
        self
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ClothError> {
        let size = self.grid_size;
        if size < 2 {
            return Err(ClothError::InvalidGridSize { size });
        }
        // Particle and constraint storage must be addressable.
        let particle_bytes = size
            .checked_mul(size)
            .and_then(|n| n.checked_mul(size_of::<Particle<F>>()));
        let constraint_bytes = size
            .checked_mul(size - 1)
            .and_then(|n| n.checked_mul(2))
            .and_then(|n| n.checked_mul(size_of::<DistanceConstraint<F>>()));
        let fits = |bytes: Option<usize>| bytes.map_or(false, |b| b <= isize::MAX as usize);
        if !fits(particle_bytes) || !fits(constraint_bytes) {
            return Err(ClothError::InvalidGridSize { size });
        }
        if !self.spacing.is_finite() || self.spacing <= F::zero() {
            return Err(ClothError::InvalidSpacing);
        }
        if !self.timestep.is_finite() || self.timestep <= F::zero() {
            return Err(ClothError::InvalidTimestep);
        }
        if !self.gravity.is_finite() {
            return Err(ClothError::InvalidGravity);
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Host-facing values: window extent, drag handles and frame cap.
///
/// The core never reads the window size or frame rate; they are carried
/// here so every host draws the same scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig<F: Float> {
    pub window_width: F,
    pub window_height: F,
    /// Half-extent of the square hit area and radius of the drawn handle.
    pub handle_radius: F,
    /// Target frames per second. The physics assumes one timestep per frame.
    pub frame_rate: u32,
}

impl<F: Float> SceneConfig<F> {
    pub fn new() -> Self {
        SceneConfig {
            window_width: F::from_f32(DEFAULT_WINDOW_SIZE),
            window_height: F::from_f32(DEFAULT_WINDOW_SIZE),
            handle_radius: F::from_f32(DEFAULT_HANDLE_RADIUS),
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }

    pub fn with_window(mut self, width: F, height: F) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_handle_radius(mut self, radius: F) -> Self {
        self.handle_radius = radius;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn validate(&self) -> Result<(), ClothError> {
        if !self.handle_radius.is_finite() || self.handle_radius < F::zero() {
            return Err(ClothError::InvalidHandleRadius);
        }
        if self.frame_rate == 0 {
            return Err(ClothError::InvalidFrameRate);
        }
        Ok(())
    }
}

impl<F: Float> Default for SceneConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
