//! The cloth: a square grid of Verlet particles with two pinned top corners.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;
use crate::constraint::{DistanceConstraint, Pin};
use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::observer::StepObserver;
use crate::solver;
use alloc::vec::Vec as AllocVec;

/// One of the two externally driven corners.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
}

impl Corner {
    pub const ALL: [Corner; 2] = [Corner::TopLeft, Corner::TopRight];

    fn slot(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
        }
    }
}

/// A cloth mesh built from an N x N grid of Verlet particles.
pub struct ClothGrid<F: Float> {
    particles: AllocVec<Particle<F>>,
    constraints: AllocVec<DistanceConstraint<F>>,
    pins: [Pin<F>; 2],
    size: usize,
}

impl<F: Float> ClothGrid<F> {
    /// Build the lattice described by `config`.
    ///
    /// The grid extends in positive X (columns) and positive Y (rows).
    /// Particle at (row, col) has index `row * size + col`.
    ///
    /// Constraints join every particle to its right and lower neighbour,
    /// listed horizontal row by row, then vertical column by column. A
    /// constraint whose first endpoint is a pinned corner is anchored, so
    /// the top-left corner anchors both of its edges and the top-right
    /// corner anchors only its vertical edge.
    pub fn new(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;

        let size = config.grid_size;
        let spacing = config.spacing;
        let mut particles = AllocVec::with_capacity(size * size);

        for row in 0..size {
            for col in 0..size {
                let x = config.origin.x + F::from_usize(col) * spacing;
                let y = config.origin.y + F::from_usize(row) * spacing;
                particles.push(Particle::new(Vec2::new(x, y), config.gravity));
            }
        }

        let top_left = 0;
        let top_right = size - 1;
        particles[top_left].pin();
        particles[top_right].pin();

        let pins = [
            Pin::new(top_left, particles[top_left].pos),
            Pin::new(top_right, particles[top_right].pos + config.pin_offset),
        ];

        let mut constraints = AllocVec::with_capacity(2 * size * (size - 1));

        // Horizontal: row by row
        for row in 0..size {
            for col in 0..(size - 1) {
                let a = row * size + col;
                let b = row * size + col + 1;
                constraints.push(Self::link(&particles, a, b, spacing));
            }
        }

        // Vertical: column by column
        for col in 0..size {
            for row in 0..(size - 1) {
                let a = row * size + col;
                let b = (row + 1) * size + col;
                constraints.push(Self::link(&particles, a, b, spacing));
            }
        }

        let mut grid = ClothGrid { particles, constraints, pins, size };
        solver::apply_pins(&grid.pins, &mut grid.particles);
        Ok(grid)
    }

    fn link(particles: &[Particle<F>], a: usize, b: usize, rest: F) -> DistanceConstraint<F> {
        if particles[a].pinned {
            DistanceConstraint::anchored(a, b, rest)
        } else {
            DistanceConstraint::new(a, b, rest)
        }
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Checked lookup by grid coordinate.
    pub fn get(&self, row: usize, col: usize) -> Result<&Particle<F>, ClothError> {
        if row >= self.size || col >= self.size {
            return Err(ClothError::ParticleOutOfBounds { row, col, size: self.size });
        }
        Ok(&self.particles[self.index(row, col)])
    }

    /// Verlet step over every particle.
    pub fn integrate(&mut self, dt: F) {
        solver::integrate(&mut self.particles, dt);
    }

    /// Jakobsen relaxation over the whole constraint list.
    pub fn relax<O: StepObserver>(&mut self, passes: usize, observer: &mut O) {
        solver::relax(&self.constraints, &mut self.particles, passes, observer);
    }

    /// Integrate then relax, leaving pinned corners where the solver put them.
    pub fn advance<O: StepObserver>(&mut self, config: &ClothConfig<F>, observer: &mut O) {
        self.integrate(config.timestep);
        observer.on_integrate();
        self.relax(config.relaxation_passes, observer);
    }

    /// Snap both pinned corners to their targets.
    pub fn apply_pins<O: StepObserver>(&mut self, observer: &mut O) {
        solver::apply_pins(&self.pins, &mut self.particles);
        observer.on_pins_applied();
    }

    /// A whole frame without pointer input.
    pub fn step<O: StepObserver>(&mut self, config: &ClothConfig<F>, observer: &mut O) {
        self.advance(config, observer);
        self.apply_pins(observer);
        observer.on_step_complete();
    }

    /// Move a corner's target. Takes effect at the next pin override.
    pub fn set_pin_target(&mut self, corner: Corner, pos: Vec2<F>) {
        self.pins[corner.slot()].position = pos;
    }

    pub fn pin_target(&self, corner: Corner) -> Vec2<F> {
        self.pins[corner.slot()].position
    }

    pub fn corner_position(&self, corner: Corner) -> Vec2<F> {
        self.particles[self.pins[corner.slot()].particle].pos
    }

    pub fn total_error(&self) -> F {
        solver::total_error(&self.constraints, &self.particles)
    }

    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn position_at(&self, row: usize, col: usize) -> Vec2<F> {
        self.particles[self.index(row, col)].pos
    }

    /// Polyline through one row, left to right.
    ///
    /// # Panics
    /// If `row >= size`.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Vec2<F>> + '_ {
        assert!(row < self.size, "row {} out of bounds (grid: {}x{})", row, self.size, self.size);
        self.particles[row * self.size..(row + 1) * self.size]
            .iter()
            .map(|p| p.pos)
    }

    /// Polyline through one column, top to bottom.
    ///
    /// # Panics
    /// If `col >= size`.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Vec2<F>> + '_ {
        assert!(col < self.size, "column {} out of bounds (grid: {}x{})", col, self.size, self.size);
        self.particles[col..].iter().step_by(self.size).map(|p| p.pos)
    }

    pub fn particles(&self) -> &[Particle<F>] { &self.particles }
    pub fn constraints(&self) -> &[DistanceConstraint<F>] { &self.constraints }
    pub fn size(&self) -> usize { self.size }
    pub fn particle_count(&self) -> usize { self.particles.len() }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }
}
