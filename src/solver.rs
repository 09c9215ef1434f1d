//! The per-frame step functions: Verlet integration and Jakobsen relaxation.
//!
//! Both operate on plain slices so they can be exercised on any particle
//! set, not just the cloth grid.

use crate::float::Float;
use crate::particle::Particle;
use crate::constraint::{DistanceConstraint, Pin};
use crate::observer::StepObserver;

/// Advance every particle (pinned ones included) by one fixed timestep.
pub fn integrate<F: Float>(particles: &mut [Particle<F>], dt: F) {
    for p in particles.iter_mut() {
        p.integrate(dt);
    }
}

/// Run `passes` sweeps over `constraints` in order.
///
/// There is no convergence test: stiffness is traded against the pass
/// count.
pub fn relax<F: Float, O: StepObserver>(
    constraints: &[DistanceConstraint<F>],
    particles: &mut [Particle<F>],
    passes: usize,
    observer: &mut O,
) {
    for pass in 0..passes {
        for c in constraints.iter() {
            c.solve(particles);
        }
        observer.on_relax_pass(pass);
    }
}

/// Overwrite pinned particles with their externally driven positions.
pub fn apply_pins<F: Float>(pins: &[Pin<F>], particles: &mut [Particle<F>]) {
    for pin in pins.iter() {
        pin.apply(particles);
    }
}

/// Sum of absolute deviations over all constraints.
pub fn total_error<F: Float>(constraints: &[DistanceConstraint<F>], particles: &[Particle<F>]) -> F {
    constraints
        .iter()
        .fold(F::zero(), |acc, c| acc + c.error(particles).abs())
}
