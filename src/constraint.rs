//! Distance constraints (Jakobsen relaxation) and pin overrides.

use crate::float::Float;
use crate::vec::Vec2;
use crate::particle::Particle;

/// Below this separation two particles are treated as coincident.
const DEGENERATE_DISTANCE: f32 = 1e-10;

/// Keeps particles `a` and `b` at `rest_length` from each other.
///
/// When `anchored` is set, `a` is immovable for this constraint and `b`
/// absorbs the whole correction.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
    pub anchored: bool,
}

/// Drives a pinned particle to an externally supplied position.
#[derive(Clone, Debug, PartialEq)]
pub struct Pin<F: Float> {
    pub particle: usize,
    pub position: Vec2<F>,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length, anchored: false }
    }

    pub fn anchored(a: usize, b: usize, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length, anchored: true }
    }

    /// Signed deviation from the rest length (positive when stretched).
    pub fn error(&self, particles: &[Particle<F>]) -> F {
        particles[self.a].pos.distance(particles[self.b].pos) - self.rest_length
    }

    /// Move the endpoints so their distance becomes `rest_length`.
    ///
    /// Coincident endpoints have no direction to correct along; the
    /// constraint is skipped for that call.
    pub fn solve(&self, particles: &mut [Particle<F>]) {
        let a_pos = particles[self.a].pos;
        let b_pos = particles[self.b].pos;

        let delta = b_pos - a_pos;
        let dist = delta.length();
        if dist.is_near_zero(F::from_f32(DEGENERATE_DISTANCE)) {
            return; // degenerate
        }

        let dir = delta.scale(F::one() / dist);
        let deviation = dist - self.rest_length;

        if self.anchored {
            particles[self.b].pos = b_pos - dir.scale(deviation);
        } else {
            let half = dir.scale(deviation * F::half());
            particles[self.a].pos = a_pos + half;
            particles[self.b].pos = b_pos - half;
        }
    }
}

impl<F: Float> Pin<F> {
    pub fn new(particle: usize, position: Vec2<F>) -> Self {
        Pin { particle, position }
    }

    pub fn apply(&self, particles: &mut [Particle<F>]) {
        particles[self.particle].move_to(self.position);
    }
}
