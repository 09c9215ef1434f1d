//! Verlet particles: position-based dynamics with implicit velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass of the cloth.
///
/// Velocity is never stored; it is the difference between `pos` and
/// `prev_pos`. A pinned particle has zero acceleration and gets its
/// position from outside the simulation (see [`Particle::move_to`]).
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub pinned: bool,
}

impl<F: Float> Particle<F> {
    /// A free particle at rest under a constant acceleration.
    pub fn new(pos: Vec2<F>, acceleration: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration,
            pinned: false,
        }
    }

    pub fn pinned(pos: Vec2<F>) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec2::zero(),
            pinned: true,
        }
    }

    /// One Verlet step: `pos' = 2 pos - prev_pos + a dt^2`.
    ///
    /// Pinned particles are integrated too. Their acceleration is zero, and
    /// their position is overwritten by the pin override afterwards.
    pub fn integrate(&mut self, dt: F) {
        let current = self.pos;
        self.pos = current.scale(F::two()) - self.prev_pos + self.acceleration.scale(dt * dt);
        self.prev_pos = current;
    }

    /// Displacement over the last step.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    pub fn pin(&mut self) {
        self.pinned = true;
        self.acceleration = Vec2::zero();
        self.prev_pos = self.pos;
    }

    /// Place a pinned particle at `pos` with no carried velocity.
    ///
    /// Free particles are left untouched.
    pub fn move_to(&mut self, pos: Vec2<F>) {
        if self.pinned {
            self.pos = pos;
            self.prev_pos = pos;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_is_at_rest() {
        let p = Particle::new(Vec2::new(1.0f32, 2.0), Vec2::new(0.0, 9.8));
        assert_eq!(p.pos, p.prev_pos);
        assert_eq!(p.velocity_raw(), Vec2::zero());
        assert!(!p.pinned);
    }

    #[test]
    fn integrate_keeps_velocity() {
        let mut p = Particle::new(Vec2::new(0.0f64, 0.0), Vec2::zero());
        p.prev_pos = Vec2::new(-1.0, 0.5);
        p.integrate(0.05);
        assert_eq!(p.pos, Vec2::new(1.0, -0.5));
        assert_eq!(p.prev_pos, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn pin_clears_acceleration_and_velocity() {
        let mut p = Particle::new(Vec2::new(3.0f32, 3.0), Vec2::new(0.0, 9.8));
        p.prev_pos = Vec2::new(2.0, 2.0);
        p.pin();
        assert_eq!(p.acceleration, Vec2::zero());
        assert_eq!(p.velocity_raw(), Vec2::zero());
        p.integrate(0.05);
        assert_eq!(p.pos, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn move_to_ignores_free_particles() {
        let mut p = Particle::new(Vec2::new(0.0f32, 0.0), Vec2::zero());
        p.move_to(Vec2::new(5.0, 5.0));
        assert_eq!(p.pos, Vec2::zero());
    }
}
