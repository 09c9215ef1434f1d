//! Step observer trait for monitoring cloth simulation progress.

/// Trait for observing simulation frames.
///
/// Implement this to count frames, trace residual error, or profile. All
/// methods have default no-op implementations.
pub trait StepObserver {
    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over the constraint list.
    fn on_relax_pass(&mut self, _pass: usize) {}

    /// Called after pinned particles have been moved to their targets.
    fn on_pins_applied(&mut self) {}

    /// Called when a frame is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
