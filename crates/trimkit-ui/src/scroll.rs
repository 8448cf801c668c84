//! Filmstrip scroll synchronization.
//!
//! Scrolling the filmstrip moves the asset under a stationary pair of
//! handles, so the position indicator is snapped back to the left handle once
//! the scroll settles. Times are egui input times in seconds.

/// A one-shot task due at a fixed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeferredTask {
    due: f64,
}

impl DeferredTask {
    pub fn at(due: f64) -> Self {
        Self { due }
    }

    pub fn due(&self) -> f64 {
        self.due
    }

    pub fn is_due(&self, now: f64) -> bool {
        now >= self.due
    }

    /// Seconds left until the task is due, zero when overdue.
    pub fn remaining(&self, now: f64) -> f64 {
        (self.due - now).max(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// Scrolled recently; a snap of the indicator is pending.
    Settling,
}

/// Idle/settling state machine with a cancellable settle task.
#[derive(Debug, Clone)]
pub struct ScrollSync {
    phase: ScrollPhase,
    pending: Option<DeferredTask>,
    delay: f64,
}

impl ScrollSync {
    pub fn new(delay: f64) -> Self {
        Self {
            phase: ScrollPhase::Idle,
            pending: None,
            delay: delay.max(0.0),
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn pending(&self) -> Option<DeferredTask> {
        self.pending
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn set_delay(&mut self, delay: f64) {
        self.delay = delay.max(0.0);
    }

    /// Record a scroll event and re-arm the settle task.
    ///
    /// Returns the task that was cancelled, if one was pending.
    pub fn scrolled(&mut self, now: f64) -> Option<DeferredTask> {
        self.phase = ScrollPhase::Settling;
        self.pending.replace(DeferredTask::at(now + self.delay))
    }

    /// Fire the settle task if it is due. Returns `true` when it fired.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.pending {
            Some(task) if task.is_due(now) => {
                self.pending = None;
                self.phase = ScrollPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// The scroll came to rest: drop the pending task and go idle.
    pub fn settle(&mut self) -> Option<DeferredTask> {
        self.phase = ScrollPhase::Idle;
        self.pending.take()
    }
}

impl Default for ScrollSync {
    fn default() -> Self {
        Self::new(0.2)
    }
}

/// Fling velocity below which a released drag does not decelerate (points/s).
const MIN_FLING_VELOCITY: f32 = 60.0;
/// Velocity at which deceleration is considered finished (points/s).
const STOP_VELOCITY: f32 = 8.0;
/// Exponential decay rate of the fling velocity (1/s).
const FRICTION: f32 = 5.0;

/// Result of advancing a fling by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MomentumStep {
    Idle,
    /// Scroll by this many points.
    Moving(f32),
    /// Deceleration just ended.
    Stopped,
}

/// Kinetic scrolling after a filmstrip drag is released.
#[derive(Debug, Clone, Default)]
pub struct Momentum {
    velocity: f32,
}

impl Momentum {
    /// Start a fling. Returns `true` when the velocity is high enough to decelerate.
    pub fn launch(&mut self, velocity: f32) -> bool {
        if velocity.is_finite() && velocity.abs() >= MIN_FLING_VELOCITY {
            self.velocity = velocity;
            true
        } else {
            self.velocity = 0.0;
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.velocity != 0.0
    }

    pub fn stop(&mut self) {
        self.velocity = 0.0;
    }

    /// Advance the fling by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> MomentumStep {
        if self.velocity == 0.0 {
            return MomentumStep::Idle;
        }
        let delta = self.velocity * dt;
        self.velocity *= (-FRICTION * dt).exp();
        if self.velocity.abs() < STOP_VELOCITY {
            self.velocity = 0.0;
            return MomentumStep::Stopped;
        }
        MomentumStep::Moving(delta)
    }
}
