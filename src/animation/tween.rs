use cgmath::Vector3;

use super::Easing;

/// Lifecycle of a one-shot tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    /// Waiting for `start + delay` to pass.
    Pending,
    Running,
    /// Reached `to`. Terminal.
    Done,
}

/// One-shot interpolation of a vector value over time.
///
/// Times are in seconds on the caller's clock. `start` is when the tween was
/// created; the value starts moving at `start + delay` and lands on `to` at
/// `start + delay + duration`.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: Vector3<f32>,
    to: Vector3<f32>,
    start: f32,
    delay: f32,
    duration: f32,
    easing: Easing,
    state: TweenState,
}

impl Tween {
    /// Creates a pending tween starting at time zero with no delay and
    /// exponential ease-out.
    pub fn new(from: Vector3<f32>, to: Vector3<f32>, duration: f32) -> Self {
        Self {
            from,
            to,
            start: 0.0,
            delay: 0.0,
            duration: duration.max(0.0),
            easing: Easing::default(),
            state: TweenState::Pending,
        }
    }

    pub fn starting_at(mut self, start: f32) -> Self {
        self.start = start;
        self
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advances the state machine to `now` and returns the current value.
    ///
    /// Once `Done` the tween keeps returning `to`, even if `now` moves
    /// backwards.
    pub fn sample(&mut self, now: f32) -> Vector3<f32> {
        if self.state == TweenState::Done {
            return self.to;
        }

        let elapsed = now - (self.start + self.delay);
        if elapsed < 0.0 {
            return self.from;
        }

        if self.duration <= 0.0 || elapsed >= self.duration {
            self.state = TweenState::Done;
            return self.to;
        }

        self.state = TweenState::Running;
        let eased = self.easing.apply(elapsed / self.duration);
        self.from + (self.to - self.from) * eased
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == TweenState::Done
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Time at which the tween lands on its final value.
    pub fn end_time(&self) -> f32 {
        self.start + self.delay + self.duration
    }
}
