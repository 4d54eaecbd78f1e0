//! Value interpolation over time
//!
//! An [`Interpolator`] blends between two values of the same kind over a fixed
//! duration, shaped by a [`CurveKind`]. It is restartable: `start` may be
//! called any number of times.

use motus_core::Value;

use crate::curve::CurveKind;
use crate::error::{AnimationError, Result};

/// Slack for `elapsed >= duration` so f32 accumulation of frame deltas
/// (e.g. ten steps of 0.1) still lands on the end.
const TIME_EPSILON: f32 = 1e-5;

/// Playback state shared by interpolators, operations and timelines
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlayState {
    #[default]
    Stopped,
    Running,
    Paused,
}

/// Time-driven blend between two values
#[derive(Clone, Debug)]
pub struct Interpolator {
    curve: CurveKind,
    /// Duration in seconds
    duration: f32,
    elapsed: f32,
    from: Value,
    to: Value,
    current: Value,
    state: PlayState,
    valid: bool,
}

impl Interpolator {
    pub fn new(duration: f32, curve: CurveKind) -> Self {
        Self {
            curve,
            duration,
            elapsed: 0.0,
            from: Value::Scalar(0.0),
            to: Value::Scalar(0.0),
            current: Value::Scalar(0.0),
            state: PlayState::Stopped,
            valid: false,
        }
    }

    /// Begin interpolating from `from` to `to`.
    ///
    /// With `relative`, `to` is a delta added to `from`. Mismatched kinds leave
    /// the interpolator invalid and stopped. A non-positive duration completes
    /// immediately.
    pub fn start(&mut self, from: Value, to: Value, relative: bool) -> Result<()> {
        let end = if relative { from.offset(&to) } else { Some(to) };
        let end = match end {
            Some(end) if end.kind() == from.kind() => end,
            _ => {
                self.valid = false;
                self.state = PlayState::Stopped;
                return Err(AnimationError::KindMismatch {
                    from: from.kind(),
                    to: to.kind(),
                });
            }
        };

        self.valid = true;
        self.from = from;
        self.to = end;
        self.elapsed = 0.0;

        if self.duration <= 0.0 {
            self.stop();
        } else {
            self.current = from;
            self.state = PlayState::Running;
        }
        Ok(())
    }

    /// Advance by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.state != PlayState::Running {
            return;
        }

        let linear = (self.elapsed / self.duration).clamp(0.0, 1.0);
        let eased = self.curve.apply(linear);
        if let Some(value) = self.from.lerp(&self.to, eased) {
            self.current = value;
        }

        self.elapsed += dt;
        if self.elapsed + TIME_EPSILON >= self.duration {
            self.stop();
        }
    }

    /// Snap to the end value and stop
    pub fn stop(&mut self) {
        self.elapsed = 0.0;
        self.current = self.to;
        self.state = PlayState::Stopped;
    }

    pub fn pause(&mut self) {
        if self.state == PlayState::Running {
            self.state = PlayState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == PlayState::Paused {
            self.state = PlayState::Running;
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_completed(&self) -> bool {
        self.state == PlayState::Stopped
    }

    pub fn current(&self) -> Value {
        self.current
    }

    pub fn from(&self) -> Value {
        self.from
    }

    pub fn to(&self) -> Value {
        self.to
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn curve(&self) -> CurveKind {
        self.curve
    }

    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}
