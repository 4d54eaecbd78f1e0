//! Animation presets for common entrance and emphasis effects
//!
//! Each preset returns an unbound [`Timeline`]. Bind it and run it, or save it
//! under a name and replay it on any target with
//! [`Scheduler::run_saved`](crate::Scheduler::run_saved).

use motus_core::{paths, Vec2};

use crate::curve::CurveKind;
use crate::operation::Operation;
use crate::timeline::{Repeat, Timeline};

/// Pre-built timelines for common patterns
pub struct Preset;

impl Preset {
    // ========================================================================
    // Fades
    // ========================================================================

    /// Fade in from transparent to opaque
    pub fn fade_in(duration: f32) -> Timeline {
        Timeline::sequence()
            .with_operation(Operation::to(paths::ALPHA, 0.0, 0.0, CurveKind::Linear))
            .with_operation(Operation::to(paths::ALPHA, 1.0, duration, CurveKind::Exponential))
    }

    /// Fade out from the current alpha to transparent
    pub fn fade_out(duration: f32) -> Timeline {
        Timeline::parallel().with_operation(Operation::to(
            paths::ALPHA,
            0.0,
            duration,
            CurveKind::InvExponential,
        ))
    }

    // ========================================================================
    // Scale
    // ========================================================================

    /// Grow from nothing with a springy overshoot
    pub fn pop_in(duration: f32) -> Timeline {
        Timeline::sequence()
            .with_operation(Operation::to(paths::SCALE, 0.0, 0.0, CurveKind::Linear))
            .with_operation(Operation::to(paths::SCALE, 1.0, duration, CurveKind::Bouncy))
    }

    /// Swell by `amount` and settle back, forever
    pub fn pulse(amount: f64, duration: f32) -> Timeline {
        let half = duration * 0.5;
        Timeline::sequence()
            .with_operation(Operation::by(paths::SCALE, amount, half, CurveKind::Exponential))
            .with_operation(Operation::by(paths::SCALE, -amount, half, CurveKind::Exponential))
            .with_repeat(Repeat::Infinite)
    }

    // ========================================================================
    // Motion
    // ========================================================================

    /// Shake sideways by `amplitude` and return to the starting position
    pub fn shake(amplitude: f32, duration: f32) -> Timeline {
        let step = duration / 3.0;
        Timeline::sequence()
            .with_operation(Operation::by(
                paths::POSITION,
                Vec2::new(amplitude, 0.0),
                step,
                CurveKind::Ringing,
            ))
            .with_operation(Operation::by(
                paths::POSITION,
                Vec2::new(-2.0 * amplitude, 0.0),
                step,
                CurveKind::Ringing,
            ))
            .with_operation(Operation::by(
                paths::POSITION,
                Vec2::new(amplitude, 0.0),
                step,
                CurveKind::Ringing,
            ))
    }

    /// Full turn every `duration` seconds, forever
    pub fn spin(duration: f32) -> Timeline {
        Timeline::parallel()
            .with_operation(Operation::by(paths::ROTATION, 360.0, duration, CurveKind::Linear))
            .with_repeat(Repeat::Infinite)
    }

    /// Jump up by `height` and fall back into place with a bounce
    pub fn drop_in(height: f32, duration: f32) -> Timeline {
        Timeline::sequence()
            .with_operation(Operation::by(
                paths::POSITION,
                Vec2::new(0.0, -height),
                0.0,
                CurveKind::Linear,
            ))
            .with_operation(Operation::by(
                paths::POSITION,
                Vec2::new(0.0, height),
                duration,
                CurveKind::Elastic,
            ))
    }
}
