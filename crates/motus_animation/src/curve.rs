//! Easing curves for animations
//!
//! Most curves are the unit step response of a damped second-order system,
//! sampled over normalized progress. Low damping overshoots past 1.0 before
//! settling, which is what gives `Bouncy`, `Elastic` and `Ringing` their feel.

use std::f64::consts::PI;

/// Parameters of a damped step response
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedResponse {
    /// Natural frequency ωₙ (rad/s over normalized time)
    pub natural_frequency: f64,
    /// Damping ratio ζ, expected in (0, 1)
    pub damping_ratio: f64,
    /// Square progress before sampling, delaying the initial motion
    pub slow_start: bool,
}

impl DampedResponse {
    pub const EXPONENTIAL: DampedResponse = DampedResponse::new(8.0, 0.95, false);
    pub const BOUNCY: DampedResponse = DampedResponse::new(12.0, 0.60, true);
    pub const ELASTIC: DampedResponse = DampedResponse::new(15.0, 0.25, true);
    pub const RINGING: DampedResponse = DampedResponse::new(30.0, 0.15, true);

    pub const fn new(natural_frequency: f64, damping_ratio: f64, slow_start: bool) -> Self {
        Self {
            natural_frequency,
            damping_ratio,
            slow_start,
        }
    }

    /// Closed-form response at normalized time `t`
    ///
    /// `1 - e^(-ζωₙt) / √(1-ζ²) · sin(ω_d·t + acos ζ)` with `ω_d = ωₙ√(1-ζ²)`.
    pub fn sample(&self, t: f64) -> f64 {
        let t = if self.slow_start { t * t } else { t };
        let zeta = self.damping_ratio;
        let omega = self.natural_frequency;

        let root = (1.0 - zeta * zeta).sqrt();
        let damped = omega * root;
        let envelope = (-zeta * omega * t).exp() / root;

        1.0 - envelope * (damped * t + zeta.acos()).sin()
    }
}

/// Easing curve applied to normalized progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CurveKind {
    #[default]
    Linear,
    Exponential,
    InvExponential,
    Elastic,
    Bouncy,
    Ringing,
    /// Rise to 1.0 at the midpoint and fall back to 0.0
    FadeInOut,
}

impl CurveKind {
    pub const ALL: [CurveKind; 7] = [
        CurveKind::Linear,
        CurveKind::Exponential,
        CurveKind::InvExponential,
        CurveKind::Elastic,
        CurveKind::Bouncy,
        CurveKind::Ringing,
        CurveKind::FadeInOut,
    ];

    /// Damped response backing this curve, if any
    pub fn response(&self) -> Option<DampedResponse> {
        match self {
            CurveKind::Exponential | CurveKind::InvExponential => {
                Some(DampedResponse::EXPONENTIAL)
            }
            CurveKind::Bouncy => Some(DampedResponse::BOUNCY),
            CurveKind::Elastic => Some(DampedResponse::ELASTIC),
            CurveKind::Ringing => Some(DampedResponse::RINGING),
            CurveKind::Linear | CurveKind::FadeInOut => None,
        }
    }

    /// Apply the curve to a progress value, clamped to 0.0..=1.0 first.
    ///
    /// Computes in f64 internally; damped curves may return values above 1.0.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0) as f64;
        let eased = match self {
            CurveKind::Linear => t,
            CurveKind::Exponential => DampedResponse::EXPONENTIAL.sample(t),
            CurveKind::InvExponential => 1.0 - DampedResponse::EXPONENTIAL.sample(1.0 - t),
            CurveKind::Elastic => DampedResponse::ELASTIC.sample(t),
            CurveKind::Bouncy => DampedResponse::BOUNCY.sample(t),
            CurveKind::Ringing => DampedResponse::RINGING.sample(t),
            CurveKind::FadeInOut => (PI * t).sin(),
        };
        eased as f32
    }
}
