//! Animation error types
//!
//! None of these escape the scheduler. Operations record the fault, go inert,
//! and report themselves completed so timelines never stall.

use motus_core::{BindError, ValueKind};
use thiserror::Error;

/// Why an operation could not animate its attribute
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// The attribute path did not resolve on the target
    #[error("Attribute binding failed: {0}")]
    Bind(#[from] BindError),

    /// The operation was started without a target, or the target was dropped
    #[error("Animation target is no longer alive")]
    TargetDropped,

    /// The target was already mutably borrowed by the host
    #[error("Animation target is borrowed elsewhere")]
    TargetBusy,

    /// The slot resolved but produced no value
    #[error("Attribute `{0}` has no readable value")]
    Unreadable(String),

    /// Start and end values are different kinds
    #[error("Cannot interpolate {from:?} to {to:?}")]
    KindMismatch { from: ValueKind, to: ValueKind },
}

impl AnimationError {
    /// Whether this fault came from attribute binding rather than value kinds
    pub fn is_binding(&self) -> bool {
        !matches!(self, AnimationError::KindMismatch { .. })
    }
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
