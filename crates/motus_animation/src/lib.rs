//! Motus Animation System
//!
//! Timed attribute mutations, composed into timelines and driven once per frame.
//!
//! # Features
//!
//! - **Damped Curves**: Closed-form damped-oscillator easing (bouncy, elastic, ringing)
//! - **Operations**: Tween any named attribute of a target, absolutely or by a delta
//! - **Timelines**: Parallel or sequential composition with counted or infinite repeat
//! - **Scheduler**: Named templates, replay on any target, one running instance per name
//! - **Forgiving**: Bad paths and mismatched kinds go inert instead of failing the frame
//!
//! # Example
//!
//! ```rust
//! use motus_animation::{target, CurveKind, Operation, Scheduler, Timeline};
//! use motus_core::{paths, Node, Vec2};
//!
//! let node = target(Node::new("logo"));
//! let mut scheduler = Scheduler::new();
//!
//! scheduler.save(
//!     "intro",
//!     Timeline::parallel()
//!         .with_operation(Operation::to(
//!             paths::POSITION,
//!             Vec2::new(100.0, 0.0),
//!             1.0,
//!             CurveKind::Linear,
//!         ))
//!         .with_operation(Operation::to(paths::SCALE, 2.0, 1.0, CurveKind::Linear)),
//! );
//! scheduler.run_saved(&node, "intro");
//!
//! for _ in 0..10 {
//!     scheduler.update(0.1);
//! }
//! assert_eq!(scheduler.running_count(), 0);
//! ```

pub mod binding;
pub mod builder;
pub mod config;
pub mod curve;
pub mod diagnostics;
pub mod error;
pub mod interpolator;
pub mod operation;
pub mod presets;
pub mod scheduler;
pub mod timeline;

pub use binding::{target, Binding, BoundTarget, Target, TargetKey, WeakTarget};
pub use builder::Animator;
pub use config::SchedulerConfig;
pub use curve::{CurveKind, DampedResponse};
pub use diagnostics::Diagnostics;
pub use error::{AnimationError, Result};
pub use interpolator::{Interpolator, PlayState};
pub use operation::{Mode, Operation};
pub use presets::Preset;
pub use scheduler::{Scheduler, TimelineId};
pub use timeline::{Composition, Repeat, Timeline};
