//! Fluent animation builder
//!
//! ```rust
//! use motus_animation::{target, CurveKind, Scheduler};
//! use motus_core::{Node, Vec2};
//!
//! let node = target(Node::new("player"));
//! let mut scheduler = Scheduler::new();
//!
//! scheduler
//!     .animate(&node)
//!     .sequence()
//!     .move_to(Vec2::new(100.0, 0.0), 0.5, CurveKind::Exponential)
//!     .fade_to(0.0, 0.25, CurveKind::Linear)
//!     .run();
//!
//! assert_eq!(scheduler.running_count(), 1);
//! ```

use motus_core::{paths, Color, Size, Value, Vec2};

use crate::binding::Target;
use crate::curve::CurveKind;
use crate::operation::Operation;
use crate::scheduler::{Scheduler, TimelineId};
use crate::timeline::{Composition, Repeat, Timeline};

/// Accumulates operations into the pending timeline of one target.
///
/// Dropping an `Animator` without a terminal call keeps the pending timeline;
/// the next [`Scheduler::animate`] on the same target continues it.
pub struct Animator<'a> {
    scheduler: &'a mut Scheduler,
    target: Target,
}

impl<'a> Animator<'a> {
    pub(crate) fn new(scheduler: &'a mut Scheduler, target: &Target) -> Self {
        Self {
            scheduler,
            target: target.clone(),
        }
    }

    fn pending(&mut self) -> &mut Timeline {
        self.scheduler.pending_mut(&self.target)
    }

    /// Append a prepared operation
    pub fn with(mut self, operation: Operation) -> Self {
        self.pending().push(operation);
        self
    }

    /// Animate any attribute path to an absolute value
    pub fn to(self, path: &str, value: impl Into<Value>, duration: f32, curve: CurveKind) -> Self {
        self.with(Operation::to(path, value, duration, curve))
    }

    /// Animate any attribute path by a delta
    pub fn by(self, path: &str, delta: impl Into<Value>, duration: f32, curve: CurveKind) -> Self {
        self.with(Operation::by(path, delta, duration, curve))
    }

    pub fn move_to(self, position: Vec2, duration: f32, curve: CurveKind) -> Self {
        self.to(paths::POSITION, position, duration, curve)
    }

    pub fn move_by(self, delta: Vec2, duration: f32, curve: CurveKind) -> Self {
        self.by(paths::POSITION, delta, duration, curve)
    }

    pub fn scale_to(self, scale: f64, duration: f32, curve: CurveKind) -> Self {
        self.to(paths::SCALE, scale, duration, curve)
    }

    pub fn scale_by(self, delta: f64, duration: f32, curve: CurveKind) -> Self {
        self.by(paths::SCALE, delta, duration, curve)
    }

    /// Rotation in degrees
    pub fn rotate_to(self, degrees: f64, duration: f32, curve: CurveKind) -> Self {
        self.to(paths::ROTATION, degrees, duration, curve)
    }

    pub fn rotate_by(self, degrees: f64, duration: f32, curve: CurveKind) -> Self {
        self.by(paths::ROTATION, degrees, duration, curve)
    }

    pub fn resize_to(self, size: Size, duration: f32, curve: CurveKind) -> Self {
        self.to(paths::SIZE, size, duration, curve)
    }

    pub fn rise_to(self, altitude: f64, duration: f32, curve: CurveKind) -> Self {
        self.to(paths::ALTITUDE, altitude, duration, curve)
    }

    pub fn tint_to(self, color: Color, duration: f32, curve: CurveKind) -> Self {
        self.to(paths::COLOR, color, duration, curve)
    }

    pub fn fade_to(self, alpha: f64, duration: f32, curve: CurveKind) -> Self {
        self.to(paths::ALPHA, alpha, duration, curve)
    }

    /// Run operations one after another
    pub fn sequence(mut self) -> Self {
        self.pending().set_composition(Composition::Sequence);
        self
    }

    /// Run operations together (the default)
    pub fn parallel(mut self) -> Self {
        self.pending().set_composition(Composition::Parallel);
        self
    }

    pub fn repeat(mut self, repeat: impl Into<Repeat>) -> Self {
        self.pending().set_repeat(repeat);
        self
    }

    /// Commit and start the pending timeline
    pub fn run(mut self) -> TimelineId {
        let timeline = self.commit();
        self.scheduler.run(timeline)
    }

    /// Commit and start under `name`, replacing a running instance of the
    /// same name on this target
    pub fn run_as(mut self, name: &str) -> TimelineId {
        let timeline = self.commit().with_name(name);
        self.scheduler.run(timeline)
    }

    /// Commit the pending timeline as a saved template
    pub fn save_as(mut self, name: &str) {
        let timeline = self.commit();
        self.scheduler.save(name, timeline);
    }

    /// Throw the pending timeline away
    pub fn discard(self) {
        self.scheduler.take_pending(&self.target);
    }

    fn commit(&mut self) -> Timeline {
        // Nothing was added yet: commit an empty timeline, which finishes
        // on its first update
        self.scheduler
            .take_pending(&self.target)
            .unwrap_or_else(|| Timeline::parallel().with_target(&self.target))
    }
}
