//! Timeline orchestration for multiple operations
//!
//! A [`Timeline`] runs its operations either all at once ([`Composition::Parallel`])
//! or one after another ([`Composition::Sequence`]), optionally repeating the
//! whole pass a fixed number of times or forever.

use smallvec::SmallVec;

use crate::binding::{BoundTarget, Target};
use crate::diagnostics::Diagnostics;
use crate::interpolator::PlayState;
use crate::operation::Operation;

/// How a timeline schedules its operations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Composition {
    /// Every operation runs at once; a pass ends when all have completed
    #[default]
    Parallel,
    /// One operation at a time, in order
    Sequence,
}

/// Number of passes a timeline makes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Repeat {
    Count(u32),
    Infinite,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::Count(1)
    }
}

impl From<i32> for Repeat {
    /// Zero and negative counts mean "forever"
    fn from(count: i32) -> Self {
        if count <= 0 {
            Repeat::Infinite
        } else {
            Repeat::Count(count as u32)
        }
    }
}

impl Repeat {
    pub fn is_infinite(&self) -> bool {
        matches!(self, Repeat::Infinite)
    }

    fn normalized(self) -> Self {
        match self {
            Repeat::Count(0) => Repeat::Infinite,
            other => other,
        }
    }

    fn decrement(self) -> Self {
        match self {
            Repeat::Count(n) => Repeat::Count(n.saturating_sub(1)),
            Repeat::Infinite => Repeat::Infinite,
        }
    }

    fn is_exhausted(&self) -> bool {
        matches!(self, Repeat::Count(0))
    }
}

/// An ordered set of operations bound to one target
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    operations: SmallVec<[Operation; 4]>,
    composition: Composition,
    index: usize,
    repeat: Repeat,
    remaining: Repeat,
    name: Option<String>,
    state: PlayState,
    target: Option<BoundTarget>,
    diagnostics: Diagnostics,
}

impl Timeline {
    pub fn new(composition: Composition) -> Self {
        Self {
            composition,
            ..Default::default()
        }
    }

    pub fn parallel() -> Self {
        Self::new(Composition::Parallel)
    }

    pub fn sequence() -> Self {
        Self::new(Composition::Sequence)
    }

    /// Builder: append an operation
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.push(operation);
        self
    }

    /// Builder: set the repeat count
    pub fn with_repeat(mut self, repeat: impl Into<Repeat>) -> Self {
        self.set_repeat(repeat);
        self
    }

    /// Builder: set the name used by the scheduler's saved registry
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: bind to a target
    pub fn with_target(mut self, target: &Target) -> Self {
        self.bind(target);
        self
    }

    pub fn push(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    pub fn set_repeat(&mut self, repeat: impl Into<Repeat>) {
        self.repeat = repeat.into().normalized();
        self.remaining = self.repeat;
    }

    pub fn set_composition(&mut self, composition: Composition) {
        self.composition = composition;
    }

    pub fn bind(&mut self, target: &Target) {
        self.target = Some(BoundTarget::new(target));
    }

    /// Start from the first pass.
    ///
    /// A timeline whose target is gone still starts; its operations go inert
    /// and it finishes on the next advance.
    pub fn start(&mut self) {
        self.index = 0;
        self.remaining = self.repeat;
        self.state = PlayState::Running;

        let target = self.upgrade_target();
        match self.composition {
            Composition::Parallel => {
                for i in 0..self.operations.len() {
                    self.start_operation(i, target.as_ref());
                }
            }
            Composition::Sequence => {
                if !self.operations.is_empty() {
                    self.start_operation(0, target.as_ref());
                }
            }
        }
    }

    /// Advance by `dt` seconds. Returns `true` once the timeline is done.
    pub fn advance(&mut self, dt: f32) -> bool {
        match self.state {
            PlayState::Stopped => return true,
            PlayState::Paused => return false,
            PlayState::Running => {}
        }

        if self.operations.is_empty() {
            self.finish();
            return true;
        }

        match self.composition {
            Composition::Parallel => self.advance_parallel(dt),
            Composition::Sequence => self.advance_sequence(dt),
        }
    }

    fn advance_parallel(&mut self, dt: f32) -> bool {
        for op in self.operations.iter_mut() {
            op.update(dt);
        }
        if !self.operations.iter().all(Operation::is_completed) {
            return false;
        }
        if self.complete_pass() {
            return true;
        }

        let target = self.upgrade_target();
        for i in 0..self.operations.len() {
            self.start_operation(i, target.as_ref());
        }
        false
    }

    fn advance_sequence(&mut self, dt: f32) -> bool {
        let current = &mut self.operations[self.index];
        current.update(dt);
        if !current.is_completed() {
            return false;
        }

        // Passes only end when the index wraps, never mid-sequence
        self.index = (self.index + 1) % self.operations.len();
        if self.index == 0 && self.complete_pass() {
            return true;
        }

        let target = self.upgrade_target();
        self.start_operation(self.index, target.as_ref());
        false
    }

    fn complete_pass(&mut self) -> bool {
        self.remaining = self.remaining.decrement();
        if self.remaining.is_exhausted() {
            self.finish();
            return true;
        }
        false
    }

    fn finish(&mut self) {
        self.index = 0;
        self.state = PlayState::Stopped;
    }

    fn start_operation(&mut self, index: usize, target: Option<&Target>) {
        let op = &mut self.operations[index];
        *op = op.fresh();
        op.start(target);
        self.diagnostics.record_start(op.fault());
    }

    fn upgrade_target(&self) -> Option<Target> {
        self.target.as_ref().and_then(BoundTarget::upgrade)
    }

    /// Stop immediately, snapping active operations to their end values
    pub fn stop(&mut self) {
        match self.composition {
            Composition::Parallel => {
                for op in self.operations.iter_mut() {
                    op.stop();
                }
            }
            Composition::Sequence => {
                if let Some(op) = self.operations.get_mut(self.index) {
                    op.stop();
                }
            }
        }
        self.finish();
    }

    pub fn pause(&mut self) {
        if self.state == PlayState::Running {
            self.state = PlayState::Paused;
            self.operations.iter_mut().for_each(Operation::pause);
        }
    }

    pub fn resume(&mut self) {
        if self.state == PlayState::Paused {
            self.state = PlayState::Running;
            self.operations.iter_mut().for_each(Operation::resume);
        }
    }

    /// Same configuration and target with fresh run state
    pub fn fresh(&self) -> Timeline {
        Timeline {
            operations: self.operations.iter().map(Operation::fresh).collect(),
            composition: self.composition,
            index: 0,
            repeat: self.repeat,
            remaining: self.repeat,
            name: self.name.clone(),
            state: PlayState::Stopped,
            target: self.target.clone(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Drain the fault counters collected since the last call
    pub fn take_diagnostics(&mut self) -> Diagnostics {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn composition(&self) -> Composition {
        self.composition
    }

    /// Index of the active operation in a sequence
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    /// Passes left in the current run
    pub fn remaining(&self) -> Repeat {
        self.remaining
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    pub fn target(&self) -> Option<&BoundTarget> {
        self.target.as_ref()
    }

    pub fn is_bound_to(&self, target: &Target) -> bool {
        self.target.as_ref().is_some_and(|t| t.is(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::target;
    use crate::curve::CurveKind;
    use motus_core::{paths, Node, Vec2};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn instant_steps(node: &Target, composition: Composition) -> Timeline {
        Timeline::new(composition)
            .with_operation(Operation::to(paths::ALPHA, 0.1, 0.0, CurveKind::Linear))
            .with_operation(Operation::to(paths::ALPHA, 0.2, 0.0, CurveKind::Linear))
            .with_operation(Operation::to(paths::ALPHA, 0.3, 0.0, CurveKind::Linear))
            .with_target(node)
    }

    #[test]
    fn test_sequence_runs_each_step_per_pass() {
        let node = target(Node::new("n"));
        let mut timeline = instant_steps(&node, Composition::Sequence).with_repeat(2);
        timeline.start();

        let mut ticks = 0;
        while !timeline.advance(0.016) {
            ticks += 1;
            assert!(ticks < 100, "sequence never finished");
        }

        assert_eq!(timeline.diagnostics().operations_started, 6);
        assert_eq!(ticks, 5);
        assert_eq!(timeline.state(), PlayState::Stopped);
        assert_eq!(timeline.index(), 0);
    }

    #[test]
    fn test_infinite_sequence_never_finishes() {
        let node = target(Node::new("n"));
        let mut timeline =
            instant_steps(&node, Composition::Sequence).with_repeat(Repeat::Infinite);
        timeline.start();

        for _ in 0..(100 * 3) {
            assert!(!timeline.advance(0.016));
        }
        assert!(timeline.is_running());
        assert_eq!(timeline.remaining(), Repeat::Infinite);
        assert_eq!(timeline.diagnostics().operations_started, 301);
    }

    #[test]
    fn test_parallel_waits_for_slowest() {
        let node = target(Node::new("n"));
        let mut timeline = Timeline::parallel()
            .with_operation(Operation::to(paths::ALPHA, 0.0, 1.0, CurveKind::Linear))
            .with_operation(Operation::to(paths::ALTITUDE, 10.0, 2.0, CurveKind::Linear))
            .with_target(&node);
        timeline.start();

        for _ in 0..3 {
            assert!(!timeline.advance(0.5));
        }
        assert!(timeline.operations()[0].is_completed());
        assert!(!timeline.operations()[1].is_completed());

        assert!(timeline.advance(0.5));
    }

    #[test]
    fn test_parallel_repeat_restarts_relative_moves() {
        let concrete = Rc::new(RefCell::new(Node::new("n")));
        let node: Target = concrete.clone();
        let mut timeline = Timeline::parallel()
            .with_operation(Operation::by(
                paths::POSITION,
                Vec2::new(10.0, 0.0),
                0.5,
                CurveKind::Linear,
            ))
            .with_repeat(2)
            .with_target(&node);
        timeline.start();

        let mut ticks = 0;
        while !timeline.advance(0.25) {
            ticks += 1;
            assert!(ticks < 20);
        }
        assert_eq!(concrete.borrow().position(), Some(Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn test_broken_step_is_skipped() {
        let concrete = Rc::new(RefCell::new(Node::new("n")));
        let node: Target = concrete.clone();
        let mut timeline = Timeline::sequence()
            .with_operation(Operation::to("Transformation.Skew", 1.0, 1.0, CurveKind::Linear))
            .with_operation(Operation::to(paths::ALTITUDE, 5.0, 0.0, CurveKind::Linear))
            .with_target(&node);
        timeline.start();

        assert!(!timeline.advance(0.016));
        assert_eq!(concrete.borrow().altitude, 5.0);
        assert!(timeline.advance(0.016));
        assert_eq!(timeline.diagnostics().bind_failures, 1);
    }

    #[test]
    fn test_stop_snaps_active_operation() {
        let concrete = Rc::new(RefCell::new(Node::new("n")));
        let node: Target = concrete.clone();
        let mut timeline = Timeline::sequence()
            .with_operation(Operation::to(paths::SCALE, 3.0, 1.0, CurveKind::Bouncy))
            .with_operation(Operation::to(paths::ROTATION, 45.0, 1.0, CurveKind::Linear))
            .with_target(&node);
        timeline.start();
        timeline.advance(0.2);

        timeline.stop();
        assert_eq!(timeline.state(), PlayState::Stopped);
        assert_eq!(concrete.borrow().scale(), Some(3.0));
        // Steps that never started are left alone
        assert_eq!(concrete.borrow().rotation(), Some(0.0));
    }

    #[test]
    fn test_pause_holds_progress() {
        let concrete = Rc::new(RefCell::new(Node::new("n")));
        let node: Target = concrete.clone();
        let mut timeline = Timeline::parallel()
            .with_operation(Operation::to(paths::ALTITUDE, 10.0, 1.0, CurveKind::Linear))
            .with_target(&node);
        timeline.start();
        timeline.advance(0.5);

        timeline.pause();
        assert!(!timeline.advance(5.0));
        assert_eq!(timeline.state(), PlayState::Paused);

        timeline.resume();
        assert!(!timeline.advance(0.25));
        assert!((concrete.borrow().altitude - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_timeline_finishes_immediately() {
        let mut timeline = Timeline::sequence();
        timeline.start();
        assert!(timeline.advance(0.016));
    }

    #[test]
    fn test_dropped_target_finishes() {
        let node = target(Node::new("n"));
        let mut timeline = instant_steps(&node, Composition::Parallel);
        drop(node);

        timeline.start();
        assert!(timeline.advance(0.016));
        assert_eq!(timeline.diagnostics().bind_failures, 3);
    }

    #[test]
    fn test_fresh_copy_resets_run_state() {
        let node = target(Node::new("n"));
        let mut timeline = instant_steps(&node, Composition::Sequence)
            .with_repeat(3)
            .with_name("steps");
        timeline.start();
        timeline.advance(0.016);

        let copy = timeline.fresh();
        assert_eq!(copy.state(), PlayState::Stopped);
        assert_eq!(copy.index(), 0);
        assert_eq!(copy.remaining(), Repeat::Count(3));
        assert_eq!(copy.name(), Some("steps"));
        assert!(copy.is_bound_to(&node));
        assert_eq!(copy.diagnostics().operations_started, 0);
    }

    #[test]
    fn test_repeat_from_integer() {
        assert_eq!(Repeat::from(3), Repeat::Count(3));
        assert_eq!(Repeat::from(0), Repeat::Infinite);
        assert_eq!(Repeat::from(-1), Repeat::Infinite);
        assert_eq!(Timeline::parallel().with_repeat(Repeat::Count(0)).repeat(), Repeat::Infinite);
        assert_eq!(Timeline::parallel().repeat(), Repeat::Count(1));
    }
}
