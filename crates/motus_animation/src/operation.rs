//! Operations: one timed mutation of one attribute
//!
//! An [`Operation`] is configured once (path, end value, duration, curve) and
//! started against a target. Starting resolves the attribute path again every
//! time, because the target's sub-objects may only exist by then.

use motus_core::Value;

use crate::binding::{Binding, Target};
use crate::curve::CurveKind;
use crate::error::AnimationError;
use crate::interpolator::{Interpolator, PlayState};

/// How the configured value is interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Interpolate to the value itself
    #[default]
    Absolute,
    /// Interpolate to the start value plus the configured delta
    Relative,
}

/// A single timed attribute mutation
#[derive(Clone, Debug)]
pub struct Operation {
    path: String,
    value: Value,
    mode: Mode,
    interpolator: Interpolator,
    binding: Option<Binding>,
    fault: Option<AnimationError>,
}

impl Operation {
    pub fn new(
        path: impl Into<String>,
        value: impl Into<Value>,
        mode: Mode,
        duration: f32,
        curve: CurveKind,
    ) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
            mode,
            interpolator: Interpolator::new(duration, curve),
            binding: None,
            fault: None,
        }
    }

    /// Animate `path` to an absolute value
    pub fn to(
        path: impl Into<String>,
        value: impl Into<Value>,
        duration: f32,
        curve: CurveKind,
    ) -> Self {
        Self::new(path, value, Mode::Absolute, duration, curve)
    }

    /// Animate `path` by a delta from wherever it is when started
    pub fn by(
        path: impl Into<String>,
        delta: impl Into<Value>,
        duration: f32,
        curve: CurveKind,
    ) -> Self {
        Self::new(path, delta, Mode::Relative, duration, curve)
    }

    /// Bind to `target` and begin.
    ///
    /// On any failure the operation goes inert: it records the fault, writes
    /// nothing, and reports itself completed.
    pub fn start(&mut self, target: Option<&Target>) {
        self.binding = None;
        self.fault = None;

        if let Err(err) = self.try_start(target) {
            tracing::debug!("Operation on `{}` is inert: {}", self.path, err);
            self.interpolator.stop();
            self.fault = Some(err);
        }
    }

    fn try_start(&mut self, target: Option<&Target>) -> Result<(), AnimationError> {
        let target = target.ok_or(AnimationError::TargetDropped)?;
        let binding = Binding::resolve(target, &self.path)?;
        let from = binding.read()?;

        self.interpolator
            .start(from, self.value, self.mode == Mode::Relative)?;
        // Frame zero is visible without waiting for the next tick
        binding.write(self.interpolator.current());
        self.binding = Some(binding);
        Ok(())
    }

    /// Advance by `dt` seconds and write the new value
    pub fn update(&mut self, dt: f32) {
        if self.interpolator.state() != PlayState::Running {
            return;
        }
        self.interpolator.update(dt);
        if let Some(binding) = &self.binding {
            binding.write(self.interpolator.current());
        }
    }

    /// Stop now, snapping the attribute to the end value
    pub fn stop(&mut self) {
        if self.interpolator.state() == PlayState::Stopped {
            return;
        }
        self.interpolator.stop();
        if let Some(binding) = &self.binding {
            binding.write(self.interpolator.current());
        }
    }

    pub fn pause(&mut self) {
        self.interpolator.pause();
    }

    pub fn resume(&mut self) {
        self.interpolator.resume();
    }

    /// Finished, or never able to run
    pub fn is_completed(&self) -> bool {
        self.interpolator.is_completed()
    }

    /// Same configuration with fresh run state, for replaying elsewhere
    pub fn fresh(&self) -> Operation {
        Operation::new(
            self.path.clone(),
            self.value,
            self.mode,
            self.interpolator.duration(),
            self.interpolator.curve(),
        )
    }

    /// Why the last start did not animate, if it didn't
    pub fn fault(&self) -> Option<&AnimationError> {
        self.fault.as_ref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> PlayState {
        self.interpolator.state()
    }

    pub fn interpolator(&self) -> &Interpolator {
        &self.interpolator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::target;
    use motus_core::{paths, BindError, Node, Transform, Vec2};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_start_writes_frame_zero() {
        let node = target(Node::new("n").with_position(Vec2::new(5.0, 5.0)));
        let mut op = Operation::to(paths::POSITION, Vec2::new(10.0, 5.0), 1.0, CurveKind::Linear);

        op.start(Some(&node));
        assert!(!op.is_completed());
        assert_eq!(op.interpolator().from(), Value::Vector2(Vec2::new(5.0, 5.0)));

        let slot = node.borrow().resolve(paths::POSITION).unwrap();
        assert_eq!(
            node.borrow().read(slot),
            Some(Value::Vector2(Vec2::new(5.0, 5.0)))
        );
    }

    #[test]
    fn test_update_writes_through_binding() {
        let node = target(Node::new("n"));
        let mut op = Operation::to(paths::ALPHA, 0.0, 1.0, CurveKind::Linear);
        op.start(Some(&node));

        op.update(0.5);
        op.update(0.0);
        let alpha_slot = node.borrow().resolve(paths::ALPHA).unwrap();
        let alpha = node.borrow().read(alpha_slot).and_then(|v| v.as_scalar());
        assert!((alpha.unwrap() - 0.5).abs() < 1e-6);

        op.update(0.5);
        assert!(op.is_completed());
        assert_eq!(node.borrow().read(alpha_slot), Some(Value::Scalar(0.0)));
    }

    #[test]
    fn test_relative_resolves_against_start_value() {
        let node = target(Node::new("n"));
        let mut op = Operation::by(paths::ROTATION, 90.0, 0.5, CurveKind::Linear);

        op.start(Some(&node));
        op.update(1.0);
        op.start(Some(&node));
        op.update(1.0);

        let slot = node.borrow().resolve(paths::ROTATION).unwrap();
        assert_eq!(node.borrow().read(slot), Some(Value::Scalar(180.0)));
    }

    #[test]
    fn test_bad_path_is_inert_and_completed() {
        let node = target(Node::new("n"));
        let mut op = Operation::to("Transformation.Skew", 1.0, 1.0, CurveKind::Linear);

        op.start(Some(&node));
        assert!(op.is_completed());
        assert_eq!(
            op.fault(),
            Some(&AnimationError::Bind(BindError::UnknownAttribute(
                "Skew".into()
            )))
        );
    }

    #[test]
    fn test_kind_mismatch_is_inert() {
        let node = target(Node::new("n"));
        let before = node.borrow().read(node.borrow().resolve(paths::SIZE).unwrap());
        let mut op = Operation::to(paths::SIZE, 3.0, 1.0, CurveKind::Linear);

        op.start(Some(&node));
        op.update(0.5);
        assert!(op.is_completed());
        assert!(matches!(op.fault(), Some(AnimationError::KindMismatch { .. })));

        let after = node.borrow().read(node.borrow().resolve(paths::SIZE).unwrap());
        assert_eq!(before, after);
    }

    #[test]
    fn test_missing_target_is_inert() {
        let mut op = Operation::to(paths::ALPHA, 0.0, 1.0, CurveKind::Linear);
        op.start(None);
        assert!(op.is_completed());
        assert_eq!(op.fault(), Some(&AnimationError::TargetDropped));
    }

    #[test]
    fn test_binding_resolves_on_each_start() {
        let node = Rc::new(RefCell::new(Node::detached("n")));
        let handle: Target = node.clone();
        let mut op = Operation::to(paths::SCALE, 2.0, 0.0, CurveKind::Linear);

        op.start(Some(&handle));
        assert!(matches!(op.fault(), Some(AnimationError::Bind(BindError::GroupUnavailable(_)))));

        // A transform attached later binds on the next start
        node.borrow_mut().transform = Some(Transform::default());
        op.start(Some(&handle));
        assert!(op.fault().is_none());
        assert_eq!(node.borrow().scale(), Some(2.0));
    }

    #[test]
    fn test_stop_snaps_to_end() {
        let node = target(Node::new("n"));
        let mut op = Operation::to(paths::ALTITUDE, 40.0, 2.0, CurveKind::Bouncy);
        op.start(Some(&node));
        op.update(0.1);

        op.stop();
        let slot = node.borrow().resolve(paths::ALTITUDE).unwrap();
        assert_eq!(node.borrow().read(slot), Some(Value::Scalar(40.0)));
    }

    #[test]
    fn test_fresh_copy_is_unstarted() {
        let node = target(Node::new("n"));
        let mut op = Operation::by(paths::POSITION, Vec2::new(1.0, 0.0), 1.0, CurveKind::Linear);
        op.start(Some(&node));

        let copy = op.fresh();
        assert_eq!(copy.state(), PlayState::Stopped);
        assert_eq!(copy.mode(), Mode::Relative);
        assert_eq!(copy.path(), paths::POSITION);
        assert!(copy.fault().is_none());
    }
}
