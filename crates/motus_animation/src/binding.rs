//! Attribute Binding
//!
//! Connects an operation to one slot on a live target. Targets are shared
//! scene objects (`Rc<RefCell<dyn Animatable>>`); bindings only keep a weak
//! reference, so the engine never extends a node's lifetime.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use motus_core::{Animatable, SlotKey, Value};

use crate::error::{AnimationError, Result};

/// Shared handle to an animatable scene object
pub type Target = Rc<RefCell<dyn Animatable>>;

/// Weak counterpart of [`Target`]
pub type WeakTarget = Weak<RefCell<dyn Animatable>>;

/// Identity of a target, stable while the target is alive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetKey(usize);

impl TargetKey {
    pub fn of(target: &Target) -> Self {
        TargetKey(Rc::as_ptr(target).cast::<()>() as usize)
    }
}

/// Wrap a concrete animatable value into a [`Target`]
pub fn target<T: Animatable + 'static>(value: T) -> Target {
    Rc::new(RefCell::new(value))
}

/// A target remembered by identity without keeping it alive
#[derive(Clone)]
pub struct BoundTarget {
    key: TargetKey,
    handle: WeakTarget,
}

impl BoundTarget {
    pub fn new(target: &Target) -> Self {
        Self {
            key: TargetKey::of(target),
            handle: Rc::downgrade(target),
        }
    }

    pub fn key(&self) -> TargetKey {
        self.key
    }

    pub fn upgrade(&self) -> Option<Target> {
        self.handle.upgrade()
    }

    pub fn is(&self, target: &Target) -> bool {
        self.key == TargetKey::of(target)
    }
}

impl fmt::Debug for BoundTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundTarget")
            .field("key", &self.key)
            .field("alive", &(self.handle.strong_count() > 0))
            .finish()
    }
}

/// A resolved read/write slot on a target
#[derive(Clone)]
pub struct Binding {
    target: WeakTarget,
    slot: SlotKey,
    path: String,
}

impl Binding {
    /// Resolve `path` against the target's current shape
    pub fn resolve(target: &Target, path: &str) -> Result<Self> {
        let slot = target
            .try_borrow()
            .map_err(|_| AnimationError::TargetBusy)?
            .resolve(path)?;

        Ok(Self {
            target: Rc::downgrade(target),
            slot,
            path: path.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn slot(&self) -> SlotKey {
        self.slot
    }

    pub fn read(&self) -> Result<Value> {
        let target = self.target.upgrade().ok_or(AnimationError::TargetDropped)?;
        let value = target
            .try_borrow()
            .map_err(|_| AnimationError::TargetBusy)?
            .read(self.slot);
        value.ok_or_else(|| AnimationError::Unreadable(self.path.clone()))
    }

    /// Best-effort write; a dropped or busy target is skipped
    pub fn write(&self, value: Value) -> bool {
        let Some(target) = self.target.upgrade() else {
            return false;
        };
        let Ok(mut target) = target.try_borrow_mut() else {
            tracing::trace!("Skipping write to `{}`: target is borrowed", self.path);
            return false;
        };
        target.write(self.slot, value)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("path", &self.path)
            .field("slot", &self.slot)
            .finish()
    }
}
