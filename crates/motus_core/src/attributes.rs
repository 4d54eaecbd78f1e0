//! Attribute Slots
//!
//! Targets expose their animatable surface as a tree of named slots that is
//! one level deep: top-level leaves (`"Alpha"`) and groups of leaves
//! (`"Transformation.Position"`). A group usually stands for a sub-object that
//! may not exist yet, so its presence is checked every time a path resolves.
//!
//! [`AttributeRegistry`] maps names to plain `fn` accessors for one concrete
//! type. Implementing [`Animatable`] for that type is then three one-line
//! delegations, and the animation engine only ever sees the trait object.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{BindError, Result};
use crate::value::{Value, ValueKind};

/// Reads a slot; `None` when the backing sub-object is missing
pub type Getter<T> = fn(&T) -> Option<Value>;

/// Writes a slot; returns `false` when the value was not applied
pub type Setter<T> = fn(&mut T, Value) -> bool;

/// Opaque handle to a resolved leaf slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotKey(u32);

/// A target whose attributes can be bound by path and mutated each frame
pub trait Animatable {
    /// Resolve a dot-separated path to a read/write slot
    fn resolve(&self, path: &str) -> Result<SlotKey>;

    /// Read the current value of a resolved slot
    fn read(&self, slot: SlotKey) -> Option<Value>;

    /// Write a value into a resolved slot
    fn write(&mut self, slot: SlotKey, value: Value) -> bool;
}

/// Accessor pair for one leaf
pub struct Slot<T> {
    kind: ValueKind,
    get: Option<Getter<T>>,
    set: Option<Setter<T>>,
}

impl<T> Slot<T> {
    pub fn read_write(kind: ValueKind, get: Getter<T>, set: Setter<T>) -> Self {
        Self {
            kind,
            get: Some(get),
            set: Some(set),
        }
    }

    pub fn read_only(kind: ValueKind, get: Getter<T>) -> Self {
        Self {
            kind,
            get: Some(get),
            set: None,
        }
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    fn is_read_write(&self) -> bool {
        self.get.is_some() && self.set.is_some()
    }
}

#[derive(Clone, Copy, Debug)]
enum Entry {
    Leaf(u32),
    Group(u32),
}

struct Group<T> {
    present: fn(&T) -> bool,
    leaves: FxHashMap<String, u32>,
}

/// Name → accessor table for a concrete target type
pub struct AttributeRegistry<T> {
    root: FxHashMap<String, Entry>,
    groups: Vec<Group<T>>,
    slots: Vec<Slot<T>>,
}

impl<T> Default for AttributeRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AttributeRegistry<T> {
    pub fn new() -> Self {
        Self {
            root: FxHashMap::default(),
            groups: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Declare a group; `present` reports whether the target currently has it
    pub fn group(mut self, name: &str, present: fn(&T) -> bool) -> Self {
        let index = self.groups.len() as u32;
        self.groups.push(Group {
            present,
            leaves: FxHashMap::default(),
        });
        self.root.insert(name.to_string(), Entry::Group(index));
        self
    }

    /// Register a leaf at `path`, either `"Leaf"` or `"Group.Leaf"`.
    ///
    /// A leaf under an undeclared group implicitly declares an always-present
    /// group.
    pub fn slot(mut self, path: &str, slot: Slot<T>) -> Self {
        let index = self.slots.len() as u32;
        self.slots.push(slot);

        match path.split_once('.') {
            None => {
                self.root.insert(path.to_string(), Entry::Leaf(index));
            }
            Some((group, leaf)) => {
                let existing = match self.root.get(group) {
                    Some(Entry::Group(g)) => Some(*g),
                    _ => None,
                };
                let group_index = match existing {
                    Some(g) => g,
                    None => {
                        self = self.group(group, |_| true);
                        self.groups.len() as u32 - 1
                    }
                };
                self.groups[group_index as usize]
                    .leaves
                    .insert(leaf.to_string(), index);
            }
        }
        self
    }

    /// Number of registered leaves
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Kind of a resolved slot
    pub fn kind(&self, slot: SlotKey) -> Option<ValueKind> {
        self.slots.get(slot.0 as usize).map(Slot::kind)
    }

    /// Walk `path` against `target`.
    ///
    /// All segments but the last must name groups present on `target`; the
    /// last must name a readable and writable leaf.
    pub fn resolve(&self, target: &T, path: &str) -> Result<SlotKey> {
        let segments: SmallVec<[&str; 4]> = path.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(BindError::EmptySegment(path.to_string()));
        }

        let (leaf_name, parents) = match segments.split_last() {
            Some(split) => split,
            None => return Err(BindError::EmptySegment(path.to_string())),
        };

        let leaf = match parents {
            [] => match self.root.get(*leaf_name) {
                Some(Entry::Leaf(i)) => *i,
                Some(Entry::Group(_)) => return Err(BindError::NotALeaf(leaf_name.to_string())),
                None => return Err(BindError::UnknownAttribute(leaf_name.to_string())),
            },
            [group_name, rest @ ..] => {
                let group = match self.root.get(*group_name) {
                    Some(Entry::Group(g)) => &self.groups[*g as usize],
                    Some(Entry::Leaf(_)) => {
                        return Err(BindError::NotAGroup(group_name.to_string()))
                    }
                    None => return Err(BindError::UnknownAttribute(group_name.to_string())),
                };
                if !(group.present)(target) {
                    return Err(BindError::GroupUnavailable(group_name.to_string()));
                }
                // Groups only hold leaves, so a second parent can never descend
                if let Some(nested) = rest.first() {
                    return match group.leaves.get(*nested) {
                        Some(_) => Err(BindError::NotAGroup(nested.to_string())),
                        None => Err(BindError::UnknownAttribute(nested.to_string())),
                    };
                }
                match group.leaves.get(*leaf_name) {
                    Some(i) => *i,
                    None => return Err(BindError::UnknownAttribute(leaf_name.to_string())),
                }
            }
        };

        if !self.slots[leaf as usize].is_read_write() {
            return Err(BindError::NotReadWrite(path.to_string()));
        }
        Ok(SlotKey(leaf))
    }

    pub fn read(&self, target: &T, slot: SlotKey) -> Option<Value> {
        let get = self.slots.get(slot.0 as usize)?.get?;
        get(target)
    }

    /// Write `value` if it matches the slot's kind
    pub fn write(&self, target: &mut T, slot: SlotKey, value: Value) -> bool {
        match self.slots.get(slot.0 as usize) {
            Some(Slot {
                kind,
                set: Some(set),
                ..
            }) if *kind == value.kind() => set(target, value),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;

    #[derive(Default)]
    struct Sprite {
        offset: Option<Vec2>,
        opacity: f64,
        frame: f64,
    }

    fn registry() -> AttributeRegistry<Sprite> {
        AttributeRegistry::<Sprite>::new()
            .group("Offset", |s: &Sprite| s.offset.is_some())
            .slot(
                "Offset.Value",
                Slot::read_write(
                    ValueKind::Vector2,
                    |s: &Sprite| s.offset.map(Value::Vector2),
                    |s: &mut Sprite, v| match (s.offset.as_mut(), v) {
                        (Some(o), Value::Vector2(v)) => {
                            *o = v;
                            true
                        }
                        _ => false,
                    },
                ),
            )
            .slot(
                "Opacity",
                Slot::read_write(
                    ValueKind::Scalar,
                    |s: &Sprite| Some(Value::Scalar(s.opacity)),
                    |s: &mut Sprite, v| match v {
                        Value::Scalar(v) => {
                            s.opacity = v;
                            true
                        }
                        _ => false,
                    },
                ),
            )
            .slot(
                "Frame",
                Slot::read_only(ValueKind::Scalar, |s: &Sprite| {
                    Some(Value::Scalar(s.frame))
                }),
            )
    }

    #[test]
    fn test_resolve_top_level_leaf() {
        let reg = registry();
        let mut sprite = Sprite::default();
        let slot = reg.resolve(&sprite, "Opacity").unwrap();

        assert!(reg.write(&mut sprite, slot, Value::Scalar(0.5)));
        assert_eq!(reg.read(&sprite, slot), Some(Value::Scalar(0.5)));
    }

    #[test]
    fn test_resolve_group_leaf_requires_present_group() {
        let reg = registry();
        let mut sprite = Sprite::default();

        assert_eq!(
            reg.resolve(&sprite, "Offset.Value"),
            Err(BindError::GroupUnavailable("Offset".into()))
        );

        sprite.offset = Some(Vec2::ZERO);
        let slot = reg.resolve(&sprite, "Offset.Value").unwrap();
        assert!(reg.write(&mut sprite, slot, Value::Vector2(Vec2::ONE)));
        assert_eq!(sprite.offset, Some(Vec2::ONE));
    }

    #[test]
    fn test_resolve_failures() {
        let reg = registry();
        let sprite = Sprite {
            offset: Some(Vec2::ZERO),
            ..Default::default()
        };

        assert_eq!(
            reg.resolve(&sprite, ""),
            Err(BindError::EmptySegment("".into()))
        );
        assert_eq!(
            reg.resolve(&sprite, "Offset..Value"),
            Err(BindError::EmptySegment("Offset..Value".into()))
        );
        assert_eq!(
            reg.resolve(&sprite, "Missing"),
            Err(BindError::UnknownAttribute("Missing".into()))
        );
        assert_eq!(
            reg.resolve(&sprite, "Opacity.Value"),
            Err(BindError::NotAGroup("Opacity".into()))
        );
        assert_eq!(
            reg.resolve(&sprite, "Offset"),
            Err(BindError::NotALeaf("Offset".into()))
        );
        assert_eq!(
            reg.resolve(&sprite, "Offset.Value.X"),
            Err(BindError::NotAGroup("Value".into()))
        );
        assert_eq!(
            reg.resolve(&sprite, "Frame"),
            Err(BindError::NotReadWrite("Frame".into()))
        );
    }

    #[test]
    fn test_write_rejects_wrong_kind() {
        let reg = registry();
        let mut sprite = Sprite::default();
        let slot = reg.resolve(&sprite, "Opacity").unwrap();

        assert!(!reg.write(&mut sprite, slot, Value::Vector2(Vec2::ONE)));
        assert_eq!(sprite.opacity, 0.0);
        assert_eq!(reg.kind(slot), Some(ValueKind::Scalar));
    }
}
