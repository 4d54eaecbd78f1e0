//! Motus Core
//!
//! The types the animation engine and the scene graph agree on:
//!
//! - **Values**: the interpolable value kinds (scalar, 2D vector, size, color)
//! - **Attributes**: named, read/write slots exposed by a target object
//! - **Node**: a reference scene node exposing the standard slots
//!
//! # Example
//!
//! ```rust
//! use motus_core::{paths, Animatable, Node, Value, Vec2};
//!
//! let mut node = Node::new("player");
//! let slot = node.resolve(paths::POSITION).unwrap();
//!
//! node.write(slot, Value::Vector2(Vec2::new(10.0, 4.0)));
//! assert_eq!(node.read(slot), Some(Value::Vector2(Vec2::new(10.0, 4.0))));
//! ```

pub mod attributes;
pub mod error;
pub mod geometry;
pub mod node;
pub mod value;

pub use attributes::{Animatable, AttributeRegistry, Slot, SlotKey};
pub use error::{BindError, Result};
pub use geometry::{Color, Size, Vec2};
pub use node::{paths, Node, Transform};
pub use value::{Value, ValueKind};
