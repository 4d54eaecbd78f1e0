//! Reference Scene Node
//!
//! A minimal scene node exposing the attribute slots animations target in
//! practice. Hosts with their own node types implement [`Animatable`] the same
//! way: build an [`AttributeRegistry`] once and delegate to it.

use std::sync::OnceLock;

use crate::attributes::{Animatable, AttributeRegistry, Slot, SlotKey};
use crate::error::Result;
use crate::geometry::{Color, Size, Vec2};
use crate::value::{Value, ValueKind};

/// Attribute paths understood by [`Node`]
pub mod paths {
    pub const TRANSFORMATION: &str = "Transformation";
    pub const POSITION: &str = "Transformation.Position";
    pub const SCALE: &str = "Transformation.Scale";
    pub const ROTATION: &str = "Transformation.Rotation";
    pub const ANCHOR: &str = "Transformation.Anchor";
    pub const SIZE: &str = "Size";
    pub const ALTITUDE: &str = "Altitude";
    pub const COLOR: &str = "Color";
    pub const ALPHA: &str = "Alpha";
}

/// Local transform of a node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub scale: f64,
    /// Rotation in degrees
    pub rotation: f64,
    pub anchor: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
            anchor: Vec2::new(0.5, 0.5),
        }
    }
}

/// A scene node with a lazily attached transform
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    pub transform: Option<Transform>,
    pub size: Size,
    pub altitude: f64,
    pub color: Color,
    pub alpha: f64,
}

impl Node {
    /// Create a node with an identity transform
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            transform: Some(Transform::default()),
            ..Self::detached(name)
        }
    }

    /// Create a node that has no transform attached yet
    pub fn detached(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: None,
            size: Size::ZERO,
            altitude: 0.0,
            color: Color::WHITE,
            alpha: 1.0,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.transform.get_or_insert_with(Transform::default).position = position;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn position(&self) -> Option<Vec2> {
        self.transform.map(|t| t.position)
    }

    pub fn scale(&self) -> Option<f64> {
        self.transform.map(|t| t.scale)
    }

    pub fn rotation(&self) -> Option<f64> {
        self.transform.map(|t| t.rotation)
    }

    /// The attribute table shared by every node
    pub fn registry() -> &'static AttributeRegistry<Node> {
        static REGISTRY: OnceLock<AttributeRegistry<Node>> = OnceLock::new();
        REGISTRY.get_or_init(build_registry)
    }
}

impl Animatable for Node {
    fn resolve(&self, path: &str) -> Result<SlotKey> {
        Node::registry().resolve(self, path)
    }

    fn read(&self, slot: SlotKey) -> Option<Value> {
        Node::registry().read(self, slot)
    }

    fn write(&mut self, slot: SlotKey, value: Value) -> bool {
        Node::registry().write(self, slot, value)
    }
}

type NodeSlot = Slot<Node>;

fn build_registry() -> AttributeRegistry<Node> {
    AttributeRegistry::<Node>::new()
        .group(paths::TRANSFORMATION, has_transform)
        .slot(
            paths::POSITION,
            NodeSlot::read_write(ValueKind::Vector2, get_position, set_position),
        )
        .slot(
            paths::SCALE,
            NodeSlot::read_write(ValueKind::Scalar, get_scale, set_scale),
        )
        .slot(
            paths::ROTATION,
            NodeSlot::read_write(ValueKind::Scalar, get_rotation, set_rotation),
        )
        .slot(
            paths::ANCHOR,
            NodeSlot::read_write(ValueKind::Vector2, get_anchor, set_anchor),
        )
        .slot(
            paths::SIZE,
            NodeSlot::read_write(ValueKind::Size, get_size, set_size),
        )
        .slot(
            paths::ALTITUDE,
            NodeSlot::read_write(ValueKind::Scalar, get_altitude, set_altitude),
        )
        .slot(
            paths::COLOR,
            NodeSlot::read_write(ValueKind::Color, get_color, set_color),
        )
        .slot(
            paths::ALPHA,
            NodeSlot::read_write(ValueKind::Scalar, get_alpha, set_alpha),
        )
}

fn has_transform(node: &Node) -> bool {
    node.transform.is_some()
}

fn get_position(node: &Node) -> Option<Value> {
    node.transform.map(|t| Value::Vector2(t.position))
}

fn set_position(node: &mut Node, value: Value) -> bool {
    match (node.transform.as_mut(), value.as_vec2()) {
        (Some(t), Some(v)) => {
            t.position = v;
            true
        }
        _ => false,
    }
}

fn get_scale(node: &Node) -> Option<Value> {
    node.transform.map(|t| Value::Scalar(t.scale))
}

fn set_scale(node: &mut Node, value: Value) -> bool {
    match (node.transform.as_mut(), value.as_scalar()) {
        (Some(t), Some(v)) => {
            t.scale = v;
            true
        }
        _ => false,
    }
}

fn get_rotation(node: &Node) -> Option<Value> {
    node.transform.map(|t| Value::Scalar(t.rotation))
}

fn set_rotation(node: &mut Node, value: Value) -> bool {
    match (node.transform.as_mut(), value.as_scalar()) {
        (Some(t), Some(v)) => {
            t.rotation = v;
            true
        }
        _ => false,
    }
}

fn get_anchor(node: &Node) -> Option<Value> {
    node.transform.map(|t| Value::Vector2(t.anchor))
}

fn set_anchor(node: &mut Node, value: Value) -> bool {
    match (node.transform.as_mut(), value.as_vec2()) {
        (Some(t), Some(v)) => {
            t.anchor = v;
            true
        }
        _ => false,
    }
}

fn get_size(node: &Node) -> Option<Value> {
    Some(Value::Size(node.size))
}

fn set_size(node: &mut Node, value: Value) -> bool {
    match value.as_size() {
        Some(v) => {
            node.size = v;
            true
        }
        None => false,
    }
}

fn get_altitude(node: &Node) -> Option<Value> {
    Some(Value::Scalar(node.altitude))
}

fn set_altitude(node: &mut Node, value: Value) -> bool {
    match value.as_scalar() {
        Some(v) => {
            node.altitude = v;
            true
        }
        None => false,
    }
}

fn get_color(node: &Node) -> Option<Value> {
    Some(Value::Color(node.color))
}

fn set_color(node: &mut Node, value: Value) -> bool {
    match value.as_color() {
        Some(v) => {
            node.color = v;
            true
        }
        None => false,
    }
}

fn get_alpha(node: &Node) -> Option<Value> {
    Some(Value::Scalar(node.alpha))
}

fn set_alpha(node: &mut Node, value: Value) -> bool {
    match value.as_scalar() {
        Some(v) => {
            node.alpha = v;
            true
        }
        None => false,
    }
}
