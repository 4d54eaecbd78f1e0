//! Interpolable value kinds
//!
//! Every animatable slot holds exactly one of these kinds. Blending and
//! relative offsets are only defined between values of the same kind.

use crate::geometry::{Color, Size, Vec2};

/// The shape of an animatable value, without its payload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Scalar,
    Vector2,
    Size,
    Color,
}

/// A typed animatable value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Scalar(f64),
    Vector2(Vec2),
    Size(Size),
    Color(Color),
}

impl Value {
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Vector2(_) => ValueKind::Vector2,
            Value::Size(_) => ValueKind::Size,
            Value::Color(_) => ValueKind::Color,
        }
    }

    /// Blend toward `to` by progress `t`.
    ///
    /// `t` is not clamped: overshooting curves push past the end value.
    /// Color channels are clamped to a byte. Returns `None` when kinds differ.
    pub fn lerp(&self, to: &Value, t: f32) -> Option<Value> {
        match (self, to) {
            (Value::Scalar(a), Value::Scalar(b)) => Some(Value::Scalar(a + (b - a) * t as f64)),
            (Value::Vector2(a), Value::Vector2(b)) => Some(Value::Vector2(a.lerp(*b, t))),
            (Value::Size(a), Value::Size(b)) => Some(Value::Size(a.lerp(*b, t))),
            (Value::Color(a), Value::Color(b)) => Some(Value::Color(a.lerp(*b, t))),
            _ => None,
        }
    }

    /// Add a relative delta of the same kind
    pub fn offset(&self, delta: &Value) -> Option<Value> {
        match (self, delta) {
            (Value::Scalar(a), Value::Scalar(b)) => Some(Value::Scalar(a + b)),
            (Value::Vector2(a), Value::Vector2(b)) => Some(Value::Vector2(*a + *b)),
            (Value::Size(a), Value::Size(b)) => Some(Value::Size(*a + *b)),
            (Value::Color(a), Value::Color(b)) => Some(Value::Color(a.saturating_add(*b))),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec2(&self) -> Option<Vec2> {
        match self {
            Value::Vector2(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_size(&self) -> Option<Size> {
        match self {
            Value::Size(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(v)
    }
}

impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self {
        Value::Vector2(v)
    }
}

impl From<Size> for Value {
    fn from(v: Size) -> Self {
        Value::Size(v)
    }
}

impl From<Color> for Value {
    fn from(v: Color) -> Self {
        Value::Color(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_rejects_mixed_kinds() {
        let a = Value::Scalar(1.0);
        let b = Value::Vector2(Vec2::ONE);
        assert_eq!(a.lerp(&b, 0.5), None);
        assert_eq!(a.offset(&b), None);
    }

    #[test]
    fn test_scalar_lerp_overshoots() {
        let v = Value::Scalar(0.0).lerp(&Value::Scalar(10.0), 1.2).unwrap();
        assert!((v.as_scalar().unwrap() - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_offset_per_kind() {
        assert_eq!(
            Value::Scalar(5.0).offset(&Value::Scalar(3.0)),
            Some(Value::Scalar(8.0))
        );
        assert_eq!(
            Value::Vector2(Vec2::new(1.0, 1.0)).offset(&Value::Vector2(Vec2::new(2.0, 3.0))),
            Some(Value::Vector2(Vec2::new(3.0, 4.0)))
        );
        assert_eq!(
            Value::Size(Size::new(10.0, 20.0)).offset(&Value::Size(Size::new(5.0, -5.0))),
            Some(Value::Size(Size::new(15.0, 15.0)))
        );
        assert_eq!(
            Value::Color(Color::rgba(200, 0, 0, 255))
                .offset(&Value::Color(Color::rgba(100, 1, 0, 0))),
            Some(Value::Color(Color::rgba(255, 1, 0, 255)))
        );
    }
}
