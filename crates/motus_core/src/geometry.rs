//! Geometry and color types carried by animatable slots

use std::ops::Add;

// ─────────────────────────────────────────────────────────────────────────────
// Vectors and Sizes
// ─────────────────────────────────────────────────────────────────────────────

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Componentwise linear blend toward `to`
    pub fn lerp(self, to: Vec2, t: f32) -> Vec2 {
        Vec2::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn lerp(self, to: Size, t: f32) -> Size {
        Size::new(
            self.width + (to.width - self.width) * t,
            self.height + (to.height - self.height) * t,
        )
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(self.width + rhs.width, self.height + rhs.height)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color with one byte per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from `0xRRGGBB`
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }

    /// Per-channel blend toward `to`, each channel rounded and clamped to a byte
    pub fn lerp(self, to: Color, t: f32) -> Color {
        let from = self.to_array();
        let to = to.to_array();
        let mut out = [0u8; 4];
        for (i, channel) in out.iter_mut().enumerate() {
            let a = from[i] as f32;
            let b = to[i] as f32;
            *channel = (a + (b - a) * t).round().clamp(0.0, 255.0) as u8;
        }
        Color::from_array(out)
    }

    /// Per-channel saturating add
    pub fn saturating_add(self, delta: Color) -> Color {
        Color::rgba(
            self.r.saturating_add(delta.r),
            self.g.saturating_add(delta.g),
            self.b.saturating_add(delta.b),
            self.a.saturating_add(delta.a),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex(0x3366FF);
        assert_eq!(c, Color::rgba(0x33, 0x66, 0xFF, 255));
    }

    #[test]
    fn test_color_lerp_clamps_overshoot() {
        let from = Color::rgba(0, 100, 200, 255);
        let to = Color::rgba(255, 200, 250, 0);

        // Damped curves overshoot past 1.0; channels must stay in range
        let c = from.lerp(to, 1.5);
        assert_eq!(c, Color::rgba(255, 250, 255, 0));

        let c = from.lerp(to, -0.5);
        assert_eq!(c, Color::rgba(0, 50, 175, 255));
    }

    #[test]
    fn test_color_saturating_add() {
        let c = Color::rgba(250, 10, 0, 128).saturating_add(Color::rgba(10, 10, 0, 200));
        assert_eq!(c, Color::rgba(255, 20, 0, 255));
    }

    #[test]
    fn test_vec2_lerp_midpoint() {
        let v = Vec2::ZERO.lerp(Vec2::new(10.0, -4.0), 0.5);
        assert_eq!(v, Vec2::new(5.0, -2.0));
    }
}
