//! Geometry and color value types.
//!
//! Plain `Copy` values: the button never stores geometry, it derives a
//! [`GeometrySnapshot`] from clock progress whenever the host asks for one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::animation::Lerp;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}

/// Insets from each edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self::all(0.0);

    /// Create insets from each edge.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same inset on every edge.
    #[inline]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `horizontal` on left and right, `vertical` on top and bottom.
    #[inline]
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Sum of the left and right insets.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Lerp for EdgeInsets {
    fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            left: self.left.lerp(other.left, t),
            top: self.top.lerp(other.top, t),
            right: self.right.lerp(other.right, t),
            bottom: self.bottom.lerp(other.bottom, t),
        }
    }
}

/// A non-premultiplied RGBA color with components in `[0, 1]`.
///
/// Serializes as a `#RRGGBBAA` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }

        let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Some(Self::from_rgba8(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Format as `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b),
            to_u8(self.a)
        )
    }

    /// The same color with `alpha` multiplied into its alpha channel.
    pub fn with_opacity(self, alpha: f32) -> Self {
        Self {
            a: self.a * alpha.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid hex color '{value}'"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// The derived geometry of the button at one instant.
///
/// `width` and `height` describe the button surface; `margin` surrounds it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySnapshot {
    pub width: f32,
    pub height: f32,
    pub margin: EdgeInsets,
    pub corner_radius: f32,
    pub opacity: f32,
}

impl GeometrySnapshot {
    /// Outer bounds, margin included, placed at `origin`.
    pub fn bounds(&self, origin: Point) -> Rect {
        Rect::new(
            origin.x,
            origin.y,
            self.width + self.margin.horizontal(),
            self.height + self.margin.vertical(),
        )
    }

    /// The surface rectangle inside the margin, with the outer bounds at
    /// `origin`.
    pub fn surface(&self, origin: Point) -> Rect {
        Rect::new(
            origin.x + self.margin.left,
            origin.y + self.margin.top,
            self.width,
            self.height,
        )
    }

    /// Whether anything would be drawn.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#FFFFFF"), Some(Color::WHITE));
        let translucent = Color::from_hex("00000080").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
        assert_eq!(Color::from_hex("#ÿÿÿ"), None);
    }

    #[test]
    fn test_color_hex_round_trip_through_serde() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            color: Color,
        }
        let text = toml::to_string(&Wrapper {
            color: Color::from_rgb8(0x12, 0x34, 0x56),
        })
        .unwrap();
        assert!(text.contains("#123456FF"));
        let parsed: Wrapper = toml::from_str(&text).unwrap();
        assert_eq!(parsed.color.to_hex(), "#123456FF");
    }

    #[test]
    fn test_edge_insets_lerp() {
        let from = EdgeInsets::symmetric(20.0, 10.0);
        let mid = from.lerp(EdgeInsets::ZERO, 0.5);
        assert_eq!(mid, EdgeInsets::symmetric(10.0, 5.0));
        assert_eq!(from.horizontal(), 40.0);
        assert_eq!(from.vertical(), 20.0);
    }

    #[test]
    fn test_snapshot_bounds() {
        let snapshot = GeometrySnapshot {
            width: 100.0,
            height: 40.0,
            margin: EdgeInsets::all(8.0),
            corner_radius: 20.0,
            opacity: 1.0,
        };
        assert_eq!(snapshot.bounds(Point::ZERO), Rect::new(0.0, 0.0, 116.0, 56.0));
        assert_eq!(snapshot.surface(Point::new(10.0, 0.0)), Rect::new(18.0, 8.0, 100.0, 40.0));
        assert!(snapshot.is_visible());
    }
}
