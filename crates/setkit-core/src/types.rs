//! Common types used throughout SetKit

use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

/// 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Origin point
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Convert to Vec2
    pub fn to_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for Point {
    fn from(vec: Vec2) -> Self {
        Self::new(vec.x, vec.y)
    }
}

/// 2D size representation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Square size
    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Check if the size is empty (zero area)
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Rectangle in its parent's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Empty rectangle at the origin
    pub fn zero() -> Self {
        Self::default()
    }

    /// Rectangle at the origin with the given size
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Top-left corner
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Same origin, different size
    pub fn with_size(&self, size: Size) -> Self {
        Self::new(self.x, self.y, size.width, size.height)
    }

    /// Check if point is inside rectangle
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Insets applied to each edge of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }
}

/// Horizontal/vertical adjustment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Offset {
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// RGBA color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const SYSTEM_BLUE: Color = Color::rgb(0.0, 0.478, 1.0);
    pub const SYSTEM_RED: Color = Color::rgb(1.0, 0.231, 0.188);
    pub const SYSTEM_GREEN: Color = Color::rgb(0.204, 0.78, 0.349);
    pub const SYSTEM_GRAY: Color = Color::rgb(0.557, 0.557, 0.576);

    /// Create a new color from RGBA values (0.0 to 1.0)
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new color from RGB values (0.0 to 1.0)
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from hex string
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return Err(format!("Invalid hex color: {}", hex));
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|e| e.to_string())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|e| e.to_string())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|e| e.to_string())?;
        let a = if hex.len() == 8 {
            u8::from_str_radix(&hex[6..8], 16).map_err(|e| e.to_string())?
        } else {
            255
        };

        Ok(Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        })
    }

    /// Same color with a different alpha
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// 2D affine transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    affine: Affine2,
}

impl Transform {
    /// Identity transform
    pub fn identity() -> Self {
        Self {
            affine: Affine2::IDENTITY,
        }
    }

    /// Translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            affine: Affine2::from_translation(Vec2::new(x, y)),
        }
    }

    /// Rotation transform (radians)
    pub fn rotate(angle: f32) -> Self {
        Self {
            affine: Affine2::from_angle(angle),
        }
    }

    /// Scale transform
    pub fn scale(x: f32, y: f32) -> Self {
        Self {
            affine: Affine2::from_scale(Vec2::new(x, y)),
        }
    }

    /// Apply `other` after `self`
    pub fn combine(&self, other: &Transform) -> Self {
        Self {
            affine: other.affine * self.affine,
        }
    }

    /// Transform a point
    pub fn transform_point(&self, point: Point) -> Point {
        self.affine.transform_point2(point.to_vec2()).into()
    }

    /// Check for the identity transform
    pub fn is_identity(&self) -> bool {
        self.affine == Affine2::IDENTITY
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
}

/// Font description
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
}

impl Font {
    /// Default point size of system text
    pub const SYSTEM_SIZE: f32 = 17.0;

    /// System font at the given size and weight
    pub fn system(size: f32, weight: FontWeight) -> Self {
        Self {
            family: "system".to_string(),
            size,
            weight,
        }
    }

    /// Same font, different size
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::system(Font::SYSTEM_SIZE, FontWeight::Regular)
    }
}

/// Named image asset
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub name: String,
    pub size: Size,
    pub scale: f32,
}

impl Image {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: Size::zero(),
            scale: 1.0,
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Natural,
    Left,
    Center,
    Right,
    Justified,
}

/// Layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Light or dark appearance override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserInterfaceStyle {
    #[default]
    Unspecified,
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_center_and_size() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.center(), Point::new(60.0, 45.0));
        assert_eq!(rect.size(), Size::new(100.0, 50.0));
        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(!rect.contains(Point::new(9.0, 20.0)));
    }

    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("#ff000080").unwrap();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.a - 128.0 / 255.0).abs() < f32::EPSILON);
        assert!(Color::from_hex("#abc").is_err());
    }

    #[test]
    fn test_transform_combine() {
        let t = Transform::scale(2.0, 2.0).combine(&Transform::translate(1.0, 0.0));
        assert_eq!(t.transform_point(Point::new(1.0, 1.0)), Point::new(3.0, 2.0));
        assert!(Transform::default().is_identity());
    }

    #[test]
    fn test_font_with_size_keeps_weight() {
        let font = Font::system(13.0, FontWeight::Bold).with_size(20.0);
        assert_eq!(font.size, 20.0);
        assert_eq!(font.weight, FontWeight::Bold);
    }

    #[test]
    fn test_edge_insets_helpers() {
        assert_eq!(EdgeInsets::all(4.0), EdgeInsets::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(EdgeInsets::symmetric(1.0, 2.0), EdgeInsets::new(1.0, 2.0, 1.0, 2.0));
    }
}
