//! Corner shape descriptors consumed by corner-rounding setters

use crate::types::Size;
use bitflags::bitflags;

bitflags! {
    /// Which corners of a layer a corner radius applies to.
    ///
    /// Naming follows layer coordinates: `MIN_Y` is the top edge.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CornerMask: u8 {
        const MIN_X_MIN_Y = 1 << 0;
        const MAX_X_MIN_Y = 1 << 1;
        const MIN_X_MAX_Y = 1 << 2;
        const MAX_X_MAX_Y = 1 << 3;

        const TOP_LEFT = Self::MIN_X_MIN_Y.bits();
        const TOP_RIGHT = Self::MAX_X_MIN_Y.bits();
        const BOTTOM_LEFT = Self::MIN_X_MAX_Y.bits();
        const BOTTOM_RIGHT = Self::MAX_X_MAX_Y.bits();

        const TOP = Self::MIN_X_MIN_Y.bits() | Self::MAX_X_MIN_Y.bits();
        const BOTTOM = Self::MIN_X_MAX_Y.bits() | Self::MAX_X_MAX_Y.bits();
        const LEFT = Self::MIN_X_MIN_Y.bits() | Self::MIN_X_MAX_Y.bits();
        const RIGHT = Self::MAX_X_MIN_Y.bits() | Self::MAX_X_MAX_Y.bits();
    }
}

impl Default for CornerMask {
    fn default() -> Self {
        CornerMask::all()
    }
}

/// Shape applied to a view's corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewShape {
    /// Radius of half the view's height.
    ///
    /// Only a circle when the view is square, otherwise a capsule. Apply after
    /// the view has its final bounds.
    Circle,
    /// Every corner rounded by the radius.
    RoundedRect(f32),
    /// Only `corners` rounded by `radius`.
    RoundedRectWith { radius: f32, corners: CornerMask },
}

/// Radius and mask a [`ViewShape`] resolves to for given bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerStyle {
    pub radius: f32,
    /// `None` leaves the layer's current mask in place.
    pub corners: Option<CornerMask>,
}

impl ViewShape {
    /// Resolve against the view's measured size.
    ///
    /// Values are not clamped; a negative radius resolves to itself.
    pub fn resolve(&self, bounds: Size) -> CornerStyle {
        match *self {
            ViewShape::Circle => CornerStyle {
                radius: bounds.height * 0.5,
                corners: None,
            },
            ViewShape::RoundedRect(radius) => CornerStyle {
                radius,
                corners: Some(CornerMask::all()),
            },
            ViewShape::RoundedRectWith { radius, corners } => CornerStyle {
                radius,
                corners: Some(corners),
            },
        }
    }

    /// Shorthand for [`ViewShape::RoundedRectWith`].
    pub fn rounded(radius: f32, corners: CornerMask) -> Self {
        ViewShape::RoundedRectWith { radius, corners }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_uses_half_height() {
        let style = ViewShape::Circle.resolve(Size::new(100.0, 100.0));
        assert_eq!(style.radius, 50.0);
        assert_eq!(style.corners, None);
    }

    #[test]
    fn test_circle_on_wide_bounds_is_capsule() {
        let style = ViewShape::Circle.resolve(Size::new(300.0, 40.0));
        assert_eq!(style.radius, 20.0);
    }

    #[test]
    fn test_rounded_rect_ignores_size() {
        for size in [Size::new(100.0, 100.0), Size::new(3.0, 900.0), Size::zero()] {
            assert_eq!(ViewShape::RoundedRect(12.0).resolve(size).radius, 12.0);
        }
    }

    #[test]
    fn test_corner_subset_is_kept() {
        let shape = ViewShape::rounded(8.0, CornerMask::TOP_RIGHT | CornerMask::BOTTOM_RIGHT);
        let style = shape.resolve(Size::new(10.0, 10.0));
        assert_eq!(style.radius, 8.0);
        assert_eq!(style.corners, Some(CornerMask::RIGHT));
    }

    #[test]
    fn test_rounded_rect_masks_every_corner() {
        let style = ViewShape::RoundedRect(6.0).resolve(Size::zero());
        assert_eq!(style.corners, Some(CornerMask::all()));
    }

    #[test]
    fn test_negative_radius_passes_through() {
        assert_eq!(ViewShape::RoundedRect(-4.0).resolve(Size::zero()).radius, -4.0);
    }

    #[test]
    fn test_edge_aliases() {
        assert_eq!(CornerMask::TOP | CornerMask::BOTTOM, CornerMask::all());
        assert_eq!(CornerMask::LEFT, CornerMask::TOP_LEFT | CornerMask::BOTTOM_LEFT);
    }
}
