//! Rectangle geometry and the viewport-to-container coordinate mapping.
//!
//! Everything in here is pure math so it can be tested with synthetic
//! rectangles, without any rendering surface.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
///
/// Depending on context the rectangle is either in viewport coordinates
/// (as reported by the selection and container geometry queries) or in
/// container-relative coordinates (as stored on a highlight).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top edge Y coordinate
    pub top: f32,
    /// Left edge X coordinate
    pub left: f32,
    /// Width of the rectangle
    pub width: f32,
    /// Height of the rectangle
    pub height: f32,
}

impl Rect {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Check that every component is a finite number.
    ///
    /// A detached container reports NaN or infinite bounds; such a rect
    /// must never flow into a stored position.
    pub fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Width and height are both non-negative.
    pub fn has_valid_size(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    /// True when the rectangle covers a positive area.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Map a selection rectangle from viewport coordinates into coordinates
/// relative to the container's top-left corner.
///
/// Only the origin is translated; width and height carry over unchanged.
/// A selection that wraps several visual lines arrives here as one bounding
/// rectangle, so the result is a single rect spanning all of those lines.
pub fn to_relative(selection: Rect, container: Rect) -> Rect {
    Rect {
        top: selection.top - container.top,
        left: selection.left - container.left,
        width: selection.width,
        height: selection.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_relative_translates_origin() {
        let container = Rect::new(100.0, 50.0, 800.0, 600.0);
        let selection = Rect::new(150.0, 80.0, 120.0, 20.0);

        let relative = to_relative(selection, container);
        assert_eq!(relative, Rect::new(50.0, 30.0, 120.0, 20.0));
    }

    #[test]
    fn test_to_relative_keeps_size() {
        let container = Rect::new(-40.0, 12.5, 300.0, 300.0);
        let selection = Rect::new(10.0, 20.0, 33.0, 17.0);

        let relative = to_relative(selection, container);
        assert_eq!(relative.width, 33.0);
        assert_eq!(relative.height, 17.0);
        assert_eq!(relative.top, 50.0);
        assert_eq!(relative.left, 7.5);
    }

    #[test]
    fn test_to_relative_identity_container() {
        // Container at the viewport origin leaves coordinates untouched
        let selection = Rect::new(15.0, 25.0, 10.0, 5.0);
        assert_eq!(to_relative(selection, Rect::default()), selection);
    }

    #[test]
    fn test_selection_above_container_goes_negative() {
        // Scrolled content can start above the container's top edge
        let container = Rect::new(200.0, 0.0, 100.0, 100.0);
        let selection = Rect::new(180.0, 10.0, 40.0, 18.0);

        let relative = to_relative(selection, container);
        assert_eq!(relative.top, -20.0);
        assert_eq!(relative.left, 10.0);
    }

    #[test]
    fn test_degenerate_rects() {
        assert!(!Rect::new(0.0, 0.0, 0.0, 20.0).has_area());
        assert!(!Rect::new(0.0, 0.0, 20.0, 0.0).has_area());
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).has_valid_size());
        assert!(!Rect::new(0.0, 0.0, -1.0, 5.0).has_valid_size());
    }

    #[test]
    fn test_non_finite_rects() {
        assert!(Rect::new(1.0, 2.0, 3.0, 4.0).is_finite());
        assert!(!Rect::new(f32::NAN, 0.0, 10.0, 10.0).is_finite());
        assert!(!Rect::new(0.0, 0.0, f32::INFINITY, 10.0).is_finite());
    }
}
