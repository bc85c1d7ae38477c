// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry in neutral units.
//!
//! These are the plain value types a shadow tree lays out with. They carry no
//! host meaning: a host backend decides how a [`Size`] dimension of
//! [`Float::INFINITY`](f64::INFINITY) ("unbounded") is spelled natively.
//!
//! Conversions to and from [`kurbo`] are provided for callers that already
//! work in kurbo's types. [`Rect`] is origin + size while [`kurbo::Rect`] is
//! two corners, so going through kurbo normalizes negative sizes.

/// Scalar used by every neutral geometry type.
pub type Float = f64;

/// A point in neutral units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: Float,
    /// Vertical coordinate.
    pub y: Float,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a point.
    #[inline]
    #[must_use]
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }
}

/// A two-dimensional size in neutral units.
///
/// A dimension of [`f64::INFINITY`] means "unbounded".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: Float,
    /// Vertical extent.
    pub height: Float,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// A size unbounded in both dimensions.
    pub const UNBOUNDED: Self = Self::new(Float::INFINITY, Float::INFINITY);

    /// Creates a size.
    #[inline]
    #[must_use]
    pub const fn new(width: Float, height: Float) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle described by its origin and size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle from an origin and a size.
    #[inline]
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from its four components.
    #[inline]
    #[must_use]
    pub const fn from_xywh(x: Float, y: Float, width: Float, height: Float) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Returns the smallest x coordinate.
    #[inline]
    #[must_use]
    pub fn min_x(&self) -> Float {
        self.origin.x
    }

    /// Returns the largest x coordinate.
    #[inline]
    #[must_use]
    pub fn max_x(&self) -> Float {
        self.origin.x + self.size.width
    }

    /// Returns the smallest y coordinate.
    #[inline]
    #[must_use]
    pub fn min_y(&self) -> Float {
        self.origin.y
    }

    /// Returns the largest y coordinate.
    #[inline]
    #[must_use]
    pub fn max_y(&self) -> Float {
        self.origin.y + self.size.height
    }
}

/// Insets from each edge of a rectangle.
///
/// Field order is left, top, right, bottom. Host types may order their fields
/// differently; codecs map by name, never by position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    /// Inset from the left edge.
    pub left: Float,
    /// Inset from the top edge.
    pub top: Float,
    /// Inset from the right edge.
    pub right: Float,
    /// Inset from the bottom edge.
    pub bottom: Float,
}

impl EdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates insets in left, top, right, bottom order.
    #[inline]
    #[must_use]
    pub const fn new(left: Float, top: Float, right: Float, bottom: Float) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates equal insets on every edge.
    #[inline]
    #[must_use]
    pub const fn uniform(inset: Float) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Shrinks `rect` by these insets.
    #[must_use]
    pub fn inset_rect(&self, rect: Rect) -> Rect {
        Rect::from_xywh(
            rect.origin.x + self.left,
            rect.origin.y + self.top,
            rect.size.width - self.left - self.right,
            rect.size.height - self.top - self.bottom,
        )
    }
}

// ---------------------------------------------------------------------------
// kurbo interop
// ---------------------------------------------------------------------------

impl From<kurbo::Point> for Point {
    #[inline]
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for kurbo::Point {
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<kurbo::Size> for Size {
    #[inline]
    fn from(s: kurbo::Size) -> Self {
        Self::new(s.width, s.height)
    }
}

impl From<Size> for kurbo::Size {
    #[inline]
    fn from(s: Size) -> Self {
        Self::new(s.width, s.height)
    }
}

impl From<kurbo::Rect> for Rect {
    #[inline]
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.origin().into(), r.size().into())
    }
}

impl From<Rect> for kurbo::Rect {
    #[inline]
    fn from(r: Rect) -> Self {
        Self::from_origin_size(kurbo::Point::from(r.origin), kurbo::Size::from(r.size))
    }
}

impl From<kurbo::Insets> for EdgeInsets {
    #[inline]
    fn from(i: kurbo::Insets) -> Self {
        Self::new(i.x0, i.y0, i.x1, i.y1)
    }
}

impl From<EdgeInsets> for kurbo::Insets {
    #[inline]
    fn from(e: EdgeInsets) -> Self {
        Self::new(e.left, e.top, e.right, e.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = Rect::from_xywh(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.max_x(), 40.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_y(), 60.0);
    }

    #[test]
    fn insets_shrink_rect() {
        let r = Rect::from_xywh(0.0, 0.0, 100.0, 50.0);
        let e = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(e.inset_rect(r), Rect::from_xywh(1.0, 2.0, 96.0, 44.0));
    }

    #[test]
    fn kurbo_rect_round_trip() {
        let r = Rect::from_xywh(5.0, 6.0, 7.0, 8.0);
        let k = kurbo::Rect::from(r);
        assert_eq!(k, kurbo::Rect::new(5.0, 6.0, 12.0, 14.0));
        assert_eq!(Rect::from(k), r);
    }

    #[test]
    fn kurbo_insets_keep_edges() {
        let e = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
        let k = kurbo::Insets::from(e);
        // kurbo stores left/top as x0/y0 and right/bottom as x1/y1.
        assert_eq!((k.x0, k.y0, k.x1, k.y1), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(EdgeInsets::from(k), e);
    }

    #[test]
    fn unbounded_is_infinite() {
        assert!(Size::UNBOUNDED.width.is_infinite());
        assert!(Size::UNBOUNDED.height.is_sign_positive());
    }
}
