// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry, transform, direction and string conversions.
//!
//! Every function here is a pure field mapping. The only value that changes
//! spelling on the way across is "unbounded": neutral sizes use
//! [`f64::INFINITY`], UIKit uses [`CGFLOAT_MAX`].

use std::sync::Arc;

use umbra_core::geometry::{EdgeInsets, Float, Point, Rect, Size};
use umbra_core::layout::LayoutDirection;
use umbra_core::transform::Transform;

use crate::native::{CATransform3D, CGFLOAT_MAX, CGFloat, CGPoint, CGRect, CGSize, UIEdgeInsets};

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

/// Maps a host scalar to a neutral one: [`CGFLOAT_MAX`] becomes
/// [`f64::INFINITY`], everything else is copied.
#[inline]
#[must_use]
pub fn float_from_cg_float(value: CGFloat) -> Float {
    if value == CGFLOAT_MAX {
        Float::INFINITY
    } else {
        value
    }
}

/// Maps a neutral scalar to a host one: [`f64::INFINITY`] becomes
/// [`CGFLOAT_MAX`], everything else is copied.
#[inline]
#[must_use]
pub fn cg_float_from_float(value: Float) -> CGFloat {
    if value == Float::INFINITY {
        CGFLOAT_MAX
    } else {
        value
    }
}

// ---------------------------------------------------------------------------
// Neutral → host
// ---------------------------------------------------------------------------

/// Copies a neutral point.
#[inline]
#[must_use]
pub fn cg_point_from_point(point: Point) -> CGPoint {
    CGPoint::new(point.x, point.y)
}

/// Copies a neutral size, spelling unbounded dimensions as [`CGFLOAT_MAX`].
#[inline]
#[must_use]
pub fn cg_size_from_size(size: Size) -> CGSize {
    CGSize::new(cg_float_from_float(size.width), cg_float_from_float(size.height))
}

/// Copies a neutral rectangle.
#[inline]
#[must_use]
pub fn cg_rect_from_rect(rect: Rect) -> CGRect {
    CGRect::new(cg_point_from_point(rect.origin), cg_size_from_size(rect.size))
}

/// Builds UIKit insets (top, left, bottom, right) from neutral insets.
#[inline]
#[must_use]
pub fn ui_edge_insets_from_edge_insets(insets: EdgeInsets) -> UIEdgeInsets {
    UIEdgeInsets::new(insets.top, insets.left, insets.bottom, insets.right)
}

/// Copies the sixteen matrix cells positionally into `m11..m44`.
#[must_use]
pub fn ca_transform_3d_from_transform(transform: &Transform) -> CATransform3D {
    let m = &transform.matrix;
    CATransform3D {
        m11: m[0],
        m12: m[1],
        m13: m[2],
        m14: m[3],
        m21: m[4],
        m22: m[5],
        m23: m[6],
        m24: m[7],
        m31: m[8],
        m32: m[9],
        m33: m[10],
        m34: m[11],
        m41: m[12],
        m42: m[13],
        m43: m[14],
        m44: m[15],
    }
}

// ---------------------------------------------------------------------------
// Host → neutral
// ---------------------------------------------------------------------------

/// Copies a host point.
#[inline]
#[must_use]
pub fn point_from_cg_point(point: CGPoint) -> Point {
    Point::new(point.x, point.y)
}

/// Copies a host size, reading [`CGFLOAT_MAX`] as unbounded.
#[inline]
#[must_use]
pub fn size_from_cg_size(size: CGSize) -> Size {
    Size::new(float_from_cg_float(size.width), float_from_cg_float(size.height))
}

/// Copies a host rectangle.
#[inline]
#[must_use]
pub fn rect_from_cg_rect(rect: CGRect) -> Rect {
    Rect::new(point_from_cg_point(rect.origin), size_from_cg_size(rect.size))
}

/// Builds neutral insets (left, top, right, bottom) from UIKit insets.
#[inline]
#[must_use]
pub fn edge_insets_from_ui_edge_insets(insets: UIEdgeInsets) -> EdgeInsets {
    EdgeInsets::new(insets.left, insets.top, insets.right, insets.bottom)
}

/// Copies `m11..m44` positionally into the sixteen matrix cells.
#[must_use]
pub fn transform_from_ca_transform_3d(t: &CATransform3D) -> Transform {
    Transform::from_matrix([
        t.m11, t.m12, t.m13, t.m14, //
        t.m21, t.m22, t.m23, t.m24, //
        t.m31, t.m32, t.m33, t.m34, //
        t.m41, t.m42, t.m43, t.m44,
    ])
}

/// Maps the host's right-to-left flag to a layout direction.
#[inline]
#[must_use]
pub fn layout_direction(is_rtl: bool) -> LayoutDirection {
    if is_rtl {
        LayoutDirection::RightToLeft
    } else {
        LayoutDirection::LeftToRight
    }
}

// ---------------------------------------------------------------------------
// Strings
// ---------------------------------------------------------------------------

/// An immutable host string object.
pub type NSString = Arc<str>;

/// Creates a host string.
#[must_use]
pub fn ns_string_from_string(string: &str) -> NSString {
    Arc::from(string)
}

/// Creates a host string, or `None` (nil) if `string` is empty.
#[must_use]
pub fn ns_string_from_string_nil_if_empty(string: &str) -> Option<NSString> {
    (!string.is_empty()).then(|| ns_string_from_string(string))
}

/// Copies a host string, reading nil as the empty string.
#[must_use]
pub fn string_from_ns_string(string: Option<&NSString>) -> String {
    string.map(|s| String::from(&**s)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_round_trip_is_exact() {
        for p in [
            Point::new(0.0, 0.0),
            Point::new(-1.5, 2.25),
            Point::new(f64::MIN_POSITIVE, 1e300),
        ] {
            let back = point_from_cg_point(cg_point_from_point(p));
            assert_eq!(back.x.to_bits(), p.x.to_bits());
            assert_eq!(back.y.to_bits(), p.y.to_bits());
        }
    }

    #[test]
    fn size_and_rect_round_trip() {
        let s = Size::new(320.0, 480.5);
        assert_eq!(size_from_cg_size(cg_size_from_size(s)), s);
        let r = Rect::from_xywh(-3.0, 4.0, 100.0, 0.0);
        assert_eq!(rect_from_cg_rect(cg_rect_from_rect(r)), r);
    }

    #[test]
    fn unbounded_maps_to_cgfloat_max_and_back() {
        let s = Size::new(f64::INFINITY, 10.0);
        let native = cg_size_from_size(s);
        assert_eq!(native.width, CGFLOAT_MAX);
        assert_eq!(native.height, 10.0);
        let back = size_from_cg_size(native);
        assert_eq!(back, s);
        // A second trip lands on the same values.
        assert_eq!(cg_size_from_size(back), native);
        assert_eq!(size_from_cg_size(cg_size_from_size(back)), s);
    }

    #[test]
    fn host_sentinel_reads_as_unbounded() {
        let r = rect_from_cg_rect(CGRect::new(
            CGPoint::new(1.0, 2.0),
            CGSize::new(CGFLOAT_MAX, CGFLOAT_MAX),
        ));
        assert_eq!(r.size, Size::UNBOUNDED);
        assert_eq!(r.origin, Point::new(1.0, 2.0));
    }

    #[test]
    fn negative_infinity_is_copied() {
        assert_eq!(cg_float_from_float(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(float_from_cg_float(-CGFLOAT_MAX), -CGFLOAT_MAX);
    }

    #[test]
    fn edge_insets_field_orders() {
        let neutral = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
        let native = ui_edge_insets_from_edge_insets(neutral);
        // UIKit order: top, left, bottom, right.
        assert_eq!(
            [native.top, native.left, native.bottom, native.right],
            [2.0, 1.0, 4.0, 3.0]
        );

        let native = UIEdgeInsets::new(10.0, 20.0, 30.0, 40.0);
        let neutral = edge_insets_from_ui_edge_insets(native);
        // Neutral order: left, top, right, bottom.
        assert_eq!(
            [neutral.left, neutral.top, neutral.right, neutral.bottom],
            [20.0, 10.0, 40.0, 30.0]
        );
        assert_eq!(ui_edge_insets_from_edge_insets(neutral), native);
    }

    #[test]
    fn transform_cells_are_positional() {
        let mut cells = [0.0; 16];
        for (i, c) in cells.iter_mut().enumerate() {
            *c = i as f64 + 0.5;
        }
        let ca = ca_transform_3d_from_transform(&Transform::from_matrix(cells));
        assert_eq!(ca.m11, 0.5);
        assert_eq!(ca.m14, 3.5);
        assert_eq!(ca.m21, 4.5);
        assert_eq!(ca.m41, 12.5);
        assert_eq!(ca.m44, 15.5);
        assert_eq!(transform_from_ca_transform_3d(&ca).matrix, cells);
    }

    #[test]
    fn identity_and_translation_line_up_with_core_animation() {
        assert_eq!(
            ca_transform_3d_from_transform(&Transform::IDENTITY),
            CATransform3D::IDENTITY
        );
        let ca = ca_transform_3d_from_transform(&Transform::translate(7.0, 8.0, 9.0));
        assert_eq!((ca.m41, ca.m42, ca.m43), (7.0, 8.0, 9.0));
    }

    #[test]
    fn non_finite_cells_are_not_normalized() {
        let mut t = Transform::IDENTITY;
        t.matrix[5] = f64::INFINITY;
        assert_eq!(ca_transform_3d_from_transform(&t).m22, f64::INFINITY);
    }

    #[test]
    fn layout_direction_from_flag() {
        assert_eq!(layout_direction(true), LayoutDirection::RightToLeft);
        assert_eq!(layout_direction(false), LayoutDirection::LeftToRight);
        assert!(layout_direction(true).is_rtl());
    }

    #[test]
    fn strings() {
        assert_eq!(&*ns_string_from_string("héllo"), "héllo");
        assert!(ns_string_from_string_nil_if_empty("").is_none());
        assert_eq!(
            ns_string_from_string_nil_if_empty("x").as_deref(),
            Some("x")
        );
        assert_eq!(string_from_ns_string(None), "");
        let s = ns_string_from_string("abc");
        assert_eq!(string_from_ns_string(Some(&s)), "abc");
    }
}
