// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host value types.
//!
//! Plain `#[repr(C)]` mirrors of the Core Graphics, Core Animation and UIKit
//! value types the codec produces. Their layouts match the 64-bit Apple ABI,
//! so `umbra_backend_apple` can hand them to the real frameworks field for
//! field, while everything here stays testable on any platform.

/// Core Graphics scalar. `double` on every 64-bit Apple target.
pub type CGFloat = f64;

/// The largest finite [`CGFloat`].
///
/// UIKit spells "unbounded" in a size with this value (for example the
/// fitting size passed to `sizeThatFits:`).
pub const CGFLOAT_MAX: CGFloat = f64::MAX;

/// A point in a two-dimensional coordinate system.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CGPoint {
    /// Horizontal coordinate.
    pub x: CGFloat,
    /// Vertical coordinate.
    pub y: CGFloat,
}

impl CGPoint {
    /// Creates a point.
    #[inline]
    #[must_use]
    pub const fn new(x: CGFloat, y: CGFloat) -> Self {
        Self { x, y }
    }
}

/// Width and height values.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CGSize {
    /// Horizontal extent.
    pub width: CGFloat,
    /// Vertical extent.
    pub height: CGFloat,
}

impl CGSize {
    /// Creates a size.
    #[inline]
    #[must_use]
    pub const fn new(width: CGFloat, height: CGFloat) -> Self {
        Self { width, height }
    }
}

/// Location and dimensions of a rectangle.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CGRect {
    /// Origin corner.
    pub origin: CGPoint,
    /// Extent from the origin.
    pub size: CGSize,
}

impl CGRect {
    /// Creates a rectangle.
    #[inline]
    #[must_use]
    pub const fn new(origin: CGPoint, size: CGSize) -> Self {
        Self { origin, size }
    }
}

/// Inset distances, in UIKit's top, left, bottom, right field order.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UIEdgeInsets {
    /// Inset from the top edge.
    pub top: CGFloat,
    /// Inset from the left edge.
    pub left: CGFloat,
    /// Inset from the bottom edge.
    pub bottom: CGFloat,
    /// Inset from the right edge.
    pub right: CGFloat,
}

impl UIEdgeInsets {
    /// Creates insets in top, left, bottom, right order.
    #[inline]
    #[must_use]
    pub const fn new(top: CGFloat, left: CGFloat, bottom: CGFloat, right: CGFloat) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }
}

/// Core Animation's 4×4 transform, row-vector convention.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[expect(missing_docs, reason = "matrix cells are named by row and column")]
pub struct CATransform3D {
    pub m11: CGFloat,
    pub m12: CGFloat,
    pub m13: CGFloat,
    pub m14: CGFloat,
    pub m21: CGFloat,
    pub m22: CGFloat,
    pub m23: CGFloat,
    pub m24: CGFloat,
    pub m31: CGFloat,
    pub m32: CGFloat,
    pub m33: CGFloat,
    pub m34: CGFloat,
    pub m41: CGFloat,
    pub m42: CGFloat,
    pub m43: CGFloat,
    pub m44: CGFloat,
}

impl CATransform3D {
    /// `CATransform3DIdentity`.
    pub const IDENTITY: Self = Self {
        m11: 1.0,
        m12: 0.0,
        m13: 0.0,
        m14: 0.0,
        m21: 0.0,
        m22: 1.0,
        m23: 0.0,
        m24: 0.0,
        m31: 0.0,
        m32: 0.0,
        m33: 1.0,
        m34: 0.0,
        m41: 0.0,
        m42: 0.0,
        m43: 0.0,
        m44: 1.0,
    };
}

/// UIKit accessibility trait mask.
pub type UIAccessibilityTraits = u64;

// Stock trait values as exported by UIKit.

/// `UIAccessibilityTraitNone`.
pub const UI_ACCESSIBILITY_TRAIT_NONE: UIAccessibilityTraits = 0;
/// `UIAccessibilityTraitButton`.
pub const UI_ACCESSIBILITY_TRAIT_BUTTON: UIAccessibilityTraits = 1 << 0;
/// `UIAccessibilityTraitLink`.
pub const UI_ACCESSIBILITY_TRAIT_LINK: UIAccessibilityTraits = 1 << 1;
/// `UIAccessibilityTraitImage`.
pub const UI_ACCESSIBILITY_TRAIT_IMAGE: UIAccessibilityTraits = 1 << 2;
/// `UIAccessibilityTraitSelected`.
pub const UI_ACCESSIBILITY_TRAIT_SELECTED: UIAccessibilityTraits = 1 << 3;
/// `UIAccessibilityTraitPlaysSound`.
pub const UI_ACCESSIBILITY_TRAIT_PLAYS_SOUND: UIAccessibilityTraits = 1 << 4;
/// `UIAccessibilityTraitKeyboardKey`.
pub const UI_ACCESSIBILITY_TRAIT_KEYBOARD_KEY: UIAccessibilityTraits = 1 << 5;
/// `UIAccessibilityTraitStaticText`.
pub const UI_ACCESSIBILITY_TRAIT_STATIC_TEXT: UIAccessibilityTraits = 1 << 6;
/// `UIAccessibilityTraitSummaryElement`.
pub const UI_ACCESSIBILITY_TRAIT_SUMMARY_ELEMENT: UIAccessibilityTraits = 1 << 7;
/// `UIAccessibilityTraitNotEnabled`.
pub const UI_ACCESSIBILITY_TRAIT_NOT_ENABLED: UIAccessibilityTraits = 1 << 8;
/// `UIAccessibilityTraitUpdatesFrequently`.
pub const UI_ACCESSIBILITY_TRAIT_UPDATES_FREQUENTLY: UIAccessibilityTraits = 1 << 9;
/// `UIAccessibilityTraitSearchField`.
pub const UI_ACCESSIBILITY_TRAIT_SEARCH_FIELD: UIAccessibilityTraits = 1 << 10;
/// `UIAccessibilityTraitStartsMediaSession`.
pub const UI_ACCESSIBILITY_TRAIT_STARTS_MEDIA_SESSION: UIAccessibilityTraits = 1 << 11;
/// `UIAccessibilityTraitAdjustable`.
pub const UI_ACCESSIBILITY_TRAIT_ADJUSTABLE: UIAccessibilityTraits = 1 << 12;
/// `UIAccessibilityTraitAllowsDirectInteraction`.
pub const UI_ACCESSIBILITY_TRAIT_ALLOWS_DIRECT_INTERACTION: UIAccessibilityTraits = 1 << 13;
/// `UIAccessibilityTraitCausesPageTurn`.
pub const UI_ACCESSIBILITY_TRAIT_CAUSES_PAGE_TURN: UIAccessibilityTraits = 1 << 14;
/// `UIAccessibilityTraitTabBar`.
pub const UI_ACCESSIBILITY_TRAIT_TAB_BAR: UIAccessibilityTraits = 1 << 15;
/// `UIAccessibilityTraitHeader`.
pub const UI_ACCESSIBILITY_TRAIT_HEADER: UIAccessibilityTraits = 1 << 16;

/// Extension trait for on/off switches, which UIKit has no public constant
/// for. Sits above every stock trait bit and shares no bit with them.
pub const ACCESSIBILITY_TRAIT_SWITCH: UIAccessibilityTraits = 0x0020_0000_0000_0000;
