// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mirror ↔ framework conversions.

use objc2::rc::Retained;
use objc2_core_foundation::{CFRetained, CFString, CGPoint, CGRect, CGSize};
use objc2_core_graphics::{CGColor, kCGColorBlack, kCGColorClear, kCGColorWhite};
use objc2_foundation::NSString;
use objc2_quartz_core::CATransform3D;

use umbra_backend_uikit::color::{NativeColor, RetainedCgColor};
use umbra_backend_uikit::native;

/// Converts a mirrored point.
#[must_use]
pub fn cg_point(point: native::CGPoint) -> CGPoint {
    CGPoint::new(point.x, point.y)
}

/// Converts a mirrored size.
#[must_use]
pub fn cg_size(size: native::CGSize) -> CGSize {
    CGSize::new(size.width, size.height)
}

/// Converts a mirrored rectangle.
#[must_use]
pub fn cg_rect(rect: native::CGRect) -> CGRect {
    CGRect::new(cg_point(rect.origin), cg_size(rect.size))
}

/// Converts a framework rectangle back to the mirror.
#[must_use]
pub fn native_cg_rect(rect: CGRect) -> native::CGRect {
    native::CGRect::new(
        native::CGPoint::new(rect.origin.x, rect.origin.y),
        native::CGSize::new(rect.size.width, rect.size.height),
    )
}

/// Converts a mirrored transform.
#[must_use]
pub fn ca_transform_3d(t: &native::CATransform3D) -> CATransform3D {
    CATransform3D {
        m11: t.m11,
        m12: t.m12,
        m13: t.m13,
        m14: t.m14,
        m21: t.m21,
        m22: t.m22,
        m23: t.m23,
        m24: t.m24,
        m31: t.m31,
        m32: t.m32,
        m33: t.m33,
        m34: t.m34,
        m41: t.m41,
        m42: t.m42,
        m43: t.m43,
        m44: t.m44,
    }
}

/// Converts a framework transform back to the mirror.
#[must_use]
pub fn native_ca_transform_3d(t: &CATransform3D) -> native::CATransform3D {
    native::CATransform3D {
        m11: t.m11,
        m12: t.m12,
        m13: t.m13,
        m14: t.m14,
        m21: t.m21,
        m22: t.m22,
        m23: t.m23,
        m24: t.m24,
        m31: t.m31,
        m32: t.m32,
        m33: t.m33,
        m34: t.m34,
        m41: t.m41,
        m42: t.m42,
        m43: t.m43,
        m44: t.m44,
    }
}

/// Converts a mirrored color.
///
/// The shared clear, black and white singletons map to the system constant
/// colors, so the common fills reuse one framework object. Anything else is
/// created as a generic RGB color.
#[must_use]
pub fn cg_color(color: &RetainedCgColor) -> CFRetained<CGColor> {
    constant_cg_color(color).unwrap_or_else(|| {
        CGColor::new_generic_rgb(color.red(), color.green(), color.blue(), color.alpha())
    })
}

#[expect(
    unsafe_code,
    reason = "the kCGColor name constants are extern statics"
)]
fn constant_cg_color(color: &RetainedCgColor) -> Option<CFRetained<CGColor>> {
    // SAFETY: the names are immutable constants exported by Core Graphics.
    let name: &CFString = unsafe {
        if color.ptr_eq(&NativeColor::black()) {
            kCGColorBlack
        } else if color.ptr_eq(&NativeColor::white()) {
            kCGColorWhite
        } else if color.ptr_eq(&NativeColor::clear()) {
            kCGColorClear
        } else {
            return None;
        }
    };
    CGColor::constant_color(Some(name))
}

/// Creates an `NSString`.
#[must_use]
pub fn ns_string(string: &str) -> Retained<NSString> {
    NSString::from_str(string)
}

/// Copies an `NSString`, reading nil as the empty string.
#[must_use]
pub fn string(string: Option<&NSString>) -> String {
    string.map(NSString::to_string).unwrap_or_default()
}
