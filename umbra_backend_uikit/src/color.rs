// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host color handles.
//!
//! Two ownership shapes exist on the host side, and each gets its own type so
//! the contract shows at the call site:
//!
//! - [`NativeColor`] is the `UIColor`-level handle. Holding one keeps the
//!   color alive; dropping it releases it. A borrowed [`CgColor`] view is
//!   available through [`NativeColor::cg_color`] for as long as the handle
//!   lives.
//! - [`RetainedCgColor`] is a `CGColorRef` the caller received with a +1
//!   retain. It must be released exactly once, either with
//!   [`RetainedCgColor::release`] or by dropping it.
//!
//! Clear, black and white are host singletons: every conversion of those
//! colors hands out the same object.

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, LazyLock};

use umbra_core::color::{Color, ColorComponents};

use crate::native::CGFloat;

/// A Core Graphics color: RGBA components in the device RGB space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CgColor {
    /// Red, green, blue, alpha, each in `[0, 1]`.
    pub components: [CGFloat; 4],
}

impl CgColor {
    /// Returns the red component.
    #[inline]
    #[must_use]
    pub fn red(&self) -> CGFloat {
        self.components[0]
    }

    /// Returns the green component.
    #[inline]
    #[must_use]
    pub fn green(&self) -> CGFloat {
        self.components[1]
    }

    /// Returns the blue component.
    #[inline]
    #[must_use]
    pub fn blue(&self) -> CGFloat {
        self.components[2]
    }

    /// Returns the alpha component.
    #[inline]
    #[must_use]
    pub fn alpha(&self) -> CGFloat {
        self.components[3]
    }
}

/// A reference-counted host color object.
///
/// Clones share the object; [`ptr_eq`](Self::ptr_eq) tells whether two
/// handles are the same object, which is how the singleton fast path is
/// observed.
#[derive(Clone)]
pub struct NativeColor {
    inner: Arc<CgColor>,
}

static CLEAR: LazyLock<NativeColor> = LazyLock::new(|| NativeColor::rgba(0.0, 0.0, 0.0, 0.0));
static BLACK: LazyLock<NativeColor> = LazyLock::new(|| NativeColor::rgba(0.0, 0.0, 0.0, 1.0));
static WHITE: LazyLock<NativeColor> = LazyLock::new(|| NativeColor::rgba(1.0, 1.0, 1.0, 1.0));

impl NativeColor {
    /// Allocates a new color object.
    #[must_use]
    pub fn rgba(red: CGFloat, green: CGFloat, blue: CGFloat, alpha: CGFloat) -> Self {
        Self {
            inner: Arc::new(CgColor {
                components: [red, green, blue, alpha],
            }),
        }
    }

    /// Allocates a new color object from neutral components.
    #[must_use]
    pub fn from_components(components: ColorComponents) -> Self {
        Self::rgba(
            CGFloat::from(components.red),
            CGFloat::from(components.green),
            CGFloat::from(components.blue),
            CGFloat::from(components.alpha),
        )
    }

    /// The host's `clearColor` singleton.
    #[must_use]
    pub fn clear() -> Self {
        CLEAR.clone()
    }

    /// The host's `blackColor` singleton.
    #[must_use]
    pub fn black() -> Self {
        BLACK.clone()
    }

    /// The host's `whiteColor` singleton.
    #[must_use]
    pub fn white() -> Self {
        WHITE.clone()
    }

    /// Borrowed view of the underlying Core Graphics color.
    ///
    /// The view is not retained; it is valid while `self` is.
    #[inline]
    #[must_use]
    pub fn cg_color(&self) -> &CgColor {
        &self.inner
    }

    /// Returns `true` if both handles refer to the same host object.
    #[inline]
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// Number of live references to the host object, this handle included.
    #[must_use]
    pub fn retain_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Takes an extra retain on the underlying Core Graphics color.
    #[must_use]
    pub fn retain_cg_color(&self) -> RetainedCgColor {
        RetainedCgColor {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Converts the host color back into a neutral [`Color`].
    ///
    /// Components are quantized to 8 bits.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "components are in [0, 1], narrowing to f32 loses nothing the 8-bit color keeps"
    )]
    pub fn to_color(&self) -> Color {
        let [red, green, blue, alpha] = self.inner.components;
        Color::from_components(ColorComponents {
            red: red as f32,
            green: green as f32,
            blue: blue as f32,
            alpha: alpha as f32,
        })
    }
}

impl fmt::Debug for NativeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeColor")
            .field(&self.inner.components)
            .finish()
    }
}

/// A Core Graphics color the caller owns one retain on.
///
/// The retain is given back exactly once: by [`release`](Self::release) or,
/// failing that, when the value is dropped.
#[must_use = "a retained color must be released; dropping it releases it immediately"]
pub struct RetainedCgColor {
    inner: Arc<CgColor>,
}

impl RetainedCgColor {
    /// Gives back the retain.
    pub fn release(self) {
        drop(self);
    }

    /// Returns `true` if both references point at the same host object.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, color: &NativeColor) -> bool {
        Arc::ptr_eq(&self.inner, &color.inner)
    }
}

impl Deref for RetainedCgColor {
    type Target = CgColor;

    #[inline]
    fn deref(&self) -> &CgColor {
        &self.inner
    }
}

impl fmt::Debug for RetainedCgColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RetainedCgColor")
            .field(&self.inner.components)
            .finish()
    }
}

/// Converts a neutral color to a host color handle.
///
/// `None` ("no color") stays `None`. Clear, black and white return the host
/// singletons instead of allocating, which also keeps their components exact.
/// Any other color allocates a new object from its RGBA components.
#[must_use]
pub fn ui_color_from_shared_color(color: Option<Color>) -> Option<NativeColor> {
    let color = color?;
    Some(match color {
        Color::CLEAR => NativeColor::clear(),
        Color::BLACK => NativeColor::black(),
        Color::WHITE => NativeColor::white(),
        other => NativeColor::from_components(other.components()),
    })
}

/// Converts a neutral color to a retained Core Graphics color.
///
/// Same mapping as [`ui_color_from_shared_color`], but the caller receives an
/// owned retain and is responsible for releasing it exactly once.
pub fn create_cg_color_from_shared_color(color: Option<Color>) -> Option<RetainedCgColor> {
    ui_color_from_shared_color(color).map(|native| native.retain_cg_color())
}
