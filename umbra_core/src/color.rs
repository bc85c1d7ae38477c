// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed ARGB colors.
//!
//! A shadow-tree color property is an `Option<Color>`: `None` means "no
//! color" and is distinct from [`Color::CLEAR`], which is a real, fully
//! transparent color.
//!
//! [`Color::CLEAR`], [`Color::BLACK`] and [`Color::WHITE`] are the singleton
//! colors host codecs map to pre-built native objects instead of allocating.

use core::fmt;

/// An sRGB color packed as `0xAARRGGBB`.
///
/// Equality compares the packed components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

/// Unpacked color components, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorComponents {
    /// Red channel.
    pub red: f32,
    /// Green channel.
    pub green: f32,
    /// Blue channel.
    pub blue: f32,
    /// Alpha channel.
    pub alpha: f32,
}

const RATIO: f32 = 255.0;

impl Color {
    /// Fully transparent black, `0x00000000`.
    pub const CLEAR: Self = Self(0x0000_0000);

    /// Opaque black, `0xFF000000`.
    pub const BLACK: Self = Self(0xFF00_0000);

    /// Opaque white, `0xFFFFFFFF`.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Creates a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Returns the alpha channel.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "keeps the low byte")]
    pub const fn alpha8(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Returns the red channel.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "keeps the low byte")]
    pub const fn red8(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Returns the green channel.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "keeps the low byte")]
    pub const fn green8(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Returns the blue channel.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "keeps the low byte")]
    pub const fn blue8(self) -> u8 {
        self.0 as u8
    }

    /// Creates a color from float components.
    ///
    /// Components are clamped to `[0, 1]` and rounded to the nearest 8-bit
    /// step. NaN components become zero.
    #[must_use]
    pub fn from_components(components: ColorComponents) -> Self {
        Self::from_rgba8(
            quantize(components.red),
            quantize(components.green),
            quantize(components.blue),
            quantize(components.alpha),
        )
    }

    /// Returns the float components of this color.
    #[must_use]
    pub fn components(self) -> ColorComponents {
        ColorComponents {
            red: f32::from(self.red8()) / RATIO,
            green: f32::from(self.green8()) / RATIO,
            blue: f32::from(self.blue8()) / RATIO,
            alpha: f32::from(self.alpha8()) / RATIO,
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "value is clamped to [0, 255.5) before the cast"
)]
fn quantize(component: f32) -> u8 {
    (component.clamp(0.0, 1.0) * RATIO + 0.5) as u8
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.0)
    }
}
