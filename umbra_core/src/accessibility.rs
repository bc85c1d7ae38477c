// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility trait bit-set.
//!
//! [`AccessibilityTraits`] encodes the accessibility semantics of a node. Each
//! named constant occupies one bit and no bit implies or excludes another.
//! Bits outside [`AccessibilityTraits::ALL`] may still be carried (see
//! [`from_bits_retain`](AccessibilityTraits::from_bits_retain)) so a node
//! produced by a newer tree survives a trip through older code; host codecs
//! drop whatever they cannot express.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// A set of accessibility traits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AccessibilityTraits(u32);

impl AccessibilityTraits {
    /// The empty set.
    pub const NONE: Self = Self(0);
    /// The element behaves like a button.
    pub const BUTTON: Self = Self(1 << 0);
    /// The element behaves like a link.
    pub const LINK: Self = Self(1 << 1);
    /// The element is an image.
    pub const IMAGE: Self = Self(1 << 2);
    /// The element is selected.
    pub const SELECTED: Self = Self(1 << 3);
    /// The element plays its own sound when activated.
    pub const PLAYS_SOUND: Self = Self(1 << 4);
    /// The element behaves like a keyboard key.
    pub const KEYBOARD_KEY: Self = Self(1 << 5);
    /// The element is static text that cannot change.
    pub const STATIC_TEXT: Self = Self(1 << 6);
    /// The element provides summary information when the app starts.
    pub const SUMMARY_ELEMENT: Self = Self(1 << 7);
    /// The element is disabled.
    pub const NOT_ENABLED: Self = Self(1 << 8);
    /// The element's value changes frequently.
    pub const UPDATES_FREQUENTLY: Self = Self(1 << 9);
    /// The element is a search field.
    pub const SEARCH_FIELD: Self = Self(1 << 10);
    /// Activating the element starts a media session.
    pub const STARTS_MEDIA_SESSION: Self = Self(1 << 11);
    /// The element can be incremented and decremented.
    pub const ADJUSTABLE: Self = Self(1 << 12);
    /// The element accepts direct touch interaction.
    pub const ALLOWS_DIRECT_INTERACTION: Self = Self(1 << 13);
    /// The element should cause an automatic page turn.
    pub const CAUSES_PAGE_TURN: Self = Self(1 << 14);
    /// The element is a header for a section of content.
    pub const HEADER: Self = Self(1 << 15);
    /// The element is an on/off switch.
    pub const SWITCH: Self = Self(1 << 16);
    /// The element is a tab bar.
    pub const TAB_BAR: Self = Self(1 << 17);

    /// Every named trait, in bit order.
    pub const ALL: [(&'static str, Self); 18] = [
        ("Button", Self::BUTTON),
        ("Link", Self::LINK),
        ("Image", Self::IMAGE),
        ("Selected", Self::SELECTED),
        ("PlaysSound", Self::PLAYS_SOUND),
        ("KeyboardKey", Self::KEYBOARD_KEY),
        ("StaticText", Self::STATIC_TEXT),
        ("SummaryElement", Self::SUMMARY_ELEMENT),
        ("NotEnabled", Self::NOT_ENABLED),
        ("UpdatesFrequently", Self::UPDATES_FREQUENTLY),
        ("SearchField", Self::SEARCH_FIELD),
        ("StartsMediaSession", Self::STARTS_MEDIA_SESSION),
        ("Adjustable", Self::ADJUSTABLE),
        ("AllowsDirectInteraction", Self::ALLOWS_DIRECT_INTERACTION),
        ("CausesPageTurn", Self::CAUSES_PAGE_TURN),
        ("Header", Self::HEADER),
        ("Switch", Self::SWITCH),
        ("TabBar", Self::TAB_BAR),
    ];

    /// Union of every named trait.
    pub const KNOWN: Self = Self((1 << 18) - 1);

    /// Creates a set from raw bits, keeping bits that have no name.
    #[inline]
    #[must_use]
    pub const fn from_bits_retain(bits: u32) -> Self {
        Self(bits)
    }

    /// Creates a set from raw bits, dropping bits that have no name.
    #[inline]
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & Self::KNOWN.0)
    }

    /// Returns the raw bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if no bit is set.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if any bit of `other` is set in `self`.
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns the bits of `self` that have no name.
    #[inline]
    #[must_use]
    pub const fn unknown(self) -> Self {
        Self(self.0 & !Self::KNOWN.0)
    }

    /// Iterates over the named traits set in `self`, in bit order.
    pub fn iter(self) -> impl Iterator<Item = (&'static str, Self)> {
        Self::ALL
            .into_iter()
            .filter(move |&(_, flag)| self.contains(flag))
    }
}

impl BitOr for AccessibilityTraits {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AccessibilityTraits {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for AccessibilityTraits {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for AccessibilityTraits {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for AccessibilityTraits {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl FromIterator<Self> for AccessibilityTraits {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |acc, t| acc | t)
    }
}

impl fmt::Debug for AccessibilityTraits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessibilityTraits(")?;
        let mut first = true;
        for (name, _) in self.iter() {
            if !first {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        let unknown = self.unknown();
        if !unknown.is_empty() {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{:#x}", unknown.0)?;
            first = false;
        }
        if first {
            f.write_str("None")?;
        }
        f.write_str(")")
    }
}
