// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessibility trait translation.
//!
//! The neutral and host enumerations do not line up one to one, so the
//! mapping is a table rather than arithmetic. Each row pairs one neutral bit
//! with one host mask; conversion ORs in the rows whose source side is
//! present. A bit with no row is dropped in either direction. Adding a trait
//! is a one-row change.

use umbra_core::accessibility::AccessibilityTraits;

use crate::native::{
    ACCESSIBILITY_TRAIT_SWITCH, UI_ACCESSIBILITY_TRAIT_ADJUSTABLE,
    UI_ACCESSIBILITY_TRAIT_ALLOWS_DIRECT_INTERACTION, UI_ACCESSIBILITY_TRAIT_BUTTON,
    UI_ACCESSIBILITY_TRAIT_CAUSES_PAGE_TURN, UI_ACCESSIBILITY_TRAIT_HEADER,
    UI_ACCESSIBILITY_TRAIT_IMAGE, UI_ACCESSIBILITY_TRAIT_KEYBOARD_KEY, UI_ACCESSIBILITY_TRAIT_LINK,
    UI_ACCESSIBILITY_TRAIT_NONE, UI_ACCESSIBILITY_TRAIT_NOT_ENABLED,
    UI_ACCESSIBILITY_TRAIT_PLAYS_SOUND, UI_ACCESSIBILITY_TRAIT_SEARCH_FIELD,
    UI_ACCESSIBILITY_TRAIT_SELECTED, UI_ACCESSIBILITY_TRAIT_STARTS_MEDIA_SESSION,
    UI_ACCESSIBILITY_TRAIT_STATIC_TEXT, UI_ACCESSIBILITY_TRAIT_SUMMARY_ELEMENT,
    UI_ACCESSIBILITY_TRAIT_TAB_BAR, UI_ACCESSIBILITY_TRAIT_UPDATES_FREQUENTLY,
    UIAccessibilityTraits,
};

/// Neutral trait ↔ host mask rows.
pub const TRAIT_TABLE: [(AccessibilityTraits, UIAccessibilityTraits); 18] = [
    (AccessibilityTraits::BUTTON, UI_ACCESSIBILITY_TRAIT_BUTTON),
    (AccessibilityTraits::LINK, UI_ACCESSIBILITY_TRAIT_LINK),
    (AccessibilityTraits::IMAGE, UI_ACCESSIBILITY_TRAIT_IMAGE),
    (AccessibilityTraits::SELECTED, UI_ACCESSIBILITY_TRAIT_SELECTED),
    (AccessibilityTraits::PLAYS_SOUND, UI_ACCESSIBILITY_TRAIT_PLAYS_SOUND),
    (AccessibilityTraits::KEYBOARD_KEY, UI_ACCESSIBILITY_TRAIT_KEYBOARD_KEY),
    (AccessibilityTraits::STATIC_TEXT, UI_ACCESSIBILITY_TRAIT_STATIC_TEXT),
    (AccessibilityTraits::SUMMARY_ELEMENT, UI_ACCESSIBILITY_TRAIT_SUMMARY_ELEMENT),
    (AccessibilityTraits::NOT_ENABLED, UI_ACCESSIBILITY_TRAIT_NOT_ENABLED),
    (AccessibilityTraits::UPDATES_FREQUENTLY, UI_ACCESSIBILITY_TRAIT_UPDATES_FREQUENTLY),
    (AccessibilityTraits::SEARCH_FIELD, UI_ACCESSIBILITY_TRAIT_SEARCH_FIELD),
    (AccessibilityTraits::STARTS_MEDIA_SESSION, UI_ACCESSIBILITY_TRAIT_STARTS_MEDIA_SESSION),
    (AccessibilityTraits::ADJUSTABLE, UI_ACCESSIBILITY_TRAIT_ADJUSTABLE),
    (
        AccessibilityTraits::ALLOWS_DIRECT_INTERACTION,
        UI_ACCESSIBILITY_TRAIT_ALLOWS_DIRECT_INTERACTION,
    ),
    (AccessibilityTraits::CAUSES_PAGE_TURN, UI_ACCESSIBILITY_TRAIT_CAUSES_PAGE_TURN),
    (AccessibilityTraits::HEADER, UI_ACCESSIBILITY_TRAIT_HEADER),
    (AccessibilityTraits::SWITCH, ACCESSIBILITY_TRAIT_SWITCH),
    (AccessibilityTraits::TAB_BAR, UI_ACCESSIBILITY_TRAIT_TAB_BAR),
];

/// Converts neutral traits to a host trait mask.
///
/// Neutral bits with no row (for example traits added by a newer producer)
/// are dropped.
#[must_use]
pub fn ui_accessibility_traits_from_accessibility_traits(
    traits: AccessibilityTraits,
) -> UIAccessibilityTraits {
    TRAIT_TABLE
        .iter()
        .filter(|(neutral, _)| traits.contains(*neutral))
        .fold(UI_ACCESSIBILITY_TRAIT_NONE, |acc, (_, native)| acc | native)
}

/// Converts a host trait mask to neutral traits.
///
/// Host bits with no row are dropped.
#[must_use]
pub fn accessibility_traits_from_ui_accessibility_traits(
    traits: UIAccessibilityTraits,
) -> AccessibilityTraits {
    TRAIT_TABLE
        .iter()
        .filter(|(_, native)| traits & native == *native)
        .fold(AccessibilityTraits::NONE, |acc, (neutral, _)| acc | *neutral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_masks_are_disjoint() {
        let mut seen: UIAccessibilityTraits = 0;
        for (neutral, native) in TRAIT_TABLE {
            assert_ne!(native, 0, "{neutral:?} has a host mask");
            assert_eq!(seen & native, 0, "{neutral:?} shares no bit with another row");
            seen |= native;
        }
    }

    #[test]
    fn table_covers_every_named_trait() {
        for (name, flag) in AccessibilityTraits::ALL {
            assert!(
                TRAIT_TABLE.iter().any(|(neutral, _)| *neutral == flag),
                "{name} has a row"
            );
        }
    }

    #[test]
    fn every_subset_round_trips() {
        // 2^18 subsets of the named traits.
        for bits in 0..(1_u32 << 18) {
            let traits = AccessibilityTraits::from_bits_retain(bits);
            let native = ui_accessibility_traits_from_accessibility_traits(traits);
            assert_eq!(
                accessibility_traits_from_ui_accessibility_traits(native),
                traits,
                "subset {bits:#x}"
            );
        }
    }

    #[test]
    fn single_traits_map_to_their_host_bits() {
        assert_eq!(
            ui_accessibility_traits_from_accessibility_traits(AccessibilityTraits::HEADER),
            UI_ACCESSIBILITY_TRAIT_HEADER
        );
        assert_eq!(
            ui_accessibility_traits_from_accessibility_traits(AccessibilityTraits::TAB_BAR),
            UI_ACCESSIBILITY_TRAIT_TAB_BAR
        );
        assert_eq!(
            ui_accessibility_traits_from_accessibility_traits(AccessibilityTraits::SWITCH),
            ACCESSIBILITY_TRAIT_SWITCH
        );
        assert_eq!(
            ui_accessibility_traits_from_accessibility_traits(AccessibilityTraits::NONE),
            UI_ACCESSIBILITY_TRAIT_NONE
        );
    }

    #[test]
    fn unmapped_neutral_bits_are_dropped() {
        let future = AccessibilityTraits::from_bits_retain(1 << 25);
        assert_eq!(ui_accessibility_traits_from_accessibility_traits(future), 0);

        let mixed = future | AccessibilityTraits::LINK;
        let native = ui_accessibility_traits_from_accessibility_traits(mixed);
        assert_eq!(native, UI_ACCESSIBILITY_TRAIT_LINK);
        assert_eq!(
            accessibility_traits_from_ui_accessibility_traits(native),
            AccessibilityTraits::LINK
        );
    }

    #[test]
    fn unmapped_host_bits_are_dropped() {
        // Bit 40 is not a stock trait and not the switch extension.
        let native = UI_ACCESSIBILITY_TRAIT_BUTTON | (1 << 40);
        assert_eq!(
            accessibility_traits_from_ui_accessibility_traits(native),
            AccessibilityTraits::BUTTON
        );
        assert!(accessibility_traits_from_ui_accessibility_traits(1 << 40).is_empty());
    }
}
