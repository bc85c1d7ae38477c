// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout direction.

/// Horizontal flow direction of a node's content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Inherited from the parent (or the host's locale at the root).
    #[default]
    Undefined,
    /// Content flows left to right.
    LeftToRight,
    /// Content flows right to left.
    RightToLeft,
}

impl LayoutDirection {
    /// Returns `true` for [`RightToLeft`](Self::RightToLeft).
    #[inline]
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}
