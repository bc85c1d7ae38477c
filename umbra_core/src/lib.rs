// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolkit-neutral value types and per-node render state for shadow trees.
//!
//! `umbra_core` describes what a committed shadow tree carries, independent of
//! any host UI toolkit. It is `no_std` compatible (with `alloc`). Host
//! backends translate these values into native calls; see
//! `umbra_backend_uikit` for the UIKit / Core Animation codec.
//!
//! # Architecture
//!
//! ```text
//!   commit pipeline ──► shadow tree (Arc, immutable)
//!                           │
//!             ┌─────────────┼──────────────────┐
//!             ▼             ▼                  ▼
//!       neutral values   ImageState      TimelineRegistry
//!       (this crate)     (this crate)    (umbra_timeline)
//!             │
//!             ▼
//!       host codec (umbra_backend_uikit) ──► native draw / a11y calls
//! ```
//!
//! **[`geometry`]**: [`Point`](geometry::Point), [`Size`](geometry::Size),
//! [`Rect`](geometry::Rect) and [`EdgeInsets`](geometry::EdgeInsets) in
//! neutral units, with `kurbo` interop.
//!
//! **[`color`]**: Packed ARGB [`Color`](color::Color) with the three
//! singleton colors host codecs fast-path.
//!
//! **[`transform`]**: Flat 4×4 [`Transform`](transform::Transform).
//!
//! **[`accessibility`]**: [`AccessibilityTraits`](accessibility::AccessibilityTraits)
//! bit-set.
//!
//! **[`layout`]**: [`LayoutDirection`](layout::LayoutDirection).
//!
//! **[`image`]**: [`ImageState`](image::ImageState), the auxiliary state an
//! image node carries: resolved source, request handle and blur radius.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod accessibility;
pub mod color;
pub mod geometry;
pub mod image;
pub mod layout;
pub mod transform;
