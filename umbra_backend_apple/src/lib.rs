// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Apple framework bridge for umbra.
//!
//! [`umbra_backend_uikit`] produces layout-compatible mirrors of the Apple
//! value types. This crate hands them to the real frameworks:
//!
//! - [`bridge`]: field-for-field conversion between the mirrors and the
//!   `objc2` Core Graphics / Core Animation types, plus `NSString` and
//!   `CGColor` creation
//! - [`apply_appearance`]: applies a node's frame, transform and background
//!   color to a `CALayer`
//!
//! Only builds for Apple targets; it is not a default workspace member.

pub mod bridge;
mod layer;

pub use layer::{NodeAppearance, apply_appearance};
