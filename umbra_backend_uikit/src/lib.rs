// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! UIKit / Core Animation codec for umbra.
//!
//! This crate translates the toolkit-neutral values of [`umbra_core`] into the
//! value types a UIKit host consumes, and back where the host reports values
//! to the shadow tree:
//!
//! - [`convert`]: points, sizes, rectangles, edge insets, 4×4 transforms,
//!   layout direction and strings
//! - [`color`]: [`NativeColor`] handles with the clear / black / white
//!   singleton fast path, and [`RetainedCgColor`] for +1 Core Graphics colors
//! - [`accessibility`]: table-driven trait mask translation
//!
//! The host types in [`native`] are layout-compatible mirrors of their Apple
//! counterparts, so everything here is pure and runs on any platform. The
//! `umbra_backend_apple` crate bridges them to the real frameworks.
//!
//! Every function is stateless and may be called from any thread.

pub mod accessibility;
pub mod color;
pub mod convert;
pub mod native;

pub use accessibility::{
    accessibility_traits_from_ui_accessibility_traits,
    ui_accessibility_traits_from_accessibility_traits,
};
pub use color::{
    NativeColor, RetainedCgColor, create_cg_color_from_shared_color, ui_color_from_shared_color,
};
pub use convert::{
    ca_transform_3d_from_transform, cg_float_from_float, cg_point_from_point, cg_rect_from_rect,
    cg_size_from_size, edge_insets_from_ui_edge_insets, float_from_cg_float, layout_direction,
    ns_string_from_string, ns_string_from_string_nil_if_empty, point_from_cg_point,
    rect_from_cg_rect, size_from_cg_size, string_from_ns_string, transform_from_ca_transform_3d,
    ui_edge_insets_from_edge_insets,
};
