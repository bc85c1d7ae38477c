// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Applying node appearance to `CALayer`s.

use objc2_core_foundation::{CGPoint, CGRect, CGSize};
use objc2_quartz_core::{CALayer, CATransaction};

use umbra_backend_uikit::{
    ca_transform_3d_from_transform, cg_rect_from_rect, create_cg_color_from_shared_color,
};
use umbra_core::color::Color;
use umbra_core::geometry::Rect;
use umbra_core::transform::Transform;

use crate::bridge::{ca_transform_3d, cg_color, cg_rect};

/// The layer-level properties of one shadow node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeAppearance {
    /// Frame in the parent's coordinate space.
    pub frame: Rect,
    /// Transform applied about the frame's center.
    pub transform: Transform,
    /// Background fill, `None` for no fill.
    pub background_color: Option<Color>,
}

/// Applies `appearance` to `layer`.
///
/// Must be called on the main thread. Wraps all mutations in a
/// `CATransaction` with implicit animations disabled.
pub fn apply_appearance(layer: &CALayer, appearance: &NodeAppearance) {
    CATransaction::begin();
    CATransaction::setDisableActions(true);

    // Center anchor point (default): position is the frame's center and
    // bounds carry the size.
    let frame = cg_rect(cg_rect_from_rect(appearance.frame));
    layer.setAnchorPoint(CGPoint::new(0.5, 0.5));
    layer.setBounds(CGRect::new(
        CGPoint::new(0.0, 0.0),
        CGSize::new(frame.size.width, frame.size.height),
    ));
    layer.setPosition(CGPoint::new(
        frame.origin.x + frame.size.width / 2.0,
        frame.origin.y + frame.size.height / 2.0,
    ));

    layer.setTransform(ca_transform_3d(&ca_transform_3d_from_transform(
        &appearance.transform,
    )));

    let retained = create_cg_color_from_shared_color(appearance.background_color);
    let background = retained.as_ref().map(cg_color);
    layer.setBackgroundColor(background.as_deref());
    if let Some(retained) = retained {
        retained.release();
    }

    CATransaction::commit();
}
