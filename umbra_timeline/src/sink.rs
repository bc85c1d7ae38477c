// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observers of registry activity.
//!
//! A [`TimelineSink`] is told about every append and eviction. All methods
//! default to no-ops, so implementing only the events you care about is fine.
//! The registry calls its sink while holding its lock, so calls arrive in
//! frame-index order and a sink must not call back into the registry.

use crate::snapshot::TimelineFrame;

/// Receives registry events.
pub trait TimelineSink: Send {
    /// Called after a snapshot is recorded.
    fn on_append(&mut self, frame: &TimelineFrame) {
        _ = frame;
    }

    /// Called when a snapshot leaves the history because the registry is at
    /// capacity.
    fn on_evict(&mut self, frame: &TimelineFrame) {
        _ = frame;
    }

    /// Called when the history is cleared, with the number of snapshots
    /// dropped.
    fn on_clear(&mut self, dropped: usize) {
        _ = dropped;
    }
}

/// A [`TimelineSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TimelineSink for NoopSink {}
