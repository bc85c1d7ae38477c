// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame identity and snapshots.

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

/// Identity of one commit on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimelineFrame {
    /// Position on the timeline. Strictly increasing in commit order.
    pub index: u64,
    /// Wall-clock time the snapshot was taken.
    pub timestamp: SystemTime,
}

/// An immutable record of one committed shadow tree.
///
/// Cloning is cheap and shares the root.
pub struct TimelineSnapshot<T> {
    root: Arc<T>,
    frame: TimelineFrame,
}

impl<T> TimelineSnapshot<T> {
    /// Creates a snapshot of `root` at `frame`.
    #[must_use]
    pub fn new(root: Arc<T>, frame: TimelineFrame) -> Self {
        Self { root, frame }
    }

    /// The committed root this snapshot refers to.
    #[inline]
    #[must_use]
    pub fn root_shadow_node(&self) -> &Arc<T> {
        &self.root
    }

    /// The frame index and timestamp.
    #[inline]
    #[must_use]
    pub fn frame(&self) -> TimelineFrame {
        self.frame
    }
}

impl<T> Clone for TimelineSnapshot<T> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
            frame: self.frame,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TimelineSnapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimelineSnapshot")
            .field("index", &self.frame.index)
            .field("timestamp", &self.frame.timestamp)
            .field("root", &self.root)
            .finish()
    }
}
