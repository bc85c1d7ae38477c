// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! A [`RecorderSink`] is moved into the registry; the [`Recording`] handle it
//! was created with stays with the caller and reads the events back.

use std::sync::{Arc, Mutex, PoisonError};

use umbra_timeline::{TimelineFrame, TimelineSink};

/// One registry event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A snapshot was appended.
    Append(TimelineFrame),
    /// A snapshot was evicted at capacity.
    Evict(TimelineFrame),
    /// The history was cleared.
    Clear {
        /// Number of snapshots dropped.
        dropped: usize,
    },
}

/// Shared read handle for a [`RecorderSink`].
#[derive(Clone, Debug, Default)]
pub struct Recording {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl Recording {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that appends to this recording.
    #[must_use]
    pub fn sink(&self) -> RecorderSink {
        RecorderSink {
            events: Arc::clone(&self.events),
        }
    }

    /// Returns a copy of the events recorded so far, in arrival order.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// A [`TimelineSink`] that records every event into a [`Recording`].
#[derive(Debug)]
pub struct RecorderSink {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecorderSink {
    fn push(&self, event: RecordedEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl TimelineSink for RecorderSink {
    fn on_append(&mut self, frame: &TimelineFrame) {
        self.push(RecordedEvent::Append(*frame));
    }

    fn on_evict(&mut self, frame: &TimelineFrame) {
        self.push(RecordedEvent::Evict(*frame));
    }

    fn on_clear(&mut self, dropped: usize) {
        self.push(RecordedEvent::Clear { dropped });
    }
}
