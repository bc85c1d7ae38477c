// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable timeline output.
//!
//! [`PrettyPrintSink`] implements [`TimelineSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).
//! Timestamps are printed as seconds since the Unix epoch.

use std::io::Write;

use umbra_timeline::{TimelineFrame, TimelineSink};

use crate::unix_micros;

/// Writes human-readable timeline lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write + Send = Box<dyn Write + Send>> {
    writer: W,
}

impl<W: Write + Send> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn frame_line(&mut self, tag: &str, frame: &TimelineFrame) {
        let _ = writeln!(
            self.writer,
            "[{tag}] frame={} t={:.6}s",
            frame.index,
            unix_micros(frame.timestamp) / 1e6,
        );
    }
}

impl<W: Write + Send> TimelineSink for PrettyPrintSink<W> {
    fn on_append(&mut self, frame: &TimelineFrame) {
        self.frame_line("append", frame);
    }

    fn on_evict(&mut self, frame: &TimelineFrame) {
        self.frame_line("evict", frame);
    }

    fn on_clear(&mut self, dropped: usize) {
        let _ = writeln!(self.writer, "[clear] dropped={dropped}");
    }
}
