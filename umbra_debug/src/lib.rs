// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for umbra timelines.
//!
//! This crate provides [`TimelineSink`](umbra_timeline::TimelineSink)
//! implementations and exporters for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: in-memory event recording, read back through
//!   a [`recorder::Recording`] handle.
//! - [`chrome`]: writes Chrome Trace Event Format JSON from a snapshot
//!   history or from recorded events.

pub mod chrome;
pub mod pretty;
pub mod recorder;

use std::time::{SystemTime, UNIX_EPOCH};

/// Microseconds since the Unix epoch, negative for earlier times.
pub(crate) fn unix_micros(t: SystemTime) -> f64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64() * 1e6,
        Err(e) => -(e.duration().as_secs_f64() * 1e6),
    }
}
