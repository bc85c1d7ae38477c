// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] writes a snapshot history and [`export_events`] writes a
//! [`Recording`](crate::recorder::Recording)'s events, both as
//! [Chrome Trace Event Format][spec] JSON.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use umbra_timeline::TimelineSnapshot;

use crate::recorder::RecordedEvent;
use crate::unix_micros;

/// Exports a snapshot history as Chrome Trace Event Format JSON.
///
/// Each snapshot becomes an instant `Commit` event at its timestamp. Each
/// pair of consecutive snapshots also becomes a complete `Frame` event
/// spanning the time between them, so the gaps between commits are visible
/// in `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/). A span whose
/// clock stepped backwards is drawn with zero duration.
pub fn export<T>(snapshots: &[TimelineSnapshot<T>], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for snapshot in snapshots {
        let frame = snapshot.frame();
        events.push(json!({
            "ph": "i",
            "name": "Commit",
            "cat": "Timeline",
            "ts": unix_micros(frame.timestamp),
            "pid": 0,
            "tid": 0,
            "s": "g",
            "args": {
                "frame_index": frame.index,
            }
        }));
    }

    for pair in snapshots.windows(2) {
        let (from, to) = (pair[0].frame(), pair[1].frame());
        let start = unix_micros(from.timestamp);
        let dur = (unix_micros(to.timestamp) - start).max(0.0);
        events.push(json!({
            "ph": "X",
            "name": "Frame",
            "cat": "Timeline",
            "ts": start,
            "dur": dur,
            "pid": 0,
            "tid": 1,
            "args": {
                "from_index": from.index,
                "to_index": to.index,
            }
        }));
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

/// Exports recorded registry events as Chrome Trace Event Format JSON.
///
/// Appends and evictions become instant events at the affected snapshot's
/// timestamp. A clear has no timestamp of its own and is placed at the most
/// recent timestamp seen before it.
pub fn export_events(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let mut out: Vec<Value> = Vec::new();
    let mut last_ts = 0.0;

    for event in events {
        match *event {
            RecordedEvent::Append(frame) => {
                last_ts = unix_micros(frame.timestamp);
                out.push(json!({
                    "ph": "i",
                    "name": "Append",
                    "cat": "Registry",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "frame_index": frame.index,
                    }
                }));
            }
            RecordedEvent::Evict(frame) => {
                out.push(json!({
                    "ph": "i",
                    "name": "Evict",
                    "cat": "Registry",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "frame_index": frame.index,
                        "taken_at": unix_micros(frame.timestamp),
                    }
                }));
            }
            RecordedEvent::Clear { dropped } => {
                out.push(json!({
                    "ph": "i",
                    "name": "Clear",
                    "cat": "Registry",
                    "ts": last_ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "p",
                    "args": {
                        "dropped": dropped,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &out)?;
    Ok(())
}
