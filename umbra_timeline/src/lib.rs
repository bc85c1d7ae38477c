// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline of committed shadow trees.
//!
//! Every commit hands its new root to a [`TimelineRegistry`], which stamps it
//! with the next frame index and the current wall-clock time and keeps the
//! resulting [`TimelineSnapshot`] in an ordered history. Debugging and
//! time-travel tooling read the history back.
//!
//! ```text
//!   commit ──► TimelineRegistry::append(root)
//!                  │  (one lock: index, clock read, history, sink)
//!                  ▼
//!              TimelineSnapshot { root, frame: { index, timestamp } }
//!                  │
//!                  ├──► history (snapshots / get / latest)
//!                  └──► TimelineSink::on_append
//! ```
//!
//! **[`snapshot`]**: [`TimelineFrame`] and [`TimelineSnapshot`].
//!
//! **[`registry`]**: [`TimelineRegistry`] and [`TimelineConfig`].
//!
//! **[`clock`]**: the [`Clock`] seam, with [`SystemClock`] as the default.
//!
//! **[`sink`]**: [`TimelineSink`] observers, with [`NoopSink`] as the default.
//!
//! Appends and evictions are also reported as `tracing` events under the
//! `umbra_timeline` target.

pub mod clock;
pub mod registry;
pub mod sink;
pub mod snapshot;

pub use clock::{Clock, SystemClock};
pub use registry::{TimelineConfig, TimelineRegistry};
pub use sink::{NoopSink, TimelineSink};
pub use snapshot::{TimelineFrame, TimelineSnapshot};
