// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The snapshot registry.
//!
//! [`TimelineRegistry::append`] is the only writer. It takes one lock and,
//! under it, assigns the next index, reads the clock, pushes the snapshot,
//! evicts past capacity and notifies the sink. Index order, history order and
//! sink order therefore all match the order in which appends acquired the
//! lock, and no two appends can observe the same index.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::sink::{NoopSink, TimelineSink};
use crate::snapshot::{TimelineFrame, TimelineSnapshot};

/// Registry configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Index given to the first snapshot.
    pub first_index: u64,
    /// Maximum number of snapshots kept. `None` keeps every snapshot; with a
    /// bound, the oldest snapshots are evicted first.
    pub capacity: Option<usize>,
}

impl TimelineConfig {
    /// Keeps every snapshot, indices starting at 0.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            first_index: 0,
            capacity: None,
        }
    }

    /// Keeps the most recent `capacity` snapshots, indices starting at 0.
    #[must_use]
    pub const fn bounded(capacity: usize) -> Self {
        Self {
            first_index: 0,
            capacity: Some(capacity),
        }
    }

    /// A bounded history sized for interactive time-travel debugging.
    #[must_use]
    pub const fn debugging() -> Self {
        Self::bounded(512)
    }

    /// Sets the index given to the first snapshot.
    #[must_use]
    pub const fn with_first_index(mut self, first_index: u64) -> Self {
        self.first_index = first_index;
        self
    }
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self::unbounded()
    }
}

struct State<T> {
    next_index: u64,
    history: VecDeque<TimelineSnapshot<T>>,
    sink: Box<dyn TimelineSink>,
}

/// Ordered, timestamped history of committed shadow-tree roots.
///
/// `T` is the root node type. The registry only holds `Arc<T>` references
/// and never looks inside them.
///
/// The frame counter belongs to the registry instance: two registries number
/// their snapshots independently. Indices are never reused, even across
/// [`clear`](Self::clear).
pub struct TimelineRegistry<T> {
    config: TimelineConfig,
    clock: Box<dyn Clock>,
    state: Mutex<State<T>>,
}

impl<T> TimelineRegistry<T> {
    /// Creates an unbounded registry using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TimelineConfig::unbounded())
    }

    /// Creates a registry with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.capacity` is `Some(0)`.
    #[must_use]
    pub fn with_config(config: TimelineConfig) -> Self {
        assert!(
            config.capacity != Some(0),
            "timeline capacity must be at least 1"
        );
        Self {
            config,
            clock: Box::new(SystemClock),
            state: Mutex::new(State {
                next_index: config.first_index,
                history: VecDeque::new(),
                sink: Box::new(NoopSink),
            }),
        }
    }

    /// Replaces the timestamp source.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl TimelineSink + 'static) -> Self {
        self.state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .sink = Box::new(sink);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> TimelineConfig {
        self.config
    }

    fn lock(&self) -> MutexGuard<'_, State<T>> {
        // A panic under the lock (clock or sink) happens either before any
        // state is touched or after the snapshot is fully recorded.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a new committed root and returns its snapshot.
    ///
    /// The snapshot gets the next frame index and the clock's current
    /// reading. Safe to call from any number of threads at once.
    ///
    /// # Panics
    ///
    /// Panics if the frame index space is exhausted.
    pub fn append(&self, root: Arc<T>) -> TimelineSnapshot<T> {
        let mut state = self.lock();
        let state = &mut *state;

        let index = state.next_index;
        let Some(next_index) = index.checked_add(1) else {
            panic!("timeline frame index space exhausted");
        };
        // The index is only consumed once the clock has been read, so a
        // panicking clock leaves no gap.
        let frame = TimelineFrame {
            index,
            timestamp: self.clock.now(),
        };
        state.next_index = next_index;
        let snapshot = TimelineSnapshot::new(root, frame);
        state.history.push_back(snapshot.clone());
        trace!(index, history_len = state.history.len(), "timeline snapshot appended");
        state.sink.on_append(&frame);

        if let Some(capacity) = self.config.capacity {
            while state.history.len() > capacity {
                let Some(evicted) = state.history.pop_front() else {
                    break;
                };
                let evicted = evicted.frame();
                debug!(index = evicted.index, capacity, "timeline snapshot evicted");
                state.sink.on_evict(&evicted);
            }
        }

        snapshot
    }

    /// Returns a copy of the history, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> Vec<TimelineSnapshot<T>> {
        self.lock().history.iter().cloned().collect()
    }

    /// Returns the snapshot with frame index `index`, if it is still in the
    /// history.
    #[must_use]
    pub fn get(&self, index: u64) -> Option<TimelineSnapshot<T>> {
        let state = self.lock();
        // History indices are contiguous, so the position is an offset from
        // the oldest entry.
        let first = state.history.front()?.frame().index;
        let offset = usize::try_from(index.checked_sub(first)?).ok()?;
        state.history.get(offset).cloned()
    }

    /// Returns the most recent snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<TimelineSnapshot<T>> {
        self.lock().history.back().cloned()
    }

    /// Number of snapshots in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().history.len()
    }

    /// Returns `true` if the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().history.is_empty()
    }

    /// Index the next [`append`](Self::append) will assign.
    #[must_use]
    pub fn next_index(&self) -> u64 {
        self.lock().next_index
    }

    /// Drops every snapshot in the history. The frame counter is kept.
    pub fn clear(&self) {
        let mut state = self.lock();
        let dropped = state.history.len();
        state.history.clear();
        debug!(dropped, next_index = state.next_index, "timeline cleared");
        state.sink.on_clear(dropped);
    }
}

impl<T> Default for TimelineRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TimelineRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("TimelineRegistry")
            .field("config", &self.config)
            .field("next_index", &state.next_index)
            .field("len", &state.history.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::thread;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Node(&'static str);

    /// Records every sink call as `(event, index_or_count)`.
    #[derive(Clone, Default)]
    struct EventLog(Arc<Mutex<Vec<(&'static str, u64)>>>);

    impl EventLog {
        fn events(&self) -> Vec<(&'static str, u64)> {
            self.0.lock().unwrap().clone()
        }
    }

    impl TimelineSink for EventLog {
        fn on_append(&mut self, frame: &TimelineFrame) {
            self.0.lock().unwrap().push(("append", frame.index));
        }

        fn on_evict(&mut self, frame: &TimelineFrame) {
            self.0.lock().unwrap().push(("evict", frame.index));
        }

        fn on_clear(&mut self, dropped: usize) {
            self.0.lock().unwrap().push(("clear", dropped as u64));
        }
    }

    /// A clock that steps by `step_secs` per reading, from a base of 1000s.
    fn stepping_clock(step_secs: i64) -> impl Clock {
        let readings = AtomicU64::new(0);
        move || {
            let n = readings.fetch_add(1, Ordering::SeqCst);
            let secs = 1000_i64 + step_secs * n as i64;
            UNIX_EPOCH + Duration::from_secs(secs as u64)
        }
    }

    #[test]
    fn two_commits_end_to_end() {
        let registry = TimelineRegistry::new();
        let t1 = Arc::new(Node("T1"));
        let t2 = Arc::new(Node("T2"));

        let s1 = registry.append(Arc::clone(&t1));
        let s2 = registry.append(Arc::clone(&t2));

        assert_eq!(s1.frame().index, 0);
        assert_eq!(s2.frame().index, 1);
        assert!(s1.frame().timestamp <= s2.frame().timestamp);

        let history = registry.snapshots();
        assert_eq!(history.len(), 2);
        assert!(Arc::ptr_eq(history[0].root_shadow_node(), &t1));
        assert!(Arc::ptr_eq(history[1].root_shadow_node(), &t2));
        assert_eq!(history[0].frame(), s1.frame());
    }

    #[test]
    fn concurrent_appends_have_no_gaps_or_duplicates() {
        const THREADS: u64 = 8;
        const PER_THREAD: u64 = 250;

        let registry = TimelineRegistry::with_config(TimelineConfig::unbounded());
        let mut indices: Vec<u64> = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        (0..PER_THREAD)
                            .map(|_| registry.append(Arc::new(Node("n"))).frame().index)
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        indices.sort_unstable();
        let expected: Vec<u64> = (0..THREADS * PER_THREAD).collect();
        assert_eq!(indices, expected);

        // History order is index order.
        let history: Vec<u64> = registry
            .snapshots()
            .iter()
            .map(|s| s.frame().index)
            .collect();
        assert_eq!(history, expected);
        assert_eq!(registry.next_index(), THREADS * PER_THREAD);
    }

    #[test]
    fn sequential_appends_from_one_thread_are_ordered() {
        let registry = TimelineRegistry::new();
        let a = registry.append(Arc::new(Node("a")));
        let b = registry.append(Arc::new(Node("b")));
        let c = registry.append(Arc::new(Node("c")));
        assert!(a.frame().index < b.frame().index);
        assert!(b.frame().index < c.frame().index);
    }

    #[test]
    fn first_index_offsets_every_frame() {
        let registry =
            TimelineRegistry::with_config(TimelineConfig::unbounded().with_first_index(100));
        assert_eq!(registry.next_index(), 100);
        assert_eq!(registry.append(Arc::new(Node("a"))).frame().index, 100);
        assert_eq!(registry.append(Arc::new(Node("b"))).frame().index, 101);
        assert_eq!(registry.get(101).unwrap().root_shadow_node().0, "b");
        assert!(registry.get(99).is_none());
    }

    #[test]
    fn backwards_clock_is_recorded_as_read() {
        let registry = TimelineRegistry::new().with_clock(stepping_clock(-10));
        let a = registry.append(Arc::new(Node("a")));
        let b = registry.append(Arc::new(Node("b")));
        assert_eq!(a.frame().index, 0);
        assert_eq!(b.frame().index, 1);
        assert_eq!(a.frame().timestamp, UNIX_EPOCH + Duration::from_secs(1000));
        assert_eq!(b.frame().timestamp, UNIX_EPOCH + Duration::from_secs(990));
    }

    #[test]
    fn monotone_clock_gives_ordered_timestamps() {
        let registry = TimelineRegistry::new().with_clock(stepping_clock(1));
        let stamps: Vec<SystemTime> = (0..5)
            .map(|_| registry.append(Arc::new(Node("n"))).frame().timestamp)
            .collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn capacity_evicts_oldest_first() {
        let log = EventLog::default();
        let registry = TimelineRegistry::with_config(TimelineConfig::bounded(2))
            .with_sink(log.clone());

        for name in ["a", "b", "c", "d"] {
            registry.append(Arc::new(Node(name)));
        }

        let kept: Vec<u64> = registry
            .snapshots()
            .iter()
            .map(|s| s.frame().index)
            .collect();
        assert_eq!(kept, [2, 3]);
        assert!(registry.get(1).is_none());
        assert_eq!(registry.get(2).unwrap().root_shadow_node().0, "c");
        assert_eq!(registry.latest().unwrap().root_shadow_node().0, "d");
        assert_eq!(
            log.events(),
            [
                ("append", 0),
                ("append", 1),
                ("append", 2),
                ("evict", 0),
                ("append", 3),
                ("evict", 1),
            ]
        );
    }

    #[test]
    fn evicted_roots_stay_alive_while_referenced() {
        let registry = TimelineRegistry::with_config(TimelineConfig::bounded(1));
        let first = registry.append(Arc::new(Node("first")));
        registry.append(Arc::new(Node("second")));
        assert_eq!(registry.len(), 1);
        assert_eq!(first.root_shadow_node().0, "first");
        assert_eq!(Arc::strong_count(first.root_shadow_node()), 1);
    }

    #[test]
    fn clear_keeps_the_counter() {
        let log = EventLog::default();
        let registry = TimelineRegistry::new().with_sink(log.clone());
        registry.append(Arc::new(Node("a")));
        registry.append(Arc::new(Node("b")));

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.latest().is_none());
        assert_eq!(registry.next_index(), 2);
        assert_eq!(registry.append(Arc::new(Node("c"))).frame().index, 2);
        assert_eq!(
            log.events(),
            [("append", 0), ("append", 1), ("clear", 2), ("append", 2)]
        );
    }

    #[test]
    fn registries_count_independently() {
        let a = TimelineRegistry::new();
        let b = TimelineRegistry::new();
        a.append(Arc::new(Node("a0")));
        a.append(Arc::new(Node("a1")));
        assert_eq!(b.append(Arc::new(Node("b0"))).frame().index, 0);
    }

    #[test]
    fn empty_registry() {
        let registry: TimelineRegistry<Node> = TimelineRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get(0).is_none());
        assert!(registry.latest().is_none());
        assert_eq!(registry.config(), TimelineConfig::default());
    }

    /// A `MakeWriter` target that keeps formatted log lines in memory.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn appends_evictions_and_clears_are_logged() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let registry = TimelineRegistry::with_config(TimelineConfig::bounded(1));
            registry.append(Arc::new(Node("a")));
            registry.append(Arc::new(Node("b")));
            registry.clear();
        });

        let out = logs.contents();
        let appended: Vec<&str> = out
            .lines()
            .filter(|l| l.contains("timeline snapshot appended"))
            .collect();
        assert_eq!(appended.len(), 2, "{out}");
        assert!(appended[0].contains("TRACE"), "{out}");
        assert!(appended[0].contains("index=0"), "{out}");
        assert!(appended[1].contains("index=1"), "{out}");

        let evicted: Vec<&str> = out
            .lines()
            .filter(|l| l.contains("timeline snapshot evicted"))
            .collect();
        assert_eq!(evicted.len(), 1, "{out}");
        assert!(evicted[0].contains("DEBUG"), "{out}");
        assert!(evicted[0].contains("index=0"), "{out}");
        assert!(evicted[0].contains("capacity=1"), "{out}");

        assert!(
            out.lines()
                .any(|l| l.contains("timeline cleared") && l.contains("dropped=1")),
            "{out}"
        );
    }

    #[test]
    fn panicking_clock_does_not_consume_an_index() {
        let readings = AtomicU64::new(0);
        let clock = move || {
            let n = readings.fetch_add(1, Ordering::SeqCst);
            assert_ne!(n, 1, "clock failure on the second reading");
            UNIX_EPOCH + Duration::from_secs(n)
        };
        let registry = TimelineRegistry::new().with_clock(clock);

        registry.append(Arc::new(Node("a")));
        let failed = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            registry.append(Arc::new(Node("b")))
        }));
        assert!(failed.is_err(), "second append panics with the clock");
        assert_eq!(registry.next_index(), 1, "failed append leaves the counter");

        let c = registry.append(Arc::new(Node("c")));
        assert_eq!(c.frame().index, 1);
        let indices: Vec<u64> = registry
            .snapshots()
            .iter()
            .map(|s| s.frame().index)
            .collect();
        assert_eq!(indices, [0, 1]);
        assert_eq!(registry.latest().unwrap().root_shadow_node().0, "c");
    }

    #[test]
    fn debug_output_summarizes() {
        let registry = TimelineRegistry::new();
        registry.append(Arc::new(Node("a")));
        let text = format!("{registry:?}");
        assert!(text.contains("next_index: 1"), "{text}");
        assert!(text.contains("len: 1"), "{text}");
    }

    #[test]
    #[should_panic(expected = "timeline capacity must be at least 1")]
    fn zero_capacity_is_rejected() {
        let _ = TimelineRegistry::<Node>::with_config(TimelineConfig::bounded(0));
    }

    #[test]
    fn debugging_preset_is_bounded() {
        assert_eq!(TimelineConfig::debugging().capacity, Some(512));
        assert_eq!(TimelineConfig::debugging().first_index, 0);
    }
}
