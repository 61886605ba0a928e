//! Execution timeline (Gantt) model.
//!
//! A timeline is the ordered sequence of execution intervals produced by
//! one simulation run. Intervals are append-only and never overlap; idle
//! gaps are implicit — the clock jumps forward, no interval is emitted.

use serde::{Deserialize, Serialize};

/// One contiguous slice of CPU time assigned to a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process the CPU was assigned to.
    pub pid: u32,
    /// Start instant.
    pub start: i64,
    /// Slice length (> 0).
    pub duration: i64,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(pid: u32, start: i64, duration: i64) -> Self {
        Self {
            pid,
            start,
            duration,
        }
    }

    /// End instant (exclusive).
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }
}

/// The ordered interval sequence for one run.
///
/// Suitable for Gantt-style rendering as-is; a non-preemptive run holds
/// one interval per process, a Round-Robin run one per slice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn push(&mut self, interval: ExecutionInterval) {
        self.intervals.push(interval);
    }

    /// The intervals in dispatch order.
    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the timeline holds no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Makespan: latest end instant across all intervals.
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|i| i.end()).max().unwrap_or(0)
    }

    /// Total CPU occupancy (sum of interval durations).
    ///
    /// Less than the makespan when arrival gaps idled the clock.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(|i| i.duration).sum()
    }

    /// Returns all intervals for a given process.
    pub fn intervals_for(&self, pid: u32) -> Vec<&ExecutionInterval> {
        self.intervals.iter().filter(|i| i.pid == pid).collect()
    }

    /// Completion time for a process (end of its last interval).
    pub fn completion_time(&self, pid: u32) -> Option<i64> {
        self.intervals
            .iter()
            .filter(|i| i.pid == pid)
            .map(|i| i.end())
            .max()
    }
}
