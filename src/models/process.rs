//! Process model.
//!
//! A process is the schedulable unit of the simulator: static inputs
//! (burst time, priority, arrival time) fixed at construction, plus
//! mutable per-run simulation state reset before each run.
//!
//! # Time Representation
//! All times are integer ticks on a single virtual clock starting at 0.
//! The consumer defines what one tick means (e.g., a sampled load unit).

use serde::{Deserialize, Serialize};

/// Sentinel for time fields not yet set (`start_time`, `end_time`).
pub const TIME_UNSET: i64 = -1;

/// A process to be scheduled.
///
/// Static inputs describe the work; simulation state records what the
/// engine did with it. `waiting_time` and `turnaround_time` are enforced
/// at completion, not incrementally:
/// `turnaround = end - arrival`, `waiting = turnaround - burst`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: u32,
    /// Human-readable name (display only).
    pub name: String,
    /// Total CPU time required to run to completion (>= 1).
    pub burst_time: i64,
    /// Scheduling priority (higher = more important; Priority policy only).
    pub priority: i32,
    /// Instant the process becomes schedulable (>= 0).
    pub arrival_time: i64,
    /// CPU time still required; reaching 0 marks completion.
    pub remaining_time: i64,
    /// Time spent ready but not running (set at completion).
    pub waiting_time: i64,
    /// Time from arrival to completion (set at completion).
    pub turnaround_time: i64,
    /// First instant the process was ever dispatched; -1 = never started.
    pub start_time: i64,
    /// Instant of final completion; -1 = not completed.
    pub end_time: i64,
    /// Whether the process has run to completion.
    pub completed: bool,
}

impl Process {
    /// Creates a process with the given identity and burst time.
    ///
    /// Priority and arrival time default to 0; simulation state starts
    /// in the reset position.
    pub fn new(pid: u32, burst_time: i64) -> Self {
        Self {
            pid,
            name: String::new(),
            burst_time,
            priority: 0,
            arrival_time: 0,
            remaining_time: burst_time,
            waiting_time: 0,
            turnaround_time: 0,
            start_time: TIME_UNSET,
            end_time: TIME_UNSET,
            completed: false,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Restores pristine simulation state without touching static inputs.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.waiting_time = 0;
        self.turnaround_time = 0;
        self.start_time = TIME_UNSET;
        self.end_time = TIME_UNSET;
        self.completed = false;
    }

    /// Whether the process has arrived by `clock` and is not yet completed.
    pub fn is_eligible_at(&self, clock: i64) -> bool {
        !self.completed && self.arrival_time <= clock
    }

    /// Whether the process has ever been dispatched.
    pub fn has_started(&self) -> bool {
        self.start_time != TIME_UNSET
    }
}
