//! Scheduling policies.
//!
//! One [`Policy`] variant per classical discipline. Each variant
//! contributes exactly one select-next decision over the ready queue plus
//! a slice length; the shared dispatch loop in [`crate::engine`] does
//! everything else.
//!
//! # Selection Convention
//! The ready queue holds indices into the process slice, in admission
//! order: arrival time first, input order among equal arrivals. Ties on
//! the selection criterion go to the first process reaching the extremum
//! in that order.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::SimulationError;
use crate::models::Process;
use crate::validation::{ValidationError, ValidationErrorKind};

/// A CPU scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    ///
    /// Dispatches the lowest arrival time first and runs it to
    /// completion. Stable on input order among equal arrivals.
    Fcfs,
    /// Shortest-Job-First.
    ///
    /// Dispatches the lowest full burst time first (job length, not
    /// remaining time) and runs it to completion.
    ///
    /// Smith (1956): optimal for mean flow time on a single machine.
    Sjf,
    /// Priority scheduling.
    ///
    /// Dispatches the highest priority value first and runs it to
    /// completion.
    Priority,
    /// Round-Robin.
    ///
    /// Dispatches the head of a FIFO ready queue for at most `quantum`
    /// ticks, preempting at quantum boundaries. A preempted process
    /// re-enqueues at the tail, after any processes that arrived during
    /// its slice.
    RoundRobin {
        /// Maximum contiguous slice granted before preemption (>= 1).
        quantum: i64,
    },
}

impl Policy {
    /// Canonical policy name, as accepted by [`Policy::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Priority => "PRIORITY",
            Policy::RoundRobin { .. } => "ROUND_ROBIN",
        }
    }

    /// Resolves a policy from a name supplied by a UI collaborator.
    ///
    /// Matching is case-insensitive; spaces and hyphens are treated as
    /// underscores. `quantum` is required for Round-Robin and ignored
    /// otherwise. Names outside the four supported values fail with
    /// [`SimulationError::UnknownPolicy`].
    pub fn from_name(name: &str, quantum: Option<i64>) -> Result<Self, SimulationError> {
        let normalized = name.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "priority" => Ok(Policy::Priority),
            "round_robin" => match quantum {
                Some(quantum) => Ok(Policy::RoundRobin { quantum }),
                None => Err(SimulationError::InvalidInput(vec![ValidationError::new(
                    ValidationErrorKind::NonPositiveQuantum,
                    "Round-Robin requires a quantum",
                )])),
            },
            _ => Err(SimulationError::UnknownPolicy(name.to_string())),
        }
    }

    /// Whether the policy may interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::RoundRobin { .. })
    }

    /// Selects the queue position of the next process to dispatch.
    ///
    /// `queue` holds indices into `procs` in admission order and must be
    /// non-empty.
    pub(crate) fn select_position(&self, queue: &VecDeque<usize>, procs: &[Process]) -> usize {
        match self {
            // Admission order is arrival order, so the head is correct
            // for both the non-preemptive FCFS and the FIFO queue of
            // Round-Robin.
            Policy::Fcfs | Policy::RoundRobin { .. } => 0,
            Policy::Sjf => {
                let mut best = 0;
                for pos in 1..queue.len() {
                    if procs[queue[pos]].burst_time < procs[queue[best]].burst_time {
                        best = pos;
                    }
                }
                best
            }
            Policy::Priority => {
                let mut best = 0;
                for pos in 1..queue.len() {
                    if procs[queue[pos]].priority > procs[queue[best]].priority {
                        best = pos;
                    }
                }
                best
            }
        }
    }

    /// Length of the next slice for a process with `remaining` time left.
    ///
    /// Non-preemptive policies run to completion in one slice;
    /// Round-Robin grants at most one quantum.
    pub(crate) fn slice_len(&self, remaining: i64) -> i64 {
        match self {
            Policy::RoundRobin { quantum } => remaining.min(*quantum),
            _ => remaining,
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin { quantum } => write!(f, "ROUND_ROBIN(q={quantum})"),
            _ => f.write_str(self.name()),
        }
    }
}
