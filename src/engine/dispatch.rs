//! Shared dispatch loop.
//!
//! One clock-advance loop serves all four policies; each [`Policy`]
//! contributes only its select-next decision and slice length.
//!
//! # Algorithm
//!
//! 1. Validate the process set and policy parameters.
//! 2. Reset every process to pristine simulation state.
//! 3. Admit arrived processes to the ready queue in arrival order.
//! 4. Ask the policy which queued process runs next and for how long.
//! 5. Advance the clock by the slice; jump forward over idle gaps.
//! 6. Re-enqueue a preempted process after same-slice arrivals.
//!
//! # Complexity
//! O(n^2 + n * burst / quantum) for n processes: each dispatch scans the
//! ready queue once, and Round-Robin dispatches ceil(burst / quantum)
//! slices per process.

use std::collections::VecDeque;
use std::fmt;

use crate::models::{ExecutionInterval, Process, Timeline};
use crate::policy::Policy;
use crate::registry::ProcessRegistry;
use crate::validation::{validate_input, ValidationError};

/// A failed simulation run.
///
/// Every failure is a deterministic function of the input; none is
/// retried, and no partial timeline is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process set or policy parameters failed validation.
    InvalidInput(Vec<ValidationError>),
    /// The clock could not advance: the eligible set was empty and no
    /// future arrival existed among incomplete processes.
    Stalled {
        /// Clock value at the stall.
        time: i64,
    },
    /// A policy name outside the four supported values.
    UnknownPolicy(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    f.write_str(&e.message)?;
                }
                Ok(())
            }
            Self::Stalled { time } => write!(
                f,
                "simulation stalled at t={time}: no eligible process and no future arrival"
            ),
            Self::UnknownPolicy(name) => write!(f, "unknown policy '{name}'"),
        }
    }
}

impl std::error::Error for SimulationError {}

/// Runs one complete simulation of `policy` over the registry's processes.
///
/// The registry is reset before the run, so repeated calls always start
/// from pristine per-process counters. On success every process is
/// completed and the returned timeline accounts for exactly the sum of
/// burst times; on failure no timeline is produced.
///
/// Round-Robin operates on a snapshot of the registry and folds final
/// statistics back by pid once the run completes, so partial slice
/// progress never leaks into the canonical records.
pub fn simulate(
    registry: &mut ProcessRegistry,
    policy: Policy,
) -> Result<Timeline, SimulationError> {
    validate_input(registry.processes(), &policy).map_err(SimulationError::InvalidInput)?;
    registry.reset_for_simulation();

    if policy.is_preemptive() {
        let mut working = registry.snapshot();
        let timeline = run_dispatch_loop(&mut working, policy)?;
        registry.fold_completed(&working);
        Ok(timeline)
    } else {
        run_dispatch_loop(registry.processes_mut(), policy)
    }
}

/// The dispatch/clock-advance loop shared by all policies.
///
/// `procs` must be in reset state. The ready queue holds indices into
/// `procs`; admission follows arrival order (input order among equals),
/// which fixes the tie-break iteration order for every policy.
fn run_dispatch_loop(procs: &mut [Process], policy: Policy) -> Result<Timeline, SimulationError> {
    let mut order: Vec<usize> = (0..procs.len()).collect();
    order.sort_by_key(|&i| procs[i].arrival_time);

    let mut timeline = Timeline::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut next_admit = 0usize;
    let mut clock: i64 = 0;
    let mut completed = 0usize;

    while completed < procs.len() {
        admit_arrived(&order, procs, &mut next_admit, clock, &mut queue);

        if queue.is_empty() {
            // Idle gap: jump the clock to the next arrival.
            match order.get(next_admit) {
                Some(&i) => {
                    clock = procs[i].arrival_time;
                    continue;
                }
                None => return Err(SimulationError::Stalled { time: clock }),
            }
        }

        let pos = policy.select_position(&queue, procs);
        let Some(idx) = queue.remove(pos) else {
            return Err(SimulationError::Stalled { time: clock });
        };

        let slice = policy.slice_len(procs[idx].remaining_time);
        if !procs[idx].has_started() {
            procs[idx].start_time = clock;
        }
        timeline.push(ExecutionInterval::new(procs[idx].pid, clock, slice));
        clock += slice;
        procs[idx].remaining_time -= slice;

        // Processes arriving during the slice (the slice-end instant
        // included) queue ahead of a preempted one.
        admit_arrived(&order, procs, &mut next_admit, clock, &mut queue);

        if procs[idx].remaining_time > 0 {
            queue.push_back(idx);
        } else {
            let p = &mut procs[idx];
            p.end_time = clock;
            p.turnaround_time = p.end_time - p.arrival_time;
            p.waiting_time = p.turnaround_time - p.burst_time;
            p.completed = true;
            completed += 1;
        }
    }

    Ok(timeline)
}

/// Admits every not-yet-queued process with `arrival_time <= clock`,
/// in arrival order.
fn admit_arrived(
    order: &[usize],
    procs: &[Process],
    next_admit: &mut usize,
    clock: i64,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&i) = order.get(*next_admit) {
        if procs[i].arrival_time > clock {
            break;
        }
        queue.push_back(i);
        *next_admit += 1;
    }
}
