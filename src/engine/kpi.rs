//! Run quality metrics.
//!
//! Computes standard scheduling performance indicators from a completed
//! run's timeline and its process records.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest interval end |
//! | Total Waiting | Sum of per-process waiting times |
//! | Avg Waiting | Mean waiting time |
//! | Avg Turnaround | Mean turnaround time |
//! | CPU Utilization | busy_time / makespan |
//! | Preemptions | Intervals beyond one per process |

use crate::models::{Process, Timeline};

/// Aggregate figures for one completed run.
///
/// All time values are in clock ticks.
#[derive(Debug, Clone)]
pub struct SimulationKpi {
    /// Makespan: latest completion instant.
    pub makespan: i64,
    /// Sum of waiting times across all processes.
    pub total_waiting_time: i64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Fraction of the makespan spent executing (0.0..1.0); below 1.0
    /// when arrival gaps idled the clock.
    pub cpu_utilization: f64,
    /// Quantum-expiry preemptions (0 for non-preemptive runs).
    pub preemptions: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a run's timeline and final process records.
    pub fn calculate(timeline: &Timeline, processes: &[Process]) -> Self {
        let makespan = timeline.makespan();
        let total_waiting_time: i64 = processes.iter().map(|p| p.waiting_time).sum();
        let total_turnaround: i64 = processes.iter().map(|p| p.turnaround_time).sum();
        let count = processes.len();

        let avg_waiting_time = if count == 0 {
            0.0
        } else {
            total_waiting_time as f64 / count as f64
        };
        let avg_turnaround_time = if count == 0 {
            0.0
        } else {
            total_turnaround as f64 / count as f64
        };
        let cpu_utilization = if makespan > 0 {
            timeline.busy_time() as f64 / makespan as f64
        } else {
            0.0
        };

        Self {
            makespan,
            total_waiting_time,
            avg_waiting_time,
            avg_turnaround_time,
            cpu_utilization,
            preemptions: timeline.len().saturating_sub(count),
        }
    }
}
