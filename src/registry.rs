//! Process registry.
//!
//! Owns the canonical process list for the active run: immutable input
//! descriptors plus the mutable per-run scheduling results. No algorithm
//! lives here — the registry only resets state between runs and folds
//! working-copy results back in.

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// The canonical process list for a simulation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessRegistry {
    processes: Vec<Process>,
}

impl ProcessRegistry {
    /// Creates a registry over the given processes.
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    /// The process records, in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Mutable access to the process records.
    pub fn processes_mut(&mut self) -> &mut [Process] {
        &mut self.processes
    }

    /// Looks up a process by pid.
    pub fn get(&self, pid: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the registry holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Restores pristine simulation state on every process.
    ///
    /// Remaining time returns to the full burst, statistics zero out,
    /// start/end times clear. Static inputs are untouched.
    pub fn reset_for_simulation(&mut self) {
        for p in &mut self.processes {
            p.reset();
        }
    }

    /// Clones the process list for a working-copy run.
    pub fn snapshot(&self) -> Vec<Process> {
        self.processes.clone()
    }

    /// Folds simulation state from working copies back into the canonical
    /// records, matched by pid.
    ///
    /// Only copies that ran to completion (`remaining_time == 0`) fold
    /// back; partial progress never leaks into the registry.
    pub fn fold_completed(&mut self, working: &[Process]) {
        for w in working {
            if w.remaining_time != 0 {
                continue;
            }
            if let Some(p) = self.processes.iter_mut().find(|p| p.pid == w.pid) {
                p.remaining_time = w.remaining_time;
                p.waiting_time = w.waiting_time;
                p.turnaround_time = w.turnaround_time;
                p.start_time = w.start_time;
                p.end_time = w.end_time;
                p.completed = w.completed;
            }
        }
    }
}

impl FromIterator<Process> for ProcessRegistry {
    fn from_iter<I: IntoIterator<Item = Process>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
