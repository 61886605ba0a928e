//! Workload construction.
//!
//! Builds process sets for the simulator: bursts derived from sampled CPU
//! load percentages (the live-sampler path) or drawn from ranges for
//! tests and demos. Randomness always flows through a caller-supplied
//! RNG, so seeded runs are reproducible.

use rand::Rng;

use crate::models::Process;

/// Smallest burst a sampled load maps to.
pub const MIN_SAMPLED_BURST: i64 = 1;
/// Largest burst a sampled load maps to.
pub const MAX_SAMPLED_BURST: i64 = 10;

/// Converts a sampled load percentage (0.0–100.0) into a burst time.
///
/// The percentage scales down by 10 and clamps between
/// [`MIN_SAMPLED_BURST`] and [`MAX_SAMPLED_BURST`], so 0–100% covers the
/// full burst range and out-of-range samples stay valid.
pub fn burst_from_load(percent: f64) -> i64 {
    ((percent / 10.0).round() as i64).clamp(MIN_SAMPLED_BURST, MAX_SAMPLED_BURST)
}

/// Builds a process from one load sample.
pub fn process_from_sample(pid: u32, name: impl Into<String>, load_percent: f64) -> Process {
    Process::new(pid, burst_from_load(load_percent)).with_name(name)
}

/// Synthetic workload generator.
///
/// Produces processes with sequential pids (starting at 1) and uniformly
/// drawn burst, arrival, and priority values. All ranges are inclusive.
///
/// # Example
///
/// ```
/// use cpu_sched::workload::SyntheticWorkload;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let processes = SyntheticWorkload::new(4)
///     .with_arrival_range(0, 5)
///     .with_priority_range(1, 9)
///     .generate(&mut rng);
/// assert_eq!(processes.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticWorkload {
    count: usize,
    burst_range: (i64, i64),
    arrival_range: (i64, i64),
    priority_range: (i32, i32),
}

impl SyntheticWorkload {
    /// Creates a generator for `count` processes.
    ///
    /// Defaults: bursts in the sampled range [1, 10], all arrivals at 0,
    /// all priorities 0.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            burst_range: (MIN_SAMPLED_BURST, MAX_SAMPLED_BURST),
            arrival_range: (0, 0),
            priority_range: (0, 0),
        }
    }

    /// Sets the inclusive burst time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the inclusive arrival time range.
    pub fn with_arrival_range(mut self, min: i64, max: i64) -> Self {
        self.arrival_range = (min, max);
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max);
        self
    }

    /// Generates the process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (0..self.count)
            .map(|i| {
                let pid = i as u32 + 1;
                Process::new(pid, rng.random_range(self.burst_range.0..=self.burst_range.1))
                    .with_name(format!("P{pid}"))
                    .with_arrival_time(
                        rng.random_range(self.arrival_range.0..=self.arrival_range.1),
                    )
                    .with_priority(
                        rng.random_range(self.priority_range.0..=self.priority_range.1),
                    )
            })
            .collect()
    }
}
