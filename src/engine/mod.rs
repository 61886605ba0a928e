//! Simulation engine.
//!
//! The shared dispatch/clock-advance loop driving all four policies, the
//! run-level error taxonomy, and aggregate quality metrics.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::engine::simulate;
//! use cpu_sched::models::Process;
//! use cpu_sched::policy::Policy;
//! use cpu_sched::registry::ProcessRegistry;
//!
//! let mut registry = ProcessRegistry::new(vec![
//!     Process::new(1, 5),
//!     Process::new(2, 3).with_arrival_time(1),
//! ]);
//!
//! let timeline = simulate(&mut registry, Policy::Fcfs).unwrap();
//! assert_eq!(timeline.makespan(), 8);
//! assert_eq!(registry.get(2).unwrap().waiting_time, 4);
//! ```

mod dispatch;
mod kpi;

pub use dispatch::{simulate, SimulationError};
pub use kpi::SimulationKpi;
