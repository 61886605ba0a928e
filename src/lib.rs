//! CPU scheduling simulator.
//!
//! Computes execution timelines, waiting times, and turnaround times for
//! a set of processes under four classical scheduling policies:
//! First-Come-First-Served, Shortest-Job-First, Priority, and
//! Round-Robin. Each run yields an ordered interval sequence suitable
//! for Gantt-style rendering plus final per-process statistics.
//!
//! The engine is a pure function over a process registry and a policy:
//! single virtual clock, no I/O, no background state. Runs either
//! complete with every process finished or fail with a structured error;
//! there is no partial-results path.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionInterval`, `Timeline`
//! - **`registry`**: Canonical process list with reset and fold-back
//! - **`policy`**: The four scheduling policies
//! - **`engine`**: The shared dispatch loop, error taxonomy, and run KPIs
//! - **`validation`**: Input integrity checks (duplicate pids, bad bursts)
//! - **`workload`**: Process-set construction from load samples or ranges
//!
//! # Example
//!
//! ```
//! use cpu_sched::engine::simulate;
//! use cpu_sched::models::Process;
//! use cpu_sched::policy::Policy;
//! use cpu_sched::registry::ProcessRegistry;
//!
//! let mut registry = ProcessRegistry::new(vec![
//!     Process::new(1, 4).with_name("indexer"),
//!     Process::new(2, 3).with_name("renderer").with_arrival_time(0),
//! ]);
//!
//! let timeline = simulate(&mut registry, Policy::RoundRobin { quantum: 2 }).unwrap();
//! assert_eq!(timeline.len(), 4); // two slices each
//! assert_eq!(registry.get(1).unwrap().end_time, 6);
//! assert_eq!(registry.get(2).unwrap().end_time, 7);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod engine;
pub mod models;
pub mod policy;
pub mod registry;
pub mod validation;
pub mod workload;
