//! Simulation domain models.
//!
//! Core data types for representing scheduling inputs and results:
//! processes with their per-run statistics, and the execution timeline
//! a run produces.

mod process;
mod timeline;

pub use process::{Process, TIME_UNSET};
pub use timeline::{ExecutionInterval, Timeline};
