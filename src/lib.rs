//! Preemptive earliest-deadline-first simulation of periodic tasks on one processor.
//!
//! The whole task set is simulated tick by tick over one hyperperiod, producing a
//! typed event trace and waiting-time statistics.

pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::{simulate, simulation, SimulationReport, SimulationState};
pub use models::scheduler;
pub use models::{Event, EventSink, Job, ReadySet, Statistics, Summary, Task, TaskSet, TimeStep, ID};
pub use utils::{constants, FinalizePolicy, InputError, RunCode, SimulationConfig, SimulationError};
