use std::collections::TryReserveError;

use thiserror::Error;

use crate::models::{TimeStep, ID};

/// Fatal conditions that abort a simulation run.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("ready set could not grow: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("hyperperiod overflow while combining periods {a} and {b}")]
    HyperperiodOverflow { a: TimeStep, b: TimeStep },
}

/// Problems found while loading a task catalog.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read tasks: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed task file: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: invalid {field} {value:?}")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("task {task}: {field} must be positive")]
    NonPositive { task: ID, field: &'static str },

    #[error("no tasks to schedule")]
    Empty,
}
