use super::{Job, Task, TimeStep};
use crate::utils::{multiple_lcm, InputError, SimulationError};

/// The immutable task catalog of a run.
#[derive(Debug, Clone)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    /// Builds a catalog, rejecting empty sets and non-positive parameters.
    pub fn new(tasks: Vec<Task>) -> Result<Self, InputError> {
        if tasks.is_empty() {
            return Err(InputError::Empty);
        }

        for task in tasks.iter() {
            if task.wcet() == 0 {
                return Err(InputError::NonPositive { task: task.id(), field: "execution time" });
            }
            if task.period() == 0 {
                return Err(InputError::NonPositive { task: task.id(), field: "period" });
            }
        }

        Ok(Self { tasks })
    }

    /// Builds a catalog from `(wcet, period)` pairs, numbering tasks from 1 in input order.
    pub fn from_parameters(parameters: &[(TimeStep, TimeStep)]) -> Result<Self, InputError> {
        let tasks = parameters
            .iter()
            .zip(1..)
            .map(|(&(wcet, period), id)| Task::new(id, wcet, period))
            .collect();
        Self::new(tasks)
    }

    pub fn get_tasks(&self) -> &Vec<Task> {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Least common multiple of every period.
    pub fn hyperperiod(&self) -> Result<TimeStep, SimulationError> {
        multiple_lcm(&self.tasks.iter().map(|task| task.period()).collect::<Vec<_>>())
    }

    /// The first job of every task, all released at time 0.
    pub fn initial_jobs(&self) -> Vec<Job> {
        self.tasks.iter().map(|task| task.spawn_job(0)).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}
