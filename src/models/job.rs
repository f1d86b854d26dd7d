use super::{TimeStep, ID};

/// One periodic release of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    task_id: ID,                    // Identifier for the associated task
    remaining_time: TimeStep,       // Remaining execution time for the job
    absolute_deadline: TimeStep,    // Tick by which this release must finish
    age: TimeStep,                  // Tick at which the job was released
    preempted_at: TimeStep,         // Tick of the last preemption, 0 if never preempted
}

impl Job {
    pub fn new(task_id: ID, remaining_time: TimeStep, absolute_deadline: TimeStep, age: TimeStep) -> Self {
        Self {
            task_id,
            remaining_time,
            absolute_deadline,
            age,
            preempted_at: 0,
        }
    }

    pub fn task_id(&self) -> ID {
        self.task_id
    }

    pub fn remaining_time(&self) -> TimeStep {
        self.remaining_time
    }

    pub fn absolute_deadline(&self) -> TimeStep {
        self.absolute_deadline
    }

    pub fn age(&self) -> TimeStep {
        self.age
    }

    pub fn preempted_at(&self) -> TimeStep {
        self.preempted_at
    }

    /// True when the job is still owed work at its deadline `t`.
    pub fn deadline_missed(&self, t: TimeStep) -> bool {
        self.remaining_time > 0 && t == self.absolute_deadline
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Pushes the deadline back by one period, keeping the work already done.
    pub fn extend_deadline(&mut self, period: TimeStep) {
        self.absolute_deadline += period;
    }

    pub fn set_preempted(&mut self, t: TimeStep) {
        self.preempted_at = t;
    }

    /// Tick from which the job has been waiting: the last preemption, or its release.
    pub fn waiting_since(&self) -> TimeStep {
        if self.preempted_at != 0 {
            self.preempted_at
        } else {
            self.age
        }
    }

    /// Runs the job for one time unit.
    pub fn schedule(&mut self) {
        self.remaining_time -= 1;
    }
}
