use super::{job::Job, TimeStep, ID};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    id: ID,
    wcet: TimeStep,     // C_i : Worst-case execution time.
    period: TimeStep,   // T_i : Period (also the relative deadline).
}

impl Task {
    pub fn new(id: ID, wcet: TimeStep, period: TimeStep) -> Self {
        Self { id, wcet, period }
    }

    pub fn id(&self) -> ID {
        self.id
    }

    pub fn wcet(&self) -> TimeStep {
        self.wcet
    }

    pub fn period(&self) -> TimeStep {
        self.period
    }

    /// Whether a new job of this task is released at time `t`.
    pub fn releases_at(&self, t: TimeStep) -> bool {
        t % self.period == 0
    }

    /// Builds the job released at time `t`, due one period later.
    pub fn spawn_job(&self, t: TimeStep) -> Job {
        Job::new(self.id, self.wcet, t + self.period, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_on_period_multiples_only() {
        let task = Task::new(1, 2, 4);
        assert!(task.releases_at(0));
        assert!(!task.releases_at(3));
        assert!(task.releases_at(8));
    }

    #[test]
    fn spawned_job_is_due_one_period_later() {
        let job = Task::new(3, 2, 5).spawn_job(10);
        assert_eq!(job.task_id(), 3);
        assert_eq!(job.remaining_time(), 2);
        assert_eq!(job.absolute_deadline(), 15);
        assert_eq!(job.age(), 10);
        assert_eq!(job.preempted_at(), 0);
    }
}
