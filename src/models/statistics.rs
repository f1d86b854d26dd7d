use std::fmt;

use super::{Job, TimeStep};

/// Running totals kept while the simulation advances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    total_waiting: TimeStep,
    jobs_created: usize,
}

impl Statistics {
    pub fn new(jobs_created: usize) -> Self {
        Self {
            total_waiting: 0,
            jobs_created,
        }
    }

    pub fn job_created(&mut self) {
        self.jobs_created += 1;
    }

    /// Credits the time `job` has been waiting as of `t`.
    pub fn credit_wait(&mut self, job: &Job, t: TimeStep) {
        self.total_waiting += t - job.waiting_since();
    }

    pub fn total_waiting(&self) -> TimeStep {
        self.total_waiting
    }

    pub fn jobs_created(&self) -> usize {
        self.jobs_created
    }
}

/// Final figures of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub hyperperiod: TimeStep,
    pub total_waiting: TimeStep,
    pub jobs_created: usize,
}

impl Summary {
    /// Total waiting time divided by every job ever created.
    pub fn average_waiting(&self) -> f64 {
        if self.jobs_created == 0 {
            return 0.0;
        }
        self.total_waiting as f64 / self.jobs_created as f64
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: Max Time reached", self.hyperperiod)?;
        writeln!(f, "Sum of all waiting times: {}", self.total_waiting)?;
        writeln!(f, "Number of processes created: {}", self.jobs_created)?;
        write!(f, "Average Waiting Time: {:.2}", self.average_waiting())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_is_measured_from_last_preemption() {
        let mut stats = Statistics::new(1);
        let mut job = Job::new(1, 2, 6, 0);
        stats.credit_wait(&job, 1);
        job.set_preempted(2);
        stats.credit_wait(&job, 5);
        assert_eq!(stats.total_waiting(), 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn crediting_before_the_anchor_overflows() {
        let mut stats = Statistics::new(1);
        let mut job = Job::new(1, 2, 12, 0);
        job.set_preempted(6);
        stats.credit_wait(&job, 4);
    }

    #[test]
    fn summary_renders_two_decimal_average() {
        let summary = Summary {
            hyperperiod: 6,
            total_waiting: 8,
            jobs_created: 3,
        };
        assert_eq!(
            summary.to_string(),
            "6: Max Time reached\n\
             Sum of all waiting times: 8\n\
             Number of processes created: 3\n\
             Average Waiting Time: 2.67"
        );
    }
}
