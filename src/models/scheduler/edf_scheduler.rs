use std::cmp::Ordering;

use super::scheduler::Scheduler;
use crate::Job;

/// Earliest deadline first. Ties go to the oldest release, then to the lowest task id.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarliestDeadlineFirst;

impl Scheduler for EarliestDeadlineFirst {
    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        a.absolute_deadline()
            .cmp(&b.absolute_deadline())
            .then_with(|| a.age().cmp(&b.age()))
            .then_with(|| a.task_id().cmp(&b.task_id()))
    }
}
