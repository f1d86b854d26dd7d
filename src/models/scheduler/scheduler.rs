use std::cmp::Ordering;

use crate::{Job, ReadySet};

/// A job ordering policy: decides which ready job runs next.
pub trait Scheduler {
    /// `Ordering::Less` when `a` should run before `b`.
    fn compare(&self, a: &Job, b: &Job) -> Ordering;

    /// Reorders the ready set so that its head is the job to run.
    fn sort(&self, ready: &mut ReadySet) {
        ready.sort_by(|a, b| self.compare(a, b));
    }

    /// Sorts the ready set and returns the elected job, if any.
    fn elect<'a>(&self, ready: &'a mut ReadySet) -> Option<&'a Job> {
        self.sort(ready);
        ready.head()
    }
}
