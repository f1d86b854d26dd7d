use std::cmp::Ordering;

use super::{Job, TimeStep, ID};
use crate::utils::SimulationError;

/// Every job admitted and not yet completed, in dispatch order once sorted.
#[derive(Debug, Clone, Default)]
pub struct ReadySet {
    jobs: Vec<Job>,
}

impl ReadySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ready set holding `jobs`, sized to exactly that many.
    pub fn with_jobs(jobs: Vec<Job>) -> Result<Self, SimulationError> {
        let mut set = Self::new();
        set.jobs.try_reserve_exact(jobs.len())?;
        set.jobs.extend(jobs);
        Ok(set)
    }

    /// Appends a job at the tail, doubling the backing storage when it is full.
    pub fn insert(&mut self, job: Job) -> Result<(), SimulationError> {
        if self.jobs.len() == self.jobs.capacity() {
            self.jobs.try_reserve_exact(self.jobs.capacity().max(1))?;
        }
        self.jobs.push(job);
        Ok(())
    }

    /// Removes the job at the head, shifting the others down. No-op on an empty set.
    pub fn remove_head(&mut self) -> Option<Job> {
        if self.jobs.is_empty() {
            return None;
        }
        Some(self.jobs.remove(0))
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Job, &Job) -> Ordering,
    {
        self.jobs.sort_by(compare);
    }

    pub fn head(&self) -> Option<&Job> {
        self.jobs.first()
    }

    pub fn head_mut(&mut self) -> Option<&mut Job> {
        self.jobs.first_mut()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.jobs.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Job> {
        self.jobs.iter_mut()
    }

    /// `(task id, remaining time)` of every job, oldest release first.
    pub fn by_age(&self) -> Vec<(ID, TimeStep)> {
        let mut jobs: Vec<&Job> = self.jobs.iter().collect();
        jobs.sort_by_key(|job| (job.age(), job.task_id()));
        jobs.iter().map(|job| (job.task_id(), job.remaining_time())).collect()
    }
}
