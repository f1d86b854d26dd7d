use crate::core::SimulationState;
use crate::models::{Event, EventSink};
use crate::utils::SimulationError;

/// Releases the jobs due at the current time and handles missed deadlines.
///
/// A task releasing at `t` whose previous job is still owed work at its deadline `t`
/// gets a miss event, and that job's deadline slips by one period. The new job is
/// appended regardless, so a task may have several live jobs.
///
/// Returns the number of jobs released.
pub fn release_jobs<S: EventSink>(
    state: &mut SimulationState<'_>,
    sink: &mut S,
) -> Result<usize, SimulationError> {
    let t = state.time;
    let taskset = state.taskset;
    let mut released = 0;

    for task in taskset.iter().filter(|task| task.releases_at(t)) {
        for job in state
            .ready
            .iter_mut()
            .filter(|job| job.task_id() == task.id() && job.deadline_missed(t))
        {
            tracing::warn!(tick = t, task = task.id(), remaining = job.remaining_time(), "deadline missed");
            sink.record(Event::Miss {
                tick: t,
                task_id: task.id(),
                remaining: job.remaining_time(),
            });

            // Keep the running snapshot in step so the slip alone is not seen as a preemption
            let was_running = state.running.as_ref() == Some(&*job);
            job.extend_deadline(task.period());
            if was_running {
                state.running = Some(job.clone());
            }
        }

        state.ready.insert(task.spawn_job(t))?;
        state.stats.job_created();
        released += 1;
    }

    if released > 0 {
        tracing::debug!(tick = t, released, resident = state.ready.len(), "released jobs");
    }

    Ok(released)
}
