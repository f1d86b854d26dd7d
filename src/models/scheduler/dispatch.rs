use super::scheduler::Scheduler;
use crate::core::SimulationState;
use crate::models::{Event, EventSink};

/// Decides which job runs after this tick's releases.
///
/// Only acts when the ready set changed size since `size_before` or nothing is
/// running. The previously running job is compared by value against the new head,
/// since sorting moves jobs around. Returns whether a dispatch decision was made.
pub fn dispatch<P, S>(state: &mut SimulationState<'_>, policy: &P, size_before: usize, sink: &mut S) -> bool
where
    P: Scheduler + ?Sized,
    S: EventSink,
{
    let t = state.time;
    let size_changed = state.ready.len() != size_before;

    if state.ready.is_empty() || (!size_changed && state.running.is_some()) {
        return false;
    }

    match state.running.take() {
        Some(previous) => {
            sink.record(Event::Snapshot { tick: t, jobs: state.ready.by_age() });

            let Some(head) = policy.elect(&mut state.ready).cloned() else {
                return false;
            };

            if head != previous {
                tracing::debug!(tick = t, preempted = previous.task_id(), elected = head.task_id(), "preemption");
                sink.record(Event::Preempt { tick: t, task_id: previous.task_id() });
                sink.record(Event::Start { tick: t, task_id: head.task_id() });

                for job in state.ready.iter_mut().filter(|job| **job == previous) {
                    job.set_preempted(t);
                }
                state.stats.credit_wait(&head, t);
            }

            state.running = Some(head);
        }
        None => {
            let Some(head) = policy.elect(&mut state.ready).cloned() else {
                return false;
            };

            if size_changed {
                sink.record(Event::Snapshot { tick: t, jobs: state.ready.by_age() });
            }

            tracing::debug!(tick = t, elected = head.task_id(), "idle processor picks up a job");
            sink.record(Event::Start { tick: t, task_id: head.task_id() });
            state.stats.credit_wait(&head, t);
            state.running = Some(head);
        }
    }

    true
}
