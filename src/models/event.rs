use std::fmt;

use super::{TimeStep, ID};

/// Something observable that happened during a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Ready-set contents as `(task id, remaining time)`, oldest release first.
    Snapshot { tick: TimeStep, jobs: Vec<(ID, TimeStep)> },
    Start { tick: TimeStep, task_id: ID },
    Preempt { tick: TimeStep, task_id: ID },
    Miss { tick: TimeStep, task_id: ID, remaining: TimeStep },
    Complete { tick: TimeStep, task_id: ID },
}

impl Event {
    pub fn tick(&self) -> TimeStep {
        match self {
            Event::Snapshot { tick, .. }
            | Event::Start { tick, .. }
            | Event::Preempt { tick, .. }
            | Event::Miss { tick, .. }
            | Event::Complete { tick, .. } => *tick,
        }
    }

    pub fn is_snapshot(&self) -> bool {
        matches!(self, Event::Snapshot { .. })
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Snapshot { tick, jobs } => {
                write!(f, "{tick}: processes:")?;
                for (task_id, remaining) in jobs {
                    write!(f, " {task_id} ({remaining} ms)")?;
                }
                Ok(())
            }
            Event::Start { tick, task_id } => write!(f, "{tick}: process {task_id} starts"),
            Event::Preempt { tick, task_id } => write!(f, "{tick}: process {task_id} preempted!"),
            Event::Miss { tick, task_id, remaining } => {
                write!(f, "{tick}: process {task_id} missed deadline ({remaining} ms left)")
            }
            Event::Complete { tick, task_id } => write!(f, "{tick}: process {task_id} ends"),
        }
    }
}

/// Receives events in chronological order as the simulation produces them.
pub trait EventSink {
    fn record(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn record(&mut self, event: Event) {
        self.push(event);
    }
}
