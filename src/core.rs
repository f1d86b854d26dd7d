use crate::models::scheduler::{dispatch, release_jobs};
use crate::models::{Event, EventSink, Statistics, Summary};
use crate::scheduler::{EarliestDeadlineFirst, Scheduler};
use crate::utils::{FinalizePolicy, SimulationConfig, SimulationError};
use crate::{Job, ReadySet, TaskSet, TimeStep};

/// Everything the simulation mutates, owned by the driver for the whole run.
#[derive(Debug)]
pub struct SimulationState<'a> {
    pub(crate) taskset: &'a TaskSet,
    pub(crate) ready: ReadySet,
    pub(crate) running: Option<Job>,     // Snapshot of the running job, mirrors the ready-set head
    pub(crate) stats: Statistics,
    pub(crate) hyperperiod: TimeStep,
    pub(crate) time: TimeStep,
}

impl<'a> SimulationState<'a> {
    /// Initial state: one job per task released at time 0, sorted by `policy`.
    pub fn new<P: Scheduler + ?Sized>(taskset: &'a TaskSet, policy: &P) -> Result<Self, SimulationError> {
        let hyperperiod = taskset.hyperperiod()?;
        let mut ready = ReadySet::with_jobs(taskset.initial_jobs())?;
        policy.sort(&mut ready);

        Ok(Self {
            taskset,
            ready,
            running: None,
            stats: Statistics::new(taskset.len()),
            hyperperiod,
            time: 0,
        })
    }

    /// Time 0: the head of the initial ready set starts.
    fn start<S: EventSink>(&mut self, sink: &mut S) {
        sink.record(Event::Snapshot { tick: 0, jobs: self.ready.by_age() });
        if let Some(head) = self.ready.head() {
            sink.record(Event::Start { tick: 0, task_id: head.task_id() });
        }
        self.execute();
    }

    /// Emits the completion of the running job and, unless the run is over, retires it.
    /// Returns `true` when the terminal tick was reached.
    fn retire_completed<S: EventSink>(&mut self, sink: &mut S) -> bool {
        let completed = self
            .running
            .as_ref()
            .filter(|job| job.is_complete())
            .map(|job| job.task_id());

        if let Some(task_id) = completed {
            sink.record(Event::Complete { tick: self.time, task_id });
            if self.time == self.hyperperiod {
                return true;
            }
            self.ready.remove_head();
            self.running = None;
        }

        self.time == self.hyperperiod
    }

    /// Runs the head of the ready set for one time unit.
    fn execute(&mut self) {
        if let Some(head) = self.ready.head_mut() {
            head.schedule();
            self.running = Some(head.clone());
        }
    }

    /// Credits the jobs still resident at the hyperperiod and produces the summary.
    fn finalize(&mut self, policy: FinalizePolicy) -> Summary {
        let hyperperiod = self.hyperperiod;
        let credited = self
            .ready
            .iter()
            .enumerate()
            .filter(|(index, job)| match policy {
                FinalizePolicy::SkipRunning => *index != 0,
                FinalizePolicy::Pending => !job.is_complete(),
            })
            .map(|(_, job)| job);

        for job in credited {
            self.stats.credit_wait(job, hyperperiod);
        }

        Summary {
            hyperperiod,
            total_waiting: self.stats.total_waiting(),
            jobs_created: self.stats.jobs_created(),
        }
    }
}

/// Trace and figures of a complete run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub events: Vec<Event>,
    pub summary: Summary,
}

/// Simulates preemptive EDF over one hyperperiod, streaming events into `sink`.
///
/// Each tick runs, in order: completion check, releases, dispatch, one unit of
/// execution. Time 0 only starts the initial head; the hyperperiod itself only
/// checks for a completion.
pub fn simulation<S: EventSink>(
    taskset: &TaskSet,
    config: SimulationConfig,
    sink: &mut S,
) -> Result<Summary, SimulationError> {
    let scheduler = EarliestDeadlineFirst;
    let mut state = SimulationState::new(taskset, &scheduler)?;
    let hyperperiod = state.hyperperiod;

    tracing::info!(tasks = taskset.len(), hyperperiod, "simulation started");

    for t in 0..=hyperperiod {
        state.time = t;

        if t == 0 {
            state.start(sink);
            continue;
        }

        if state.retire_completed(sink) {
            break;
        }

        let size_before = state.ready.len();
        let released = release_jobs(&mut state, sink)?;
        let dispatched = dispatch(&mut state, &scheduler, size_before, sink);
        state.execute();

        tracing::trace!(
            tick = t,
            released,
            dispatched,
            running = state.running.as_ref().map(|job| job.task_id()),
            "tick"
        );
    }

    let summary = state.finalize(config.finalize);

    tracing::info!(
        hyperperiod = summary.hyperperiod,
        total_waiting = summary.total_waiting,
        jobs_created = summary.jobs_created,
        "simulation finished"
    );

    Ok(summary)
}

/// Runs the simulation and collects the whole trace.
pub fn simulate(taskset: &TaskSet, config: SimulationConfig) -> Result<SimulationReport, SimulationError> {
    let mut events = Vec::new();
    let summary = simulation(taskset, config, &mut events)?;
    Ok(SimulationReport { events, summary })
}
