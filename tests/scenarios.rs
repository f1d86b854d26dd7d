use uniprocessor::{simulate, Event, FinalizePolicy, SimulationConfig, SimulationReport, TaskSet, TimeStep};

fn run(parameters: &[(TimeStep, TimeStep)]) -> SimulationReport {
    let taskset = TaskSet::from_parameters(parameters).expect("valid task set");
    simulate(&taskset, SimulationConfig::default()).expect("simulation runs")
}

fn snapshot(tick: TimeStep, jobs: &[(u32, TimeStep)]) -> Event {
    Event::Snapshot { tick, jobs: jobs.to_vec() }
}

fn start(tick: TimeStep, task_id: u32) -> Event {
    Event::Start { tick, task_id }
}

fn ends(tick: TimeStep, task_id: u32) -> Event {
    Event::Complete { tick, task_id }
}

#[test]
fn two_tasks_with_idle_gaps() {
    let report = run(&[(1, 4), (2, 6)]);

    assert_eq!(
        report.events,
        vec![
            snapshot(0, &[(1, 1), (2, 2)]),
            start(0, 1),
            ends(1, 1),
            start(1, 2),
            ends(3, 2),
            snapshot(4, &[(1, 1)]),
            start(4, 1),
            ends(5, 1),
            snapshot(6, &[(2, 2)]),
            start(6, 2),
            ends(8, 2),
            snapshot(8, &[(1, 1)]),
            start(8, 1),
            ends(9, 1),
        ]
    );
    assert_eq!(report.summary.hyperperiod, 12);
    assert_eq!(report.summary.total_waiting, 1);
    assert_eq!(report.summary.jobs_created, 5);
    assert!((report.summary.average_waiting() - 0.2).abs() < 1e-9);
}

#[test]
fn shorter_period_preempts_and_resumes() {
    let report = run(&[(3, 6), (1, 2)]);

    assert_eq!(
        report.events,
        vec![
            snapshot(0, &[(1, 3), (2, 1)]),
            start(0, 2),
            ends(1, 2),
            start(1, 1),
            snapshot(2, &[(1, 2), (2, 1)]),
            Event::Preempt { tick: 2, task_id: 1 },
            start(2, 2),
            ends(3, 2),
            start(3, 1),
            snapshot(4, &[(1, 1), (2, 1)]),
            ends(5, 1),
            start(5, 2),
            ends(6, 2),
        ]
    );
    // 1 (task 1 at tick 1) + 1 (task 1 resumes at 3 after preemption at 2) + 1 (task 2 at 5)
    assert_eq!(report.summary.total_waiting, 3);
    assert_eq!(report.summary.jobs_created, 4);
}

#[test]
fn long_job_is_preempted_twice_and_resumes_each_time() {
    let report = run(&[(6, 12), (1, 3)]);

    assert_eq!(
        report.events,
        vec![
            snapshot(0, &[(1, 6), (2, 1)]),
            start(0, 2),
            ends(1, 2),
            start(1, 1),
            snapshot(3, &[(1, 4), (2, 1)]),
            Event::Preempt { tick: 3, task_id: 1 },
            start(3, 2),
            ends(4, 2),
            start(4, 1),
            snapshot(6, &[(1, 2), (2, 1)]),
            Event::Preempt { tick: 6, task_id: 1 },
            start(6, 2),
            ends(7, 2),
            start(7, 1),
            ends(9, 1),
            snapshot(9, &[(2, 1)]),
            start(9, 2),
            ends(10, 2),
        ]
    );
    // 1 (first start at 1) + 1 (resumes at 4 after 3) + 1 (resumes at 7 after 6)
    assert_eq!(report.summary.total_waiting, 3);
    assert_eq!(report.summary.jobs_created, 5);
    assert_eq!(format!("{:.2}", report.summary.average_waiting()), "0.60");
}

#[test]
fn overrun_misses_and_slips_its_deadline() {
    let report = run(&[(5, 3), (1, 6)]);

    assert_eq!(
        report.events,
        vec![
            snapshot(0, &[(1, 5), (2, 1)]),
            start(0, 1),
            Event::Miss { tick: 3, task_id: 1, remaining: 2 },
            snapshot(3, &[(1, 2), (2, 1), (1, 5)]),
            ends(5, 1),
            start(5, 2),
            ends(6, 2),
        ]
    );
    // Task 2 waits 5 ticks; the second job of task 1 never runs and is credited 6 - 3
    assert_eq!(report.summary.total_waiting, 8);
    assert_eq!(report.summary.jobs_created, 3);
    assert_eq!(
        format!("{:.2}", report.summary.average_waiting()),
        "2.67"
    );
}

#[test]
fn single_task_runs_back_to_back() {
    let report = run(&[(3, 3)]);

    assert_eq!(report.summary.hyperperiod, 3);
    assert_eq!(report.summary.total_waiting, 0);
    assert!(report.events.iter().all(|event| !matches!(event, Event::Miss { .. })));
}

#[test]
fn single_overrunning_task_stops_before_its_second_release() {
    // The only release after time 0 would fall on the hyperperiod itself
    let report = run(&[(5, 3)]);

    assert_eq!(report.events, vec![snapshot(0, &[(1, 5)]), start(0, 1)]);
    assert_eq!(report.summary.jobs_created, 1);
}

#[test]
fn finalize_policies_agree_when_the_head_completed_on_the_last_tick() {
    let taskset = TaskSet::from_parameters(&[(5, 3), (1, 6)]).unwrap();

    let skip = simulate(&taskset, SimulationConfig { finalize: FinalizePolicy::SkipRunning }).unwrap();
    let pending = simulate(&taskset, SimulationConfig { finalize: FinalizePolicy::Pending }).unwrap();

    // Task 2 completes on the terminal tick, so both policies leave it out
    assert_eq!(skip.summary.total_waiting, pending.summary.total_waiting);
    assert_eq!(skip.events, pending.events);
}

#[test]
fn rendered_trace_lines_and_summary() {
    let report = run(&[(1, 4), (2, 6)]);
    let lines: Vec<String> = report.events.iter().take(4).map(|event| event.to_string()).collect();

    assert_eq!(
        lines,
        vec![
            "0: processes: 1 (1 ms) 2 (2 ms)",
            "0: process 1 starts",
            "1: process 1 ends",
            "1: process 2 starts",
        ]
    );
    assert_eq!(
        report.summary.to_string(),
        "12: Max Time reached\n\
         Sum of all waiting times: 1\n\
         Number of processes created: 5\n\
         Average Waiting Time: 0.20"
    );
}
