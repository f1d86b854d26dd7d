use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use uniprocessor::{simulation, Event, FinalizePolicy, InputError, RunCode, SimulationConfig, TaskSet, TimeStep};

/// One line of a task file: `wcet, period`.
#[derive(Debug, Deserialize)]
struct TaskRecord {
    wcet: TimeStep,
    period: TimeStep,
}

/// Reads a task set file and returns a `TaskSet`
pub fn read_task_file<P: AsRef<Path>>(file_path: P) -> Result<TaskSet, InputError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_path(file_path)?;

    let mut parameters = Vec::new();
    for result in rdr.deserialize() {
        let record: TaskRecord = result?;
        parameters.push((record.wcet, record.period));
    }

    TaskSet::from_parameters(&parameters)
}

/// Reads a task set interactively, prompting on `output` for every value.
pub fn read_task_prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<TaskSet, InputError> {
    let mut line_number = 0;
    let mut prompt = |text: String, field: &'static str| -> Result<TimeStep, InputError> {
        write!(output, "{text}")?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        line_number += 1;

        line.trim().parse().map_err(|_| InputError::Parse {
            line: line_number,
            field,
            value: line.trim().to_string(),
        })
    };

    let count = prompt("Enter the number of processes to schedule: ".to_string(), "process count")?;
    let mut parameters = Vec::new();
    for i in 1..=count {
        let wcet = prompt(format!("Enter the CPU time of process {i}: "), "execution time")?;
        let period = prompt(format!("Enter the period of process {i}: "), "period")?;
        parameters.push((wcet, period));
    }

    TaskSet::from_parameters(&parameters)
}

pub fn build_cli_command() -> Command {
    Command::new("EDF Simulator")
    .version("1.0")
    .about("Simulates preemptive EDF scheduling of periodic tasks over one hyperperiod")

    .arg(Arg::new("task_file")
        .required(false)
        .help("CSV file with one `wcet, period` line per task; prompts on stdin when omitted"))

    .arg(Arg::new("finalize")
        .long("finalize")
        .help("Which jobs left at the hyperperiod are credited with their wait")
        .value_parser(["skip-running", "pending"])
        .default_value("skip-running"))

    .arg(Arg::new("no_snapshots")
        .long("no-snapshots")
        .action(ArgAction::SetTrue)
        .help("Do not print the per-tick ready-set listing"))
}

/// Pulls the simulation settings out of parsed arguments.
pub fn simulation_config(matches: &ArgMatches) -> SimulationConfig {
    let finalize = matches
        .get_one::<String>("finalize")
        .and_then(|value| value.parse::<FinalizePolicy>().ok())
        .unwrap_or_default();
    SimulationConfig { finalize }
}

/// Writes events as text lines as they are produced.
struct TraceWriter<W: Write> {
    out: W,
    snapshots: bool,
    error: Option<io::Error>,
}

impl<W: Write> uniprocessor::EventSink for TraceWriter<W> {
    fn record(&mut self, event: Event) {
        if self.error.is_some() || (!self.snapshots && event.is_snapshot()) {
            return;
        }
        if let Err(err) = writeln!(self.out, "{event}") {
            self.error = Some(err);
        }
    }
}

fn main() {
    // cargo run [task_file] [--finalize skip-running|pending] [--no-snapshots]
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let matches: ArgMatches = build_cli_command().get_matches();
    let config = simulation_config(&matches);

    let loaded = match matches.get_one::<String>("task_file") {
        Some(path) => read_task_file(path),
        None => read_task_prompt(&mut io::stdin().lock(), &mut io::stdout()),
    };

    let taskset = match loaded {
        Ok(taskset) => taskset,
        Err(e) => {
            eprintln!("Error reading tasks: {}", e);
            process::exit(RunCode::InvalidInput as i32);
        }
    };

    let stdout = io::stdout();
    let mut writer = TraceWriter {
        out: BufWriter::new(stdout.lock()),
        snapshots: !matches.get_flag("no_snapshots"),
        error: None,
    };

    let summary = match simulation(&taskset, config, &mut writer) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Simulation aborted: {}", e);
            process::exit(RunCode::Aborted as i32);
        }
    };

    let written = match writer.error.take() {
        Some(err) => Err(err),
        None => writeln!(writer.out, "{summary}").and_then(|_| writer.out.flush()),
    };
    if let Err(e) = written {
        eprintln!("Error writing trace: {}", e);
        process::exit(RunCode::Aborted as i32);
    }

    process::exit(RunCode::Completed as i32);
}
