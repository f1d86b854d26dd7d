use std::str::FromStr;

/// Process exit codes of the simulator binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunCode {
    Completed = 0,
    Aborted = 1,
    InvalidInput = 5,
}

/// Which jobs still resident at the hyperperiod are credited with their final wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinalizePolicy {
    /// Every resident job except the ready-set head, i.e. the job that was running
    /// or that completed on the terminal tick.
    #[default]
    SkipRunning,
    /// Every resident job that still has work left, the running one included.
    Pending,
}

impl FromStr for FinalizePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip-running" => Ok(FinalizePolicy::SkipRunning),
            "pending" => Ok(FinalizePolicy::Pending),
            other => Err(format!("unknown finalize policy '{other}'")),
        }
    }
}

/// Knobs handed to the simulation driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationConfig {
    pub finalize: FinalizePolicy,
}
