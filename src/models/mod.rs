mod job;
pub mod task;
pub mod taskset;
pub mod ready_set;
pub mod event;
pub mod statistics;
pub mod scheduler;

pub use job::Job;
pub use task::Task;
pub use taskset::TaskSet;
pub use ready_set::ReadySet;
pub use event::{Event, EventSink};
pub use statistics::{Statistics, Summary};

pub type TimeStep = usize;

pub type ID = u32;
