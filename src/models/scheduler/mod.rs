pub mod scheduler;
pub mod edf_scheduler;
pub mod release;
pub mod dispatch;

pub use scheduler::Scheduler;
pub use edf_scheduler::EarliestDeadlineFirst;
pub use release::release_jobs;
pub use dispatch::dispatch;
