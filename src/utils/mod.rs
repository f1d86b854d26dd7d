pub mod constants;
pub mod errors;
pub mod lcm;

pub use constants::{FinalizePolicy, RunCode, SimulationConfig};
pub use errors::{InputError, SimulationError};
pub use lcm::multiple_lcm;
