pub mod policy;
pub mod simulate;

pub use policy::Policy;
pub use simulate::{SimConfig, SimulateMode};
