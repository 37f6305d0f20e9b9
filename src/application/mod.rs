mod simulation;
mod timer;

pub use simulation::{CellSurface, Simulation};
pub use timer::{DEFAULT_STEP_INTERVAL_MS, MIN_STEP_INTERVAL_MS, StepTimer};
