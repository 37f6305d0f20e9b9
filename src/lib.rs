// Domain layer - Grid data model and the life rule
pub mod domain;

// Application layer - Session state and step cadence
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, rules};
pub use application::{CellSurface, Simulation, StepTimer};
pub use ui::{Button, ConfigError, ControlKind, ControlPanel};
