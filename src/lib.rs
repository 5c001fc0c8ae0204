pub mod config;
pub mod error;
pub mod frame;
pub mod policy;
pub mod reference;
pub mod report;
pub mod simulation;

pub use error::{Result, SimulationError};
pub use policy::PolicyKind;
pub use reference::{Page, ReferenceString};
pub use simulation::{SimulationPhase, Simulator, StepResult};
