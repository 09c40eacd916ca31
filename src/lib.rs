/* Modules */
pub mod building;
pub mod config;
pub mod elevator;
pub mod shared;
pub mod simulation;

pub use building::Building;
pub use elevator::{CallBoard, Dispatcher, StepOutcome};
pub use shared::{Direction, Error, Passenger, Result, StopReport};
