pub mod generator;
pub mod simulation;

pub use generator::PassengerGenerator;
pub use simulation::spawn_reporter;
pub use simulation::Simulation;
