pub mod error;
pub mod macros;
pub mod structs;

pub use error::check_floor;
pub use error::Error;
pub use error::Result;
pub use structs::CarState;
pub use structs::Direction;
pub use structs::FloorIndex;
pub use structs::HallCall;
pub use structs::Passenger;
pub use structs::StopReport;
