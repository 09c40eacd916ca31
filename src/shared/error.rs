use std::fmt;

use crate::shared::FloorIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidArgument(String),
    OutOfRange { floor: FloorIndex, n_floors: usize },
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::OutOfRange { floor, n_floors } => write!(
                f,
                "Floor {} is out of range, must be within 0 and {}",
                floor,
                n_floors.saturating_sub(1)
            ),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Fails with `OutOfRange` unless `floor` lies in `[0, n_floors)`.
pub fn check_floor(floor: FloorIndex, n_floors: usize) -> Result<()> {
    if floor >= n_floors {
        return Err(Error::OutOfRange { floor, n_floors });
    }
    Ok(())
}
