/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/***************************************/
/*       Public data structures        */
/***************************************/
pub type FloorIndex = usize;

static NEXT_PASSENGER_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    None,
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::None => write!(f, "none"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/**
 * A person travelling between two floors.
 *
 * Passengers are immutable once created. Every passenger gets a process-unique
 * `id`, so two passengers with the same origin and destination are still
 * distinct entries in the floor registry and the manifest.
 */
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Passenger {
    id: u64,
    origin: FloorIndex,
    destination: FloorIndex,
}

impl Passenger {
    pub fn new(origin: FloorIndex, destination: FloorIndex) -> Passenger {
        Passenger {
            id: NEXT_PASSENGER_ID.fetch_add(1, Ordering::Relaxed),
            origin,
            destination,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn origin(&self) -> FloorIndex {
        self.origin
    }

    pub fn destination(&self) -> FloorIndex {
        self.destination
    }

    /// Hall button this passenger presses on the origin floor.
    /// Someone asking for the floor they are already on presses down.
    pub fn hall_direction(&self) -> Direction {
        if self.destination > self.origin {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HallCall {
    pub floor: FloorIndex,
    pub direction: Direction,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StopReport {
    Boarded { count: usize, floor: FloorIndex },
    Alighted { count: usize, floor: FloorIndex },
}

impl fmt::Display for StopReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (count, floor, action) = match *self {
            StopReport::Boarded { count, floor } => (count, floor, "entered"),
            StopReport::Alighted { count, floor } => (count, floor, "left"),
        };
        let noun = if count == 1 { "passenger" } else { "passengers" };
        write!(f, "{} {} {} on the {} floor", count, noun, action, floor + 1)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CarState {
    pub position: FloorIndex,
    pub direction: Direction,
    pub passengers: Vec<Passenger>,
    pub capacity: usize,
}
