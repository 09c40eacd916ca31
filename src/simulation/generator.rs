use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::building::Building;
use crate::shared::{Passenger, Result};

/// Random passengers with origin and destination drawn uniformly over the
/// floors. Origin and destination may coincide.
pub struct PassengerGenerator {
    rng: StdRng,
    n_floors: usize,
}

impl PassengerGenerator {
    pub fn new(n_floors: usize, seed: Option<u64>) -> PassengerGenerator {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        PassengerGenerator { rng, n_floors }
    }

    pub fn next_passenger(&mut self) -> Passenger {
        let origin = self.rng.gen_range(0..self.n_floors);
        let destination = self.rng.gen_range(0..self.n_floors);
        Passenger::new(origin, destination)
    }

    /// Adds `count` new passengers to the building, each on their origin floor.
    pub fn populate(&mut self, building: &Building, count: usize) -> Result<Vec<Passenger>> {
        let mut added = Vec::with_capacity(count);
        for _ in 0..count {
            let passenger = self.next_passenger();
            building.add_passenger(passenger.origin(), passenger)?;
            added.push(passenger);
        }
        Ok(added)
    }
}
