/***************************************/
/*        3rd party libraries          */
/***************************************/
use parking_lot::Mutex;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{FloorIndex, Passenger};

/**
 * Passengers waiting on each floor.
 *
 * Every floor has its own mutex-guarded list, kept in registration order. The
 * arrival path inserts while the dispatcher removes boarding passengers, so all
 * access goes through the lock. Callers validate the floor index before calling
 * in; an out of range index panics.
 */
pub struct FloorRegistry {
    floors: Vec<Mutex<Vec<Passenger>>>,
}

impl FloorRegistry {
    pub fn new(n_floors: usize) -> FloorRegistry {
        FloorRegistry {
            floors: (0..n_floors).map(|_| Mutex::new(Vec::new())).collect(),
        }
    }

    /// Returns false if the passenger was already waiting on this floor.
    pub fn insert(&self, floor: FloorIndex, passenger: Passenger) -> bool {
        let mut waiting = self.floors[floor].lock();
        if waiting.iter().any(|p| p.id() == passenger.id()) {
            return false;
        }
        waiting.push(passenger);
        true
    }

    pub fn waiting(&self, floor: FloorIndex) -> Vec<Passenger> {
        self.floors[floor].lock().clone()
    }

    pub fn len(&self, floor: FloorIndex) -> usize {
        self.floors[floor].lock().len()
    }

    pub fn total_waiting(&self) -> usize {
        self.floors.iter().map(|f| f.lock().len()).sum()
    }

    pub fn contains(&self, passenger: &Passenger) -> bool {
        self.floors
            .iter()
            .any(|f| f.lock().iter().any(|p| p.id() == passenger.id()))
    }

    /**
     * Removes up to `limit` passengers from `floor` that satisfy `accepts`,
     * scanning in registration order, and returns them in that order.
     *
     * The floor stays locked for the whole pass so a concurrent arrival can
     * never observe a half-boarded floor.
     */
    pub fn board<F>(&self, floor: FloorIndex, limit: usize, accepts: F) -> Vec<Passenger>
    where
        F: Fn(&Passenger) -> bool,
    {
        let mut waiting = self.floors[floor].lock();
        let mut boarded = Vec::new();
        let mut remaining = Vec::with_capacity(waiting.len());

        for passenger in waiting.drain(..) {
            if boarded.len() < limit && accepts(&passenger) {
                boarded.push(passenger);
            } else {
                remaining.push(passenger);
            }
        }

        *waiting = remaining;
        boarded
    }
}
