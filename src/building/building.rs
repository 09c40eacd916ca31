/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, trace};
use parking_lot::Mutex;
use std::collections::HashSet;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::FloorRegistry;
use crate::shared::{check_floor, Direction, Error, FloorIndex, HallCall, Passenger, Result};

/**
 * The building the car serves.
 *
 * Owns the floor registry and the sending side of the hall-call channel. The
 * dispatcher holds the only call board and drains the channel before every
 * step, so hall buttons pressed from any thread reach it without sharing the
 * board itself.
 *
 * # Fields
 * - `n_floors`:        Number of floors, always at least one.
 * - `registry`:        Passengers waiting on each floor.
 * - `admitted`:        Ids of every passenger ever added, so nobody is
 *                      registered twice or while riding the car.
 * - `hall_call_tx`:    Hall calls from arrivals and reconciliation.
 * - `hall_call_rx`:    Handed out to the dispatcher.
 */
pub struct Building {
    n_floors: usize,
    registry: FloorRegistry,
    admitted: Mutex<HashSet<u64>>,
    hall_call_tx: cbc::Sender<HallCall>,
    hall_call_rx: cbc::Receiver<HallCall>,
}

impl Building {
    pub fn new(n_floors: usize) -> Result<Building> {
        if n_floors == 0 {
            return Err(Error::InvalidArgument(
                "the building must have at least one floor".to_string(),
            ));
        }

        let (hall_call_tx, hall_call_rx) = cbc::unbounded::<HallCall>();

        Ok(Building {
            n_floors,
            registry: FloorRegistry::new(n_floors),
            admitted: Mutex::new(HashSet::new()),
            hall_call_tx,
            hall_call_rx,
        })
    }

    pub fn n_floors(&self) -> usize {
        self.n_floors
    }

    pub fn registry(&self) -> &FloorRegistry {
        &self.registry
    }

    pub fn check(&self, floor: FloorIndex) -> Result<()> {
        check_floor(floor, self.n_floors)
    }

    pub fn hall_calls(&self) -> cbc::Receiver<HallCall> {
        self.hall_call_rx.clone()
    }

    /// Presses a hall button. The flag is set on the dispatcher's next step.
    pub fn request_hall_call(&self, floor: FloorIndex, direction: Direction) -> Result<()> {
        self.check(floor)?;
        if direction == Direction::None {
            return Err(Error::InvalidArgument(
                "a hall call needs an up or down direction".to_string(),
            ));
        }

        // The building keeps a receiver alive, so the channel never disconnects
        let _ = self.hall_call_tx.send(HallCall { floor, direction });
        Ok(())
    }

    /**
     * Registers a passenger waiting on `floor` and presses the hall button
     * matching their direction of travel.
     *
     * Fails with `OutOfRange` when `floor` or the passenger's own floors lie
     * outside the building, and with `InvalidArgument` when the passenger was
     * added before. Nothing is registered in either case.
     */
    pub fn add_passenger(&self, floor: FloorIndex, passenger: Passenger) -> Result<()> {
        self.check(floor)?;
        self.check(passenger.origin())?;
        self.check(passenger.destination())?;

        if !self.admitted.lock().insert(passenger.id()) {
            return Err(Error::InvalidArgument(format!(
                "passenger {} was already added",
                passenger.id()
            )));
        }

        if self.registry.insert(floor, passenger) {
            debug!(
                "Passenger {} waiting on floor {} for floor {}",
                passenger.id(),
                floor,
                passenger.destination()
            );
        }

        self.request_hall_call(floor, passenger.hall_direction())
    }

    /// Re-presses the hall button for everyone still waiting. Returns the
    /// number of calls issued.
    pub fn reconcile(&self) -> usize {
        let mut issued = 0;

        for floor in 0..self.n_floors {
            for passenger in self.registry.waiting(floor).iter().rev() {
                let _ = self.hall_call_tx.send(HallCall {
                    floor,
                    direction: passenger.hall_direction(),
                });
                issued += 1;
            }
        }

        if issued > 0 {
            trace!("Reconciliation re-issued {} hall calls", issued);
        }
        issued
    }
}
