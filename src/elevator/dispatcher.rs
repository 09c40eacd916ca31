use std::sync::Arc;

use crossbeam_channel as cbc;
use log::{debug, trace, warn};

use crate::building::Building;
use crate::config::ElevatorConfig;
use crate::elevator::CallBoard;
use crate::shared::{CarState, Direction, Error, FloorIndex, HallCall, Passenger, Result, StopReport};

/**
 * Decides where the car goes and services the floors it stops at.
 *
 * The dispatcher is a three state machine over the car's `direction`:
 * - `Up`:   sweep every floor above the car, stopping at hall-up calls and
 *           destinations, then go back to `None`.
 * - `Down`: the same sweep below the car for hall-down calls and destinations.
 * - `None`: pick the next target with `closest_target`.
 *
 * Each call to `step` performs exactly one of those decisions. The dispatcher
 * never runs its own loop; see `simulation` for the threads that drive it.
 *
 * # Fields
 * - `building`:        Shared floor registry and hall-call source.
 * - `hall_call_rx`:    Hall calls pressed since the last step.
 * - `report_tx`:       Boarded/alighted counts for the reporting sink.
 * - `call_board`:      Hall and destination flags, owned here only.
 * - `position`:        Floor the car is at.
 * - `direction`:       Committed sweep direction.
 * - `manifest`:        Passengers in the car, never more than `capacity`.
 */
pub struct Dispatcher {
    building: Arc<Building>,
    hall_call_rx: cbc::Receiver<HallCall>,
    report_tx: cbc::Sender<StopReport>,
    call_board: CallBoard,
    position: FloorIndex,
    direction: Direction,
    manifest: Vec<Passenger>,
    capacity: usize,
}

/// What a single `step` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing requested anywhere.
    Idle,
    /// A destination was found; the next step sweeps this way.
    Committed(Direction),
    /// Stopped at a floor without a committed direction.
    Served(FloorIndex),
    /// Finished a sweep, stopping at these floors in order.
    Scanned { stops: Vec<FloorIndex> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopSummary {
    pub floor: FloorIndex,
    pub alighted: usize,
    pub boarded: usize,
}

impl Dispatcher {
    pub fn new(
        building: Arc<Building>,
        config: &ElevatorConfig,
        report_tx: cbc::Sender<StopReport>,
    ) -> Result<Dispatcher> {
        if config.capacity == 0 {
            return Err(Error::InvalidArgument(
                "the car must carry at least one passenger".to_string(),
            ));
        }

        let n_floors = building.n_floors();
        Ok(Dispatcher {
            hall_call_rx: building.hall_calls(),
            building,
            report_tx,
            call_board: CallBoard::new(n_floors),
            position: 0,
            direction: Direction::None,
            manifest: Vec::with_capacity(config.capacity),
            capacity: config.capacity,
        })
    }

    pub fn position(&self) -> FloorIndex {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn manifest(&self) -> &[Passenger] {
        &self.manifest
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn call_board(&self) -> &CallBoard {
        &self.call_board
    }

    pub fn hall_calls(&self) -> cbc::Receiver<HallCall> {
        self.hall_call_rx.clone()
    }

    pub fn snapshot(&self) -> CarState {
        CarState {
            position: self.position,
            direction: self.direction,
            passengers: self.manifest.clone(),
            capacity: self.capacity,
        }
    }

    /// True when there is nothing left to do for the car right now.
    pub fn is_idle(&self) -> bool {
        self.direction == Direction::None
            && self.hall_call_rx.is_empty()
            && !self.call_board.has_work()
    }

    pub fn handle_hall_call(&mut self, call: HallCall) {
        if let Err(e) = self.call_board.request_hall_call(call.floor, call.direction) {
            warn!("Dropping hall call {:?}: {}", call, e);
        }
    }

    /// Moves every pending hall call onto the call board.
    pub fn apply_pending_calls(&mut self) {
        while let Ok(call) = self.hall_call_rx.try_recv() {
            self.handle_hall_call(call);
        }
    }

    pub fn step(&mut self) -> Result<StepOutcome> {
        self.apply_pending_calls();

        let outcome = match self.direction {
            Direction::Up | Direction::Down => self.scan(self.direction)?,
            Direction::None => self.closest_target()?,
        };

        if outcome != StepOutcome::Idle {
            debug!("Step at floor {}: {:?}", self.position, outcome);
            if log::log_enabled!(log::Level::Trace) {
                if let Ok(state) = serde_json::to_string(&self.snapshot()) {
                    trace!("Car state: {}", state);
                }
            }
        }
        Ok(outcome)
    }

    /**
     * Sweeps from the car's position to the end of the shaft in `direction`,
     * stopping wherever a matching hall call or a destination is set, then
     * drops back to `Direction::None`. Every floor is visited at most once.
     */
    fn scan(&mut self, direction: Direction) -> Result<StepOutcome> {
        let n_floors = self.building.n_floors();
        let floors: Vec<FloorIndex> = match direction {
            Direction::Up => (self.position + 1..n_floors).collect(),
            Direction::Down => (0..self.position).rev().collect(),
            Direction::None => Vec::new(),
        };

        let mut stops = Vec::new();
        for floor in floors {
            if self.call_board.has_hall_call(floor, direction)?
                || self.call_board.has_destination(floor)?
            {
                self.stop_at(floor, direction)?;
                stops.push(floor);
            }
        }

        self.direction = Direction::None;
        Ok(StepOutcome::Scanned { stops })
    }

    /**
     * Next-target selection for an idle car.
     *
     * Destinations come first: serve one at the current floor in place,
     * otherwise search outward one floor at a time in both directions and
     * commit to the direction of the first hit. Only when no passenger in the
     * car wants anywhere does the car go to the nearest hall call, stopping
     * there without a direction so anyone may board.
     *
     * At equal distance the lower floor wins.
     */
    fn closest_target(&mut self) -> Result<StepOutcome> {
        let position = self.position;

        if self.call_board.has_destination(position)? {
            self.stop_at(position, Direction::None)?;
            return Ok(StepOutcome::Served(position));
        }

        for (down, up) in self.outward_from(position) {
            if self.call_board.has_destination(down)? {
                self.direction = Direction::Down;
                return Ok(StepOutcome::Committed(Direction::Down));
            }
            if self.call_board.has_destination(up)? {
                self.direction = Direction::Up;
                return Ok(StepOutcome::Committed(Direction::Up));
            }
        }

        if self.call_board.has_any_hall_call(position)? {
            self.stop_at(position, Direction::None)?;
            return Ok(StepOutcome::Served(position));
        }

        for (down, up) in self.outward_from(position) {
            if self.call_board.has_any_hall_call(down)? {
                self.stop_at(down, Direction::None)?;
                return Ok(StepOutcome::Served(down));
            }
            if self.call_board.has_any_hall_call(up)? {
                self.stop_at(up, Direction::None)?;
                return Ok(StepOutcome::Served(up));
            }
        }

        Ok(StepOutcome::Idle)
    }

    /// Probe pairs `(down, up)` widening by one floor per item, each clamped
    /// at the ends of the shaft.
    fn outward_from(&self, position: FloorIndex) -> Vec<(FloorIndex, FloorIndex)> {
        let top = self.building.n_floors() - 1;
        let (mut down, mut up) = (position, position);
        let mut probes = Vec::new();

        while down != 0 || up != top {
            down = down.saturating_sub(1);
            if up < top {
                up += 1;
            }
            probes.push((down, up));
        }
        probes
    }

    /**
     * Stops the car at `floor`, arriving while travelling `arrival`.
     *
     * Clears the serviced hall call (both buttons for `Direction::None`) and
     * the floor's destination, lets out everyone headed here, then boards
     * waiting passengers in arrival order while there is room. With a committed
     * direction only passengers going the same way get in; anyone left behind
     * keeps waiting and is re-called by reconciliation.
     */
    pub fn stop_at(&mut self, floor: FloorIndex, arrival: Direction) -> Result<StopSummary> {
        self.building.check(floor)?;

        self.call_board.clear_hall_call(floor, arrival)?;
        self.position = floor;
        self.call_board.clear_destination(floor)?;

        let before = self.manifest.len();
        self.manifest.retain(|p| p.destination() != floor);
        let alighted = before - self.manifest.len();
        self.report(StopReport::Alighted { count: alighted, floor });

        let room = self.capacity.saturating_sub(self.manifest.len());
        let boarded = self.building.registry().board(floor, room, |p| match arrival {
            Direction::Up => p.destination() > floor,
            Direction::Down => p.destination() < floor,
            Direction::None => true,
        });
        for passenger in &boarded {
            self.call_board.request_destination(passenger.destination())?;
            self.manifest.push(*passenger);
        }
        self.report(StopReport::Boarded { count: boarded.len(), floor });

        Ok(StopSummary {
            floor,
            alighted,
            boarded: boarded.len(),
        })
    }

    fn report(&self, report: StopReport) {
        let count = match report {
            StopReport::Boarded { count, .. } | StopReport::Alighted { count, .. } => count,
        };
        if count > 0 {
            let _ = self.report_tx.send(report);
        }
    }
}
