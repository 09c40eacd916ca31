use crate::shared::{check_floor, Direction, Error, FloorIndex, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FloorCalls {
    hall_up: bool,
    hall_down: bool,
    destination: bool,
}

/**
 * Hall buttons and in-car floor buttons for every floor.
 *
 * Plain flags with no side effects. The dispatcher owns the only instance; hall
 * calls from other threads reach it through the building's hall-call channel.
 */
#[derive(Debug, Clone)]
pub struct CallBoard {
    floors: Vec<FloorCalls>,
}

impl CallBoard {
    pub fn new(n_floors: usize) -> CallBoard {
        CallBoard {
            floors: vec![FloorCalls::default(); n_floors],
        }
    }

    pub fn request_hall_call(&mut self, floor: FloorIndex, direction: Direction) -> Result<()> {
        check_floor(floor, self.floors.len())?;
        match direction {
            Direction::Up => self.floors[floor].hall_up = true,
            Direction::Down => self.floors[floor].hall_down = true,
            Direction::None => {
                return Err(Error::InvalidArgument(
                    "a hall call needs an up or down direction".to_string(),
                ))
            }
        }
        Ok(())
    }

    pub fn request_destination(&mut self, floor: FloorIndex) -> Result<()> {
        check_floor(floor, self.floors.len())?;
        self.floors[floor].destination = true;
        Ok(())
    }

    /// `Direction::None` clears both hall buttons.
    pub fn clear_hall_call(&mut self, floor: FloorIndex, direction: Direction) -> Result<()> {
        check_floor(floor, self.floors.len())?;
        let calls = &mut self.floors[floor];
        match direction {
            Direction::Up => calls.hall_up = false,
            Direction::Down => calls.hall_down = false,
            Direction::None => {
                calls.hall_up = false;
                calls.hall_down = false;
            }
        }
        Ok(())
    }

    pub fn clear_destination(&mut self, floor: FloorIndex) -> Result<()> {
        check_floor(floor, self.floors.len())?;
        self.floors[floor].destination = false;
        Ok(())
    }

    pub fn has_any_hall_call(&self, floor: FloorIndex) -> Result<bool> {
        check_floor(floor, self.floors.len())?;
        let calls = &self.floors[floor];
        Ok(calls.hall_up || calls.hall_down)
    }

    pub fn has_hall_call(&self, floor: FloorIndex, direction: Direction) -> Result<bool> {
        check_floor(floor, self.floors.len())?;
        let calls = &self.floors[floor];
        Ok(match direction {
            Direction::Up => calls.hall_up,
            Direction::Down => calls.hall_down,
            Direction::None => calls.hall_up || calls.hall_down,
        })
    }

    pub fn has_destination(&self, floor: FloorIndex) -> Result<bool> {
        check_floor(floor, self.floors.len())?;
        Ok(self.floors[floor].destination)
    }

    /// True if any button anywhere is lit.
    pub fn has_work(&self) -> bool {
        self.floors
            .iter()
            .any(|c| c.hall_up || c.hall_down || c.destination)
    }

    pub fn destinations(&self) -> Vec<FloorIndex> {
        self.floors
            .iter()
            .enumerate()
            .filter(|(_, c)| c.destination)
            .map(|(floor, _)| floor)
            .collect()
    }
}
