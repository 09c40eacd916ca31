/*
 * Unit tests for the building module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_building_rejects_zero_floors
 * - test_add_passenger_registers_hall_call
 * - test_same_floor_passenger_calls_down
 * - test_add_passenger_out_of_range
 * - test_hall_call_rejects_none_direction
 * - test_reconcile_reissues_waiting_calls
 * - test_registry_board_respects_limit_and_order
 * - test_concurrent_arrivals_are_not_lost
 * - test_readding_waiting_passenger_is_rejected
 * - test_readding_boarded_passenger_is_rejected
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod building_tests {
    use crate::building::{Building, FloorRegistry};
    use crate::config::ElevatorConfig;
    use crate::elevator::{Dispatcher, StepOutcome};
    use crossbeam_channel::unbounded;
    use crate::shared::Direction::{Down, Up};
    use crate::shared::{Direction, Error, HallCall, Passenger};
    use std::sync::Arc;
    use std::thread::spawn;

    fn drain(building: &Building) -> Vec<HallCall> {
        building.hall_calls().try_iter().collect()
    }

    #[test]
    fn test_building_rejects_zero_floors() {
        // Purpose: A building without floors cannot be constructed

        // Act
        let result = Building::new(0);

        // Assert
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_add_passenger_registers_hall_call() {
        // Arrange
        let building = Building::new(5).unwrap();
        let up = Passenger::new(1, 4);
        let down = Passenger::new(3, 0);

        // Act
        building.add_passenger(1, up).unwrap();
        building.add_passenger(3, down).unwrap();

        // Assert
        assert_eq!(building.registry().waiting(1), vec![up]);
        assert_eq!(building.registry().waiting(3), vec![down]);
        assert_eq!(
            drain(&building),
            vec![
                HallCall { floor: 1, direction: Up },
                HallCall { floor: 3, direction: Down },
            ]
        );
    }

    #[test]
    fn test_same_floor_passenger_calls_down() {
        // Purpose: Someone asking for their own floor presses the down button

        let building = Building::new(5).unwrap();
        let confused = Passenger::new(2, 2);

        building.add_passenger(2, confused).unwrap();

        assert_eq!(confused.hall_direction(), Down);
        assert_eq!(drain(&building), vec![HallCall { floor: 2, direction: Down }]);
    }

    #[test]
    fn test_add_passenger_out_of_range() {
        // Arrange
        let building = Building::new(3).unwrap();

        // Act
        let bad_floor = building.add_passenger(3, Passenger::new(0, 1));
        let bad_destination = building.add_passenger(0, Passenger::new(0, 7));

        // Assert
        assert_eq!(bad_floor, Err(Error::OutOfRange { floor: 3, n_floors: 3 }));
        assert_eq!(
            bad_destination,
            Err(Error::OutOfRange { floor: 7, n_floors: 3 })
        );
        assert_eq!(building.registry().total_waiting(), 0);
        assert!(drain(&building).is_empty());
    }

    #[test]
    fn test_hall_call_rejects_none_direction() {
        let building = Building::new(3).unwrap();

        let result = building.request_hall_call(1, Direction::None);

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(drain(&building).is_empty());
    }

    #[test]
    fn test_reconcile_reissues_waiting_calls() {
        // Arrange
        let building = Building::new(4).unwrap();
        building.add_passenger(0, Passenger::new(0, 3)).unwrap();
        building.add_passenger(2, Passenger::new(2, 1)).unwrap();
        drain(&building);

        // Act
        let issued = building.reconcile();

        // Assert
        assert_eq!(issued, 2);
        assert_eq!(
            drain(&building),
            vec![
                HallCall { floor: 0, direction: Up },
                HallCall { floor: 2, direction: Down },
            ]
        );
        assert_eq!(building.registry().total_waiting(), 2);
    }

    #[test]
    fn test_registry_board_respects_limit_and_order() {
        // Arrange
        let registry = FloorRegistry::new(3);
        let a = Passenger::new(1, 2);
        let b = Passenger::new(1, 0);
        let c = Passenger::new(1, 2);
        let d = Passenger::new(1, 2);
        for p in [a, b, c, d] {
            assert!(registry.insert(1, p));
        }
        assert!(!registry.insert(1, a));

        // Act
        let boarded = registry.board(1, 2, |p| p.destination() > 1);

        // Assert
        assert_eq!(boarded, vec![a, c]);
        assert_eq!(registry.waiting(1), vec![b, d]);
    }

    #[test]
    fn test_concurrent_arrivals_are_not_lost() {
        // Purpose: Inserts from several threads must all land in the registry

        // Arrange
        let building = Arc::new(Building::new(4).unwrap());
        let threads: Vec<_> = (0..4)
            .map(|t| {
                let building = building.clone();
                spawn(move || {
                    for _ in 0..250 {
                        let passenger = Passenger::new(t, (t + 1) % 4);
                        building.add_passenger(t, passenger).unwrap();
                    }
                })
            })
            .collect();

        // Act
        for thread in threads {
            thread.join().unwrap();
        }

        // Assert
        assert_eq!(building.registry().total_waiting(), 1000);
        for floor in 0..4 {
            assert_eq!(building.registry().len(floor), 250);
        }
    }

    #[test]
    fn test_readding_waiting_passenger_is_rejected() {
        // Purpose: A passenger waits on exactly one floor

        // Arrange
        let building = Building::new(4).unwrap();
        let a = Passenger::new(0, 2);
        building.add_passenger(0, a).unwrap();
        drain(&building);

        // Act
        let same_floor = building.add_passenger(0, a);
        let other_floor = building.add_passenger(1, a);

        // Assert
        assert!(matches!(same_floor, Err(Error::InvalidArgument(_))));
        assert!(matches!(other_floor, Err(Error::InvalidArgument(_))));
        assert_eq!(building.registry().waiting(0), vec![a]);
        assert_eq!(building.registry().len(1), 0);
        assert!(drain(&building).is_empty());
    }

    #[test]
    fn test_readding_boarded_passenger_is_rejected() {
        // Purpose: A passenger riding the car cannot also wait on a floor

        // Arrange
        let building = Arc::new(Building::new(4).unwrap());
        let (report_tx, _report_rx) = unbounded();
        let mut dispatcher =
            Dispatcher::new(building.clone(), &ElevatorConfig { capacity: 2 }, report_tx).unwrap();
        let a = Passenger::new(0, 3);
        building.add_passenger(0, a).unwrap();
        assert_eq!(dispatcher.step().unwrap(), StepOutcome::Served(0));
        assert_eq!(dispatcher.manifest(), &[a]);

        // Act
        let result = building.add_passenger(2, a);

        // Assert
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(!building.registry().contains(&a));
        assert_eq!(building.registry().total_waiting(), 0);
    }
}
