/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Error, Result};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub building: BuildingConfig,
    pub elevator: ElevatorConfig,
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BuildingConfig {
    pub n_floors: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ElevatorConfig {
    pub capacity: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SimulationConfig {
    pub n_passengers: usize,
    pub reconcile_interval_ms: u64,
    #[serde(default)]
    pub run_time_secs: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("failed to read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| Error::Config(format!("failed to parse: {}", e)))
}

#[cfg(test)]
mod config_tests {
    use super::parse_config;
    use crate::shared::Error;

    #[test]
    fn test_parse_full_config() {
        // Arrange
        let input = r#"
            [building]
            n_floors = 7

            [elevator]
            capacity = 3

            [simulation]
            n_passengers = 12
            reconcile_interval_ms = 20
            run_time_secs = 4
            seed = 99
        "#;

        // Act
        let config = parse_config(input).unwrap();

        // Assert
        assert_eq!(config.building.n_floors, 7);
        assert_eq!(config.elevator.capacity, 3);
        assert_eq!(config.simulation.n_passengers, 12);
        assert_eq!(config.simulation.reconcile_interval_ms, 20);
        assert_eq!(config.simulation.run_time_secs, Some(4));
        assert_eq!(config.simulation.seed, Some(99));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let input = r#"
            [building]
            n_floors = 5
            [elevator]
            capacity = 5
            [simulation]
            n_passengers = 10
            reconcile_interval_ms = 50
        "#;

        let config = parse_config(input).unwrap();

        assert_eq!(config.simulation.run_time_secs, None);
        assert_eq!(config.simulation.seed, None);
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let result = parse_config("[building]\nn_floors = 5\n");

        assert!(matches!(result, Err(Error::Config(_))));
    }
}
