pub mod building;
pub mod building_tests;
pub mod floor_registry;

pub use building::Building;
pub use floor_registry::FloorRegistry;
