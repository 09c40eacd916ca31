/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use env_logger::Env;
use log::info;
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

/* Custom libraries */
use elevator_sim::config;
use elevator_sim::shared::StopReport;
use elevator_sim::simulation::{spawn_reporter, PassengerGenerator, Simulation};
use elevator_sim::unwrap_or_exit;
use elevator_sim::{Building, Dispatcher};

#[derive(Debug, Parser)]
#[clap(about = "Single elevator dispatch simulation")]
struct Args {
    /// Path to the configuration file
    #[clap(long, short, default_value = "config.toml")]
    config: String,

    /// Number of random passengers to generate
    #[clap(long, short)]
    passengers: Option<usize>,

    /// Seed for the passenger generator
    #[clap(long, short)]
    seed: Option<u64>,

    /// Stop after this many seconds instead of running until killed
    #[clap(long, short)]
    run_time: Option<u64>,
}

/* Main */
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Load the configuration
    let mut config = unwrap_or_exit!(config::load_config(&args.config));
    if let Some(n) = args.passengers {
        config.simulation.n_passengers = n;
    }
    if args.seed.is_some() {
        config.simulation.seed = args.seed;
    }
    if args.run_time.is_some() {
        config.simulation.run_time_secs = args.run_time;
    }

    // Initialize channels
    let (report_tx, report_rx) = cbc::unbounded::<StopReport>();

    // Create the building and the car
    let building = Arc::new(unwrap_or_exit!(Building::new(config.building.n_floors)));
    let dispatcher = unwrap_or_exit!(Dispatcher::new(
        building.clone(),
        &config.elevator,
        report_tx
    ));

    let reporter_thread = unwrap_or_exit!(spawn_reporter(report_rx));
    let simulation = unwrap_or_exit!(Simulation::start(
        building.clone(),
        dispatcher,
        Duration::from_millis(config.simulation.reconcile_interval_ms),
    ));

    // Generate random passengers
    let mut generator = PassengerGenerator::new(config.building.n_floors, config.simulation.seed);
    unwrap_or_exit!(generator.populate(&building, config.simulation.n_passengers));
    info!(
        "{} passengers waiting in a building with {} floors",
        config.simulation.n_passengers, config.building.n_floors
    );

    match config.simulation.run_time_secs {
        Some(secs) => {
            sleep(Duration::from_secs(secs));
            simulation.stop();
            let _ = reporter_thread.join();
            info!(
                "{} passengers still waiting",
                building.registry().total_waiting()
            );
        }
        None => loop {
            sleep(Duration::from_secs(1));
        },
    }
}
