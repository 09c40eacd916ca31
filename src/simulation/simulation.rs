/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info};
use std::io;
use std::sync::Arc;
use std::thread::{Builder, JoinHandle};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::Building;
use crate::elevator::{Dispatcher, StepOutcome};
use crate::shared::StopReport;

/**
 * Runs the dispatcher and the reconciliation pass on their own threads.
 *
 * The dispatcher thread steps the car as long as there is work and blocks on
 * the hall-call channel once a step comes back idle. The reconciler re-presses
 * hall buttons for waiting passengers on every tick. Dropping the terminate
 * sender (done by `stop`) ends both loops.
 *
 * # Fields
 * - `terminate_tx`:    Closed to stop every thread.
 * - `threads`:         Join handles for the spawned loops.
 */
pub struct Simulation {
    terminate_tx: Option<cbc::Sender<()>>,
    threads: Vec<JoinHandle<()>>,
}

impl Simulation {
    pub fn start(
        building: Arc<Building>,
        dispatcher: Dispatcher,
        reconcile_interval: Duration,
    ) -> io::Result<Simulation> {
        let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();
        let mut threads = Vec::new();

        let dispatcher_terminate_rx = terminate_rx.clone();
        threads.push(
            Builder::new()
                .name("dispatcher".into())
                .spawn(move || run_dispatcher(dispatcher, dispatcher_terminate_rx))?,
        );

        threads.push(
            Builder::new()
                .name("reconciler".into())
                .spawn(move || run_reconciler(building, reconcile_interval, terminate_rx))?,
        );

        Ok(Simulation {
            terminate_tx: Some(terminate_tx),
            threads,
        })
    }

    /// Signals every loop to finish and waits for them.
    pub fn stop(mut self) {
        self.terminate_tx.take();
        for thread in self.threads.drain(..) {
            if thread.join().is_err() {
                error!("A simulation thread panicked");
            }
        }
    }
}

pub fn run_dispatcher(mut dispatcher: Dispatcher, terminate_rx: cbc::Receiver<()>) {
    info!("The elevator is working...");
    let hall_calls = dispatcher.hall_calls();

    loop {
        if let Err(cbc::TryRecvError::Disconnected) = terminate_rx.try_recv() {
            break;
        }

        match dispatcher.step() {
            Ok(StepOutcome::Idle) => {
                // Nothing to do until a button is pressed
                cbc::select! {
                    recv(hall_calls) -> call => {
                        if let Ok(call) = call {
                            dispatcher.handle_hall_call(call);
                        }
                    }
                    recv(terminate_rx) -> _ => break,
                }
            }
            Ok(_) => {}
            Err(e) => {
                // Retrying the same step would fail the same way
                error!("Dispatcher step failed, stopping the car: {}", e);
                break;
            }
        }
    }

    info!("Elevator stopped at floor {}", dispatcher.position() + 1);
}

pub fn run_reconciler(
    building: Arc<Building>,
    interval: Duration,
    terminate_rx: cbc::Receiver<()>,
) {
    let ticker = cbc::tick(interval);

    loop {
        cbc::select! {
            recv(ticker) -> _ => {
                building.reconcile();
            }
            recv(terminate_rx) -> _ => break,
        }
    }
}

/// Logs stop reports until every sender is gone.
pub fn run_reporter(report_rx: cbc::Receiver<StopReport>) {
    for report in report_rx.iter() {
        info!("{}", report);
    }
}

pub fn spawn_reporter(report_rx: cbc::Receiver<StopReport>) -> io::Result<JoinHandle<()>> {
    Builder::new()
        .name("reporter".into())
        .spawn(move || run_reporter(report_rx))
}
