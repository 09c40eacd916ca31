pub mod call_board;
pub mod dispatcher;

pub use call_board::CallBoard;
pub use dispatcher::Dispatcher;
pub use dispatcher::StepOutcome;
pub use dispatcher::StopSummary;
