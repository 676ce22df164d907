pub mod aggregator;
pub mod solver_adapter;
pub mod status_reporter;

pub use aggregator::ResultAggregator;
pub use solver_adapter::SolverAdapter;
pub use status_reporter::{FileReporter, LogReporter, NoopReporter, StatusReporter};
