pub mod loaders;
pub mod outcome;
pub mod work_item;

pub use loaders::load_batch_file;
pub use outcome::{AggregateOutcome, ItemStatus, RunStats, SolverResponse};
pub use work_item::{WorkItem, ADHOC_LABEL};
