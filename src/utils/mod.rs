pub mod logging;

pub use logging::{init_log_file, truncate_text};
