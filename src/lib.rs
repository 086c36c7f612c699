pub mod config;
pub mod core;
pub mod utils;

pub use config::CliConfig;
pub use core::{reverse_and_add, SearchEngine, SearchOutcome};
pub use utils::error::{Result, SearchError};
