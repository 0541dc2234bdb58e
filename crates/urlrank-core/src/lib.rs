pub mod config;
pub mod logging;

pub mod emit;
pub mod error;
pub mod memory;
pub mod pipeline;
pub mod rank;
pub mod table;

pub use error::RankError;
pub use pipeline::{run, RunSummary};
