//! CLI command handlers, one per file.

mod completions;
mod man;
mod print_config;
mod rank;

pub use completions::run_completions;
pub use man::run_man;
pub use print_config::run_print_config;
pub use rank::run_rank;
