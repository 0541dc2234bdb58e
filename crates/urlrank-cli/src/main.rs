mod cli;

use crate::cli::Cli;

fn main() {
    // Parse CLI and dispatch; logging is set up once the config is known.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("urlrank error: {:#}", err);
        std::process::exit(1);
    }
}
