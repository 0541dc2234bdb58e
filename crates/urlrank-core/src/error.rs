//! Error taxonomy for the ranking pipeline.
//!
//! Every variant is fatal: nothing in the pipeline retries or recovers. The
//! CLI converts these into a non-zero exit status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    /// Input file missing, unreadable, or failing mid-read.
    #[error("cannot read input {}", path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output path unwritable (permissions, disk full, invalid path).
    #[error("cannot write output {}", path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line of the input is not valid UTF-8.
    #[error("{}:{line}: line is not valid UTF-8", path.display())]
    Encoding {
        path: PathBuf,
        /// 1-based line number.
        line: u64,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Rejected configuration value.
    #[error("invalid config: {0}")]
    Config(String),
}
