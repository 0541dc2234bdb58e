//! The full run: ingest -> rank -> emit.
//!
//! The input is read to completion and closed before the output is opened,
//! so a failing input never touches an existing output file.

use serde::Serialize;
use std::time::Instant;

use crate::config::RankConfig;
use crate::emit;
use crate::error::RankError;
use crate::memory;
use crate::rank;
use crate::table;

/// What a run did, for logging and `--summary-json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Non-blank lines counted.
    pub lines_counted: u64,
    /// Distinct URLs seen.
    pub unique_urls: usize,
    /// Data rows written (header excluded).
    pub rows_written: usize,
    pub elapsed_secs: f64,
    /// Peak resident memory, when the platform reports it.
    pub peak_memory_bytes: Option<u64>,
}

pub fn run(cfg: &RankConfig) -> Result<RunSummary, RankError> {
    cfg.validate()?;
    let start = Instant::now();
    tracing::info!(
        input = %cfg.input_path.display(),
        output = %cfg.output_path.display(),
        top_n = cfg.top_n,
        "starting URL counting"
    );

    let table = table::ingest_with_progress(&cfg.input_path, cfg.progress_interval)?;
    let ranked = rank::rank_top(&table, cfg.top_n, cfg.strategy);
    emit::emit(&ranked, &cfg.output_path)?;

    let summary = RunSummary {
        lines_counted: table.lines_counted(),
        unique_urls: table.len(),
        rows_written: ranked.len(),
        elapsed_secs: start.elapsed().as_secs_f64(),
        peak_memory_bytes: memory::peak_rss_bytes(),
    };
    tracing::info!(
        elapsed_secs = summary.elapsed_secs,
        peak_memory = %summary
            .peak_memory_bytes
            .map(memory::format_mib)
            .unwrap_or_else(|| "n/a".to_string()),
        "process completed"
    );
    Ok(summary)
}
