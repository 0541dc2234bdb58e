//! Default command: count, rank and write the results.

use anyhow::{Context, Result};
use urlrank_core::config::RankConfig;

pub fn run_rank(cfg: &RankConfig, summary_json: bool) -> Result<()> {
    let summary = urlrank_core::run(cfg)?;
    if summary_json {
        let json = serde_json::to_string_pretty(&summary).context("serialize run summary")?;
        println!("{json}");
    }
    Ok(())
}
