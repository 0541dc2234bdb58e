//! Shared helpers: run the pipeline in a temp dir and parse the output.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use urlrank_core::config::RankConfig;
use urlrank_core::rank::RankStrategy;

pub struct Row {
    pub rank: usize,
    pub url: String,
    pub count: u64,
}

pub fn config_in(dir: &Path, strategy: RankStrategy) -> RankConfig {
    RankConfig {
        input_path: dir.join("urls.txt"),
        output_path: dir.join("result.txt"),
        strategy,
        ..RankConfig::default()
    }
}

/// Write `input`, run with `strategy`, return the temp dir and raw output.
pub fn run_on(input: &str, strategy: RankStrategy) -> (TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), strategy);
    fs::write(&cfg.input_path, input).unwrap();
    urlrank_core::run(&cfg).unwrap();
    let out = fs::read_to_string(&cfg.output_path).unwrap();
    (dir, out)
}

pub fn parse_rows(output: &str) -> Vec<Row> {
    let mut lines = output.lines();
    assert_eq!(lines.next(), Some("Rank\tURL\tCount"), "missing header");
    lines
        .map(|line| {
            let cols: Vec<&str> = line.split('\t').collect();
            assert_eq!(cols.len(), 3, "bad row: {line:?}");
            Row {
                rank: cols[0].parse().unwrap(),
                url: cols[1].to_string(),
                count: cols[2].parse().unwrap(),
            }
        })
        .collect()
}
