//! Ranking: order the frequency table by descending count and cut it to the top N.
//!
//! Ties always keep first-appearance order. Both strategies produce the same
//! rows for every input; they differ only in how much they sort.

mod select;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::table::{FrequencyTable, TableEntry};

/// Number of rows written when nothing else is configured.
pub const DEFAULT_TOP_N: usize = 100;

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// 1-based position.
    pub rank: usize,
    pub url: String,
    pub count: u64,
}

/// How the top entries are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankStrategy {
    /// Stable sort of every entry, then truncate.
    #[default]
    Sort,
    /// Bounded binary heap holding at most N candidates.
    Heap,
}

impl fmt::Display for RankStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankStrategy::Sort => write!(f, "sort"),
            RankStrategy::Heap => write!(f, "heap"),
        }
    }
}

impl FromStr for RankStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sort" => Ok(RankStrategy::Sort),
            "heap" => Ok(RankStrategy::Heap),
            other => Err(format!("unknown strategy '{other}' (expected sort or heap)")),
        }
    }
}

/// Top [`DEFAULT_TOP_N`] entries using the stable sort.
pub fn rank(table: &FrequencyTable) -> Vec<RankedEntry> {
    rank_top(table, DEFAULT_TOP_N, RankStrategy::Sort)
}

/// Top `top_n` entries using `strategy`, ranked 1..=N.
pub fn rank_top(table: &FrequencyTable, top_n: usize, strategy: RankStrategy) -> Vec<RankedEntry> {
    let ordered = match strategy {
        RankStrategy::Sort => sorted_top(table.entries(), top_n),
        RankStrategy::Heap => select::heap_top(table.entries(), top_n),
    };
    let ranked = assign_ranks(ordered);
    tracing::info!(
        rows = ranked.len(),
        unique = table.len(),
        %strategy,
        "ranking complete"
    );
    ranked
}

fn sorted_top(entries: &[TableEntry], top_n: usize) -> Vec<&TableEntry> {
    let mut refs: Vec<&TableEntry> = entries.iter().collect();
    // `sort_by` is stable: equal counts stay in first-seen order.
    refs.sort_by(|a, b| b.count.cmp(&a.count));
    refs.truncate(top_n);
    refs
}

fn assign_ranks(ordered: Vec<&TableEntry>) -> Vec<RankedEntry> {
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, e)| RankedEntry {
            rank: i + 1,
            url: e.url.clone(),
            count: e.count,
        })
        .collect()
}
