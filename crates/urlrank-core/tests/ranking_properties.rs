//! End-to-end properties of a run: row count, contiguous ranks, descending
//! counts, stable ties, blank handling and idempotence.

mod common;

use std::fs;

use common::{config_in, parse_rows, run_on};
use urlrank_core::rank::RankStrategy;
use urlrank_core::RankError;

const STRATEGIES: [RankStrategy; 2] = [RankStrategy::Sort, RankStrategy::Heap];

/// Deterministic mixed workload: skewed counts, a long tie tail, blanks and padding.
fn mixed_input() -> String {
    let mut s = String::new();
    for i in 0..3000u64 {
        let id = (i * i + 7 * i) % 241;
        s.push_str(&format!("  https://site{id}.example/p \n"));
        if i % 13 == 0 {
            s.push_str("\n   \n\t\n");
        }
    }
    s
}

#[test]
fn three_urls_ranked_by_count() {
    for strategy in STRATEGIES {
        let (_dir, out) = run_on("a\nb\na\nc\na\nc\n", strategy);
        assert_eq!(out, "Rank\tURL\tCount\n1\ta\t3\n2\tc\t2\n3\tb\t1\n");
    }
}

#[test]
fn row_count_is_min_of_hundred_and_distinct() {
    for strategy in STRATEGIES {
        let (_dir, out) = run_on("x\ny\nx\n", strategy);
        assert_eq!(parse_rows(&out).len(), 2);

        let (_dir, out) = run_on(&mixed_input(), strategy);
        assert_eq!(parse_rows(&out).len(), 100);
    }
}

#[test]
fn ranks_contiguous_and_counts_descending() {
    for strategy in STRATEGIES {
        let (_dir, out) = run_on(&mixed_input(), strategy);
        let rows = parse_rows(&out);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.rank, i + 1);
        }
        for pair in rows.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }
}

#[test]
fn equal_counts_keep_first_appearance_order() {
    let input = mixed_input();
    let first_seen: Vec<String> = {
        let mut seen = Vec::new();
        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if !seen.iter().any(|s| s == line) {
                seen.push(line.to_string());
            }
        }
        seen
    };
    let position = |url: &str| first_seen.iter().position(|s| s == url).unwrap();

    for strategy in STRATEGIES {
        let (_dir, out) = run_on(&input, strategy);
        let rows = parse_rows(&out);
        for pair in rows.windows(2) {
            if pair[0].count == pair[1].count {
                assert!(position(&pair[0].url) < position(&pair[1].url));
            }
        }
    }
}

#[test]
fn hundred_fifty_singletons_keep_first_hundred() {
    let input: String = (0..150).map(|i| format!("https://u{i}.example\n")).collect();
    let (_dir, out) = run_on(&input, RankStrategy::Sort);
    let rows = parse_rows(&out);
    assert_eq!(rows.len(), 100);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.url, format!("https://u{i}.example"));
        assert_eq!(row.count, 1);
    }
}

#[test]
fn blank_lines_never_counted() {
    let (_dir, out) = run_on("\n  \n\t\na\n \r\n", RankStrategy::Sort);
    assert_eq!(out, "Rank\tURL\tCount\n1\ta\t1\n");
}

#[test]
fn carriage_returns_and_separators_split_and_trim() {
    for strategy in STRATEGIES {
        let (_dir, out) = run_on("a\rb\ra\n\x1ca\x1c\n", strategy);
        assert_eq!(out, "Rank\tURL\tCount\n1\ta\t3\n2\tb\t1\n");
    }
}

#[test]
fn empty_input_writes_header_only() {
    let (_dir, out) = run_on("", RankStrategy::Sort);
    assert_eq!(out, "Rank\tURL\tCount\n");
}

#[test]
fn rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), RankStrategy::Sort);
    fs::write(&cfg.input_path, mixed_input()).unwrap();
    urlrank_core::run(&cfg).unwrap();
    let first = fs::read(&cfg.output_path).unwrap();
    urlrank_core::run(&cfg).unwrap();
    let second = fs::read(&cfg.output_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_input_leaves_existing_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), RankStrategy::Sort);
    fs::write(&cfg.output_path, "previous run\n").unwrap();
    let err = urlrank_core::run(&cfg).unwrap_err();
    assert!(matches!(err, RankError::InputAccess { .. }));
    assert_eq!(fs::read_to_string(&cfg.output_path).unwrap(), "previous run\n");
}

#[test]
fn missing_input_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), RankStrategy::Sort);
    assert!(urlrank_core::run(&cfg).is_err());
    assert!(!cfg.output_path.exists());
}

#[test]
fn invalid_utf8_is_fatal_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path(), RankStrategy::Sort);
    fs::write(&cfg.input_path, b"a\n\xc3\x28\n").unwrap();
    let err = urlrank_core::run(&cfg).unwrap_err();
    assert!(matches!(err, RankError::Encoding { line: 2, .. }));
    assert!(!cfg.output_path.exists());
}
