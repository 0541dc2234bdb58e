//! Frequency table and input ingestion.
//!
//! The table keeps URLs in first-seen order: a hash index points into a
//! vector of entries, so iteration order is the order of first appearance in
//! the input. Ranking relies on that order for its tie-break.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::DEFAULT_PROGRESS_INTERVAL;
use crate::error::RankError;

const READ_BUF_SIZE: usize = 1024 * 1024;

/// One distinct URL and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub url: String,
    pub count: u64,
}

/// Insertion-ordered mapping from URL to occurrence count.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<TableEntry>,
    lines_counted: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `url`, which must already be trimmed and non-empty.
    pub fn record(&mut self, url: &str) {
        self.lines_counted += 1;
        if let Some(&slot) = self.index.get(url) {
            self.entries[slot].count += 1;
            return;
        }
        self.index.insert(url.to_owned(), self.entries.len());
        self.entries.push(TableEntry {
            url: url.to_owned(),
            count: 1,
        });
    }

    /// Trim `line` and count it unless it is blank. Returns whether it counted.
    pub fn record_line(&mut self, line: &str) -> bool {
        let url = trim_url(line);
        if url.is_empty() {
            return false;
        }
        self.record(url);
        true
    }

    pub fn count(&self, url: &str) -> Option<u64> {
        self.index.get(url).map(|&slot| self.entries[slot].count)
    }

    /// Entries in order of first appearance.
    pub fn entries(&self) -> &[TableEntry] {
        &self.entries
    }

    /// Number of distinct URLs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of non-blank lines that were counted.
    pub fn lines_counted(&self) -> u64 {
        self.lines_counted
    }
}

/// Strip surrounding whitespace, including the ASCII separators `\x1c`..=`\x1f`.
pub fn trim_url(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Split one `\n`-terminated chunk into lines. `\r\n`, a lone `\r` and `\n`
/// all end a line.
fn split_lines(chunk: &str) -> std::str::Split<'_, char> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.split('\r')
}

/// Read `path` and count every non-blank trimmed line.
pub fn ingest_and_count(path: &Path) -> Result<FrequencyTable, RankError> {
    ingest_with_progress(path, DEFAULT_PROGRESS_INTERVAL)
}

/// Like [`ingest_and_count`], logging progress every `progress_interval` counted lines.
pub fn ingest_with_progress(
    path: &Path,
    progress_interval: u64,
) -> Result<FrequencyTable, RankError> {
    let file = File::open(path).map_err(|source| RankError::InputAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::with_capacity(READ_BUF_SIZE, file);
    count_reader(reader, path, progress_interval)
}

/// Count lines from any buffered reader. `path` is only used in error reports.
pub fn count_reader<R: BufRead>(
    mut reader: R,
    path: &Path,
    progress_interval: u64,
) -> Result<FrequencyTable, RankError> {
    let progress_interval = progress_interval.max(1);
    let mut table = FrequencyTable::new();
    let mut buf = Vec::new();
    let mut line_no: u64 = 0;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| RankError::InputAccess {
                path: path.to_path_buf(),
                source,
            })?;
        if n == 0 {
            break;
        }

        let chunk = String::from_utf8(std::mem::take(&mut buf)).map_err(|source| {
            // Lone `\r`s before the bad byte each ended a line.
            let valid = &source.as_bytes()[..source.utf8_error().valid_up_to()];
            let ended = valid.iter().filter(|&&b| b == b'\r').count() as u64;
            RankError::Encoding {
                path: path.to_path_buf(),
                line: line_no + ended + 1,
                source,
            }
        })?;
        for line in split_lines(&chunk) {
            line_no += 1;
            if table.record_line(line) && table.lines_counted() % progress_interval == 0 {
                tracing::info!(lines = table.lines_counted(), "processed lines");
            }
        }
        buf = chunk.into_bytes();
    }

    tracing::info!(
        lines = table.lines_counted(),
        unique = table.len(),
        "finished reading {}",
        path.display()
    );
    Ok(table)
}
