//! Output writer: header plus one tab-separated row per ranked entry.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::RankError;
use crate::rank::RankedEntry;

pub const HEADER: &str = "Rank\tURL\tCount";

/// Write `entries` to `path`, truncating any existing file.
///
/// The file is flushed and closed before returning. A failure part-way through
/// may leave a truncated file behind.
pub fn emit(entries: &[RankedEntry], path: &Path) -> Result<(), RankError> {
    let output_err = |source: io::Error| RankError::OutputAccess {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(output_err)?;
    let mut out = BufWriter::new(file);
    write_entries(&mut out, entries).map_err(output_err)?;
    let file = out.into_inner().map_err(|e| output_err(e.into_error()))?;
    file.sync_all().map_err(output_err)?;

    tracing::info!(rows = entries.len(), "wrote results to {}", path.display());
    Ok(())
}

/// Write the header and rows to any writer.
pub fn write_entries<W: Write>(out: &mut W, entries: &[RankedEntry]) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for e in entries {
        writeln!(out, "{}\t{}\t{}", e.rank, e.url, e.count)?;
        tracing::debug!("{}. {}: {}", e.rank, e.url, e.count);
    }
    out.flush()
}
