use crate::table::FlatTable;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serializes the table to a comma-separated UTF-8 file, header row first,
/// no index column. The table is written to a sibling temp file and renamed
/// over the target, so a crash mid-write never leaves a truncated CSV and an
/// existing file is replaced in one step. An empty table yields a header-only
/// file.
pub fn write_csv(table: &FlatTable, path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .with_context(|| format!("invalid output path {}", path.display()))?;
    let tmp_path = path.with_file_name(format!("{}.tmp", file_name.to_string_lossy()));

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&tmp_path)
        .with_context(|| format!("failed to open {} for writing", tmp_path.display()))?;

    writer
        .write_record(FlatTable::header())
        .context("failed to write CSV header")?;
    for row in table.rows() {
        writer.serialize(row).context("failed to write CSV row")?;
    }
    writer.flush().context("failed to flush CSV writer")?;
    drop(writer);

    fs::rename(&tmp_path, path)
        .with_context(|| format!("failed to move CSV into place at {}", path.display()))?;

    info!("wrote {} rows to {}", table.len(), path.display());
    Ok(path.to_path_buf())
}
