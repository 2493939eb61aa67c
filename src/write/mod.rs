use anyhow::Result;
use arrow::{csv::WriterBuilder, record_batch::RecordBatch};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::PipelineError;

fn write_failure(dest: &Path, reason: impl ToString) -> PipelineError {
    PipelineError::WriteFailure {
        path: dest.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Serialize the table to a delimited file at `dest`, creating parent
/// directories and overwriting any existing file. The CSV is written to a
/// temp file in the destination directory and moved into place, so a failed
/// run never leaves a truncated file at `dest`. Nulls serialize as empty
/// fields.
#[tracing::instrument(level = "info", skip(batch), fields(dest = %dest.as_ref().display()))]
pub fn write_table<P: AsRef<Path>>(batch: &RecordBatch, dest: P) -> Result<()> {
    let dest = dest.as_ref();
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| write_failure(dest, e))?;

    let tmp = NamedTempFile::new_in(&parent).map_err(|e| write_failure(dest, e))?;
    let (file, tmp_path) = tmp.into_parts();

    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(batch).map_err(|e| write_failure(dest, e))?;
    drop(writer);

    tmp_path.persist(dest).map_err(|e| write_failure(dest, e))?;
    info!(rows = batch.num_rows(), "wrote table");
    Ok(())
}
