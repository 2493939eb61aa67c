use anyhow::{Context, Result};
use arrow::{
    csv::ReaderBuilder,
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::{fs, io::Cursor, path::Path, sync::Arc};
use tracing::{debug, info};

use crate::error::PipelineError;

const BATCH_SIZE: usize = 8192;

/// Trim whitespace + strip outer quotes if present.
fn clean_str(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Read a delimited table into a single all-string RecordBatch, preserving
/// header order and raw cell text. No type coercion happens here; recode
/// passes decide which columns leave the string domain.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<RecordBatch> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(PipelineError::NotFound(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        PipelineError::MalformedInput(format!("cannot read {} as UTF-8: {}", path.display(), e))
    })?;

    let header_line = content
        .lines()
        .next()
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| PipelineError::MalformedInput("missing header row".to_string()))?;
    let headers: Vec<String> = header_line.split(',').map(clean_str).collect();
    debug!(columns = headers.len(), "parsed header row");

    let fields: Vec<Field> = headers
        .iter()
        .map(|n| Field::new(n, DataType::Utf8, true))
        .collect();
    let schema = Arc::new(Schema::new(fields));

    let cursor = Cursor::new(content.as_bytes());
    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_batch_size(BATCH_SIZE)
        .with_quote(b'"')
        .with_escape(b'"')
        .with_delimiter(b',')
        .build(cursor)
        .context("creating CSV reader")?;

    let mut batches = Vec::new();
    for batch in reader {
        let batch = batch.map_err(|e| {
            PipelineError::MalformedInput(format!("inconsistent table in {}: {}", path.display(), e))
        })?;
        batches.push(batch);
    }

    let table = if batches.is_empty() {
        RecordBatch::new_empty(schema.clone())
    } else {
        arrow::compute::concat_batches(&schema, &batches).context("concatenating CSV batches")?
    };

    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "loaded table"
    );
    Ok(table)
}
