use anyhow::{Context, Result};
use arrow::{
    array::{BooleanArray, StringArray},
    record_batch::RecordBatch,
};
use tracing::info;

use crate::error::PipelineError;

/// Drop every row whose `required` cell is null or empty. A table without the
/// required column at all is a fatal precondition failure, not a silent skip.
pub fn drop_missing(batch: &RecordBatch, required: &str) -> Result<RecordBatch> {
    let idx = batch
        .schema()
        .index_of(required)
        .map_err(|_| PipelineError::MissingRequiredColumn(required.to_string()))?;

    let col = batch
        .column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| {
            PipelineError::MalformedInput(format!("column '{}' is not string-typed", required))
        })?;

    let keep: BooleanArray = col
        .iter()
        .map(|opt| Some(matches!(opt, Some(s) if !s.trim().is_empty())))
        .collect();

    let filtered =
        arrow::compute::filter_record_batch(batch, &keep).context("filtering rows")?;
    info!(
        kept = filtered.num_rows(),
        dropped = batch.num_rows() - filtered.num_rows(),
        column = required,
        "dropped non-responders"
    );
    Ok(filtered)
}
