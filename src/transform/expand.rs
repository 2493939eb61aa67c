use anyhow::{Context, Result};
use arrow::{
    array::{ArrayRef, Int64Builder, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;
use tracing::debug;

use crate::transform::rules::{MULTI_SELECT_PREFIXES, NOT_SELECTED};

/// Convert every multi-select block to 0/1 flags. A cell is 0 iff it equals
/// exactly the "Not selected" literal; any other value, including a null
/// non-response, counts as selected. Prefixes with no matching columns are
/// skipped. An all-zero row is valid (nothing selected).
pub fn expand_multi_select(batch: &RecordBatch) -> Result<RecordBatch> {
    let mut fields = Vec::with_capacity(batch.num_columns());
    let mut cols: Vec<ArrayRef> = Vec::with_capacity(batch.num_columns());
    let mut flagged = 0usize;

    for (i, field) in batch.schema().fields().iter().enumerate() {
        let in_group = MULTI_SELECT_PREFIXES
            .iter()
            .any(|p| field.name().starts_with(p));
        let sarr = batch.column(i).as_any().downcast_ref::<StringArray>();

        match (in_group, sarr) {
            (true, Some(sarr)) => {
                let mut b = Int64Builder::new();
                for opt in sarr.iter() {
                    b.append_value(if opt == Some(NOT_SELECTED) { 0 } else { 1 });
                }
                fields.push(Arc::new(Field::new(field.name(), DataType::Int64, true)));
                cols.push(Arc::new(b.finish()) as ArrayRef);
                flagged += 1;
            }
            _ => {
                fields.push(field.clone());
                cols.push(batch.column(i).clone());
            }
        }
    }
    debug!(columns = flagged, "expanded multi-select blocks");

    RecordBatch::try_new(Arc::new(Schema::new(fields)), cols)
        .context("rebuilding batch with multi-select flags")
}
