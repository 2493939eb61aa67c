use anyhow::{Context, Result};
use arrow::{
    array::{Array, ArrayRef, Int64Builder, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::transform::rules::{Recode, RECODES};

/// Apply the fixed recode table to every column it names that survived
/// renaming. Categorical cells outside the declared label set and binary cells
/// other than exactly "Yes"/"No" become null; nothing here is an error.
/// Must run exactly once, on raw string input.
pub fn apply_recodes(batch: &RecordBatch) -> Result<RecordBatch> {
    let mut fields = Vec::with_capacity(batch.num_columns());
    let mut cols: Vec<ArrayRef> = Vec::with_capacity(batch.num_columns());

    for (i, field) in batch.schema().fields().iter().enumerate() {
        let rule = RECODES.get(field.name().as_str());
        let sarr = batch.column(i).as_any().downcast_ref::<StringArray>();

        match (rule, sarr) {
            (
                Some(Recode::Categorical { labels, ordered }),
                Some(sarr),
            ) => {
                let recoded: StringArray = sarr
                    .iter()
                    .map(|opt| opt.filter(|v| labels.contains(v)))
                    .collect();
                debug!(
                    column = %field.name(),
                    nulled = recoded.null_count() - sarr.null_count(),
                    "recoded categorical column"
                );
                fields.push(Arc::new(categorical_field(field.name(), labels, *ordered)));
                cols.push(Arc::new(recoded) as ArrayRef);
            }

            (Some(Recode::Binary), Some(sarr)) => {
                let mut b = Int64Builder::new();
                for opt in sarr.iter() {
                    b.append_option(match opt {
                        Some("Yes") => Some(1),
                        Some("No") => Some(0),
                        _ => None,
                    });
                }
                fields.push(Arc::new(Field::new(field.name(), DataType::Int64, true)));
                cols.push(Arc::new(b.finish()) as ArrayRef);
            }

            // No rule, or a non-string column (already recoded elsewhere):
            // pass through untouched.
            _ => {
                fields.push(field.clone());
                cols.push(batch.column(i).clone());
            }
        }
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), cols)
        .context("rebuilding batch with recoded columns")
}

/// Utf8 field tagged with its label set and orderedness, so downstream
/// consumers can recover the categorical contract from the schema alone.
fn categorical_field(name: &str, labels: &[&str], ordered: bool) -> Field {
    Field::new(name, DataType::Utf8, true).with_metadata(HashMap::from([
        ("categories".to_string(), labels.join("|")),
        ("ordered".to_string(), ordered.to_string()),
    ]))
}
