use anyhow::{Context, Result};
use arrow::{datatypes::Schema, record_batch::RecordBatch};
use std::sync::Arc;
use tracing::debug;

/// Rename columns in place per `renames`, keeping data and column order.
/// Pairs whose old name is absent are ignored.
pub fn apply_renames(batch: &RecordBatch, renames: &[(&str, &str)]) -> Result<RecordBatch> {
    let mut hits = 0usize;
    let fields: Vec<_> = batch
        .schema()
        .fields()
        .iter()
        .map(|field| {
            match renames.iter().find(|(old, _)| old == field.name()) {
                Some((_, new)) => {
                    hits += 1;
                    Arc::new(field.as_ref().clone().with_name(*new))
                }
                None => field.clone(),
            }
        })
        .collect();
    debug!(renamed = hits, "applied column renames");

    RecordBatch::try_new(Arc::new(Schema::new(fields)), batch.columns().to_vec())
        .context("rebuilding batch with renamed columns")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::test_util::batch_of_strings;

    #[test]
    fn renames_present_and_skips_absent() {
        let batch = batch_of_strings(&[
            ("q0001", &["Very masculine"]),
            ("weight", &["1.23"]),
            ("q0004_0001", &["Selected"]),
        ]);
        let out = apply_renames(
            &batch,
            &[
                ("q0001", "self_masculinity"),
                ("weight", "survey_weight"),
                ("kids", "children_status"), // absent in input
            ],
        )
        .unwrap();

        let schema = out.schema();
        let names: Vec<&str> = schema
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect();
        assert_eq!(names, vec!["self_masculinity", "survey_weight", "q0004_0001"]);
        assert_eq!(out.num_rows(), 1);
    }

    #[test]
    fn identity_when_nothing_matches() {
        let batch = batch_of_strings(&[("other", &["x"])]);
        let out = apply_renames(&batch, &[("q0001", "self_masculinity")]).unwrap();
        assert_eq!(out.schema().field(0).name(), "other");
    }
}
