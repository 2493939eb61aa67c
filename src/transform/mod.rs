pub mod expand;
pub mod filter;
pub mod recode;
pub mod rename;
pub mod rules;

use anyhow::Result;
use arrow::record_batch::RecordBatch;
use tracing::info;

/// The four in-memory rewrite passes, in order: drop non-responders to the
/// primary question, rename to semantic column names, recode single-selects,
/// expand multi-select blocks to 0/1 flags. Filtering runs before renaming,
/// so it sees the raw question code.
#[tracing::instrument(level = "info", skip(batch))]
pub fn clean_survey(batch: RecordBatch) -> Result<RecordBatch> {
    let batch = filter::drop_missing(&batch, rules::PRIMARY_RESPONSE)?;
    let batch = rename::apply_renames(&batch, rules::RENAMES)?;
    let batch = recode::apply_recodes(&batch)?;
    let batch = expand::expand_multi_select(&batch)?;
    info!(
        rows = batch.num_rows(),
        columns = batch.num_columns(),
        "transform complete"
    );
    Ok(batch)
}


#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, Int64Array, StringArray};
    use test_util::batch_of_strings;

    #[test]
    fn passes_compose_in_order() {
        let batch = batch_of_strings(&[
            ("q0001", &["Somewhat masculine", "", "Maybe manly"]),
            ("q0002", &["Very important", "Not too important", "Very important"]),
            ("q0005", &["Yes", "No", "Maybe"]),
            ("q0004_0001", &["Selected", "Not selected", "Not selected"]),
            ("weight", &["1.23", "4.56", "7.89"]),
        ]);
        let out = clean_survey(batch).unwrap();

        // row 1 dropped for empty q0001; row 2's stray answers go missing
        assert_eq!(out.num_rows(), 2);
        let schema = out.schema();
        let names: Vec<&str> = schema
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "self_masculinity",
                "importance_seen_masculine",
                "pressure_unhealthy",
                "q0004_0001",
                "survey_weight"
            ]
        );

        let masc = out
            .column(0)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(masc.value(0), "Somewhat masculine");
        assert!(masc.is_null(1)); // "Maybe manly" is not a declared label

        let pressure = out
            .column(2)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(pressure.value(0), 1);
        assert!(pressure.is_null(1)); // "Maybe" → missing, never 0 or 1

        let flags = out
            .column(3)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(flags.values().to_vec(), vec![1, 0]);

        let weight = out
            .column(4)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(weight.value(0), "1.23");
    }
}
