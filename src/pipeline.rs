use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::{config::Config, load, transform, write};

/// Run the whole batch job: load, transform, write. Returns the output path
/// on success. Any failure aborts the run; nothing is written on failure.
pub fn run(cfg: &Config) -> Result<PathBuf> {
    info!(source = %cfg.source.display(), dest = %cfg.dest.display(), "starting run");
    let table = load::read_table(&cfg.source)?;
    let cleaned = transform::clean_survey(table)?;
    write::write_table(&cleaned, &cfg.dest)?;
    Ok(cfg.dest.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn run_on(input: &str) -> Result<String> {
        let mut src = NamedTempFile::new()?;
        src.write_all(input.as_bytes())?;
        let dir = tempdir()?;
        let cfg = Config {
            source: src.path().to_path_buf(),
            dest: dir.path().join("clean.csv"),
        };
        let out = run(&cfg)?;
        Ok(std::fs::read_to_string(out)?)
    }

    #[test]
    fn end_to_end_rename_recode_expand() {
        let input = "q0001,q0002,q0004_0001,q0004_0002,weight\n\
                     Somewhat masculine,Very important,Selected,Not selected,1.23\n";
        let out = run_on(input).unwrap();
        assert_eq!(
            out,
            "self_masculinity,importance_seen_masculine,q0004_0001,q0004_0002,survey_weight\n\
             Somewhat masculine,Very important,1,0,1.23\n"
        );
    }

    #[test]
    fn empty_primary_response_drops_the_row() {
        let input = "q0001,q0002\n\
                     ,Very important\n\
                     Very masculine,Somewhat important\n";
        let out = run_on(input).unwrap();
        assert_eq!(
            out,
            "self_masculinity,importance_seen_masculine\n\
             Very masculine,Somewhat important\n"
        );
    }

    #[test]
    fn unrecognized_binary_value_becomes_missing() {
        let input = "q0001,q0005\nVery masculine,Maybe\n";
        let out = run_on(input).unwrap();
        assert_eq!(out, "self_masculinity,pressure_unhealthy\nVery masculine,\n");
    }

    #[test]
    fn absent_primary_column_aborts_with_nothing_written() {
        let mut src = NamedTempFile::new().unwrap();
        src.write_all(b"q0002,weight\nVery important,1.0\n").unwrap();
        let dir = tempdir().unwrap();
        let cfg = Config {
            source: src.path().to_path_buf(),
            dest: dir.path().join("clean.csv"),
        };
        let err = run(&cfg).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::MissingRequiredColumn(_))
        ));
        assert!(!cfg.dest.exists());
    }
}
