use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure classes of the one-shot batch run. Unrecognized cell values
/// are not errors anywhere in the pipeline; they resolve to missing values.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source file not found: {0}")]
    NotFound(PathBuf),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("required column '{0}' is missing from the source table")]
    MissingRequiredColumn(String),

    #[error("failed to write output to {path}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },
}
