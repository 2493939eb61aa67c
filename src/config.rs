use std::env;
use std::path::PathBuf;

/// Source/destination paths for the run. Defaults match the survey repo
/// layout; the environment variables exist for path configuration only.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("data/raw/masculinity.csv"),
            dest: PathBuf::from("data/processed/masculinity_clean.csv"),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            source: env::var("SURVEYPREP_SOURCE")
                .map(PathBuf::from)
                .unwrap_or(defaults.source),
            dest: env::var("SURVEYPREP_DEST")
                .map(PathBuf::from)
                .unwrap_or(defaults.dest),
        }
    }
}
