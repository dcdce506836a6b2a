//! Error types for dataset loading and configuration.
//!
//! Guess outcomes (`NoMatch`, `AlreadyGuessed`) are *not* errors; they live
//! in [`crate::engine::GuessOutcome`]. The only fatal path in this
//! application is failing to load the region dataset, which is reported
//! through `color_eyre` in `main` before the terminal enters raw mode.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a region dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The GeoJSON could not be parsed at all.
    #[error("failed to parse GeoJSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A dataset file was given on the command line but could not be read.
    #[error("failed to read dataset file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The feature collection contained no features.
    #[error("dataset contains no regions")]
    Empty,

    /// Two features share a name (compared case-insensitively, since
    /// matching is case-insensitive).
    #[error("duplicate region name in dataset: {0:?}")]
    DuplicateName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offender() {
        let err = DatasetError::DuplicateName("Goa".to_string());
        assert!(err.to_string().contains("Goa"));

        let err = DatasetError::Empty;
        assert_eq!(err.to_string(), "dataset contains no regions");
    }
}
