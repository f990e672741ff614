//! Typed error hierarchy for phase completion.
//!
//! Every failure the completer can hit is a `PhaseError` variant. The binary
//! turns each one into a single console line and exit code 1.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading, validating, or persisting project state.
#[derive(Debug, Error)]
pub enum PhaseError {
    #[error("No project.json found in {dir}")]
    MissingStateFile { dir: PathBuf },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown phase: {phase}")]
    UnknownPhase { phase: String, valid: Vec<String> },

    #[error("Cannot use project directory {path}: {source}")]
    WorkingDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Phase record for {phase} is malformed: {reason}")]
    InvalidRecord { phase: String, reason: &'static str },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize project state: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid artifact pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

impl PhaseError {
    /// Names accepted for the failed lookup, empty for every other variant.
    pub fn valid_phases(&self) -> &[String] {
        match self {
            PhaseError::UnknownPhase { valid, .. } => valid,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_state_file_names_the_directory() {
        let err = PhaseError::MissingStateFile {
            dir: PathBuf::from("/work/project"),
        };
        assert_eq!(err.to_string(), "No project.json found in /work/project");
    }

    #[test]
    fn unknown_phase_carries_valid_names() {
        let err = PhaseError::UnknownPhase {
            phase: "deploy".to_string(),
            valid: vec!["concept".to_string(), "prd".to_string()],
        };
        assert_eq!(err.to_string(), "Unknown phase: deploy");
        assert_eq!(err.valid_phases(), ["concept", "prd"]);
    }

    #[test]
    fn valid_phases_is_empty_for_other_variants() {
        let err = PhaseError::MissingStateFile {
            dir: PathBuf::from("."),
        };
        assert!(err.valid_phases().is_empty());
    }

    #[test]
    fn working_directory_error_keeps_io_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such dir");
        let err = PhaseError::WorkingDirectory {
            path: PathBuf::from("/missing"),
            source: io_err,
        };
        match &err {
            PhaseError::WorkingDirectory { path, source } => {
                assert_eq!(path, &PathBuf::from("/missing"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            _ => panic!("Expected WorkingDirectory"),
        }
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn parse_error_wraps_serde_error() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = PhaseError::Parse {
            path: PathBuf::from("project.json"),
            source,
        };
        assert!(err.to_string().starts_with("Failed to parse project.json"));
    }
}
