use std::path::{Path, PathBuf};

use crate::errors::PhaseError;

/// Name of the project state file inside the project directory.
pub const STATE_FILE_NAME: &str = "project.json";

/// Directory (under the project directory) holding one subdirectory per phase.
pub const PHASES_DIR_NAME: &str = "phases";

/// Runtime configuration for a completion run.
///
/// Every path is derived from the project directory, so file operations
/// never depend on the process working directory.
#[derive(Debug, Clone)]
pub struct Config {
    pub project_dir: PathBuf,
    pub state_file: PathBuf,
    pub phases_dir: PathBuf,
}

impl Config {
    /// Create a new Config rooted at `project_dir`.
    ///
    /// The directory must exist; it is resolved to an absolute path.
    pub fn new(project_dir: impl AsRef<Path>) -> Result<Self, PhaseError> {
        let project_dir = project_dir.as_ref();
        let project_dir = project_dir
            .canonicalize()
            .map_err(|source| PhaseError::WorkingDirectory {
                path: project_dir.to_path_buf(),
                source,
            })?;

        if !project_dir.is_dir() {
            return Err(PhaseError::WorkingDirectory {
                path: project_dir,
                source: std::io::Error::new(
                    std::io::ErrorKind::NotADirectory,
                    "not a directory",
                ),
            });
        }

        let state_file = project_dir.join(STATE_FILE_NAME);
        let phases_dir = project_dir.join(PHASES_DIR_NAME);

        Ok(Self {
            project_dir,
            state_file,
            phases_dir,
        })
    }

    /// Directory holding the artifacts of one phase.
    pub fn phase_dir(&self, phase: &str) -> PathBuf {
        self.phases_dir.join(phase)
    }
}
