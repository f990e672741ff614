//! Project state file (`project.json`) loading and saving.
//!
//! The file is kept as a JSON object and edited in place, so key order,
//! `null` values and keys this crate does not know about all survive a rewrite.

use serde::de::Error as _;
use serde_json::{Map, Value};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::errors::PhaseError;

/// Status value marking a finished phase.
pub const STATUS_COMPLETED: &str = "completed";

const PHASES_KEY: &str = "phases";
const CURRENT_PHASE_KEY: &str = "current_phase";
const STATUS_KEY: &str = "status";
const COMPLETED_KEY: &str = "completed";
const ARTIFACTS_KEY: &str = "artifacts";

/// The persisted record of every phase and the active one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectState {
    document: Map<String, Value>,
}

/// Read-only view of one phase record.
#[derive(Debug, Clone, Copy)]
pub struct PhaseRecord<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> PhaseRecord<'a> {
    /// The `status` value, when it is a string.
    pub fn status(&self) -> Option<&'a str> {
        self.fields.get(STATUS_KEY).and_then(Value::as_str)
    }

    /// Only the exact string `"completed"` counts; any other value does not.
    pub fn is_completed(&self) -> bool {
        self.status() == Some(STATUS_COMPLETED)
    }

    /// UTC timestamp (`YYYY-MM-DDTHH:MM:SSZ`), set on completion.
    pub fn completed(&self) -> Option<&'a str> {
        self.fields.get(COMPLETED_KEY).and_then(Value::as_str)
    }

    /// Artifact names, when the record holds a list of strings.
    pub fn artifacts(&self) -> Option<Vec<&'a str>> {
        self.fields
            .get(ARTIFACTS_KEY)?
            .as_array()?
            .iter()
            .map(Value::as_str)
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }
}

impl ProjectState {
    /// Load project state from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PhaseError> {
        if !path.is_file() {
            let dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
            return Err(PhaseError::MissingStateFile { dir });
        }

        let content = std::fs::read_to_string(path).map_err(|source| PhaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| PhaseError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse project state from a JSON string.
    ///
    /// The document must be an object whose `phases` key holds an object.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let document: Map<String, Value> = serde_json::from_str(content)?;
        match document.get(PHASES_KEY) {
            Some(Value::Object(_)) => Ok(Self { document }),
            Some(_) => Err(serde_json::Error::custom("`phases` must be an object")),
            None => Err(serde_json::Error::missing_field(PHASES_KEY)),
        }
    }

    /// Save project state, replacing the file atomically.
    ///
    /// Output is 2-space indented JSON with a trailing newline.
    pub fn save(&self, path: &Path) -> Result<(), PhaseError> {
        let mut content =
            serde_json::to_string_pretty(&self.document).map_err(PhaseError::Serialize)?;
        content.push('\n');

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let io_err = |source: std::io::Error| PhaseError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut temp_file = NamedTempFile::new_in(parent).map_err(io_err)?;
        temp_file.write_all(content.as_bytes()).map_err(io_err)?;
        temp_file.flush().map_err(io_err)?;
        temp_file.persist(path).map_err(|e| io_err(e.error))?;

        Ok(())
    }

    /// The whole document, in file order.
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    fn phases(&self) -> Option<&Map<String, Value>> {
        self.document.get(PHASES_KEY).and_then(Value::as_object)
    }

    /// Phase names in file order.
    pub fn phase_names(&self) -> Vec<String> {
        self.phases()
            .map(|phases| phases.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// The `current_phase` value, when it is a string.
    pub fn current_phase(&self) -> Option<&str> {
        self.document.get(CURRENT_PHASE_KEY).and_then(Value::as_str)
    }

    /// Set `current_phase`, keeping its position if the key already exists.
    pub fn set_current_phase(&mut self, name: &str) {
        self.document
            .insert(CURRENT_PHASE_KEY.to_string(), Value::from(name));
    }

    /// Get the record for a phase.
    ///
    /// Fails with `UnknownPhase` when the name is not a key of `phases`, and
    /// with `InvalidRecord` when the record is not an object or has no `status` key.
    pub fn phase(&self, name: &str) -> Result<PhaseRecord<'_>, PhaseError> {
        let value = self
            .phases()
            .and_then(|phases| phases.get(name))
            .ok_or_else(|| PhaseError::UnknownPhase {
                phase: name.to_string(),
                valid: self.phase_names(),
            })?;

        let fields = value.as_object().ok_or_else(|| PhaseError::InvalidRecord {
            phase: name.to_string(),
            reason: "record is not an object",
        })?;
        if !fields.contains_key(STATUS_KEY) {
            return Err(PhaseError::InvalidRecord {
                phase: name.to_string(),
                reason: "missing `status` key",
            });
        }

        Ok(PhaseRecord { fields })
    }

    /// Mark a phase completed at `timestamp` with the given artifacts.
    ///
    /// `status`, `completed` and `artifacts` are overwritten whatever they held
    /// before; existing keys keep their position. Returns the stored artifacts,
    /// sorted and de-duplicated.
    pub fn mark_completed(
        &mut self,
        name: &str,
        timestamp: &str,
        mut artifacts: Vec<String>,
    ) -> Result<Vec<String>, PhaseError> {
        self.phase(name)?;

        artifacts.sort();
        artifacts.dedup();

        let fields = self
            .document
            .get_mut(PHASES_KEY)
            .and_then(Value::as_object_mut)
            .and_then(|phases| phases.get_mut(name))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| PhaseError::InvalidRecord {
                phase: name.to_string(),
                reason: "record is not an object",
            })?;

        fields.insert(STATUS_KEY.to_string(), Value::from(STATUS_COMPLETED));
        fields.insert(COMPLETED_KEY.to_string(), Value::from(timestamp));
        fields.insert(ARTIFACTS_KEY.to_string(), Value::from(artifacts.clone()));

        Ok(artifacts)
    }
}
