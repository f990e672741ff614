//! Artifact discovery in a phase directory.
//!
//! Only file names are collected; contents are never read.

use glob::{Pattern, glob};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

use crate::errors::PhaseError;

/// Markdown files ending in one of these are scaffolding, not output.
const EXCLUDED_MARKDOWN_SUFFIXES: [&str; 2] = ["-template.md", "_INSTRUCTIONS.md"];

/// JSON files that belong to tooling rather than the phase.
const EXCLUDED_JSON_NAMES: [&str; 1] = ["package.json"];

const ARTIFACT_PATTERNS: [&str; 3] = ["*.md", "*.yaml", "*.json"];

/// Returns true if a file name counts as a phase artifact.
pub fn is_artifact(file_name: &str) -> bool {
    if file_name.ends_with(".md") {
        !EXCLUDED_MARKDOWN_SUFFIXES
            .iter()
            .any(|suffix| file_name.ends_with(suffix))
    } else if file_name.ends_with(".yaml") {
        true
    } else if file_name.ends_with(".json") {
        !EXCLUDED_JSON_NAMES.contains(&file_name)
    } else {
        false
    }
}

/// Collect artifact file names from `phase_dir`.
///
/// Returns base names sorted and de-duplicated. A missing directory has no artifacts.
pub fn collect_artifacts(phase_dir: &Path) -> Result<Vec<String>, PhaseError> {
    if !phase_dir.is_dir() {
        debug!(dir = %phase_dir.display(), "phase directory not found, no artifacts");
        return Ok(Vec::new());
    }

    let escaped_dir = Pattern::escape(&phase_dir.to_string_lossy());
    let mut names = BTreeSet::new();

    for extension_pattern in ARTIFACT_PATTERNS {
        let pattern = format!("{}/{}", escaped_dir, extension_pattern);

        for path in glob(&pattern)?.filter_map(|entry| entry.ok()) {
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if is_artifact(name) {
                names.insert(name.to_string());
            }
        }
    }

    debug!(dir = %phase_dir.display(), count = names.len(), "collected artifacts");
    Ok(names.into_iter().collect())
}
