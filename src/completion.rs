//! Phase completion: the single state transition this crate performs.
//!
//! A run loads `project.json`, validates the phase, collects artifacts,
//! marks the phase completed, advances `current_phase`, and writes the
//! file back. Nothing is written until every check has passed.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::artifacts::collect_artifacts;
use crate::config::Config;
use crate::errors::PhaseError;
use crate::phase::next_phase_name;
use crate::state::ProjectState;

/// Timestamp format stored in `completed`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Details of a phase that was just completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSummary {
    pub phase: String,
    pub completed_at: String,
    pub artifacts: Vec<String>,
    /// Phase now recorded as current, or `None` when the workflow is finished
    pub next_phase: Option<String>,
}

/// Result of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The phase was already completed; the state file was not touched.
    AlreadyCompleted { phase: String },
    Completed(CompletionSummary),
}

/// Complete `phase` using the current UTC time.
pub fn complete_phase(config: &Config, phase: &str) -> Result<Completion, PhaseError> {
    complete_phase_at(config, phase, Utc::now())
}

/// Complete `phase`, stamping it with `now`.
pub fn complete_phase_at(
    config: &Config,
    phase: &str,
    now: DateTime<Utc>,
) -> Result<Completion, PhaseError> {
    debug!(state_file = %config.state_file.display(), "loading project state");
    let mut state = ProjectState::load(&config.state_file)?;

    if state.phase(phase)?.is_completed() {
        info!(phase, "phase already completed, leaving state unchanged");
        return Ok(Completion::AlreadyCompleted {
            phase: phase.to_string(),
        });
    }

    let artifacts = collect_artifacts(&config.phase_dir(phase))?;
    let completed_at = now.format(TIMESTAMP_FORMAT).to_string();
    let artifacts = state.mark_completed(phase, &completed_at, artifacts)?;

    let next_phase = next_phase_name(phase).map(str::to_string);
    if let Some(ref next) = next_phase {
        state.set_current_phase(next);
    }

    state.save(&config.state_file)?;
    info!(phase, completed_at = %completed_at, next = ?next_phase, "phase completed");

    Ok(Completion::Completed(CompletionSummary {
        phase: phase.to_string(),
        completed_at,
        artifacts,
        next_phase,
    }))
}
