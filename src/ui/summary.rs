//! Human-readable console text for completion results and failures.

use console::style;

use super::icons::{CHECK, CROSS, WARNING};
use crate::completion::Completion;
use crate::errors::PhaseError;
use crate::phase::WorkflowPhase;

/// Shown as the next phase once the last phase in the workflow is done.
pub const ALL_PHASES_COMPLETE: &str = "All phases complete!";

/// Render the outcome of a completion request.
pub fn render_completion(completion: &Completion) -> String {
    match completion {
        Completion::AlreadyCompleted { phase } => {
            format!("{}{} phase is already completed", WARNING, style(phase).bold())
        }
        Completion::Completed(summary) => {
            let mut lines = vec![
                format!(
                    "{}{} phase marked as completed",
                    CHECK,
                    style(&summary.phase).bold()
                ),
                "   Status: completed".to_string(),
                format!("   Completed: {}", summary.completed_at),
                format!("   Artifacts: {} files", summary.artifacts.len()),
            ];
            lines.extend(
                summary
                    .artifacts
                    .iter()
                    .map(|artifact| format!("     - {}", artifact)),
            );
            lines.push(format!(
                "   Next phase: {}",
                summary.next_phase.as_deref().unwrap_or(ALL_PHASES_COMPLETE)
            ));
            lines.join("\n")
        }
    }
}

/// Render a failure, including the valid phase names for an unknown phase.
pub fn render_error(err: &PhaseError) -> String {
    let mut text = format!("{}{}", CROSS, err);
    if let PhaseError::UnknownPhase { valid, .. } = err {
        text.push_str(&format!("\n   Valid phases: {}", valid.join(", ")));
    }
    text
}

/// Usage block printed when no phase name is given.
pub fn usage() -> String {
    [
        "Usage: complete-phase <phase_name> [project_dir]".to_string(),
        String::new(),
        "Examples:".to_string(),
        "  complete-phase prd".to_string(),
        "  complete-phase architecture /path/to/project".to_string(),
        String::new(),
        format!("Valid phases: {}", WorkflowPhase::names()),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::CompletionSummary;
    use std::path::PathBuf;

    fn plain() {
        console::set_colors_enabled(false);
    }

    fn summary(artifacts: &[&str], next_phase: Option<&str>) -> Completion {
        Completion::Completed(CompletionSummary {
            phase: "prd".to_string(),
            completed_at: "2026-03-14T15:09:26Z".to_string(),
            artifacts: artifacts.iter().map(|s| s.to_string()).collect(),
            next_phase: next_phase.map(str::to_string),
        })
    }

    #[test]
    fn test_render_completed_with_artifacts() {
        plain();
        let text = render_completion(&summary(
            &["requirements.md", "schema.yaml"],
            Some("architecture"),
        ));
        assert!(text.contains("prd phase marked as completed"));
        assert!(text.contains("   Status: completed"));
        assert!(text.contains("   Completed: 2026-03-14T15:09:26Z"));
        assert!(text.contains("   Artifacts: 2 files"));
        assert!(text.contains("     - requirements.md\n     - schema.yaml"));
        assert!(text.ends_with("   Next phase: architecture"));
    }

    #[test]
    fn test_render_last_phase_reports_all_complete() {
        plain();
        let text = render_completion(&summary(&[], None));
        assert!(text.contains("   Artifacts: 0 files"));
        assert!(!text.contains("     - "));
        assert!(text.ends_with("Next phase: All phases complete!"));
    }

    #[test]
    fn test_render_already_completed() {
        plain();
        let text = render_completion(&Completion::AlreadyCompleted {
            phase: "concept".to_string(),
        });
        assert!(text.contains("concept phase is already completed"));
    }

    #[test]
    fn test_render_unknown_phase_lists_valid() {
        let err = PhaseError::UnknownPhase {
            phase: "deploy".to_string(),
            valid: vec!["concept".to_string(), "blueprint".to_string()],
        };
        let text = render_error(&err);
        assert!(text.contains("Unknown phase: deploy"));
        assert!(text.ends_with("   Valid phases: concept, blueprint"));
    }

    #[test]
    fn test_render_other_error_is_single_line() {
        let err = PhaseError::MissingStateFile {
            dir: PathBuf::from("/tmp/project"),
        };
        let text = render_error(&err);
        assert!(text.contains("No project.json found in /tmp/project"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_usage_lists_phases() {
        let text = usage();
        assert!(text.starts_with("Usage: complete-phase <phase_name> [project_dir]"));
        assert!(text.contains(
            "Valid phases: concept, blueprint, prd, architecture, testing, implementation"
        ));
    }
}
