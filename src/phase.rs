//! The fixed workflow phase sequence.
//!
//! Projects move through the same six phases in order. The state file may
//! carry other keys, but only these have a defined successor.

/// Represents a single phase of the project workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowPhase {
    Concept,
    Blueprint,
    Prd,
    Architecture,
    Testing,
    Implementation,
}

impl WorkflowPhase {
    /// All phases in workflow order.
    pub const ALL: [WorkflowPhase; 6] = [
        WorkflowPhase::Concept,
        WorkflowPhase::Blueprint,
        WorkflowPhase::Prd,
        WorkflowPhase::Architecture,
        WorkflowPhase::Testing,
        WorkflowPhase::Implementation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowPhase::Concept => "concept",
            WorkflowPhase::Blueprint => "blueprint",
            WorkflowPhase::Prd => "prd",
            WorkflowPhase::Architecture => "architecture",
            WorkflowPhase::Testing => "testing",
            WorkflowPhase::Implementation => "implementation",
        }
    }

    /// Position of this phase in [`WorkflowPhase::ALL`].
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|p| p == self)
            .unwrap_or_default()
    }

    /// The phase that follows this one, or `None` for the last phase.
    pub fn next(&self) -> Option<WorkflowPhase> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// Comma-separated list of every phase name, for help and error text.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WorkflowPhase {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid phase '{}'. Valid values: {}",
                    s,
                    WorkflowPhase::names()
                )
            })
    }
}

/// Successor of a raw phase key in the workflow sequence.
///
/// Keys outside the sequence have no successor, so `current_phase` is left alone.
pub fn next_phase_name(name: &str) -> Option<&'static str> {
    name.parse::<WorkflowPhase>()
        .ok()
        .and_then(|p| p.next())
        .map(|p| p.as_str())
}
