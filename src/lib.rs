pub mod artifacts;
pub mod completion;
pub mod config;
pub mod errors;
pub mod phase;
pub mod state;
pub mod ui;

pub use completion::{Completion, CompletionSummary, complete_phase};
pub use errors::PhaseError;
