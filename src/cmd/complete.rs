//! The `complete-phase` command.

use std::path::Path;

use complete_phase::config::Config;
use complete_phase::errors::PhaseError;
use complete_phase::ui::render_completion;

pub fn cmd_complete(phase: &str, project_dir: &Path) -> Result<(), PhaseError> {
    let config = Config::new(project_dir)?;
    let completion = complete_phase::complete_phase(&config, phase)?;
    println!("{}", render_completion(&completion));
    Ok(())
}
