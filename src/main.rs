use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use complete_phase::ui::{render_error, usage};

mod cmd;

#[derive(Parser)]
#[command(name = "complete-phase")]
#[command(version, about = "Mark a workflow phase as completed in project.json")]
pub struct Cli {
    #[arg(short, long)]
    pub verbose: bool,

    /// Phase to complete: concept, blueprint, prd, architecture, testing, implementation
    pub phase_name: Option<String>,

    /// Directory containing project.json and phases/
    #[arg(default_value = ".")]
    pub project_dir: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version come through here too
        Err(e) if e.use_stderr() => {
            eprint!("{}", e.render());
            return ExitCode::FAILURE;
        }
        Err(e) => {
            print!("{}", e.render());
            return ExitCode::SUCCESS;
        }
    };
    init_tracing(cli.verbose);

    let Some(phase) = cli.phase_name.as_deref() else {
        println!("{}", usage());
        return ExitCode::FAILURE;
    };

    match cmd::cmd_complete(phase, &cli.project_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "warn,complete_phase=debug"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
