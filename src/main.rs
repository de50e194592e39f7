//! git-build-state - build status for git commits

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = git_build_state::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
