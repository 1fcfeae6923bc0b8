//! AgentBoost CLI - AGENTS.md generation for AI coding agents

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = agentboost::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
