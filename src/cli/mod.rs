//! # Command-Line Interface
//!
//! Schema-free dispatch and output formatting.
//!
//! Arguments are classified by [`crate::args::classify`]; the resulting
//! command picks the handler and each handler reads its parameters by name.
//! Unknown parameters are ignored, unknown commands are a usage error.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `generate` (default) | Detect stacks and write `AGENTS.md` |
//! | `detect` | Report detected stacks without writing |
//! | `init` | Write a project `.agentboost.toml` |
//! | `help`, `version` | Usage and version |
//!
//! ## Output
//!
//! All commands honor `--format json` for machine-readable output and
//! `--verbose` for diagnostics on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to classify `std::env::args` and execute the command.

mod app;
mod detect_cmd;
mod generate;
mod output;

pub use app::{run, run_tokens};
pub use output::{Output, OutputFormat};
