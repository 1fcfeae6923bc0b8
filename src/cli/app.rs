//! Main CLI application structure

use anyhow::Result;

use super::output::{Output, OutputFormat};
use super::{detect_cmd, generate};
use crate::args::{classify, ParseResult};
use crate::config::{Config, PROJECT_CONFIG};
use crate::workspace::Workspace;

/// Command used when no standalone token is present.
pub const DEFAULT_COMMAND: &str = "generate";

const USAGE: &str = "\
agentboost - AGENTS.md generation for AI coding agents

Usage:
  agentboost [command] [params]

Commands:
  generate    Analyze the repository and write AGENTS.md (default)
  detect      Report detected stacks without writing anything
  init        Write a project .agentboost.toml with defaults
  help        Show this message
  version     Show the version

Params:
  --path <dir>      Repository to analyze (default: current directory)
  --name <name>     Project name (default: inferred from the repository)
  --output <file>   Output file (default: AGENTS.md)
  --model <model>   Language model for enhancement
  --format <fmt>    Output format: text or json
  --force, -f       Overwrite an existing output file
  --dry-run, -n     Print the document instead of writing it
  --no-llm          Skip language-model enhancement
  --verbose, -v     Verbose diagnostics on stderr
";

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let tokens: Vec<String> = std::env::args().skip(1).collect();
    run_tokens(&tokens)
}

/// Classifies the tokens and dispatches to the matching command. Split out
/// of [`run`] so tests can drive the CLI without spawning a process.
pub fn run_tokens(tokens: &[String]) -> Result<()> {
    let parsed = classify(tokens);
    let output = Output::new(
        OutputFormat::from_param(parsed.param("format")),
        parsed.is_set("verbose") || parsed.is_set("v"),
    );

    // `--help` and `--version` classify as parameters, not commands.
    if parsed.is_set("help") || parsed.is_set("h") {
        print!("{}", USAGE);
        return Ok(());
    }
    if parsed.is_set("version") {
        println!("agentboost {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let command = parsed.command_or(DEFAULT_COMMAND);
    output.verbose(&format!("Running command: {}", command));

    match command {
        "generate" => generate::run(&parsed, &output),
        "detect" => detect_cmd::run(&parsed, &output),
        "init" => init(&parsed, &output),
        "help" => {
            print!("{}", USAGE);
            Ok(())
        }
        "version" => {
            println!("agentboost {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            anyhow::bail!("Unknown command: {}. Run `agentboost help` for usage.", other)
        }
    }
}

/// Writes a project config with defaults, honoring `model` and `output`
/// overrides from the command line.
fn init(parsed: &ParseResult, output: &Output) -> Result<()> {
    let ws = Workspace::open(parsed.param("path").unwrap_or("."))?;

    let force = parsed.is_set("force") || parsed.is_set("f");
    if ws.exists(PROJECT_CONFIG) && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite.",
            PROJECT_CONFIG
        );
    }

    let mut config = Config::default();
    if let Some(model) = parsed.param("model") {
        config.llm.model = model.to_string();
    }
    if let Some(out) = parsed.param_any(&["output", "o"]) {
        config.output = out.to_string();
    }

    let path = config.save_project(ws.root())?;
    if output.is_json() {
        output.data(&serde_json::json!({
            "path": path.display().to_string(),
        }));
    } else {
        output.success(&format!("Wrote {}", path.display()));
    }
    Ok(())
}
