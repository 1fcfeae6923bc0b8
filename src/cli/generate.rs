//! Briefing generation command

use anyhow::Result;

use super::output::Output;
use crate::args::ParseResult;
use crate::config::Config;
use crate::detect::{self, Detection};
use crate::llm::{self, LlmClient, LlmError};
use crate::markdown;
use crate::workspace::Workspace;

/// Runs the `generate` command: detect, assemble, optionally enhance, write.
pub fn run(parsed: &ParseResult, output: &Output) -> Result<()> {
    let ws = Workspace::open(parsed.param("path").unwrap_or("."))?;
    output.verbose_ctx("generate", &format!("Analyzing {}", ws.root().display()));

    let config = Config::load(ws.root())?;

    let name = parsed
        .param("name")
        .map(str::to_string)
        .or_else(|| package_name(&ws))
        .unwrap_or_else(|| ws.name());

    let detections = detect::detect_stacks(&ws);
    output.verbose_ctx(
        "generate",
        &format!("Detected {} stack(s)", detections.len()),
    );

    let mut document = markdown::build_document(&name, &detections, &ws);
    let dry_run = parsed.is_set("dry-run") || parsed.is_set("n");

    let mut enhanced = false;
    if should_enhance(parsed, &config, dry_run) {
        match llm::api_key(&config) {
            Some(key) => {
                let model = parsed.param("model").unwrap_or(&config.llm.model);
                output.verbose_ctx("generate", &format!("Enhancing with model: {}", model));
                match enhance(key, &config, model, &document, &name) {
                    Ok(polished) => {
                        document = polished;
                        enhanced = true;
                    }
                    // Enhancement is best-effort; the draft still ships.
                    Err(e) => {
                        output.error(&format!("Enhancement failed, keeping the draft: {}", e))
                    }
                }
            }
            None => output.verbose_ctx("generate", "No API key found, skipping enhancement"),
        }
    }

    if dry_run {
        if output.is_json() {
            output.data(&serde_json::json!({
                "name": name,
                "stacks": stack_names(&detections),
                "enhanced": enhanced,
                "document": document,
            }));
        } else {
            print!("{}", document);
        }
        return Ok(());
    }

    let out_rel = parsed.param_any(&["output", "o"]).unwrap_or(&config.output);
    let force = parsed.is_set("force") || parsed.is_set("f");
    if ws.exists(out_rel) && !force {
        anyhow::bail!("{} already exists. Pass --force to overwrite.", out_rel);
    }

    ws.write(out_rel, &document)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "path": ws.root().join(out_rel).display().to_string(),
            "stacks": stack_names(&detections),
            "enhanced": enhanced,
        }));
    } else {
        output.success(&format!("Wrote {}", ws.root().join(out_rel).display()));
    }
    Ok(())
}

fn should_enhance(parsed: &ParseResult, config: &Config, dry_run: bool) -> bool {
    !dry_run && !parsed.is_set("no-llm") && config.llm.enabled
}

fn enhance(
    key: String,
    config: &Config,
    model: &str,
    document: &str,
    name: &str,
) -> Result<String, LlmError> {
    LlmClient::new(key, &config.llm.api_base, model)?.enhance(document, name)
}

/// Project name from `package.json`, when declared.
fn package_name(ws: &Workspace) -> Option<String> {
    ws.package_json()?.get("name")?.as_str().map(str::to_string)
}

fn stack_names(detections: &[Detection]) -> Vec<&'static str> {
    detections.iter().map(|d| d.name).collect()
}
