//! Stack detection command

use anyhow::Result;

use super::output::Output;
use crate::args::ParseResult;
use crate::detect;
use crate::workspace::Workspace;

/// Runs the `detect` command: report matched stacks without writing.
pub fn run(parsed: &ParseResult, output: &Output) -> Result<()> {
    let ws = Workspace::open(parsed.param("path").unwrap_or("."))?;
    output.verbose_ctx("detect", &format!("Scanning {}", ws.root().display()));

    let detections = detect::detect_stacks(&ws);

    if output.is_json() {
        let stacks: Vec<&str> = detections.iter().map(|d| d.name).collect();
        output.data(&serde_json::json!({
            "root": ws.root().display().to_string(),
            "stacks": stacks,
        }));
        return Ok(());
    }

    if detections.is_empty() {
        println!("No known stacks detected in {}", ws.root().display());
        return Ok(());
    }

    println!("Detected stacks:");
    for detection in &detections {
        println!("  {}", detection.name);
    }
    output.blank();
    println!("{} stack(s) detected", detections.len());
    Ok(())
}
