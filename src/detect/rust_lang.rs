//! Rust recognizer

use super::Recognizer;
use crate::workspace::Workspace;

pub struct RustCrate;

impl Recognizer for RustCrate {
    fn name(&self) -> &'static str {
        "Rust"
    }

    fn detect(&self, ws: &Workspace) -> bool {
        ws.exists("Cargo.toml")
    }

    fn section(&self, ws: &Workspace) -> String {
        let workspace_note = if is_cargo_workspace(ws) {
            " This is a Cargo workspace; run commands with `-p <crate>` to \
             target a single member."
        } else {
            ""
        };
        format!(
            "### Rust\n\n\
             This is a Rust project managed by Cargo.{} Build with \
             `cargo build`, test with `cargo test`, and keep \
             `cargo clippy` and `cargo fmt` clean before finishing a \
             change.\n",
            workspace_note
        )
    }
}

/// True when the root manifest declares a `[workspace]` table.
fn is_cargo_workspace(ws: &Workspace) -> bool {
    ws.read_to_string("Cargo.toml")
        .ok()
        .and_then(|text| text.parse::<toml::Table>().ok())
        .map(|manifest| manifest.contains_key("workspace"))
        .unwrap_or(false)
}
