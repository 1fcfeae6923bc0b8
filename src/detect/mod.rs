//! # Stack Detection
//!
//! Recognizer pipeline that answers "does this repository look like X?".
//!
//! Each [`Recognizer`] inspects manifests through the [`Workspace`] and, on
//! a match, contributes a markdown fragment for the generated briefing.
//! Detection is read-only and infallible: a missing or unreadable manifest
//! means "no match", never an error.
//!
//! ## Built-in Recognizers
//!
//! | Recognizer | Signal |
//! |------------|--------|
//! | Node.js | `package.json` |
//! | TypeScript | `tsconfig.json` or a `typescript` dependency |
//! | React | `react` dependency |
//! | Next.js | `next` dependency or `next.config.*` |
//! | Express | `express` dependency |
//! | Python | `pyproject.toml`, `requirements.txt`, or `setup.py` |
//! | Rust | `Cargo.toml` |
//! | Docker | `Dockerfile` or `docker-compose.yml` |
//!
//! The registry order is fixed, so the generated document is stable for a
//! given workspace.

mod docker;
mod node;
mod python;
mod rust_lang;

pub use docker::Docker;
pub use node::{Express, NextJs, Node, React, TypeScript};
pub use python::Python;
pub use rust_lang::RustCrate;

use crate::workspace::Workspace;

/// A single matched stack with its briefing fragment.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Detection {
    /// Human-readable stack name, e.g. `"Next.js"`.
    pub name: &'static str,
    /// Markdown fragment describing how agents should work with the stack.
    pub section: String,
}

/// A stack recognizer: a detection predicate plus a briefing fragment.
pub trait Recognizer {
    /// Human-readable stack name.
    fn name(&self) -> &'static str;

    /// Returns true when the workspace looks like this stack.
    fn detect(&self, ws: &Workspace) -> bool;

    /// Markdown fragment for the briefing. Only called after a successful
    /// [`detect`](Recognizer::detect).
    fn section(&self, ws: &Workspace) -> String;
}

/// All built-in recognizers in documentation order.
pub fn registry() -> Vec<Box<dyn Recognizer>> {
    vec![
        Box::new(Node),
        Box::new(TypeScript),
        Box::new(React),
        Box::new(NextJs),
        Box::new(Express),
        Box::new(Python),
        Box::new(RustCrate),
        Box::new(Docker),
    ]
}

/// Runs every recognizer against the workspace, in registry order.
pub fn detect_stacks(ws: &Workspace) -> Vec<Detection> {
    registry()
        .iter()
        .filter(|r| r.detect(ws))
        .map(|r| Detection {
            name: r.name(),
            section: r.section(ws),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace(files: &[(&str, &str)]) -> (TempDir, Workspace) {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();
        for (rel, contents) in files {
            ws.write(rel, contents).unwrap();
        }
        (dir, ws)
    }

    #[test]
    fn empty_workspace_detects_nothing() {
        let (_dir, ws) = workspace(&[]);
        assert!(detect_stacks(&ws).is_empty());
    }

    #[test]
    fn node_project_detects_node_only() {
        let (_dir, ws) = workspace(&[("package.json", r#"{"name": "web"}"#)]);

        let names: Vec<_> = detect_stacks(&ws).iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Node.js"]);
    }

    #[test]
    fn nextjs_project_detects_the_full_frontend_stack() {
        let (_dir, ws) = workspace(&[(
            "package.json",
            r#"{
                "name": "web",
                "dependencies": {"next": "14.0.0", "react": "18.2.0"},
                "devDependencies": {"typescript": "5.3.0"}
            }"#,
        )]);

        let names: Vec<_> = detect_stacks(&ws).iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Node.js", "TypeScript", "React", "Next.js"]);
    }

    #[test]
    fn mixed_repository_detects_in_registry_order() {
        let (_dir, ws) = workspace(&[
            ("Cargo.toml", "[package]\nname = \"svc\"\n"),
            ("Dockerfile", "FROM rust:1.75\n"),
            ("pyproject.toml", "[project]\nname = \"tools\"\n"),
        ]);

        let names: Vec<_> = detect_stacks(&ws).iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Python", "Rust", "Docker"]);
    }

    #[test]
    fn detections_carry_non_empty_sections() {
        let (_dir, ws) = workspace(&[
            ("package.json", r#"{"dependencies": {"express": "4.18.0"}}"#),
            ("Dockerfile", "FROM node:20\n"),
        ]);

        for detection in detect_stacks(&ws) {
            assert!(
                detection.section.contains(detection.name),
                "section for {} should mention the stack",
                detection.name
            );
        }
    }
}
