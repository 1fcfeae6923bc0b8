//! AGENTS.md document assembly
//!
//! Builds the briefing from detection results. The layout is deterministic
//! for a fixed workspace: title, overview, one section per detected stack
//! in registry order, a project layout listing, and a generation footer.

use std::collections::BTreeSet;

use chrono::Utc;

use crate::detect::Detection;
use crate::workspace::Workspace;

/// File-listing cap for the project layout section.
const LAYOUT_SCAN_LIMIT: usize = 500;

/// Builds the complete AGENTS.md document.
pub fn build_document(name: &str, detections: &[Detection], ws: &Workspace) -> String {
    let mut doc = String::new();

    doc.push_str(&format!("# {}\n\n", name));
    doc.push_str(&overview(name, detections));

    if !detections.is_empty() {
        doc.push_str("## Stack\n\n");
        for detection in detections {
            doc.push_str(&detection.section);
            doc.push('\n');
        }
    }

    if let Some(layout) = layout_section(ws) {
        doc.push_str(&layout);
    }

    doc.push_str(&footer());
    doc
}

fn overview(name: &str, detections: &[Detection]) -> String {
    if detections.is_empty() {
        return format!(
            "Agent briefing for `{}`. No known stacks were detected; inspect \
             the repository layout below before making changes.\n\n",
            name
        );
    }

    let stacks: Vec<&str> = detections.iter().map(|d| d.name).collect();
    format!(
        "Agent briefing for `{}`, a {} project. Read the stack notes below \
         before making changes.\n\n",
        name,
        stacks.join(" + ")
    )
}

/// Lists the top-level directories that contain source files.
fn layout_section(ws: &Workspace) -> Option<String> {
    let dirs: BTreeSet<String> = ws
        .list_files(LAYOUT_SCAN_LIMIT)
        .iter()
        .filter_map(|path| {
            let mut components = path.components();
            let first = components.next()?;
            // Only entries with a second component are directories.
            components.next()?;
            Some(first.as_os_str().to_string_lossy().into_owned())
        })
        .collect();

    if dirs.is_empty() {
        return None;
    }

    let mut section = String::from("## Layout\n\nTop-level source directories:\n\n");
    for dir in dirs {
        section.push_str(&format!("- `{}/`\n", dir));
    }
    section.push('\n');
    Some(section)
}

fn footer() -> String {
    format!(
        "---\n\n_Generated by agentboost v{} on {}._\n",
        env!("CARGO_PKG_VERSION"),
        Utc::now().format("%Y-%m-%d")
    )
}
