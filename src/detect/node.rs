//! Node.js ecosystem recognizers
//!
//! All of these read `package.json`; the framework recognizers additionally
//! require the runtime signal, so a stray `tsconfig.json` in a non-Node
//! repository still counts as TypeScript but `react` only matches as a
//! declared dependency.

use serde_json::Value;

use super::Recognizer;
use crate::workspace::Workspace;

/// True when `package.json` declares `name` anywhere in its dependency
/// tables.
fn has_dependency(pkg: &Value, name: &str) -> bool {
    ["dependencies", "devDependencies", "peerDependencies"]
        .iter()
        .any(|table| pkg.get(table).and_then(|deps| deps.get(name)).is_some())
}

/// Renders the `scripts` table as a markdown command list.
fn scripts_block(pkg: &Value) -> String {
    let Some(scripts) = pkg.get("scripts").and_then(Value::as_object) else {
        return String::new();
    };
    if scripts.is_empty() {
        return String::new();
    }

    let mut block = String::from("\nAvailable scripts:\n\n");
    for (name, cmd) in scripts {
        if let Some(cmd) = cmd.as_str() {
            block.push_str(&format!("- `npm run {}` - `{}`\n", name, cmd));
        }
    }
    block
}

pub struct Node;

impl Recognizer for Node {
    fn name(&self) -> &'static str {
        "Node.js"
    }

    fn detect(&self, ws: &Workspace) -> bool {
        ws.exists("package.json")
    }

    fn section(&self, ws: &Workspace) -> String {
        let pkg = ws.package_json().unwrap_or(Value::Null);
        let mut section = String::from(
            "### Node.js\n\n\
             This is a Node.js project. Dependencies are declared in \
             `package.json`; install them with `npm install` before running \
             anything else.\n",
        );
        section.push_str(&scripts_block(&pkg));
        section
    }
}

pub struct TypeScript;

impl Recognizer for TypeScript {
    fn name(&self) -> &'static str {
        "TypeScript"
    }

    fn detect(&self, ws: &Workspace) -> bool {
        ws.exists("tsconfig.json")
            || ws
                .package_json()
                .map(|pkg| has_dependency(&pkg, "typescript"))
                .unwrap_or(false)
    }

    fn section(&self, _ws: &Workspace) -> String {
        "### TypeScript\n\n\
         The codebase is TypeScript. Keep strict typing intact: do not add \
         `any` or `@ts-ignore` to silence errors, and run `npx tsc --noEmit` \
         to type-check before considering a change done.\n"
            .to_string()
    }
}

pub struct React;

impl Recognizer for React {
    fn name(&self) -> &'static str {
        "React"
    }

    fn detect(&self, ws: &Workspace) -> bool {
        ws.package_json()
            .map(|pkg| has_dependency(&pkg, "react"))
            .unwrap_or(false)
    }

    fn section(&self, _ws: &Workspace) -> String {
        "### React\n\n\
         UI code uses React. Prefer function components with hooks, keep \
         components small, and colocate component-specific styles and tests \
         with the component.\n"
            .to_string()
    }
}

pub struct NextJs;

impl Recognizer for NextJs {
    fn name(&self) -> &'static str {
        "Next.js"
    }

    fn detect(&self, ws: &Workspace) -> bool {
        let config = ["next.config.js", "next.config.mjs", "next.config.ts"]
            .iter()
            .any(|f| ws.exists(f));
        config
            || ws
                .package_json()
                .map(|pkg| has_dependency(&pkg, "next"))
                .unwrap_or(false)
    }

    fn section(&self, ws: &Workspace) -> String {
        let router = if ws.exists("app") || ws.exists("src/app") {
            "the App Router (`app/` directory)"
        } else {
            "the Pages Router (`pages/` directory)"
        };
        format!(
            "### Next.js\n\n\
             The app is built on Next.js using {}. Respect server/client \
             component boundaries and use `npm run dev` for a local dev \
             server.\n",
            router
        )
    }
}

pub struct Express;

impl Recognizer for Express {
    fn name(&self) -> &'static str {
        "Express"
    }

    fn detect(&self, ws: &Workspace) -> bool {
        ws.package_json()
            .map(|pkg| has_dependency(&pkg, "express"))
            .unwrap_or(false)
    }

    fn section(&self, _ws: &Workspace) -> String {
        "### Express\n\n\
         The server uses Express. Register new routes alongside the existing \
         routers, keep middleware order intact, and return errors through \
         the error-handling middleware rather than ad-hoc responses.\n"
            .to_string()
    }
}
