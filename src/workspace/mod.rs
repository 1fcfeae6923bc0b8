//! # Workspace Layer
//!
//! Filesystem access for the repository under analysis.
//!
//! All reads and writes go through [`Workspace`], which anchors every path
//! to the repository root. Listing skips vendored and generated directories
//! (`.git`, `node_modules`, `target`, ...) and is capped, so detection stays
//! fast even in large checkouts. Writes are atomic (temp file + rename) so a
//! crashed run never leaves a half-written `AGENTS.md`.
//!
//! ## Key Types
//!
//! - [`Workspace`] - Root-anchored file listing, reading, and writing
//! - [`WorkspaceError`] - Filesystem failures with the offending path

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Directories that never contain project sources worth analyzing.
const SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "target",
    "dist",
    "build",
    ".venv",
    "__pycache__",
    ".next",
    "vendor",
];

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A repository root plus path-safe file operations.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Opens a workspace rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, WorkspaceError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(WorkspaceError::NotADirectory(root.to_path_buf()));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// Returns the workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the directory name of the root, used as the default project
    /// name. Falls back to `"project"` for roots like `/` or `.`.
    pub fn name(&self) -> String {
        self.root
            .canonicalize()
            .ok()
            .as_deref()
            .unwrap_or(&self.root)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "project".to_string())
    }

    /// Returns true when `rel` exists under the root.
    pub fn exists(&self, rel: impl AsRef<Path>) -> bool {
        self.root.join(rel).exists()
    }

    /// Reads a file under the root as UTF-8 text.
    pub fn read_to_string(&self, rel: impl AsRef<Path>) -> Result<String, WorkspaceError> {
        let path = self.root.join(rel);
        fs::read_to_string(&path).map_err(|source| WorkspaceError::Read { path, source })
    }

    /// Writes a file under the root, creating parent directories as needed.
    /// The write is atomic: content lands in a temp file that is renamed
    /// into place.
    pub fn write(&self, rel: impl AsRef<Path>, contents: &str) -> Result<(), WorkspaceError> {
        let path = self.root.join(rel);
        let write_err = |source| WorkspaceError::Write {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, contents).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)
    }

    /// Lists files under the root, relative paths in sorted order, up to
    /// `max` entries. Hidden and vendored directories are skipped.
    pub fn list_files(&self, max: usize) -> Vec<PathBuf> {
        let mut files = Vec::new();
        self.walk(&self.root, max, &mut files);
        files.sort();
        files
    }

    fn walk(&self, dir: &Path, max: usize, files: &mut Vec<PathBuf>) {
        if files.len() >= max {
            return;
        }
        // Unreadable directories contribute nothing; detection treats
        // missing data as "no match" rather than an error.
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };

        let mut entries: Vec<_> = entries.flatten().collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            if files.len() >= max {
                return;
            }
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();

            if path.is_dir() {
                if name.starts_with('.') || SKIP_DIRS.contains(&name.as_ref()) {
                    continue;
                }
                self.walk(&path, max, files);
            } else if let Ok(rel) = path.strip_prefix(&self.root) {
                files.push(rel.to_path_buf());
            }
        }
    }

    /// Parses `package.json` at the root, if present and valid JSON.
    pub fn package_json(&self) -> Option<serde_json::Value> {
        let text = self.read_to_string("package.json").ok()?;
        serde_json::from_str(&text).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn open_rejects_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        assert!(matches!(
            Workspace::open(&missing),
            Err(WorkspaceError::NotADirectory(_))
        ));
    }

    #[test]
    fn name_is_the_root_directory_name() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("storefront");
        fs::create_dir(&project).unwrap();

        let ws = Workspace::open(&project).unwrap();
        assert_eq!(ws.name(), "storefront");
    }

    #[test]
    fn read_and_write_roundtrip() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        ws.write("docs/AGENTS.md", "# Hello\n").unwrap();
        assert!(ws.exists("docs/AGENTS.md"));
        assert_eq!(ws.read_to_string("docs/AGENTS.md").unwrap(), "# Hello\n");
    }

    #[test]
    fn write_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        ws.write("AGENTS.md", "content").unwrap();
        assert!(!ws.exists("AGENTS.tmp"));
    }

    #[test]
    fn read_missing_file_reports_the_path() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        let err = ws.read_to_string("missing.txt").unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn list_files_skips_vendored_directories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "src/index.ts");
        touch(dir.path(), "package.json");
        touch(dir.path(), "node_modules/react/index.js");
        touch(dir.path(), ".git/HEAD");
        touch(dir.path(), "target/debug/app");

        let ws = Workspace::open(dir.path()).unwrap();
        let files = ws.list_files(100);

        assert_eq!(
            files,
            vec![PathBuf::from("package.json"), PathBuf::from("src/index.ts")]
        );
    }

    #[test]
    fn list_files_respects_the_cap() {
        let dir = TempDir::new().unwrap();
        for i in 0..10 {
            touch(dir.path(), &format!("file{i}.txt"));
        }

        let ws = Workspace::open(dir.path()).unwrap();
        assert_eq!(ws.list_files(3).len(), 3);
    }

    #[test]
    fn package_json_parses_when_valid() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        assert!(ws.package_json().is_none());

        ws.write("package.json", r#"{"name": "web"}"#).unwrap();
        let pkg = ws.package_json().unwrap();
        assert_eq!(pkg["name"], "web");

        ws.write("package.json", "not json").unwrap();
        assert!(ws.package_json().is_none());
    }
}
