//! Python recognizer

use super::Recognizer;
use crate::workspace::Workspace;

pub struct Python;

impl Recognizer for Python {
    fn name(&self) -> &'static str {
        "Python"
    }

    fn detect(&self, ws: &Workspace) -> bool {
        ["pyproject.toml", "requirements.txt", "setup.py"]
            .iter()
            .any(|f| ws.exists(f))
    }

    fn section(&self, ws: &Workspace) -> String {
        let install = if ws.exists("pyproject.toml") {
            "`pip install -e .` (project metadata lives in `pyproject.toml`)"
        } else {
            "`pip install -r requirements.txt`"
        };
        format!(
            "### Python\n\n\
             This is a Python project. Create a virtual environment and \
             install dependencies with {}. Run the test suite with `pytest` \
             before finishing a change.\n",
            install
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn detects_any_python_manifest() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();
        assert!(!Python.detect(&ws));

        ws.write("requirements.txt", "flask\n").unwrap();
        assert!(Python.detect(&ws));
        assert!(Python.section(&ws).contains("requirements.txt"));
    }

    #[test]
    fn prefers_pyproject_install_instructions() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();
        ws.write("pyproject.toml", "[project]\nname = \"tools\"\n")
            .unwrap();

        assert!(Python.section(&ws).contains("pyproject.toml"));
    }
}
