//! Docker recognizer

use super::Recognizer;
use crate::workspace::Workspace;

pub struct Docker;

impl Recognizer for Docker {
    fn name(&self) -> &'static str {
        "Docker"
    }

    fn detect(&self, ws: &Workspace) -> bool {
        ["Dockerfile", "docker-compose.yml", "docker-compose.yaml", "compose.yaml"]
            .iter()
            .any(|f| ws.exists(f))
    }

    fn section(&self, ws: &Workspace) -> String {
        let compose = ["docker-compose.yml", "docker-compose.yaml", "compose.yaml"]
            .iter()
            .any(|f| ws.exists(f));
        let run_note = if compose {
            "Bring the stack up with `docker compose up` when services are \
             needed for local testing."
        } else {
            "Build the image with `docker build .` to verify container \
             changes."
        };
        format!(
            "### Docker\n\n\
             The project ships container definitions. {} Keep image layers \
             cacheable: dependency installation before source copy.\n",
            run_note
        )
    }
}
