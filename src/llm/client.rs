//! Blocking chat-completions client

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

/// Request timeout. Document polish is a single medium-sized completion;
/// anything slower than this is better spent falling back to the draft.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

const SYSTEM_PROMPT: &str = "\
You are a technical writer improving an AGENTS.md briefing file that tells \
AI coding agents how to work in a repository. Rewrite the draft for clarity \
and concision. Keep every heading, every command, and the generation footer \
exactly as given. Do not invent tools, commands, or conventions that are \
not in the draft. Reply with the full markdown document and nothing else.";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Malformed API response: {0}")]
    Malformed(String),
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Resolves the API key: `AGENTBOOST_API_KEY`, then `OPENAI_API_KEY`, then
/// the config file. `None` means enhancement is skipped.
pub fn api_key(config: &Config) -> Option<String> {
    std::env::var("AGENTBOOST_API_KEY")
        .or_else(|_| std::env::var("OPENAI_API_KEY"))
        .ok()
        .filter(|key| !key.is_empty())
        .or_else(|| config.llm.api_key.clone())
}

/// Blocking client for an OpenAI-compatible chat-completions endpoint.
pub struct LlmClient {
    http: reqwest::blocking::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(api_key: String, api_base: &str, model: &str) -> Result<Self, LlmError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
        })
    }

    /// Sends the drafted document for polish and returns the rewritten
    /// markdown. The caller decides what to do on failure; this never
    /// panics and never writes anywhere.
    pub fn enhance(&self, document: &str, project_name: &str) -> Result<String, LlmError> {
        let user_prompt = format!(
            "Project: {}\n\nDraft AGENTS.md:\n\n{}",
            project_name, document
        );
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: 0.2,
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: response.text().unwrap_or_default(),
            });
        }

        let body: ChatResponse = response
            .json()
            .map_err(|e| LlmError::Malformed(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::Malformed("response contained no choices".to_string()))?;

        if content.trim().is_empty() {
            return Err(LlmError::Malformed("response content was empty".to_string()));
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_prefers_config_when_env_is_unset() {
        // Environment lookups are process-global, so only the config-file
        // path is exercised here; precedence is covered in the CLI tests.
        let mut config = Config::default();
        config.llm.api_key = Some("from-file".to_string());

        if std::env::var("AGENTBOOST_API_KEY").is_err()
            && std::env::var("OPENAI_API_KEY").is_err()
        {
            assert_eq!(api_key(&config), Some("from-file".to_string()));
        }
    }

    #[test]
    fn client_normalizes_the_api_base() {
        let client =
            LlmClient::new("key".to_string(), "https://api.example.com/v1/", "m").unwrap();
        assert_eq!(client.api_base, "https://api.example.com/v1");
    }

    #[test]
    fn chat_request_serializes_in_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![Message {
                role: "user",
                content: "hi",
            }],
            temperature: 0.2,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn chat_response_parses_wire_shape() {
        let body = r##"{
            "choices": [{"message": {"role": "assistant", "content": "# Doc"}}]
        }"##;

        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "# Doc");
    }
}
