//! Ollama chat elaborator (`POST {base_url}/api/chat`, non-streaming).

use archon_core::config::ElaborationConfig;
use archon_core::errors::ElaborationError;
use archon_core::traits::{ElaborationRequest, IElaborationSource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompt::{build_user_prompt, SYSTEM_PROMPT};

pub struct OllamaElaborator {
    client: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f64,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
    options: ChatOptions,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: Option<ChatResponseMessage>,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: String,
}

impl OllamaElaborator {
    /// The per-call deadline is owned by the synthesizer; the client itself has none.
    pub fn new(config: &ElaborationConfig) -> Result<Self, ElaborationError> {
        let client = reqwest::Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| ElaborationError::Transport {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

#[async_trait]
impl IElaborationSource for OllamaElaborator {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn elaborate(&self, request: &ElaborationRequest) -> Result<String, ElaborationError> {
        let user = build_user_prompt(request);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user,
                },
            ],
            stream: false,
            options: ChatOptions {
                temperature: self.temperature,
            },
        };

        let transport = |e: reqwest::Error| ElaborationError::Transport {
            reason: e.to_string(),
        };
        let response = self
            .client
            .post(self.chat_url())
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ElaborationError::Transport {
                reason: format!("Ollama returned {status}: {text}"),
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(transport)?;
        let content = parsed.message.map(|m| m.content).unwrap_or_default();
        if content.trim().is_empty() {
            return Err(ElaborationError::InvalidOutput {
                reason: "Ollama returned empty content".to_string(),
            });
        }
        debug!(model = %self.model, chars = content.len(), "elaboration received");
        Ok(content)
    }
}
