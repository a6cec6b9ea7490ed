//! Travel-tips client for OpenAI-compatible chat completions
//!
//! Sends a single prompt built from the trip parameters and returns the
//! completion text. The API key arrives through [`TipsConfig`] and is held
//! by the client instance; there is no ambient credential state. One
//! best-effort attempt per submission; on any failure the planner shows a
//! fixed fallback message instead.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::config::TipsConfig;
use crate::models::TripRequest;
use crate::{Result, WanderMateError};

/// Produces a free-text travel-tips paragraph for a trip
#[async_trait]
pub trait TipsService: Send + Sync {
    /// Generate travel tips for the given trip
    async fn travel_tips(&self, request: &TripRequest) -> Result<String>;
}

/// Tips client backed by an OpenAI-compatible chat-completions endpoint
pub struct TipsClient {
    client: Client,
    config: TipsConfig,
}

impl TipsClient {
    /// Create a new tips client. The API key is taken from `config`,
    /// explicitly passed by the caller.
    pub fn new(config: TipsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("WanderMate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WanderMateError::tips(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Prompt sent to the completion endpoint
    fn build_prompt(request: &TripRequest) -> String {
        format!(
            "Give 3 practical travel tips for a {} trip from {} to {}.",
            request.trip_type, request.origin, request.destination
        )
    }
}

#[async_trait]
impl TipsService for TipsClient {
    #[instrument(skip(self, request), fields(destination = %request.destination))]
    async fn travel_tips(&self, request: &TripRequest) -> Result<String> {
        let prompt = Self::build_prompt(request);
        debug!("Tips prompt: {}", prompt);

        let payload = chat::CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![chat::Message {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| WanderMateError::tips(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(WanderMateError::tips(format!(
                "Completion API returned status {}",
                response.status()
            )));
        }

        let body: chat::CompletionResponse = response
            .json()
            .await
            .map_err(|e| WanderMateError::tips(format!("Invalid completion response: {e}")))?;

        let tips = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| WanderMateError::tips("Completion response contained no choices"))?;

        info!("Generated {} characters of travel tips", tips.len());
        Ok(tips)
    }
}

/// Chat-completions request and response structures
mod chat {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    pub struct CompletionRequest {
        pub model: String,
        pub messages: Vec<Message>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Message {
        pub role: String,
        pub content: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct CompletionResponse {
        pub choices: Vec<Choice>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Choice {
        pub message: Message,
    }
}
