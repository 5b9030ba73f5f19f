use crate::config::GatewayConfig;
use crate::error::GenerationError;
use crate::models::{compose_prompt, LanguageModel, EMPTY_GENERATION_FALLBACK};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Sampling parameters sent with every request. Not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

pub struct GeminiGateway {
    config: GatewayConfig,
    api_key: String,
    settings: GenerationSettings,
    client: Client,
}

impl GeminiGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(GenerationError::MissingCredential)?;

        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            config,
            api_key,
            settings: GenerationSettings::default(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn payload(&self, text: &str) -> Value {
        json!({
            "contents": [{
                "parts": [{
                    "text": text
                }]
            }],
            "generationConfig": {
                "temperature": self.settings.temperature,
                "topK": self.settings.top_k,
                "topP": self.settings.top_p,
                "maxOutputTokens": self.settings.max_output_tokens
            }
        })
    }
}

/// First candidate's first text part, if the model produced one.
fn candidate_text(response: &Value) -> Option<&str> {
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .filter(|text| !text.is_empty())
}

#[async_trait]
impl LanguageModel for GeminiGateway {
    async fn generate(&self, prompt: &str, context: Option<&str>) -> Result<String, GenerationError> {
        let text = compose_prompt(prompt, context);
        let start = Instant::now();

        debug!("Sending {} chars to Gemini model {}", text.len(), self.config.model);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&self.payload(&text))
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!("Gemini request failed: {}", e);
                GenerationError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            error!("Gemini API error {}: {}", status, details);
            return Err(GenerationError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GenerationError::Decode(e.without_url().to_string()))?;

        debug!("Gemini answered in {}ms", start.elapsed().as_millis());

        match candidate_text(&body) {
            Some(text) => Ok(text.to_string()),
            None => {
                warn!("Gemini returned no candidate text (likely a safety block)");
                Ok(EMPTY_GENERATION_FALLBACK.to_string())
            }
        }
    }

    fn name(&self) -> &str {
        "Gemini"
    }
}
