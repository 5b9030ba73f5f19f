use crate::error::GenerationError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

/// Confidence reported by a specialist that produced an answer.
pub const SPECIALIST_CONFIDENCE: f32 = 0.9;
/// Confidence reported when the tutor answers a general query itself.
pub const GENERAL_CONFIDENCE: f32 = 0.8;
/// Confidence reported alongside an apology.
pub const FAILURE_CONFIDENCE: f32 = 0.1;

/// Returned by a gateway when the endpoint succeeded but produced no text.
pub const EMPTY_GENERATION_FALLBACK: &str = "Sorry, I could not generate a response.";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub agent_id: String,
    pub agent_name: String,
    pub response_text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools_used: Vec<String>,
    pub confidence: f32,
}

impl fmt::Display for AgentResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.agent_name)?;
        writeln!(f, "{}", self.response_text)?;
        if !self.tools_used.is_empty() {
            writeln!(f, "🔧 Tools used: {}", self.tools_used.join(", "))?;
        }
        write!(f, "Confidence: {:.0}%", self.confidence * 100.0)
    }
}

/// Subject area a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Math,
    Physics,
    General,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Math => write!(f, "math"),
            Category::Physics => write!(f, "physics"),
            Category::General => write!(f, "general"),
        }
    }
}

/// Why a classification ended up with its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationSource {
    /// The model answered with a known label.
    Model,
    /// The model answered something that is not a label; treated as general.
    Unrecognized(String),
    /// The model could not be reached; treated as general.
    TransportFailure(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub source: ClassificationSource,
}

impl Classification {
    /// Maps raw model output onto a category. Only `math` and `physics` route
    /// to a specialist; anything else falls through to general.
    pub fn from_model_output(output: &str) -> Self {
        let label = output.trim().to_lowercase();
        match label.as_str() {
            "math" => Self { category: Category::Math, source: ClassificationSource::Model },
            "physics" => Self { category: Category::Physics, source: ClassificationSource::Model },
            "general" => Self { category: Category::General, source: ClassificationSource::Model },
            _ => Self {
                category: Category::General,
                source: ClassificationSource::Unrecognized(label),
            },
        }
    }

    pub fn transport_failure(error: &GenerationError) -> Self {
        Self {
            category: Category::General,
            source: ClassificationSource::TransportFailure(error.to_string()),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source != ClassificationSource::Model
    }
}

pub fn classification_prompt(query: &str) -> String {
    format!(
        "Classify the following student query into one of these categories: math, physics, or general.\n\
         Respond with only the category name in lowercase.\n\
         \n\
         Query: \"{}\"\n\
         \n\
         Classification:",
        query
    )
}

/// Joins an instruction context and a user prompt into the text sent to the model.
pub fn compose_prompt(prompt: &str, context: Option<&str>) -> String {
    match context {
        Some(context) => format!("{}\n\nUser query: {}", context, prompt),
        None => prompt.to_string(),
    }
}

/// A remote text-generation endpoint.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generates text for `prompt`, prefixed with `context` when given.
    async fn generate(&self, prompt: &str, context: Option<&str>) -> Result<String, GenerationError>;

    fn name(&self) -> &str;

    /// Single-label classification. Never fails: unknown labels and transport
    /// errors both land on [`Category::General`].
    async fn classify(&self, query: &str) -> Classification {
        match self.generate(&classification_prompt(query), None).await {
            Ok(output) => {
                let classification = Classification::from_model_output(&output);
                if let ClassificationSource::Unrecognized(label) = &classification.source {
                    debug!("Unrecognized classification label {:?}, using general", label);
                }
                classification
            }
            Err(e) => {
                warn!("Classification failed on {}: {}", self.name(), e);
                Classification::transport_failure(&e)
            }
        }
    }
}

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Tutor,
    Math,
    Physics,
}

impl Sender {
    pub fn from_agent_id(agent_id: &str) -> Self {
        match agent_id {
            "math" => Sender::Math,
            "physics" => Sender::Physics,
            _ => Sender::Tutor,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_response: Option<AgentResponse>,
}
