use super::fallback::{apology, TUTOR_APOLOGY};
use super::{Agent, MathAgent, PhysicsAgent};
use crate::config::Config;
use crate::models::{AgentResponse, Category, LanguageModel, GENERAL_CONFIDENCE};
use crate::providers::GeminiGateway;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

pub const GENERAL_CONTEXT: &str = "You are the main Tutor Agent in an AI tutoring system. You have specialist agents for math and physics,
but this query seems to be general in nature. Provide helpful guidance and if the student needs specific
help with math or physics, suggest they ask a more specific question in those subjects.

Available specialists:
- Math Agent: Handles algebra, calculus, geometry, statistics
- Physics Agent: Handles mechanics, thermodynamics, electromagnetism, modern physics

Be encouraging and helpful in your response.";

/// Entry point: classifies each query and hands it to the matching
/// specialist, answering general questions itself.
pub struct TutorAgent {
    model: Arc<dyn LanguageModel>,
    math: MathAgent,
    physics: PhysicsAgent,
}

impl std::fmt::Debug for TutorAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TutorAgent")
            .field("model", &self.model.name())
            .finish()
    }
}

impl TutorAgent {
    /// All three agents share the same model handle.
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            math: MathAgent::new(Arc::clone(&model)),
            physics: PhysicsAgent::new(Arc::clone(&model)),
            model,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let gateway = GeminiGateway::new(config.gateway.clone())?;
        info!("✅ Gemini gateway ready (model {})", config.gateway.model);
        Ok(Self::new(Arc::new(gateway)))
    }

    pub fn specialists(&self) -> [&dyn Agent; 2] {
        [&self.math, &self.physics]
    }
}

#[async_trait]
impl Agent for TutorAgent {
    fn id(&self) -> &'static str {
        "tutor"
    }

    fn name(&self) -> &'static str {
        "AI Tutor"
    }

    fn specialization(&self) -> &'static str {
        "Query routing and general academic assistance"
    }

    async fn process_query(&self, query: &str) -> AgentResponse {
        let classification = self.model.classify(query).await;
        info!(
            "🎯 Query classified as {} ({:?})",
            classification.category, classification.source
        );

        match classification.category {
            Category::Math => self.math.process_query(query).await,
            Category::Physics => self.physics.process_query(query).await,
            Category::General => match self.model.generate(query, Some(GENERAL_CONTEXT)).await {
                Ok(text) => AgentResponse {
                    agent_id: self.id().to_string(),
                    agent_name: self.name().to_string(),
                    response_text: text,
                    tools_used: Vec::new(),
                    confidence: GENERAL_CONFIDENCE,
                },
                Err(e) => apology(self, TUTOR_APOLOGY, &e),
            },
        }
    }
}
