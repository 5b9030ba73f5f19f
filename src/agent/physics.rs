use super::fallback::{apology, PHYSICS_APOLOGY};
use super::{Agent, Enrichment};
use crate::models::{AgentResponse, LanguageModel, SPECIALIST_CONFIDENCE};
use crate::tools::{PhysicsConstantsTool, Tool, ToolInvocation};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Words that make the physics agent consult the constants table.
pub const CONSTANT_KEYWORDS: &[&str] = &[
    "constant",
    "speed of light",
    "gravity",
    "gravitational",
    "planck",
    "charge",
    "mass",
    "electron",
    "proton",
];

pub const PHYSICS_CONTEXT: &str = "You are a specialized Physics Agent in a tutoring system. Your expertise includes:
- Classical mechanics (Newton's laws, kinematics, dynamics)
- Thermodynamics and statistical mechanics
- Electromagnetism and electromagnetic waves
- Modern physics (quantum mechanics, relativity)
- Optics and wave physics

Provide clear explanations with physical reasoning. When relevant constants are provided, use them in your calculations and explanations.
Always explain the underlying physics principles and help students understand the concepts.";

pub fn matched_keywords(query: &str) -> Vec<&'static str> {
    let lower = query.to_lowercase();
    CONSTANT_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lower.contains(keyword))
        .collect()
}

pub struct PhysicsAgent {
    model: Arc<dyn LanguageModel>,
    constants: PhysicsConstantsTool,
}

impl PhysicsAgent {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            constants: PhysicsConstantsTool::new(),
        }
    }

    /// Appends the constants relevant to the query, looked up by the whole
    /// query and by every keyword it mentions.
    pub fn enrich(&self, query: &str) -> Enrichment {
        let keywords = matched_keywords(query);
        if keywords.is_empty() {
            return Enrichment::unchanged(query);
        }

        let mut terms = vec![query];
        terms.extend(keywords.iter().copied());
        let found = self.constants.execute(&terms);

        let invocation = ToolInvocation {
            tool_name: self.constants.name(),
            input: terms.join(" | "),
            outcome: Ok(format!("{} constant(s)", found.len())),
        };

        let prompt = if found.is_empty() {
            query.to_string()
        } else {
            let info: Vec<String> = found.iter().map(|c| c.to_string()).collect();
            format!("{}\n\nRelevant physics constants:\n{}", query, info.join("\n"))
        };

        Enrichment {
            prompt,
            invocations: vec![invocation],
        }
    }
}

#[async_trait]
impl Agent for PhysicsAgent {
    fn id(&self) -> &'static str {
        "physics"
    }

    fn name(&self) -> &'static str {
        "Physics Specialist"
    }

    fn specialization(&self) -> &'static str {
        "Classical Mechanics, Thermodynamics, Electromagnetism, Modern Physics"
    }

    async fn process_query(&self, query: &str) -> AgentResponse {
        let enrichment = self.enrich(query);
        if !enrichment.invocations.is_empty() {
            info!("🔭 Physics agent consulted the constants table");
        }

        match self.model.generate(&enrichment.prompt, Some(PHYSICS_CONTEXT)).await {
            Ok(text) => AgentResponse {
                agent_id: self.id().to_string(),
                agent_name: self.name().to_string(),
                response_text: text,
                tools_used: enrichment.tools_used(),
                confidence: SPECIALIST_CONFIDENCE,
            },
            Err(e) => apology(self, PHYSICS_APOLOGY, &e),
        }
    }
}
