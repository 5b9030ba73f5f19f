pub mod conversation;
pub mod fallback;
pub mod math;
pub mod physics;
pub mod tutor;

use crate::models::AgentResponse;
use crate::tools::ToolInvocation;
use async_trait::async_trait;

/// A responder that turns a query into a structured answer.
///
/// `process_query` has no error path: failures come back as a
/// low-confidence apology.
#[async_trait]
pub trait Agent: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn specialization(&self) -> &'static str;
    async fn process_query(&self, query: &str) -> AgentResponse;
}

/// A query after tool output has been appended to it.
#[derive(Debug, Clone)]
pub struct Enrichment {
    pub prompt: String,
    pub invocations: Vec<ToolInvocation>,
}

impl Enrichment {
    pub fn unchanged(query: &str) -> Self {
        Self {
            prompt: query.to_string(),
            invocations: Vec::new(),
        }
    }

    /// Distinct tool names in the order they were first called.
    pub fn tools_used(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for invocation in &self.invocations {
            if !names.iter().any(|n| n == invocation.tool_name) {
                names.push(invocation.tool_name.to_string());
            }
        }
        names
    }
}

pub use conversation::Conversation;
pub use math::MathAgent;
pub use physics::PhysicsAgent;
pub use tutor::TutorAgent;
