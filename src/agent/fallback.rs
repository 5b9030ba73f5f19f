use super::Agent;
use crate::models::{AgentResponse, FAILURE_CONFIDENCE};
use tracing::error;

pub const MATH_APOLOGY: &str = "I apologize, but I encountered an error while processing your math question. Please try rephrasing your question.";
pub const PHYSICS_APOLOGY: &str = "I apologize, but I encountered an error while processing your physics question. Please try rephrasing your question.";
pub const TUTOR_APOLOGY: &str = "I apologize, but I encountered an error while processing your question. Please try asking again.";

/// Builds the low-confidence answer an agent returns instead of an error.
pub fn apology<A: Agent + ?Sized>(agent: &A, text: &str, cause: &dyn std::error::Error) -> AgentResponse {
    error!("{} failed: {}", agent.name(), cause);
    AgentResponse {
        agent_id: agent.id().to_string(),
        agent_name: agent.name().to_string(),
        response_text: text.to_string(),
        tools_used: Vec::new(),
        confidence: FAILURE_CONFIDENCE,
    }
}
