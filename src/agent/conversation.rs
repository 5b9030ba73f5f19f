use crate::models::{AgentResponse, ChatMessage, Sender};
use chrono::Utc;
use uuid::Uuid;

pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI Tutor. I can help you with math and physics questions. I have specialist agents for each subject who can provide detailed explanations and use tools when needed. What would you like to learn today?";

/// A single chat thread, kept in memory for the length of a session.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new() -> Self {
        let mut conversation = Self { messages: Vec::new() };
        conversation.push(WELCOME_MESSAGE.to_string(), Sender::Tutor, None);
        conversation
    }

    pub fn push_user(&mut self, content: &str) -> &ChatMessage {
        self.push(content.to_string(), Sender::User, None)
    }

    pub fn push_agent(&mut self, response: &AgentResponse) -> &ChatMessage {
        self.push(
            response.response_text.clone(),
            Sender::from_agent_id(&response.agent_id),
            Some(response.clone()),
        )
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, content: String, sender: Sender, agent_response: Option<AgentResponse>) -> &ChatMessage {
        self.messages.push(ChatMessage {
            id: Uuid::new_v4(),
            content,
            sender,
            timestamp: Utc::now(),
            agent_response,
        });
        &self.messages[self.messages.len() - 1]
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
