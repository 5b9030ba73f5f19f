use tutor::agent::conversation::WELCOME_MESSAGE;
use tutor::agent::Conversation;
use tutor::models::{AgentResponse, Sender};

fn response(agent_id: &str, text: &str) -> AgentResponse {
    AgentResponse {
        agent_id: agent_id.to_string(),
        agent_name: "Specialist".to_string(),
        response_text: text.to_string(),
        tools_used: vec!["calculator".to_string()],
        confidence: 0.9,
    }
}

#[test]
fn test_new_conversation_starts_with_welcome() {
    let conversation = Conversation::new();
    assert_eq!(conversation.messages().len(), 1);
    assert_eq!(conversation.messages()[0].sender, Sender::Tutor);
    assert_eq!(conversation.messages()[0].content, WELCOME_MESSAGE);
    assert!(conversation.messages()[0].agent_response.is_none());
}

#[test]
fn test_messages_keep_insertion_order() {
    let mut conversation = Conversation::new();
    conversation.push_user("What is 2+2?");
    conversation.push_agent(&response("math", "4"));
    conversation.push_user("And the speed of light?");
    conversation.push_agent(&response("physics", "299792458 m/s"));
    conversation.push_agent(&response("tutor", "Anything else?"));

    let senders: Vec<Sender> = conversation.messages().iter().map(|m| m.sender).collect();
    assert_eq!(
        senders,
        vec![Sender::Tutor, Sender::User, Sender::Math, Sender::User, Sender::Physics, Sender::Tutor]
    );

    let math = &conversation.messages()[2];
    assert_eq!(math.content, "4");
    assert_eq!(math.agent_response.as_ref().unwrap().tools_used, vec!["calculator"]);

    let ids: std::collections::HashSet<_> = conversation.messages().iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), conversation.messages().len());
}

#[test]
fn test_message_serializes_for_ui() {
    let mut conversation = Conversation::new();
    let message = conversation.push_agent(&response("physics", "c")).clone();

    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["sender"], "physics");
    assert_eq!(json["agentResponse"]["agentId"], "physics");
    assert!(json["timestamp"].is_string());
}
