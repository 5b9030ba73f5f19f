//! # tutor - routed math and physics tutoring agent
//!
//! Classifies a student's question with a language model, routes it to a
//! math or physics specialist (or answers it generally) and enriches the
//! prompt with deterministic tool output first.
//!
//! ## Features
//!
//! - Fail-open query classification (unknown labels and errors become `general`)
//! - Arithmetic extraction and a recursive-descent evaluator
//! - Static physics constants table with substring lookup
//! - Gemini `generateContent` gateway behind the [`LanguageModel`] trait
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tutor::{agent::{Agent, TutorAgent}, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let tutor = TutorAgent::from_config(&config)?;
//!
//!     let response = tutor.process_query("What is 2+2?").await;
//!     println!("{}", response);
//!
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod tools;
pub mod utils;

// Re-export commonly used types for convenience
pub use agent::{Agent, Conversation, MathAgent, PhysicsAgent, TutorAgent};
pub use config::{Config, GatewayConfig};
pub use error::{CalculationError, GenerationError, ToolExecutionError};
pub use models::{AgentResponse, Category, ChatMessage, Classification, ClassificationSource, LanguageModel, Sender};
pub use tools::{Tool, ToolInvocation};
