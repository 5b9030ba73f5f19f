pub mod gemini;

pub use gemini::{GeminiGateway, GenerationSettings};
