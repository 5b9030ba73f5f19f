//! Error types shared by the tools, the model gateway and the agents.

use thiserror::Error;

/// Failure while parsing or evaluating an arithmetic expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected '{found}' at position {position}")]
    UnexpectedToken { found: char, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("expression nested deeper than {0} levels")]
    TooDeep(usize),

    #[error("result is not a finite number")]
    NonFinite,
}

/// A single tool call failed. Agents render these inline and keep going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolExecutionError {
    #[error("calculator error: {0}")]
    Calculation(#[from] CalculationError),
}

/// The language model endpoint could not produce an answer.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("model API error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("model request failed: {0}")]
    Transport(String),

    /// The endpoint answered 2xx but the body was not JSON.
    #[error("invalid model response: {0}")]
    Decode(String),

    #[error("model API key not configured")]
    MissingCredential,
}

/// Drops the request URL from the message, since it carries the API key.
impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_decode() {
            GenerationError::Decode(err.to_string())
        } else {
            GenerationError::Transport(err.to_string())
        }
    }
}
