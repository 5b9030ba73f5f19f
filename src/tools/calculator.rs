use super::Tool;
use crate::error::{CalculationError, ToolExecutionError};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Deepest parenthesis/unary nesting the parser will follow.
pub const MAX_DEPTH: usize = 128;

static BINARY_OPERATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]+(?:\.[0-9]+)?\s*[+\-*/]\s*[0-9]+(?:\.[0-9]+)?").expect("valid regex")
});
static CALCULATE_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)calculate\s+([0-9+\-*/().\s]+)").expect("valid regex"));
static WHAT_IS_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)what\s+is\s+([0-9+\-*/().\s]+)").expect("valid regex"));

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub result: f64,
    /// The expression exactly as it was handed in.
    pub expression: String,
}

/// Finds arithmetic candidates in free text.
///
/// Three scans run independently and their hits are concatenated: bare
/// `a op b` operations, the run after "calculate", and the run after
/// "what is". The same expression can therefore appear more than once.
pub fn extract_expressions(text: &str) -> Vec<String> {
    let mut expressions: Vec<String> = BINARY_OPERATION
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    // Captures are kept verbatim, whitespace included; evaluate() rejects junk.
    for pattern in [&*CALCULATE_PHRASE, &*WHAT_IS_PHRASE] {
        for caps in pattern.captures_iter(text) {
            if let Some(run) = caps.get(1) {
                expressions.push(run.as_str().to_string());
            }
        }
    }

    expressions
}

/// Evaluates a flat arithmetic expression with the usual precedence.
pub fn evaluate(expression: &str) -> Result<Calculation, CalculationError> {
    let sanitized: String = expression
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.'))
        .collect();

    if sanitized.is_empty() {
        return Err(CalculationError::Empty);
    }

    let tokens = tokenize(&sanitized)?;
    let mut parser = Parser { tokens: &tokens, pos: 0, depth: 0 };
    let result = parser.expression()?;

    if let Some(&(token, position)) = tokens.get(parser.pos) {
        return Err(match token {
            Token::Close => CalculationError::UnbalancedParentheses,
            other => CalculationError::UnexpectedToken { found: other.symbol(), position },
        });
    }

    if !result.is_finite() {
        return Err(CalculationError::NonFinite);
    }

    Ok(Calculation {
        result,
        expression: expression.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Open,
    Close,
}

impl Token {
    fn symbol(self) -> char {
        match self {
            Token::Number(_) => '0',
            Token::Plus => '+',
            Token::Minus => '-',
            Token::Star => '*',
            Token::Slash => '/',
            Token::Open => '(',
            Token::Close => ')',
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<(Token, usize)>, CalculationError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let token = match bytes[i] {
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Star,
            b'/' => Token::Slash,
            b'(' => Token::Open,
            b')' => Token::Close,
            b'0'..=b'9' | b'.' => {
                let start = i;
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                let literal = &input[start..i];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| CalculationError::InvalidNumber(literal.to_string()))?;
                tokens.push((Token::Number(value), start));
                continue;
            }
            other => {
                return Err(CalculationError::UnexpectedToken {
                    found: other as char,
                    position: i,
                })
            }
        };
        tokens.push((token, i));
        i += 1;
    }

    Ok(tokens)
}

// expression := term (('+' | '-') term)*
// term       := unary (('*' | '/') unary)*
// unary      := ('+' | '-') unary | primary
// primary    := number | '(' expression ')'
struct Parser<'a> {
    tokens: &'a [(Token, usize)],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).map(|&(token, _)| token)
    }

    fn advance(&mut self) -> Option<(Token, usize)> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> Result<(), CalculationError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalculationError::TooDeep(MAX_DEPTH));
        }
        Ok(())
    }

    fn expression(&mut self) -> Result<f64, CalculationError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, CalculationError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    value /= self.unary()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, CalculationError> {
        match self.peek() {
            Some(Token::Plus) | Some(Token::Minus) => {
                let negate = self.peek() == Some(Token::Minus);
                self.pos += 1;
                self.descend()?;
                let value = self.unary()?;
                self.depth -= 1;
                Ok(if negate { -value } else { value })
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, CalculationError> {
        match self.advance() {
            Some((Token::Number(value), _)) => Ok(value),
            Some((Token::Open, _)) => {
                self.descend()?;
                let value = self.expression()?;
                self.depth -= 1;
                match self.advance() {
                    Some((Token::Close, _)) => Ok(value),
                    Some((token, position)) => Err(CalculationError::UnexpectedToken {
                        found: token.symbol(),
                        position,
                    }),
                    None => Err(CalculationError::UnbalancedParentheses),
                }
            }
            Some((Token::Close, _)) => Err(CalculationError::UnbalancedParentheses),
            Some((token, position)) => Err(CalculationError::UnexpectedToken {
                found: token.symbol(),
                position,
            }),
            None => Err(CalculationError::UnexpectedEnd),
        }
    }
}

pub struct CalculatorTool;

impl CalculatorTool {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_expressions(&self, text: &str) -> Vec<String> {
        extract_expressions(text)
    }

    pub fn execute(&self, expression: &str) -> Result<Calculation, ToolExecutionError> {
        debug!("Evaluating expression: {}", expression);
        Ok(evaluate(expression)?)
    }
}

impl Default for CalculatorTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CalculatorTool {
    fn name(&self) -> &'static str {
        "calculator"
    }

    fn description(&self) -> &'static str {
        "Performs basic arithmetic operations: addition, subtraction, multiplication, division"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizer_records_positions() {
        let tokens = tokenize("12+(3)").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|&(_, p)| p).collect();
        assert_eq!(positions, vec![0, 2, 3, 4, 5]);
    }

    #[test]
    fn rejects_malformed_literal() {
        assert_eq!(
            evaluate("1.2.3"),
            Err(CalculationError::InvalidNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn nesting_is_bounded() {
        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(evaluate(&deep), Err(CalculationError::TooDeep(MAX_DEPTH)));
    }
}
