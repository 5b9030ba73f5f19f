use super::fallback::{apology, MATH_APOLOGY};
use super::{Agent, Enrichment};
use crate::models::{AgentResponse, LanguageModel, SPECIALIST_CONFIDENCE};
use crate::tools::{format_value, CalculatorTool, Tool, ToolInvocation};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

pub const MATH_CONTEXT: &str = "You are a specialized Math Agent in a tutoring system. Your expertise includes:
- Algebra and equation solving
- Calculus (differential and integral)
- Geometry and trigonometry
- Statistics and probability
- Mathematical problem-solving strategies

Provide clear, step-by-step explanations. If calculations were performed, acknowledge them in your response.
Always explain the mathematical concepts and reasoning behind solutions.";

pub struct MathAgent {
    model: Arc<dyn LanguageModel>,
    calculator: CalculatorTool,
}

impl MathAgent {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            calculator: CalculatorTool::new(),
        }
    }

    /// Evaluates every arithmetic expression found in the query and appends
    /// the results. Failed evaluations are listed as `[calculation error]`.
    pub fn enrich(&self, query: &str) -> Enrichment {
        let expressions = self.calculator.extract_expressions(query);
        if expressions.is_empty() {
            return Enrichment::unchanged(query);
        }

        let mut invocations = Vec::with_capacity(expressions.len());
        let mut lines = Vec::with_capacity(expressions.len());

        for expr in expressions {
            let outcome = self
                .calculator
                .execute(&expr)
                .map(|calc| format!("{} = {}", expr, format_value(calc.result)));
            match &outcome {
                Ok(line) => lines.push(line.clone()),
                Err(e) => {
                    debug!("Calculation of {:?} failed: {}", expr, e);
                    lines.push(format!("{} = [calculation error]", expr));
                }
            }
            invocations.push(ToolInvocation {
                tool_name: self.calculator.name(),
                input: expr,
                outcome,
            });
        }

        Enrichment {
            prompt: format!("{}\n\nCalculation results: {}", query, lines.join(", ")),
            invocations,
        }
    }
}

#[async_trait]
impl Agent for MathAgent {
    fn id(&self) -> &'static str {
        "math"
    }

    fn name(&self) -> &'static str {
        "Math Specialist"
    }

    fn specialization(&self) -> &'static str {
        "Mathematics, Algebra, Calculus, Geometry, Statistics"
    }

    async fn process_query(&self, query: &str) -> AgentResponse {
        let enrichment = self.enrich(query);
        info!("🧮 Math agent ran {} calculation(s)", enrichment.invocations.len());

        match self.model.generate(&enrichment.prompt, Some(MATH_CONTEXT)).await {
            Ok(text) => AgentResponse {
                agent_id: self.id().to_string(),
                agent_name: self.name().to_string(),
                response_text: text,
                tools_used: enrichment.tools_used(),
                confidence: SPECIALIST_CONFIDENCE,
            },
            Err(e) => apology(self, MATH_APOLOGY, &e),
        }
    }
}
