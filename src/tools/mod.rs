pub mod calculator;
pub mod physics_constants;

use crate::error::ToolExecutionError;
use serde::Serialize;

/// Metadata shared by every deterministic tool an agent can run.
pub trait Tool: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
}

/// One tool call made while enriching a single query.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub tool_name: &'static str,
    pub input: String,
    pub outcome: Result<String, ToolExecutionError>,
}

impl ToolInvocation {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Description of a tool as shown to users.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
}

impl<T: Tool + ?Sized> From<&T> for ToolInfo {
    fn from(tool: &T) -> Self {
        Self {
            name: tool.name(),
            description: tool.description(),
        }
    }
}

/// Plain notation for ordinary magnitudes, scientific notation for very
/// small or very large ones (`299792458`, `6.6743e-11`, `1e-8`).
pub fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}

pub use calculator::{CalculatorTool, Calculation};
pub use physics_constants::{PhysicsConstant, PhysicsConstantsTool};
