use super::{format_value, Tool};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicsConstant {
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: f64,
    pub unit: &'static str,
    pub description: &'static str,
}

impl PhysicsConstant {
    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.symbol.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

impl fmt::Display for PhysicsConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} {} - {}",
            self.name,
            self.symbol,
            format_value(self.value),
            self.unit,
            self.description
        )
    }
}

pub static PHYSICS_CONSTANTS: &[PhysicsConstant] = &[
    PhysicsConstant {
        name: "Speed of light in vacuum",
        symbol: "c",
        value: 299_792_458.0,
        unit: "m/s",
        description: "The speed of electromagnetic radiation in a vacuum",
    },
    PhysicsConstant {
        name: "Gravitational constant",
        symbol: "G",
        value: 6.67430e-11,
        unit: "m³/kg⋅s²",
        description: "The proportionality constant in Newton's law of universal gravitation",
    },
    PhysicsConstant {
        name: "Planck constant",
        symbol: "h",
        value: 6.62607015e-34,
        unit: "J⋅Hz⁻¹",
        description: "Fundamental constant in quantum mechanics",
    },
    PhysicsConstant {
        name: "Elementary charge",
        symbol: "e",
        value: 1.602176634e-19,
        unit: "C",
        description: "The electric charge carried by a single proton",
    },
    PhysicsConstant {
        name: "Electron mass",
        symbol: "mₑ",
        value: 9.1093837015e-31,
        unit: "kg",
        description: "The rest mass of an electron",
    },
    PhysicsConstant {
        name: "Proton mass",
        symbol: "mₚ",
        value: 1.67262192369e-27,
        unit: "kg",
        description: "The rest mass of a proton",
    },
];

/// Every constant whose name, symbol or description contains `query`,
/// compared case-insensitively, in table order.
pub fn lookup(query: &str) -> Vec<&'static PhysicsConstant> {
    let needle = query.to_lowercase();
    PHYSICS_CONSTANTS.iter().filter(|c| c.matches(&needle)).collect()
}

pub fn all_constants() -> &'static [PhysicsConstant] {
    PHYSICS_CONSTANTS
}

pub struct PhysicsConstantsTool;

impl PhysicsConstantsTool {
    pub fn new() -> Self {
        Self
    }

    /// Looks up each term and merges the hits, keeping table order and
    /// listing every constant once.
    pub fn execute(&self, terms: &[&str]) -> Vec<&'static PhysicsConstant> {
        let hits: Vec<Vec<&'static PhysicsConstant>> = terms.iter().map(|t| lookup(t)).collect();
        PHYSICS_CONSTANTS
            .iter()
            .filter(|c| hits.iter().flatten().any(|hit| std::ptr::eq(*hit, *c)))
            .collect()
    }
}

impl Default for PhysicsConstantsTool {
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for PhysicsConstantsTool {
    fn name(&self) -> &'static str {
        "physics_constants"
    }

    fn description(&self) -> &'static str {
        "Looks up fundamental physics constants and their values"
    }
}
