//! Arithmetic problems and the operand range they are drawn from

use crate::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest operand magnitude accepted in an [`OperandRange`].
///
/// Keeps the derived dividend of a division problem (`quotient * divisor`)
/// inside `i64`.
pub const MAX_OPERAND_MAGNITUDE: i64 = i32::MAX as i64;

// =============================================================================
// Operator
// =============================================================================

/// One of the four basic arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    #[default]
    Add,
    /// Subtraction (-), never produces a negative result
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷), always exact
    Divide,
}

impl Operator {
    /// All operators in sidebar order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol printed between the operands
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Human readable operator name
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "Addition",
            Operator::Subtract => "Subtraction",
            Operator::Multiply => "Multiplication",
            Operator::Divide => "Division",
        }
    }

    /// Worksheet heading for a page of problems with this operator
    pub fn title(&self) -> String {
        format!("{} Practice", self.name())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" | "addition" => Ok(Operator::Add),
            "-" | "subtract" | "subtraction" => Ok(Operator::Subtract),
            "×" | "x" | "*" | "multiply" | "multiplication" => Ok(Operator::Multiply),
            "÷" | "/" | "divide" | "division" => Ok(Operator::Divide),
            other => Err(ModelError::Configuration(format!(
                "Unknown operator: {other:?}"
            ))),
        }
    }
}

// =============================================================================
// Problem
// =============================================================================

/// A single arithmetic problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    pub first_operand: i64,
    pub second_operand: i64,
    pub operator: Operator,
}

impl Problem {
    pub fn new(first_operand: i64, second_operand: i64, operator: Operator) -> Self {
        Self {
            first_operand,
            second_operand,
            operator,
        }
    }

    /// Check the operator-specific invariants.
    ///
    /// Subtraction requires `first >= second`; division requires a divisor of
    /// at least 1 that divides the dividend exactly.
    pub fn is_well_formed(&self) -> bool {
        match self.operator {
            Operator::Add | Operator::Multiply => true,
            Operator::Subtract => self.first_operand >= self.second_operand,
            Operator::Divide => {
                self.second_operand >= 1 && self.first_operand % self.second_operand == 0
            }
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.first_operand,
            self.operator.symbol(),
            self.second_operand
        )
    }
}

// =============================================================================
// Operand Range
// =============================================================================

/// Inclusive integer bounds for randomly drawn operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperandRange {
    pub min: i64,
    pub max: i64,
}

impl OperandRange {
    /// Create a validated range
    pub fn new(min: i64, max: i64) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Reject `min > max` and bounds whose products could overflow
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(ModelError::Configuration(format!(
                "Operand range minimum {} exceeds maximum {}",
                self.min, self.max
            )));
        }
        let limit = MAX_OPERAND_MAGNITUDE.unsigned_abs();
        if self.min.unsigned_abs() > limit || self.max.unsigned_abs() > limit {
            return Err(ModelError::Configuration(format!(
                "Operand range {}..={} exceeds the supported magnitude {}",
                self.min, self.max, MAX_OPERAND_MAGNITUDE
            )));
        }
        Ok(())
    }

    /// Check whether a value lies inside the range
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for OperandRange {
    fn default() -> Self {
        Self { min: 1, max: 9 }
    }
}
