//! Basic arithmetic: two operands and one of four operators

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, DomainError};

/// The four operators offered by the basic calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl BasicOp {
    /// All operators in selector order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Applies the operator
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        calculate(a, b, self)
    }
}

impl fmt::Display for BasicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BasicOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Ok(Self::Add),
            "-" | "−" | "sub" | "subtract" | "minus" => Ok(Self::Subtract),
            "×" | "*" | "x" | "mul" | "multiply" | "times" => Ok(Self::Multiply),
            "÷" | "/" | "div" | "divide" => Ok(Self::Divide),
            other => Err(CalcError::Parse(format!("unknown operator '{other}'"))),
        }
    }
}

/// Performs a basic operation on two operands
///
/// A zero divisor (either sign) is a domain error, never ±inf or NaN.
pub fn calculate(a: f64, b: f64, op: BasicOp) -> CalcResult<f64> {
    match op {
        BasicOp::Add => Ok(a + b),
        BasicOp::Subtract => Ok(a - b),
        BasicOp::Multiply => Ok(a * b),
        BasicOp::Divide => {
            if b == 0.0 {
                return Err(DomainError::DivisionByZero.into());
            }
            Ok(a / b)
        }
    }
}
