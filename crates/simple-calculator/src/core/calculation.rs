//! A single calculator request and its successful outcome

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{basic, ensure_finite, power, scientific, BasicOp, CalcResult, ScientificFn};

/// One request, as submitted by any of the calculator's forms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Calculation {
    /// Two numbers and an operator
    Basic {
        /// First number
        lhs: f64,
        /// Operator
        op: BasicOp,
        /// Second number
        rhs: f64,
    },
    /// One number and a function
    Scientific {
        /// Function to apply
        function: ScientificFn,
        /// Argument (degrees for trigonometric functions)
        value: f64,
    },
    /// Base raised to an exponent
    Power {
        /// Base
        base: f64,
        /// Exponent
        exponent: f64,
    },
}

impl Calculation {
    /// Creates a basic calculation
    #[must_use]
    pub const fn basic(lhs: f64, op: BasicOp, rhs: f64) -> Self {
        Self::Basic { lhs, op, rhs }
    }

    /// Creates a scientific calculation
    #[must_use]
    pub const fn scientific(function: ScientificFn, value: f64) -> Self {
        Self::Scientific { function, value }
    }

    /// Creates a power calculation
    #[must_use]
    pub const fn power(base: f64, exponent: f64) -> Self {
        Self::Power { base, exponent }
    }

    /// Validates the inputs and computes the result
    pub fn evaluate(&self) -> CalcResult<Outcome> {
        let value = match *self {
            Self::Basic { lhs, op, rhs } => {
                let lhs = ensure_finite("first number", lhs)?;
                let rhs = ensure_finite("second number", rhs)?;
                basic::calculate(lhs, rhs, op)?
            }
            Self::Scientific { function, value } => {
                scientific::apply(function, ensure_finite("number", value)?)?
            }
            Self::Power { base, exponent } => {
                let base = ensure_finite("base", base)?;
                let exponent = ensure_finite("exponent", exponent)?;
                power::power(base, exponent)
            }
        };
        Ok(Outcome {
            calculation: *self,
            value,
        })
    }

    /// Returns a compact expression for history and logs
    #[must_use]
    pub fn expression(&self) -> String {
        match self {
            Self::Basic { lhs, op, rhs } => format!("{lhs} {op} {rhs}"),
            Self::Scientific { function, value } => {
                format!("{}({value})", function.short_name())
            }
            Self::Power { base, exponent } => format!("{base}^{exponent}"),
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression())
    }
}

/// A successful calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// What was asked
    pub calculation: Calculation,
    /// The result
    pub value: f64,
}

impl Outcome {
    /// Returns the success message shown to the user
    #[must_use]
    pub fn message(&self) -> String {
        let result = self.value;
        match self.calculation {
            Calculation::Basic { lhs, op, rhs } => format!("Result: {lhs} {op} {rhs} = {result}"),
            Calculation::Scientific { function, value } => function.describe(value, result),
            Calculation::Power { base, exponent } => format!("{base}^{exponent} = {result}"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
