//! Calculator core: pure dispatch-and-validate functions
//!
//! Every operation takes validated inputs and returns a [`CalcResult`].
//! Failure modes are enumerable through [`CalcError`] and [`DomainError`].

pub mod basic;
pub mod calculation;
pub mod input;
pub mod power;
pub mod scientific;

pub use basic::BasicOp;
pub use calculation::{Calculation, Outcome};
pub use power::power;
pub use scientific::ScientificFn;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Input falls outside the valid range of the requested operation
    #[error("{0}")]
    Domain(#[from] DomainError),
    /// Input is not a usable number
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Input line could not be understood
    #[error("Invalid expression: {0}")]
    Parse(String),
    /// Nothing was entered
    #[error("Empty input")]
    EmptyInput,
    /// Result is NaN or infinite (strict mode only)
    #[error("Result is not a finite number: {0}")]
    NonFinite(f64),
}

impl CalcError {
    /// Returns true for domain errors
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

/// Domain errors, worded the way the calculator shows them to users
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum DomainError {
    /// Division with a zero divisor
    #[error("Division by zero is not allowed!")]
    DivisionByZero,
    /// Square root of a negative number
    #[error("Cannot calculate square root of negative number!")]
    NegativeSquareRoot(f64),
    /// Logarithm of zero or a negative number
    #[error("{}", logarithm_message(.function))]
    NonPositiveLogarithm {
        /// The logarithm that was requested
        function: ScientificFn,
        /// The rejected argument
        value: f64,
    },
}

fn logarithm_message(function: &ScientificFn) -> &'static str {
    if *function == ScientificFn::NaturalLog {
        "Natural log is only defined for positive numbers!"
    } else {
        "Logarithm is only defined for positive numbers!"
    }
}

/// Rejects NaN and infinite inputs before they reach an operation
pub fn ensure_finite(name: &str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}

/// Opt-in check that turns NaN and infinite results into errors
///
/// Disabled by default, so the power operation stays unrestricted
/// and returns whatever IEEE arithmetic produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultGuard {
    /// Reject non-finite results
    pub strict: bool,
}

impl ResultGuard {
    /// Creates a guard that lets every result through
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// Creates a guard that rejects NaN and infinities
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Checks a computed result
    pub fn check(&self, result: f64) -> CalcResult<f64> {
        if self.strict && !result.is_finite() {
            return Err(CalcError::NonFinite(result));
        }
        Ok(result)
    }
}
