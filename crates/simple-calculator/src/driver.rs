//! Front-end driver abstraction
//!
//! A front-end (terminal prompt, one-shot command, test harness) submits
//! calculations and shows the resulting success or error banner. The
//! `verify_*` functions are written once against [`CalculatorDriver`] and
//! can be run against any implementation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculator::Calculator;
use crate::core::{BasicOp, CalcResult, Calculation, Outcome, ResultGuard, ScientificFn};

/// The banner shown after a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum Message {
    /// Green banner with the result
    Success(String),
    /// Red banner with the error
    Error(String),
}

impl Message {
    /// Returns true for a success banner
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The banner text
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }
}

impl From<&CalcResult<Outcome>> for Message {
    fn from(result: &CalcResult<Outcome>) -> Self {
        match result {
            Ok(outcome) => Self::Success(outcome.message()),
            Err(err) => Self::Error(err.to_string()),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(text) => f.write_str(text),
            Self::Error(text) => write!(f, "Error: {text}"),
        }
    }
}

/// Abstract driver trait for calculator front-ends
pub trait CalculatorDriver {
    /// Submits a calculation from one of the forms
    fn submit(&mut self, calculation: Calculation) -> Message;

    /// Submits a typed line
    fn submit_line(&mut self, line: &str) -> Message;

    /// The banner from the latest submission
    fn last_message(&self) -> Option<&Message>;

    /// History entries (newest first)
    fn history(&self) -> Vec<HistoryItem>;

    /// Clears the banner and history
    fn clear(&mut self);
}

/// A simplified history item for driver results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    /// The expression that was evaluated
    pub expression: String,
    /// The result as a string
    pub result: String,
}

/// Driver over an in-process [`Calculator`] session
#[derive(Debug, Default)]
pub struct SessionDriver {
    calculator: Calculator,
    last: Option<Message>,
}

impl SessionDriver {
    /// Creates a driver with a fresh session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver over an existing session
    #[must_use]
    pub const fn with_calculator(calculator: Calculator) -> Self {
        Self {
            calculator,
            last: None,
        }
    }

    /// Creates a driver whose session uses the given guard
    #[must_use]
    pub fn with_guard(guard: ResultGuard) -> Self {
        Self::with_calculator(Calculator::with_guard(guard))
    }

    /// The underlying session
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    fn show(&mut self, result: &CalcResult<Outcome>) -> Message {
        let message = Message::from(result);
        self.last = Some(message.clone());
        message
    }
}

impl CalculatorDriver for SessionDriver {
    fn submit(&mut self, calculation: Calculation) -> Message {
        let result = self.calculator.run(calculation);
        self.show(&result)
    }

    fn submit_line(&mut self, line: &str) -> Message {
        let result = self.calculator.run_line(line);
        self.show(&result)
    }

    fn last_message(&self) -> Option<&Message> {
        self.last.as_ref()
    }

    fn history(&self) -> Vec<HistoryItem> {
        self.calculator
            .history()
            .iter_rev()
            .map(|entry| HistoryItem {
                expression: entry.expression.clone(),
                result: entry.result.to_string(),
            })
            .collect()
    }

    fn clear(&mut self) {
        self.last = None;
        self.calculator.clear_history();
    }
}

// ===== Reusable driver specifications =====

fn success_value<D: CalculatorDriver>(driver: &mut D, calculation: Calculation) -> f64 {
    let message = driver.submit(calculation);
    assert!(message.is_success(), "{calculation} failed: {message}");
    calculation
        .evaluate()
        .map(|outcome| outcome.value)
        .unwrap_or(f64::NAN)
}

/// Verifies the four basic operators
pub fn verify_basic_operations<D: CalculatorDriver>(driver: &mut D) {
    let expected = [
        (BasicOp::Add, "Result: 6 + 3 = 9"),
        (BasicOp::Subtract, "Result: 6 - 3 = 3"),
        (BasicOp::Multiply, "Result: 6 × 3 = 18"),
        (BasicOp::Divide, "Result: 6 ÷ 3 = 2"),
    ];
    for (op, text) in expected {
        let message = driver.submit(Calculation::basic(6.0, op, 3.0));
        assert_eq!(message, Message::Success(text.to_string()));
    }
    driver.clear();
}

/// Verifies that every domain error is reported and none yields a value
pub fn verify_domain_errors<D: CalculatorDriver>(driver: &mut D) {
    let expected = [
        (
            Calculation::basic(6.0, BasicOp::Divide, 0.0),
            "Division by zero is not allowed!",
        ),
        (
            Calculation::scientific(ScientificFn::SquareRoot, -4.0),
            "Cannot calculate square root of negative number!",
        ),
        (
            Calculation::scientific(ScientificFn::NaturalLog, 0.0),
            "Natural log is only defined for positive numbers!",
        ),
        (
            Calculation::scientific(ScientificFn::Log10, -10.0),
            "Logarithm is only defined for positive numbers!",
        ),
    ];
    for (calculation, text) in expected {
        assert_eq!(
            driver.submit(calculation),
            Message::Error(text.to_string())
        );
    }
    assert!(driver.history().is_empty());
    driver.clear();
}

/// Verifies that trigonometric input is read as degrees
pub fn verify_degrees<D: CalculatorDriver>(driver: &mut D) {
    let sin = success_value(driver, Calculation::scientific(ScientificFn::Sine, 90.0));
    assert!((sin - 1.0).abs() < 1e-12);

    let message = driver.submit(Calculation::scientific(ScientificFn::Cosine, 0.0));
    assert_eq!(message.text(), "cos(0°) = 1");
    driver.clear();
}

/// Verifies the power form
pub fn verify_power<D: CalculatorDriver>(driver: &mut D) {
    let message = driver.submit(Calculation::power(2.0, 10.0));
    assert_eq!(message, Message::Success("2^10 = 1024".to_string()));
    driver.clear();
}

/// Verifies typed input and history ordering
pub fn verify_history<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    assert!(driver.submit_line("1 + 1").is_success());
    assert!(driver.submit_line("sqrt 16").is_success());
    assert!(driver.submit_line("2 ** 3").is_success());
    assert!(!driver.submit_line("1 / 0").is_success());

    let history = driver.history();
    assert_eq!(history.len(), 3);
    assert_eq!(
        history[0],
        HistoryItem {
            expression: "2^3".into(),
            result: "8".into(),
        }
    );
    assert_eq!(history[2].expression, "1 + 1");
    driver.clear();
}

/// Runs every driver specification
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_operations(driver);
    verify_domain_errors(driver);
    verify_degrees(driver);
    verify_power(driver);
    verify_history(driver);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_driver_new() {
        let driver = SessionDriver::new();
        assert!(driver.last_message().is_none());
        assert!(driver.history().is_empty());
    }

    #[test]
    fn test_submit_sets_last_message() {
        let mut driver = SessionDriver::new();
        driver.submit(Calculation::basic(6.0, BasicOp::Add, 3.0));
        assert_eq!(
            driver.last_message(),
            Some(&Message::Success("Result: 6 + 3 = 9".into()))
        );
    }

    #[test]
    fn test_submit_line_parse_error() {
        let mut driver = SessionDriver::new();
        let message = driver.submit_line("6 & 3");
        assert!(!message.is_success());
        assert!(message.text().starts_with("Invalid expression"));
    }

    #[test]
    fn test_clear() {
        let mut driver = SessionDriver::new();
        driver.submit_line("1 + 1");
        driver.clear();
        assert!(driver.last_message().is_none());
        assert!(driver.history().is_empty());
    }

    #[test]
    fn test_strict_driver() {
        let mut driver = SessionDriver::with_guard(ResultGuard::strict());
        assert!(driver.calculator().guard().strict);
        assert!(!driver.submit(Calculation::power(-8.0, 0.5)).is_success());
    }

    #[test]
    fn test_message_display() {
        assert_eq!(Message::Success("2^2 = 4".into()).to_string(), "2^2 = 4");
        assert_eq!(
            Message::Error("Division by zero is not allowed!".into()).to_string(),
            "Error: Division by zero is not allowed!"
        );
    }

    #[test]
    fn test_message_json() {
        let json = serde_json::to_string(&Message::Error("bad".into())).unwrap();
        assert_eq!(json, r#"{"status":"error","message":"bad"}"#);
    }

    // ===== Unified specification tests =====

    #[test]
    fn test_unified_basic_operations() {
        verify_basic_operations(&mut SessionDriver::new());
    }

    #[test]
    fn test_unified_domain_errors() {
        verify_domain_errors(&mut SessionDriver::new());
    }

    #[test]
    fn test_unified_degrees() {
        verify_degrees(&mut SessionDriver::new());
    }

    #[test]
    fn test_unified_power() {
        verify_power(&mut SessionDriver::new());
    }

    #[test]
    fn test_unified_history() {
        verify_history(&mut SessionDriver::new());
    }

    #[test]
    fn test_full_specification() {
        run_full_specification(&mut SessionDriver::new());
    }
}
