//! Single-number scientific functions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, DomainError};

/// Functions offered by the scientific calculator
///
/// Trigonometric functions take their argument in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScientificFn {
    /// √x
    SquareRoot,
    /// x²
    Square,
    /// x³
    Cube,
    /// sin(x°)
    Sine,
    /// cos(x°)
    Cosine,
    /// tan(x°)
    Tangent,
    /// ln(x)
    NaturalLog,
    /// log₁₀(x)
    Log10,
}

impl ScientificFn {
    /// All functions in selector order
    pub const ALL: [Self; 8] = [
        Self::SquareRoot,
        Self::Square,
        Self::Cube,
        Self::Sine,
        Self::Cosine,
        Self::Tangent,
        Self::NaturalLog,
        Self::Log10,
    ];

    /// Returns the selector label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SquareRoot => "Square Root",
            Self::Square => "Square",
            Self::Cube => "Cube",
            Self::Sine => "Sine",
            Self::Cosine => "Cosine",
            Self::Tangent => "Tangent",
            Self::NaturalLog => "Natural Log",
            Self::Log10 => "Log Base 10",
        }
    }

    /// Returns the short name used on the command line
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::SquareRoot => "sqrt",
            Self::Square => "square",
            Self::Cube => "cube",
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
            Self::NaturalLog => "ln",
            Self::Log10 => "log10",
        }
    }

    /// Returns true for sin, cos and tan
    #[must_use]
    pub const fn is_trigonometric(&self) -> bool {
        matches!(self, Self::Sine | Self::Cosine | Self::Tangent)
    }

    /// Formats `x` and its result the way the success banner shows them
    #[must_use]
    pub fn describe(&self, x: f64, result: f64) -> String {
        match self {
            Self::SquareRoot => format!("√{x} = {result}"),
            Self::Square => format!("{x}² = {result}"),
            Self::Cube => format!("{x}³ = {result}"),
            Self::Sine => format!("sin({x}°) = {result}"),
            Self::Cosine => format!("cos({x}°) = {result}"),
            Self::Tangent => format!("tan({x}°) = {result}"),
            Self::NaturalLog => format!("ln({x}) = {result}"),
            Self::Log10 => format!("log₁₀({x}) = {result}"),
        }
    }

    /// Applies the function
    pub fn apply(self, x: f64) -> CalcResult<f64> {
        apply(self, x)
    }
}

impl fmt::Display for ScientificFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ScientificFn {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|f| wanted == f.short_name() || wanted == f.label().to_ascii_lowercase())
            .or(match wanted.as_str() {
                "√" | "root" => Some(Self::SquareRoot),
                "log" => Some(Self::Log10),
                _ => None,
            })
            .ok_or_else(|| CalcError::Parse(format!("unknown function '{}'", s.trim())))
    }
}

/// Applies a scientific function to one number
pub fn apply(function: ScientificFn, x: f64) -> CalcResult<f64> {
    match function {
        ScientificFn::SquareRoot => {
            if x < 0.0 {
                return Err(DomainError::NegativeSquareRoot(x).into());
            }
            Ok(x.sqrt())
        }
        ScientificFn::Square => Ok(x * x),
        ScientificFn::Cube => Ok(x * x * x),
        ScientificFn::Sine => Ok(x.to_radians().sin()),
        ScientificFn::Cosine => Ok(x.to_radians().cos()),
        ScientificFn::Tangent => Ok(x.to_radians().tan()),
        ScientificFn::NaturalLog | ScientificFn::Log10 => {
            if x <= 0.0 {
                return Err(DomainError::NonPositiveLogarithm { function, value: x }.into());
            }
            Ok(if function == ScientificFn::NaturalLog {
                x.ln()
            } else {
                x.log10()
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    // --- labels and parsing ---

    #[test]
    fn test_labels_in_selector_order() {
        let labels: Vec<_> = ScientificFn::ALL.iter().map(ScientificFn::label).collect();
        assert_eq!(
            labels,
            vec![
                "Square Root",
                "Square",
                "Cube",
                "Sine",
                "Cosine",
                "Tangent",
                "Natural Log",
                "Log Base 10"
            ]
        );
    }

    #[test]
    fn test_parse_short_names() {
        for f in ScientificFn::ALL {
            assert_eq!(f.short_name().parse::<ScientificFn>(), Ok(f));
        }
    }

    #[test]
    fn test_parse_labels_case_insensitive() {
        assert_eq!(
            "square root".parse::<ScientificFn>(),
            Ok(ScientificFn::SquareRoot)
        );
        assert_eq!(
            "LOG BASE 10".parse::<ScientificFn>(),
            Ok(ScientificFn::Log10)
        );
        assert_eq!(
            "natural-log".parse::<ScientificFn>(),
            Ok(ScientificFn::NaturalLog)
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("√".parse::<ScientificFn>(), Ok(ScientificFn::SquareRoot));
        assert_eq!("log".parse::<ScientificFn>(), Ok(ScientificFn::Log10));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "cosh".parse::<ScientificFn>(),
            Err(CalcError::Parse(msg)) if msg.contains("cosh")
        ));
    }

    #[test]
    fn test_is_trigonometric() {
        assert!(ScientificFn::Sine.is_trigonometric());
        assert!(ScientificFn::Tangent.is_trigonometric());
        assert!(!ScientificFn::Log10.is_trigonometric());
    }

    // --- describe ---

    #[test]
    fn test_describe() {
        assert_eq!(ScientificFn::SquareRoot.describe(16.0, 4.0), "√16 = 4");
        assert_eq!(ScientificFn::Square.describe(3.0, 9.0), "3² = 9");
        assert_eq!(ScientificFn::Cube.describe(2.0, 8.0), "2³ = 8");
        assert_eq!(ScientificFn::Sine.describe(90.0, 1.0), "sin(90°) = 1");
        assert_eq!(ScientificFn::NaturalLog.describe(1.0, 0.0), "ln(1) = 0");
        assert_eq!(ScientificFn::Log10.describe(100.0, 2.0), "log₁₀(100) = 2");
    }

    // --- apply ---

    #[test]
    fn test_sqrt() {
        assert_eq!(apply(ScientificFn::SquareRoot, 16.0), Ok(4.0));
        assert_eq!(apply(ScientificFn::SquareRoot, 0.0), Ok(0.0));
    }

    #[test]
    fn test_sqrt_negative_is_domain_error() {
        assert_eq!(
            apply(ScientificFn::SquareRoot, -4.0),
            Err(CalcError::Domain(DomainError::NegativeSquareRoot(-4.0)))
        );
    }

    #[test]
    fn test_square_and_cube() {
        assert_eq!(ScientificFn::Square.apply(-3.0), Ok(9.0));
        assert_eq!(ScientificFn::Cube.apply(-3.0), Ok(-27.0));
    }

    #[test]
    fn test_trig_uses_degrees() {
        assert_close(apply(ScientificFn::Sine, 90.0).unwrap(), 1.0);
        assert_eq!(apply(ScientificFn::Cosine, 0.0), Ok(1.0));
        assert_close(apply(ScientificFn::Tangent, 45.0).unwrap(), 1.0);
        assert_close(apply(ScientificFn::Sine, 30.0).unwrap(), 0.5);
    }

    #[test]
    fn test_logarithms() {
        assert_eq!(apply(ScientificFn::NaturalLog, 1.0), Ok(0.0));
        assert_close(
            apply(ScientificFn::NaturalLog, std::f64::consts::E).unwrap(),
            1.0,
        );
        assert_close(apply(ScientificFn::Log10, 1000.0).unwrap(), 3.0);
    }

    #[test]
    fn test_log_of_zero_is_domain_error() {
        assert_eq!(
            apply(ScientificFn::NaturalLog, 0.0),
            Err(CalcError::Domain(DomainError::NonPositiveLogarithm {
                function: ScientificFn::NaturalLog,
                value: 0.0,
            }))
        );
        assert!(apply(ScientificFn::Log10, 0.0).unwrap_err().is_domain());
    }

    // --- Property-based tests ---

    proptest! {
        #[test]
        fn prop_sqrt_non_negative(x in 0.0f64..1e300) {
            let r = apply(ScientificFn::SquareRoot, x).unwrap();
            prop_assert!(r >= 0.0);
        }

        #[test]
        fn prop_sqrt_negative_rejected(x in -1e300f64..-1e-300) {
            prop_assert!(apply(ScientificFn::SquareRoot, x).unwrap_err().is_domain());
        }

        #[test]
        fn prop_logs_reject_non_positive(x in -1e300f64..=0.0) {
            prop_assert!(apply(ScientificFn::NaturalLog, x).unwrap_err().is_domain());
            prop_assert!(apply(ScientificFn::Log10, x).unwrap_err().is_domain());
        }

        #[test]
        fn prop_logs_match_std(x in 1e-300f64..1e300) {
            prop_assert_eq!(apply(ScientificFn::NaturalLog, x), Ok(x.ln()));
            prop_assert_eq!(apply(ScientificFn::Log10, x), Ok(x.log10()));
        }

        #[test]
        fn prop_square_and_cube(x in -1e100f64..1e100) {
            prop_assert_eq!(apply(ScientificFn::Square, x), Ok(x * x));
            prop_assert_eq!(apply(ScientificFn::Cube, x), Ok(x * x * x));
        }

        #[test]
        fn prop_sine_bounded(x in -1e6f64..1e6) {
            let r = apply(ScientificFn::Sine, x).unwrap();
            prop_assert!((-1.0..=1.0).contains(&r));
        }
    }
}
