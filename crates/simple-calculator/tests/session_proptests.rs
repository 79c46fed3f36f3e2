//! Session-level tests driven through the public driver API

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use proptest::prelude::*;
use simple_calculator::prelude::*;

// ===== Strategy definitions =====

/// Finite inputs in a range where no operation overflows
fn operand_strategy() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6f64
}

fn basic_op_strategy() -> impl Strategy<Value = BasicOp> {
    prop::sample::select(BasicOp::ALL.to_vec())
}

fn scientific_fn_strategy() -> impl Strategy<Value = ScientificFn> {
    prop::sample::select(ScientificFn::ALL.to_vec())
}

fn calculation_strategy() -> impl Strategy<Value = Calculation> {
    prop_oneof![
        (operand_strategy(), basic_op_strategy(), operand_strategy())
            .prop_map(|(a, op, b)| Calculation::basic(a, op, b)),
        (scientific_fn_strategy(), operand_strategy())
            .prop_map(|(f, x)| Calculation::scientific(f, x)),
        (operand_strategy(), -8.0f64..8.0f64).prop_map(|(b, e)| Calculation::power(b, e)),
    ]
}

// ===== Driver checks =====

#[test]
fn session_driver_passes_driver_checks() {
    let mut driver = SessionDriver::new();
    simple_calculator::driver::run_full_specification(&mut driver);
}

#[test]
fn strict_session_driver_passes_driver_checks() {
    let mut driver = SessionDriver::with_guard(ResultGuard::strict());
    simple_calculator::driver::run_full_specification(&mut driver);
}

// ===== Property tests =====

proptest! {
    /// Every submission yields exactly one banner, and history grows only on success
    #[test]
    fn prop_history_tracks_successes(calcs in prop::collection::vec(calculation_strategy(), 0..40)) {
        let mut driver = SessionDriver::new();
        let mut successes = 0;
        for calc in calcs {
            if driver.submit(calc).is_success() {
                successes += 1;
            }
        }
        prop_assert_eq!(driver.history().len(), successes);
    }

    /// The banner text never leaks the internal error prefix
    #[test]
    fn prop_error_banner_text(calc in calculation_strategy()) {
        let mut driver = SessionDriver::new();
        let message = driver.submit(calc);
        if !message.is_success() {
            prop_assert!(message.to_string().starts_with("Error: "));
            prop_assert!(!message.text().starts_with("Error: "));
        }
    }

    /// Arbitrary text lines never panic and never touch history on failure
    #[test]
    fn prop_arbitrary_lines_are_safe(line in "\\PC{0,24}") {
        let mut calculator = Calculator::new();
        let result = calculator.run_line(&line);
        prop_assert_eq!(calculator.history().len(), usize::from(result.is_ok()));
    }

    /// Division by zero is always a domain error
    #[test]
    fn prop_divide_by_zero(a in operand_strategy()) {
        let mut calculator = Calculator::new();
        let err = calculator.run(Calculation::basic(a, BasicOp::Divide, 0.0)).unwrap_err();
        prop_assert!(err.is_domain());
        prop_assert!(calculator.history().is_empty());
    }

    /// History never exceeds its capacity
    #[test]
    fn prop_history_bounded(cap in 0usize..8, count in 0usize..20) {
        let mut calculator = Calculator::new().with_history_size(cap);
        for i in 0..count {
            calculator.run(Calculation::power(2.0, i as f64)).unwrap();
        }
        prop_assert_eq!(calculator.history().len(), count.min(cap));
    }
}
