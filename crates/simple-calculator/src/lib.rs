//! Simple Calculator
//!
//! Basic arithmetic, a handful of scientific functions and a power
//! operation, each a plain function from validated inputs to a
//! [`CalcResult`](core::CalcResult). Front-ends talk to a
//! [`Calculator`](calculator::Calculator) session through the
//! [`CalculatorDriver`](driver::CalculatorDriver) trait.
//!
//! # Example
//!
//! ```rust
//! use simple_calculator::prelude::*;
//!
//! let outcome = Calculation::basic(6.0, BasicOp::Add, 3.0).evaluate().unwrap();
//! assert_eq!(outcome.value, 9.0);
//! assert_eq!(outcome.message(), "Result: 6 + 3 = 9");
//!
//! let err = Calculation::basic(6.0, BasicOp::Divide, 0.0).evaluate().unwrap_err();
//! assert!(err.is_domain());
//!
//! let mut session = Calculator::new();
//! assert_eq!(session.run_line("2 ^ 10").unwrap().value, 1024.0);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod core;
pub mod driver;
pub mod history;
pub mod page;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::Calculator;
    pub use crate::core::input::{parse_line, LineParser, Token, Tokenizer};
    pub use crate::core::{
        BasicOp, CalcError, CalcResult, Calculation, DomainError, Outcome, ResultGuard,
        ScientificFn,
    };
    pub use crate::driver::{CalculatorDriver, HistoryItem, Message, SessionDriver};
    pub use crate::history::{History, HistoryEntry};
    pub use crate::page::{Layout, Page, PageConfig, PageKind};
}
