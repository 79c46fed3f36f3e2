//! simplecalc: command-line front-end for the simple calculator
//!
//! ## Usage
//!
//! ```bash
//! simplecalc basic 6 + 3              # Result: 6 + 3 = 9
//! simplecalc sci sqrt 16              # √16 = 4
//! simplecalc sci "Square Root" -4     # Error: Cannot calculate square root ...
//! simplecalc power --base 2 -e 10     # 2^10 = 1024
//! simplecalc repl                     # one calculation per line
//! simplecalc page pi-coach
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod repl;

pub use commands::{
    BasicArgs, Cli, ColorArg, Commands, FormatArg, PageArg, PageArgs, PowerArgs, ReplArgs, SciArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Reporter};
pub use repl::{Repl, ReplStats};
