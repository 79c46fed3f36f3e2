//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use simple_calculator::core::power::{DEFAULT_BASE, DEFAULT_EXPONENT};
use simple_calculator::core::{BasicOp, Calculation, ScientificFn};
use simple_calculator::history::History;
use simple_calculator::page::PageKind;

/// simplecalc: basic, scientific and power calculations from the terminal
#[derive(Parser, Debug)]
#[command(name = "simplecalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only results and errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format
    #[arg(long, default_value = "text", global = true, env = "SIMPLECALC_FORMAT")]
    pub format: FormatArg,

    /// Reject NaN and infinite results
    #[arg(long, global = true, env = "SIMPLECALC_STRICT")]
    pub strict: bool,

    /// Number of calculations kept in the session history
    #[arg(long, default_value_t = History::DEFAULT_MAX_ENTRIES, global = true)]
    pub history_size: usize,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Basic operations: two numbers and + - × ÷
    Basic(BasicArgs),

    /// Scientific operations on a single number
    ///
    /// Functions: sqrt, square, cube, sin, cos, tan (degrees), ln, log10.
    /// The full labels ("Square Root", "Log Base 10", ...) are accepted too.
    Sci(SciArgs),

    /// Raise a base to an exponent
    Power(PowerArgs),

    /// Interactive session reading one calculation per line
    Repl(ReplArgs),

    /// Show a static page
    Page(PageArgs),

    /// List calculator features
    Features,
}

/// Arguments for the basic command
#[derive(Parser, Debug)]
pub struct BasicArgs {
    /// First number
    #[arg(allow_negative_numbers = true)]
    pub lhs: f64,

    /// Operator: + - × ÷ (or * x /)
    pub op: BasicOp,

    /// Second number
    #[arg(allow_negative_numbers = true)]
    pub rhs: f64,
}

impl BasicArgs {
    /// The calculation these arguments describe
    #[must_use]
    pub const fn calculation(&self) -> Calculation {
        Calculation::basic(self.lhs, self.op, self.rhs)
    }
}

/// Arguments for the sci command
#[derive(Parser, Debug)]
pub struct SciArgs {
    /// Function name or label
    pub function: ScientificFn,

    /// Input number (degrees for sin, cos, tan)
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

impl SciArgs {
    /// The calculation these arguments describe
    #[must_use]
    pub const fn calculation(&self) -> Calculation {
        Calculation::scientific(self.function, self.value)
    }
}

/// Arguments for the power command
#[derive(Parser, Debug)]
pub struct PowerArgs {
    /// Base
    #[arg(short, long, default_value_t = DEFAULT_BASE, allow_negative_numbers = true)]
    pub base: f64,

    /// Exponent
    #[arg(short, long, default_value_t = DEFAULT_EXPONENT, allow_negative_numbers = true)]
    pub exponent: f64,
}

impl PowerArgs {
    /// The calculation these arguments describe
    #[must_use]
    pub const fn calculation(&self) -> Calculation {
        Calculation::power(self.base, self.exponent)
    }
}

/// Arguments for the repl command
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Prompt printed before each line
    #[arg(long, default_value = "> ")]
    pub prompt: String,

    /// Skip the header printed on start
    #[arg(long)]
    pub no_banner: bool,
}

/// Arguments for the page command
#[derive(Parser, Debug)]
pub struct PageArgs {
    /// Page to show
    #[arg(value_enum, default_value = "calculator")]
    pub page: PageArg,
}

/// Page argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageArg {
    /// The calculator header and feature list
    Calculator,
    /// The PI Coach placeholder page
    PiCoach,
}

impl From<PageArg> for PageKind {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Calculator => Self::Calculator,
            PageArg::PiCoach => Self::PiCoach,
        }
    }
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Human-readable banners
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
