//! Interactive session
//!
//! Reads one calculation per line. An error banner never ends the
//! session; only `quit`, `exit` or end of input do.

use std::io::{BufRead, Write};

use simple_calculator::calculator::Calculator;
use simple_calculator::driver::Message;
use simple_calculator::page::{Page, PageKind};
use tracing::debug;

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Reporter;

const HELP: &str = "\
Enter a calculation:
  6 + 3        6 ÷ 0        6 x 3
  sqrt 16      sin(90)      Square Root -4      Log Base 10 1000
  2 ^ 10       2 ** 10      pow 2 10
Commands: history, clear, features, page <calculator|pi-coach>, help, quit";

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplStats {
    /// Lines that produced a success banner
    pub succeeded: usize,
    /// Lines that produced an error banner
    pub failed: usize,
}

/// An interactive calculator session
#[derive(Debug)]
pub struct Repl<'a> {
    reporter: &'a Reporter,
    calculator: Calculator,
    prompt: String,
}

impl<'a> Repl<'a> {
    /// Creates a session configured from the CLI
    #[must_use]
    pub fn new(config: &CliConfig, reporter: &'a Reporter, prompt: impl Into<String>) -> Self {
        Self {
            reporter,
            calculator: Calculator::with_guard(config.guard())
                .with_history_size(config.history_size),
            prompt: prompt.into(),
        }
    }

    /// The session's calculator
    #[must_use]
    pub const fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Runs until `quit` or end of input
    ///
    /// In JSON mode every line written to `out` is one JSON value.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> CliResult<ReplStats> {
        let mut stats = ReplStats::default();
        let show_prompt = self.reporter.shows_prompt();

        if show_prompt {
            write!(out, "{}", self.prompt)?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();

            let reply = match trimmed.to_ascii_lowercase().as_str() {
                "" => None,
                "quit" | "exit" | "q" => break,
                "help" | "?" => Some(
                    self.reporter
                        .format_notice(&Message::Success(HELP.to_string()))?,
                ),
                "history" => Some(self.reporter.format_history(self.calculator.history())?),
                "clear" => {
                    self.calculator.clear_history();
                    Some(
                        self.reporter
                            .format_notice(&Message::Success("History cleared".to_string()))?,
                    )
                }
                "features" => Some(self.reporter.format_features()?),
                command if command.starts_with("page") => {
                    let name = command.trim_start_matches("page").trim();
                    let name = if name.is_empty() { "calculator" } else { name };
                    Some(match name.parse::<PageKind>() {
                        Ok(kind) => self.reporter.format_page(&Page::of_kind(kind))?,
                        Err(e) => self.reporter.format_notice(&Message::Error(e))?,
                    })
                }
                _ => {
                    let result = self.calculator.run_line(trimmed);
                    if result.is_ok() {
                        stats.succeeded += 1;
                    } else {
                        stats.failed += 1;
                    }
                    Some(self.reporter.format_result(&result)?)
                }
            };

            if let Some(reply) = reply {
                writeln!(out, "{reply}")?;
            }
            if show_prompt {
                write!(out, "{}", self.prompt)?;
                out.flush()?;
            }
        }

        debug!(
            succeeded = stats.succeeded,
            failed = stats.failed,
            "session ended"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn run_session(config: &CliConfig, input: &str) -> (ReplStats, String, usize) {
        let reporter = Reporter::new(config.format, false, true);
        let mut repl = Repl::new(config, &reporter, "> ");
        let mut out = Vec::new();
        let stats = repl.run(input.as_bytes(), &mut out).unwrap();
        let history_len = repl.calculator().history().len();
        (stats, String::from_utf8(out).unwrap(), history_len)
    }

    #[test]
    fn test_session_continues_after_errors() {
        let (stats, out, history_len) =
            run_session(&CliConfig::default(), "6 + 3\n6 ÷ 0\nsqrt -4\n2 ^ 10\n");
        assert_eq!(
            stats,
            ReplStats {
                succeeded: 2,
                failed: 2
            }
        );
        assert_eq!(history_len, 2);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Result: 6 + 3 = 9",
                "Error: Division by zero is not allowed!",
                "Error: Cannot calculate square root of negative number!",
                "2^10 = 1024",
            ]
        );
    }

    #[test]
    fn test_quit_stops_reading() {
        let (stats, out, _) = run_session(&CliConfig::default(), "1 + 1\nquit\n2 + 2\n");
        assert_eq!(stats.succeeded, 1);
        assert!(!out.contains("2 + 2"));
    }

    #[test]
    fn test_history_and_clear_commands() {
        let (_, out, history_len) =
            run_session(&CliConfig::default(), "history\n1 + 1\nhistory\nclear\n");
        assert!(out.starts_with("No calculations yet\n"));
        assert!(out.contains("1 + 1 = 2"));
        assert!(out.ends_with("History cleared\n"));
        assert_eq!(history_len, 0);
    }

    #[test]
    fn test_page_command() {
        let (_, out, _) = run_session(&CliConfig::default(), "page pi-coach\npage nowhere\n");
        assert!(out.contains("Welcome to the PI Coach"));
        assert!(out.contains("Error: unknown page 'nowhere'"));
    }

    #[test]
    fn test_features_and_help() {
        let (stats, out, _) = run_session(&CliConfig::default(), "features\nhelp\n\n");
        assert_eq!(stats, ReplStats::default());
        assert!(out.contains("✅ Scientific functions"));
        assert!(out.contains("Commands:"));
    }

    #[test]
    fn test_strict_session() {
        let config = CliConfig::new().with_strict(true);
        let (stats, out, _) = run_session(&config, "2 ^ 10000\n");
        assert_eq!(stats.failed, 1);
        assert!(out.contains("not a finite number"));
    }

    #[test]
    fn test_json_session() {
        let config = CliConfig::new().with_format(OutputFormat::Json);
        let (_, out, _) = run_session(&config, "cos 0\n");
        let json: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(json["message"], "cos(0°) = 1");
    }

    #[test]
    fn test_prompt_shown_when_not_quiet() {
        let reporter = Reporter::new(OutputFormat::Text, false, false);
        let config = CliConfig::default();
        let mut repl = Repl::new(&config, &reporter, "calc> ");
        let mut out = Vec::new();
        repl.run("1 + 1\n".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("calc> Result: 1 + 1 = 2\ncalc> "));
    }

    #[test]
    fn test_json_session_emits_only_json_lines() {
        let config = CliConfig::new().with_format(OutputFormat::Json);
        let reporter = Reporter::new(OutputFormat::Json, false, false);
        let mut repl = Repl::new(&config, &reporter, "> ");
        let mut out = Vec::new();
        let input = "6 + 3\nhistory\nfeatures\npage pi-coach\npage nowhere\n1 / 0\nhelp\nclear\nhistory\n";
        repl.run(input.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0]["message"], "Result: 6 + 3 = 9");
        assert_eq!(lines[1][0]["expression"], "6 + 3");
        assert_eq!(lines[2].as_array().map(Vec::len), Some(6));
        assert_eq!(lines[3]["heading"], "Welcome to the PI Coach");
        assert_eq!(lines[4]["status"], "error");
        assert_eq!(lines[5]["message"], "Division by zero is not allowed!");
        assert_eq!(lines[7]["message"], "History cleared");
        assert_eq!(lines[8], serde_json::json!([]));
    }
}
