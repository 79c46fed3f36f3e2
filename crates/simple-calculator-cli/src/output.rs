//! Output formatting for results and pages

use console::{style, Term};
use serde::{Deserialize, Serialize};
use simple_calculator::core::{CalcResult, Outcome};
use simple_calculator::driver::Message;
use simple_calculator::history::History;
use simple_calculator::page::{Page, CALCULATOR_FEATURES};

use crate::error::CliResult;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable banners
    #[default]
    Text,
    /// JSON objects
    Json,
}

/// JSON shape of a single result
#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    #[serde(flatten)]
    message: &'a Message,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a Outcome>,
}

/// Writes banners to stdout and errors to stderr
#[derive(Debug)]
pub struct Reporter {
    out: Term,
    err: Term,
    /// Output format
    pub format: OutputFormat,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::Text, false, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            format,
            use_color,
            quiet,
        }
    }

    /// Formats a result banner
    pub fn format_result(&self, result: &CalcResult<Outcome>) -> CliResult<String> {
        let message = Message::from(result);
        if self.format == OutputFormat::Json {
            let record = ResultRecord {
                message: &message,
                outcome: result.as_ref().ok(),
            };
            return Ok(serde_json::to_string(&record)?);
        }
        Ok(self.format_message(&message))
    }

    /// Formats a text banner
    #[must_use]
    pub fn format_message(&self, message: &Message) -> String {
        match (message, self.use_color) {
            (Message::Success(_), true) => style(message.to_string()).green().to_string(),
            (Message::Error(_), true) => style(message.to_string()).red().bold().to_string(),
            (_, false) => message.to_string(),
        }
    }

    /// Prints a result: successes to stdout, errors to stderr
    pub fn result(&self, result: &CalcResult<Outcome>) -> CliResult<()> {
        let line = self.format_result(result)?;
        if result.is_ok() || self.format == OutputFormat::Json {
            self.out.write_line(&line)?;
        } else {
            self.err.write_line(&line)?;
        }
        Ok(())
    }

    /// Whether an interactive prompt may be written between results
    #[must_use]
    pub fn shows_prompt(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }

    /// Formats a session notice such as "History cleared"
    pub fn format_notice(&self, message: &Message) -> CliResult<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string(message)?);
        }
        Ok(message.to_string())
    }

    /// Formats a static page
    pub fn format_page(&self, page: &Page) -> CliResult<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string(page)?);
        }
        let text = page.render();
        let mut lines = text.lines();
        let mut out = Vec::new();
        if let Some(heading) = lines.next() {
            out.push(if self.use_color {
                style(heading).bold().to_string()
            } else {
                heading.to_string()
            });
        }
        out.extend(lines.map(str::to_string));
        Ok(out.join("\n"))
    }

    /// Formats the feature list
    pub fn format_features(&self) -> CliResult<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string(&CALCULATOR_FEATURES)?);
        }
        Ok(CALCULATOR_FEATURES
            .iter()
            .map(|feature| format!("✅ {feature}"))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Formats the session history, oldest entry first
    pub fn format_history(&self, history: &History) -> CliResult<String> {
        if self.format == OutputFormat::Json {
            return Ok(history.to_json()?);
        }
        if history.is_empty() {
            return Ok("No calculations yet".to_string());
        }
        Ok(history.export_formatted())
    }

    /// Prints a static page
    pub fn page(&self, page: &Page) -> CliResult<()> {
        self.out.write_line(&self.format_page(page)?)?;
        Ok(())
    }

    /// Prints the feature list
    pub fn features(&self) -> CliResult<()> {
        self.out.write_line(&self.format_features()?)?;
        Ok(())
    }

    /// Prints an informational line; silent when quiet or in JSON mode
    pub fn info(&self, message: &str) -> CliResult<()> {
        if self.quiet || self.format == OutputFormat::Json {
            return Ok(());
        }
        let line = if self.use_color {
            style(message).dim().to_string()
        } else {
            message.to_string()
        };
        self.out.write_line(&line)?;
        Ok(())
    }
}
