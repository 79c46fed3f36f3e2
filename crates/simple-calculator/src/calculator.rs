//! Calculator session: evaluates requests and keeps their history

use tracing::{debug, warn};

use crate::core::input::parse_line;
use crate::core::{CalcResult, Calculation, Outcome, ResultGuard};
use crate::history::{History, HistoryEntry};

/// A calculator session
#[derive(Debug, Default)]
pub struct Calculator {
    guard: ResultGuard,
    history: History,
}

impl Calculator {
    /// Creates a session with a permissive guard and default history size
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a custom result guard
    #[must_use]
    pub fn with_guard(guard: ResultGuard) -> Self {
        Self {
            guard,
            history: History::new(),
        }
    }

    /// Replaces the history with an empty one of the given capacity
    #[must_use]
    pub fn with_history_size(mut self, max_entries: usize) -> Self {
        self.history = History::with_capacity(max_entries);
        self
    }

    /// Evaluates a calculation, recording successes in history
    pub fn run(&mut self, calculation: Calculation) -> CalcResult<Outcome> {
        let result = calculation
            .evaluate()
            .and_then(|outcome| self.guard.check(outcome.value).map(|_| outcome));

        match &result {
            Ok(outcome) => {
                debug!(expression = %calculation, value = outcome.value, "calculation succeeded");
                self.history.push(HistoryEntry::from(outcome));
            }
            Err(err) if err.is_domain() => {
                warn!(expression = %calculation, error = %err, "domain error");
            }
            Err(err) => {
                debug!(expression = %calculation, error = %err, "calculation rejected");
            }
        }
        result
    }

    /// Parses and evaluates a typed line
    pub fn run_line(&mut self, line: &str) -> CalcResult<Outcome> {
        let calculation = parse_line(line).map_err(|err| {
            debug!(input = line, error = %err, "could not parse input");
            err
        })?;
        self.run(calculation)
    }

    /// The active result guard
    #[must_use]
    pub const fn guard(&self) -> ResultGuard {
        self.guard
    }

    /// The session history
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Clears the session history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
