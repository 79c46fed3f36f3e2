//! Static pages: the calculator's header and feature list, and the
//! PI Coach placeholder page

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Page layout hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Content in a narrow centered column
    #[default]
    Centered,
    /// Content uses the full width
    Wide,
}

/// Page-level settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Window or tab title
    pub title: String,
    /// Icon shown next to the title
    pub icon: String,
    /// Layout hint
    pub layout: Layout,
}

/// A static page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page-level settings
    pub config: PageConfig,
    /// Main heading
    pub heading: String,
    /// Line of text under the heading
    pub body: String,
    /// Tab names, if the page has tabs
    pub tabs: Vec<String>,
    /// Feature bullet points
    pub features: Vec<String>,
}

/// Which static page to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    /// The calculator header and feature list
    Calculator,
    /// The PI Coach placeholder
    PiCoach,
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calculator" | "calc" => Ok(Self::Calculator),
            "pi-coach" | "pi_coach" | "picoach" => Ok(Self::PiCoach),
            other => Err(format!("unknown page '{other}'")),
        }
    }
}

/// Feature bullet points shown under the calculator
pub const CALCULATOR_FEATURES: [&str; 6] = [
    "Basic arithmetic operations",
    "Scientific functions",
    "Error handling",
    "User-friendly interface",
    "Multiple calculation modes",
    "Real-time results",
];

impl Page {
    /// Builds the requested page
    #[must_use]
    pub fn of_kind(kind: PageKind) -> Self {
        match kind {
            PageKind::Calculator => Self::calculator(),
            PageKind::PiCoach => Self::pi_coach(),
        }
    }

    /// The calculator header, tabs and feature list
    #[must_use]
    pub fn calculator() -> Self {
        Self {
            config: PageConfig {
                title: "Simple Calculator".into(),
                icon: "🧮".into(),
                layout: Layout::Centered,
            },
            heading: "🧮 Simple Calculator".into(),
            body: "A simple calculator for the terminal".into(),
            tabs: vec!["Basic Calculator".into(), "Scientific Calculator".into()],
            features: CALCULATOR_FEATURES.iter().map(|f| (*f).to_string()).collect(),
        }
    }

    /// The PI Coach placeholder page
    #[must_use]
    pub fn pi_coach() -> Self {
        Self {
            config: PageConfig {
                title: "PI Coach".into(),
                icon: "🥧".into(),
                layout: Layout::Centered,
            },
            heading: "Welcome to the PI Coach".into(),
            body: "Your personal PI coaching assistant".into(),
            tabs: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Renders the page as plain text
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.heading);
        let _ = writeln!(out, "{}", "-".repeat(self.heading.chars().count().max(3)));
        let _ = writeln!(out, "{}", self.body);
        if !self.tabs.is_empty() {
            let _ = writeln!(out, "\nModes: {}", self.tabs.join(" | "));
        }
        if !self.features.is_empty() {
            let _ = writeln!(out, "\nCalculator Features");
            for feature in &self.features {
                let _ = writeln!(out, "  ✅ {feature}");
            }
        }
        out
    }
}
