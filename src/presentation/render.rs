//! Text rendering of the search state. Pure functions from state to strings.

use crate::core::controller::SearchState;
use crate::domain::model::{DomainInfo, QueryResult};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

pub const WELCOME_TITLE: &str = "Welcome to AI Domain Checker";
pub const WELCOME_HINT: &str =
    "Enter a domain name to check its availability and get smart suggestions.";
pub const PRIMARY_HEADING: &str = "Your Searched Domain";
pub const ALTERNATIVES_HEADING: &str = "Here are some AI-powered alternatives:";
pub const SUGGESTIONS_HEADING: &str = "AI Suggestions";

pub fn render_card(info: &DomainInfo) -> String {
    let status = if info.is_available {
        format!("{} {}", "✔".green(), "Available".green().bold())
    } else {
        let mut status = format!("{} {}", "✘".red(), "Taken".red().bold());
        if let Some(reason) = info.reason() {
            status.push_str(&format!(" ({})", reason));
        }
        status
    };

    let action = if info.is_available {
        "[Register Now]".bold().to_string()
    } else {
        "[Register Now]".dimmed().strikethrough().to_string()
    };

    format!("  {}\n  {}  {}", info.domain_name.bold(), status, action)
}

fn render_result(result: &QueryResult) -> String {
    let mut lines = vec![PRIMARY_HEADING.bold().to_string(), render_card(&result.primary)];

    if !result.suggestions.is_empty() {
        let heading = if result.primary.is_available {
            SUGGESTIONS_HEADING
        } else {
            ALTERNATIVES_HEADING
        };
        lines.push(String::new());
        lines.push(heading.bold().to_string());
        for suggestion in &result.suggestions {
            lines.push(render_card(suggestion));
        }
    }

    lines.join("\n")
}

pub fn render_state(state: &SearchState) -> String {
    match state {
        SearchState::Idle => format!("{}\n{}", WELCOME_TITLE.bold(), WELCOME_HINT.dimmed()),
        SearchState::Loading { domain } => format!("Checking {}...", domain),
        SearchState::Error(message) => message.red().to_string(),
        SearchState::Success(result) => render_result(result),
    }
}

/// A `DomainInfo` as printed: the reason only appears for taken domains.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DomainView<'a> {
    domain_name: &'a str,
    is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

impl<'a> From<&'a DomainInfo> for DomainView<'a> {
    fn from(info: &'a DomainInfo) -> Self {
        Self {
            domain_name: &info.domain_name,
            is_available: info.is_available,
            reason: info.reason(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    checked_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary: Option<DomainView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestions: Option<Vec<DomainView<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// JSON for a finished search; `None` while idle or loading.
pub fn render_json(state: &SearchState, checked_at: DateTime<Utc>) -> Option<serde_json::Result<String>> {
    let report = match state {
        SearchState::Success(result) => JsonReport {
            checked_at,
            primary: Some(DomainView::from(&result.primary)),
            suggestions: Some(result.suggestions.iter().map(DomainView::from).collect()),
            error: None,
        },
        SearchState::Error(message) => JsonReport {
            checked_at,
            primary: None,
            suggestions: None,
            error: Some(message),
        },
        SearchState::Idle | SearchState::Loading { .. } => return None,
    };
    Some(serde_json::to_string_pretty(&report))
}
