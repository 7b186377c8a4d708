use crate::domain::model::QueryResult;
use crate::utils::error::{CheckerError, Result};

/// Parse the model's text into a [`QueryResult`].
///
/// Only standard JSON parsing is applied; missing fields or wrong types are
/// schema errors, and there is no partial recovery.
pub fn parse_model_response(text: &str) -> Result<QueryResult> {
    let value: serde_json::Value = serde_json::from_str(text.trim())?;

    if !value.is_object() {
        return Err(CheckerError::schema("top-level value is not an object"));
    }
    for field in ["primary", "suggestions"] {
        if value.get(field).is_none() {
            return Err(CheckerError::schema(format!("missing field `{}`", field)));
        }
    }

    let result: QueryResult = serde_json::from_value(value)?;

    if let Some(pos) = result
        .suggestions
        .iter()
        .position(|s| s.domain_name.trim().is_empty())
    {
        return Err(CheckerError::schema(format!(
            "suggestion {} has an empty domainName",
            pos
        )));
    }

    Ok(result)
}

/// Force the primary name to the queried domain. Suggestions are untouched.
pub fn normalize(mut result: QueryResult, domain: &str) -> QueryResult {
    if result.primary.domain_name != domain {
        tracing::debug!(
            "Model echoed '{}' for query '{}', overwriting",
            result.primary.domain_name,
            domain
        );
    }
    result.primary.domain_name = domain.to_string();

    let violations = result.unavailable_suggestions().count();
    if violations > 0 {
        tracing::warn!("{} suggestion(s) returned as unavailable", violations);
    }

    result
}

pub fn transform(text: &str, domain: &str) -> Result<QueryResult> {
    let result = parse_model_response(text)?;
    Ok(normalize(result, domain))
}
