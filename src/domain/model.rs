use serde::{Deserialize, Serialize};

/// One domain name and its simulated availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    pub domain_name: String,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DomainInfo {
    pub fn available(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            is_available: true,
            reason: None,
        }
    }

    pub fn taken(domain_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            is_available: false,
            reason: Some(reason.into()),
        }
    }

    /// Reason the domain is taken.
    ///
    /// Always `None` for available domains, even if the model sent one.
    pub fn reason(&self) -> Option<&str> {
        if self.is_available {
            return None;
        }
        self.reason
            .as_deref()
            .map(str::trim)
            .filter(|reason| !reason.is_empty())
    }
}

/// Outcome of one availability query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub primary: DomainInfo,
    pub suggestions: Vec<DomainInfo>,
}

impl QueryResult {
    /// Suggestions that break the "every suggestion is available" contract.
    /// They are reported, never corrected.
    pub fn unavailable_suggestions(&self) -> impl Iterator<Item = &DomainInfo> {
        self.suggestions.iter().filter(|s| !s.is_available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_ignored_when_available() {
        let info = DomainInfo {
            domain_name: "brandnew.dev".to_string(),
            is_available: true,
            reason: Some("Already registered".to_string()),
        };

        assert_eq!(info.reason(), None);
        // raw value stays untouched
        assert_eq!(info.reason.as_deref(), Some("Already registered"));
    }

    #[test]
    fn test_blank_reason_is_none() {
        let info = DomainInfo::taken("google.com", "  ");
        assert_eq!(info.reason(), None);

        let info = DomainInfo::taken("google.com", "Already registered");
        assert_eq!(info.reason(), Some("Already registered"));
    }

    #[test]
    fn test_camel_case_wire_format() {
        let info = DomainInfo::available("example.io");
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"domainName": "example.io", "isAvailable": true})
        );
    }

    #[test]
    fn test_unavailable_suggestions() {
        let result = QueryResult {
            primary: DomainInfo::available("mine.com"),
            suggestions: vec![
                DomainInfo::available("mine.ai"),
                DomainInfo::taken("mine.io", "Premium domain"),
            ],
        };

        let bad: Vec<_> = result.unavailable_suggestions().collect();
        assert_eq!(bad.len(), 1);
        assert_eq!(bad[0].domain_name, "mine.io");
    }
}
