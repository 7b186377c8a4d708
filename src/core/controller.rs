use crate::domain::model::{DomainInfo, QueryResult};
use crate::domain::ports::AvailabilityChecker;
use crate::utils::error::QueryError;
use crate::utils::validation::normalize_domain_input;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Loading { domain: String },
    Success(QueryResult),
    Error(String),
}

/// Handle for one accepted submission. Pass it back to
/// [`SearchController::resolve`] when the query finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub sequence: u64,
    pub domain: String,
}

/// Drives one search at a time: Idle → Loading → Success | Error.
///
/// Each accepted submission gets a new sequence number and only the latest
/// one may resolve, so an older answer can never overwrite a newer state.
#[derive(Debug)]
pub struct SearchController {
    state: SearchState,
    latest_sequence: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            state: SearchState::Idle,
            latest_sequence: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SearchState::Loading { .. })
    }

    pub fn primary(&self) -> Option<&DomainInfo> {
        match &self.state {
            SearchState::Success(result) => Some(&result.primary),
            _ => None,
        }
    }

    pub fn suggestions(&self) -> &[DomainInfo] {
        match &self.state {
            SearchState::Success(result) => &result.suggestions,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SearchState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Accept a search. Returns `None` for blank input or while a search is
    /// already loading; in both cases nothing changes.
    pub fn submit(&mut self, input: &str) -> Option<SearchTicket> {
        let domain = normalize_domain_input(input)?;
        if self.is_loading() {
            tracing::debug!("Ignoring '{}' while a search is loading", domain);
            return None;
        }

        self.latest_sequence += 1;
        self.state = SearchState::Loading {
            domain: domain.to_string(),
        };

        Some(SearchTicket {
            sequence: self.latest_sequence,
            domain: domain.to_string(),
        })
    }

    /// Apply the outcome of a ticket. Returns `false` when the ticket is
    /// stale and the outcome was dropped.
    pub fn resolve(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<QueryResult, QueryError>,
    ) -> bool {
        if ticket.sequence != self.latest_sequence || !self.is_loading() {
            tracing::debug!(
                "Dropping stale result #{} for '{}'",
                ticket.sequence,
                ticket.domain
            );
            return false;
        }

        self.state = match outcome {
            Ok(result) => SearchState::Success(result),
            Err(e) => {
                let message = e.to_string();
                if message.trim().is_empty() {
                    SearchState::Error(UNKNOWN_ERROR_MESSAGE.to_string())
                } else {
                    SearchState::Error(message)
                }
            }
        };
        true
    }

    /// Submit, run the query, apply the result. `false` if the input was
    /// not accepted.
    pub async fn search<C>(&mut self, checker: &C, input: &str) -> bool
    where
        C: AvailabilityChecker + ?Sized,
    {
        let Some(ticket) = self.submit(input) else {
            return false;
        };

        let outcome = checker.check_availability(&ticket.domain).await;
        self.resolve(ticket, outcome)
    }

    /// Back to Idle. A search still in flight will be ignored when it lands.
    pub fn reset(&mut self) {
        self.latest_sequence += 1;
        self.state = SearchState::Idle;
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{CheckerError, QUERY_FAILURE_MESSAGE};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockChecker {
        calls: AtomicUsize,
        fail: bool,
    }

    impl MockChecker {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AvailabilityChecker for MockChecker {
        async fn check_availability(&self, domain: &str) -> Result<QueryResult, QueryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(QueryError::from(CheckerError::EmptyResponseError));
            }
            Ok(sample_result(domain))
        }
    }

    fn sample_result(domain: &str) -> QueryResult {
        QueryResult {
            primary: DomainInfo::available(domain),
            suggestions: (1..=5)
                .map(|i| DomainInfo::available(format!("alt{}.io", i)))
                .collect(),
        }
    }

    #[test]
    fn test_starts_idle() {
        let controller = SearchController::new();
        assert_eq!(controller.state(), &SearchState::Idle);
        assert!(controller.primary().is_none());
        assert!(controller.suggestions().is_empty());
        assert!(controller.error().is_none());
    }

    #[test]
    fn test_blank_input_never_queries() {
        let checker = MockChecker::new(false);
        let mut controller = SearchController::new();

        let accepted = tokio_test::block_on(controller.search(&checker, "   \t"));

        assert!(!accepted);
        assert_eq!(checker.calls(), 0);
        assert_eq!(controller.state(), &SearchState::Idle);
    }

    #[test]
    fn test_submit_trims_and_enters_loading() {
        let mut controller = SearchController::new();

        let ticket = controller.submit("  example.com  ").unwrap();

        assert_eq!(ticket.domain, "example.com");
        assert_eq!(
            controller.state(),
            &SearchState::Loading {
                domain: "example.com".to_string()
            }
        );
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let checker = MockChecker::new(false);
        let mut controller = SearchController::new();

        let first = controller.submit("first.com").unwrap();
        assert!(controller.submit("second.com").is_none());

        let outcome = tokio_test::block_on(checker.check_availability(&first.domain));
        assert!(controller.resolve(first, outcome));

        assert_eq!(checker.calls(), 1);
        assert_eq!(controller.primary().unwrap().domain_name, "first.com");
    }

    #[tokio::test]
    async fn test_success_stores_result() {
        let checker = MockChecker::new(false);
        let mut controller = SearchController::new();

        assert!(controller.search(&checker, "myawesomewebsite.com").await);

        assert!(!controller.is_loading());
        assert_eq!(
            controller.primary().unwrap().domain_name,
            "myawesomewebsite.com"
        );
        assert_eq!(controller.suggestions().len(), 5);
        assert_eq!(controller.suggestions()[0].domain_name, "alt1.io");
    }

    #[tokio::test]
    async fn test_failure_clears_previous_result() {
        let ok = MockChecker::new(false);
        let failing = MockChecker::new(true);
        let mut controller = SearchController::new();

        controller.search(&ok, "good.com").await;
        assert!(controller.primary().is_some());

        controller.search(&failing, "bad.com").await;

        assert_eq!(controller.error(), Some(QUERY_FAILURE_MESSAGE));
        assert!(controller.primary().is_none());
        assert!(controller.suggestions().is_empty());
    }

    #[tokio::test]
    async fn test_new_search_after_error() {
        let failing = MockChecker::new(true);
        let ok = MockChecker::new(false);
        let mut controller = SearchController::new();

        controller.search(&failing, "bad.com").await;
        let ticket = controller.submit("retry.com").unwrap();
        assert!(controller.error().is_none());

        let outcome = ok.check_availability(&ticket.domain).await;
        controller.resolve(ticket, outcome);
        assert_eq!(controller.primary().unwrap().domain_name, "retry.com");
    }

    #[test]
    fn test_stale_resolution_is_dropped() {
        let mut controller = SearchController::new();

        let old = controller.submit("slow.com").unwrap();
        controller.reset();
        let new = controller.submit("fast.com").unwrap();
        assert!(new.sequence > old.sequence);

        assert!(controller.resolve(new, Ok(sample_result("fast.com"))));
        assert!(!controller.resolve(old, Ok(sample_result("slow.com"))));

        assert_eq!(controller.primary().unwrap().domain_name, "fast.com");
    }

    #[test]
    fn test_resolution_after_reset_is_dropped() {
        let mut controller = SearchController::new();

        let ticket = controller.submit("example.com").unwrap();
        controller.reset();

        assert!(!controller.resolve(ticket, Ok(sample_result("example.com"))));
        assert_eq!(controller.state(), &SearchState::Idle);
    }
}
