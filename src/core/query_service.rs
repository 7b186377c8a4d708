use crate::core::transformer;
use crate::domain::model::QueryResult;
use crate::domain::ports::{AvailabilityChecker, ContentGenerator};
use crate::domain::prompt;
use crate::utils::error::{QueryError, Result};
use async_trait::async_trait;

/// Asks the generative model about one domain. One round trip per call,
/// no retries, no caching.
pub struct AvailabilityQueryService<G: ContentGenerator> {
    generator: G,
}

impl<G: ContentGenerator> AvailabilityQueryService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    async fn query(&self, domain: &str) -> Result<QueryResult> {
        let request = prompt::availability_request(domain);
        tracing::debug!("Requesting availability for '{}'", domain);

        let text = self.generator.generate(&request).await?;
        tracing::debug!("Model returned {} bytes", text.len());

        transformer::transform(&text, domain)
    }
}

#[async_trait]
impl<G: ContentGenerator> AvailabilityChecker for AvailabilityQueryService<G> {
    async fn check_availability(&self, domain: &str) -> std::result::Result<QueryResult, QueryError> {
        self.query(domain).await.map_err(|e| {
            tracing::error!("Error calling model API: {}", e);
            QueryError::from(e)
        })
    }
}
