use crate::domain::model::QueryResult;
use crate::utils::error::{QueryError, Result};
use async_trait::async_trait;

/// Where the model lives and how to authenticate against it.
pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn api_key(&self) -> &str;
}

/// A single structured-generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

/// External endpoint that turns a prompt into schema-constrained text.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

/// The availability query as seen by the search controller.
#[async_trait]
pub trait AvailabilityChecker: Send + Sync {
    async fn check_availability(&self, domain: &str) -> std::result::Result<QueryResult, QueryError>;
}
