pub mod controller;
pub mod query_service;
pub mod transformer;

pub use crate::domain::model::{DomainInfo, QueryResult};
pub use crate::domain::ports::{AvailabilityChecker, ConfigProvider, ContentGenerator, GenerationRequest};
pub use crate::utils::error::Result;
