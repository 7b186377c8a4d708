pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod presentation;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::GeminiClient;
pub use app::{OutputMode, SearchSession};
pub use config::{ModelSettings, SettingOverrides, TomlConfig};
pub use crate::core::controller::{SearchController, SearchState, SearchTicket};
pub use crate::core::query_service::AvailabilityQueryService;
pub use domain::model::{DomainInfo, QueryResult};
pub use utils::error::{CheckerError, QueryError, QueryFailureKind, Result};
