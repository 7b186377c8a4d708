use thiserror::Error;

/// Message shown to the user for any failed availability query.
pub const QUERY_FAILURE_MESSAGE: &str =
    "Failed to check domain availability. The AI may be busy, please try again.";

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Model returned no content")]
    EmptyResponseError,

    #[error("Model response does not match the schema: {message}")]
    SchemaError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CheckerError {
    pub fn schema(message: impl Into<String>) -> Self {
        Self::SchemaError {
            message: message.into(),
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingConfigError { field } => {
                format!("Missing configuration value: {}", field)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration for {}: {}", field, reason)
            }
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            Self::IoError(e) => format!("Could not read a file: {}", e),
            _ => QUERY_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingConfigError { field } if field == "api_key" => {
                "Set GEMINI_API_KEY (or API_KEY), pass --api-key, or add api_key under [gemini] in the config file"
            }
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => "Check the command line flags and the config file",
            Self::IoError(_) => "Check that the config file path exists and is readable",
            _ => "Try again in a moment",
        }
    }
}

/// Category of a failed availability query. Never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryFailureKind {
    /// Network failure, non-success status, or an empty model answer.
    Transport,
    /// The model text was not JSON.
    Malformed,
    /// JSON that does not have the requested shape.
    Schema,
}

/// The single error surfaced by the availability query service.
///
/// Its display text is always [`QUERY_FAILURE_MESSAGE`]; the cause is kept as
/// the error source for logging.
#[derive(Error, Debug)]
#[error("{}", QUERY_FAILURE_MESSAGE)]
pub struct QueryError {
    kind: QueryFailureKind,
    #[source]
    source: CheckerError,
}

impl QueryError {
    pub fn kind(&self) -> QueryFailureKind {
        self.kind
    }

    pub fn cause(&self) -> &CheckerError {
        &self.source
    }
}

impl From<CheckerError> for QueryError {
    fn from(source: CheckerError) -> Self {
        let kind = match &source {
            CheckerError::SerializationError(e) if e.is_syntax() || e.is_eof() => {
                QueryFailureKind::Malformed
            }
            CheckerError::SerializationError(_) | CheckerError::SchemaError { .. } => {
                QueryFailureKind::Schema
            }
            _ => QueryFailureKind::Transport,
        };
        Self { kind, source }
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_hides_cause() {
        let parse_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = QueryError::from(CheckerError::from(parse_error));

        assert_eq!(err.to_string(), QUERY_FAILURE_MESSAGE);
        assert_eq!(err.kind(), QueryFailureKind::Malformed);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_query_error_kinds() {
        let schema = QueryError::from(CheckerError::schema("missing primary"));
        assert_eq!(schema.kind(), QueryFailureKind::Schema);

        let type_mismatch = serde_json::from_str::<bool>("\"yes\"").unwrap_err();
        assert_eq!(
            QueryError::from(CheckerError::from(type_mismatch)).kind(),
            QueryFailureKind::Schema
        );

        let empty = QueryError::from(CheckerError::EmptyResponseError);
        assert_eq!(empty.kind(), QueryFailureKind::Transport);
    }

    #[test]
    fn test_missing_api_key_suggestion() {
        let err = CheckerError::MissingConfigError {
            field: "api_key".to_string(),
        };
        assert!(err.recovery_suggestion().contains("GEMINI_API_KEY"));
        assert_eq!(err.user_friendly_message(), "Missing configuration value: api_key");
    }

    #[test]
    fn test_config_errors_point_at_flags_and_file() {
        let errors = [
            CheckerError::MissingConfigError {
                field: "endpoint".to_string(),
            },
            CheckerError::InvalidConfigValueError {
                field: "endpoint".to_string(),
                value: "ftp://x".to_string(),
                reason: "Unsupported URL scheme: ftp".to_string(),
            },
            CheckerError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: "expected `]`".to_string(),
            },
        ];

        for err in &errors {
            assert_eq!(
                err.recovery_suggestion(),
                "Check the command line flags and the config file"
            );
            assert_ne!(err.user_friendly_message(), QUERY_FAILURE_MESSAGE);
        }
        assert_eq!(
            CheckerError::schema("x").user_friendly_message(),
            QUERY_FAILURE_MESSAGE
        );
    }
}
