use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Search request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Search provider returned HTTP {status}")]
    SearchProviderError { status: u16 },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' is invalid: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) | EtlError::SearchProviderError { .. } => ErrorCategory::Network,
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EtlError::CsvError(_)
            | EtlError::SerializationError(_)
            | EtlError::ProcessingError { .. }
            | EtlError::ValidationError { .. } => ErrorCategory::Data,
            EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤通常可以重試
            EtlError::ApiError(_) => ErrorSeverity::Medium,
            EtlError::SearchProviderError { status } if *status == 429 || *status >= 500 => {
                ErrorSeverity::Medium
            }
            EtlError::SearchProviderError { .. } => ErrorSeverity::High,
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::ValidationError { .. } => ErrorSeverity::High,
            EtlError::CsvError(_)
            | EtlError::SerializationError(_)
            | EtlError::ProcessingError { .. } => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::ApiError(_) => {
                "Check network connectivity and the search endpoint, then try again".to_string()
            }
            EtlError::SearchProviderError { status: 400 } => {
                "The search provider rejected the request; check the engine id (cx)".to_string()
            }
            EtlError::SearchProviderError { status: 401 | 403 } => {
                "Check that GOOGLE_CSE_KEY is valid and the Custom Search API is enabled"
                    .to_string()
            }
            EtlError::SearchProviderError { status: 429 } => {
                "Daily search quota exhausted; wait before retrying".to_string()
            }
            EtlError::SearchProviderError { .. } => {
                "The search provider is unavailable; try again later".to_string()
            }
            EtlError::MissingConfigError { field } => {
                format!("Provide '{}' via a flag, environment variable or config file", field)
            }
            EtlError::InvalidConfigValueError { field, .. }
            | EtlError::ConfigValidationError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            EtlError::ConfigError { .. } => "Check the configuration file syntax".to_string(),
            EtlError::ValidationError { .. } => "Please type a course name".to_string(),
            EtlError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            EtlError::CsvError(_)
            | EtlError::SerializationError(_)
            | EtlError::ProcessingError { .. } => {
                "Re-run with --verbose and report the failing query".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the search provider: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Could not build the course report: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
