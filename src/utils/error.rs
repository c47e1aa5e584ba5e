use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Unexpected payload: {message}")]
    PayloadError { message: String },

    #[error("Record {index} has no string field '{field}'")]
    MissingFieldError { index: usize, field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LoaderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LoaderError::ApiError(_) | LoaderError::HttpStatusError { .. } => ErrorCategory::Network,
            LoaderError::SerializationError(_)
            | LoaderError::PayloadError { .. }
            | LoaderError::MissingFieldError { .. } => ErrorCategory::Data,
            LoaderError::TomlError(_)
            | LoaderError::ConfigError { .. }
            | LoaderError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LoaderError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Timeouts, refused connections and 5xx usually go away on their own
            LoaderError::ApiError(_) => ErrorSeverity::Medium,
            LoaderError::HttpStatusError { status, .. } if *status >= 500 || *status == 429 => {
                ErrorSeverity::Medium
            }
            LoaderError::HttpStatusError { .. } => ErrorSeverity::High,
            LoaderError::SerializationError(_)
            | LoaderError::PayloadError { .. }
            | LoaderError::MissingFieldError { .. } => ErrorSeverity::High,
            LoaderError::TomlError(_)
            | LoaderError::ConfigError { .. }
            | LoaderError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            LoaderError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.severity() == ErrorSeverity::Medium
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LoaderError::ApiError(e) if e.is_timeout() => {
                "The request timed out; raise --timeout-seconds or try again later".to_string()
            }
            LoaderError::ApiError(_) => {
                "Check network connectivity and that the endpoint host is reachable".to_string()
            }
            LoaderError::HttpStatusError { status, .. } if *status >= 500 || *status == 429 => {
                "The remote API is unavailable right now; try again later".to_string()
            }
            LoaderError::HttpStatusError { .. } => {
                "Verify the endpoint URL points at a public collection resource".to_string()
            }
            LoaderError::SerializationError(_) | LoaderError::PayloadError { .. } => {
                "The endpoint must return a JSON array of objects".to_string()
            }
            LoaderError::MissingFieldError { field, .. } => {
                format!("Pick a field present as a string on every record (current: '{}')", field)
            }
            LoaderError::TomlError(_) => "Fix the syntax of the TOML configuration file".to_string(),
            LoaderError::ConfigError { .. } | LoaderError::InvalidConfigValueError { .. } => {
                "Correct the configuration value and run again".to_string()
            }
            LoaderError::IoError(_) => "Check file paths and permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch the list: {}", self),
            ErrorCategory::Data => format!("The API response could not be used: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoaderError>;
