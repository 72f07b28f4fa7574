use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Storage,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PageError::HttpError(_) => ErrorCategory::Network,
            PageError::IoError(_) => ErrorCategory::Storage,
            PageError::ConfigValidationError { .. }
            | PageError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PageError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PageError::HttpError(_) => "Check network connectivity and the remote URL",
            PageError::IoError(_) => "Check that the path exists and is readable/writable",
            PageError::ConfigValidationError { .. } => "Fix the TOML syntax in the config file",
            PageError::InvalidConfigValueError { .. } => {
                "Correct the value in the config file and try again"
            }
            PageError::ServerError { .. } => "Check that the address is free and try again",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PageError::HttpError(_) => "Could not reach a remote service".to_string(),
            PageError::IoError(e) => format!("File access failed: {}", e),
            PageError::ConfigValidationError { field, message } => {
                format!("Config file is invalid ({}): {}", field, message)
            }
            PageError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config field '{}' is invalid: {}", field, reason)
            }
            PageError::ServerError { message } => format!("Server failed: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
