use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input '{input}': {reason}")]
    InvalidInputError { input: String, reason: String },

    #[error("Unknown catalog item: {name}")]
    UnknownItemError { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DashboardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashboardError::IoError(_) => ErrorCategory::Io,
            DashboardError::SerializationError(_) | DashboardError::CsvError(_) => {
                ErrorCategory::Data
            }
            DashboardError::ConfigError { .. }
            | DashboardError::ConfigValidationError { .. }
            | DashboardError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DashboardError::InvalidInputError { .. } | DashboardError::UnknownItemError { .. } => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DashboardError::IoError(_) => {
                "Check that the file exists and that you have permission to read or write it"
                    .to_string()
            }
            DashboardError::SerializationError(_) => {
                concat!(
                    "Each session line must be a JSON change event, ",
                    "e.g. {\"type\":\"slider\",\"value\":70}"
                )
                .to_string()
            }
            DashboardError::CsvError(_) => "Check the export destination path".to_string(),
            DashboardError::ConfigError { .. } | DashboardError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            DashboardError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration file", field)
            }
            DashboardError::InvalidInputError { .. } => {
                "Quantities are written as NAME=N with a whole number N".to_string()
            }
            DashboardError::UnknownItemError { .. } => {
                "Use one of the item names listed in the catalog".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DashboardError::IoError(e) => format!("Could not access a file: {}", e),
            DashboardError::UnknownItemError { name } => {
                format!("'{}' is not part of the catalog", name)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
