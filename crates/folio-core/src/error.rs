use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("ContentError: {0}")]
    Content(#[from] ContentError),
    #[error("RelayError: {0}")]
    Relay(#[from] RelayError),
    #[error("ValidationError: {0}")]
    Validation(#[from] ValidationError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Output failed: {0}")]
    Output(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not readable at {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },
    #[error("Content parse error: {message}")]
    Parse { message: String },
    #[error("Unknown section '{0}'")]
    UnknownSection(String),
}

/// Failures of the mail-relay call. Only the fact of failure reaches the
/// user; the detail is for logs.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Relay is not configured: missing {field}")]
    NotConfigured { field: String },
    #[error("Relay request failed: {message}")]
    Transport { message: String },
    #[error("Relay rejected message: {status} {message}")]
    Rejected { status: u16, message: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: String },
    #[error("Invalid email '{email}': {reason}")]
    InvalidEmail { email: String, reason: String },
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "warning",
            ErrorSeverity::Low => "note",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Content(_) => ErrorSeverity::High,
            AppError::Relay(relay_error) => match relay_error {
                RelayError::NotConfigured { .. } => ErrorSeverity::High,
                // 4xx means the account settings are wrong, not the relay
                RelayError::Rejected { status, .. } if *status < 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Validation(_) => ErrorSeverity::Low,
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Cli(_) => ErrorSeverity::Low,
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Validation(err) => err.to_string(),
            AppError::Relay(RelayError::NotConfigured { field }) => format!(
                "Contact relay is not configured ({}). Run 'folio config set' or set FOLIO_RELAY_* variables",
                field
            ),
            AppError::Storage(StorageError::ConfigDirNotFound) => {
                "Could not locate a home directory for the configuration file".to_string()
            }
            _ => format!("{}", self),
        }
    }
}
