use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Record format error: {message}")]
    FormatError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Format,
    Io,
    Config,
}

impl MergeError {
    pub fn format(message: impl Into<String>) -> Self {
        MergeError::FormatError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MergeError::NetworkError(_) => ErrorCategory::Network,
            MergeError::FormatError { .. } => ErrorCategory::Format,
            MergeError::IoError(_) => ErrorCategory::Io,
            MergeError::ConfigError { .. } | MergeError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// Process exit code for a run aborted by this error. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Format => 3,
            ErrorCategory::Io => 4,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MergeError::NetworkError(e) if e.is_timeout() => {
                "Timed out while downloading element data".to_string()
            }
            MergeError::NetworkError(e) => match e.status() {
                Some(status) => format!("Server answered with HTTP {}", status),
                None => "Could not download element data".to_string(),
            },
            MergeError::FormatError { message } => {
                format!("Downloaded data is not a usable TLE: {}", message)
            }
            MergeError::IoError(e) => format!("Could not write the output file: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check connectivity and the source URLs, or raise --timeout-secs"
            }
            ErrorCategory::Format => {
                "Check that --single-url returns a two- or three-line TLE for one object"
            }
            ErrorCategory::Io => "Check that the output directory exists and is writable",
            ErrorCategory::Config => "Check the command line flags and the --config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
