use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GdapError {
    #[error("Could not find file {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error reading {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No dependencies found")]
    NoDependencies,

    #[error("Error writing to {}: {source}", .path.display())]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is out of sync with the build file", .path.display())]
    OutOfSync { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

impl GdapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GdapError::FileNotFound { .. }
            | GdapError::ReadError { .. }
            | GdapError::NoDependencies => ErrorCategory::Input,
            GdapError::PatternError(_)
            | GdapError::ConfigValidationError { .. }
            | GdapError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            GdapError::OutputWriteError { .. }
            | GdapError::OutOfSync { .. } => ErrorCategory::Output,
        }
    }

    /// Message printed on the console.
    pub fn user_friendly_message(&self) -> String {
        match self {
            GdapError::NoDependencies => "Warning: No dependencies found!".to_string(),
            GdapError::ReadError { .. } | GdapError::OutputWriteError { .. } => self.to_string(),
            other => format!("Error: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GdapError::FileNotFound { .. } => {
                "Pass the build file path as the first argument or run from the project root"
            }
            GdapError::ReadError { .. } => "Check that the build file is readable UTF-8 text",
            GdapError::NoDependencies => {
                "Make sure the build file declares implementation dependencies in a dependencies { } block"
            }
            GdapError::PatternError(_) => "Check the exclusion rules in the configuration file",
            GdapError::ConfigValidationError { .. } | GdapError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            GdapError::OutputWriteError { .. } => {
                "Check that the output directory exists and is writable"
            }
            GdapError::OutOfSync { .. } => "Run gdap-sync without --check to regenerate the descriptor",
        }
    }
}

pub type Result<T> = std::result::Result<T, GdapError>;
