use crate::domain::model::{ClubId, PlayerId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Player {id} not found in directory")]
    UnresolvedPlayer { id: PlayerId },

    #[error("Club {id} not found in directory")]
    UnresolvedClub { id: ClubId },

    #[error("Invalid team id: '{value}'")]
    InvalidTeamId { value: String },

    #[error("Squad fetch failed: {message}")]
    FetchFailed { message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Directory,
    Network,
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

impl TransferError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TransferError::InvalidInput { .. } | TransferError::InvalidTeamId { .. } => {
                ErrorCategory::Input
            }
            TransferError::UnresolvedPlayer { .. } | TransferError::UnresolvedClub { .. } => {
                ErrorCategory::Directory
            }
            TransferError::FetchFailed { .. } | TransferError::Http(_) => ErrorCategory::Network,
            TransferError::ConfigError { .. } | TransferError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            TransferError::Csv(_) | TransferError::Io(_) | TransferError::Serialization(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Directory => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TransferError::InvalidInput { .. } => "Invalid parameters".to_string(),
            TransferError::InvalidTeamId { .. } => "Invalid team id number".to_string(),
            TransferError::UnresolvedPlayer { id } => {
                format!("Unknown player id {}", id)
            }
            TransferError::UnresolvedClub { id } => format!("Unknown club id {}", id),
            TransferError::FetchFailed { .. } | TransferError::Http(_) => {
                "Could not retrieve the squad from the game site".to_string()
            }
            TransferError::ConfigError { .. } | TransferError::InvalidConfigValue { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => format!("Internal error: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Pass exactly 15 distinct player ids and a non-negative numeric budget"
            }
            ErrorCategory::Directory => {
                "Check that the players and clubs files cover every id in the squad"
            }
            ErrorCategory::Network => "Check the team id and the scraper base_url, then retry",
            ErrorCategory::Configuration => "Fix the configuration file and run again",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }
}

pub type Result<T> = std::result::Result<T, TransferError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_map_to_boundary_messages() {
        let err = TransferError::InvalidInput {
            field: "squad".to_string(),
            reason: "expected 15 players, got 14".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.user_friendly_message(), "Invalid parameters");

        let err = TransferError::InvalidTeamId {
            value: "abc".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Invalid team id number");
    }

    #[test]
    fn test_severity_ordering() {
        let fetch = TransferError::FetchFailed {
            message: "timeout".to_string(),
        };
        let io = TransferError::Io(std::io::Error::other("disk"));
        assert!(fetch.severity() < io.severity());
    }
}
