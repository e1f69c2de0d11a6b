//! Error types for the task store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// The task file exists but could not be read
    #[error("{0}")]
    Read(#[source] std::io::Error),

    /// The task file is not a valid task list
    #[error("{0}")]
    Parse(#[source] serde_json::Error),

    /// Writing the task file failed
    #[error("{0}")]
    Write(#[source] std::io::Error),

    /// Encoding the task list failed
    #[error("{0}")]
    Serialize(#[source] serde_json::Error),

    /// Missing or malformed user input
    #[error("{0}")]
    Validation(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Task ID not found: {0}")]
    NotFound(u32),

    /// The user answered no to a confirmation prompt
    #[error("cancelled")]
    Declined,
}

pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = TaskError::NotFound(5);
        assert_eq!(err.to_string(), "Task ID not found: 5");
    }

    #[test]
    fn test_unknown_command_error() {
        let err = TaskError::UnknownCommand("frobnicate".to_string());
        assert_eq!(err.to_string(), "Unknown command: frobnicate");
    }

    #[test]
    fn test_validation_error_is_message() {
        let err = TaskError::Validation("Please provide a task title.".to_string());
        assert_eq!(err.to_string(), "Please provide a task title.");
    }

    #[test]
    fn test_parse_error_shows_cause() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let expected = json_err.to_string();
        assert_eq!(TaskError::Parse(json_err).to_string(), expected);
    }
}
