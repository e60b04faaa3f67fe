use thiserror::Error;

/// The main error type for devtask operations
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Task '{0}' not found")]
    TaskNotFound(String),

    #[error("Failed to execute command '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' failed with exit code {}", display_code(.code))]
    ExternalCommandFailed { command: String, code: Option<i32> },
}

impl TaskError {
    /// Whether the error stems from how devtask was invoked rather than from a child process
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            TaskError::TaskNotFound(_) | TaskError::Config(_) | TaskError::Yaml(_)
        )
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

/// Result type alias for devtask operations
pub type TaskResult<T> = Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_command_failed_message() {
        let err = TaskError::ExternalCommandFailed {
            command: "go get -u -v github.com/gorilla/websocket".to_string(),
            code: Some(3),
        };
        assert_eq!(
            err.to_string(),
            "Command 'go get -u -v github.com/gorilla/websocket' failed with exit code 3"
        );
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_signal_terminated_message() {
        let err = TaskError::ExternalCommandFailed {
            command: "go run main.go".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_task_not_found_is_usage_error() {
        let err = TaskError::TaskNotFound("deploy".to_string());
        assert_eq!(err.to_string(), "Task 'deploy' not found");
        assert!(err.is_usage_error());
    }
}
