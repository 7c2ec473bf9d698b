//! Error types for the console proxy

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Boxed error used by type-erased instrumentation targets.
pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A level name outside the known set
    #[error("Unknown log level: '{value}'")]
    UnknownLevel { value: String },

    /// A console method name outside the recognized set
    #[error("Unknown console method: '{name}'")]
    UnknownMethod { name: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A sink failed to write its output
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LoggerError {
    /// Create an unknown level error
    pub fn unknown_level(value: impl Into<String>) -> Self {
        LoggerError::UnknownLevel {
            value: value.into(),
        }
    }

    /// Create an unknown method error
    pub fn unknown_method(name: impl Into<String>) -> Self {
        LoggerError::UnknownMethod { name: name.into() }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::unknown_level("loud");
        assert!(matches!(err, LoggerError::UnknownLevel { .. }));

        let err = LoggerError::config("LeveledSink", "already initialized");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::unknown_method("print");
        assert_eq!(err.to_string(), "Unknown console method: 'print'");

        let err = LoggerError::config("global sink", "already initialized");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for global sink: already initialized"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(err.to_string().contains("pipe closed"));
    }
}
