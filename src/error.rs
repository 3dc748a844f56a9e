use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CheckerError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid domain count on line {line}: {value:?}")]
    InvalidCount { line: usize, value: String },

    #[error("Unexpected end of input: expected {expected} domains, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl From<std::io::Error> for CheckerError {
    fn from(err: std::io::Error) -> Self {
        CheckerError::Io(err.to_string())
    }
}

/// Errors raised while reading configuration from the environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid worker count: {0}")]
    InvalidWorkers(String),

    #[error("Invalid blocklist format: {0}")]
    InvalidFormat(String),

    #[error("Invalid verdict label: {0}")]
    InvalidLabel(String),
}

pub type Result<T> = std::result::Result<T, CheckerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckerConfig;

    #[test]
    fn test_config_errors_convert() {
        let config = CheckerConfig {
            workers: 10_000,
            ..Default::default()
        };

        let err: CheckerError = config.validate().unwrap_err().into();
        assert!(matches!(
            err,
            CheckerError::Config(ConfigError::InvalidWorkers(_))
        ));
        assert!(err.to_string().starts_with("Configuration error: Invalid worker count"));
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CheckerError = io.into();
        assert!(matches!(err, CheckerError::Io(ref msg) if msg == "gone"));
    }
}
