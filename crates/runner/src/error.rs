use crashgauge_ports::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("max_reading_age_hours must be a positive number of hours, got {0}")]
    InvalidMaxAge(i64),

    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, LoadError>;
