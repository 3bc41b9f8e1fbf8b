use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AppError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::IoError(_) => 1,
            AppError::ConfigError { .. } | AppError::ValidationError { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
