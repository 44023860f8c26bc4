use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Short hint printed next to the error by the CLI.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::IoError(_) => "Check that the file exists and is readable",
            CalcError::SerializationError(_) | CalcError::CsvError(_) => {
                "Try a different --format"
            }
            CalcError::ConfigValidationError { .. } => "Fix the TOML syntax in the config file",
            CalcError::InvalidConfigValueError { .. } => {
                "Pass a value inside the allowed range or use --clamp"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
