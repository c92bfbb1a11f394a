use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RSEBMError {
    #[error("{0}")]
    Error(String),
    #[error("Date is the wrong type! Expected a \"yyyy-mm-dd\" string or an integer day of year, got {0}")]
    InvalidDateType(String),
    #[error("Day of year must be between 1 and 366, got {0}")]
    DayOfYearOutOfRange(i64),
    #[error("Latitude must be between -90 and 90 degrees, got {0}")]
    LatitudeOutOfRange(f64),
    #[error("A latitude grid needs at least 2 points, got {0}")]
    InvalidResolution(usize),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience type for `Result<T, RSEBMError>`.
pub type RSEBMResult<T> = Result<T, RSEBMError>;

impl From<toml::de::Error> for RSEBMError {
    fn from(value: toml::de::Error) -> Self {
        RSEBMError::Config(value.to_string())
    }
}

impl From<toml::ser::Error> for RSEBMError {
    fn from(value: toml::ser::Error) -> Self {
        RSEBMError::Config(value.to_string())
    }
}

impl From<std::io::Error> for RSEBMError {
    fn from(value: std::io::Error) -> Self {
        RSEBMError::Config(value.to_string())
    }
}
