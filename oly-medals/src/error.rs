/// Error types for loading medal data
use thiserror::Error;

/// Main error type for medal data loading
#[derive(Error, Debug)]
pub enum MedalError {
    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required column is not present in the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The `Year` field could not be read as an integer
    #[error("Invalid year {value:?} on line {line}")]
    InvalidYear { line: u64, value: String },
}

/// Type alias for Results using MedalError
pub type Result<T> = std::result::Result<T, MedalError>;
