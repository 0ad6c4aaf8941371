use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("The following files were not found: {}", .0.join(", "))]
    MissingFiles(Vec<String>),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("File {0} must contain a list of JSON objects")]
    InvalidJsonRoot(String),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid numeric value '{value}' for field '{field}'")]
    NumericParse { field: &'static str, value: String },

    #[error("Salary computation overflowed: {hours} hours at rate {rate}")]
    SalaryOverflow { hours: i64, rate: i64 },

    #[error("Unknown report type '{requested}'. Available reports: {}", .available.join(", "))]
    UnknownReport {
        requested: String,
        available: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, PayrollError>;
