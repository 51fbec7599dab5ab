use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed station line: expected {expected} characters, found {found}")]
    MalformedLine { expected: usize, found: usize },

    #[error("Invalid {field} value: '{value}'")]
    NumericParse { field: &'static str, value: String },

    #[error("Line {line_number}: {reason}")]
    Record {
        line_number: usize,
        reason: Box<ProcessingError>,
    },
}

impl ProcessingError {
    /// Attach the 1-based line number of the offending record.
    pub fn at_line(self, line_number: usize) -> Self {
        ProcessingError::Record {
            line_number,
            reason: Box::new(self),
        }
    }

    /// The line number carried by a [`ProcessingError::Record`], if any.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ProcessingError::Record { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }

    /// True for a length mismatch, the one failure a caller may choose to skip.
    pub fn is_malformed_line(&self) -> bool {
        match self {
            ProcessingError::MalformedLine { .. } => true,
            ProcessingError::Record { reason, .. } => reason.is_malformed_line(),
            _ => false,
        }
    }
}
