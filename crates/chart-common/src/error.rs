//! Error types for heatmap chart rendering.

use thiserror::Error;

/// Result type alias using ChartError.
pub type ChartResult<T> = Result<T, ChartError>;

/// Primary error type for chart rendering operations.
#[derive(Debug, Error)]
pub enum ChartError {
    // === Validation Errors ===
    #[error("heatmap has no data to render")]
    EmptyGrid,

    #[error("heatmap columns must all be the same length: column {column} has {actual} values, expected {expected}")]
    RaggedGrid {
        column: usize,
        expected: usize,
        actual: usize,
    },

    #[error("number of row labels ({labels}) != number of rows ({rows})")]
    RowLabelCountMismatch { labels: usize, rows: usize },

    #[error("number of column labels ({labels}) != number of columns ({columns})")]
    ColLabelCountMismatch { labels: usize, columns: usize },

    // === Backend Errors ===
    #[error("failed to acquire drawing surface: {0}")]
    Surface(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("image encoding failed: {0}")]
    Encode(String),

    // === Infrastructure Errors ===
    #[error("failed to write rendered output: {0}")]
    Output(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ChartError {
    /// Validation errors are detected before any drawing and are recoverable
    /// by fixing the input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ChartError::EmptyGrid
                | ChartError::RaggedGrid { .. }
                | ChartError::RowLabelCountMismatch { .. }
                | ChartError::ColLabelCountMismatch { .. }
        )
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Config(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(ChartError::EmptyGrid.is_validation());
        assert!(ChartError::RaggedGrid {
            column: 1,
            expected: 3,
            actual: 2
        }
        .is_validation());
        assert!(!ChartError::Surface("boom".to_string()).is_validation());
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "sink closed");
        assert!(!ChartError::Output(io_err).is_validation());
    }

    #[test]
    fn test_error_messages() {
        let err = ChartError::RowLabelCountMismatch { labels: 2, rows: 3 };
        assert_eq!(err.to_string(), "number of row labels (2) != number of rows (3)");
    }
}
