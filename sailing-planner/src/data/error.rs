//! Catalog loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading the sailing catalog.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The data file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON, or a value has the wrong JSON type
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document does not have the expected structure
    #[error("invalid catalog: {0}")]
    Shape(String),

    /// A field is present but its value is unusable
    #[error("invalid {field}: {reason}")]
    Value { field: String, reason: String },
}

impl DataError {
    pub(crate) fn shape(message: impl Into<String>) -> Self {
        DataError::Shape(message.into())
    }

    pub(crate) fn value(field: impl Into<String>, reason: impl ToString) -> Self {
        DataError::Value {
            field: field.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DataError::shape("sailings[3] missing key: arrival_date");
        assert_eq!(
            err.to_string(),
            "invalid catalog: sailings[3] missing key: arrival_date"
        );

        let err = DataError::value("rates[0].rate", "must not be negative");
        assert_eq!(err.to_string(), "invalid rates[0].rate: must not be negative");

        let err = DataError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "failed to read missing.json: no such file");
    }
}
