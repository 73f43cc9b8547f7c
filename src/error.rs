use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid regimen field '{field}': {reason}")]
    InvalidRegimen { field: &'static str, reason: String },

    #[error("Invalid time window: {0}")]
    InvalidWindow(String),

    #[error("Invalid regimen #{index} ('{name}'): {source}")]
    Config {
        index: usize,
        name: String,
        #[source]
        source: Box<DoseError>,
    },
}

impl DoseError {
    pub(crate) fn regimen(field: &'static str, reason: impl Into<String>) -> Self {
        DoseError::InvalidRegimen {
            field,
            reason: reason.into(),
        }
    }

    /// One-based position of the offending regimen in a configuration file.
    pub fn regimen_index(&self) -> Option<usize> {
        match self {
            DoseError::Config { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Name of the offending regimen field, if this is a regimen validation error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            DoseError::InvalidRegimen { field, .. } => Some(*field),
            DoseError::Config { source, .. } => source.field(),
            _ => None,
        }
    }
}

pub type DoseResult<T> = Result<T, DoseError>;
