/// Errors raised while extracting keyword trends.
#[derive(Debug, thiserror::Error)]
pub enum TrendError {
    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("keyword {keyword:?} was selected but no record contains it")]
    InternalConsistency { keyword: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrendError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrendError>;
