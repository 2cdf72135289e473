use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("draft store I/O error for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("draft {key} is not a draft envelope or record")]
    Malformed { key: String },

    #[error("draft autosave needs a Tokio runtime")]
    NoRuntime,
}
