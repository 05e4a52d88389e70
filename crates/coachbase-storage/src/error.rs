use thiserror::Error;

use coachbase_snapshot::LookupError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {key}")]
    NotFound { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 ListObjectsV2 error: {0}")]
    ListObjects(String),
}

impl From<StorageError> for LookupError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Serialization(e) => LookupError::Decode(e),
            other => LookupError::Backend(other.to_string()),
        }
    }
}
