use thiserror::Error;
use uuid::Uuid;

/// Failure reported by a lookup collaborator. "Not found" is not an error:
/// lookups return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("undecodable document: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("{kind} lookup failed for {id}: {source}")]
    Lookup {
        kind: &'static str,
        id: Uuid,
        #[source]
        source: LookupError,
    },
}

impl SnapshotError {
    pub fn lookup(kind: &'static str, id: Uuid, source: LookupError) -> Self {
        Self::Lookup { kind, id, source }
    }
}
