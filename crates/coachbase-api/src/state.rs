use coachbase_storage::store::S3Store;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: S3Store,
}
