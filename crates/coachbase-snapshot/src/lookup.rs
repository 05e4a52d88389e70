use std::future::Future;
use std::pin::Pin;

use coachbase_core::session::Session;
use uuid::Uuid;

use crate::error::LookupError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Fetches one document by id on behalf of a session.
///
/// Implementations return `Ok(None)` when the document does not exist or
/// is not visible to the session, and reserve `Err` for real failures.
pub trait Lookup<T>: Send + Sync {
    fn get<'a>(
        &'a self,
        id: Uuid,
        session: &'a Session,
    ) -> BoxFuture<'a, Result<Option<T>, LookupError>>;
}
