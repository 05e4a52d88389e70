use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use coachbase_core::session::Session;

use crate::error::ApiError;

pub const USER_HEADER: &str = "x-coachbase-user";
pub const ROLE_HEADER: &str = "x-coachbase-role";

/// Session middleware.
///
/// The API gateway authorizer verifies the caller and forwards its identity
/// in `x-coachbase-user` / `x-coachbase-role`. On success, inserts the
/// [`Session`] into request extensions for handlers to use.
pub async fn require_session(mut req: Request, next: Next) -> Response {
    // Header borrows end here; `req` is moved into `next.run` below.
    let (user, role) = {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        (header(USER_HEADER), header(ROLE_HEADER))
    };

    let (Some(user), Some(role)) = (user, role) else {
        return ApiError::Unauthorized("missing session headers".to_string()).into_response();
    };

    let session = match Session::parse(&user, &role) {
        Ok(session) => session,
        Err(e) => return ApiError::Unauthorized(e.to_string()).into_response(),
    };

    req.extensions_mut().insert(session);
    next.run(req).await
}
