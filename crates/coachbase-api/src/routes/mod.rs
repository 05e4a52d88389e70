pub mod health;
pub mod meal_plans;
pub mod programs;

use coachbase_core::session::Session;

use crate::error::ApiError;

/// Athletes read their plans; only coaches and admins write them.
pub(crate) fn require_author(session: &Session) -> Result<(), ApiError> {
    if session.can_author() {
        Ok(())
    } else {
        Err(ApiError::Forbidden(format!(
            "role {} cannot author plans",
            session.role
        )))
    }
}
