use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::input::SessionInput;
use super::parent::{NewParent, ParentMeta, ParentUpdate};
use super::snapshot::SessionSnapshot;
use crate::error::CoreError;
use crate::slug::fallback;
use crate::validate;

/// A training program assigned to an athlete: an ordered list of session
/// snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Program {
    #[serde(flatten)]
    pub meta: ParentMeta,
    pub sessions: Vec<SessionSnapshot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateProgramInput {
    #[serde(flatten)]
    pub program: NewParent,
    /// Inline sessions; take priority over `session_ids`.
    pub sessions: Option<Vec<SessionInput>>,
    pub session_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProgramInput {
    #[serde(flatten)]
    pub program: ParentUpdate,
    pub sessions: Option<Vec<SessionInput>>,
    pub session_ids: Option<Vec<Uuid>>,
}

impl Program {
    pub fn new(
        id: Uuid,
        created_by: Uuid,
        input: &NewParent,
        locale: Option<String>,
        sessions: Vec<SessionSnapshot>,
        now: jiff::Timestamp,
    ) -> Self {
        Self {
            meta: ParentMeta::new(id, created_by, input, locale, fallback::PROGRAM, now),
            sessions,
        }
    }

    /// Apply a partial update. `sessions` is the rebuilt tree, or `None` to
    /// keep the persisted one untouched.
    pub fn apply_update(
        &mut self,
        update: ParentUpdate,
        sessions: Option<Vec<SessionSnapshot>>,
        now: jiff::Timestamp,
    ) {
        self.meta.apply(update, fallback::PROGRAM, now);
        if let Some(sessions) = sessions {
            self.sessions = sessions;
        }
    }
}

impl CreateProgramInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::non_blank("label", &self.program.label)?;
        if let Some(sessions) = &self.sessions {
            validate::sessions(sessions)?;
        }
        Ok(())
    }
}

impl UpdateProgramInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(label) = &self.program.label {
            validate::non_blank("label", label)?;
        }
        if let Some(sessions) = &self.sessions {
            validate::sessions(sessions)?;
        }
        Ok(())
    }
}
