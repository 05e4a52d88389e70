use std::future;

use uuid::Uuid;

use coachbase_core::ids::IdAllocator;
use coachbase_core::models::input::{ExerciseInput, NodeInput, SessionInput};
use coachbase_core::models::snapshot::{ExerciseSnapshot, NodeHeader, SessionSnapshot};
use coachbase_core::models::template::{ExerciseTemplate, SessionTemplate, TemplateMeta};
use coachbase_core::session::Session;
use coachbase_core::slug::fallback;

use crate::builder::SnapshotBuilder;
use crate::error::SnapshotError;
use crate::ids::TreeIds;
use crate::kind::{SnapshotKind, Vocabulary};
use crate::lookup::{BoxFuture, Lookup};

/// Program trees: sessions made of exercises.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramKind;

impl SnapshotKind for ProgramKind {
    const VOCABULARY: Vocabulary = Vocabulary {
        day: fallback::SESSION,
        item: fallback::EXERCISE,
    };

    type DayInput = SessionInput;
    type ItemInput = ExerciseInput;
    type DayTemplate = SessionTemplate;
    type ItemTemplate = ExerciseTemplate;
    type Day = SessionSnapshot;
    type Item = ExerciseSnapshot;

    fn day_input(day: &SessionInput) -> (&NodeInput, &[ExerciseInput]) {
        (&day.node, day.exercises.as_slice())
    }

    fn item_input(item: &ExerciseInput) -> &NodeInput {
        &item.node
    }

    fn day_template(day: &SessionTemplate) -> (&TemplateMeta, &[Uuid]) {
        (&day.meta, day.exercise_ids.as_slice())
    }

    fn item_template(item: &ExerciseTemplate) -> &TemplateMeta {
        &item.meta
    }

    fn assemble_day(header: NodeHeader, exercises: Vec<ExerciseSnapshot>) -> SessionSnapshot {
        SessionSnapshot { header, exercises }
    }

    fn item_from_input(
        &self,
        header: NodeHeader,
        input: &ExerciseInput,
        _ids: &mut TreeIds<'_>,
    ) -> ExerciseSnapshot {
        ExerciseSnapshot {
            header,
            details: input.details.clone(),
        }
    }

    fn item_from_template<'a>(
        &'a self,
        header: NodeHeader,
        template: ExerciseTemplate,
        _session: &'a Session,
        _ids: &'a dyn IdAllocator,
    ) -> BoxFuture<'a, Result<ExerciseSnapshot, SnapshotError>> {
        Box::pin(future::ready(Ok(ExerciseSnapshot {
            header,
            details: template.details,
        })))
    }
}

impl<'a> SnapshotBuilder<'a, ProgramKind> {
    pub fn for_programs(
        sessions: &'a dyn Lookup<SessionTemplate>,
        exercises: &'a dyn Lookup<ExerciseTemplate>,
        ids: &'a dyn IdAllocator,
    ) -> Self {
        Self::new(ProgramKind, sessions, exercises, ids)
    }
}
