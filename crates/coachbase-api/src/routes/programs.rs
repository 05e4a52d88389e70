use axum::extract::{Path, State};
use axum::{Extension, Json};
use uuid::Uuid;

use coachbase_core::ids::RandomIds;
use coachbase_core::models::program::{CreateProgramInput, Program, UpdateProgramInput};
use coachbase_core::session::Session;
use coachbase_core::validate;
use coachbase_snapshot::{CurrentDocument, Lookup, SnapshotBuilder, SnapshotUpdate};

use super::require_author;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_program(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(input): Json<CreateProgramInput>,
) -> Result<Json<Program>, ApiError> {
    require_author(&session)?;
    input.validate()?;
    let locale = validate::required_locale(input.program.locale.as_deref())?;

    let builder = SnapshotBuilder::for_programs(&state.store, &state.store, &RandomIds);
    let sessions = builder
        .build(
            &session,
            input.sessions.as_deref(),
            input.session_ids.as_deref(),
            Some(&locale),
        )
        .await?;

    let program = Program::new(
        Uuid::new_v4(),
        session.user_id,
        &input.program,
        Some(locale),
        sessions,
        jiff::Timestamp::now(),
    );
    state.store.save(&program).await?;

    tracing::info!(
        program_id = %program.meta.id,
        sessions = program.sessions.len(),
        "program created"
    );
    Ok(Json(program))
}

/// Every program visible to the caller.
pub async fn list_programs(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<Vec<Program>>, ApiError> {
    let programs = state.store.list::<Program>(&session).await?;
    Ok(Json(programs))
}

pub async fn get_program(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> Result<Json<Program>, ApiError> {
    Lookup::<Program>::get(&state.store, id, &session)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("program not found: {id}")))
}

pub async fn update_program(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateProgramInput>,
) -> Result<Json<Program>, ApiError> {
    require_author(&session)?;
    input.validate()?;

    let current = CurrentDocument::<Program>::new(&state.store, "program", id, &session);
    if current.get().await?.is_none() {
        return Err(ApiError::NotFound(format!("program not found: {id}")));
    }

    let builder = SnapshotBuilder::for_programs(&state.store, &state.store, &RandomIds);
    let sessions = builder
        .resolve_for_update(
            &session,
            SnapshotUpdate {
                inline: input.sessions.as_deref(),
                template_ids: input.session_ids.as_deref(),
                locale: input.program.locale.as_deref(),
            },
            &current,
        )
        .await?;

    let Some(mut program) = current.into_document().await? else {
        return Err(ApiError::NotFound(format!("program not found: {id}")));
    };
    let rebuilt = sessions.is_some();
    program.apply_update(input.program, sessions, jiff::Timestamp::now());
    state.store.save(&program).await?;

    tracing::info!(program_id = %id, rebuilt, "program updated");
    Ok(Json(program))
}
