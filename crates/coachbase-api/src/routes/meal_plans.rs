use axum::extract::{Path, State};
use axum::{Extension, Json};
use uuid::Uuid;

use coachbase_core::ids::RandomIds;
use coachbase_core::models::meal_plan::{CreateMealPlanInput, MealPlan, UpdateMealPlanInput};
use coachbase_core::session::Session;
use coachbase_core::validate;
use coachbase_snapshot::{CurrentDocument, Lookup, SnapshotBuilder, SnapshotUpdate};

use super::require_author;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn create_meal_plan(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(input): Json<CreateMealPlanInput>,
) -> Result<Json<MealPlan>, ApiError> {
    require_author(&session)?;
    input.validate()?;
    let locale = validate::required_locale(input.meal_plan.locale.as_deref())?;

    let builder = SnapshotBuilder::for_meal_plans(
        &state.store,
        &state.store,
        &state.store,
        &RandomIds,
    );
    let days = builder
        .build(
            &session,
            input.days.as_deref(),
            input.day_ids.as_deref(),
            Some(&locale),
        )
        .await?;

    let meal_plan = MealPlan::new(
        Uuid::new_v4(),
        session.user_id,
        &input.meal_plan,
        Some(locale),
        days,
        jiff::Timestamp::now(),
    );
    state.store.save(&meal_plan).await?;

    tracing::info!(
        meal_plan_id = %meal_plan.meta.id,
        days = meal_plan.days.len(),
        "meal plan created"
    );
    Ok(Json(meal_plan))
}

/// Every meal plan visible to the caller.
pub async fn list_meal_plans(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<Vec<MealPlan>>, ApiError> {
    let meal_plans = state.store.list::<MealPlan>(&session).await?;
    Ok(Json(meal_plans))
}

pub async fn get_meal_plan(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
) -> Result<Json<MealPlan>, ApiError> {
    Lookup::<MealPlan>::get(&state.store, id, &session)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("meal plan not found: {id}")))
}

pub async fn update_meal_plan(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateMealPlanInput>,
) -> Result<Json<MealPlan>, ApiError> {
    require_author(&session)?;
    input.validate()?;

    let current =
        CurrentDocument::<MealPlan>::new(&state.store, "meal plan", id, &session);
    if current.get().await?.is_none() {
        return Err(ApiError::NotFound(format!("meal plan not found: {id}")));
    }

    let builder = SnapshotBuilder::for_meal_plans(
        &state.store,
        &state.store,
        &state.store,
        &RandomIds,
    );
    let days = builder
        .resolve_for_update(
            &session,
            SnapshotUpdate {
                inline: input.days.as_deref(),
                template_ids: input.day_ids.as_deref(),
                locale: input.meal_plan.locale.as_deref(),
            },
            &current,
        )
        .await?;

    let Some(mut meal_plan) = current.into_document().await? else {
        return Err(ApiError::NotFound(format!("meal plan not found: {id}")));
    };
    let rebuilt = days.is_some();
    meal_plan.apply_update(input.meal_plan, days, jiff::Timestamp::now());
    state.store.save(&meal_plan).await?;

    tracing::info!(meal_plan_id = %id, rebuilt, "meal plan updated");
    Ok(Json(meal_plan))
}
