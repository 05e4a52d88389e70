//! Denormalized copies of templates embedded in programs and meal plans.
//!
//! Every node carries its own identity, allocated when the snapshot is
//! built. Downstream records (workout logs, meal logs) point at these ids,
//! so they must stay stable for as long as the snapshot is persisted.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::template::{ExerciseDetails, MealDetails, Visibility};

/// Label used for a meal type whose template no longer exists.
pub const DEFAULT_MEAL_TYPE_LABEL: &str = "Meal";

/// Fields shared by every day and item snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NodeHeader {
    pub id: Uuid,
    /// The template this node was copied from, if any.
    pub template_id: Option<Uuid>,
    pub slug: String,
    pub locale: Option<String>,
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    #[serde(flatten)]
    pub header: NodeHeader,
    pub exercises: Vec<ExerciseSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseSnapshot {
    #[serde(flatten)]
    pub header: NodeHeader,
    #[serde(flatten)]
    pub details: ExerciseDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealDaySnapshot {
    #[serde(flatten)]
    pub header: NodeHeader,
    pub meals: Vec<MealSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealSnapshot {
    #[serde(flatten)]
    pub header: NodeHeader,
    #[serde(flatten)]
    pub details: MealDetails,
    #[serde(rename = "type")]
    pub meal_type: Option<MealTypeSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealTypeSnapshot {
    /// Fresh identity, or the dangling reference id for a placeholder.
    pub id: Option<Uuid>,
    pub template_id: Option<Uuid>,
    pub slug: String,
    pub locale: Option<String>,
    pub label: String,
    pub visibility: Visibility,
}
