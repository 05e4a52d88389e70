//! Coach-authored templates. Programs and meal plans never reference these
//! at read time: they are copied into snapshots when a plan is built.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::session::Session;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

/// Fields shared by every template kind.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TemplateMeta {
    pub id: Uuid,
    pub slug: Option<String>,
    pub locale: Option<String>,
    pub label: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    #[serde(default)]
    pub visibility: Visibility,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl TemplateMeta {
    /// Public templates are shared; private ones belong to their author.
    pub fn visible_to(&self, session: &Session) -> bool {
        self.visibility == Visibility::Public
            || self.created_by == session.user_id
            || session.is_admin()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionTemplate {
    #[serde(flatten)]
    pub meta: TemplateMeta,
    #[serde(default)]
    pub exercise_ids: Vec<Uuid>,
}

/// Exercise prescription, copied verbatim into snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseDetails {
    pub series: Option<u32>,
    pub repetitions: Option<String>,
    pub charge: Option<String>,
    pub rest_seconds: Option<u32>,
    pub tempo: Option<String>,
    pub instructions: Option<String>,
    /// Storage keys of illustrating pictures or videos.
    #[serde(default)]
    pub media: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseTemplate {
    #[serde(flatten)]
    pub meta: TemplateMeta,
    #[serde(flatten)]
    pub details: ExerciseDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealDayTemplate {
    #[serde(flatten)]
    pub meta: TemplateMeta,
    #[serde(default)]
    pub meal_ids: Vec<Uuid>,
}

/// Nutrition facts and preparation, copied verbatim into snapshots.
/// Macros are expressed in grams, energy in kcal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealDetails {
    pub calories: Option<f64>,
    pub proteins: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub lipids: Option<f64>,
    pub fibers: Option<f64>,
    #[serde(default)]
    pub foods: Vec<String>,
    pub instructions: Option<String>,
    #[serde(default)]
    pub media: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealTemplate {
    #[serde(flatten)]
    pub meta: TemplateMeta,
    #[serde(flatten)]
    pub details: MealDetails,
    /// Reference to a [`MealType`]; may dangle once the type is deleted.
    pub type_id: Option<Uuid>,
}

/// Classification of a meal (breakfast, snack, ...).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealType {
    #[serde(flatten)]
    pub meta: TemplateMeta,
}
