//! Inline content authored directly in a create/update request, as opposed
//! to content referenced by template id.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::template::{ExerciseDetails, MealDetails, Visibility};

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NodeInput {
    /// A snapshot id previously issued to the client, kept when a node that
    /// is still being edited is re-submitted.
    pub id: Option<Uuid>,
    pub template_id: Option<Uuid>,
    pub slug: Option<String>,
    pub locale: Option<String>,
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionInput {
    #[serde(flatten)]
    pub node: NodeInput,
    #[serde(default)]
    pub exercises: Vec<ExerciseInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExerciseInput {
    #[serde(flatten)]
    pub node: NodeInput,
    #[serde(flatten)]
    pub details: ExerciseDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealDayInput {
    #[serde(flatten)]
    pub node: NodeInput,
    #[serde(default)]
    pub meals: Vec<MealInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealInput {
    #[serde(flatten)]
    pub node: NodeInput,
    #[serde(flatten)]
    pub details: MealDetails,
    #[serde(rename = "type")]
    pub meal_type: Option<MealTypeInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealTypeInput {
    pub id: Option<Uuid>,
    pub template_id: Option<Uuid>,
    pub slug: Option<String>,
    pub locale: Option<String>,
    /// Blank falls back to the owning meal's label.
    #[serde(default)]
    pub label: String,
    pub visibility: Option<Visibility>,
}
