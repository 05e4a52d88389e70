use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::input::MealDayInput;
use super::parent::{NewParent, ParentMeta, ParentUpdate};
use super::snapshot::MealDaySnapshot;
use crate::error::CoreError;
use crate::slug::fallback;
use crate::validate;

/// A nutrition plan assigned to an athlete: an ordered list of meal day
/// snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MealPlan {
    #[serde(flatten)]
    pub meta: ParentMeta,
    pub days: Vec<MealDaySnapshot>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateMealPlanInput {
    #[serde(flatten)]
    pub meal_plan: NewParent,
    /// Inline days; take priority over `day_ids`.
    pub days: Option<Vec<MealDayInput>>,
    pub day_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMealPlanInput {
    #[serde(flatten)]
    pub meal_plan: ParentUpdate,
    pub days: Option<Vec<MealDayInput>>,
    pub day_ids: Option<Vec<Uuid>>,
}

impl MealPlan {
    pub fn new(
        id: Uuid,
        created_by: Uuid,
        input: &NewParent,
        locale: Option<String>,
        days: Vec<MealDaySnapshot>,
        now: jiff::Timestamp,
    ) -> Self {
        Self {
            meta: ParentMeta::new(id, created_by, input, locale, fallback::MEAL_PLAN, now),
            days,
        }
    }

    pub fn apply_update(
        &mut self,
        update: ParentUpdate,
        days: Option<Vec<MealDaySnapshot>>,
        now: jiff::Timestamp,
    ) {
        self.meta.apply(update, fallback::MEAL_PLAN, now);
        if let Some(days) = days {
            self.days = days;
        }
    }
}

impl CreateMealPlanInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate::non_blank("label", &self.meal_plan.label)?;
        if let Some(days) = &self.days {
            validate::meal_days(days)?;
        }
        Ok(())
    }
}

impl UpdateMealPlanInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(label) = &self.meal_plan.label {
            validate::non_blank("label", label)?;
        }
        if let Some(days) = &self.days {
            validate::meal_days(days)?;
        }
        Ok(())
    }
}
