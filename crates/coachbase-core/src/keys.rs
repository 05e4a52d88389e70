//! Storage key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of documents in the Coachbase bucket.

use uuid::Uuid;

pub const PROGRAMS_PREFIX: &str = "programs/";
pub const MEAL_PLANS_PREFIX: &str = "meal-plans/";
pub const SESSION_TEMPLATES_PREFIX: &str = "templates/sessions/";
pub const EXERCISES_PREFIX: &str = "templates/exercises/";
pub const MEAL_DAY_TEMPLATES_PREFIX: &str = "templates/meal-days/";
pub const MEALS_PREFIX: &str = "templates/meals/";
pub const MEAL_TYPES_PREFIX: &str = "templates/meal-types/";

pub fn program(id: Uuid) -> String {
    format!("{PROGRAMS_PREFIX}{id}.json")
}

pub fn meal_plan(id: Uuid) -> String {
    format!("{MEAL_PLANS_PREFIX}{id}.json")
}

pub fn session_template(id: Uuid) -> String {
    format!("{SESSION_TEMPLATES_PREFIX}{id}.json")
}

pub fn exercise(id: Uuid) -> String {
    format!("{EXERCISES_PREFIX}{id}.json")
}

pub fn meal_day_template(id: Uuid) -> String {
    format!("{MEAL_DAY_TEMPLATES_PREFIX}{id}.json")
}

pub fn meal(id: Uuid) -> String {
    format!("{MEALS_PREFIX}{id}.json")
}

pub fn meal_type(id: Uuid) -> String {
    format!("{MEAL_TYPES_PREFIX}{id}.json")
}
