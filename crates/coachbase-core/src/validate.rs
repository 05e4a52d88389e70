//! Request-level checks run before any snapshot is built.

use crate::error::CoreError;
use crate::locale::normalize_locale;
use crate::models::input::{MealDayInput, SessionInput};

pub fn non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::BlankLabel(field.to_string()));
    }
    Ok(())
}

/// A create request must name the document locale; it is the last resort
/// of every node's locale fallback.
pub fn required_locale(locale: Option<&str>) -> Result<String, CoreError> {
    normalize_locale(locale).ok_or_else(|| CoreError::MissingField("locale".to_string()))
}

pub fn sessions(sessions: &[SessionInput]) -> Result<(), CoreError> {
    for (i, session) in sessions.iter().enumerate() {
        non_blank(&format!("sessions[{i}].label"), &session.node.label)?;
        for (j, exercise) in session.exercises.iter().enumerate() {
            non_blank(
                &format!("sessions[{i}].exercises[{j}].label"),
                &exercise.node.label,
            )?;
        }
    }
    Ok(())
}

pub fn meal_days(days: &[MealDayInput]) -> Result<(), CoreError> {
    for (i, day) in days.iter().enumerate() {
        non_blank(&format!("days[{i}].label"), &day.node.label)?;
        for (j, meal) in day.meals.iter().enumerate() {
            non_blank(&format!("days[{i}].meals[{j}].label"), &meal.node.label)?;
        }
    }
    Ok(())
}
