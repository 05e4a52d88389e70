//! Fields shared by the documents that embed a snapshot tree: programs and
//! meal plans.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::locale::normalize_locale;
use crate::patch::Patch;
use crate::slug::build_slug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParentMeta {
    pub id: Uuid,
    pub slug: String,
    pub locale: Option<String>,
    pub label: String,
    pub description: Option<String>,
    /// The coach who authored the document.
    pub created_by: Uuid,
    /// The athlete it is assigned to, if any.
    pub user_id: Option<Uuid>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Scalar fields of a create request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewParent {
    pub slug: Option<String>,
    pub locale: Option<String>,
    pub label: String,
    pub description: Option<String>,
    pub user_id: Option<Uuid>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

/// Scalar fields of a partial update. `null` clears the nullable fields;
/// a missing field leaves them untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParentUpdate {
    pub slug: Option<String>,
    pub locale: Option<String>,
    pub label: Option<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub user_id: Patch<Uuid>,
    #[serde(default)]
    pub start_date: Patch<Date>,
    #[serde(default)]
    pub end_date: Patch<Date>,
}

impl ParentMeta {
    pub fn new(
        id: Uuid,
        created_by: Uuid,
        input: &NewParent,
        locale: Option<String>,
        fallback_word: &str,
        now: jiff::Timestamp,
    ) -> Self {
        let label = input.label.trim().to_string();
        Self {
            id,
            slug: build_slug(input.slug.as_deref(), Some(&label), fallback_word),
            locale,
            label,
            description: input.description.clone(),
            created_by,
            user_id: input.user_id,
            start_date: input.start_date,
            end_date: input.end_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply scalar changes. The slug is rebuilt whenever the slug or label
    /// changes, falling back to the persisted label.
    pub fn apply(&mut self, update: ParentUpdate, fallback_word: &str, now: jiff::Timestamp) {
        let slug_changed = update.slug.is_some() || update.label.is_some();

        if let Some(label) = update.label {
            self.label = label.trim().to_string();
        }
        if slug_changed {
            self.slug = build_slug(update.slug.as_deref(), Some(&self.label), fallback_word);
        }
        if let Some(locale) = normalize_locale(update.locale.as_deref()) {
            self.locale = Some(locale);
        }
        update.description.apply_to(&mut self.description);
        update.user_id.apply_to(&mut self.user_id);
        update.start_date.apply_to(&mut self.start_date);
        update.end_date.apply_to(&mut self.end_date);
        self.updated_at = now;
    }
}
