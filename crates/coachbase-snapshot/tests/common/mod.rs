#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use uuid::Uuid;

use coachbase_core::models::template::{
    ExerciseDetails, ExerciseTemplate, MealDayTemplate, MealDetails, MealTemplate, MealType,
    SessionTemplate, TemplateMeta, Visibility,
};
use coachbase_core::session::{Role, Session};
use coachbase_snapshot::{BoxFuture, Lookup, LookupError};

/// In-memory lookup with optional per-id latency and failure injection.
pub struct MemoryLookup<T> {
    docs: HashMap<Uuid, T>,
    delays: HashMap<Uuid, Duration>,
    failing: Option<Uuid>,
    calls: AtomicUsize,
}

impl<T> MemoryLookup<T> {
    pub fn new(docs: impl IntoIterator<Item = (Uuid, T)>) -> Self {
        Self {
            docs: docs.into_iter().collect(),
            delays: HashMap::new(),
            failing: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new([])
    }

    pub fn with_delay(mut self, id: Uuid, delay: Duration) -> Self {
        self.delays.insert(id, delay);
        self
    }

    pub fn failing_on(mut self, id: Uuid) -> Self {
        self.failing = Some(id);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T: Clone + Send + Sync> Lookup<T> for MemoryLookup<T> {
    fn get<'a>(
        &'a self,
        id: Uuid,
        _session: &'a Session,
    ) -> BoxFuture<'a, Result<Option<T>, LookupError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delays.get(&id) {
                tokio::time::sleep(*delay).await;
            }
            if self.failing == Some(id) {
                return Err(LookupError::Backend("connection reset".to_string()));
            }
            Ok(self.docs.get(&id).cloned())
        })
    }
}

pub fn coach() -> Session {
    Session {
        user_id: Uuid::new_v4(),
        role: Role::Coach,
    }
}

pub fn meta(id: Uuid, label: &str) -> TemplateMeta {
    let now = jiff::Timestamp::now();
    TemplateMeta {
        id,
        slug: None,
        locale: None,
        label: label.to_string(),
        description: None,
        created_by: Uuid::new_v4(),
        visibility: Visibility::Private,
        created_at: now,
        updated_at: now,
    }
}

pub fn session_template(id: Uuid, label: &str, exercise_ids: &[Uuid]) -> SessionTemplate {
    SessionTemplate {
        meta: meta(id, label),
        exercise_ids: exercise_ids.to_vec(),
    }
}

pub fn exercise(id: Uuid, label: &str) -> ExerciseTemplate {
    ExerciseTemplate {
        meta: meta(id, label),
        details: ExerciseDetails {
            series: Some(4),
            repetitions: Some("8-10".to_string()),
            rest_seconds: Some(90),
            ..ExerciseDetails::default()
        },
    }
}

pub fn meal_day_template(id: Uuid, label: &str, meal_ids: &[Uuid]) -> MealDayTemplate {
    MealDayTemplate {
        meta: meta(id, label),
        meal_ids: meal_ids.to_vec(),
    }
}

pub fn meal(id: Uuid, label: &str, type_id: Option<Uuid>) -> MealTemplate {
    MealTemplate {
        meta: meta(id, label),
        details: MealDetails {
            calories: Some(520.0),
            proteins: Some(32.0),
            foods: vec!["oats".to_string(), "whey".to_string()],
            ..MealDetails::default()
        },
        type_id,
    }
}

pub fn meal_type(id: Uuid, label: &str, visibility: Visibility) -> MealType {
    let mut meta = meta(id, label);
    meta.visibility = visibility;
    MealType { meta }
}
