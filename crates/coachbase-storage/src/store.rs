use aws_sdk_s3::Client;
use futures::future::try_join_all;
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use coachbase_core::keys;
use coachbase_core::models::meal_plan::MealPlan;
use coachbase_core::models::parent::ParentMeta;
use coachbase_core::models::program::Program;
use coachbase_core::models::template::{
    ExerciseTemplate, MealDayTemplate, MealTemplate, MealType, SessionTemplate,
};
use coachbase_core::session::Session;
use coachbase_snapshot::{BoxFuture, Lookup, LookupError};

use crate::documents;
use crate::error::StorageError;
use crate::objects;

/// A document kind persisted as one JSON object per id.
pub trait StoredDocument: Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: &'static str;
    const PREFIX: &'static str;

    fn key(id: Uuid) -> String;

    fn id(&self) -> Uuid;

    /// Authorization predicate applied by lookups. Documents a session may
    /// not see resolve exactly like missing ones.
    fn visible_to(&self, session: &Session) -> bool;
}

/// S3 document store shared by route handlers and snapshot building.
#[derive(Clone)]
pub struct S3Store {
    pub client: Client,
    pub bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub async fn load<T: StoredDocument>(&self, id: Uuid) -> Result<Option<T>, StorageError> {
        documents::load_document(&self.client, &self.bucket, &T::key(id)).await
    }

    pub async fn save<T: StoredDocument>(&self, document: &T) -> Result<(), StorageError> {
        let key = T::key(document.id());
        documents::save_document(&self.client, &self.bucket, &key, document).await?;
        tracing::debug!(kind = T::KIND, key = %key, "document saved");
        Ok(())
    }

    /// Every document of one kind the session may see, in key order.
    /// Objects deleted between listing and loading are skipped.
    pub async fn list<T: StoredDocument>(&self, session: &Session) -> Result<Vec<T>, StorageError> {
        let keys = objects::list_keys(&self.client, &self.bucket, T::PREFIX).await?;

        let loaded = try_join_all(
            keys.iter()
                .map(|key| documents::load_document::<T>(&self.client, &self.bucket, key)),
        )
        .await?;
        let visible: Vec<T> = loaded
            .into_iter()
            .flatten()
            .filter(|d| d.visible_to(session))
            .collect();

        tracing::debug!(
            kind = T::KIND,
            listed = keys.len(),
            visible = visible.len(),
            "documents listed"
        );
        Ok(visible)
    }
}

impl<T: StoredDocument> Lookup<T> for S3Store {
    fn get<'a>(
        &'a self,
        id: Uuid,
        session: &'a Session,
    ) -> BoxFuture<'a, Result<Option<T>, LookupError>> {
        Box::pin(async move {
            let document = self.load::<T>(id).await?;
            Ok(document.filter(|d| d.visible_to(session)))
        })
    }
}

/// Parents are visible to their author, their assigned athlete and admins.
fn parent_visible_to(meta: &ParentMeta, session: &Session) -> bool {
    session.is_admin()
        || meta.created_by == session.user_id
        || meta.user_id == Some(session.user_id)
}

impl StoredDocument for Program {
    const KIND: &'static str = "program";
    const PREFIX: &'static str = keys::PROGRAMS_PREFIX;

    fn key(id: Uuid) -> String {
        keys::program(id)
    }

    fn id(&self) -> Uuid {
        self.meta.id
    }

    fn visible_to(&self, session: &Session) -> bool {
        parent_visible_to(&self.meta, session)
    }
}

impl StoredDocument for MealPlan {
    const KIND: &'static str = "meal_plan";
    const PREFIX: &'static str = keys::MEAL_PLANS_PREFIX;

    fn key(id: Uuid) -> String {
        keys::meal_plan(id)
    }

    fn id(&self) -> Uuid {
        self.meta.id
    }

    fn visible_to(&self, session: &Session) -> bool {
        parent_visible_to(&self.meta, session)
    }
}

macro_rules! template_document {
    ($ty:ty, $kind:literal, $prefix:path, $key:path) => {
        impl StoredDocument for $ty {
            const KIND: &'static str = $kind;
            const PREFIX: &'static str = $prefix;

            fn key(id: Uuid) -> String {
                $key(id)
            }

            fn id(&self) -> Uuid {
                self.meta.id
            }

            fn visible_to(&self, session: &Session) -> bool {
                self.meta.visible_to(session)
            }
        }
    };
}

template_document!(
    SessionTemplate,
    "session_template",
    keys::SESSION_TEMPLATES_PREFIX,
    keys::session_template
);
template_document!(ExerciseTemplate, "exercise", keys::EXERCISES_PREFIX, keys::exercise);
template_document!(
    MealDayTemplate,
    "meal_day_template",
    keys::MEAL_DAY_TEMPLATES_PREFIX,
    keys::meal_day_template
);
template_document!(MealTemplate, "meal", keys::MEALS_PREFIX, keys::meal);
template_document!(MealType, "meal_type", keys::MEAL_TYPES_PREFIX, keys::meal_type);
