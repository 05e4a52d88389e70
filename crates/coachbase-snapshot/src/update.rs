//! Partial-update policy for snapshot trees.
//!
//! An update either replaces the whole tree (new inline days or new template
//! ids) or leaves it untouched. Nodes are never patched individually.

use tokio::sync::OnceCell;
use uuid::Uuid;

use coachbase_core::locale::normalize_locale;
use coachbase_core::models::meal_plan::MealPlan;
use coachbase_core::models::program::Program;
use coachbase_core::session::Session;

use crate::builder::SnapshotBuilder;
use crate::error::SnapshotError;
use crate::kind::SnapshotKind;
use crate::lookup::Lookup;

/// A document that embeds a snapshot tree.
pub trait ParentDocument: Send + Sync {
    fn locale(&self) -> Option<&str>;
}

impl ParentDocument for Program {
    fn locale(&self) -> Option<&str> {
        self.meta.locale.as_deref()
    }
}

impl ParentDocument for MealPlan {
    fn locale(&self) -> Option<&str> {
        self.meta.locale.as_deref()
    }
}

/// The persisted version of the document being updated, fetched lazily and
/// at most once per request.
pub struct CurrentDocument<'a, D> {
    lookup: &'a dyn Lookup<D>,
    kind: &'static str,
    id: Uuid,
    session: &'a Session,
    cell: OnceCell<Option<D>>,
}

impl<'a, D: ParentDocument> CurrentDocument<'a, D> {
    pub fn new(lookup: &'a dyn Lookup<D>, kind: &'static str, id: Uuid, session: &'a Session) -> Self {
        Self {
            lookup,
            kind,
            id,
            session,
            cell: OnceCell::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub async fn get(&self) -> Result<Option<&D>, SnapshotError> {
        let document = self
            .cell
            .get_or_try_init(|| async {
                tracing::debug!(kind = self.kind, id = %self.id, "fetching current document");
                self.lookup
                    .get(self.id, self.session)
                    .await
                    .map_err(|source| SnapshotError::lookup(self.kind, self.id, source))
            })
            .await?;
        Ok(document.as_ref())
    }

    pub async fn locale(&self) -> Result<Option<&str>, SnapshotError> {
        Ok(self.get().await?.and_then(ParentDocument::locale))
    }

    /// Take the fetched document, fetching it first if nothing asked yet.
    pub async fn into_document(self) -> Result<Option<D>, SnapshotError> {
        self.get().await?;
        Ok(self.cell.into_inner().flatten())
    }
}

/// The snapshot-related part of an update request.
pub struct SnapshotUpdate<'r, I> {
    /// Present (even empty) means "rebuild from inline content".
    pub inline: Option<&'r [I]>,
    /// Present (even empty) means "rebuild from these templates".
    pub template_ids: Option<&'r [Uuid]>,
    pub locale: Option<&'r str>,
}

impl<K: SnapshotKind> SnapshotBuilder<'_, K> {
    /// Decide what happens to the persisted tree on update.
    ///
    /// Returns `None` when the request carries neither inline days nor
    /// template ids: the persisted tree must be left exactly as it is.
    /// Otherwise the tree is rebuilt in full, with the default locale taken
    /// from the request or else from the persisted document.
    pub async fn resolve_for_update<D: ParentDocument>(
        &self,
        session: &Session,
        update: SnapshotUpdate<'_, K::DayInput>,
        current: &CurrentDocument<'_, D>,
    ) -> Result<Option<Vec<K::Day>>, SnapshotError> {
        if update.inline.is_none() && update.template_ids.is_none() {
            return Ok(None);
        }

        let default_locale = match normalize_locale(update.locale) {
            Some(locale) => Some(locale),
            None => normalize_locale(current.locale().await?),
        };

        if let Some(days) = update.inline {
            return Ok(Some(self.from_inputs(days, default_locale.as_deref())));
        }

        let ids = update.template_ids.unwrap_or_default();
        let days = self
            .from_templates(session, ids, default_locale.as_deref())
            .await?;
        Ok(Some(days))
    }
}
