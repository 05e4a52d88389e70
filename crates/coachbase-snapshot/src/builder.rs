use futures::future::try_join_all;
use uuid::Uuid;

use coachbase_core::ids::IdAllocator;
use coachbase_core::locale::resolve_locale;
use coachbase_core::models::input::NodeInput;
use coachbase_core::models::snapshot::NodeHeader;
use coachbase_core::models::template::TemplateMeta;
use coachbase_core::session::Session;
use coachbase_core::slug::build_slug;

use crate::error::SnapshotError;
use crate::ids::TreeIds;
use crate::kind::SnapshotKind;
use crate::lookup::Lookup;

/// Builds snapshot trees for one [`SnapshotKind`].
///
/// Collaborators are injected at construction; the builder holds no state
/// between calls and every call returns a fresh tree.
pub struct SnapshotBuilder<'a, K: SnapshotKind> {
    kind: K,
    days: &'a dyn Lookup<K::DayTemplate>,
    items: &'a dyn Lookup<K::ItemTemplate>,
    ids: &'a dyn IdAllocator,
}

impl<'a, K: SnapshotKind> SnapshotBuilder<'a, K> {
    pub fn new(
        kind: K,
        days: &'a dyn Lookup<K::DayTemplate>,
        items: &'a dyn Lookup<K::ItemTemplate>,
        ids: &'a dyn IdAllocator,
    ) -> Self {
        Self {
            kind,
            days,
            items,
            ids,
        }
    }

    /// Build a snapshot tree from inline days, or failing that from template
    /// ids. Inline content wins whenever it is non-empty; with neither, the
    /// tree is empty.
    pub async fn build(
        &self,
        session: &Session,
        inline: Option<&[K::DayInput]>,
        template_ids: Option<&[Uuid]>,
        default_locale: Option<&str>,
    ) -> Result<Vec<K::Day>, SnapshotError> {
        let default_locale = resolve_locale(default_locale, None);

        match (inline, template_ids) {
            (Some(days), _) if !days.is_empty() => {
                Ok(self.from_inputs(days, default_locale.as_deref()))
            }
            (_, Some(ids)) if !ids.is_empty() => {
                self.from_templates(session, ids, default_locale.as_deref())
                    .await
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Map inline days one-to-one into snapshots. No I/O.
    pub fn from_inputs(&self, days: &[K::DayInput], default_locale: Option<&str>) -> Vec<K::Day> {
        let vocabulary = K::VOCABULARY;
        let mut ids = TreeIds::new(self.ids);
        let mut tree = Vec::with_capacity(days.len());

        for day in days {
            let (node, inputs) = K::day_input(day);
            let header = inline_header(&mut ids, node, default_locale, vocabulary.day);

            let mut items = Vec::with_capacity(inputs.len());
            for item in inputs {
                let item_header = inline_header(
                    &mut ids,
                    K::item_input(item),
                    header.locale.as_deref(),
                    vocabulary.item,
                );
                items.push(self.kind.item_from_input(item_header, item, &mut ids));
            }
            tree.push(K::assemble_day(header, items));
        }

        tree
    }

    /// Hydrate day templates and their items concurrently, then reassemble
    /// them in request order. Templates that no longer resolve are dropped.
    pub async fn from_templates(
        &self,
        session: &Session,
        ids: &[Uuid],
        default_locale: Option<&str>,
    ) -> Result<Vec<K::Day>, SnapshotError> {
        let resolved =
            try_join_all(ids.iter().map(|&id| self.day_from_template(session, id, default_locale)))
                .await?;
        let days: Vec<_> = resolved.into_iter().flatten().collect();

        tracing::debug!(
            kind = K::VOCABULARY.day,
            requested = ids.len(),
            resolved = days.len(),
            "built snapshot tree from templates"
        );

        Ok(days)
    }

    async fn day_from_template(
        &self,
        session: &Session,
        id: Uuid,
        default_locale: Option<&str>,
    ) -> Result<Option<K::Day>, SnapshotError> {
        let kind = K::VOCABULARY.day;
        let Some(template) = self
            .days
            .get(id, session)
            .await
            .map_err(|source| SnapshotError::lookup(kind, id, source))?
        else {
            tracing::debug!(kind, %id, "template not found, skipping");
            return Ok(None);
        };

        let (meta, item_ids) = K::day_template(&template);
        let header = template_header(self.ids, meta, default_locale, kind);

        let items = try_join_all(
            item_ids
                .iter()
                .map(|&item_id| self.item_from_template(session, item_id, header.locale.as_deref())),
        )
        .await?;

        Ok(Some(K::assemble_day(
            header,
            items.into_iter().flatten().collect(),
        )))
    }

    async fn item_from_template(
        &self,
        session: &Session,
        id: Uuid,
        day_locale: Option<&str>,
    ) -> Result<Option<K::Item>, SnapshotError> {
        let kind = K::VOCABULARY.item;
        let Some(template) = self
            .items
            .get(id, session)
            .await
            .map_err(|source| SnapshotError::lookup(kind, id, source))?
        else {
            tracing::debug!(kind, %id, "template not found, skipping");
            return Ok(None);
        };

        let header = template_header(self.ids, K::item_template(&template), day_locale, kind);
        let item = self
            .kind
            .item_from_template(header, template, session, self.ids)
            .await?;
        Ok(Some(item))
    }
}

/// Header for an inline node. A caller-supplied id is kept so that a node
/// re-submitted while still being edited keeps its identity.
fn inline_header(
    ids: &mut TreeIds<'_>,
    node: &NodeInput,
    fallback_locale: Option<&str>,
    fallback_word: &str,
) -> NodeHeader {
    let label = node.label.trim().to_string();
    NodeHeader {
        id: ids.claim(node.id),
        template_id: node.template_id,
        slug: build_slug(node.slug.as_deref(), Some(&label), fallback_word),
        locale: resolve_locale(node.locale.as_deref(), fallback_locale),
        label,
        description: node.description.clone(),
    }
}

/// Header for a node copied from a template. The identity is always fresh;
/// the template id survives only as the back-reference.
fn template_header(
    ids: &dyn IdAllocator,
    meta: &TemplateMeta,
    fallback_locale: Option<&str>,
    fallback_word: &str,
) -> NodeHeader {
    let label = meta.label.trim().to_string();
    NodeHeader {
        id: ids.allocate(),
        template_id: Some(meta.id),
        slug: build_slug(meta.slug.as_deref(), Some(&label), fallback_word),
        locale: resolve_locale(meta.locale.as_deref(), fallback_locale),
        label,
        description: meta.description.clone(),
    }
}
