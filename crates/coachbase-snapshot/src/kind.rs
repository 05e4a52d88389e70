use coachbase_core::ids::IdAllocator;
use coachbase_core::models::input::NodeInput;
use coachbase_core::models::snapshot::NodeHeader;
use coachbase_core::models::template::TemplateMeta;
use coachbase_core::session::Session;
use uuid::Uuid;

use crate::error::SnapshotError;
use crate::ids::TreeIds;
use crate::lookup::BoxFuture;

/// Slug fallback words for the two levels of a snapshot tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocabulary {
    pub day: &'static str,
    pub item: &'static str,
}

/// One impl per snapshot tree shape (program sessions, meal plan days).
///
/// The builder owns everything shared between kinds: ordering, identity,
/// slug and locale resolution, best-effort hydration. A kind only says how
/// to reach the header and children of its inputs and templates, and how
/// to attach item-specific content to a built header.
pub trait SnapshotKind: Send + Sync {
    const VOCABULARY: Vocabulary;

    type DayInput: Sync;
    type ItemInput: Sync;
    type DayTemplate: Send + Sync;
    type ItemTemplate: Send + Sync;
    type Day: Send;
    type Item: Send;

    fn day_input(day: &Self::DayInput) -> (&NodeInput, &[Self::ItemInput]);

    fn item_input(item: &Self::ItemInput) -> &NodeInput;

    /// Template header and ordered child item ids.
    fn day_template(day: &Self::DayTemplate) -> (&TemplateMeta, &[Uuid]);

    fn item_template(item: &Self::ItemTemplate) -> &TemplateMeta;

    fn assemble_day(header: NodeHeader, items: Vec<Self::Item>) -> Self::Day;

    /// Build an item from inline input. No I/O.
    fn item_from_input(
        &self,
        header: NodeHeader,
        input: &Self::ItemInput,
        ids: &mut TreeIds<'_>,
    ) -> Self::Item;

    /// Build an item from a hydrated template, resolving any nested
    /// reference it carries.
    fn item_from_template<'a>(
        &'a self,
        header: NodeHeader,
        template: Self::ItemTemplate,
        session: &'a Session,
        ids: &'a dyn IdAllocator,
    ) -> BoxFuture<'a, Result<Self::Item, SnapshotError>>;
}
