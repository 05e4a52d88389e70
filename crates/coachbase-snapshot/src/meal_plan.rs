use uuid::Uuid;

use coachbase_core::ids::IdAllocator;
use coachbase_core::locale::resolve_locale;
use coachbase_core::models::input::{MealDayInput, MealInput, MealTypeInput, NodeInput};
use coachbase_core::models::snapshot::{
    DEFAULT_MEAL_TYPE_LABEL, MealDaySnapshot, MealSnapshot, MealTypeSnapshot, NodeHeader,
};
use coachbase_core::models::template::{
    MealDayTemplate, MealTemplate, MealType, TemplateMeta, Visibility,
};
use coachbase_core::session::Session;
use coachbase_core::slug::{build_slug, fallback};

use crate::builder::SnapshotBuilder;
use crate::error::SnapshotError;
use crate::ids::TreeIds;
use crate::kind::{SnapshotKind, Vocabulary};
use crate::lookup::{BoxFuture, Lookup};

/// Meal plan trees: days made of meals, each meal optionally classified by
/// a meal type resolved through its own lookup.
pub struct MealPlanKind<'t> {
    types: &'t dyn Lookup<MealType>,
}

impl<'t> MealPlanKind<'t> {
    pub fn new(types: &'t dyn Lookup<MealType>) -> Self {
        Self { types }
    }
}

impl SnapshotKind for MealPlanKind<'_> {
    const VOCABULARY: Vocabulary = Vocabulary {
        day: fallback::MEAL_DAY,
        item: fallback::MEAL,
    };

    type DayInput = MealDayInput;
    type ItemInput = MealInput;
    type DayTemplate = MealDayTemplate;
    type ItemTemplate = MealTemplate;
    type Day = MealDaySnapshot;
    type Item = MealSnapshot;

    fn day_input(day: &MealDayInput) -> (&NodeInput, &[MealInput]) {
        (&day.node, day.meals.as_slice())
    }

    fn item_input(item: &MealInput) -> &NodeInput {
        &item.node
    }

    fn day_template(day: &MealDayTemplate) -> (&TemplateMeta, &[Uuid]) {
        (&day.meta, day.meal_ids.as_slice())
    }

    fn item_template(item: &MealTemplate) -> &TemplateMeta {
        &item.meta
    }

    fn assemble_day(header: NodeHeader, meals: Vec<MealSnapshot>) -> MealDaySnapshot {
        MealDaySnapshot { header, meals }
    }

    fn item_from_input(
        &self,
        header: NodeHeader,
        input: &MealInput,
        ids: &mut TreeIds<'_>,
    ) -> MealSnapshot {
        let meal_type = input
            .meal_type
            .as_ref()
            .map(|meal_type| inline_type(meal_type, &header, ids));
        MealSnapshot {
            header,
            details: input.details.clone(),
            meal_type,
        }
    }

    fn item_from_template<'a>(
        &'a self,
        header: NodeHeader,
        template: MealTemplate,
        session: &'a Session,
        ids: &'a dyn IdAllocator,
    ) -> BoxFuture<'a, Result<MealSnapshot, SnapshotError>> {
        Box::pin(async move {
            // Type lookups never fail the meal; anything unresolved becomes
            // the placeholder.
            let meal_type = match template.type_id {
                Some(type_id) => Some(match self.types.get(type_id, session).await {
                    Ok(Some(meal_type)) => template_type(&meal_type, &header, ids),
                    Ok(None) => {
                        tracing::debug!(%type_id, "meal type not found, using placeholder");
                        placeholder_type(type_id, &header)
                    }
                    Err(e) => {
                        tracing::warn!(
                            %type_id,
                            error = %e,
                            "meal type lookup failed, using placeholder"
                        );
                        placeholder_type(type_id, &header)
                    }
                }),
                None => None,
            };

            Ok::<_, SnapshotError>(MealSnapshot {
                header,
                details: template.details,
                meal_type,
            })
        })
    }
}

impl<'a> SnapshotBuilder<'a, MealPlanKind<'a>> {
    pub fn for_meal_plans(
        days: &'a dyn Lookup<MealDayTemplate>,
        meals: &'a dyn Lookup<MealTemplate>,
        types: &'a dyn Lookup<MealType>,
        ids: &'a dyn IdAllocator,
    ) -> Self {
        Self::new(MealPlanKind::new(types), days, meals, ids)
    }
}

/// A blank type label falls back to the meal's own label.
fn type_label(label: &str, meal: &NodeHeader) -> String {
    match label.trim() {
        "" => meal.label.clone(),
        trimmed => trimmed.to_string(),
    }
}

fn inline_type(input: &MealTypeInput, meal: &NodeHeader, ids: &mut TreeIds<'_>) -> MealTypeSnapshot {
    let label = type_label(&input.label, meal);
    MealTypeSnapshot {
        id: Some(ids.claim(input.id)),
        template_id: input.template_id,
        slug: build_slug(input.slug.as_deref(), Some(&label), fallback::MEAL_TYPE),
        locale: resolve_locale(input.locale.as_deref(), meal.locale.as_deref()),
        label,
        visibility: input.visibility.unwrap_or_default(),
    }
}

fn template_type(meal_type: &MealType, meal: &NodeHeader, ids: &dyn IdAllocator) -> MealTypeSnapshot {
    let meta = &meal_type.meta;
    let label = type_label(&meta.label, meal);
    MealTypeSnapshot {
        id: Some(ids.allocate()),
        template_id: Some(meta.id),
        slug: build_slug(meta.slug.as_deref(), Some(&label), fallback::MEAL_TYPE),
        locale: resolve_locale(meta.locale.as_deref(), meal.locale.as_deref()),
        label,
        visibility: meta.visibility,
    }
}

/// Stand-in for a meal type that was deleted after the meal referenced it.
/// Keeps the dangling id so clients can still group meals by type.
fn placeholder_type(type_id: Uuid, meal: &NodeHeader) -> MealTypeSnapshot {
    MealTypeSnapshot {
        id: Some(type_id),
        template_id: None,
        slug: fallback::MEAL_TYPE.to_string(),
        locale: meal.locale.clone(),
        label: DEFAULT_MEAL_TYPE_LABEL.to_string(),
        visibility: Visibility::default(),
    }
}
