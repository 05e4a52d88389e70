mod common;

use std::time::Duration;

use uuid::Uuid;

use coachbase_core::ids::RandomIds;
use coachbase_core::models::input::{
    ExerciseInput, MealDayInput, MealInput, MealTypeInput, NodeInput, SessionInput,
};
use coachbase_core::models::snapshot::DEFAULT_MEAL_TYPE_LABEL;
use coachbase_core::models::template::{
    ExerciseTemplate, MealDayTemplate, MealTemplate, MealType, SessionTemplate, Visibility,
};
use coachbase_snapshot::{SnapshotBuilder, SnapshotError};

use common::{
    MemoryLookup, coach, exercise, meal, meal_day_template, meal_type, session_template,
};

fn node(label: &str) -> NodeInput {
    NodeInput {
        label: label.to_string(),
        ..NodeInput::default()
    }
}

#[tokio::test]
async fn template_ids_get_fresh_identities_on_every_build() {
    let template_id = Uuid::new_v4();
    let sessions = MemoryLookup::new([(template_id, session_template(template_id, "Pull", &[]))]);
    let exercises = MemoryLookup::<ExerciseTemplate>::empty();
    let builder = SnapshotBuilder::for_programs(&sessions, &exercises, &RandomIds);
    let session = coach();

    let first = builder
        .build(&session, None, Some(&[template_id][..]), Some("en"))
        .await
        .unwrap();
    let second = builder
        .build(&session, None, Some(&[template_id][..]), Some("en"))
        .await
        .unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_ne!(first[0].header.id, second[0].header.id);
    assert_ne!(first[0].header.id, template_id);
    assert_ne!(second[0].header.id, template_id);
    assert_eq!(first[0].header.template_id, Some(template_id));
}

#[tokio::test]
async fn missing_templates_collapse_without_reordering() {
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    // A resolves last, so reassembly must go by position, not completion.
    let sessions = MemoryLookup::new([
        (a, session_template(a, "Day A", &[])),
        (c, session_template(c, "Day C", &[])),
    ])
    .with_delay(a, Duration::from_millis(30));
    let exercises = MemoryLookup::<ExerciseTemplate>::empty();
    let builder = SnapshotBuilder::for_programs(&sessions, &exercises, &RandomIds);

    let tree = builder
        .build(&coach(), None, Some(&[a, b, c][..]), Some("en"))
        .await
        .unwrap();

    let labels: Vec<_> = tree.iter().map(|s| s.header.label.as_str()).collect();
    assert_eq!(labels, ["Day A", "Day C"]);
}

#[tokio::test]
async fn inline_days_win_over_template_ids() {
    let template_id = Uuid::new_v4();
    let sessions = MemoryLookup::new([(template_id, session_template(template_id, "Pull", &[]))]);
    let exercises = MemoryLookup::<ExerciseTemplate>::empty();
    let builder = SnapshotBuilder::for_programs(&sessions, &exercises, &RandomIds);

    let inline = vec![SessionInput {
        node: node("Legs"),
        exercises: vec![],
    }];
    let tree = builder
        .build(&coach(), Some(inline.as_slice()), Some(&[template_id][..]), Some("en"))
        .await
        .unwrap();

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].header.label, "Legs");
    assert_eq!(tree[0].header.template_id, None);
    assert_eq!(sessions.calls(), 0);
}

#[tokio::test]
async fn empty_inline_days_fall_through_to_template_ids() {
    let template_id = Uuid::new_v4();
    let sessions = MemoryLookup::new([(template_id, session_template(template_id, "Pull", &[]))]);
    let exercises = MemoryLookup::<ExerciseTemplate>::empty();
    let builder = SnapshotBuilder::for_programs(&sessions, &exercises, &RandomIds);

    let tree = builder
        .build(&coach(), Some(&[][..]), Some(&[template_id][..]), Some("en"))
        .await
        .unwrap();
    assert_eq!(tree.len(), 1);

    let none = builder.build(&coach(), None, None, Some("en")).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn inline_nodes_resolve_slug_locale_and_identity() {
    let sessions = MemoryLookup::<SessionTemplate>::empty();
    let exercises = MemoryLookup::<ExerciseTemplate>::empty();
    let builder = SnapshotBuilder::for_programs(&sessions, &exercises, &RandomIds);

    let kept_id = Uuid::new_v4();
    let inline = vec![
        SessionInput {
            node: NodeInput {
                id: Some(kept_id),
                locale: Some(" DE ".to_string()),
                label: "  Leg Day!! ".to_string(),
                ..NodeInput::default()
            },
            exercises: vec![ExerciseInput {
                node: node(" Squat "),
                ..ExerciseInput::default()
            }],
        },
        SessionInput {
            node: node("???"),
            exercises: vec![],
        },
    ];

    let tree = builder
        .build(&coach(), Some(inline.as_slice()), None, Some("FR-fr"))
        .await
        .unwrap();

    let legs = &tree[0];
    assert_eq!(legs.header.id, kept_id);
    assert_eq!(legs.header.slug, "leg-day");
    assert_eq!(legs.header.label, "Leg Day!!");
    assert_eq!(legs.header.locale.as_deref(), Some("de"));

    let squat = &legs.exercises[0];
    assert_eq!(squat.header.label, "Squat");
    assert_eq!(squat.header.slug, "squat");
    assert_eq!(squat.header.locale.as_deref(), Some("de"));

    let unnamed = &tree[1];
    assert_eq!(unnamed.header.slug, "session");
    assert_eq!(unnamed.header.locale.as_deref(), Some("fr-fr"));
    assert_ne!(unnamed.header.id, kept_id);
}

#[tokio::test]
async fn session_with_missing_exercise_keeps_the_rest() {
    let (sess, bench, missing) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let sessions = MemoryLookup::new([(sess, session_template(sess, "Push Day", &[bench, missing]))]);
    let exercises = MemoryLookup::new([(bench, exercise(bench, "Bench Press"))]);
    let builder = SnapshotBuilder::for_programs(&sessions, &exercises, &RandomIds);

    let tree = builder
        .build(&coach(), None, Some(&[sess][..]), Some("en"))
        .await
        .unwrap();

    assert_eq!(tree.len(), 1);
    let push = &tree[0];
    assert_eq!(push.header.label, "Push Day");
    assert_eq!(push.header.slug, "push-day");
    assert_eq!(push.header.locale.as_deref(), Some("en"));
    assert_eq!(push.exercises.len(), 1);

    let bench_press = &push.exercises[0];
    assert_eq!(bench_press.header.label, "Bench Press");
    assert_ne!(bench_press.header.id, bench);
    assert_eq!(bench_press.header.template_id, Some(bench));
    assert_eq!(bench_press.details.series, Some(4));
    assert_eq!(exercises.calls(), 2);
}

#[tokio::test]
async fn template_slug_is_preferred_over_label() {
    let id = Uuid::new_v4();
    let mut template = session_template(id, "Upper Body", &[]);
    template.meta.slug = Some("Upper A".to_string());
    template.meta.locale = Some("IT".to_string());
    let sessions = MemoryLookup::new([(id, template)]);
    let exercises = MemoryLookup::<ExerciseTemplate>::empty();
    let builder = SnapshotBuilder::for_programs(&sessions, &exercises, &RandomIds);

    let tree = builder
        .build(&coach(), None, Some(&[id][..]), Some("en"))
        .await
        .unwrap();

    assert_eq!(tree[0].header.slug, "upper-a");
    assert_eq!(tree[0].header.locale.as_deref(), Some("it"));
}

#[tokio::test]
async fn lookup_failure_aborts_the_whole_build() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let sessions = MemoryLookup::new([
        (a, session_template(a, "A", &[])),
        (b, session_template(b, "B", &[])),
    ])
    .failing_on(b);
    let exercises = MemoryLookup::<ExerciseTemplate>::empty();
    let builder = SnapshotBuilder::for_programs(&sessions, &exercises, &RandomIds);

    let err = builder
        .build(&coach(), None, Some(&[a, b][..]), Some("en"))
        .await
        .unwrap_err();

    match err {
        SnapshotError::Lookup { kind, id, .. } => {
            assert_eq!(kind, "session");
            assert_eq!(id, b);
        }
    }
}

#[tokio::test]
async fn meal_with_deleted_type_gets_placeholder() {
    let (day, breakfast, gone_type) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let days = MemoryLookup::new([(day, meal_day_template(day, "Rest day", &[breakfast]))]);
    let meals = MemoryLookup::new([(breakfast, meal(breakfast, "Porridge", Some(gone_type)))]);
    let types = MemoryLookup::<MealType>::empty();
    let builder = SnapshotBuilder::for_meal_plans(&days, &meals, &types, &RandomIds);

    let tree = builder
        .build(&coach(), None, Some(&[day][..]), Some("en"))
        .await
        .unwrap();

    let porridge = &tree[0].meals[0];
    let placeholder = porridge.meal_type.as_ref().unwrap();
    assert_eq!(placeholder.label, DEFAULT_MEAL_TYPE_LABEL);
    assert_eq!(placeholder.id, Some(gone_type));
    assert_eq!(placeholder.template_id, None);
    assert_eq!(porridge.details.calories, Some(520.0));
}

#[tokio::test]
async fn resolved_meal_type_is_snapshotted_with_fresh_identity() {
    let (day, lunch, snack, type_id) = (
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
    );
    let days = MemoryLookup::new([(day, meal_day_template(day, "Training day", &[lunch, snack]))]);
    let meals = MemoryLookup::new([
        (lunch, meal(lunch, "Chicken bowl", Some(type_id))),
        (snack, meal(snack, "Apple", None)),
    ]);
    let types = MemoryLookup::new([(type_id, meal_type(type_id, "Lunch", Visibility::Public))]);
    let builder = SnapshotBuilder::for_meal_plans(&days, &meals, &types, &RandomIds);

    let tree = builder
        .build(&coach(), None, Some(&[day][..]), Some("en"))
        .await
        .unwrap();

    let day = &tree[0];
    assert_eq!(day.header.slug, "training-day");
    assert_eq!(day.meals.len(), 2);

    let lunch_type = day.meals[0].meal_type.as_ref().unwrap();
    assert_eq!(lunch_type.label, "Lunch");
    assert_eq!(lunch_type.slug, "lunch");
    assert_eq!(lunch_type.template_id, Some(type_id));
    assert_ne!(lunch_type.id, Some(type_id));
    assert!(lunch_type.id.is_some());
    assert_eq!(lunch_type.visibility, Visibility::Public);
    assert_eq!(lunch_type.locale.as_deref(), Some("en"));

    assert!(day.meals[1].meal_type.is_none());
    assert_eq!(types.calls(), 1);
}

#[tokio::test]
async fn inline_meal_type_falls_back_to_meal_label() {
    let days = MemoryLookup::<MealDayTemplate>::empty();
    let meals = MemoryLookup::<MealTemplate>::empty();
    let types = MemoryLookup::<MealType>::empty();
    let builder = SnapshotBuilder::for_meal_plans(&days, &meals, &types, &RandomIds);

    let inline = vec![MealDayInput {
        node: node("Day 1"),
        meals: vec![
            MealInput {
                node: node("Second breakfast"),
                meal_type: Some(MealTypeInput {
                    label: "   ".to_string(),
                    ..MealTypeInput::default()
                }),
                ..MealInput::default()
            },
            MealInput {
                node: node("Dinner"),
                meal_type: Some(MealTypeInput {
                    label: "Evening".to_string(),
                    visibility: Some(Visibility::Public),
                    ..MealTypeInput::default()
                }),
                ..MealInput::default()
            },
        ],
    }];

    let tree = builder
        .build(&coach(), Some(inline.as_slice()), None, Some("en"))
        .await
        .unwrap();

    let meals = &tree[0].meals;
    let blank = meals[0].meal_type.as_ref().unwrap();
    assert_eq!(blank.label, "Second breakfast");
    assert_eq!(blank.slug, "second-breakfast");
    assert_eq!(blank.visibility, Visibility::Private);
    assert!(blank.id.is_some());

    let evening = meals[1].meal_type.as_ref().unwrap();
    assert_eq!(evening.label, "Evening");
    assert_eq!(evening.visibility, Visibility::Public);
    assert_ne!(blank.id, evening.id);
    assert_eq!(types.calls(), 0);
}

#[tokio::test]
async fn meal_type_lookup_failure_degrades_to_placeholder() {
    let (day, breakfast, type_id) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let days = MemoryLookup::new([(day, meal_day_template(day, "Rest day", &[breakfast]))]);
    let meals = MemoryLookup::new([(breakfast, meal(breakfast, "Porridge", Some(type_id)))]);
    let types = MemoryLookup::<MealType>::empty().failing_on(type_id);
    let builder = SnapshotBuilder::for_meal_plans(&days, &meals, &types, &RandomIds);

    let tree = builder
        .build(&coach(), None, Some(&[day][..]), Some("en"))
        .await
        .unwrap();

    let porridge = &tree[0].meals[0];
    assert_eq!(porridge.header.label, "Porridge");
    let placeholder = porridge.meal_type.as_ref().unwrap();
    assert_eq!(placeholder.id, Some(type_id));
    assert_eq!(placeholder.label, DEFAULT_MEAL_TYPE_LABEL);
    assert_eq!(placeholder.template_id, None);
    assert_eq!(placeholder.locale.as_deref(), Some("en"));
    assert_eq!(types.calls(), 1);
}

#[tokio::test]
async fn repeated_inline_ids_are_reissued() {
    let sessions = MemoryLookup::<SessionTemplate>::empty();
    let exercises = MemoryLookup::<ExerciseTemplate>::empty();
    let builder = SnapshotBuilder::for_programs(&sessions, &exercises, &RandomIds);

    let dup = Uuid::new_v4();
    let with_id = |label: &str| NodeInput {
        id: Some(dup),
        label: label.to_string(),
        ..NodeInput::default()
    };
    let inline = vec![
        SessionInput {
            node: with_id("Upper"),
            exercises: vec![ExerciseInput {
                node: with_id("Row"),
                ..ExerciseInput::default()
            }],
        },
        SessionInput {
            node: with_id("Lower"),
            exercises: vec![],
        },
    ];

    let tree = builder
        .build(&coach(), Some(inline.as_slice()), None, Some("en"))
        .await
        .unwrap();

    let upper = tree[0].header.id;
    let row = tree[0].exercises[0].header.id;
    let lower = tree[1].header.id;
    assert_eq!(upper, dup);
    assert_ne!(row, dup);
    assert_ne!(lower, dup);
    assert_ne!(row, lower);
}

#[tokio::test]
async fn repeated_inline_meal_type_ids_are_reissued() {
    let days = MemoryLookup::<MealDayTemplate>::empty();
    let meals = MemoryLookup::<MealTemplate>::empty();
    let types = MemoryLookup::<MealType>::empty();
    let builder = SnapshotBuilder::for_meal_plans(&days, &meals, &types, &RandomIds);

    let dup = Uuid::new_v4();
    let typed_meal = |label: &str| MealInput {
        node: node(label),
        meal_type: Some(MealTypeInput {
            id: Some(dup),
            label: "Snack".to_string(),
            ..MealTypeInput::default()
        }),
        ..MealInput::default()
    };
    let inline = vec![MealDayInput {
        node: node("Day 1"),
        meals: vec![typed_meal("Apple"), typed_meal("Yogurt")],
    }];

    let tree = builder
        .build(&coach(), Some(inline.as_slice()), None, Some("en"))
        .await
        .unwrap();

    let first = tree[0].meals[0].meal_type.as_ref().unwrap().id;
    let second = tree[0].meals[1].meal_type.as_ref().unwrap().id;
    assert_eq!(first, Some(dup));
    assert!(second.is_some());
    assert_ne!(first, second);
}

#[tokio::test]
async fn items_keep_template_order_when_resolved_out_of_order() {
    let (sess, first, second, third) = (
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
    );
    let sessions = MemoryLookup::new([(
        sess,
        session_template(sess, "Full body", &[first, second, third]),
    )]);
    // The first exercise resolves last and the third never does.
    let exercises = MemoryLookup::new([
        (first, exercise(first, "Deadlift")),
        (second, exercise(second, "Press")),
    ])
    .with_delay(first, Duration::from_millis(30));
    let builder = SnapshotBuilder::for_programs(&sessions, &exercises, &RandomIds);

    let tree = builder
        .build(&coach(), None, Some(&[sess][..]), Some("en"))
        .await
        .unwrap();

    let labels: Vec<_> = tree[0]
        .exercises
        .iter()
        .map(|e| e.header.label.as_str())
        .collect();
    assert_eq!(labels, ["Deadlift", "Press"]);
    assert_eq!(exercises.calls(), 3);
}

#[tokio::test]
async fn meals_keep_template_order_when_resolved_out_of_order() {
    let (day, breakfast, dinner) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let days = MemoryLookup::new([(day, meal_day_template(day, "Day 1", &[breakfast, dinner]))]);
    let meals = MemoryLookup::new([
        (breakfast, meal(breakfast, "Oats", None)),
        (dinner, meal(dinner, "Salmon", None)),
    ])
    .with_delay(breakfast, Duration::from_millis(30));
    let types = MemoryLookup::<MealType>::empty();
    let builder = SnapshotBuilder::for_meal_plans(&days, &meals, &types, &RandomIds);

    let tree = builder
        .build(&coach(), None, Some(&[day][..]), Some("en"))
        .await
        .unwrap();

    let labels: Vec<_> = tree[0].meals.iter().map(|m| m.header.label.as_str()).collect();
    assert_eq!(labels, ["Oats", "Salmon"]);
}
