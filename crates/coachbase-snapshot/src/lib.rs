//! coachbase-snapshot
//!
//! Resolves session / meal-day template references into the immutable
//! snapshot trees embedded in programs and meal plans.
//!
//! Public API:
//! - `SnapshotBuilder::build()`: inline content or template ids → snapshot tree
//! - `SnapshotBuilder::resolve_for_update()`: rebuild, or leave the persisted tree alone
//! - `Lookup<T>`: collaborator trait the builder hydrates templates through
//! - `ProgramKind` / `MealPlanKind`: the two node vocabularies

pub mod builder;
pub mod error;
pub mod ids;
pub mod kind;
pub mod lookup;
pub mod meal_plan;
pub mod program;
pub mod update;

pub use crate::builder::SnapshotBuilder;
pub use crate::error::{LookupError, SnapshotError};
pub use crate::ids::TreeIds;
pub use crate::kind::{SnapshotKind, Vocabulary};
pub use crate::lookup::{BoxFuture, Lookup};
pub use crate::meal_plan::MealPlanKind;
pub use crate::program::ProgramKind;
pub use crate::update::{CurrentDocument, ParentDocument, SnapshotUpdate};
