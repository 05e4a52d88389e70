pub mod input;
pub mod meal_plan;
pub mod parent;
pub mod program;
pub mod snapshot;
pub mod template;
