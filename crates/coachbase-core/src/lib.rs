//! coachbase-core
//!
//! Pure domain types, slug/locale normalization, snapshot identity
//! allocation and storage key conventions. No AWS SDK dependency; this is
//! the shared vocabulary of the Coachbase system.

pub mod error;
pub mod ids;
pub mod keys;
pub mod locale;
pub mod models;
pub mod patch;
pub mod session;
pub mod slug;
pub mod validate;
