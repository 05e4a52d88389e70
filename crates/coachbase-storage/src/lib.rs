//! coachbase-storage
//!
//! S3-backed JSON document store. Thin wrapper around the AWS S3 SDK that
//! also serves as the template and parent-document lookup for snapshot
//! building.

pub mod client;
pub mod documents;
pub mod error;
pub mod objects;
pub mod store;
