//! Snapshot identity allocation.
//!
//! Snapshot nodes live in the same identifier space as persisted entities
//! (v4 UUIDs), so downstream records can point at a specific snapshot node
//! without a separate namespace.

use uuid::Uuid;

/// Issues a fresh identity for every snapshot node created.
pub trait IdAllocator: Send + Sync {
    fn allocate(&self) -> Uuid;
}

/// Default allocator backed by random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdAllocator for RandomIds {
    fn allocate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
