use std::collections::HashSet;

use coachbase_core::ids::IdAllocator;
use uuid::Uuid;

/// Identities issued while mapping one inline tree.
///
/// A caller-supplied id is kept the first time it appears. Any later node
/// asking for the same id gets a fresh one, so ids stay unique within the
/// tree.
pub struct TreeIds<'a> {
    allocator: &'a dyn IdAllocator,
    issued: HashSet<Uuid>,
}

impl<'a> TreeIds<'a> {
    pub fn new(allocator: &'a dyn IdAllocator) -> Self {
        Self {
            allocator,
            issued: HashSet::new(),
        }
    }

    pub fn claim(&mut self, requested: Option<Uuid>) -> Uuid {
        match requested {
            Some(id) if self.issued.insert(id) => id,
            Some(id) => {
                tracing::debug!(%id, "duplicate inline id, allocating a fresh one");
                self.fresh()
            }
            None => self.fresh(),
        }
    }

    fn fresh(&mut self) -> Uuid {
        let id = self.allocator.allocate();
        self.issued.insert(id);
        id
    }
}
