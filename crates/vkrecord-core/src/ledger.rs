use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::handle::ResourceId;
use crate::resource::Resource;

/// Set of shared references kept alive on behalf of a command buffer.
///
/// Holding an entry here is all it takes to defer the referenced object's
/// destruction: the ledger owns exactly one strong reference per distinct
/// resource, however many recorded commands use it, and the object goes away
/// only after every other owner and the ledger have released theirs.
/// Resources are identified by [`ResourceId`]; first-insertion order is kept
/// for inspection only.
#[derive(Default)]
pub struct ReferenceLedger {
    entries: Vec<Arc<dyn Resource>>,
    ids: HashSet<ResourceId>,
}

impl ReferenceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `resource` alive. Returns `false` if it was already held.
    pub fn add<R: Resource + 'static>(&mut self, resource: Arc<R>) -> bool {
        self.add_dyn(resource)
    }

    pub fn add_dyn(&mut self, resource: Arc<dyn Resource>) -> bool {
        if !self.ids.insert(resource.id()) {
            return false;
        }
        self.entries.push(resource);
        true
    }

    pub fn add_all<R, I>(&mut self, resources: I)
    where
        R: Resource + 'static,
        I: IntoIterator<Item = Arc<R>>,
    {
        for resource in resources {
            self.add_dyn(resource);
        }
    }

    pub fn contains(&self, id: ResourceId) -> bool {
        self.ids.contains(&id)
    }

    /// Ids of all entries, in first-insertion order.
    pub fn ids(&self) -> Vec<ResourceId> {
        self.entries.iter().map(|r| r.id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Resource>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Release every held reference.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.ids.clear();
    }
}

impl fmt::Debug for ReferenceLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter().map(|r| r.id())).finish()
    }
}
