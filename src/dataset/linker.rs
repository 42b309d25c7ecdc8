use super::payload::VersionDescriptor;
use std::collections::HashMap;

/// Mapping from a version's numeric identifier to its augmented descriptor.
///
/// Populated (write-once per id) by the builder during the walk; the
/// manifest's id uniqueness invariant guarantees no overwrite. Downstream
/// consumers use it for point lookups, e.g. toggling `hidden` on a node
/// they collapsed.
#[derive(Debug, Clone, Default)]
pub struct Linker {
    entries: HashMap<u64, VersionDescriptor>,
}

impl Linker {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: u64, descriptor: VersionDescriptor) {
        self.entries.insert(id, descriptor);
    }

    pub fn get(&self, id: u64) -> Option<&VersionDescriptor> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut VersionDescriptor> {
        self.entries.get_mut(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.keys().copied()
    }
}
