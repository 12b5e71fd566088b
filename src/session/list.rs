//! Ordered list sections with stable per-entry identifiers.
//!
//! The admin form edits list-valued sections (gallery images, itinerary
//! days, FAQ items). Entries are addressed by an id allocated once at
//! insertion rather than by position, so deleting one entry cannot
//! silently redirect edits aimed at its siblings.

/// Stable identifier of one list entry, unique within its session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(u64);

#[derive(Debug, Clone)]
pub struct Entry<T> {
    pub id: EntryId,
    pub value: T,
}

/// An ordered section of a draft document.
#[derive(Debug, Clone)]
pub struct SectionList<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> SectionList<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Build a list from stored values, assigning each a fresh id.
    pub fn from_values(values: Vec<T>) -> Self {
        let mut list = Self::new();
        for value in values {
            list.push(value);
        }
        list
    }

    fn allocate(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append a value, returning its id.
    pub fn push(&mut self, value: T) -> EntryId {
        let id = self.allocate();
        self.entries.push(Entry { id, value });
        id
    }

    /// Append a default-valued entry (every "add" in the form works this way).
    pub fn push_default(&mut self) -> EntryId
    where
        T: Default,
    {
        self.push(T::default())
    }

    /// Remove the entry with the given id. Returns false if it is gone.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Mutate one entry in place. Returns false if the id is unknown.
    pub fn update(&mut self, id: EntryId, f: impl FnOnce(&mut T)) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                f(&mut entry.value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Snapshot the ordered values for serialization.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entries.iter().map(|e| e.value.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for SectionList<T> {
    fn default() -> Self {
        Self::new()
    }
}
