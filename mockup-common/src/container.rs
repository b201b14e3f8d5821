use std::collections::{HashMap, HashSet};

use crate::pair::{Entry, PairId};

/// Ordered, id-indexed list of owned entries.
///
/// Stands in for a rendered list container: entries are owned here and looked
/// up by pair id, never by position or node reference.
#[derive(Clone, Debug)]
pub struct EntryList<E> {
    entries: HashMap<PairId, E>,
    order: Vec<PairId>,
}

impl<E> Default for EntryList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EntryList<E> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: PairId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: PairId) -> Option<&E> {
        self.entries.get(&id)
    }

    /// Current child order
    pub fn ids(&self) -> &[PairId] {
        &self.order
    }

    /// Entries in child order
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    /// Detach the entry tagged with `id`. Returns `None` if it is not here.
    pub fn detach(&mut self, id: PairId) -> Option<E> {
        let entry = self.entries.remove(&id)?;
        self.order.retain(|&other| other != id);
        Some(entry)
    }

    /// Rebuild the child order from `order`.
    ///
    /// Ids that are not in this list are skipped. Entries the order does not
    /// mention keep their previous relative order after the listed ones.
    /// Returns the number of entries placed from `order`.
    pub fn reorder(&mut self, order: &[PairId]) -> usize {
        let mut rebuilt = Vec::with_capacity(self.order.len());
        let mut seen = HashSet::with_capacity(self.order.len());
        for &id in order {
            if self.entries.contains_key(&id) && seen.insert(id) {
                rebuilt.push(id);
            }
        }
        let placed = rebuilt.len();
        for &id in &self.order {
            if seen.insert(id) {
                rebuilt.push(id);
            }
        }
        self.order = rebuilt;
        placed
    }
}

impl<E: Entry> EntryList<E> {
    /// Append at the end.
    ///
    /// If an entry with the same id is already present nothing changes and the
    /// rejected entry is handed back.
    pub fn append(&mut self, entry: E) -> Option<E> {
        let id = entry.pair_id();
        if self.entries.contains_key(&id) {
            return Some(entry);
        }
        self.order.push(id);
        self.entries.insert(id, entry);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Tagged(u64);

    impl Entry for Tagged {
        fn pair_id(&self) -> PairId {
            PairId::new(self.0)
        }
    }

    fn ids(raw: &[u64]) -> Vec<PairId> {
        raw.iter().copied().map(PairId::new).collect()
    }

    fn list_of(raw: &[u64]) -> EntryList<Tagged> {
        let mut list = EntryList::new();
        for &id in raw {
            assert!(list.append(Tagged(id)).is_none());
        }
        list
    }

    #[test]
    fn test_append_preserves_order() {
        let list = list_of(&[4, 1, 9]);
        assert_eq!(list.ids(), ids(&[4, 1, 9]).as_slice());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let mut list = list_of(&[1]);
        assert_eq!(list.append(Tagged(1)), Some(Tagged(1)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_detach() {
        let mut list = list_of(&[0, 1, 2]);
        assert_eq!(list.detach(PairId::new(1)), Some(Tagged(1)));
        assert_eq!(list.ids(), ids(&[0, 2]).as_slice());
        assert_eq!(list.detach(PairId::new(1)), None);
    }

    #[test]
    fn test_reorder_full() {
        let mut list = list_of(&[0, 1, 2]);
        assert_eq!(list.reorder(&ids(&[2, 0, 1])), 3);
        assert_eq!(list.ids(), ids(&[2, 0, 1]).as_slice());
        let walked: Vec<u64> = list.iter().map(|t| t.0).collect();
        assert_eq!(walked, vec![2, 0, 1]);
    }

    #[test]
    fn test_reorder_skips_unknown_ids() {
        let mut list = list_of(&[0, 1]);
        assert_eq!(list.reorder(&ids(&[7, 1, 0])), 2);
        assert_eq!(list.ids(), ids(&[1, 0]).as_slice());
    }

    #[test]
    fn test_reorder_keeps_unlisted_entries() {
        let mut list = list_of(&[0, 1, 2, 3]);
        assert_eq!(list.reorder(&ids(&[3, 1])), 2);
        assert_eq!(list.ids(), ids(&[3, 1, 0, 2]).as_slice());
    }

    #[test]
    fn test_reorder_ignores_repeated_ids() {
        let mut list = list_of(&[0, 1]);
        assert_eq!(list.reorder(&ids(&[1, 1, 0])), 2);
        assert_eq!(list.ids(), ids(&[1, 0]).as_slice());
    }

    #[test]
    fn test_reorder_large_list_reversed() {
        let raw: Vec<u64> = (0..5_000).collect();
        let mut list = list_of(&raw);
        let reversed: Vec<u64> = raw.iter().rev().copied().collect();
        let mut order = ids(&reversed);
        // Repeats in the reported order are dropped
        order.extend(ids(&[0, 1, 2]));
        assert_eq!(list.reorder(&order), 5_000);
        assert_eq!(list.ids(), ids(&reversed).as_slice());
    }
}
