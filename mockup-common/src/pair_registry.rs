use crate::container::EntryList;
use crate::pair::{Entry, PairId};

/// Issues pair ids and finds rendered entries by id.
///
/// Each builder owns its own registry, so independent builders never share ids.
/// There is no delete here: entries are detached by their container.
#[derive(Debug, Default)]
pub struct PairRegistry {
    next: u64,
}

impl PairRegistry {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// A fresh id, strictly greater than every id issued before.
    pub fn next_id(&mut self) -> PairId {
        let id = PairId::new(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far (removals do not lower it)
    pub fn issued(&self) -> u64 {
        self.next
    }

    /// Locate the entry tagged with `id` inside `container`.
    pub fn find<'a, E: Entry>(&self, container: &'a EntryList<E>, id: PairId) -> Option<&'a E> {
        container.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged(PairId);

    impl Entry for Tagged {
        fn pair_id(&self) -> PairId {
            self.0
        }
    }

    #[test]
    fn test_ids_start_at_zero_and_increase() {
        let mut registry = PairRegistry::new();
        assert_eq!(registry.next_id(), PairId::new(0));
        assert_eq!(registry.next_id(), PairId::new(1));
        assert_eq!(registry.next_id(), PairId::new(2));
        assert_eq!(registry.issued(), 3);
    }

    #[test]
    fn test_independent_registries() {
        let mut a = PairRegistry::new();
        let mut b = PairRegistry::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), PairId::new(0));
        assert_eq!(a.next_id(), PairId::new(2));
    }

    #[test]
    fn test_find() {
        let mut registry = PairRegistry::new();
        let mut list = EntryList::new();
        let id = registry.next_id();
        list.append(Tagged(id));

        assert!(registry.find(&list, id).is_some());
        assert!(registry.find(&list, PairId::new(99)).is_none());
    }
}
