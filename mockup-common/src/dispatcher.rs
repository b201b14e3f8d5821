//! Routes user-interaction events to the synchronizer.
//!
//! Each event runs to completion before the next one is handled, so the
//! containers never see overlapping mutations.

use tracing::debug;

use crate::pair::PairId;
use crate::palette::PaletteEntry;
use crate::synchronizer::{AddOutcome, ClickTarget, ListSynchronizer, RemoveOutcome};

#[derive(Clone, Debug, PartialEq)]
pub enum BuilderEvent {
    /// A palette entry was clicked
    ItemChosen(PaletteEntry),
    /// The drag collaborator finished a gesture; the mockup list's children
    /// now appear in this order
    ReorderCompleted(Vec<PairId>),
    /// A click landed inside mockup entry `id`
    RemovalRequested { id: PairId, target: ClickTarget },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Added(AddOutcome),
    Resynced { placed: usize },
    Removed(RemoveOutcome),
}

impl DispatchOutcome {
    /// Whether either list changed
    pub fn changed(&self) -> bool {
        match self {
            DispatchOutcome::Added(AddOutcome::Added(_)) => true,
            DispatchOutcome::Added(AddOutcome::DuplicateSkipped) => false,
            DispatchOutcome::Resynced { .. } => true,
            DispatchOutcome::Removed(RemoveOutcome::Removed(_)) => true,
            DispatchOutcome::Removed(_) => false,
        }
    }
}

impl ListSynchronizer {
    pub fn dispatch(&mut self, event: BuilderEvent) -> DispatchOutcome {
        debug!("Dispatching {:?}", event);
        match event {
            BuilderEvent::ItemChosen(entry) => DispatchOutcome::Added(self.add_pair(&entry)),
            BuilderEvent::ReorderCompleted(order) => {
                self.adopt_visual_order(&order);
                let visual = self.mockup_ids();
                let placed = self.resync(&visual);
                DispatchOutcome::Resynced { placed }
            }
            BuilderEvent::RemovalRequested { id, target } => {
                DispatchOutcome::Removed(self.handle_click(id, target))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chosen(key: &str) -> BuilderEvent {
        BuilderEvent::ItemChosen(PaletteEntry::new(key, key).with_snippet(format!("<{key}/>")))
    }

    fn ids(raw: &[u64]) -> Vec<PairId> {
        raw.iter().copied().map(PairId::new).collect()
    }

    #[test]
    fn test_reorder_event_moves_both_lists() {
        let mut sync = ListSynchronizer::new();
        for key in ["a", "b", "c"] {
            sync.dispatch(chosen(key));
        }
        let outcome = sync.dispatch(BuilderEvent::ReorderCompleted(ids(&[2, 0, 1])));
        assert_eq!(outcome, DispatchOutcome::Resynced { placed: 3 });
        assert_eq!(sync.mockup_ids(), ids(&[2, 0, 1]));
        assert_eq!(sync.code_ids(), ids(&[2, 0, 1]));
    }

    #[test]
    fn test_reorder_with_stale_id() {
        let mut sync = ListSynchronizer::new();
        sync.dispatch(chosen("a"));
        sync.dispatch(chosen("b"));
        sync.dispatch(BuilderEvent::ReorderCompleted(ids(&[1, 9, 0])));
        assert_eq!(sync.mockup_ids(), ids(&[1, 0]));
        assert_eq!(sync.code_ids(), ids(&[1, 0]));
    }

    #[test]
    fn test_removal_event() {
        let mut sync = ListSynchronizer::new();
        sync.dispatch(chosen("a"));
        let outcome = sync.dispatch(BuilderEvent::RemovalRequested {
            id: PairId::new(0),
            target: ClickTarget::RemoveAffordance,
        });
        assert_eq!(
            outcome,
            DispatchOutcome::Removed(RemoveOutcome::Removed(PairId::new(0)))
        );
        assert!(outcome.changed());
        assert!(sync.is_empty());
        assert!(sync.code().is_empty());
    }

    #[test]
    fn test_changed_flag() {
        assert!(!DispatchOutcome::Added(AddOutcome::DuplicateSkipped).changed());
        assert!(!DispatchOutcome::Removed(RemoveOutcome::NotFound).changed());
        assert!(!DispatchOutcome::Removed(RemoveOutcome::Ignored).changed());
        assert!(DispatchOutcome::Added(AddOutcome::Added(PairId::new(0))).changed());
    }
}
