//! Keeps the mockup list and the code list in lockstep.
//!
//! The two containers are the whole state. The mockup list's order is the
//! source of truth; the code list follows it through [`ListSynchronizer::resync`].

use tracing::{debug, info, warn};

use crate::config::{BuilderConfig, DuplicatePolicy, RemovalMode};
use crate::container::EntryList;
use crate::entry::{CodeEntry, MockupEntry};
use crate::pair::{Pair, PairId};
use crate::pair_registry::PairRegistry;
use crate::palette::PaletteEntry;

/// Result of choosing a palette entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added(PairId),
    /// An entry with the same display text is already in the mockup list
    DuplicateSkipped,
}

/// Result of a removal request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(PairId),
    /// Nothing with that id is left in the mockup list
    NotFound,
    /// The click did not land on anything that removes
    Ignored,
}

/// What a click inside a mockup entry landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The explicit "X" control
    RemoveAffordance,
    /// Anywhere else on the entry (its image, padding)
    EntryBody,
    /// Interactive content that is not the removal control
    InteractiveContent,
}

impl ClickTarget {
    /// Whether a click on this target removes the enclosing entry
    pub fn removes(self, mode: RemovalMode) -> bool {
        match self {
            ClickTarget::RemoveAffordance => true,
            ClickTarget::EntryBody => mode == RemovalMode::WholeEntry,
            ClickTarget::InteractiveContent => false,
        }
    }
}

pub struct ListSynchronizer {
    registry: PairRegistry,
    mockup: EntryList<MockupEntry>,
    code: EntryList<CodeEntry>,
    duplicate_policy: DuplicatePolicy,
    removal_mode: RemovalMode,
}

impl Default for ListSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSynchronizer {
    pub fn new() -> Self {
        Self::with_policies(DuplicatePolicy::default(), RemovalMode::default())
    }

    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::with_policies(config.duplicate_policy, config.removal_mode)
    }

    pub fn with_policies(duplicate_policy: DuplicatePolicy, removal_mode: RemovalMode) -> Self {
        Self {
            registry: PairRegistry::new(),
            mockup: EntryList::new(),
            code: EntryList::new(),
            duplicate_policy,
            removal_mode,
        }
    }

    pub fn mockup(&self) -> &EntryList<MockupEntry> {
        &self.mockup
    }

    pub fn code(&self) -> &EntryList<CodeEntry> {
        &self.code
    }

    pub fn registry(&self) -> &PairRegistry {
        &self.registry
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    pub fn removal_mode(&self) -> RemovalMode {
        self.removal_mode
    }

    pub fn mockup_ids(&self) -> Vec<PairId> {
        self.mockup.ids().to_vec()
    }

    pub fn code_ids(&self) -> Vec<PairId> {
        self.code.ids().to_vec()
    }

    pub fn len(&self) -> usize {
        self.mockup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mockup.is_empty()
    }

    /// Both entries of a pair, if the pair is still alive
    pub fn pair(&self, id: PairId) -> Option<Pair<'_>> {
        let mockup = self.registry.find(&self.mockup, id)?;
        let code = self.registry.find(&self.code, id)?;
        Some(Pair { id, mockup, code })
    }

    /// Append a copy of `source` to both lists.
    pub fn add_pair(&mut self, source: &PaletteEntry) -> AddOutcome {
        if self.duplicate_policy == DuplicatePolicy::SuppressIdenticalDisplay
            && self.contains_display_text(source.display_text())
        {
            debug!("Skipping duplicate palette entry: {}", source.key);
            return AddOutcome::DuplicateSkipped;
        }

        let id = self.registry.next_id();
        let mockup = MockupEntry::from_palette(id, source);
        let code = CodeEntry::from_palette(id, source);

        if self.mockup.append(mockup).is_some() || self.code.append(code).is_some() {
            // Fresh ids cannot collide; reaching this means the registry was bypassed.
            warn!("Pair id {} already present, entry not added", id);
        }

        info!("Added pair {} from palette entry {}", id, source.key);
        AddOutcome::Added(id)
    }

    /// Reorder the code list to follow `new_visual_order`.
    ///
    /// Runs after the drag collaborator has already reordered the mockup list;
    /// the mockup list itself is never touched here. Ids without a code entry
    /// are skipped. Returns how many code entries were placed.
    pub fn resync(&mut self, new_visual_order: &[PairId]) -> usize {
        let missing = new_visual_order
            .iter()
            .filter(|&&id| self.registry.find(&self.code, id).is_none())
            .count();
        if missing > 0 {
            debug!("Resync skipped {} id(s) without a code entry", missing);
        }
        self.code.reorder(new_visual_order)
    }

    /// Remove both entries of pair `id`. Repeating the call is harmless.
    pub fn remove_pair(&mut self, id: PairId) -> RemoveOutcome {
        if self.mockup.detach(id).is_none() {
            debug!("Pair {} not in mockup list, nothing to remove", id);
            return RemoveOutcome::NotFound;
        }
        if self.code.detach(id).is_none() {
            debug!("Pair {} had no code entry", id);
        }
        info!("Removed pair {}", id);
        RemoveOutcome::Removed(id)
    }

    /// Resolve a click inside the mockup entry `id` and remove it if the
    /// click targets removal under the configured [`RemovalMode`].
    pub fn handle_click(&mut self, id: PairId, target: ClickTarget) -> RemoveOutcome {
        if !target.removes(self.removal_mode) {
            return RemoveOutcome::Ignored;
        }
        self.remove_pair(id)
    }

    /// Apply the order the drag collaborator left the mockup list in.
    pub(crate) fn adopt_visual_order(&mut self, order: &[PairId]) {
        self.mockup.reorder(order);
    }

    fn contains_display_text(&self, text: &str) -> bool {
        self.mockup
            .iter()
            .any(|entry| entry.display_text.trim() == text.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::CodeLayout;

    fn entry(key: &str) -> PaletteEntry {
        PaletteEntry::new(key, key.to_uppercase()).with_snippet(format!("<{key}></{key}>"))
    }

    fn ids(raw: &[u64]) -> Vec<PairId> {
        raw.iter().copied().map(PairId::new).collect()
    }

    fn code_texts(sync: &ListSynchronizer) -> Vec<String> {
        sync.code()
            .iter()
            .map(|e| e.source_content.clone())
            .collect()
    }

    #[test]
    fn test_add_pair_appends_to_both_lists() {
        let mut sync = ListSynchronizer::new();
        assert_eq!(sync.add_pair(&entry("a")), AddOutcome::Added(PairId::new(0)));
        assert_eq!(sync.add_pair(&entry("b")), AddOutcome::Added(PairId::new(1)));
        assert_eq!(sync.mockup_ids(), ids(&[0, 1]));
        assert_eq!(sync.code_ids(), ids(&[0, 1]));
        assert_eq!(code_texts(&sync), vec!["<a></a>", "<b></b>"]);
    }

    #[test]
    fn test_always_append_allows_repeats() {
        let mut sync = ListSynchronizer::new();
        sync.add_pair(&entry("a"));
        assert_eq!(sync.add_pair(&entry("a")), AddOutcome::Added(PairId::new(1)));
        assert_eq!(sync.len(), 2);
    }

    #[test]
    fn test_suppress_identical_display() {
        let mut sync = ListSynchronizer::with_policies(
            DuplicatePolicy::SuppressIdenticalDisplay,
            RemovalMode::WholeEntry,
        );
        let first = PaletteEntry::new("one", "Card");
        let second = PaletteEntry::new("two", "  Card  ");
        assert_eq!(sync.add_pair(&first), AddOutcome::Added(PairId::new(0)));
        assert_eq!(sync.add_pair(&second), AddOutcome::DuplicateSkipped);
        assert_eq!(sync.len(), 1);
        // No id was consumed by the skipped click
        assert_eq!(sync.registry().issued(), 1);
    }

    #[test]
    fn test_suppression_lifts_after_removal() {
        let mut sync = ListSynchronizer::with_policies(
            DuplicatePolicy::SuppressIdenticalDisplay,
            RemovalMode::WholeEntry,
        );
        sync.add_pair(&entry("a"));
        sync.remove_pair(PairId::new(0));
        assert_eq!(sync.add_pair(&entry("a")), AddOutcome::Added(PairId::new(1)));
    }

    #[test]
    fn test_missing_snippet_falls_back_to_label() {
        let mut sync = ListSynchronizer::new();
        sync.add_pair(&PaletteEntry::new("hr", "Divider"));
        let pair = sync.pair(PairId::new(0)).unwrap();
        assert_eq!(pair.source_content(), "Divider");
        assert_eq!(pair.code.layout, CodeLayout::Plain);
    }

    #[test]
    fn test_resync_leaves_mockup_alone() {
        let mut sync = ListSynchronizer::new();
        for key in ["a", "b", "c"] {
            sync.add_pair(&entry(key));
        }
        assert_eq!(sync.resync(&ids(&[2, 0, 1])), 3);
        assert_eq!(sync.code_ids(), ids(&[2, 0, 1]));
        assert_eq!(sync.mockup_ids(), ids(&[0, 1, 2]));
    }

    #[test]
    fn test_resync_skips_unknown_ids() {
        let mut sync = ListSynchronizer::new();
        sync.add_pair(&entry("a"));
        sync.add_pair(&entry("b"));
        assert_eq!(sync.resync(&ids(&[1, 42, 0])), 2);
        assert_eq!(sync.code_ids(), ids(&[1, 0]));
    }

    #[test]
    fn test_remove_pair_is_idempotent() {
        let mut sync = ListSynchronizer::new();
        sync.add_pair(&entry("a"));
        sync.add_pair(&entry("b"));
        assert_eq!(
            sync.remove_pair(PairId::new(0)),
            RemoveOutcome::Removed(PairId::new(0))
        );
        assert_eq!(sync.remove_pair(PairId::new(0)), RemoveOutcome::NotFound);
        assert_eq!(sync.mockup_ids(), ids(&[1]));
        assert_eq!(sync.code_ids(), ids(&[1]));
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut sync = ListSynchronizer::new();
        sync.add_pair(&entry("a"));
        sync.remove_pair(PairId::new(0));
        assert_eq!(sync.add_pair(&entry("a")), AddOutcome::Added(PairId::new(1)));
    }

    #[test]
    fn test_click_targets_whole_entry_mode() {
        let mut sync = ListSynchronizer::new();
        sync.add_pair(&entry("a"));
        sync.add_pair(&entry("b"));
        assert_eq!(
            sync.handle_click(PairId::new(0), ClickTarget::InteractiveContent),
            RemoveOutcome::Ignored
        );
        assert_eq!(
            sync.handle_click(PairId::new(0), ClickTarget::EntryBody),
            RemoveOutcome::Removed(PairId::new(0))
        );
        assert_eq!(
            sync.handle_click(PairId::new(1), ClickTarget::RemoveAffordance),
            RemoveOutcome::Removed(PairId::new(1))
        );
        assert!(sync.is_empty());
    }

    #[test]
    fn test_click_targets_affordance_only_mode() {
        let mut sync =
            ListSynchronizer::with_policies(DuplicatePolicy::AlwaysAppend, RemovalMode::AffordanceOnly);
        sync.add_pair(&entry("a"));
        assert_eq!(
            sync.handle_click(PairId::new(0), ClickTarget::EntryBody),
            RemoveOutcome::Ignored
        );
        assert_eq!(
            sync.handle_click(PairId::new(0), ClickTarget::RemoveAffordance),
            RemoveOutcome::Removed(PairId::new(0))
        );
    }

    #[test]
    fn test_pair_view_joins_both_entries() {
        let mut sync = ListSynchronizer::new();
        sync.add_pair(&entry("nav"));
        let pair = sync.pair(PairId::new(0)).unwrap();
        assert_eq!(pair.mockup.display_text, "NAV");
        assert_eq!(pair.source_content(), "<nav></nav>");
        assert!(sync.pair(PairId::new(1)).is_none());
    }
}
