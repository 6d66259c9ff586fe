// SPDX-License-Identifier: MPL-2.0
//! Visibility computation for filtered lists.
//!
//! [`ListFilterEngine`] keeps one [`ItemVisibility`] per item, in the same
//! order as the items it was last evaluated against. An item is visible iff
//! every active criterion matches AND, when a search term is present, its
//! searchable text contains the term (case-insensitive). Items are never
//! reordered.

use super::criterion::FilterCriterion;
use super::item::FilterableItem;

/// Render state of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemVisibility {
    /// Whether the item is shown.
    pub visible: bool,
    /// Whether the item matched a non-empty search term.
    pub highlighted: bool,
}

impl Default for ItemVisibility {
    fn default() -> Self {
        Self {
            visible: true,
            highlighted: false,
        }
    }
}

/// Recomputes item visibility from criteria and a search term.
#[derive(Debug, Clone, Default)]
pub struct ListFilterEngine {
    criteria: Vec<FilterCriterion>,
    search: String,
    states: Vec<ItemVisibility>,
}

impl ListFilterEngine {
    /// Creates an engine with no criteria and no search term.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active criteria and recomputes visibility.
    pub fn apply_filters<I: FilterableItem>(&mut self, items: &[I], criteria: Vec<FilterCriterion>) {
        self.criteria = criteria;
        self.refresh(items);
    }

    /// Replaces the search term and recomputes visibility.
    ///
    /// An empty (or whitespace-only) term removes the search constraint.
    pub fn apply_search<I: FilterableItem>(&mut self, items: &[I], term: &str) {
        self.search = term.trim().to_lowercase();
        self.refresh(items);
    }

    /// Drops every criterion and the search term; all items become visible.
    pub fn clear<I: FilterableItem>(&mut self, items: &[I]) {
        self.criteria.clear();
        self.search.clear();
        self.refresh(items);
    }

    /// Recomputes visibility with the current criteria and search term.
    ///
    /// Call after the item list itself changed (load, insertion).
    pub fn refresh<I: FilterableItem>(&mut self, items: &[I]) {
        let active: Vec<&FilterCriterion> =
            self.criteria.iter().filter(|c| c.is_active()).collect();
        let searching = !self.search.is_empty();

        self.states = items
            .iter()
            .map(|item| {
                let meta = item.metadata();
                let passes_criteria = active.iter().all(|criterion| criterion.matches(&meta));
                let passes_search = !searching || meta.search_matches(&self.search);
                let visible = passes_criteria && passes_search;
                ItemVisibility {
                    visible,
                    highlighted: visible && searching,
                }
            })
            .collect();
    }

    /// Returns the render state of the item at `index`.
    ///
    /// Items the engine has not evaluated yet are shown and not highlighted.
    #[must_use]
    pub fn visibility(&self, index: usize) -> ItemVisibility {
        self.states.get(index).copied().unwrap_or_default()
    }

    /// Returns `true` if the item at `index` is shown.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visibility(index).visible
    }

    /// Indices of visible items, in original order.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.visible)
            .map(|(index, _)| index)
    }

    /// Pairs each visible item with its render state, in original order.
    pub fn visible_items<'a, I>(
        &'a self,
        items: &'a [I],
    ) -> impl Iterator<Item = (usize, &'a I, ItemVisibility)> + 'a {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| (index, item, self.visibility(index)))
            .filter(|(_, _, state)| state.visible)
    }

    /// Number of visible items from the last pass.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.states.iter().filter(|state| state.visible).count()
    }

    /// Returns `true` when the last pass evaluated items and hid all of them.
    ///
    /// Drives the "no results" empty state.
    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        !self.states.is_empty() && self.visible_count() == 0
    }

    /// Number of active criteria, plus one when a search term is set.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let criteria = self.criteria.iter().filter(|c| c.is_active()).count();
        criteria + usize::from(!self.search.is_empty())
    }

    /// Returns `true` if any criterion or search term constrains the list.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// The normalized (trimmed, lowercase) search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::ItemMetadata;

    fn roster() -> Vec<ItemMetadata> {
        vec![
            ItemMetadata::new()
                .text("position", "Forward")
                .text("status", "active")
                .searchable("Omar Farouk")
                .searchable("Forward"),
            ItemMetadata::new()
                .text("position", "Goalkeeper")
                .text("status", "injured")
                .searchable("Karim Adel")
                .searchable("Goalkeeper"),
            ItemMetadata::new()
                .text("position", "Forward")
                .text("status", "injured")
                .searchable("Youssef Nabil")
                .searchable("Forward"),
        ]
    }

    fn visible(engine: &ListFilterEngine) -> Vec<usize> {
        engine.visible_indices().collect()
    }

    #[test]
    fn unevaluated_engine_shows_everything() {
        let engine = ListFilterEngine::new();
        assert!(engine.is_visible(0));
        assert!(!engine.is_empty_result());
    }

    #[test]
    fn criteria_combine_with_and() {
        let items = roster();
        let mut engine = ListFilterEngine::new();
        engine.apply_filters(
            &items,
            vec![
                FilterCriterion::equals("position", "forward"),
                FilterCriterion::equals("status", "injured"),
            ],
        );
        assert_eq!(visible(&engine), vec![2]);
        assert_eq!(engine.active_count(), 2);
    }

    #[test]
    fn search_and_criteria_combine() {
        let items = roster();
        let mut engine = ListFilterEngine::new();
        engine.apply_filters(&items, vec![FilterCriterion::equals("position", "forward")]);
        engine.apply_search(&items, "OMAR");
        assert_eq!(visible(&engine), vec![0]);
        assert!(engine.visibility(0).highlighted);
        assert!(!engine.visibility(1).highlighted);
    }

    #[test]
    fn empty_search_restores_and_unhighlights() {
        let items = roster();
        let mut engine = ListFilterEngine::new();
        engine.apply_search(&items, "karim");
        assert_eq!(visible(&engine), vec![1]);

        engine.apply_search(&items, "");
        assert_eq!(visible(&engine), vec![0, 1, 2]);
        assert!((0..3).all(|i| !engine.visibility(i).highlighted));
    }

    #[test]
    fn clear_shows_all_items() {
        let items = roster();
        let mut engine = ListFilterEngine::new();
        engine.apply_filters(&items, vec![FilterCriterion::equals("status", "suspended")]);
        engine.apply_search(&items, "zzz");
        assert!(engine.is_empty_result());

        engine.clear(&items);
        assert_eq!(engine.visible_count(), items.len());
        assert!(!engine.is_active());
    }

    #[test]
    fn refresh_picks_up_new_items() {
        let mut items = roster();
        let mut engine = ListFilterEngine::new();
        engine.apply_filters(&items, vec![FilterCriterion::equals("status", "active")]);
        assert_eq!(visible(&engine), vec![0]);

        items.push(ItemMetadata::new().text("status", "active"));
        engine.refresh(&items);
        assert_eq!(visible(&engine), vec![0, 3]);
    }

    #[test]
    fn visible_items_keeps_original_order() {
        let items = roster();
        let mut engine = ListFilterEngine::new();
        engine.apply_search(&items, "forward");
        let order: Vec<usize> = engine.visible_items(&items).map(|(i, _, _)| i).collect();
        assert_eq!(order, vec![0, 2]);
    }
}
