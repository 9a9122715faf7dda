//! Multi-select selection state for record tables.
//!
//! Selection is tracked by string id so it stays stable while the list is
//! filtered or re-sorted. Every operation returns a new [`Selection`]; the
//! previous value is left untouched, so a UI layer can diff old and new.
//!
//! Operations that need list order (range selection, select-all) take the
//! current records and a key selector `Fn(&T) -> &str`.

use std::collections::HashSet;

/// ID-based multi-selection with a range anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Currently selected ids. May contain ids that are no longer listed.
    selected: HashSet<String>,
    /// Anchor for range selection: the id touched by the last toggle.
    anchor: Option<String>,
    /// Record snapshot this selection was last reconciled against.
    epoch: u64,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty selection bound to a record snapshot.
    pub fn for_epoch(epoch: u64) -> Self {
        Self {
            epoch,
            ..Self::default()
        }
    }

    /// Get all selected ids (sorted for deterministic ordering).
    pub fn selected_ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected ids, stale ones included.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// The anchor for the next range selection.
    pub fn last_selected_id(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether this selection predates the record snapshot `epoch`.
    pub fn is_stale(&self, epoch: u64) -> bool {
        self.epoch != epoch
    }

    /// Toggle `id`, or extend from the anchor to `id` (Shift+click).
    ///
    /// With `extend_range` set and an anchor other than `id`, every record
    /// between the anchor and `id` (inclusive, in `records` order) is added.
    /// Range selection only adds; ids outside the range are kept and ids
    /// inside it stay selected. If the anchor or `id` is not in `records`,
    /// this falls back to a plain toggle of `id`.
    ///
    /// The anchor moves to `id` in every case.
    pub fn toggle<T, K>(&self, id: &str, extend_range: bool, records: &[T], key: K) -> Selection
    where
        K: Fn(&T) -> &str,
    {
        let mut next = self.clone();

        let range = match self.anchor.as_deref() {
            Some(anchor) if extend_range && anchor != id => {
                let bounds = range_bounds(anchor, id, records, &key);
                if bounds.is_none() {
                    log::debug!(
                        "[Selection::toggle] anchor '{}' or target '{}' not listed, toggling",
                        anchor,
                        id
                    );
                }
                bounds
            }
            _ => None,
        };

        match range {
            Some((start, end)) => {
                for record in &records[start..=end] {
                    next.selected.insert(key(record).to_string());
                }
            }
            None => {
                if !next.selected.remove(id) {
                    next.selected.insert(id.to_string());
                }
            }
        }

        next.anchor = Some(id.to_string());
        next
    }

    /// Select every record in `records`. Clears the anchor.
    pub fn select_all<T, K>(&self, records: &[T], key: K) -> Selection
    where
        K: Fn(&T) -> &str,
    {
        Selection {
            selected: records.iter().map(|r| key(r).to_string()).collect(),
            anchor: None,
            epoch: self.epoch,
        }
    }

    /// Deselect everything. Clears the anchor.
    pub fn cleared(&self) -> Selection {
        Selection::for_epoch(self.epoch)
    }

    /// Drop ids that are not in `records` and bind to snapshot `epoch`.
    ///
    /// Hosts call this after replacing the record list wholesale. The anchor
    /// survives only if its record is still listed.
    pub fn reconcile<T, K>(&self, records: &[T], key: K, epoch: u64) -> Selection
    where
        K: Fn(&T) -> &str,
    {
        let listed: HashSet<&str> = records.iter().map(|r| key(r)).collect();
        let selected: HashSet<String> = self
            .selected
            .iter()
            .filter(|id| listed.contains(id.as_str()))
            .cloned()
            .collect();
        let anchor = self
            .anchor
            .as_ref()
            .filter(|id| listed.contains(id.as_str()))
            .cloned();

        let dropped = self.selected.len() - selected.len();
        if dropped > 0 {
            log::debug!("[Selection::reconcile] dropped {} stale ids", dropped);
        }

        Selection {
            selected,
            anchor,
            epoch,
        }
    }

    /// Derived flags over the current records.
    pub fn view<'a, T, K>(&'a self, records: &'a [T], key: K) -> SelectionView<'a, T, K>
    where
        K: Fn(&T) -> &str,
    {
        SelectionView {
            selection: self,
            records,
            key,
        }
    }
}

/// Closed index interval between `a` and `b` in `records`, if both are listed.
fn range_bounds<T, K>(a: &str, b: &str, records: &[T], key: &K) -> Option<(usize, usize)>
where
    K: Fn(&T) -> &str,
{
    let a_pos = records.iter().position(|r| key(r) == a)?;
    let b_pos = records.iter().position(|r| key(r) == b)?;
    Some((a_pos.min(b_pos), a_pos.max(b_pos)))
}

// =============================================================================
// SelectionView
// =============================================================================

/// State of a table's "select all" header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckbox {
    Unchecked,
    Indeterminate,
    Checked,
}

/// A selection read against the current record list.
pub struct SelectionView<'a, T, K> {
    selection: &'a Selection,
    records: &'a [T],
    key: K,
}

impl<'a, T, K> SelectionView<'a, T, K>
where
    K: Fn(&T) -> &str,
{
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Size of the raw id set.
    pub fn selected_count(&self) -> usize {
        self.selection.selected_count()
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_all_selected(&self) -> bool {
        let total = self.total_count();
        total > 0 && self.selected_count() == total
    }

    pub fn is_indeterminate(&self) -> bool {
        let selected = self.selected_count();
        selected > 0 && selected < self.total_count()
    }

    pub fn has_selection(&self) -> bool {
        self.selected_count() > 0
    }

    /// Listed records whose id is selected, in list order. Stale ids are
    /// skipped.
    pub fn selected_records(&self) -> Vec<&'a T> {
        self.records
            .iter()
            .filter(|r| self.selection.is_selected((self.key)(*r)))
            .collect()
    }

    pub fn header(&self) -> HeaderCheckbox {
        if self.is_all_selected() {
            HeaderCheckbox::Checked
        } else if self.is_indeterminate() {
            HeaderCheckbox::Indeterminate
        } else {
            HeaderCheckbox::Unchecked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("r{i}")).collect()
    }

    fn key(s: &String) -> &str {
        s.as_str()
    }

    #[test]
    fn test_plain_toggle_sets_anchor() {
        let records = ids(3);
        let s = Selection::new().toggle("r1", false, &records, key);
        assert!(s.is_selected("r1"));
        assert_eq!(s.last_selected_id(), Some("r1"));

        let s = s.toggle("r1", false, &records, key);
        assert!(!s.is_selected("r1"));
        assert_eq!(s.last_selected_id(), Some("r1"));
    }

    #[test]
    fn test_range_without_anchor_toggles() {
        let records = ids(5);
        let s = Selection::new().toggle("r3", true, &records, key);
        assert_eq!(s.selected_ids(), vec!["r3"]);
    }

    #[test]
    fn test_range_on_anchor_itself_toggles() {
        let records = ids(5);
        let s = Selection::new().toggle("r3", false, &records, key);
        let s = s.toggle("r3", true, &records, key);
        assert!(!s.has_selection());
    }

    #[test]
    fn test_range_upwards_is_additive() {
        let records = ids(8);
        let s = Selection::new()
            .toggle("r0", false, &records, key)
            .toggle("r6", false, &records, key)
            .toggle("r2", true, &records, key);
        assert_eq!(s.selected_ids(), vec!["r0", "r2", "r3", "r4", "r5", "r6"]);
    }

    #[test]
    fn test_range_keeps_deselected_anchor_added() {
        // Anchor was just deselected; the range still covers it
        let records = ids(5);
        let s = Selection::new()
            .toggle("r1", false, &records, key)
            .toggle("r1", false, &records, key)
            .toggle("r3", true, &records, key);
        assert_eq!(s.selected_ids(), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_range_with_stale_anchor_falls_back_to_toggle() {
        let old = ids(5);
        let s = Selection::new().toggle("r4", false, &old, key);

        let new: Vec<String> = vec!["r0".into(), "r1".into(), "r2".into()];
        let s = s.toggle("r1", true, &new, key);
        assert_eq!(s.selected_ids(), vec!["r1", "r4"]);
        assert_eq!(s.last_selected_id(), Some("r1"));
    }

    #[test]
    fn test_operations_leave_previous_value_untouched() {
        let records = ids(3);
        let before = Selection::new().toggle("r0", false, &records, key);
        let after = before.select_all(&records, key);
        assert_eq!(before.selected_count(), 1);
        assert_eq!(after.selected_count(), 3);
    }

    #[test]
    fn test_select_all_and_clear_reset_anchor() {
        let records = ids(4);
        let s = Selection::new().toggle("r2", false, &records, key);
        let all = s.select_all(&records, key);
        assert_eq!(all.last_selected_id(), None);
        let none = all.cleared();
        assert_eq!(none.last_selected_id(), None);
        assert!(!none.has_selection());
    }

    #[test]
    fn test_reconcile_drops_stale_ids() {
        let old = ids(5);
        let s = Selection::new()
            .select_all(&old, key)
            .toggle("r4", false, &old, key)
            .toggle("r4", false, &old, key);
        assert_eq!(s.selected_count(), 5);

        let new: Vec<String> = vec!["r1".into(), "r3".into(), "r9".into()];
        let s = s.reconcile(&new, key, 7);
        assert_eq!(s.selected_ids(), vec!["r1", "r3"]);
        assert_eq!(s.last_selected_id(), None);
        assert_eq!(s.epoch(), 7);
        assert!(!s.is_stale(7));
        assert!(s.is_stale(8));
    }

    #[test]
    fn test_view_counts_stale_ids_but_not_records() {
        let old = ids(4);
        let s = Selection::new().select_all(&old, key);
        let new = ids(2);
        let view = s.view(&new, key);
        assert_eq!(view.selected_count(), 4);
        assert_eq!(view.selected_records().len(), 2);
        assert!(!view.is_all_selected());
        assert!(!view.is_indeterminate());
    }

    #[test]
    fn test_header_states() {
        let records = ids(3);
        let s = Selection::new();
        assert_eq!(s.view(&records, key).header(), HeaderCheckbox::Unchecked);
        let s = s.toggle("r0", false, &records, key);
        assert_eq!(s.view(&records, key).header(), HeaderCheckbox::Indeterminate);
        let s = s.select_all(&records, key);
        assert_eq!(s.view(&records, key).header(), HeaderCheckbox::Checked);
    }

    #[test]
    fn test_empty_list_is_never_all_selected() {
        let records: Vec<String> = Vec::new();
        let s = Selection::new().select_all(&records, key);
        let view = s.view(&records, key);
        assert!(!view.is_all_selected());
        assert_eq!(view.header(), HeaderCheckbox::Unchecked);
    }
}
