//! Receipt selection for consolidated invoices
//!
//! The invoices screen lists a customer's receipts with a checkbox on each
//! row and a "select all" checkbox in the header. `SelectionSet` owns that
//! state for one screen; it is never persisted.

use core_kernel::ReceiptId;

use crate::receipt::Receipt;

#[derive(Debug, Clone)]
struct Entry {
    receipt: Receipt,
    selected: bool,
}

/// Ordered receipts with a selected flag on each
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    entries: Vec<Entry>,
}

impl SelectionSet {
    /// Creates a selection with nothing selected
    pub fn new(receipts: Vec<Receipt>) -> Self {
        let mut set = Self::default();
        set.replace(receipts);
        set
    }

    /// Replaces the receipts after a re-fetch, clearing every flag
    pub fn replace(&mut self, receipts: Vec<Receipt>) {
        self.entries = receipts
            .into_iter()
            .map(|receipt| Entry {
                receipt,
                selected: false,
            })
            .collect();
    }

    /// Flips one receipt's flag. Unknown ids are ignored.
    pub fn toggle_one(&mut self, receipt_id: ReceiptId) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.receipt.receipt_id == receipt_id)
        {
            Some(entry) => entry.selected = !entry.selected,
            None => tracing::debug!(%receipt_id, "toggle for unknown receipt ignored"),
        }
    }

    /// Sets every flag to `checked`
    pub fn toggle_all(&mut self, checked: bool) {
        for entry in &mut self.entries {
            entry.selected = checked;
        }
    }

    /// Header checkbox state: true iff there are receipts and all are selected
    pub fn select_all(&self) -> bool {
        !self.entries.is_empty() && self.entries.iter().all(|entry| entry.selected)
    }

    /// Selected receipts in list order
    pub fn selected_receipts(&self) -> Vec<&Receipt> {
        self.entries
            .iter()
            .filter(|entry| entry.selected)
            .map(|entry| &entry.receipt)
            .collect()
    }

    pub fn is_selected(&self, receipt_id: ReceiptId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.selected && entry.receipt.receipt_id == receipt_id)
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.selected).count()
    }

    /// All receipts in list order
    pub fn receipts(&self) -> impl Iterator<Item = &Receipt> {
        self.entries.iter().map(|entry| &entry.receipt)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Printing is only offered for a non-empty selection
    pub fn can_print(&self) -> bool {
        self.entries.iter().any(|entry| entry.selected)
    }
}

impl FromIterator<Receipt> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Receipt>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{ClientId, ServiceId};

    fn receipts(ids: &[i64]) -> Vec<Receipt> {
        ids.iter()
            .map(|id| Receipt::new(ReceiptId::new(*id), ServiceId::new(1), ClientId::new(1), 100))
            .collect()
    }

    fn ids(set: &SelectionSet) -> Vec<i64> {
        set.selected_receipts()
            .iter()
            .map(|r| r.receipt_id.value())
            .collect()
    }

    #[test]
    fn test_starts_unselected() {
        let set = SelectionSet::new(receipts(&[1, 2]));
        assert_eq!(set.selected_count(), 0);
        assert!(!set.select_all());
        assert!(!set.can_print());
    }

    #[test]
    fn test_toggle_all_then_one() {
        let mut set = SelectionSet::new(receipts(&[1, 2, 3]));
        set.toggle_all(true);
        assert!(set.select_all());

        set.toggle_one(ReceiptId::new(2));
        assert!(!set.select_all());
        assert_eq!(ids(&set), vec![1, 3]);

        set.toggle_one(ReceiptId::new(2));
        assert!(set.select_all());
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut set = SelectionSet::new(receipts(&[1]));
        set.toggle_one(ReceiptId::new(99));
        assert_eq!(set.selected_count(), 0);
    }

    #[test]
    fn test_empty_collection_is_never_all_selected() {
        let mut set = SelectionSet::default();
        set.toggle_all(true);
        assert!(!set.select_all());
        assert!(set.is_empty());
    }

    #[test]
    fn test_replace_clears_flags() {
        let mut set = SelectionSet::new(receipts(&[1, 2]));
        set.toggle_all(true);
        set.replace(receipts(&[2, 3]));
        assert_eq!(set.len(), 2);
        assert!(!set.is_selected(ReceiptId::new(2)));
    }
}
