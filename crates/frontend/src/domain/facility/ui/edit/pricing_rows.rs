//! Pricing schedule editing state
//!
//! Rows are tagged with session-local ids so selection survives reordering
//! and insertion while the facility is still unsaved. Ids come from the
//! shared [`Sequence`] and are dropped before the facility is sent to the
//! server.

use crate::shared::sequence::Sequence;
use contracts::domain::facility::Pricing;
use std::collections::HashSet;

/// One pricing row under edit
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRow {
    pub local_id: i64,
    pub pricing: Pricing,
}

/// Ordered pricing rows plus the selection driving the bulk actions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingRows {
    rows: Vec<PricingRow>,
    selected: HashSet<i64>,
}

impl PricingRows {
    /// Wrap persisted pricing entries for editing, assigning fresh local ids
    pub fn from_pricing(pricing: Vec<Pricing>, seq: &Sequence) -> Self {
        let rows = pricing
            .into_iter()
            .map(|pricing| PricingRow {
                local_id: seq.nextval(),
                pricing,
            })
            .collect();
        Self {
            rows,
            selected: HashSet::new(),
        }
    }

    /// Strip local ids for the save payload
    pub fn into_pricing(self) -> Vec<Pricing> {
        self.rows.into_iter().map(|row| row.pricing).collect()
    }

    /// Append a blank row
    pub fn add_row(&mut self, seq: &Sequence) {
        self.rows.push(PricingRow {
            local_id: seq.nextval(),
            pricing: Pricing::default(),
        });
    }

    /// Remove every selected row
    ///
    /// Walks from the end so earlier indices stay valid during in-place
    /// removal. Removal is keyed off each row's own id; selected ids with
    /// no matching row are left alone.
    pub fn remove_selected(&mut self) {
        for i in (0..self.rows.len()).rev() {
            let id = self.rows[i].local_id;
            if self.selected.contains(&id) {
                self.rows.remove(i);
                self.selected.remove(&id);
            }
        }
    }

    /// Append a deep copy of every selected row
    ///
    /// Selection moves from each original to its clone. Only rows present
    /// at entry are considered, so freshly appended clones are not cloned
    /// again within the same call.
    pub fn clone_selected(&mut self, seq: &Sequence) {
        let len = self.rows.len();
        for i in 0..len {
            let id = self.rows[i].local_id;
            if self.selected.remove(&id) {
                let pricing = self.rows[i].pricing.clone();
                let local_id = seq.nextval();
                self.selected.insert(local_id);
                self.rows.push(PricingRow { local_id, pricing });
            }
        }
    }

    pub fn select_all(&mut self) {
        for row in &self.rows {
            self.selected.insert(row.local_id);
        }
    }

    pub fn unselect_all(&mut self) {
        self.selected.clear();
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn rows(&self) -> &[PricingRow] {
        &self.rows
    }

    pub fn is_selected(&self, local_id: i64) -> bool {
        self.selected.contains(&local_id)
    }

    pub fn set_selected(&mut self, local_id: i64, selected: bool) {
        if selected {
            self.selected.insert(local_id);
        } else {
            self.selected.remove(&local_id);
        }
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|row| self.selected.contains(&row.local_id))
    }

    /// Mutate the pricing of the row with the given local id
    pub fn update_row(&mut self, local_id: i64, f: impl FnOnce(&mut Pricing)) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.local_id == local_id) {
            f(&mut row.pricing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::facility::TimeSpan;
    use contracts::enums::{CapacityType, DayType, Usage};

    fn editor_with_rows(n: usize, seq: &Sequence) -> PricingRows {
        let mut editor = PricingRows::default();
        for _ in 0..n {
            editor.add_row(seq);
        }
        editor
    }

    fn car_pricing() -> Pricing {
        Pricing {
            capacity_type: Some(CapacityType::Car),
            usage: Some(Usage::ParkAndRide),
            max_capacity: Some(50),
            day_type: Some(DayType::BusinessDay),
            time: TimeSpan {
                from: Some("7:00".to_string()),
                until: Some("18:00".to_string()),
            },
            price: Some("2,00".to_string()),
        }
    }

    #[test]
    fn added_rows_get_distinct_increasing_ids() {
        let seq = Sequence::new();
        let editor = editor_with_rows(5, &seq);

        let ids: Vec<i64> = editor.rows().iter().map(|r| r.local_id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        let distinct: HashSet<i64> = ids.iter().copied().collect();
        assert_eq!(distinct.len(), ids.len());
    }

    #[test]
    fn loading_existing_pricing_assigns_fresh_ids() {
        let seq = Sequence::new();
        seq.nextval();

        let editor = PricingRows::from_pricing(vec![car_pricing(), Pricing::default()], &seq);
        assert_eq!(editor.rows().len(), 2);
        assert!(editor.rows().iter().all(|r| r.local_id > 1));
        assert_eq!(editor.selected_count(), 0);
    }

    #[test]
    fn remove_selected_empties_the_editor_iff_all_rows_were_selected() {
        let seq = Sequence::new();
        let mut editor = editor_with_rows(3, &seq);

        editor.set_selected(editor.rows()[1].local_id, true);
        editor.remove_selected();
        assert_eq!(editor.rows().len(), 2);
        assert!(editor.has_rows());

        editor.select_all();
        editor.remove_selected();
        assert!(!editor.has_rows());
        assert_eq!(editor.selected_count(), 0);
    }

    #[test]
    fn remove_selected_with_empty_selection_is_a_no_op() {
        let seq = Sequence::new();
        let mut editor = editor_with_rows(2, &seq);
        let before = editor.clone();

        editor.remove_selected();
        assert_eq!(editor, before);
    }

    #[test]
    fn stale_selected_ids_are_tolerated() {
        let seq = Sequence::new();
        let mut editor = editor_with_rows(2, &seq);

        // id that never belonged to a row
        editor.set_selected(9999, true);
        editor.remove_selected();
        assert_eq!(editor.rows().len(), 2);

        // the stale id stays selected until explicitly cleared
        assert!(editor.is_selected(9999));
        editor.unselect_all();
        assert_eq!(editor.selected_count(), 0);
    }

    #[test]
    fn clone_selected_grows_by_selection_size_and_moves_selection() {
        let seq = Sequence::new();
        let mut editor = PricingRows::from_pricing(vec![car_pricing(), Pricing::default()], &seq);
        let first_id = editor.rows()[0].local_id;
        editor.set_selected(first_id, true);

        editor.clone_selected(&seq);

        assert_eq!(editor.rows().len(), 3);
        let clone = editor.rows().last().unwrap().clone();
        assert_eq!(clone.pricing, car_pricing());
        assert_ne!(clone.local_id, first_id);
        assert!(!editor.is_selected(first_id));
        assert!(editor.is_selected(clone.local_id));
    }

    #[test]
    fn clones_are_deep_copies() {
        let seq = Sequence::new();
        let mut editor = PricingRows::from_pricing(vec![car_pricing()], &seq);
        editor.select_all();
        editor.clone_selected(&seq);

        let clone_id = editor.rows()[1].local_id;
        editor.update_row(clone_id, |pricing| {
            pricing.max_capacity = Some(1);
            pricing.time.from = Some("0:00".to_string());
        });

        assert_eq!(editor.rows()[0].pricing, car_pricing());
    }

    #[test]
    fn clone_selected_does_not_reclone_fresh_clones() {
        let seq = Sequence::new();
        let mut editor = editor_with_rows(2, &seq);
        editor.select_all();

        editor.clone_selected(&seq);
        assert_eq!(editor.rows().len(), 4);

        // clones carry the selection now; a second call clones only them
        editor.clone_selected(&seq);
        assert_eq!(editor.rows().len(), 6);
    }

    #[test]
    fn clone_selected_with_empty_selection_is_a_no_op() {
        let seq = Sequence::new();
        let mut editor = editor_with_rows(2, &seq);
        let before = editor.clone();

        editor.clone_selected(&seq);
        assert_eq!(editor, before);
    }

    #[test]
    fn select_all_then_unselect_all_restores_empty_selection() {
        let seq = Sequence::new();
        let mut editor = editor_with_rows(3, &seq);

        editor.select_all();
        assert!(editor.all_selected());
        assert_eq!(editor.selected_count(), 3);

        editor.add_row(&seq);
        assert!(!editor.all_selected());

        editor.unselect_all();
        assert_eq!(editor.selected_count(), 0);
        assert!(!editor.all_selected());
    }

    #[test]
    fn into_pricing_strips_local_ids_and_keeps_order() {
        let seq = Sequence::new();
        let mut editor = PricingRows::from_pricing(vec![car_pricing()], &seq);
        editor.add_row(&seq);

        let pricing = editor.into_pricing();
        assert_eq!(pricing, vec![car_pricing(), Pricing::default()]);
    }
}
