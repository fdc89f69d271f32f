use super::error::JournalError;
use super::types::TradeRecord;

/// Editable cells of one table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEdit {
    pub selected: bool,
    pub notes: String,
}

/// View-side staging area, one row per stored record in the same order.
///
/// The view writes here instead of touching records. `JournalStore::delete_selected`
/// is the only place these rows are reconciled with the canonical sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingEdits {
    rows: Vec<RowEdit>,
}

impl PendingEdits {
    /// Fresh staging rows mirroring the records as stored
    pub fn from_records(records: &[TradeRecord]) -> Self {
        let rows = records
            .iter()
            .map(|record| RowEdit {
                selected: record.selected,
                notes: record.notes.clone(),
            })
            .collect();
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[RowEdit] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&RowEdit> {
        self.rows.get(index)
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) -> Result<(), JournalError> {
        self.row_mut(index)?.selected = selected;
        Ok(())
    }

    pub fn set_notes(&mut self, index: usize, notes: impl Into<String>) -> Result<(), JournalError> {
        self.row_mut(index)?.notes = notes.into();
        Ok(())
    }

    pub fn selected_count(&self) -> usize {
        self.rows.iter().filter(|row| row.selected).count()
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut RowEdit, JournalError> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(JournalError::RowOutOfRange { row: index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edits(n: usize) -> PendingEdits {
        PendingEdits {
            rows: (0..n)
                .map(|i| RowEdit { selected: false, notes: format!("note {}", i) })
                .collect(),
        }
    }

    #[test]
    fn toggles_and_counts_selection() {
        let mut pending = edits(3);
        pending.set_selected(0, true).unwrap();
        pending.set_selected(2, true).unwrap();
        pending.set_selected(2, false).unwrap();
        assert_eq!(pending.selected_count(), 1);
        assert!(pending.row(0).unwrap().selected);
    }

    #[test]
    fn out_of_range_row_is_an_error() {
        let mut pending = edits(2);
        assert_eq!(
            pending.set_selected(2, true),
            Err(JournalError::RowOutOfRange { row: 2, len: 2 })
        );
        assert_eq!(
            pending.set_notes(5, "x"),
            Err(JournalError::RowOutOfRange { row: 5, len: 2 })
        );
        assert_eq!(pending.selected_count(), 0);
    }

    #[test]
    fn notes_edit_replaces_text() {
        let mut pending = edits(1);
        pending.set_notes(0, "FVG fill, took partials").unwrap();
        assert_eq!(pending.row(0).unwrap().notes, "FVG fill, took partials");
    }
}
