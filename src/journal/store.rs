use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, instrument};

use super::edits::PendingEdits;
use super::error::JournalError;
use super::statistics::compute_statistics;
use super::types::{TradeInput, TradeRecord, TIMESTAMP_FORMAT};

/// Ordered trade records for one session. Insertion order is display order.
#[derive(Debug, Default)]
pub struct JournalStore {
    records: Vec<TradeRecord>,
}

impl JournalStore {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a trade stamped with the current local time
    pub fn add_trade(&mut self, input: TradeInput) -> Result<&TradeRecord, JournalError> {
        self.add_trade_at(input, Local::now().naive_local())
    }

    #[instrument(skip(self, input), fields(symbol = %input.symbol, direction = %input.direction, pnl = %input.pnl))]
    pub fn add_trade_at(&mut self, input: TradeInput, at: NaiveDateTime) -> Result<&TradeRecord, JournalError> {
        // Reject before anything is built so the sequence stays untouched
        input.validate()?;
        if compute_statistics(&self.records).total_pnl.checked_add(input.pnl).is_none() {
            return Err(JournalError::PnlOverflow { pnl: input.pnl });
        }

        let record = TradeRecord {
            selected: false,
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            symbol: input.symbol,
            direction: input.direction,
            entry_price: input.entry_price,
            exit_price: input.exit_price,
            pnl: input.pnl,
            notes: input.notes,
        };
        self.records.push(record);
        info!(count = self.records.len(), "Trade added to journal");

        Ok(&self.records[self.records.len() - 1])
    }

    /// Keeps the rows not staged for deletion, taking their edited notes and clearing the flag.
    /// Locked columns always come from the stored record. Returns the number of removed records.
    #[instrument(skip(self, edits), fields(count = self.records.len(), staged = edits.selected_count()))]
    pub fn delete_selected(&mut self, edits: &PendingEdits) -> Result<usize, JournalError> {
        if edits.len() != self.records.len() {
            return Err(JournalError::ViewMisaligned {
                edits: edits.len(),
                records: self.records.len(),
            });
        }

        let before = self.records.len();
        let kept: Vec<TradeRecord> = std::mem::take(&mut self.records)
            .into_iter()
            .zip(edits.rows())
            .filter(|(_, edit)| !edit.selected)
            .map(|(record, edit)| TradeRecord {
                selected: false,
                notes: edit.notes.clone(),
                ..record
            })
            .collect();
        self.records = kept;

        let removed = before - self.records.len();
        if removed == 0 {
            debug!("No rows staged for deletion");
        } else {
            info!(removed, remaining = self.records.len(), "Deleted selected trades");
        }
        Ok(removed)
    }
}
