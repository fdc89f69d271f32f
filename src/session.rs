use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::journal::{compute_statistics, JournalError, JournalStore, PendingEdits, TradeInput};
use crate::view::{render, View};

/// Everything the rendering surface can send back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(TradeInput),
    ToggleSelected { row: usize, selected: bool }, // 0-based row
    EditNotes { row: usize, notes: String },
    ClickDelete,
}

impl UserAction {
    pub fn action_type(&self) -> &'static str {
        match self {
            UserAction::Submit(_) => "submit",
            UserAction::ToggleSelected { .. } => "toggle_selected",
            UserAction::EditNotes { .. } => "edit_notes",
            UserAction::ClickDelete => "click_delete",
        }
    }
}

/// One user's journal. Created empty, dropped when the session ends.
///
/// Store mutations are always followed by a full refresh: staged edits are rebuilt from
/// the stored records and the view is rendered from scratch.
#[derive(Debug)]
pub struct Session {
    config: Config,
    store: JournalStore,
    edits: PendingEdits,
    flash: Option<String>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: JournalStore::new(),
            edits: PendingEdits::default(),
            flash: None,
        }
    }

    pub fn store(&self) -> &JournalStore {
        &self.store
    }

    pub fn edits(&self) -> &PendingEdits {
        &self.edits
    }

    /// Applies one action and returns the refreshed view. On error nothing has changed.
    #[instrument(skip(self, action), fields(action = action.action_type()))]
    pub fn handle(&mut self, action: UserAction) -> Result<View, JournalError> {
        match action {
            UserAction::Submit(input) => {
                let symbol = input.symbol;
                self.store.add_trade(input)?;
                self.flash = Some(format!("Added {}!", symbol));
                Ok(self.refresh())
            }
            UserAction::ToggleSelected { row, selected } => {
                self.edits.set_selected(row, selected)?;
                debug!(row, selected, "Row selection staged");
                Ok(self.view())
            }
            UserAction::EditNotes { row, notes } => {
                self.edits.set_notes(row, notes)?;
                debug!(row, "Notes edit staged");
                Ok(self.view())
            }
            UserAction::ClickDelete => {
                let removed = self.store.delete_selected(&self.edits)?;
                info!(removed, "Delete pass applied");
                Ok(self.refresh())
            }
        }
    }

    /// Full refresh after a store mutation
    fn refresh(&mut self) -> View {
        self.edits = PendingEdits::from_records(self.store.records());
        self.view()
    }

    /// Renders current state. A pending confirmation is shown once, then cleared.
    pub fn view(&mut self) -> View {
        let statistics = compute_statistics(self.store.records());
        let flash = self.flash.take();
        render(
            self.store.records(),
            &statistics,
            &self.edits,
            &self.config,
            flash.as_deref(),
        )
    }
}
