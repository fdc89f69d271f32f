pub mod types;
pub mod error;
pub mod store;
pub mod statistics;
pub mod edits;

pub use edits::{PendingEdits, RowEdit};
pub use error::JournalError;
pub use statistics::{compute_statistics, Statistics};
pub use store::JournalStore;
pub use types::{Direction, Symbol, TradeInput, TradeRecord};
