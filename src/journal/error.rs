use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JournalError {
    #[error("{field} must not be negative (got {value})")]
    NegativePrice { field: &'static str, value: Decimal },

    #[error("unknown symbol '{0}' (expected one of NAS100, XAUUSD, GBPUSD, EURUSD, BTCUSD)")]
    UnknownSymbol(String),

    #[error("unknown direction '{0}' (expected Buy or Sell)")]
    UnknownDirection(String),

    #[error("row {row} does not exist (journal has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    #[error("adding a P&L of {pnl} would push the journal total out of range")]
    PnlOverflow { pnl: Decimal },

    #[error("view state has {edits} rows but the journal has {records}")]
    ViewMisaligned { edits: usize, records: usize },
}
