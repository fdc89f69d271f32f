use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::JournalError;

/// Creation timestamps are kept at minute precision in local time
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Instruments the journal accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[serde(rename = "NAS100")]
    Nas100,
    #[serde(rename = "XAUUSD")]
    XauUsd,
    #[serde(rename = "GBPUSD")]
    GbpUsd,
    #[serde(rename = "EURUSD")]
    EurUsd,
    #[serde(rename = "BTCUSD")]
    BtcUsd,
}

impl Symbol {
    pub const ALL: [Symbol; 5] = [
        Symbol::Nas100,
        Symbol::XauUsd,
        Symbol::GbpUsd,
        Symbol::EurUsd,
        Symbol::BtcUsd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Nas100 => "NAS100",
            Symbol::XauUsd => "XAUUSD",
            Symbol::GbpUsd => "GBPUSD",
            Symbol::EurUsd => "EURUSD",
            Symbol::BtcUsd => "BTCUSD",
        }
    }
}

impl FromStr for Symbol {
    type Err = JournalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Symbol::ALL
            .into_iter()
            .find(|symbol| symbol.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| JournalError::UnknownSymbol(value.to_string()))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Buy => "Buy",
            Direction::Sell => "Sell",
        }
    }
}

impl FromStr for Direction {
    type Err = JournalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "buy" => Ok(Direction::Buy),
            "sell" => Ok(Direction::Sell),
            _ => Err(JournalError::UnknownDirection(value.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Form fields for a new trade, before it becomes a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeInput {
    pub symbol: Symbol,
    pub direction: Direction,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub pnl: Decimal, // Signed, negative is a loss. Not checked against direction or prices.
    pub notes: String,
}

impl TradeInput {
    /// Prices must be non-negative. Nothing else is validated.
    pub fn validate(&self) -> Result<(), JournalError> {
        if self.entry_price < Decimal::ZERO {
            return Err(JournalError::NegativePrice { field: "entry price", value: self.entry_price });
        }
        if self.exit_price < Decimal::ZERO {
            return Err(JournalError::NegativePrice { field: "exit price", value: self.exit_price });
        }
        Ok(())
    }
}

/// One committed journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeRecord {
    pub selected: bool, // Staging flag for bulk delete, always false once stored
    pub timestamp: String,
    pub symbol: Symbol,
    pub direction: Direction,
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub pnl: Decimal,
    pub notes: String,
}

impl TradeRecord {
    pub fn is_win(&self) -> bool {
        self.pnl > Decimal::ZERO
    }
}
