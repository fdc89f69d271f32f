use std::fmt;

use serde::Serialize;

use super::format::{format_currency, format_percent, format_price, format_trade_count};
use crate::config::Config;
use crate::journal::{PendingEdits, Statistics, TradeRecord};

pub const EMPTY_PLACEHOLDER: &str = "No trades recorded yet.";
pub const SYNC_LABEL: &str = "cTrader Auto-Sync";

/// Fully rendered dashboard. Built from scratch on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub title: String,
    pub flash: Option<String>,
    pub statistics: Statistics,
    pub metrics: Metrics,
    pub body: Body,
    pub footer: String,
}

/// Display strings for the three headline numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub total_pnl: String,
    pub trade_count: String,
    pub win_rate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Body {
    Placeholder(String),
    Table(Vec<Row>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub row: usize, // 1-based, as shown to the user
    pub selected: bool,
    pub timestamp: String,
    pub symbol: String,
    pub direction: String,
    pub entry_price: String,
    pub exit_price: String,
    pub pnl: String,
    pub notes: String,
}

/// Pure projection of journal state into a view. Staged edits are shown over the stored
/// values for the editable columns; locked columns always come from the records.
pub fn render(
    records: &[TradeRecord],
    statistics: &Statistics,
    edits: &PendingEdits,
    config: &Config,
    flash: Option<&str>,
) -> View {
    let metrics = Metrics {
        total_pnl: format_currency(statistics.total_pnl, &config.currency_symbol),
        trade_count: format_trade_count(statistics.count),
        win_rate: format_percent(statistics.win_rate),
    };

    let body = if records.is_empty() {
        Body::Placeholder(EMPTY_PLACEHOLDER.to_string())
    } else {
        Body::Table(
            records
                .iter()
                .enumerate()
                .map(|(i, record)| {
                    let edit = edits.row(i);
                    Row {
                        row: i + 1,
                        selected: edit.map_or(record.selected, |e| e.selected),
                        timestamp: record.timestamp.clone(),
                        symbol: record.symbol.to_string(),
                        direction: record.direction.to_string(),
                        entry_price: format_price(record.entry_price),
                        exit_price: format_price(record.exit_price),
                        pnl: format_currency(record.pnl, &config.currency_symbol),
                        notes: edit.map_or_else(|| record.notes.clone(), |e| e.notes.clone()),
                    }
                })
                .collect(),
        )
    };

    View {
        title: config.title.clone(),
        flash: flash.map(str::to_string),
        statistics: *statistics,
        metrics,
        body,
        footer: format!("{}: {}", SYNC_LABEL, config.sync_status),
    }
}

impl View {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

const HEADERS: [&str; 9] = ["#", "Delete?", "Date", "Symbol", "Side", "Entry", "Exit", "P&L", "Notes"];

impl Row {
    fn cells(&self) -> [String; 9] {
        [
            self.row.to_string(),
            if self.selected { "[x]" } else { "[ ]" }.to_string(),
            self.timestamp.clone(),
            self.symbol.clone(),
            self.direction.clone(),
            self.entry_price.clone(),
            self.exit_price.clone(),
            self.pnl.clone(),
            self.notes.clone(),
        ]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if let Some(flash) = &self.flash {
            writeln!(f, "{}", flash)?;
        }
        writeln!(
            f,
            "Total P&L: {}   Trades: {}   Win rate: {}",
            self.metrics.total_pnl, self.metrics.trade_count, self.metrics.win_rate
        )?;
        writeln!(f)?;

        match &self.body {
            Body::Placeholder(message) => writeln!(f, "{}", message)?,
            Body::Table(rows) => {
                let cells: Vec<[String; 9]> = rows.iter().map(Row::cells).collect();
                let mut widths = HEADERS.map(|h| h.chars().count());
                for row in &cells {
                    for (width, cell) in widths.iter_mut().zip(row.iter()) {
                        *width = (*width).max(cell.chars().count());
                    }
                }

                write_line(f, &HEADERS.map(str::to_string), &widths)?;
                let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
                writeln!(f, "{}", "-".repeat(rule_len))?;
                for row in &cells {
                    write_line(f, row, &widths)?;
                }
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.footer)
    }
}

// Numeric columns are right-aligned, the notes column is left unpadded
fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String; 9], widths: &[usize; 9]) -> fmt::Result {
    let last = cells.len() - 1;
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        if i == last {
            line.push_str(cell);
        } else if matches!(i, 0 | 5 | 6 | 7) {
            line.push_str(&format!("{:>width$}", cell, width = *width));
        } else {
            line.push_str(&format!("{:<width$}", cell, width = *width));
        }
    }
    writeln!(f, "{}", line.trim_end())
}
