use rust_decimal::Decimal;
use serde::Serialize;

use super::types::TradeRecord;

/// Dashboard aggregates over the whole journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_pnl: Decimal,
    pub count: usize,
    pub win_rate: Decimal, // Percent, 0..=100
}

/// Recomputed from scratch on every refresh. A win is strictly positive P&L;
/// flat trades only count toward the denominator. The total saturates at the
/// `Decimal` range instead of panicking.
pub fn compute_statistics(records: &[TradeRecord]) -> Statistics {
    let count = records.len();
    let total_pnl = records
        .iter()
        .fold(Decimal::ZERO, |total, r| total.saturating_add(r.pnl));

    let win_rate = if count == 0 {
        Decimal::ZERO
    } else {
        let wins = records.iter().filter(|r| r.is_win()).count();
        Decimal::from(wins) * Decimal::ONE_HUNDRED / Decimal::from(count)
    };

    Statistics {
        total_pnl,
        count,
        win_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::types::{Direction, Symbol};
    use rust_decimal::dec;

    fn records(pnls: &[Decimal]) -> Vec<TradeRecord> {
        pnls.iter()
            .map(|pnl| TradeRecord {
                selected: false,
                timestamp: "2024-03-08 09:30".to_string(),
                symbol: Symbol::Nas100,
                direction: Direction::Buy,
                entry_price: dec!(18000),
                exit_price: dec!(18010),
                pnl: *pnl,
                notes: String::new(),
            })
            .collect()
    }

    #[test]
    fn empty_journal_is_all_zero() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.total_pnl, Decimal::ZERO);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.win_rate, Decimal::ZERO);
    }

    #[test]
    fn flat_trades_count_toward_denominator() {
        let stats = compute_statistics(&records(&[dec!(10), dec!(-5), dec!(0), dec!(20)]));
        assert_eq!(stats.count, 4);
        assert_eq!(stats.total_pnl, dec!(25));
        assert_eq!(stats.win_rate, dec!(50));
    }

    #[test]
    fn adding_a_trade_moves_total_by_its_pnl() {
        let mut journal = records(&[dec!(0.1), dec!(0.2), dec!(-1234.56)]);
        let before = compute_statistics(&journal).total_pnl;
        journal.extend(records(&[dec!(99.99)]));
        let after = compute_statistics(&journal).total_pnl;
        assert_eq!(after - before, dec!(99.99));
        assert_eq!(after, dec!(-1134.27));
    }

    #[test]
    fn win_rate_keeps_fractional_percent() {
        let stats = compute_statistics(&records(&[dec!(1), dec!(-1), dec!(-1)]));
        assert_eq!(stats.win_rate.round_dp(1), dec!(33.3));
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        // Reachable after a delete removes the loss that kept the total in range
        let stats = compute_statistics(&records(&[Decimal::MAX, Decimal::MAX]));
        assert_eq!(stats.total_pnl, Decimal::MAX);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.win_rate, dec!(100));

        let stats = compute_statistics(&records(&[Decimal::MIN, dec!(-1)]));
        assert_eq!(stats.total_pnl, Decimal::MIN);
    }

    #[test]
    fn all_losses_is_zero_percent() {
        let stats = compute_statistics(&records(&[dec!(-3), dec!(-4)]));
        assert_eq!(stats.win_rate, Decimal::ZERO);
        assert_eq!(stats.total_pnl, dec!(-7));
    }
}
