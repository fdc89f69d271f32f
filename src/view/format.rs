use rust_decimal::{Decimal, RoundingStrategy};

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// `$1,234.50`, with the sign after the symbol for losses: `$-80.00`
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = round(value, 2);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}{}{}.{}", symbol, sign, group_thousands(int_part), frac_part)
}

pub fn format_price(value: Decimal) -> String {
    format!("{:.2}", round(value, 2))
}

pub fn format_percent(value: Decimal) -> String {
    format!("{:.1}%", round(value, 1))
}

pub fn format_trade_count(count: usize) -> String {
    match count {
        1 => "1 trade".to_string(),
        n => format!("{} trades", n),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
