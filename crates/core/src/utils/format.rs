//! pt-BR number formatting used by exported reports.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Formats an amount with two decimals, `.` as thousands separator and `,`
/// as decimal separator (e.g. `1.234,56`).
pub fn format_brl_number(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(DISPLAY_DECIMAL_PRECISION));
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{}{},{}", sign, grouped, fraction)
}
