use crate::models::draft::DEFAULT_AMOUNT;

pub fn currency_symbol(currency: &str) -> &'static str {
    match currency {
        "EUR" => "€",
        "GBP" => "£",
        _ => "$",
    }
}

/// Amount as typed by the user, or `0.00` when the field is empty.
pub fn display_amount(amount: &str) -> &str {
    if amount.is_empty() {
        DEFAULT_AMOUNT
    } else {
        amount
    }
}

/// Header line of the expense section, e.g. `$1500.00 / $1500.00`.
pub fn expense_summary(total_amount: &str, currency: &str) -> String {
    let symbol = currency_symbol(currency);
    let amount = display_amount(total_amount);
    format!("{symbol}{amount} / {symbol}{amount}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_currency_symbol() {
        assert_eq!(expense_summary("1500.00", "USD"), "$1500.00 / $1500.00");
        assert_eq!(expense_summary("20", "EUR"), "€20 / €20");
        assert_eq!(expense_summary("7.10", "GBP"), "£7.10 / £7.10");
    }

    #[test]
    fn empty_total_displays_zero() {
        assert_eq!(expense_summary("", "USD"), "$0.00 / $0.00");
    }
}
