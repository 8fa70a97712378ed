use chrono::NaiveDate;

use crate::model::Payer;

pub const CURRENCY_SYMBOL: &str = "$";

/// Two decimals with halves rounded away from zero, e.g. `$0.13` for 0.125.
pub fn format_amount(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, (amount * 100.0).round() / 100.0)
}

/// Short month/day form, e.g. `Mar 5`.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

pub fn format_split(participants: &[Payer]) -> String {
    participants
        .iter()
        .map(|payer| payer.display_name())
        .collect::<Vec<_>>()
        .join(" & ")
}

pub fn expense_count_label(count: usize) -> String {
    if count == 1 {
        "1 expense".to_string()
    } else {
        format!("{} expenses", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_have_two_decimals_and_prefix() {
        assert_eq!(format_amount(12.5), "$12.50");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(1234.567), "$1234.57");
        assert_eq!(format_amount(-3.0), "$-3.00");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(format_amount(0.125), "$0.13");
        assert_eq!(format_amount(0.375), "$0.38");
        assert_eq!(format_amount(2.5), "$2.50");
    }

    #[test]
    fn short_date_drops_leading_zero() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_short_date(date), "Mar 5");
        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        assert_eq!(format_short_date(date), "Dec 25");
    }

    #[test]
    fn split_uses_display_names() {
        assert_eq!(format_split(&[Payer::Me, Payer::Partner]), "Kevin & Jackie");
        assert_eq!(format_split(&[Payer::Partner]), "Jackie");
        assert_eq!(format_split(&[]), "");
    }

    #[test]
    fn count_label_pluralises() {
        assert_eq!(expense_count_label(0), "0 expenses");
        assert_eq!(expense_count_label(1), "1 expense");
        assert_eq!(expense_count_label(7), "7 expenses");
    }
}
