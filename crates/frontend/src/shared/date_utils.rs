//! Date formatting and the date-range filter predicate for the orders table.

use chrono::NaiveDate;

/// Format an ISO order date for table display.
/// Example: "2024-06-01" -> "01 Jun 2024". Unparseable input passes through.
pub fn format_order_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// The date-range predicate ANDed with the free-text search.
///
/// Fail-open: a row with an empty or unparseable date always passes. A
/// parseable date passes when it lies within the inclusive range bounded by
/// whichever of `from`/`to` are non-empty; an unparseable bound does not
/// constrain.
pub fn date_in_range(date_str: &str, from: &str, to: &str) -> bool {
    let date = match NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => return true,
    };
    if let Ok(min) = NaiveDate::parse_from_str(from.trim(), "%Y-%m-%d") {
        if date < min {
            return false;
        }
    }
    if let Ok(max) = NaiveDate::parse_from_str(to.trim(), "%Y-%m-%d") {
        if date > max {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_order_date("2024-06-01"), "01 Jun 2024");
        assert_eq!(format_order_date(""), "");
        assert_eq!(format_order_date("junk"), "junk");
    }

    #[test]
    fn empty_date_always_passes() {
        assert!(date_in_range("", "2024-05-01", "2024-07-01"));
        assert!(date_in_range("not-a-date", "2024-05-01", "2024-07-01"));
    }

    #[test]
    fn inclusive_range() {
        assert!(date_in_range("2024-06-01", "2024-05-01", "2024-07-01"));
        assert!(date_in_range("2024-05-01", "2024-05-01", "2024-07-01"));
        assert!(date_in_range("2024-07-01", "2024-05-01", "2024-07-01"));
        assert!(!date_in_range("2024-06-01", "", "2024-05-15"));
        assert!(!date_in_range("2024-04-30", "2024-05-01", ""));
    }

    #[test]
    fn open_ended_bounds() {
        assert!(date_in_range("2024-06-01", "", ""));
        assert!(date_in_range("2024-06-01", "2024-05-01", ""));
        assert!(date_in_range("2024-06-01", "", "2024-07-01"));
        // a garbled bound does not constrain
        assert!(date_in_range("2024-06-01", "garbage", "2024-07-01"));
    }
}
