//! List helpers shared by the table pages (search, sort, header indicators).

use std::cmp::Ordering;

/// Types that support the free-text table search.
pub trait Searchable {
    /// `needle` is already trimmed and lowercased by the caller.
    fn matches_filter(&self, needle: &str) -> bool;
}

/// Types that support column sorting.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Filter a list by a free-text query. An empty query keeps everything;
/// matching is case-insensitive over whatever fields the type exposes.
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

/// Sort a list by the given field.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for a column header's sort indicator.
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        amount: f64,
    }

    impl Searchable for Row {
        fn matches_filter(&self, needle: &str) -> bool {
            self.name.to_lowercase().contains(needle)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "amount" => self
                    .amount
                    .partial_cmp(&other.amount)
                    .unwrap_or(Ordering::Equal),
                _ => self.name.cmp(&other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Amazon".into(), amount: 30.0 },
            Row { name: "Flipkart".into(), amount: 10.0 },
            Row { name: "amazon business".into(), amount: 20.0 },
        ]
    }

    #[test]
    fn filter_is_case_insensitive() {
        let filtered = filter_list(rows(), "AMAZ");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filter_list(rows(), "  ").len(), 3);
    }

    #[test]
    fn sort_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "amount", true);
        assert_eq!(items[0].amount, 10.0);
        sort_list(&mut items, "amount", false);
        assert_eq!(items[0].amount, 30.0);
    }

    #[test]
    fn indicator_reflects_active_column() {
        assert_eq!(get_sort_indicator("order_date", "order_date", false), " ▼");
        assert_eq!(get_sort_indicator("order_date", "order_date", true), " ▲");
        assert_eq!(get_sort_indicator("order_date", "purchase", true), " ⇅");
    }
}
