use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::query::SortOrder;

/// Parses a post date written as `YYYY年MM月DD日`.
///
/// The year and month markers become slashes and the day marker is dropped
/// before parsing. Anything that is not a real calendar date afterwards is
/// `None`. Impossible days such as 30 February are rejected rather than
/// rolled over into the following month, so `2023年02月30日` does not sort
/// as 2 March.
pub fn parse(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.replace(['年', '月'], "/").replace('日', "");
    NaiveDate::parse_from_str(cleaned.trim(), "%Y/%m/%d").ok()
}

/// Compares two parsed dates for the given sort order.
///
/// When either side is invalid the pair compares equal, so an invalid date
/// never moves relative to its neighbours on its own.
pub fn compare(a: Option<NaiveDate>, b: Option<NaiveDate>, order: SortOrder) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match order {
            SortOrder::Newest => b.cmp(&a),
            SortOrder::Oldest => a.cmp(&b),
        },
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_width_markers() {
        assert_eq!(
            parse("2024年01月05日"),
            NaiveDate::from_ymd_opt(2024, 1, 5),
            "Expected 2024-01-05"
        );
    }

    #[test]
    fn test_parse_accepts_unpadded_fields() {
        assert_eq!(parse("2023年3月9日"), NaiveDate::from_ymd_opt(2023, 3, 9));
    }

    #[test]
    fn test_parse_rejects_malformed_and_impossible_dates() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("unknown"), None);
        assert_eq!(parse("2024年13月01日"), None);
        assert_eq!(parse("2023年02月30日"), None);
    }

    #[test]
    fn test_compare_follows_sort_order() {
        let jan = parse("2024年01月05日");
        let mar = parse("2024年03月10日");

        assert_eq!(compare(mar, jan, SortOrder::Newest), Ordering::Less);
        assert_eq!(compare(mar, jan, SortOrder::Oldest), Ordering::Greater);
        assert_eq!(compare(jan, jan, SortOrder::Newest), Ordering::Equal);
    }

    #[test]
    fn test_compare_with_invalid_side_is_equal() {
        let jan = parse("2024年01月05日");
        for order in [SortOrder::Newest, SortOrder::Oldest] {
            assert_eq!(compare(jan, None, order), Ordering::Equal);
            assert_eq!(compare(None, jan, order), Ordering::Equal);
            assert_eq!(compare(None, None, order), Ordering::Equal);
        }
    }
}
