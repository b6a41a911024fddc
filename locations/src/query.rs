use std::fmt;

/// Sentinel shown in the member dropdown for "no member selected".
pub const ALL_MEMBERS: &str = "All";

/// Member selection of a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MemberFilter {
    #[default]
    All,
    Member(String),
}

impl MemberFilter {
    /// Exact match against a record's member list, no trimming.
    pub fn matches<S: AsRef<str>>(&self, members: &[S]) -> bool {
        match self {
            MemberFilter::All => true,
            MemberFilter::Member(selected) => members.iter().any(|m| m.as_ref() == selected),
        }
    }
}

impl fmt::Display for MemberFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberFilter::All => write!(f, "{}", ALL_MEMBERS),
            MemberFilter::Member(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }

    /// Text of the sort toggle button while this order is active.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Newest => "↓ Newest first",
            SortOrder::Oldest => "↑ Oldest first",
        }
    }
}

/// Filter and sort selection, rebuilt from the controls on every
/// interaction. Empty country or city means "any".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterQuery {
    pub member: MemberFilter,
    pub country: String,
    pub city: String,
    pub sort: SortOrder,
}

impl FilterQuery {
    pub fn country_matches(&self, country: &str) -> bool {
        self.country.is_empty() || self.country == country
    }

    pub fn city_matches(&self, city: &str) -> bool {
        self.city.is_empty() || self.city == city
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_filter_is_exact() {
        let members = ["Karina", "Giselle"];
        assert!(MemberFilter::All.matches(&members));
        assert!(MemberFilter::Member("Giselle".into()).matches(&members));
        assert!(!MemberFilter::Member("giselle".into()).matches(&members));
        assert!(!MemberFilter::Member("Karina".into()).matches(&[" Karina"]));
    }

    #[test]
    fn test_empty_location_fields_match_anything() {
        let query = FilterQuery::default();
        assert!(query.country_matches("JP"));
        assert!(query.country_matches(""));
        assert!(query.city_matches("Tokyo"));
    }

    #[test]
    fn test_sort_toggle_round_trips() {
        assert_eq!(SortOrder::Newest.toggled(), SortOrder::Oldest);
        assert_eq!(SortOrder::Newest.toggled().toggled(), SortOrder::Newest);
        assert_ne!(
            SortOrder::Newest.toggle_label(),
            SortOrder::Oldest.toggle_label()
        );
    }
}
