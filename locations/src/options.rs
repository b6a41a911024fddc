//! Values offered by the filter dropdowns. The sentinels ("All", "all
//! countries", "all cities") are added by the interface, never here.

use std::collections::BTreeSet;

use crate::record::LocationRecord;

/// Every member identifier, trimmed, sorted and deduplicated.
pub fn member_options(records: &[LocationRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.members.iter())
        .map(|member| member.trim())
        .filter(|member| !member.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Every non-empty country, sorted and deduplicated.
pub fn country_options(records: &[LocationRecord]) -> Vec<String> {
    sorted_non_empty(records.iter().map(|record| record.country.as_str()))
}

/// Cities available for a country selection. An empty `country` draws from
/// all records.
pub fn city_options(records: &[LocationRecord], country: &str) -> Vec<String> {
    sorted_non_empty(
        records
            .iter()
            .filter(|record| country.is_empty() || record.country == country)
            .map(|record| record.city.as_str()),
    )
}

fn sorted_non_empty<'a, I>(values: I) -> Vec<String>
where
    I: Iterator<Item = &'a str>,
{
    values
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}
