use std::cmp::Ordering;

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    date,
    query::FilterQuery,
    record::{LocationRecord, RecordId},
};

/// A record's place in the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewEntry {
    pub id: RecordId,
    pub visible: bool,
}

/// Every record in display order, each flagged visible or hidden.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilteredView {
    entries: Vec<ViewEntry>,
    visible_count: usize,
}

impl FilteredView {
    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Ids in display order, hidden ones included.
    pub fn order(&self) -> Vec<RecordId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn visible(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| entry.id)
    }

    pub fn is_visible(&self, id: RecordId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.id == id && entry.visible)
    }
}

/// Sorts and filters the records for a query.
///
/// `previous` is the order of the last view (or the load order on the first
/// pass). The sort starts from it, so records whose dates cannot be compared
/// keep the relative position they already had. Ids in `previous` that do
/// not belong to `records` are skipped and records missing from it are
/// appended in load order.
pub fn apply(
    records: &[LocationRecord],
    previous: &[RecordId],
    query: &FilterQuery,
) -> FilteredView {
    let dates: Vec<Option<NaiveDate>> = records.iter().map(|r| date::parse(&r.date)).collect();

    let mut order = starting_order(records.len(), previous);
    stable_sort(&mut order, |a, b| {
        date::compare(dates[a.0], dates[b.0], query.sort)
    });

    let entries: Vec<ViewEntry> = order
        .into_iter()
        .map(|id| {
            let record = &records[id.0];
            let visible = query.member.matches(&record.members)
                && query.country_matches(&record.country)
                && query.city_matches(&record.city);
            ViewEntry { id, visible }
        })
        .collect();

    let visible_count = entries.iter().filter(|entry| entry.visible).count();

    debug!(
        member = %query.member,
        country = %query.country,
        city = %query.city,
        sort = ?query.sort,
        visible_count,
        total = records.len(),
        "filter pass"
    );

    FilteredView {
        entries,
        visible_count,
    }
}

fn starting_order(len: usize, previous: &[RecordId]) -> Vec<RecordId> {
    let mut seen = vec![false; len];
    let mut order = Vec::with_capacity(len);

    for id in previous {
        if id.0 < len && !seen[id.0] {
            seen[id.0] = true;
            order.push(*id);
        }
    }
    for (index, was_seen) in seen.into_iter().enumerate() {
        if !was_seen {
            order.push(RecordId(index));
        }
    }

    order
}

/// Run detection followed by binary insertion, the way small arrays are
/// sorted by a browser's `Array.prototype.sort`.
///
/// The date comparison is not a total order once invalid dates are involved,
/// so `slice::sort_by` is off limits here: it may panic on such comparators.
/// With this algorithm the result for a non-transitive comparator is still
/// deterministic and matches what the web page shows for the same data.
///
/// The leading run is ascending while `compare` is not `Less` and strictly
/// descending while it is `Less`; a descending run is reversed. Every later
/// element is binary-searched into the sorted prefix, moving left only on
/// `Less`, which keeps equal elements in their current order.
fn stable_sort<F>(items: &mut [RecordId], mut compare: F)
where
    F: FnMut(&RecordId, &RecordId) -> Ordering,
{
    if items.len() < 2 {
        return;
    }

    let run = leading_run(items, &mut compare);

    for start in run..items.len() {
        let pivot = items[start];
        let mut left = 0;
        let mut right = start;
        while left < right {
            let mid = left + (right - left) / 2;
            if compare(&pivot, &items[mid]) == Ordering::Less {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        items[left..=start].rotate_right(1);
    }
}

/// Length of the run at the start of `items`, reversing it first when it is
/// strictly descending. Always at least 2 for slices of two or more.
fn leading_run<F>(items: &mut [RecordId], compare: &mut F) -> usize
where
    F: FnMut(&RecordId, &RecordId) -> Ordering,
{
    let descending = compare(&items[1], &items[0]) == Ordering::Less;
    let mut len = 2;

    while len < items.len() {
        let order = compare(&items[len], &items[len - 1]);
        if descending != (order == Ordering::Less) {
            break;
        }
        len += 1;
    }

    if descending {
        items[..len].reverse();
    }
    len
}
