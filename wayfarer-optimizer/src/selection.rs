//! Time-budget selection: the second optimizer stage.
//!
//! Selection is greedy by importance, not by importance per minute. A long
//! must-see exhibit is taken before several short lesser ones even when the
//! short ones would fill the budget better.

use std::cmp::Reverse;

use log::debug;
use wayfarer_core::PointOfInterest;

/// Accept exhibits in descending importance while their total dwell time
/// stays within `buffer_percent` of `available_time`.
///
/// The sort is stable, so equal ranks keep candidate order. Exhibits that do
/// not fit are skipped and scanning continues with the next one.
pub(crate) fn select_within_budget(
    mut candidates: Vec<PointOfInterest>,
    available_time: u32,
    buffer_percent: u32,
) -> Vec<PointOfInterest> {
    candidates.sort_by_key(|poi| Reverse(poi.importance));

    // Compare `total * 100 <= available * percent` to stay in integers.
    let limit = u64::from(available_time).saturating_mul(u64::from(buffer_percent));
    let mut total: u64 = 0;
    let selected: Vec<_> = candidates
        .into_iter()
        .filter(|poi| {
            let next = total.saturating_add(u64::from(poi.visit_duration));
            let fits = next.saturating_mul(100) <= limit;
            if fits {
                total = next;
            }
            fits
        })
        .collect();

    debug!(
        "selected {} exhibits totalling {total} minutes of a {available_time} minute budget",
        selected.len()
    );
    selected
}
