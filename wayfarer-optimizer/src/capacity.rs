//! Physical-capacity trimming: the third optimizer stage.

use std::cmp::Reverse;

use log::debug;
use wayfarer_core::{PhysicalAbility, PointOfInterest};

/// Trim the selection to what the visitor's stamina allows.
///
/// `Low` keeps the `low_cap` most important exhibits, `Medium` keeps the
/// first `medium_cap` in their current order, and `High` keeps everything.
pub(crate) fn apply_capacity(
    mut selected: Vec<PointOfInterest>,
    ability: PhysicalAbility,
    low_cap: usize,
    medium_cap: usize,
) -> Vec<PointOfInterest> {
    match ability {
        PhysicalAbility::Low => {
            selected.sort_by_key(|poi| Reverse(poi.importance));
            selected.truncate(low_cap);
        }
        PhysicalAbility::Medium => selected.truncate(medium_cap),
        PhysicalAbility::High => {}
    }
    debug!("{ability} stamina leaves {} exhibits", selected.len());
    selected
}
