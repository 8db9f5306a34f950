//! Interest filtering: the first optimizer stage.

use std::collections::HashSet;

use log::{debug, warn};
use wayfarer_core::{Importance, PointOfInterest};

/// Keep exhibits that match any interest tag.
///
/// Without usable interests every exhibit is a candidate. When fewer than
/// `min_candidates` exhibits match, every exhibit ranked at least
/// `fallback_importance` is added as well. The result keeps catalog order and
/// holds each id once, first occurrence winning.
pub(crate) fn filter_by_interest(
    catalog: &[PointOfInterest],
    interests: &[String],
    min_candidates: usize,
    fallback_importance: Importance,
) -> Vec<PointOfInterest> {
    let tags: Vec<&str> = interests
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect();

    if tags.is_empty() {
        debug!("no interests supplied; all {} exhibits are candidates", catalog.len());
        return unique_by_id(catalog.iter());
    }

    let is_match = |poi: &PointOfInterest| tags.iter().any(|tag| poi.matches_interest(tag));
    let matched = unique_by_id(catalog.iter().filter(|&poi| is_match(poi)));
    if matched.len() >= min_candidates {
        debug!("{} exhibits match the visitor's interests", matched.len());
        return matched;
    }

    warn!(
        "only {} exhibits match the visitor's interests; adding exhibits ranked {} or above",
        matched.len(),
        fallback_importance.get()
    );
    unique_by_id(
        catalog
            .iter()
            .filter(|&poi| is_match(poi) || poi.importance >= fallback_importance),
    )
}

fn unique_by_id<'a, I>(pois: I) -> Vec<PointOfInterest>
where
    I: Iterator<Item = &'a PointOfInterest>,
{
    let mut seen = HashSet::new();
    pois.filter(|&poi| seen.insert(poi.id.as_str()))
        .cloned()
        .collect()
}
