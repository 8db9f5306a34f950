//! Visit-order sequencing by nearest neighbour.
//!
//! The heuristic is greedy and `O(n²)` in the number of selected exhibits. It
//! does not search for the globally shortest tour.

use geo::Coord;
use wayfarer_core::{DistanceMetric, PointOfInterest};

use crate::TieBreak;

/// Order `points` by repeatedly walking to the closest unvisited one,
/// starting at `start`.
///
/// Equal distances go to the point met first in `points` order, or to the
/// smallest id under [`TieBreak::ById`]. The output is a permutation of the
/// input.
pub(crate) fn nearest_neighbour<M>(
    start: Coord<f64>,
    points: Vec<PointOfInterest>,
    metric: &M,
    tie_break: TieBreak,
) -> Vec<PointOfInterest>
where
    M: DistanceMetric + ?Sized,
{
    let mut remaining = points;
    let mut route = Vec::with_capacity(remaining.len());
    let mut position = start;

    while let Some(index) = closest(position, &remaining, metric, tie_break) {
        let next = remaining.remove(index);
        position = next.location;
        route.push(next);
    }
    route
}

fn closest<M>(
    position: Coord<f64>,
    candidates: &[PointOfInterest],
    metric: &M,
    tie_break: TieBreak,
) -> Option<usize>
where
    M: DistanceMetric + ?Sized,
{
    let mut best: Option<(usize, f64, &str)> = None;
    for (index, poi) in candidates.iter().enumerate() {
        let distance = metric.measure(position, poi.location);
        let better = best.is_none_or(|(_, best_distance, best_id)| {
            distance < best_distance
                || (tie_break == TieBreak::ById
                    && distance.total_cmp(&best_distance).is_eq()
                    && poi.id.as_str() < best_id)
        });
        if better {
            best = Some((index, distance, poi.id.as_str()));
        }
    }
    best.map(|(index, _, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use wayfarer_core::Metric;
    use wayfarer_core::test_support::poi;

    fn ids(pois: &[PointOfInterest]) -> Vec<&str> {
        pois.iter().map(|poi| poi.id.as_str()).collect()
    }

    const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

    #[rstest]
    fn walks_to_closest_point_each_step() {
        let points = vec![
            poi("far", 3, 5, (10.0, 0.0)),
            poi("near", 3, 5, (1.0, 0.0)),
            poi("mid", 3, 5, (4.0, 0.0)),
        ];
        let route = nearest_neighbour(ORIGIN, points, &Metric::Euclidean, TieBreak::FirstSeen);
        assert_eq!(ids(&route), ["near", "mid", "far"]);
    }

    #[rstest]
    #[case(TieBreak::FirstSeen, ["b", "a"])]
    #[case(TieBreak::ById, ["a", "b"])]
    fn equal_distances_follow_tie_break(#[case] tie_break: TieBreak, #[case] expected: [&str; 2]) {
        let points = vec![poi("b", 3, 5, (0.0, 2.0)), poi("a", 3, 5, (2.0, 0.0))];
        let route = nearest_neighbour(ORIGIN, points, &Metric::Euclidean, tie_break);
        assert_eq!(ids(&route).first(), expected.first());
    }

    #[rstest]
    fn metric_changes_the_order() {
        let points = vec![poi("diagonal", 3, 5, (3.0, 3.0)), poi("straight", 3, 5, (0.0, 4.5))];
        let euclid = nearest_neighbour(ORIGIN, points.clone(), &Metric::Euclidean, TieBreak::FirstSeen);
        let grid = nearest_neighbour(ORIGIN, points, &Metric::Manhattan, TieBreak::FirstSeen);
        assert_eq!(ids(&euclid).first(), Some(&"diagonal"));
        assert_eq!(ids(&grid).first(), Some(&"straight"));
    }

    #[rstest]
    fn empty_selection_yields_empty_route() {
        let route = nearest_neighbour(ORIGIN, Vec::new(), &Metric::Euclidean, TieBreak::FirstSeen);
        assert!(route.is_empty());
    }

    fn sorted_ids(pois: &[PointOfInterest]) -> Vec<String> {
        let mut ids: Vec<_> = pois.iter().map(|poi| poi.id.clone()).collect();
        ids.sort();
        ids
    }

    // Small integer grids make equal distances common, so tie-breaking runs.
    fn selection_strategy() -> impl Strategy<Value = Vec<PointOfInterest>> {
        proptest::collection::vec((-5_i8..=5, -5_i8..=5), 0..=12).prop_map(|cells| {
            cells
                .into_iter()
                .enumerate()
                .map(|(index, (x, y))| {
                    poi(&format!("p{index:02}"), 3, 5, (f64::from(x), f64::from(y)))
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn sequencing_reorders_without_dropping_stops(
            points in selection_strategy(),
            by_id in any::<bool>(),
            manhattan in any::<bool>(),
        ) {
            let tie_break = if by_id { TieBreak::ById } else { TieBreak::FirstSeen };
            let metric = if manhattan { Metric::Manhattan } else { Metric::Euclidean };
            let route = nearest_neighbour(ORIGIN, points.clone(), &metric, tie_break);

            prop_assert_eq!(route.len(), points.len());
            prop_assert_eq!(sorted_ids(&route), sorted_ids(&points));
        }
    }
}
