//! Built-in memorial hall data set used when no persisted catalog exists.

use geo::{Coord, LineString};

use super::StaticCatalog;
use crate::{Importance, PointOfInterest, VenueTopology};

/// id, name, description, location, importance, minutes, category, period.
type ExhibitRow = (
    &'static str,
    &'static str,
    &'static str,
    (f64, f64),
    u8,
    u32,
    &'static str,
    &'static str,
);

const EXHIBITS: [ExhibitRow; 8] = [
    ("001", "中共一大会址", "中国共产党第一次全国代表大会会址", (10.0, 20.0), 5, 15, "会议", "建党时期"),
    ("002", "红船模型", "中共一大闭幕会议举行地红船复制模型", (15.0, 25.0), 5, 10, "模型", "建党时期"),
    ("003", "党章展示", "历届党章发展历程展示", (20.0, 15.0), 4, 8, "文献", "发展历程"),
    ("004", "革命文物", "早期革命活动相关文物", (25.0, 30.0), 4, 12, "文物", "革命时期"),
    ("005", "历史照片", "珍贵历史照片集锦", (30.0, 10.0), 3, 6, "照片", "历史记录"),
    ("006", "领袖题词", "重要领导人题词墨宝", (35.0, 20.0), 4, 8, "书法", "领袖风范"),
    ("007", "多媒体展示", "现代科技展示历史", (40.0, 25.0), 3, 10, "多媒体", "现代展示"),
    ("008", "互动体验区", "沉浸式历史体验", (45.0, 35.0), 4, 20, "互动", "体验教育"),
];

const WALKWAYS: [&[(f64, f64)]; 3] = [
    &[(0.0, 0.0), (10.0, 10.0), (20.0, 20.0), (30.0, 30.0), (40.0, 40.0), (50.0, 40.0)],
    &[(10.0, 10.0), (15.0, 25.0), (25.0, 30.0)],
    &[(20.0, 20.0), (35.0, 20.0), (45.0, 35.0)],
];

fn coord((x, y): (f64, f64)) -> Coord<f64> {
    Coord { x, y }
}

/// Eight exhibits and the standard layout of a memorial hall.
///
/// The data is fixed and known to be valid, so it is assembled directly
/// rather than through the validating constructors.
///
/// # Examples
/// ```
/// use wayfarer_core::{CatalogProvider, sample_catalog};
///
/// let catalog = sample_catalog();
/// assert_eq!(catalog.exhibits()?.len(), 8);
/// let venue = catalog.venue()?.expect("sample venue");
/// assert_eq!((venue.exit.x, venue.exit.y), (50.0, 40.0));
/// # Ok::<(), wayfarer_core::CatalogError>(())
/// ```
pub fn sample_catalog() -> StaticCatalog {
    let exhibits = EXHIBITS
        .iter()
        .map(
            |&(id, name, description, location, importance, visit_duration, category, period)| {
                PointOfInterest {
                    id: id.to_owned(),
                    name: name.to_owned(),
                    description: description.to_owned(),
                    location: coord(location),
                    importance: Importance::saturating(importance),
                    visit_duration,
                    category: category.to_owned(),
                    period: period.to_owned(),
                }
            },
        )
        .collect();

    let venue = VenueTopology {
        name: Some("南湖纪念馆标准布局".to_owned()),
        entrance: coord((0.0, 0.0)),
        exit: coord((50.0, 40.0)),
        restrooms: vec![coord((15.0, 5.0)), coord((35.0, 35.0))],
        rest_areas: vec![coord((20.0, 20.0)), coord((40.0, 15.0))],
        emergency_exits: vec![coord((10.0, 40.0)), coord((45.0, 0.0))],
        walkways: WALKWAYS
            .iter()
            .map(|path| LineString::from(path.to_vec()))
            .collect(),
    };

    StaticCatalog::new(exhibits, Some(venue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sample_exhibits_pass_validation() {
        for poi in sample_catalog().exhibits {
            let checked = PointOfInterest::new(
                poi.id.clone(),
                poi.name.clone(),
                poi.location,
                poi.importance.get(),
                poi.visit_duration,
            );
            assert!(checked.is_ok(), "{} failed validation", poi.id);
        }
    }

    #[rstest]
    fn sample_venue_passes_validation() {
        let venue = sample_catalog().venue.expect("sample venue");
        assert!(venue.validate().is_ok());
        assert_eq!(venue.walkways.len(), 3);
    }
}
