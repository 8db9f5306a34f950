//! Venue topology: fixed entry points and amenity layout.
//!
//! Walkways are kept for display. Routing never follows them; the optimizer
//! works with straight-line distances between stops.

use geo::{Coord, LineString};

use crate::geometry::{CoordinateError, ensure_finite};

/// Entrance, exit and amenity layout of a venue.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::VenueTopology;
///
/// let venue = VenueTopology::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 50.0, y: 40.0 })?
///     .with_rest_areas(vec![Coord { x: 20.0, y: 20.0 }])?;
/// assert_eq!(venue.rest_areas.len(), 1);
/// # Ok::<(), wayfarer_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VenueTopology {
    /// Optional display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Where every route starts.
    pub entrance: Coord<f64>,
    /// Where every route ends.
    pub exit: Coord<f64>,
    /// Restroom locations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub restrooms: Vec<Coord<f64>>,
    /// Seating and rest area locations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rest_areas: Vec<Coord<f64>>,
    /// Emergency exit locations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub emergency_exits: Vec<Coord<f64>>,
    /// Walkway polylines for display.
    #[cfg_attr(feature = "serde", serde(default))]
    pub walkways: Vec<LineString<f64>>,
}

impl VenueTopology {
    /// Construct a venue with no amenities.
    pub fn new(entrance: Coord<f64>, exit: Coord<f64>) -> Result<Self, CoordinateError> {
        Ok(Self {
            name: None,
            entrance: ensure_finite(entrance, "entrance")?,
            exit: ensure_finite(exit, "exit")?,
            restrooms: Vec::new(),
            rest_areas: Vec::new(),
            emergency_exits: Vec::new(),
            walkways: Vec::new(),
        })
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set restroom locations.
    pub fn with_restrooms(mut self, points: Vec<Coord<f64>>) -> Result<Self, CoordinateError> {
        self.restrooms = all_finite(points, "restrooms")?;
        Ok(self)
    }

    /// Set rest area locations.
    pub fn with_rest_areas(mut self, points: Vec<Coord<f64>>) -> Result<Self, CoordinateError> {
        self.rest_areas = all_finite(points, "rest_areas")?;
        Ok(self)
    }

    /// Set emergency exit locations.
    pub fn with_emergency_exits(
        mut self,
        points: Vec<Coord<f64>>,
    ) -> Result<Self, CoordinateError> {
        self.emergency_exits = all_finite(points, "emergency_exits")?;
        Ok(self)
    }

    /// Set walkway polylines.
    pub fn with_walkways(mut self, walkways: Vec<LineString<f64>>) -> Result<Self, CoordinateError> {
        for walkway in &walkways {
            for coord in walkway.coords() {
                ensure_finite(*coord, "walkways")?;
            }
        }
        self.walkways = walkways;
        Ok(self)
    }

    /// Check every coordinate, e.g. after deserialising untrusted input.
    pub fn validate(&self) -> Result<(), CoordinateError> {
        ensure_finite(self.entrance, "entrance")?;
        ensure_finite(self.exit, "exit")?;
        for (field, points) in [
            ("restrooms", &self.restrooms),
            ("rest_areas", &self.rest_areas),
            ("emergency_exits", &self.emergency_exits),
        ] {
            for point in points {
                ensure_finite(*point, field)?;
            }
        }
        for walkway in &self.walkways {
            for coord in walkway.coords() {
                ensure_finite(*coord, "walkways")?;
            }
        }
        Ok(())
    }
}

fn all_finite(
    points: Vec<Coord<f64>>,
    field: &'static str,
) -> Result<Vec<Coord<f64>>, CoordinateError> {
    points
        .into_iter()
        .map(|point| ensure_finite(point, field))
        .collect()
}
