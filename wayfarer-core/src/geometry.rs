//! Straight-line geometry over venue-local coordinates.
//!
//! Venue coordinates are planar and measured in metres from an arbitrary
//! origin, so distances are plain Euclidean or Manhattan lengths rather than
//! geodesic ones. Walking time is derived from a constant pedestrian speed.

use geo::{Coord, Distance, Euclidean, Point};
use thiserror::Error;

/// Default indoor walking speed in metres per second (about 4.3 km/h).
pub const DEFAULT_WALKING_SPEED_MPS: f64 = 1.2;

/// Error raised when a coordinate cannot be used for distance calculations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// One of the axes was NaN or infinite.
    #[error("{field} must have finite coordinates, got ({x}, {y})")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// Supplied x value.
        x: f64,
        /// Supplied y value.
        y: f64,
    },
}

/// Reject coordinates with NaN or infinite components.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::geometry::ensure_finite;
///
/// assert!(ensure_finite(Coord { x: 1.0, y: 2.0 }, "entrance").is_ok());
/// assert!(ensure_finite(Coord { x: f64::NAN, y: 2.0 }, "entrance").is_err());
/// ```
pub fn ensure_finite(coord: Coord<f64>, field: &'static str) -> Result<Coord<f64>, CoordinateError> {
    if coord.x.is_finite() && coord.y.is_finite() {
        Ok(coord)
    } else {
        Err(CoordinateError::NonFinite {
            field,
            x: coord.x,
            y: coord.y,
        })
    }
}

/// Euclidean distance between two points.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::distance;
///
/// let d = distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert!((d - 5.0).abs() < f64::EPSILON);
/// ```
pub fn distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    Euclidean.distance(Point::from(from), Point::from(to))
}

/// Manhattan (grid) distance between two points.
///
/// Corridors inside buildings tend to run at right angles, which makes this
/// metric a closer estimate of indoor walking than the straight line.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::manhattan_distance;
///
/// let d = manhattan_distance(Coord { x: 0.0, y: 0.0 }, Coord { x: 3.0, y: 4.0 });
/// assert!((d - 7.0).abs() < f64::EPSILON);
/// ```
pub fn manhattan_distance(from: Coord<f64>, to: Coord<f64>) -> f64 {
    (from.x - to.x).abs() + (from.y - to.y).abs()
}

/// Estimate whole walking minutes for `distance` metres at `speed_mps`.
///
/// The result is `floor(distance / speed / 60)`. Negative, non-finite or
/// otherwise unusable inputs yield zero; the estimate never goes negative.
///
/// # Examples
/// ```
/// use wayfarer_core::{DEFAULT_WALKING_SPEED_MPS, estimate_walking_time};
///
/// assert_eq!(estimate_walking_time(144.0, DEFAULT_WALKING_SPEED_MPS), 2);
/// assert_eq!(estimate_walking_time(71.0, DEFAULT_WALKING_SPEED_MPS), 0);
/// assert_eq!(estimate_walking_time(-5.0, DEFAULT_WALKING_SPEED_MPS), 0);
/// ```
pub fn estimate_walking_time(distance: f64, speed_mps: f64) -> u32 {
    if !distance.is_finite() || !speed_mps.is_finite() || distance <= 0.0 || speed_mps <= 0.0 {
        return 0;
    }
    let minutes = (distance / speed_mps / 60.0).floor();
    if minutes >= f64::from(u32::MAX) {
        return u32::MAX;
    }
    // `minutes` is finite, non-negative and below `u32::MAX` here.
    minutes as u32
}

/// A pluggable distance function over venue coordinates.
///
/// Closures with the right signature implement the trait, so callers can
/// supply bespoke metrics without declaring a type.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::{DistanceMetric, Metric};
///
/// let a = Coord { x: 0.0, y: 0.0 };
/// let b = Coord { x: 3.0, y: 4.0 };
/// assert!((Metric::Manhattan.measure(a, b) - 7.0).abs() < f64::EPSILON);
///
/// let chebyshev = |p: Coord<f64>, q: Coord<f64>| (p.x - q.x).abs().max((p.y - q.y).abs());
/// assert!((chebyshev.measure(a, b) - 4.0).abs() < f64::EPSILON);
/// ```
pub trait DistanceMetric: Send + Sync {
    /// Distance from `from` to `to`. Implementations must return a
    /// non-negative value for finite input.
    fn measure(&self, from: Coord<f64>, to: Coord<f64>) -> f64;
}

impl<F> DistanceMetric for F
where
    F: Fn(Coord<f64>, Coord<f64>) -> f64 + Send + Sync,
{
    fn measure(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        self(from, to)
    }
}

/// Built-in distance metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// Straight-line distance. Used by the default optimizer path.
    #[default]
    Euclidean,
    /// Sum of the axis deltas.
    Manhattan,
}

impl DistanceMetric for Metric {
    fn measure(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        match self {
            Self::Euclidean => distance(from, to),
            Self::Manhattan => manhattan_distance(from, to),
        }
    }
}

/// Sum the leg lengths along `path` using `metric`.
///
/// Paths with fewer than two points have zero length.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::Metric;
/// use wayfarer_core::geometry::path_length;
///
/// let path = [
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 3.0, y: 4.0 },
///     Coord { x: 3.0, y: 10.0 },
/// ];
/// assert!((path_length(&Metric::Euclidean, path) - 11.0).abs() < 1e-9);
/// ```
pub fn path_length<M, I>(metric: &M, path: I) -> f64
where
    M: DistanceMetric + ?Sized,
    I: IntoIterator<Item = Coord<f64>>,
{
    let mut points = path.into_iter();
    let Some(mut previous) = points.next() else {
        return 0.0;
    };
    let mut total = 0.0;
    for point in points {
        total += metric.measure(previous, point);
        previous = point;
    }
    total
}
