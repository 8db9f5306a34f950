use geo::Coord;
use thiserror::Error;

use crate::geometry::{CoordinateError, ensure_finite};

/// Priority rank of an exhibit, from 1 (optional) to 5 (must-see).
///
/// # Examples
/// ```
/// use wayfarer_core::Importance;
///
/// let rank = Importance::new(4).expect("in range");
/// assert_eq!(rank.get(), 4);
/// assert!(Importance::new(6).is_err());
/// assert_eq!(Importance::saturating(9), Importance::MUST_SEE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Importance(u8);

impl Importance {
    /// Lowest rank.
    pub const MIN: Self = Self(1);
    /// Highest rank; exhibits every visitor should see.
    pub const MUST_SEE: Self = Self(5);

    /// Validate and wrap a rank in `1..=5`.
    pub const fn new(value: u8) -> Result<Self, PointOfInterestError> {
        if value >= Self::MIN.0 && value <= Self::MUST_SEE.0 {
            Ok(Self(value))
        } else {
            Err(PointOfInterestError::ImportanceOutOfRange { value })
        }
    }

    /// Clamp `value` into `1..=5`.
    pub const fn saturating(value: u8) -> Self {
        if value < Self::MIN.0 {
            Self::MIN
        } else if value > Self::MUST_SEE.0 {
            Self::MUST_SEE
        } else {
            Self(value)
        }
    }

    /// The raw rank.
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Importance {
    type Error = PointOfInterestError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Importance> for u8 {
    fn from(value: Importance) -> Self {
        value.0
    }
}

/// Errors returned when validating a [`PointOfInterest`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PointOfInterestError {
    /// The identifier was empty or whitespace.
    #[error("point of interest id must not be blank")]
    BlankId,
    /// Importance fell outside `1..=5`.
    #[error("importance must be between 1 and 5, got {value}")]
    ImportanceOutOfRange {
        /// Rejected rank.
        value: u8,
    },
    /// Suggested dwell time was zero.
    #[error("visit duration for '{id}' must be positive")]
    ZeroDuration {
        /// Identifier of the offending exhibit.
        id: String,
    },
    /// The location had a NaN or infinite axis.
    #[error(transparent)]
    Location(#[from] CoordinateError),
}

/// An exhibit or stop inside the venue.
///
/// Identity is the `id`; two values with the same id describe the same stop.
/// `category` and `period` are free-text tags that interest matching searches
/// together with `description`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfarer_core::PointOfInterest;
///
/// let poi = PointOfInterest::new("001", "Founding hall", Coord { x: 10.0, y: 20.0 }, 5, 15)?
///     .with_category("meeting")
///     .with_period("founding era");
///
/// assert_eq!(poi.id, "001");
/// assert!(poi.matches_interest("MEETING"));
/// # Ok::<(), wayfarer_core::PointOfInterestError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PointOfInterestRecord"))]
pub struct PointOfInterest {
    /// Unique key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display text; also searched by interest matching.
    pub description: String,
    /// Venue-local position.
    pub location: Coord<f64>,
    /// Priority rank used for selection.
    pub importance: Importance,
    /// Suggested dwell time in minutes.
    pub visit_duration: u32,
    /// Classification tag.
    pub category: String,
    /// Historical period tag.
    pub period: String,
}

impl PointOfInterest {
    /// Validate and construct a point of interest with empty text tags.
    ///
    /// Use the `with_*` methods to fill in description, category and period.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: Coord<f64>,
        importance: u8,
        visit_duration: u32,
    ) -> Result<Self, PointOfInterestError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PointOfInterestError::BlankId);
        }
        let importance = Importance::new(importance)?;
        if visit_duration == 0 {
            return Err(PointOfInterestError::ZeroDuration { id });
        }
        let location = ensure_finite(location, "location")?;
        Ok(Self {
            id,
            name: name.into(),
            description: String::new(),
            location,
            importance,
            visit_duration,
            category: String::new(),
            period: String::new(),
        })
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the period tag.
    #[must_use]
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    /// Whether `interest` appears, ignoring case, in the category or the
    /// description.
    ///
    /// Blank interests never match.
    pub fn matches_interest(&self, interest: &str) -> bool {
        let needle = interest.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.category.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Unvalidated wire shape used to route deserialisation through
/// [`PointOfInterest::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PointOfInterestRecord {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    location: Coord<f64>,
    importance: u8,
    visit_duration: u32,
    #[serde(default)]
    category: String,
    #[serde(default)]
    period: String,
}

#[cfg(feature = "serde")]
impl TryFrom<PointOfInterestRecord> for PointOfInterest {
    type Error = PointOfInterestError;

    fn try_from(record: PointOfInterestRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(
            record.id,
            record.name,
            record.location,
            record.importance,
            record.visit_duration,
        )?
        .with_description(record.description)
        .with_category(record.category)
        .with_period(record.period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn relic() -> PointOfInterest {
        PointOfInterest::new("004", "Revolutionary relics", Coord { x: 25.0, y: 30.0 }, 4, 12)
            .expect("valid poi")
            .with_description("Artefacts from early Revolutionary activity")
            .with_category("Relics")
            .with_period("revolutionary era")
    }

    #[rstest]
    #[case("relics")]
    #[case("REVOLUTIONARY")]
    #[case(" artefacts ")]
    fn matches_category_or_description(relic: PointOfInterest, #[case] interest: &str) {
        assert!(relic.matches_interest(interest));
    }

    #[rstest]
    #[case("era")]
    #[case("")]
    #[case("   ")]
    fn ignores_period_and_blank_interests(relic: PointOfInterest, #[case] interest: &str) {
        assert!(!relic.matches_interest(interest));
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn rejects_importance_out_of_range(#[case] importance: u8) {
        let result = PointOfInterest::new("x", "X", Coord { x: 0.0, y: 0.0 }, importance, 5);
        assert_eq!(
            result,
            Err(PointOfInterestError::ImportanceOutOfRange { value: importance })
        );
    }

    #[rstest]
    fn rejects_zero_duration() {
        let result = PointOfInterest::new("x", "X", Coord { x: 0.0, y: 0.0 }, 3, 0);
        assert!(matches!(result, Err(PointOfInterestError::ZeroDuration { .. })));
    }

    #[rstest]
    fn rejects_blank_id() {
        let result = PointOfInterest::new("  ", "X", Coord { x: 0.0, y: 0.0 }, 3, 5);
        assert_eq!(result, Err(PointOfInterestError::BlankId));
    }

    #[rstest]
    fn rejects_non_finite_location() {
        let result = PointOfInterest::new("x", "X", Coord { x: f64::NAN, y: 0.0 }, 3, 5);
        assert!(matches!(result, Err(PointOfInterestError::Location(_))));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialisation_validates_records() {
        let bad = r#"{"id":"9","name":"Bad","location":{"x":0.0,"y":0.0},"importance":7,"visit_duration":5}"#;
        assert!(serde_json::from_str::<PointOfInterest>(bad).is_err());

        let good = r#"{"id":"9","name":"Good","location":{"x":1.0,"y":2.0},"importance":3,"visit_duration":5,"category":"photo"}"#;
        let poi: PointOfInterest = serde_json::from_str(good).expect("valid record");
        assert_eq!(poi.importance.get(), 3);
        assert_eq!(poi.category, "photo");
        assert!(poi.period.is_empty());
    }
}
