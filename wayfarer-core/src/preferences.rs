//! Normalisation of raw visitor input into a [`VisitorProfile`].
//!
//! Request payloads arrive with free-form strings and arbitrary numbers. This
//! module maps them onto the closed vocabularies, falling back to each
//! vocabulary's default for unknown or missing values, and clamps the time
//! budget into a sane range. The optimizer only ever sees the result, so it
//! needs no invalid-state handling of its own.

use std::collections::HashSet;
use std::str::FromStr;

use crate::{AgeGroup, GroupType, PhysicalAbility, VisitPurpose, VisitorProfile};

/// Visitor input exactly as supplied by the caller.
///
/// Every field is optional. With the `serde` feature, `interests` accepts any
/// JSON value and treats anything other than an array as "no interests";
/// non-string array items are skipped. `available_time` accepts any JSON
/// number or numeric string, rounded down to whole minutes; other values
/// count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawPreferences {
    /// Requested age band.
    pub age_group: Option<String>,
    /// Requested interest tags.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient_interests"))]
    pub interests: Option<Vec<String>>,
    /// Requested time budget in minutes.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient_minutes"))]
    pub available_time: Option<i64>,
    /// Requested stamina band.
    pub physical_ability: Option<String>,
    /// Requested party composition.
    pub group_type: Option<String>,
    /// Requested visit purpose.
    pub visit_purpose: Option<String>,
}

impl RawPreferences {
    /// Normalise with the default [`NormalizationPolicy`].
    pub fn normalize(&self) -> VisitorProfile {
        normalize_preferences(self, &NormalizationPolicy::default())
    }
}

/// Bounds applied to the time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationPolicy {
    /// Shortest accepted budget in minutes.
    pub min_minutes: u32,
    /// Longest accepted budget in minutes.
    pub max_minutes: u32,
    /// Budget used when none was supplied.
    pub default_minutes: u32,
}

impl Default for NormalizationPolicy {
    fn default() -> Self {
        Self {
            min_minutes: 30,
            max_minutes: 300,
            default_minutes: 60,
        }
    }
}

impl NormalizationPolicy {
    /// Clamp `minutes` into `min_minutes..=max_minutes`.
    pub fn clamp(&self, minutes: Option<i64>) -> u32 {
        let lower = i64::from(self.min_minutes.min(self.max_minutes));
        let upper = i64::from(self.max_minutes.max(self.min_minutes));
        let requested = minutes.unwrap_or_else(|| i64::from(self.default_minutes));
        let clamped = requested.clamp(lower, upper);
        u32::try_from(clamped).unwrap_or(self.default_minutes)
    }
}

/// Map raw input onto a [`VisitorProfile`].
///
/// Fallbacks for missing or unrecognised values:
///
/// | field              | fallback       |
/// |--------------------|----------------|
/// | `age_group`        | `adult`        |
/// | `physical_ability` | `medium`       |
/// | `group_type`       | `individual`   |
/// | `visit_purpose`    | `education`    |
/// | `available_time`   | policy default, then clamped |
/// | `interests`        | none           |
///
/// Interest tags are trimmed; blank tags and case-insensitive duplicates are
/// dropped, keeping the first spelling seen.
///
/// # Examples
/// ```
/// use wayfarer_core::{AgeGroup, NormalizationPolicy, PhysicalAbility, RawPreferences, normalize_preferences};
///
/// let raw = RawPreferences {
///     age_group: Some("pirate".into()),
///     available_time: Some(1_000),
///     physical_ability: Some("LOW".into()),
///     interests: Some(vec![" Photo ".into(), "photo".into(), "".into()]),
///     ..RawPreferences::default()
/// };
/// let profile = normalize_preferences(&raw, &NormalizationPolicy::default());
///
/// assert_eq!(profile.age_group, AgeGroup::Adult);
/// assert_eq!(profile.physical_ability, PhysicalAbility::Low);
/// assert_eq!(profile.available_time, 300);
/// assert_eq!(profile.interests, vec!["Photo".to_string()]);
/// ```
pub fn normalize_preferences(raw: &RawPreferences, policy: &NormalizationPolicy) -> VisitorProfile {
    VisitorProfile {
        age_group: parse_or_default::<AgeGroup>(raw.age_group.as_deref()),
        interests: clean_interests(raw.interests.as_deref().unwrap_or_default()),
        available_time: policy.clamp(raw.available_time),
        physical_ability: parse_or_default::<PhysicalAbility>(raw.physical_ability.as_deref()),
        group_type: parse_or_default::<GroupType>(raw.group_type.as_deref()),
        visit_purpose: parse_or_default::<VisitPurpose>(raw.visit_purpose.as_deref()),
    }
}

fn parse_or_default<T>(value: Option<&str>) -> T
where
    T: FromStr + Default,
{
    value
        .and_then(|text| T::from_str(text).ok())
        .unwrap_or_default()
}

fn clean_interests(interests: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    interests
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .map(str::to_owned)
        .collect()
}

#[cfg(feature = "serde")]
fn lenient_interests<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(tag) => Some(tag),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(feature = "serde")]
fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_u64().map(|_| i64::MAX))
            .or_else(|| number.as_f64().map(floor_minutes)),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|minutes| minutes.is_finite())
            .map(floor_minutes),
        _ => None,
    })
}

#[cfg(feature = "serde")]
fn floor_minutes(minutes: f64) -> i64 {
    // Float-to-integer `as` saturates at the `i64` bounds.
    minutes.floor() as i64
}
