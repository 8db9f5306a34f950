//! Visitor profiles: who is visiting, for how long, and what they care about.
//!
//! A profile is built per request, usually by
//! [`normalize_preferences`](crate::normalize_preferences), and is read-only
//! from the optimizer's point of view.

use crate::{AgeGroup, GroupType, PhysicalAbility, VisitPurpose};

/// A normalised visitor request.
///
/// # Examples
/// ```
/// use wayfarer_core::{AgeGroup, PhysicalAbility, VisitorProfile};
///
/// let profile = VisitorProfile::new(90)
///     .with_age_group(AgeGroup::Senior)
///     .with_physical_ability(PhysicalAbility::Low)
///     .with_interest("photographs");
///
/// assert_eq!(profile.available_time, 90);
/// assert_eq!(profile.interests, vec!["photographs".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitorProfile {
    /// Age band of the visitor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub age_group: AgeGroup,
    /// Free-text interest tags, matched case-insensitively.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interests: Vec<String>,
    /// Time budget in minutes.
    pub available_time: u32,
    /// Stamina band.
    #[cfg_attr(feature = "serde", serde(default))]
    pub physical_ability: PhysicalAbility,
    /// Party composition.
    #[cfg_attr(feature = "serde", serde(default))]
    pub group_type: GroupType,
    /// Reason for the visit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visit_purpose: VisitPurpose,
}

impl VisitorProfile {
    /// Construct a profile with default bands and no interests.
    pub fn new(available_time: u32) -> Self {
        Self {
            available_time,
            ..Self::default()
        }
    }

    /// Set the age band.
    #[must_use]
    pub const fn with_age_group(mut self, age_group: AgeGroup) -> Self {
        self.age_group = age_group;
        self
    }

    /// Set the stamina band.
    #[must_use]
    pub const fn with_physical_ability(mut self, ability: PhysicalAbility) -> Self {
        self.physical_ability = ability;
        self
    }

    /// Set the party composition.
    #[must_use]
    pub const fn with_group_type(mut self, group_type: GroupType) -> Self {
        self.group_type = group_type;
        self
    }

    /// Set the visit purpose.
    #[must_use]
    pub const fn with_visit_purpose(mut self, purpose: VisitPurpose) -> Self {
        self.visit_purpose = purpose;
        self
    }

    /// Append an interest tag.
    #[must_use]
    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.push(interest.into());
        self
    }

    /// Replace all interest tags.
    #[must_use]
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// Whether any non-blank interest was supplied.
    pub fn has_interests(&self) -> bool {
        self.interests.iter().any(|tag| !tag.trim().is_empty())
    }
}
