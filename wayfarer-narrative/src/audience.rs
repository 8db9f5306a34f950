//! Reader profiles for exhibit descriptions.

use std::str::FromStr;

use wayfarer_core::{AgeGroup, UnknownVariant, VisitPurpose, VisitorProfile};

/// Who a description is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Audience {
    /// Young visitors; short, friendly phrasing.
    Child,
    /// Adult visitors; emphasises historical significance.
    Adult,
    /// Scholars; academic framing.
    Researcher,
    /// No tailored template; the exhibit's own description is used.
    #[default]
    General,
}

impl Audience {
    /// Pick an audience for `visitor`.
    ///
    /// A research visit wins over the age band.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::{AgeGroup, VisitPurpose, VisitorProfile};
    /// use wayfarer_narrative::Audience;
    ///
    /// let child = VisitorProfile::new(60).with_age_group(AgeGroup::Child);
    /// assert_eq!(Audience::for_visitor(&child), Audience::Child);
    ///
    /// let scholar = VisitorProfile::new(60).with_visit_purpose(VisitPurpose::Research);
    /// assert_eq!(Audience::for_visitor(&scholar), Audience::Researcher);
    /// ```
    #[must_use]
    pub const fn for_visitor(visitor: &VisitorProfile) -> Self {
        match (visitor.visit_purpose, visitor.age_group) {
            (VisitPurpose::Research, _) => Self::Researcher,
            (_, AgeGroup::Child) => Self::Child,
            (_, AgeGroup::Adult | AgeGroup::Senior) => Self::Adult,
            (_, AgeGroup::Youth) => Self::General,
        }
    }

    /// Return the audience as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Adult => "adult",
            Self::Researcher => "researcher",
            Self::General => "general",
        }
    }
}

impl FromStr for Audience {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "child" => Ok(Self::Child),
            "adult" => Ok(Self::Adult),
            "researcher" => Ok(Self::Researcher),
            "general" => Ok(Self::General),
            _ => Err(UnknownVariant {
                kind: "audience",
                value: s.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
