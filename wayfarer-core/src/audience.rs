//! Closed vocabularies describing who is visiting and how.
//!
//! Each enum parses case-insensitively from its lowercase name and renders
//! back to the same name.
//!
//! # Examples
//! ```
//! use std::str::FromStr;
//! use wayfarer_core::{AgeGroup, PhysicalAbility};
//!
//! assert_eq!(AgeGroup::from_str("Senior"), Ok(AgeGroup::Senior));
//! assert_eq!(PhysicalAbility::Low.to_string(), "low");
//! ```

use thiserror::Error;

/// Returned when a string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    /// Vocabulary that was being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the variant as a lowercase `&str`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: $kind,
                        value: s.to_owned(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Broad age band of the visitor or group lead.
    AgeGroup, "age group", default = Adult {
        /// Under twelve.
        Child => "child",
        /// Teenagers and students.
        Youth => "youth",
        /// Working-age adults.
        Adult => "adult",
        /// Older visitors.
        Senior => "senior",
    }
}

vocabulary! {
    /// Self-reported stamina, which caps the number of stops.
    PhysicalAbility, "physical ability", default = Medium {
        /// Short routes only.
        Low => "low",
        /// Moderate routes.
        Medium => "medium",
        /// No stop cap beyond the time budget.
        High => "high",
    }
}

vocabulary! {
    /// Composition of the visiting party.
    GroupType, "group type", default = Individual {
        /// A single visitor.
        Individual => "individual",
        /// Mixed ages travelling together.
        Family => "family",
        /// An organised tour or class.
        Group => "group",
    }
}

vocabulary! {
    /// Why the visitor came. Advisory only.
    VisitPurpose, "visit purpose", default = Education {
        /// Learning-oriented visit.
        Education => "education",
        /// Casual sightseeing.
        Leisure => "leisure",
        /// In-depth study of sources and artefacts.
        Research => "research",
    }
}
