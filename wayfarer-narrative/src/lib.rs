//! Narrative annotations for planned itineraries.
//!
//! [`TemplateNarrator`] implements [`Enhancer`](wayfarer_core::Enhancer) with
//! fixed templates. A service backed by a real text generator can replace it
//! behind the same trait without the optimizer noticing.
//!
//! # Examples
//!
//! ```
//! use wayfarer_core::{Enhancer, VisitorProfile, sample_catalog};
//! use wayfarer_narrative::{Audience, TemplateNarrator};
//!
//! let catalog = sample_catalog();
//! let visitor = VisitorProfile::new(60);
//! let first = &catalog.exhibits[0];
//! let blurb = TemplateNarrator::describe(first, Audience::for_visitor(&visitor));
//! assert!(blurb.contains(&first.name));
//! ```

#![forbid(unsafe_code)]

mod audience;
mod narrator;

pub use audience::Audience;
pub use narrator::{GENERIC_LINGER_ADVICE, TemplateNarrator};
