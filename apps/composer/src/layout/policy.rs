//! Per-section policy for empty backing data.
//!
//! Sections do not share one "skip if empty" rule. Work experience stays on the page even
//! when empty (an empty work history is itself worth showing), personal details keep their
//! title, and everything else disappears. The table is explicit and overridable per key
//! from the presentation config.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::presentation::SectionKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySectionPolicy {
    /// Render the title even with no items.
    Render,
    /// Leave the whole section out.
    Omit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionPolicies([EmptySectionPolicy; 7]);

impl Default for SectionPolicies {
    fn default() -> Self {
        use EmptySectionPolicy::{Omit, Render};

        let mut table = [Omit; 7];
        table[SectionKey::PersonalDetails.index()] = Render;
        table[SectionKey::WorkExperience.index()] = Render;
        SectionPolicies(table)
    }
}

impl SectionPolicies {
    pub fn get(&self, key: SectionKey) -> EmptySectionPolicy {
        self.0[key.index()]
    }

    pub fn with_overrides(mut self, overrides: &BTreeMap<SectionKey, EmptySectionPolicy>) -> Self {
        for (key, policy) in overrides {
            self.0[key.index()] = *policy;
        }
        self
    }

    /// Whether a section should be composed given the emptiness of its backing data.
    pub fn should_render(&self, key: SectionKey, is_empty: bool) -> bool {
        !is_empty || self.get(key) == EmptySectionPolicy::Render
    }
}
