//! Static lookup tables: health replacement rules, flavor profiles and
//! cuisine palettes.
//!
//! The tables are JSON documents under `data/`, embedded at compile time and
//! parsed once on first access. They are never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::palettes::{CuisinePalette, FlavorProfile};
use crate::TransformError;

/// One health replacement rule: an unhealthy term and its alternatives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    pub unhealthy: String,
    pub healthy_alternatives: Vec<String>,
}

/// A direct `from` → `to` substitution used by palettes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

#[derive(Deserialize)]
struct ReplacementsData {
    ingredient_replacements: Vec<ReplacementRule>,
}

static REPLACEMENT_RULES: LazyLock<Vec<ReplacementRule>> = LazyLock::new(|| {
    let json = include_str!("../data/replacements.json");
    let data: ReplacementsData =
        serde_json::from_str(json).expect("Failed to parse replacements.json");
    data.ingredient_replacements
});

static FLAVOR_PROFILES: LazyLock<Vec<FlavorProfile>> = LazyLock::new(|| {
    let json = include_str!("../data/flavor_profiles.json");
    serde_json::from_str(json).expect("Failed to parse flavor_profiles.json")
});

static CUISINE_PALETTES: LazyLock<Vec<CuisinePalette>> = LazyLock::new(|| {
    let json = include_str!("../data/cuisine_palettes.json");
    serde_json::from_str(json).expect("Failed to parse cuisine_palettes.json")
});

/// Health replacement rules, in the order they are applied
pub fn replacement_rules() -> &'static [ReplacementRule] {
    &REPLACEMENT_RULES
}

pub fn flavor_profiles() -> &'static [FlavorProfile] {
    &FLAVOR_PROFILES
}

pub fn cuisine_palettes() -> &'static [CuisinePalette] {
    &CUISINE_PALETTES
}

/// Look up a flavor profile. The requested name is lowercased first, so
/// `"Spicy"` finds `"spicy"`.
pub fn flavor_profile(name: &str) -> Option<&'static FlavorProfile> {
    let wanted = name.to_lowercase();
    FLAVOR_PROFILES.iter().find(|p| p.profile == wanted)
}

/// Look up a cuisine palette by its exact name (e.g. `"Middle Eastern"`).
pub fn cuisine_palette(name: &str) -> Option<&'static CuisinePalette> {
    CUISINE_PALETTES.iter().find(|p| p.name == name)
}

pub fn available_flavor_profiles() -> Vec<&'static str> {
    FLAVOR_PROFILES.iter().map(|p| p.profile.as_str()).collect()
}

pub fn available_cuisines() -> Vec<&'static str> {
    CUISINE_PALETTES.iter().map(|p| p.name.as_str()).collect()
}

/// Check the table invariants: no blank terms and at least one alternative
/// per replacement rule.
pub fn validate_tables() -> Result<(), TransformError> {
    for rule in replacement_rules() {
        if rule.unhealthy.trim().is_empty() {
            return Err(TransformError::InvalidTable(
                "replacement rule with a blank term".to_string(),
            ));
        }
        if rule.healthy_alternatives.is_empty() {
            return Err(TransformError::InvalidTable(format!(
                "rule '{}' has no alternatives",
                rule.unhealthy
            )));
        }
    }

    let palette_terms = flavor_profiles()
        .iter()
        .flat_map(|p| {
            p.add
                .iter()
                .chain(p.reduce.iter())
                .chain(p.replace.iter().map(|s| &s.from))
        })
        .chain(cuisine_palettes().iter().flat_map(|p| {
            p.spices
                .iter()
                .chain(p.herbs.iter())
                .chain(p.boosters.iter())
                .chain(p.subs.iter().map(|s| &s.from))
        }));

    for term in palette_terms {
        if term.trim().is_empty() {
            return Err(TransformError::InvalidTable(
                "palette with a blank term".to_string(),
            ));
        }
    }

    Ok(())
}
