use serde::{Deserialize, Serialize};

use crate::TransformError;

/// Upper bound of the spice, sweetness and richness sliders
pub const SLIDER_MAX: u8 = 10;

const DEFAULT_SLIDER: u8 = 5;
const LOW_THRESHOLD: u8 = 3;
const HIGH_THRESHOLD: u8 = 8;

pub const LOW_SPICE_NOTE: &str = "Low spice: reduce added chilies and use mild peppers.";
pub const HIGH_SPICE_NOTE: &str = "High spice: consider adding extra chili flakes or cayenne.";
pub const LOW_SWEETNESS_NOTE: &str =
    "Low sweetness: reduce sweeteners and use more citrus for brightness.";
pub const HIGH_SWEETNESS_NOTE: &str = "High sweetness: add honey or maple syrup to taste.";
pub const LOW_RICHNESS_NOTE: &str = "Low richness: use lighter dairy substitutes and reduce oils.";
pub const HIGH_RICHNESS_NOTE: &str =
    "High richness: keep cream/cashew cream or olive oil amounts.";
pub const PLANT_BASED_NOTE: &str =
    "Preference: plant-based alternatives preferred where possible.";

/// Health goal of the caller. Currently advisory: it is logged but does not
/// change which substitutions are made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLevel {
    #[default]
    Default,
    LowFat,
    LowSugar,
    HighProtein,
    Vegan,
}

/// How an alternative is picked from a replacement rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementStrategy {
    /// First alternative, or the first plant-based one when preferred
    #[default]
    Best,
    /// Uniformly random alternative
    Random,
}

impl std::str::FromStr for HealthLevel {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(HealthLevel::Default),
            "low_fat" => Ok(HealthLevel::LowFat),
            "low_sugar" => Ok(HealthLevel::LowSugar),
            "high_protein" => Ok(HealthLevel::HighProtein),
            "vegan" => Ok(HealthLevel::Vegan),
            other => Err(TransformError::InvalidOption(format!(
                "Unknown health level: {}",
                other
            ))),
        }
    }
}

impl std::str::FromStr for ReplacementStrategy {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best" => Ok(ReplacementStrategy::Best),
            "random" => Ok(ReplacementStrategy::Random),
            other => Err(TransformError::InvalidOption(format!(
                "Unknown replacement strategy: {}",
                other
            ))),
        }
    }
}

/// Options controlling a recipe transformation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    #[serde(alias = "healthLevel")]
    pub health_level: HealthLevel,
    /// Flavor profile names, applied in order
    #[serde(alias = "flavorProfiles")]
    pub flavor_profiles: Vec<String>,
    /// Cuisine names, applied in order
    pub cuisines: Vec<String>,
    #[serde(alias = "spiceLevel")]
    pub spice_level: u8,
    pub sweetness: u8,
    pub richness: u8,
    #[serde(alias = "preferPlantBased")]
    pub prefer_plant_based: bool,
    #[serde(alias = "replacementStrategy")]
    pub replacement_strategy: ReplacementStrategy,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            health_level: HealthLevel::Default,
            flavor_profiles: Vec::new(),
            cuisines: Vec::new(),
            spice_level: DEFAULT_SLIDER,
            sweetness: DEFAULT_SLIDER,
            richness: DEFAULT_SLIDER,
            prefer_plant_based: false,
            replacement_strategy: ReplacementStrategy::Best,
        }
    }
}

impl TransformOptions {
    /// Check that every slider is within `0..=10`.
    pub fn validate(&self) -> Result<(), TransformError> {
        for (name, value) in [
            ("spice_level", self.spice_level),
            ("sweetness", self.sweetness),
            ("richness", self.richness),
        ] {
            if value > SLIDER_MAX {
                return Err(TransformError::InvalidOption(format!(
                    "{} must be between 0 and {}, got {}",
                    name, SLIDER_MAX, value
                )));
            }
        }
        Ok(())
    }

    /// Advisory notes derived from the sliders and the plant-based flag.
    ///
    /// Each slider adds a note at `<= 3` or `>= 8` and stays silent in between.
    pub fn advisory_notes(&self) -> Vec<&'static str> {
        let mut notes = Vec::new();

        if let Some(note) = slider_note(self.spice_level, LOW_SPICE_NOTE, HIGH_SPICE_NOTE) {
            notes.push(note);
        }
        if let Some(note) = slider_note(self.sweetness, LOW_SWEETNESS_NOTE, HIGH_SWEETNESS_NOTE) {
            notes.push(note);
        }
        if let Some(note) = slider_note(self.richness, LOW_RICHNESS_NOTE, HIGH_RICHNESS_NOTE) {
            notes.push(note);
        }
        if self.prefer_plant_based {
            notes.push(PLANT_BASED_NOTE);
        }

        notes
    }
}

fn slider_note(value: u8, low: &'static str, high: &'static str) -> Option<&'static str> {
    if value <= LOW_THRESHOLD {
        Some(low)
    } else if value >= HIGH_THRESHOLD {
        Some(high)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let options = TransformOptions::default();
        assert_eq!(options.health_level, HealthLevel::Default);
        assert_eq!(options.spice_level, 5);
        assert_eq!(options.sweetness, 5);
        assert_eq!(options.richness, 5);
        assert!(!options.prefer_plant_based);
        assert_eq!(options.replacement_strategy, ReplacementStrategy::Best);
        assert!(options.advisory_notes().is_empty());
    }

    #[test]
    fn test_slider_thresholds() {
        let mut options = TransformOptions {
            spice_level: 3,
            sweetness: 8,
            richness: 7,
            ..Default::default()
        };
        assert_eq!(
            options.advisory_notes(),
            vec![LOW_SPICE_NOTE, HIGH_SWEETNESS_NOTE]
        );

        options.spice_level = 4;
        options.sweetness = 10;
        options.richness = 0;
        assert_eq!(
            options.advisory_notes(),
            vec![HIGH_SWEETNESS_NOTE, LOW_RICHNESS_NOTE]
        );
    }

    #[test]
    fn test_plant_based_note_is_always_last() {
        let options = TransformOptions {
            richness: 9,
            prefer_plant_based: true,
            ..Default::default()
        };
        assert_eq!(
            options.advisory_notes(),
            vec![HIGH_RICHNESS_NOTE, PLANT_BASED_NOTE]
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_slider() {
        let options = TransformOptions {
            sweetness: 11,
            ..Default::default()
        };
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("sweetness"));
        assert!(TransformOptions::default().validate().is_ok());
    }

    #[test]
    fn test_deserialize_camel_case_names() {
        let json = r#"{
            "healthLevel": "low_fat",
            "flavorProfiles": ["spicy"],
            "cuisines": ["Italian"],
            "spiceLevel": 7,
            "preferPlantBased": true,
            "replacementStrategy": "random"
        }"#;
        let options: TransformOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.health_level, HealthLevel::LowFat);
        assert_eq!(options.flavor_profiles, vec!["spicy"]);
        assert_eq!(options.cuisines, vec!["Italian"]);
        assert_eq!(options.spice_level, 7);
        assert_eq!(options.sweetness, 5);
        assert!(options.prefer_plant_based);
        assert_eq!(options.replacement_strategy, ReplacementStrategy::Random);
    }

    #[test]
    fn test_parse_strategy_and_health_level() {
        assert_eq!(
            "RANDOM".parse::<ReplacementStrategy>().unwrap(),
            ReplacementStrategy::Random
        );
        assert_eq!(
            "high_protein".parse::<HealthLevel>().unwrap(),
            HealthLevel::HighProtein
        );
        assert!("cheapest".parse::<ReplacementStrategy>().is_err());
    }
}
