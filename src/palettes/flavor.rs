use serde::{Deserialize, Serialize};

use crate::palettes::Palette;
use crate::tables::Substitution;

/// Taste-oriented palette such as "spicy" or "tangy"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorProfile {
    pub profile: String,
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub reduce: Vec<String>,
    #[serde(default)]
    pub replace: Vec<Substitution>,
}

impl Palette for FlavorProfile {
    fn name(&self) -> &str {
        &self.profile
    }

    fn additions(&self) -> Vec<&str> {
        self.add.iter().map(String::as_str).collect()
    }

    fn addition_note(&self, item: &str) -> String {
        format!("Add {} to taste.", item)
    }

    fn reductions(&self) -> &[String] {
        &self.reduce
    }

    fn substitutions(&self) -> &[Substitution] {
        &self.replace
    }
}
