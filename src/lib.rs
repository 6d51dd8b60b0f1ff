//! Rewrite recipes with healthier ingredients and seasoning adjustments.
//!
//! A transformation runs three passes over a copy of the recipe: health
//! replacements (e.g. butter → olive oil), cuisine palettes (e.g. Italian)
//! and flavor profiles (e.g. spicy). Advisory notes derived from the spice,
//! sweetness and richness sliders are appended to the instructions.
//!
//! ```
//! use recipe_transform::{process_recipe, Instructions, Recipe, TransformOptions};
//!
//! let recipe = Recipe::new(
//!     "Alfredo",
//!     vec!["1/2 cup butter".to_string(), "1 cup heavy cream".to_string()],
//!     Instructions::default(),
//! );
//! let transformed = process_recipe(&recipe, &TransformOptions::default()).unwrap();
//! assert_eq!(transformed.ingredients, vec!["1/2 cup olive oil", "1 cup greek yogurt"]);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod matcher;
pub mod model;
pub mod options;
pub mod palettes;
pub mod rewriter;
pub mod selector;
pub mod tables;
pub mod transform;

pub use builder::{RecipeTransformer, RecipeTransformerBuilder};
pub use crate::config::{load_config, TransformConfig};
pub use error::TransformError;
pub use model::{Instructions, Recipe};
pub use options::{HealthLevel, ReplacementStrategy, TransformOptions};
pub use palettes::{CompiledPalette, CuisinePalette, FlavorProfile, Palette};
pub use tables::{
    available_cuisines, available_flavor_profiles, cuisine_palette, cuisine_palettes,
    flavor_profile, flavor_profiles, replacement_rules, ReplacementRule, Substitution,
};
pub use transform::{process_recipe, process_recipe_with_rng};

/// Parse a recipe from JSON and transform it.
pub fn process_recipe_json(
    json: &str,
    options: &TransformOptions,
) -> Result<Recipe, TransformError> {
    let recipe = Recipe::from_json(json)?;
    process_recipe(&recipe, options)
}
