use rand::Rng;

use crate::{
    process_recipe, process_recipe_with_rng, HealthLevel, Recipe, ReplacementStrategy,
    TransformError, TransformOptions,
};

/// Builder for configuring a [`RecipeTransformer`]
#[derive(Debug, Default)]
pub struct RecipeTransformerBuilder {
    options: TransformOptions,
}

impl RecipeTransformerBuilder {
    /// Start from an existing set of options, e.g. the configured defaults
    ///
    /// # Example
    /// ```
    /// use recipe_transform::{RecipeTransformer, TransformOptions};
    ///
    /// let builder = RecipeTransformer::builder()
    ///     .options(TransformOptions::default())
    ///     .cuisine("Italian");
    /// ```
    pub fn options(mut self, options: TransformOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the (advisory) health level
    pub fn health_level(mut self, level: HealthLevel) -> Self {
        self.options.health_level = level;
        self
    }

    /// Add a cuisine palette. Palettes are applied in the order they are added.
    ///
    /// # Example
    /// ```
    /// use recipe_transform::RecipeTransformer;
    ///
    /// let builder = RecipeTransformer::builder()
    ///     .cuisine("Indian")
    ///     .cuisine("Thai");
    /// ```
    pub fn cuisine(mut self, name: impl Into<String>) -> Self {
        self.options.cuisines.push(name.into());
        self
    }

    pub fn cuisines<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.cuisines.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add a flavor profile. Profiles are applied in the order they are added.
    pub fn flavor_profile(mut self, name: impl Into<String>) -> Self {
        self.options.flavor_profiles.push(name.into());
        self
    }

    pub fn flavor_profiles<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options
            .flavor_profiles
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn spice_level(mut self, level: u8) -> Self {
        self.options.spice_level = level;
        self
    }

    pub fn sweetness(mut self, level: u8) -> Self {
        self.options.sweetness = level;
        self
    }

    pub fn richness(mut self, level: u8) -> Self {
        self.options.richness = level;
        self
    }

    pub fn prefer_plant_based(mut self, prefer: bool) -> Self {
        self.options.prefer_plant_based = prefer;
        self
    }

    pub fn strategy(mut self, strategy: ReplacementStrategy) -> Self {
        self.options.replacement_strategy = strategy;
        self
    }

    /// Validate the options and build the transformer
    ///
    /// # Errors
    /// Returns [`TransformError::InvalidOption`] when a slider is above 10.
    ///
    /// # Example
    /// ```
    /// use recipe_transform::RecipeTransformer;
    ///
    /// let transformer = RecipeTransformer::builder()
    ///     .flavor_profile("spicy")
    ///     .spice_level(9)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(transformer.options().spice_level, 9);
    /// ```
    pub fn build(self) -> Result<RecipeTransformer, TransformError> {
        self.options.validate()?;
        Ok(RecipeTransformer {
            options: self.options,
        })
    }
}

/// A validated, reusable set of transformation options
#[derive(Debug, Clone)]
pub struct RecipeTransformer {
    options: TransformOptions,
}

impl RecipeTransformer {
    /// Creates a new builder
    pub fn builder() -> RecipeTransformerBuilder {
        RecipeTransformerBuilder::default()
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Transform a recipe
    ///
    /// # Example
    /// ```
    /// use recipe_transform::{Instructions, Recipe, RecipeTransformer};
    ///
    /// let recipe = Recipe::new(
    ///     "Toast",
    ///     vec!["2 slices white bread".to_string(), "1 tbsp butter".to_string()],
    ///     Instructions::from("Toast the white bread and spread the butter."),
    /// );
    /// let transformed = RecipeTransformer::builder()
    ///     .build()
    ///     .unwrap()
    ///     .transform(&recipe)
    ///     .unwrap();
    /// assert_eq!(transformed.ingredients[0], "2 slices whole grain bread");
    /// ```
    pub fn transform(&self, recipe: &Recipe) -> Result<Recipe, TransformError> {
        process_recipe(recipe, &self.options)
    }

    /// Transform a recipe drawing random choices from `rng`
    pub fn transform_with_rng<R>(&self, recipe: &Recipe, rng: &mut R) -> Result<Recipe, TransformError>
    where
        R: Rng + ?Sized,
    {
        process_recipe_with_rng(recipe, &self.options, rng)
    }
}
