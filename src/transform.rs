use log::{debug, info};
use rand::Rng;

use crate::model::{Instructions, Recipe, DEFAULT_TITLE};
use crate::options::TransformOptions;
use crate::palettes::{apply_cuisines, apply_flavor_profiles};
use crate::rewriter::RuleSet;
use crate::TransformError;

pub const NOTES_HEADER: &str = "Notes:\n";

/// Transform a recipe using the thread-local random generator.
///
/// See [`process_recipe_with_rng`].
pub fn process_recipe(
    recipe: &Recipe,
    options: &TransformOptions,
) -> Result<Recipe, TransformError> {
    process_recipe_with_rng(recipe, options, &mut rand::thread_rng())
}

/// Transform a recipe.
///
/// Runs, in order: health replacements over ingredients and instructions,
/// the requested cuisine palettes, the requested flavor profiles, and
/// finally appends the advisory notes section to the instructions. The
/// input is left untouched; the result is a new value.
///
/// `rng` is only consulted by the `random` replacement strategy.
pub fn process_recipe_with_rng<R>(
    recipe: &Recipe,
    options: &TransformOptions,
    rng: &mut R,
) -> Result<Recipe, TransformError>
where
    R: Rng + ?Sized,
{
    debug!(
        "Transforming '{}' (health level {:?}, strategy {:?})",
        recipe.title, options.health_level, options.replacement_strategy
    );

    let mut working = working_copy(recipe);

    let rules = RuleSet::health()?;
    rules.replace_in_ingredients(&mut working.ingredients, options, rng);
    rules.replace_in_instructions(&mut working.instructions, options, rng);

    if !options.cuisines.is_empty() {
        apply_cuisines(&mut working, options.cuisines.as_slice())?;
    }

    if !options.flavor_profiles.is_empty() {
        apply_flavor_profiles(&mut working, options.flavor_profiles.as_slice())?;
    }

    let notes = options.advisory_notes();
    append_notes(&mut working.instructions, &notes);

    info!(
        "Transformed '{}': {} ingredients, {} advisory notes",
        working.title,
        working.ingredients.len(),
        notes.len()
    );

    Ok(working)
}

fn working_copy(recipe: &Recipe) -> Recipe {
    let title = if recipe.title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        recipe.title.clone()
    };

    Recipe {
        title,
        ingredients: recipe.ingredients.clone(),
        instructions: recipe.instructions.clone(),
    }
}

/// Append the notes section. The header is written even when there are no
/// notes.
fn append_notes(instructions: &mut Instructions, notes: &[&str]) {
    let body = notes.join("\n");
    match instructions {
        Instructions::Steps(steps) => steps.push(format!("\n{}{}", NOTES_HEADER, body)),
        Instructions::Text(text) => {
            text.push_str("\n\n");
            text.push_str(NOTES_HEADER);
            text.push_str(&body);
        }
    }
}
