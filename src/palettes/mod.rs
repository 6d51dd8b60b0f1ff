//! Cuisine and flavor palettes.
//!
//! Both kinds of palette run the same three passes over a working recipe:
//! recommended items are added when missing, "reduce" terms are annotated
//! (flavor profiles only) and the palette's substitutions are applied.
//! The built-in palettes are compiled once and reused.

use log::{debug, trace};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::matcher::TermMatcher;
use crate::model::Recipe;
use crate::tables::{
    cuisine_palette, cuisine_palettes, flavor_profile, flavor_profiles, Substitution,
};
use crate::TransformError;

mod cuisine;
mod flavor;

pub use self::cuisine::CuisinePalette;
pub use self::flavor::FlavorProfile;

pub const TO_TASTE_SUFFIX: &str = " (to taste)";
pub const REDUCE_MARK: &str = " (reduce)";
pub const USE_LESS_MARK: &str = " (use less)";

pub trait Palette {
    fn name(&self) -> &str;

    /// Items recommended by the palette, in the order they are checked
    fn additions(&self) -> Vec<&str>;

    /// Line appended to every instruction entry when `item` is added
    fn addition_note(&self, item: &str) -> String;

    /// Terms to flag for reduction
    fn reductions(&self) -> &[String] {
        &[]
    }

    fn substitutions(&self) -> &[Substitution];
}

#[derive(Debug, Clone)]
struct Addition {
    matcher: TermMatcher,
    item: String,
    note: String,
}

/// A palette with all of its term patterns compiled
#[derive(Debug, Clone)]
pub struct CompiledPalette {
    name: String,
    additions: Vec<Addition>,
    reductions: Vec<TermMatcher>,
    substitutions: Vec<(TermMatcher, String)>,
}

type CompiledTable = HashMap<String, CompiledPalette>;

static COMPILED_CUISINES: LazyLock<Result<CompiledTable, String>> =
    LazyLock::new(|| compile_table(cuisine_palettes()));

static COMPILED_FLAVOR_PROFILES: LazyLock<Result<CompiledTable, String>> =
    LazyLock::new(|| compile_table(flavor_profiles()));

fn compile_table<P: Palette>(palettes: &[P]) -> Result<CompiledTable, String> {
    palettes
        .iter()
        .map(|p| Ok((p.name().to_string(), CompiledPalette::compile(p)?)))
        .collect::<Result<CompiledTable, TransformError>>()
        .map_err(|e| e.to_string())
}

impl CompiledPalette {
    pub fn compile<P>(palette: &P) -> Result<Self, TransformError>
    where
        P: Palette + ?Sized,
    {
        let additions = palette
            .additions()
            .into_iter()
            .map(|item| {
                Ok(Addition {
                    matcher: TermMatcher::whole_word(item)?,
                    item: item.to_string(),
                    note: palette.addition_note(item),
                })
            })
            .collect::<Result<Vec<_>, TransformError>>()?;
        let reductions = palette
            .reductions()
            .iter()
            .map(|term| TermMatcher::whole_word(term))
            .collect::<Result<Vec<_>, _>>()?;
        let substitutions = palette
            .substitutions()
            .iter()
            .map(|s| Ok((TermMatcher::whole_word(&s.from)?, s.to.clone())))
            .collect::<Result<Vec<_>, TransformError>>()?;

        Ok(Self {
            name: palette.name().to_string(),
            additions,
            reductions,
            substitutions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the addition, reduction and substitution passes.
    pub fn apply(&self, recipe: &mut Recipe) {
        debug!("Applying palette '{}'", self.name);

        // Presence is checked against the growing list, so an item this pass
        // already appended counts as present.
        for addition in &self.additions {
            if recipe.ingredients.iter().any(|line| addition.matcher.is_match(line)) {
                trace!("'{}' already present, not adding", addition.item);
                continue;
            }

            recipe.ingredients.push(format!("{}{}", addition.item, TO_TASTE_SUFFIX));
            for entry in recipe.instructions.entries_mut() {
                entry.push('\n');
                entry.push_str(&addition.note);
            }
        }

        // Only the first occurrence per line or entry is annotated.
        for matcher in &self.reductions {
            for line in recipe.ingredients.iter_mut() {
                *line = matcher.replace_first_with(line, |m| format!("{}{}", m, REDUCE_MARK));
            }
            for entry in recipe.instructions.entries_mut() {
                *entry = matcher.replace_first_with(entry, |m| format!("{}{}", m, USE_LESS_MARK));
            }
        }

        for (matcher, to) in &self.substitutions {
            for line in recipe.ingredients.iter_mut() {
                *line = matcher.replace_first_literal(line, to);
            }
            for entry in recipe.instructions.entries_mut() {
                *entry = matcher.replace_first_literal(entry, to);
            }
        }
    }
}

/// Compile and run one palette.
pub fn apply_palette<P>(palette: &P, recipe: &mut Recipe) -> Result<(), TransformError>
where
    P: Palette + ?Sized,
{
    CompiledPalette::compile(palette)?.apply(recipe);
    Ok(())
}

/// The named built-in cuisine palette, compiled once. Names match exactly.
pub fn compiled_cuisine(name: &str) -> Result<Option<&'static CompiledPalette>, TransformError> {
    let table = COMPILED_CUISINES
        .as_ref()
        .map_err(|e| TransformError::InvalidTable(e.clone()))?;
    Ok(cuisine_palette(name).and_then(|p| table.get(p.name.as_str())))
}

/// The named built-in flavor profile, compiled once. Names are lowercased.
pub fn compiled_flavor_profile(
    name: &str,
) -> Result<Option<&'static CompiledPalette>, TransformError> {
    let table = COMPILED_FLAVOR_PROFILES
        .as_ref()
        .map_err(|e| TransformError::InvalidTable(e.clone()))?;
    Ok(flavor_profile(name).and_then(|p| table.get(p.profile.as_str())))
}

/// Apply the named cuisine palettes in order. Unknown names are skipped.
pub fn apply_cuisines<S>(recipe: &mut Recipe, names: &[S]) -> Result<(), TransformError>
where
    S: AsRef<str>,
{
    for name in names {
        match compiled_cuisine(name.as_ref())? {
            Some(palette) => palette.apply(recipe),
            None => debug!("Unknown cuisine '{}', skipping", name.as_ref()),
        }
    }
    Ok(())
}

/// Apply the named flavor profiles in order. Unknown names are skipped.
pub fn apply_flavor_profiles<S>(recipe: &mut Recipe, names: &[S]) -> Result<(), TransformError>
where
    S: AsRef<str>,
{
    for name in names {
        match compiled_flavor_profile(name.as_ref())? {
            Some(profile) => profile.apply(recipe),
            None => debug!("Unknown flavor profile '{}', skipping", name.as_ref()),
        }
    }
    Ok(())
}
