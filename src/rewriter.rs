//! Health replacement pass: swaps unhealthy terms for alternatives across
//! ingredient lines and instructions.

use log::{debug, trace};
use rand::Rng;
use std::sync::LazyLock;

use crate::matcher::TermMatcher;
use crate::model::Instructions;
use crate::options::TransformOptions;
use crate::selector::choose_alternative;
use crate::tables::{replacement_rules, ReplacementRule};
use crate::TransformError;

/// A replacement rule with its term pattern compiled
#[derive(Debug, Clone)]
pub struct CompiledRule {
    matcher: TermMatcher,
    alternatives: Vec<String>,
}

impl CompiledRule {
    pub fn new(rule: &ReplacementRule) -> Result<Self, TransformError> {
        Ok(Self {
            matcher: TermMatcher::plural(&rule.unhealthy)?,
            alternatives: rule.healthy_alternatives.clone(),
        })
    }

    pub fn term(&self) -> &str {
        self.matcher.term()
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }
}

/// An ordered set of compiled replacement rules
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

static HEALTH_RULES: LazyLock<Result<RuleSet, String>> =
    LazyLock::new(|| RuleSet::compile(replacement_rules()).map_err(|e| e.to_string()));

impl RuleSet {
    pub fn compile(rules: &[ReplacementRule]) -> Result<Self, TransformError> {
        let rules = rules
            .iter()
            .map(CompiledRule::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// The built-in health replacement table, compiled once.
    pub fn health() -> Result<&'static RuleSet, TransformError> {
        HEALTH_RULES
            .as_ref()
            .map_err(|e| TransformError::InvalidTable(e.clone()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every rule to one line, in table order. Later rules see the
    /// output of earlier ones.
    pub fn replace_in_line<R>(&self, line: &str, options: &TransformOptions, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        self.rules.iter().fold(line.to_string(), |out, rule| {
            rewrite_line(&out, rule, options, &mut *rng)
        })
    }

    /// Rewrite each ingredient line independently.
    pub fn replace_in_ingredients<R>(
        &self,
        ingredients: &mut [String],
        options: &TransformOptions,
        rng: &mut R,
    ) where
        R: Rng + ?Sized,
    {
        for line in ingredients.iter_mut() {
            *line = self.replace_in_line(line, options, rng);
        }
    }

    /// Rewrite instructions. A list is handled entry by entry; a text block
    /// is one entry, so every line in it is rewritten in one pass.
    pub fn replace_in_instructions<R>(
        &self,
        instructions: &mut Instructions,
        options: &TransformOptions,
        rng: &mut R,
    ) where
        R: Rng + ?Sized,
    {
        for entry in instructions.entries_mut() {
            *entry = self.replace_in_line(entry, options, rng);
        }
    }
}

/// Apply a single rule to a line.
///
/// An alternative is chosen for each match separately. When the matched text
/// starts with an uppercase letter the replacement's first letter is
/// uppercased too.
pub fn rewrite_line<R>(
    line: &str,
    rule: &CompiledRule,
    options: &TransformOptions,
    rng: &mut R,
) -> String
where
    R: Rng + ?Sized,
{
    if !rule.matcher.is_match(line) {
        return line.to_string();
    }

    rule.matcher.replace_all_with(line, |matched| {
        match choose_alternative(
            &rule.alternatives,
            options.replacement_strategy,
            options.prefer_plant_based,
            &mut *rng,
        ) {
            Some(alternative) => {
                let replacement = transfer_leading_case(matched, alternative);
                trace!("Replacing '{}' with '{}'", matched, replacement);
                replacement
            }
            None => {
                debug!("No alternative for '{}', leaving it in place", rule.term());
                matched.to_string()
            }
        }
    })
}

fn transfer_leading_case(matched: &str, replacement: &str) -> String {
    if matched.chars().next().is_some_and(char::is_uppercase) {
        capitalize_first(replacement)
    } else {
        replacement.to_string()
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
