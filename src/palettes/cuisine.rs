use serde::{Deserialize, Serialize};

use crate::palettes::Palette;
use crate::tables::Substitution;

/// Regional palette: spices, herbs and boosters to recommend plus direct
/// substitutions. Cuisines have no reduce step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisinePalette {
    pub name: String,
    #[serde(default)]
    pub spices: Vec<String>,
    #[serde(default)]
    pub herbs: Vec<String>,
    #[serde(default)]
    pub boosters: Vec<String>,
    #[serde(default)]
    pub subs: Vec<Substitution>,
}

impl Palette for CuisinePalette {
    fn name(&self) -> &str {
        &self.name
    }

    fn additions(&self) -> Vec<&str> {
        self.spices
            .iter()
            .chain(self.herbs.iter())
            .chain(self.boosters.iter())
            .map(String::as_str)
            .collect()
    }

    fn addition_note(&self, item: &str) -> String {
        format!("Consider adding {}.", item)
    }

    fn substitutions(&self) -> &[Substitution] {
        &self.subs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Instructions, Recipe};
    use crate::palettes::{apply_cuisines, apply_palette};
    use crate::tables::cuisine_palette;

    #[test]
    fn test_additions_concatenate_in_order() {
        let mexican = cuisine_palette("Mexican").unwrap();
        assert_eq!(
            mexican.additions(),
            vec![
                "cumin",
                "paprika",
                "chili powder",
                "oregano",
                "cilantro",
                "lime juice",
                "jalapeño",
                "chipotle",
                "avocado"
            ]
        );
        assert!(mexican.reductions().is_empty());
    }

    #[test]
    fn test_italian_palette() {
        let mut recipe = Recipe::new(
            "Pasta",
            vec![
                "200g white pasta".to_string(),
                "2 cloves garlic".to_string(),
                "fresh basil".to_string(),
            ],
            Instructions::Steps(vec!["Boil the white pasta.".to_string()]),
        );
        apply_palette(cuisine_palette("Italian").unwrap(), &mut recipe).unwrap();

        assert_eq!(
            recipe.ingredients,
            vec![
                "200g whole-grain pasta or zucchini noodles",
                "2 cloves garlic",
                "fresh basil",
                "oregano (to taste)",
                "rosemary (to taste)",
                "thyme (to taste)",
                "olive oil (to taste)",
                "sun-dried tomato (to taste)",
                "parmesan (or nutritional yeast) (to taste)",
            ]
        );
        let steps = recipe.instructions.entries();
        assert!(steps[0].starts_with("Boil the whole-grain pasta or zucchini noodles."));
        assert!(steps[0].contains("\nConsider adding oregano."));
        assert!(!steps[0].contains("Consider adding basil."));
        assert!(!steps[0].contains("Consider adding garlic."));
    }

    #[test]
    fn test_cuisines_apply_in_order() {
        let mut recipe = Recipe::new("Bowl", vec!["1 cup white rice".to_string()], Instructions::default());
        apply_cuisines(&mut recipe, &["Japanese", "Thai"]).unwrap();

        assert_eq!(recipe.ingredients[0], "1 cup brown rice");
        // Thai adds cilantro once; Japanese added nothing that Thai repeats
        let cilantro = recipe
            .ingredients
            .iter()
            .filter(|line| line.starts_with("cilantro"))
            .count();
        assert_eq!(cilantro, 1);
    }
}
