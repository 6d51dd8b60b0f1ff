use rand::rngs::StdRng;
use rand::SeedableRng;
use recipe_transform::matcher::TermMatcher;
use recipe_transform::{
    process_recipe, process_recipe_with_rng, replacement_rules, Instructions, Recipe,
    ReplacementStrategy, TransformError, TransformOptions,
};

fn single_line(line: &str) -> Recipe {
    Recipe::new("Edge", vec![line.to_string()], Instructions::default())
}

#[test]
fn test_every_rule_removes_its_term() {
    let options = TransformOptions::default();

    for rule in replacement_rules() {
        let matcher = TermMatcher::plural(&rule.unhealthy).unwrap();
        let first = &rule.healthy_alternatives[0];
        // Some alternatives legitimately reuse the term ("bacon" -> "turkey bacon")
        if matcher.is_match(first) {
            continue;
        }

        let recipe = single_line(&format!("1 cup {}", rule.unhealthy));
        let result = process_recipe(&recipe, &options).unwrap();
        assert!(
            !matcher.is_match(&result.ingredients[0]),
            "'{}' still present in '{}'",
            rule.unhealthy,
            result.ingredients[0]
        );
    }
}

#[test]
fn test_capitalized_term_gives_capitalized_alternative() {
    let options = TransformOptions::default();

    let upper = process_recipe(&single_line("Butter"), &options).unwrap();
    assert_eq!(upper.ingredients, vec!["Olive oil"]);

    let lower = process_recipe(&single_line("butter"), &options).unwrap();
    assert_eq!(lower.ingredients, vec!["olive oil"]);
}

#[test]
fn test_naive_plurals_are_replaced() {
    let options = TransformOptions::default();
    let recipe = Recipe::new(
        "Brunch",
        vec!["2 sausages".to_string(), "3 Bagels".to_string()],
        Instructions::default(),
    );
    let result = process_recipe(&recipe, &options).unwrap();
    assert_eq!(result.ingredients, vec!["2 chicken sausage", "3 Whole wheat bagel"]);
}

#[test]
fn test_partial_words_are_left_alone() {
    let options = TransformOptions::default();
    let recipe = Recipe::new(
        "Partial",
        vec!["1 tbsp buttermilk".to_string(), "2 sodalite stones".to_string()],
        Instructions::default(),
    );
    let result = process_recipe(&recipe, &options).unwrap();
    assert_eq!(result.ingredients, recipe.ingredients);
}

#[test]
fn test_term_with_parentheses_matches_literally() {
    let options = TransformOptions::default();
    let recipe = single_line("12 meatballs (fried)");
    let result = process_recipe(&recipe, &options).unwrap();
    assert_eq!(result.ingredients, vec!["12 baked turkey meatballs"]);
}

#[test]
fn test_text_block_rewrites_every_line() {
    let recipe = Recipe::new(
        "Block",
        vec![],
        Instructions::from("Fry the bacon.\nBacon fat goes in, then the heavy\ncream."),
    );
    let result = process_recipe(&recipe, &TransformOptions::default()).unwrap();
    // "heavy\ncream" is split by the line break and is not a match
    assert_eq!(
        result.instructions,
        Instructions::from(
            "Fry the turkey bacon.\nTurkey bacon fat goes in, then the heavy\ncream.\n\nNotes:\n"
        )
    );
}

#[test]
fn test_empty_recipe() {
    let result = process_recipe(&Recipe::default(), &TransformOptions::default()).unwrap();
    assert_eq!(result.title, "Untitled");
    assert!(result.ingredients.is_empty());
    assert_eq!(result.instructions, Instructions::from("\n\nNotes:\n"));
}

#[test]
fn test_empty_step_list_gets_notes_entry() {
    let recipe = Recipe::new("Steps", vec![], Instructions::Steps(vec![]));
    let options = TransformOptions {
        sweetness: 0,
        ..Default::default()
    };
    let result = process_recipe(&recipe, &options).unwrap();
    assert_eq!(
        result.instructions,
        Instructions::Steps(vec![
            "\nNotes:\nLow sweetness: reduce sweeteners and use more citrus for brightness."
                .to_string()
        ])
    );
}

#[test]
fn test_malformed_json_is_rejected_at_the_boundary() {
    let result = Recipe::from_json(r#"{"title": "Bad", "ingredients": [{"name": "butter"}]}"#);
    match result {
        Err(TransformError::InvalidRecipe(message)) => assert!(!message.is_empty()),
        other => panic!("Expected InvalidRecipe, got {:?}", other),
    }

    let result = Recipe::from_json(r#"{"instructions": 42}"#);
    assert!(matches!(result, Err(TransformError::InvalidRecipe(_))));
}

#[test]
fn test_null_fields_fall_back_to_defaults() {
    let recipe = Recipe::from_json(r#"{"title": null, "ingredients": ["butter"]}"#).unwrap();
    let result = process_recipe(&recipe, &TransformOptions::default()).unwrap();
    assert_eq!(result.title, "Untitled");
    assert_eq!(result.ingredients, vec!["olive oil"]);
    assert_eq!(result.instructions, Instructions::from("\n\nNotes:\n"));

    let recipe = Recipe::from_json(r#"{"title": "Plain", "ingredients": null}"#).unwrap();
    assert!(recipe.ingredients.is_empty());

    let recipe = Recipe::from_json(r#"{"title": "Plain", "instructions": null}"#).unwrap();
    assert_eq!(recipe.instructions, Instructions::default());

    // A wrong shape is still an error
    let result = Recipe::from_json(r#"{"ingredients": [null]}"#);
    assert!(matches!(result, Err(TransformError::InvalidRecipe(_))));
}

#[test]
fn test_random_strategy_picks_listed_alternatives() {
    let options = TransformOptions {
        replacement_strategy: ReplacementStrategy::Random,
        ..Default::default()
    };
    let recipe = single_line("1 cup white rice");
    let allowed = ["1 cup brown rice", "1 cup quinoa", "1 cup cauliflower rice", "1 cup barley"];

    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..20 {
        let result = process_recipe_with_rng(&recipe, &options, &mut rng).unwrap();
        assert!(
            allowed.contains(&result.ingredients[0].as_str()),
            "unexpected {}",
            result.ingredients[0]
        );
    }

    // Unseeded runs still only produce listed alternatives
    let result = process_recipe(&recipe, &options).unwrap();
    assert!(allowed.contains(&result.ingredients[0].as_str()));
}

#[test]
fn test_same_seed_gives_same_output() {
    let options = TransformOptions {
        replacement_strategy: ReplacementStrategy::Random,
        ..Default::default()
    };
    let recipe = Recipe::new(
        "Party",
        vec![
            "1 bag potato chips".to_string(),
            "2 cans soda".to_string(),
            "1 tub ice cream".to_string(),
        ],
        Instructions::default(),
    );

    let first = process_recipe_with_rng(&recipe, &options, &mut StdRng::seed_from_u64(99)).unwrap();
    let second = process_recipe_with_rng(&recipe, &options, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(first, second);
}
