//! Simple API usage
//!
//! This example transforms a classic Alfredo recipe with the Italian cuisine
//! palette and the spicy flavor profile, first with the plain function and
//! then through the builder.

use recipe_transform::{
    available_cuisines, process_recipe, Instructions, Recipe, RecipeTransformer,
    TransformOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let recipe = Recipe::new(
        "Classic Fettuccine Alfredo",
        vec![
            "200g fettuccine pasta (white)".to_string(),
            "1/2 cup butter".to_string(),
            "1 cup heavy cream".to_string(),
            "1 cup grated parmesan cheese".to_string(),
            "1 tsp salt".to_string(),
        ],
        Instructions::Steps(vec![
            "Cook pasta in salted boiling water until al dente. Drain.".to_string(),
            "In a pan, melt butter. Pour in heavy cream and simmer.".to_string(),
        ]),
    );

    println!("=== Available cuisines ===");
    println!("{}", available_cuisines().join(", "));

    println!("\n=== Health replacements only ===");
    let healthier = process_recipe(&recipe, &TransformOptions::default())?;
    println!("{}", healthier.to_json_pretty()?);

    println!("\n=== Italian + spicy via builder ===");
    let transformer = RecipeTransformer::builder()
        .cuisine("Italian")
        .flavor_profile("spicy")
        .spice_level(7)
        .sweetness(3)
        .build()?;
    let transformed = transformer.transform(&recipe)?;
    println!("{}", transformed.to_json_pretty()?);

    Ok(())
}
