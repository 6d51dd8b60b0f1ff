use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::io;
use std::path::PathBuf;

use recipe_transform::{
    available_cuisines, available_flavor_profiles, load_config, process_recipe_with_rng,
    HealthLevel, Recipe, ReplacementStrategy, TransformOptions,
};

/// Rewrite a recipe with healthier substitutions and seasoning adjustments.
///
/// Reads a recipe as JSON (`{"title", "ingredients", "instructions"}`) from
/// INPUT or stdin and prints the transformed recipe as JSON. Defaults come
/// from `config.toml` and RECIPE_TRANSFORM__* environment variables; flags
/// override them.
#[derive(Parser, Debug)]
#[command(name = "recipe-transform", version, about)]
struct Cli {
    /// Recipe JSON file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Cuisine palette to apply; repeat to apply several in order
    #[arg(short, long = "cuisine")]
    cuisines: Vec<String>,

    /// Flavor profile to apply; repeat to apply several in order
    #[arg(short, long = "flavor")]
    flavors: Vec<String>,

    /// Spice preference, 0-10
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    spice: Option<u8>,

    /// Sweetness preference, 0-10
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    sweetness: Option<u8>,

    /// Richness preference, 0-10
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    richness: Option<u8>,

    /// Prefer plant-based alternatives; `--plant-based=false` turns a
    /// configured preference off
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    plant_based: Option<bool>,

    /// Alternative selection: best or random
    #[arg(long)]
    strategy: Option<ReplacementStrategy>,

    /// Health level: default, low_fat, low_sugar, high_protein or vegan
    #[arg(long)]
    health_level: Option<HealthLevel>,

    /// Seed for the random strategy, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// List available cuisines and flavor profiles, then exit
    #[arg(long)]
    list: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn apply_to(&self, options: &mut TransformOptions) {
        if !self.cuisines.is_empty() {
            options.cuisines = self.cuisines.clone();
        }
        if !self.flavors.is_empty() {
            options.flavor_profiles = self.flavors.clone();
        }
        if let Some(spice) = self.spice {
            options.spice_level = spice;
        }
        if let Some(sweetness) = self.sweetness {
            options.sweetness = sweetness;
        }
        if let Some(richness) = self.richness {
            options.richness = richness;
        }
        if let Some(plant_based) = self.plant_based {
            options.prefer_plant_based = plant_based;
        }
        if let Some(strategy) = self.strategy {
            options.replacement_strategy = strategy;
        }
        if let Some(level) = self.health_level {
            options.health_level = level;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level when set
    let mut logger_builder = env_logger::Builder::new();
    logger_builder.filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn));
    logger_builder.parse_default_env();
    logger_builder.init();

    if cli.list {
        println!("Cuisines:");
        for name in available_cuisines() {
            println!("  {}", name);
        }
        println!("Flavor profiles:");
        for name in available_flavor_profiles() {
            println!("  {}", name);
        }
        return Ok(());
    }

    let config = load_config()?;
    let mut options = config.defaults;
    cli.apply_to(&mut options);
    options.validate()?;
    debug!("{:#?}", options);

    let json = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };
    let recipe = Recipe::from_json(&json)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let transformed = process_recipe_with_rng(&recipe, &options, &mut rng)?;
    info!("Transformed recipe '{}'", transformed.title);

    let output = if cli.compact {
        serde_json::to_string(&transformed)?
    } else {
        transformed.to_json_pretty()?
    };
    println!("{}", output);

    Ok(())
}
