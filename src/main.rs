use anyhow::{bail, Context, Result};
use recipe_nutrition::api_connection::OllamaClient;
use recipe_nutrition::cli::{parse_args, recipe_lines, Cli};
use recipe_nutrition::config::{AppConfig, NutritionPolicy};
use recipe_nutrition::engine::NutritionEngine;
use recipe_nutrition::estimator::{estimate_with_fallback, EstimateSource, NutritionEstimate};
use recipe_nutrition::nutrient_db::NutrientDatabase;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn collect_lines(cli: &Cli) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    if let Some(path) = &cli.recipe_file {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read recipe file '{}'", path.display()))?;
        lines.extend(recipe_lines(&content));
    }
    lines.extend(
        cli.ingredients
            .iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty()),
    );
    Ok(lines)
}

fn build_engine(cli: &Cli, config: &AppConfig) -> Result<NutritionEngine> {
    let database = match cli.database.as_ref().or(config.database_path.as_ref()) {
        Some(path) => NutrientDatabase::load_csv(path)
            .with_context(|| format!("Failed to load nutrient table '{}'", path.display()))?,
        None => NutrientDatabase::builtin(),
    };
    debug!(foods = database.len(), "Nutrient database ready");

    let policy = match cli.policy.as_ref().or(config.policy_path.as_ref()) {
        Some(path) => NutritionPolicy::from_json_file(path)
            .with_context(|| format!("Failed to load policy file '{}'", path.display()))?,
        None => NutritionPolicy::default(),
    };

    Ok(NutritionEngine::with_policy(Arc::new(database), policy))
}

fn print_table(estimate: &NutritionEstimate) {
    let source = match estimate.source {
        EstimateSource::Llm => "LLM",
        EstimateSource::Engine => "engine",
    };
    println!("Nutrition per serving ({source})");
    println!("  Calories: {:>8.0} kcal", estimate.nutrition.calories);
    println!("  Protein:  {:>8.1} g", estimate.nutrition.protein);
    println!("  Carbs:    {:>8.1} g", estimate.nutrition.carbs);
    println!("  Fat:      {:>8.1} g", estimate.nutrition.fat);

    let Some(detail) = &estimate.detail else {
        return;
    };
    println!("  Fiber:    {:>8.1} g", detail.nutrition.fiber);
    println!("  Sugar:    {:>8.1} g", detail.nutrition.sugar);
    println!("  Sodium:   {:>8.1} mg", detail.nutrition.sodium);

    if !detail.matched_ingredients.is_empty() {
        println!("\nMatched ingredients (whole recipe):");
        println!(
            "  {:<32} {:<20} {:>8} {:>8} {:>8} {:>8} {:>8}",
            "Ingredient", "Matched", "Grams", "kcal", "Prot", "Carbs", "Fat"
        );
        for item in &detail.matched_ingredients {
            println!(
                "  {:<32} {:<20} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>8.1}",
                item.ingredient,
                item.matched_key,
                item.amount,
                item.nutrition.calories,
                item.nutrition.protein,
                item.nutrition.carbs,
                item.nutrition.fat
            );
        }
    }
    if !detail.unmatched_ingredients.is_empty() {
        println!("\nUnmatched ingredients:");
        for line in &detail.unmatched_ingredients {
            println!("  {line}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args();
    init_logging(cli.verbose);

    let config = AppConfig::from_env().context("Invalid environment configuration")?;
    let lines = collect_lines(&cli).await?;
    if lines.is_empty() {
        bail!("No ingredients given; use --recipe-file or --ingredient");
    }

    let engine = build_engine(&cli, &config)?;
    let client = if cli.use_llm {
        Some(OllamaClient::new(&config.ollama).context("Failed to build LLM client")?)
    } else {
        None
    };

    info!(ingredients = lines.len(), servings = cli.servings, "Estimating nutrition");
    let estimate = estimate_with_fallback(&engine, client.as_ref(), &lines, cli.servings).await;

    if cli.json {
        let output = match &estimate.detail {
            Some(detail) => serde_json::to_string_pretty(detail)?,
            None => serde_json::to_string_pretty(&estimate)?,
        };
        println!("{output}");
    } else {
        print_table(&estimate);
    }

    Ok(())
}
