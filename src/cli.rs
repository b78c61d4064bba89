use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Estimate per-serving nutrition from recipe ingredient lines", long_about = None)]
pub struct Cli {
    /// Path to a recipe file with one ingredient per line
    #[arg(short, long)]
    pub recipe_file: Option<PathBuf>,

    /// Ingredient line, may be repeated
    #[arg(short, long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Number of servings the recipe makes
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub servings: f64,

    /// Nutrient table CSV to use instead of the built-in one
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// JSON file overriding the default caps
    #[arg(short, long)]
    pub policy: Option<PathBuf>,

    /// Ask the configured Ollama model first, falling back to the engine
    #[arg(long)]
    pub use_llm: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Ingredient lines from a recipe file: one per line, ignoring blank lines
/// and `#` comments.
pub fn recipe_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_lines_skip_blanks_and_comments() {
        let content = "# Pancakes\n2 cups flour\n\n  1 cup milk  \n# eggs below\n2 eggs\n";
        assert_eq!(recipe_lines(content), vec!["2 cups flour", "1 cup milk", "2 eggs"]);
    }

    #[test]
    fn test_cli_parses_repeated_ingredients() {
        let cli = Cli::try_parse_from([
            "recipe-nutrition",
            "-i",
            "2 cups flour",
            "--ingredient",
            "salt",
            "--servings",
            "4",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.ingredients, vec!["2 cups flour", "salt"]);
        assert_eq!(cli.servings, 4.0);
        assert!(cli.json);
        assert!(!cli.use_llm);
        assert!(cli.recipe_file.is_none());
    }
}
