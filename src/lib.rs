pub mod api_connection;
pub mod cli;
pub mod config;
pub mod default_quantity;
pub mod density;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod ingredient_nutrition;
pub mod ingredient_parser;
pub mod nutrient_db;
pub mod nutrition;
pub mod nutritional_matcher;
pub mod recipe_aggregator;
pub mod unit_converter;

pub use engine::NutritionEngine;
pub use nutrition::{MacroSummary, NutrientValues, RecipeNutrition};
