use serde::Serialize;
use tracing::{info, warn};

use crate::api_connection::OllamaClient;
use crate::engine::NutritionEngine;
use crate::nutrition::{MacroSummary, RecipeNutrition};
use crate::recipe_aggregator::{normalize_servings, reconcile_summary};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EstimateSource {
    Llm,
    Engine,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEstimate {
    pub source: EstimateSource,
    pub nutrition: MacroSummary,
    /// Full per-ingredient breakdown; only the engine produces one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<RecipeNutrition>,
}

impl NutritionEstimate {
    fn from_engine(detail: RecipeNutrition) -> Self {
        Self {
            source: EstimateSource::Engine,
            nutrition: detail.summary(),
            detail: Some(detail),
        }
    }
}

/// Tries the LLM first when a client is given, and falls back to the engine
/// on any failure. Never fails.
///
/// LLM figures go through the engine's per-serving caps and get their
/// calories recomputed from the macros.
pub async fn estimate_with_fallback<S: AsRef<str>>(
    engine: &NutritionEngine,
    llm: Option<&OllamaClient>,
    ingredient_lines: &[S],
    servings: f64,
) -> NutritionEstimate {
    let servings = normalize_servings(servings);

    let Some(client) = llm else {
        return NutritionEstimate::from_engine(engine.aggregate(ingredient_lines, servings));
    };

    match client.estimate(ingredient_lines, servings).await {
        Ok(summary) => {
            let nutrition = reconcile_summary(&summary, &engine.policy().serving_caps);
            info!(
                model = client.model(),
                calories = nutrition.calories,
                "Using LLM nutrition estimate"
            );
            NutritionEstimate {
                source: EstimateSource::Llm,
                nutrition,
                detail: None,
            }
        }
        Err(e) => {
            warn!(error = %e, "LLM estimate failed, falling back to engine");
            NutritionEstimate::from_engine(engine.aggregate(ingredient_lines, servings))
        }
    }
}
