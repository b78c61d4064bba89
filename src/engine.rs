use std::sync::Arc;

use crate::config::NutritionPolicy;
use crate::ingredient_nutrition::calculate_ingredient;
use crate::nutrient_db::NutrientDatabase;
use crate::nutrition::{IngredientNutrition, RecipeNutrition};
use crate::recipe_aggregator::aggregate;

/// Read-only nutrition calculator over an injected database and policy.
///
/// Cloning is cheap and the engine holds no mutable state, so one instance
/// can be shared across threads or tasks.
#[derive(Debug, Clone)]
pub struct NutritionEngine {
    database: Arc<NutrientDatabase>,
    policy: NutritionPolicy,
}

impl NutritionEngine {
    pub fn new(database: Arc<NutrientDatabase>) -> Self {
        Self::with_policy(database, NutritionPolicy::default())
    }

    pub fn with_policy(database: Arc<NutrientDatabase>, policy: NutritionPolicy) -> Self {
        Self { database, policy }
    }

    /// Engine over the bundled food table with the default policy.
    pub fn builtin() -> Self {
        Self::new(Arc::new(NutrientDatabase::builtin()))
    }

    pub fn database(&self) -> &NutrientDatabase {
        &self.database
    }

    pub fn policy(&self) -> &NutritionPolicy {
        &self.policy
    }

    pub fn calculate(&self, line: &str) -> Option<IngredientNutrition> {
        calculate_ingredient(&self.database, &self.policy, line)
    }

    pub fn aggregate<S: AsRef<str>>(&self, ingredient_lines: &[S], servings: f64) -> RecipeNutrition {
        aggregate(&self.database, &self.policy, ingredient_lines, servings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NutritionEngine>();
    }

    #[test]
    fn test_engine_uses_injected_database() {
        let db = NutrientDatabase::from_entries([(
            "moon cheese",
            crate::nutrient_db::NutrientProfile {
                calories: 100.0,
                protein: 25.0,
                ..Default::default()
            },
        )]);
        let engine = NutritionEngine::new(Arc::new(db));
        let result = engine.aggregate(&["200 g moon cheese", "flour"], 1.0);
        assert_eq!(result.matched_ingredients.len(), 1);
        assert_eq!(result.unmatched_ingredients, vec!["flour"]);
        assert_eq!(result.nutrition.protein, 50.0);
        assert_eq!(result.nutrition.calories, 200.0);
    }

    #[test]
    fn test_custom_policy_caps_apply() {
        let mut policy = NutritionPolicy::default();
        policy.serving_caps.protein = 10.0;
        let engine = NutritionEngine::with_policy(Arc::new(NutrientDatabase::builtin()), policy);
        let result = engine.aggregate(&["1 lb chicken breast"], 1.0);
        assert_eq!(result.nutrition.protein, 10.0);
        assert_eq!(engine.policy().serving_caps.protein, 10.0);
    }
}
