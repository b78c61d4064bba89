use tracing::info;

use crate::config::{NutrientCaps, NutritionPolicy};
use crate::ingredient_nutrition::calculate_ingredient;
use crate::nutrient_db::NutrientDatabase;
use crate::nutrition::{round1, MacroSummary, NutrientValues, RecipeNutrition};

/// Servings below 1 (including 0, negatives and NaN) count as one serving.
pub fn normalize_servings(servings: f64) -> f64 {
    if servings.is_finite() && servings >= 1.0 {
        servings
    } else {
        1.0
    }
}

/// Rounds gram fields to one decimal and rebuilds calories from the rounded
/// macros, so the published calories can be recomputed from the published
/// grams.
fn publish(values: &NutrientValues, calorie_cap: f64) -> NutrientValues {
    let mut rounded = NutrientValues {
        calories: 0.0,
        protein: round1(values.protein),
        carbs: round1(values.carbs),
        fat: round1(values.fat),
        fiber: round1(values.fiber),
        sugar: round1(values.sugar),
        sodium: round1(values.sodium),
    };
    rounded.calories = rounded.derived_calories().round().min(calorie_cap.floor());
    rounded
}

/// Turns whole-recipe totals into capped, rounded per-serving values.
///
/// Calories are derived from the per-serving macros. When they exceed the
/// calorie cap, protein, carbs and fat are scaled down together so the
/// published calories still agree with the published grams.
pub fn per_serving(totals: &NutrientValues, servings: f64, caps: &NutrientCaps) -> NutrientValues {
    let servings = normalize_servings(servings);
    let values = caps
        .clamp_components(&totals.scale(1.0 / servings))
        .limit_energy(caps.calories);

    publish(&values, caps.calories)
}

/// Applies the per-serving caps and calorie reconciliation to a summary that
/// came from somewhere other than the engine.
pub fn reconcile_summary(summary: &MacroSummary, caps: &NutrientCaps) -> MacroSummary {
    let values = NutrientValues {
        protein: summary.protein.max(0.0),
        carbs: summary.carbs.max(0.0),
        fat: summary.fat.max(0.0),
        ..Default::default()
    };
    let published = per_serving(&values, 1.0, caps);
    MacroSummary {
        calories: published.calories,
        protein: published.protein,
        carbs: published.carbs,
        fat: published.fat,
    }
}

/// Per-serving nutrition for a list of ingredient lines.
///
/// Never fails: lines that cannot be matched are listed in
/// `unmatched_ingredients`, and a recipe where nothing matches comes back with
/// every nutrient at zero.
pub fn aggregate<S: AsRef<str>>(
    database: &NutrientDatabase,
    policy: &NutritionPolicy,
    ingredient_lines: &[S],
    servings: f64,
) -> RecipeNutrition {
    let servings = normalize_servings(servings);

    let mut matched_ingredients = Vec::new();
    let mut unmatched_ingredients = Vec::new();
    for line in ingredient_lines {
        let line = line.as_ref();
        match calculate_ingredient(database, policy, line) {
            Some(ingredient) => matched_ingredients.push(ingredient),
            None => unmatched_ingredients.push(line.to_string()),
        }
    }

    if matched_ingredients.is_empty() {
        info!(
            unmatched = unmatched_ingredients.len(),
            "No ingredients matched the nutrient database"
        );
        return RecipeNutrition {
            nutrition: NutrientValues::default(),
            matched_ingredients,
            unmatched_ingredients,
        };
    }

    let totals = matched_ingredients
        .iter()
        .fold(NutrientValues::default(), |acc, ingredient| {
            acc.add(&ingredient.nutrition)
        });
    let nutrition = per_serving(&totals, servings, &policy.serving_caps);

    info!(
        matched = matched_ingredients.len(),
        unmatched = unmatched_ingredients.len(),
        servings,
        calories = nutrition.calories,
        "Recipe nutrition calculated"
    );

    RecipeNutrition {
        nutrition,
        matched_ingredients,
        unmatched_ingredients,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::macro_calories;

    fn run(lines: &[&str], servings: f64) -> RecipeNutrition {
        aggregate(
            &NutrientDatabase::builtin(),
            &NutritionPolicy::default(),
            lines,
            servings,
        )
    }

    fn assert_consistent(n: &NutrientValues) {
        let derived = macro_calories(n.protein, n.carbs, n.fat).round();
        assert!(
            (n.calories - derived).abs() <= 1.0,
            "calories {} vs derived {}",
            n.calories,
            derived
        );
    }

    #[test]
    fn test_normalize_servings() {
        assert_eq!(normalize_servings(4.0), 4.0);
        assert_eq!(normalize_servings(0.0), 1.0);
        assert_eq!(normalize_servings(-3.0), 1.0);
        assert_eq!(normalize_servings(f64::NAN), 1.0);
        assert_eq!(normalize_servings(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_per_serving_divides_and_rounds() {
        let totals = NutrientValues {
            calories: 12345.0, // ignored
            protein: 40.0,
            carbs: 100.0,
            fat: 20.0,
            fiber: 8.0,
            sugar: 10.0,
            sodium: 1000.0,
        };
        let n = per_serving(&totals, 4.0, &NutrientCaps::per_serving());
        assert_eq!(n.protein, 10.0);
        assert_eq!(n.carbs, 25.0);
        assert_eq!(n.fat, 5.0);
        assert_eq!(n.fiber, 2.0);
        assert_eq!(n.sodium, 250.0);
        assert_eq!(n.calories, 185.0);
    }

    #[test]
    fn test_calorie_cap_scales_macros() {
        let totals = NutrientValues {
            protein: 80.0,
            carbs: 150.0,
            fat: 80.0,
            ..Default::default()
        };
        // Derived calories would be 320 + 600 + 720 = 1640.
        let n = per_serving(&totals, 1.0, &NutrientCaps::per_serving());
        assert!(n.calories <= 1500.0);
        assert!(n.calories >= 1499.0);
        assert!(n.protein < 80.0 && n.carbs < 150.0 && n.fat < 80.0);
        assert_consistent(&n);
    }

    #[test]
    fn test_zero_servings_treated_as_one() {
        let one = run(&["1 cup rice"], 1.0);
        let zero = run(&["1 cup rice"], 0.0);
        let negative = run(&["1 cup rice"], -2.0);
        assert_eq!(one, zero);
        assert_eq!(one, negative);
    }

    #[test]
    fn test_no_matches_is_all_zero() {
        let result = run(&["xyzzy unknown substance"], 2.0);
        assert!(result.matched_ingredients.is_empty());
        assert_eq!(result.unmatched_ingredients, vec!["xyzzy unknown substance"]);
        assert_eq!(result.nutrition, NutrientValues::default());
    }

    #[test]
    fn test_empty_recipe() {
        let result = run(&[], 3.0);
        assert_eq!(result.ingredient_count(), 0);
        assert_eq!(result.nutrition, NutrientValues::default());
    }

    #[test]
    fn test_partition_keeps_original_text() {
        let lines = ["2 cups Flour", "a dash of mystery", "3 cloves garlic"];
        let result = run(&lines, 1.0);
        assert_eq!(result.ingredient_count(), lines.len());
        assert_eq!(result.matched_ingredients[0].ingredient, "2 cups Flour");
        assert_eq!(result.unmatched_ingredients, vec!["a dash of mystery"]);
    }

    #[test]
    fn test_reconcile_summary() {
        let summary = MacroSummary {
            calories: 5.0,
            protein: 20.0,
            carbs: 30.0,
            fat: -4.0,
        };
        let reconciled = reconcile_summary(&summary, &NutrientCaps::per_serving());
        assert_eq!(reconciled.fat, 0.0);
        assert_eq!(reconciled.calories, 200.0);
    }
}
