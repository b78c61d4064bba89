use tracing::debug;

use crate::config::NutritionPolicy;
use crate::default_quantity::infer_default;
use crate::ingredient_parser::{has_keyword, parse};
use crate::nutrient_db::{NutrientDatabase, NutrientProfile};
use crate::nutrition::{round1, IngredientNutrition, NutrientValues};
use crate::nutritional_matcher::find_match;
use crate::unit_converter::to_grams;

/// Per-100g ceilings for foods whose lab values overstate what a recipe
/// portion actually delivers.
#[derive(Debug, Clone, Copy)]
pub struct OutlierRule {
    pub keywords: &'static [&'static str],
    pub max_calories: f64,
    pub max_fat: f64,
}

pub const OUTLIER_RULES: &[OutlierRule] = &[
    OutlierRule {
        keywords: &["butter"],
        max_calories: 600.0,
        max_fat: 70.0,
    },
    OutlierRule {
        keywords: &["mayonnaise", "mayo"],
        max_calories: 500.0,
        max_fat: 55.0,
    },
    OutlierRule {
        keywords: &[
            "almond", "walnut", "pecan", "cashew", "peanut", "pistachio", "hazelnut",
            "macadamia", "nuts",
        ],
        max_calories: 600.0,
        max_fat: 60.0,
    },
];

// Relative gap between table calories and macro-derived calories above which
// the mismatch is worth a log line.
const CALORIE_DIVERGENCE_LOG_RATIO: f64 = 0.25;

/// Applies the first matching [`OUTLIER_RULES`] row to a base profile.
pub fn correct_outliers(key: &str, base: &NutrientProfile) -> NutrientProfile {
    match OUTLIER_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| has_keyword(key, kw)))
    {
        Some(rule) => NutrientProfile {
            calories: base.calories.min(rule.max_calories),
            fat: base.fat.min(rule.max_fat),
            ..*base
        },
        None => *base,
    }
}

fn scale_profile(base: &NutrientProfile, multiplier: f64) -> NutrientValues {
    NutrientValues {
        calories: 0.0,
        protein: base.protein * multiplier,
        carbs: base.carbs * multiplier,
        fat: base.fat * multiplier,
        fiber: base.fiber.unwrap_or(0.0) * multiplier,
        sugar: base.sugar.unwrap_or(0.0) * multiplier,
        sodium: base.sodium.unwrap_or(0.0) * multiplier,
    }
}

fn log_calorie_divergence(key: &str, base: &NutrientProfile) {
    let derived = NutrientValues {
        protein: base.protein,
        carbs: base.carbs,
        fat: base.fat,
        ..Default::default()
    }
    .derived_calories();
    if base.calories > 0.0
        && ((derived - base.calories).abs() / base.calories) > CALORIE_DIVERGENCE_LOG_RATIO
    {
        debug!(
            key,
            table_calories = base.calories,
            derived_calories = derived,
            "Macro-derived calories diverge from table value"
        );
    }
}

/// Nutrition contributed by one ingredient line, or `None` when the food
/// cannot be matched against `database`.
///
/// Calories are always recomputed from the scaled macros; the table's own
/// calorie figure is never used. When they would pass the ingredient calorie
/// cap, protein, carbs and fat are scaled down together, so each ingredient's
/// energy agrees with its macros and stays bounded once recipes are summed.
pub fn calculate_ingredient(
    database: &NutrientDatabase,
    policy: &NutritionPolicy,
    line: &str,
) -> Option<IngredientNutrition> {
    let parsed = parse(line);

    let (amount, unit) = match parsed.explicit_amount() {
        Some((quantity, unit)) => (quantity, Some(unit)),
        None => {
            let default = infer_default(&parsed.clean_name);
            debug!(
                line,
                amount = default.amount,
                unit = %default.unit,
                "No explicit amount, using default"
            );
            (default.amount, Some(default.unit))
        }
    };

    let grams = to_grams(amount, unit, &parsed.clean_name, &policy.conversion_caps);

    let Some(food) = find_match(database, &parsed.clean_name) else {
        debug!(line, clean_name = %parsed.clean_name, "Ingredient unmatched");
        return None;
    };
    let base = database.get(food.key)?;
    log_calorie_divergence(food.key, base);
    let base = correct_outliers(food.key, base);

    let multiplier = (grams / 100.0).min(policy.max_multiplier);
    let caps = &policy.ingredient_caps;
    let nutrition = caps
        .clamp_components(&scale_profile(&base, multiplier))
        .limit_energy(caps.calories);

    debug!(
        line,
        key = food.key,
        tier = ?food.tier,
        grams,
        calories = nutrition.derived_calories(),
        "Ingredient matched"
    );

    Some(IngredientNutrition {
        ingredient: line.to_string(),
        amount: round1(grams),
        unit: "g".to_string(),
        matched_key: food.key.to_string(),
        nutrition: publish(&nutrition, caps.calories),
    })
}

/// Rounds to one decimal and rebuilds calories from the rounded macros.
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
    rounded.calories = round1(rounded.derived_calories()).min(calorie_cap);
    rounded
}
