use serde::{Deserialize, Serialize};

/// Atwater energy factors, kcal per gram.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Energy implied by a set of macronutrient grams.
pub fn macro_calories(protein: f64, carbs: f64, fat: f64) -> f64 {
    protein * KCAL_PER_G_PROTEIN + carbs * KCAL_PER_G_CARBS + fat * KCAL_PER_G_FAT
}

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Absolute nutrient amounts (not per 100g). Sodium is in milligrams, the
/// rest in grams except calories.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct NutrientValues {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl NutrientValues {
    pub fn add(&self, other: &NutrientValues) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
            sodium: self.sodium + other.sodium,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber * factor,
            sugar: self.sugar * factor,
            sodium: self.sodium * factor,
        }
    }

    /// Calories recomputed from this record's own macros.
    pub fn derived_calories(&self) -> f64 {
        macro_calories(self.protein, self.carbs, self.fat)
    }

    /// Scales protein, carbs and fat down together until the calories they
    /// imply fit under `cap`. Other fields are left as they are.
    pub fn limit_energy(&self, cap: f64) -> Self {
        let calories = self.derived_calories();
        if calories <= cap || calories <= 0.0 {
            return *self;
        }
        let factor = cap / calories;
        Self {
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            ..*self
        }
    }
}

/// One matched ingredient's contribution to a recipe.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IngredientNutrition {
    /// The ingredient line exactly as supplied.
    pub ingredient: String,
    /// Converted mass in grams.
    pub amount: f64,
    pub unit: String,
    pub matched_key: String,
    pub nutrition: NutrientValues,
}

/// Per-serving result of a whole recipe.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeNutrition {
    pub nutrition: NutrientValues,
    pub matched_ingredients: Vec<IngredientNutrition>,
    pub unmatched_ingredients: Vec<String>,
}

impl RecipeNutrition {
    pub fn summary(&self) -> MacroSummary {
        MacroSummary {
            calories: self.nutrition.calories,
            protein: self.nutrition.protein,
            carbs: self.nutrition.carbs,
            fat: self.nutrition.fat,
        }
    }

    pub fn ingredient_count(&self) -> usize {
        self.matched_ingredients.len() + self.unmatched_ingredients.len()
    }
}

/// The reduced `{calories, protein, carbs, fat}` shape used by lightweight
/// callers and produced by the LLM estimator.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct MacroSummary {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Request body accepted by callers that expose the engine over a wire.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NutritionRequest {
    pub ingredients: Vec<String>,
    #[serde(default = "default_servings")]
    pub servings: f64,
}

fn default_servings() -> f64 {
    1.0
}
