use serde::{Deserialize, Serialize};

pub const GENERATE_PATH: &str = "/api/generate";

/// Body of an Ollama `/api/generate` call.
#[derive(Debug, Serialize, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    /// `"json"` asks the model to answer with a single JSON value.
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

#[derive(Debug, Serialize, Clone)]
pub struct GenerateOptions {
    pub temperature: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerateResponse {
    #[serde(default)]
    pub model: Option<String>,
    /// Model output; with `format: "json"` this is itself a JSON document.
    pub response: String,
    #[serde(default)]
    pub done: bool,
}

/// What the model is asked to return, per serving.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct MacroPayload {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

pub fn build_prompt<S: AsRef<str>>(ingredient_lines: &[S], servings: f64) -> String {
    let mut prompt = String::from(
        "Estimate the nutrition of one serving of the recipe below.\n\
         Respond only with a JSON object with numeric fields \
         \"calories\" (kcal), \"protein\", \"carbs\" and \"fat\" (grams).\n\n",
    );
    prompt.push_str(&format!("Servings: {}\nIngredients:\n", servings));
    for line in ingredient_lines {
        prompt.push_str("- ");
        prompt.push_str(line.as_ref().trim());
        prompt.push('\n');
    }
    prompt
}
