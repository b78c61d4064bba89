use reqwest::Client;
use tracing::{debug, warn};

use super::endpoints::{
    build_prompt, GenerateOptions, GenerateRequest, GenerateResponse, MacroPayload, GENERATE_PATH,
};
use crate::config::OllamaSettings;
use crate::error::LlmError;
use crate::nutrition::MacroSummary;

/// Client for a local Ollama server used as the optional first-choice
/// estimator.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(settings: &OllamaSettings) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Asks the model for per-serving calories and macros.
    ///
    /// The returned summary is exactly what the model said; callers are
    /// expected to run it through the serving caps.
    pub async fn estimate<S: AsRef<str>>(
        &self,
        ingredient_lines: &[S],
        servings: f64,
    ) -> Result<MacroSummary, LlmError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: build_prompt(ingredient_lines, servings),
            stream: false,
            format: "json".to_string(),
            options: Some(GenerateOptions { temperature: 0.0 }),
        };

        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        debug!(%url, model = %self.model, lines = ingredient_lines.len(), "Requesting LLM estimate");

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            warn!(%status, "LLM request failed");
            return Err(LlmError::Api { status, body });
        }

        let generated = response.json::<GenerateResponse>().await?;
        parse_estimate(&generated.response)
    }
}

/// Removes a surrounding Markdown code fence, with or without a language tag.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn require(value: Option<f64>, field: &str) -> Result<f64, LlmError> {
    let value = value.ok_or_else(|| LlmError::Malformed(format!("missing field '{field}'")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(LlmError::Implausible(format!("{field} = {value}")));
    }
    Ok(value)
}

/// Parses the model's `response` text into a summary, rejecting missing,
/// negative or non-finite values.
pub fn parse_estimate(raw: &str) -> Result<MacroSummary, LlmError> {
    let payload: MacroPayload = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| LlmError::Malformed(e.to_string()))?;

    Ok(MacroSummary {
        calories: require(payload.calories, "calories")?,
        protein: require(payload.protein, "protein")?,
        carbs: require(payload.carbs, "carbs")?,
        fat: require(payload.fat, "fat")?,
    })
}
