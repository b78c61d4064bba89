//! Tunable policy for the estimation engine plus process-level settings.
//!
//! The caps below have no physical derivation; they bound the output of a
//! best-effort estimator and are meant to be reviewed and overridden, which is
//! why they live here instead of inside the algorithms.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::nutrition::NutrientValues;

pub const DATABASE_PATH_ENV_VAR: &str = "NUTRITION_DB_PATH";
pub const POLICY_PATH_ENV_VAR: &str = "NUTRITION_POLICY_FILE";
pub const OLLAMA_URL_ENV_VAR: &str = "OLLAMA_BASE_URL";
pub const OLLAMA_MODEL_ENV_VAR: &str = "OLLAMA_MODEL";
pub const OLLAMA_TIMEOUT_ENV_VAR: &str = "OLLAMA_TIMEOUT_SECS";

const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";
const DEFAULT_OLLAMA_TIMEOUT_SECS: u64 = 30;

/// Upper bounds, in grams, for each conversion path of the unit converter.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ConversionCaps {
    pub cup: f64,
    pub tbsp: f64,
    pub tsp: f64,
    pub oz: f64,
    pub lb: f64,
    pub kg: f64,
    pub g: f64,
    pub ml: f64,
    pub liter: f64,
    /// Slices, pieces and cloves.
    pub count: f64,
    /// Amounts with no recognised unit, taken as grams.
    pub unitless: f64,
}

impl Default for ConversionCaps {
    fn default() -> Self {
        Self {
            cup: 2000.0,
            tbsp: 200.0,
            tsp: 100.0,
            oz: 1000.0,
            lb: 2000.0,
            kg: 5000.0,
            g: 5000.0,
            ml: 2000.0,
            liter: 5000.0,
            count: 1000.0,
            unitless: 1000.0,
        }
    }
}

/// Upper bounds on nutrient amounts. Sodium is in milligrams.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NutrientCaps {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl NutrientCaps {
    pub fn per_ingredient() -> Self {
        Self {
            calories: 1000.0,
            protein: 100.0,
            carbs: 250.0,
            fat: 100.0,
            fiber: 100.0,
            sugar: 200.0,
            sodium: 10000.0,
        }
    }

    pub fn per_serving() -> Self {
        Self {
            calories: 1500.0,
            protein: 80.0,
            carbs: 150.0,
            fat: 80.0,
            fiber: 50.0,
            sugar: 100.0,
            sodium: 5000.0,
        }
    }

    /// Clamps every field except calories, which callers derive afterwards.
    pub fn clamp_components(&self, values: &NutrientValues) -> NutrientValues {
        NutrientValues {
            calories: values.calories,
            protein: values.protein.min(self.protein),
            carbs: values.carbs.min(self.carbs),
            fat: values.fat.min(self.fat),
            fiber: values.fiber.min(self.fiber),
            sugar: values.sugar.min(self.sugar),
            sodium: values.sodium.min(self.sodium),
        }
    }

    fn validate(&self, label: &'static str) -> Result<(), ConfigError> {
        let fields = [
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.fiber,
            self.sugar,
            self.sodium,
        ];
        if fields.iter().all(|v| v.is_finite() && *v > 0.0) {
            Ok(())
        } else {
            Err(ConfigError::InvalidCap(label))
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NutritionPolicy {
    pub conversion_caps: ConversionCaps,
    pub ingredient_caps: NutrientCaps,
    pub serving_caps: NutrientCaps,
    /// Largest grams/100 multiplier a single ingredient may contribute.
    pub max_multiplier: f64,
}

impl Default for NutritionPolicy {
    fn default() -> Self {
        Self {
            conversion_caps: ConversionCaps::default(),
            ingredient_caps: NutrientCaps::per_ingredient(),
            serving_caps: NutrientCaps::per_serving(),
            max_multiplier: 20.0,
        }
    }
}

impl NutritionPolicy {
    /// Reads a JSON policy. Missing top-level sections keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let policy: NutritionPolicy = serde_json::from_str(&raw)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.conversion_caps;
        let conversion = [
            c.cup, c.tbsp, c.tsp, c.oz, c.lb, c.kg, c.g, c.ml, c.liter, c.count, c.unitless,
        ];
        if !conversion.iter().all(|v| v.is_finite() && *v > 0.0) {
            return Err(ConfigError::InvalidCap("conversion_caps"));
        }
        self.ingredient_caps.validate("ingredient_caps")?;
        self.serving_caps.validate("serving_caps")?;
        if !(self.max_multiplier.is_finite() && self.max_multiplier > 0.0) {
            return Err(ConfigError::InvalidCap("max_multiplier"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OllamaSettings {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_OLLAMA_TIMEOUT_SECS),
        }
    }
}

/// Settings gathered from the environment (and `.env`, when present).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub database_path: Option<PathBuf>,
    pub policy_path: Option<PathBuf>,
    pub ollama: OllamaSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source so tests need not
    /// touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut ollama = OllamaSettings::default();
        if let Some(url) = non_empty(OLLAMA_URL_ENV_VAR) {
            ollama.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(model) = non_empty(OLLAMA_MODEL_ENV_VAR) {
            ollama.model = model;
        }
        if let Some(raw) = non_empty(OLLAMA_TIMEOUT_ENV_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidEnv {
                    name: OLLAMA_TIMEOUT_ENV_VAR,
                    value: raw.clone(),
                })?;
            ollama.timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            database_path: non_empty(DATABASE_PATH_ENV_VAR).map(PathBuf::from),
            policy_path: non_empty(POLICY_PATH_ENV_VAR).map(PathBuf::from),
            ollama,
        })
    }
}
