pub mod builtin;
pub mod data_loader;

pub use data_loader::load_nutrient_table;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::DatabaseError;

/// Nutrients per 100g of a food. Sodium is in milligrams.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
}

/// Canonical form of a food key: lowercase, single-spaced, trimmed.
pub fn normalize_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Read-only table of canonical food name to per-100g nutrients.
///
/// Built once and shared by reference (typically behind an `Arc`); nothing
/// mutates it after construction, so concurrent lookups need no locking.
#[derive(Debug, Clone, Default)]
pub struct NutrientDatabase {
    foods: BTreeMap<String, NutrientProfile>,
    // Keys longest first, ties alphabetical. Fuzzy matching scans in this
    // order so the most specific key wins and results are reproducible.
    scan_order: Vec<String>,
}

impl NutrientDatabase {
    /// Later entries with the same normalized key replace earlier ones.
    /// Entries whose key normalizes to empty are dropped.
    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, NutrientProfile)>,
        K: AsRef<str>,
    {
        let mut foods = BTreeMap::new();
        for (name, profile) in entries {
            let key = normalize_key(name.as_ref());
            if !key.is_empty() {
                foods.insert(key, profile);
            }
        }

        let mut scan_order: Vec<String> = foods.keys().cloned().collect();
        scan_order.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Self { foods, scan_order }
    }

    /// The bundled table of common recipe ingredients.
    pub fn builtin() -> Self {
        Self::from_entries(builtin::builtin_entries())
    }

    pub fn load_csv(path: &Path) -> Result<Self, DatabaseError> {
        load_nutrient_table(path)
    }

    pub fn get(&self, key: &str) -> Option<&NutrientProfile> {
        self.foods.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.foods.contains_key(key)
    }

    /// Looks up a key and returns the stored (canonical) key with its profile.
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &NutrientProfile)> {
        self.foods.get_key_value(key).map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys_by_specificity(&self) -> impl Iterator<Item = &str> {
        self.scan_order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
