use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, warn};

use super::{NutrientDatabase, NutrientProfile};
use crate::error::DatabaseError;

// Expected column headers
const NAME_COL: &str = "name";
const CALORIES_COL: &str = "calories";
const PROTEIN_COL: &str = "protein";
const CARBS_COL: &str = "carbs";
const FAT_COL: &str = "fat";
const FIBER_COL: &str = "fiber";
const SUGAR_COL: &str = "sugar";
const SODIUM_COL: &str = "sodium";

fn parse_optional_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn column_index(headers: &csv::StringRecord, name: &'static str) -> Option<usize> {
    headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
}

fn required_index(headers: &csv::StringRecord, name: &'static str) -> Result<usize, DatabaseError> {
    column_index(headers, name).ok_or(DatabaseError::MissingColumn(name))
}

fn required_value(
    record: &csv::StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
) -> Result<f64, DatabaseError> {
    let raw = record.get(idx).unwrap_or_default();
    parse_optional_f64(raw).ok_or_else(|| DatabaseError::InvalidValue {
        column,
        row,
        value: raw.to_string(),
    })
}

/// Loads a nutrient table from CSV.
///
/// `name`, `calories`, `protein`, `carbs` and `fat` columns are required and
/// must hold numbers. `fiber`, `sugar` and `sodium` may be absent entirely or
/// left blank per row. Rows with an empty name are skipped. Header names are
/// matched case-insensitively. Values are per 100g; sodium in milligrams.
pub fn load_nutrient_table(csv_path: &Path) -> Result<NutrientDatabase, DatabaseError> {
    if !csv_path.exists() {
        return Err(DatabaseError::NotFound(csv_path.to_path_buf()));
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)?;

    let headers = rdr.headers()?.clone();

    let name_idx = required_index(&headers, NAME_COL)?;
    let calories_idx = required_index(&headers, CALORIES_COL)?;
    let protein_idx = required_index(&headers, PROTEIN_COL)?;
    let carbs_idx = required_index(&headers, CARBS_COL)?;
    let fat_idx = required_index(&headers, FAT_COL)?;
    let fiber_idx = column_index(&headers, FIBER_COL);
    let sugar_idx = column_index(&headers, SUGAR_COL);
    let sodium_idx = column_index(&headers, SODIUM_COL);

    let optional = |record: &csv::StringRecord, idx: Option<usize>| {
        idx.and_then(|i| record.get(i)).and_then(parse_optional_f64)
    };

    let mut entries = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result?;

        let name = record.get(name_idx).unwrap_or_default().trim().to_string();
        if name.is_empty() {
            warn!(row = row_index + 1, "Skipping nutrient row with empty name");
            continue;
        }

        let profile = NutrientProfile {
            calories: required_value(&record, calories_idx, CALORIES_COL, row_index + 1)?,
            protein: required_value(&record, protein_idx, PROTEIN_COL, row_index + 1)?,
            carbs: required_value(&record, carbs_idx, CARBS_COL, row_index + 1)?,
            fat: required_value(&record, fat_idx, FAT_COL, row_index + 1)?,
            fiber: optional(&record, fiber_idx),
            sugar: optional(&record, sugar_idx),
            sodium: optional(&record, sodium_idx),
        };
        entries.push((name, profile));
    }

    let database = NutrientDatabase::from_entries(entries);
    if database.is_empty() {
        return Err(DatabaseError::Empty(csv_path.to_path_buf()));
    }

    debug!(path = ?csv_path, foods = database.len(), "Loaded nutrient table");
    Ok(database)
}
