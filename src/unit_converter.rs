use crate::config::ConversionCaps;
use crate::density::profile_for;
use crate::ingredient_parser::Unit;

pub const GRAMS_PER_OZ: f64 = 28.35;
pub const GRAMS_PER_LB: f64 = 453.59;
pub const GRAMS_PER_KG: f64 = 1000.0;

pub const GRAMS_PER_SLICE: f64 = 25.0;
pub const GRAMS_PER_PIECE: f64 = 50.0;
pub const GRAMS_PER_CLOVE: f64 = 3.0;

/// Converts an amount to grams using the food's density profile for volume
/// units. Each path is clamped by its cap in `caps`; a missing unit is read as
/// grams. Negative or non-finite amounts yield 0.
pub fn to_grams(amount: f64, unit: Option<Unit>, food_name: &str, caps: &ConversionCaps) -> f64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0.0;
    }

    let (grams, cap) = match unit {
        Some(Unit::Cup) => (amount * profile_for(food_name).cup, caps.cup),
        Some(Unit::Tbsp) => (amount * profile_for(food_name).tbsp, caps.tbsp),
        Some(Unit::Tsp) => (amount * profile_for(food_name).tsp, caps.tsp),
        Some(Unit::Ml) => (amount * profile_for(food_name).ml, caps.ml),
        Some(Unit::Liter) => (amount * profile_for(food_name).liter, caps.liter),
        Some(Unit::Oz) => (amount * GRAMS_PER_OZ, caps.oz),
        Some(Unit::Lb) => (amount * GRAMS_PER_LB, caps.lb),
        Some(Unit::Kg) => (amount * GRAMS_PER_KG, caps.kg),
        Some(Unit::G) => (amount, caps.g),
        Some(Unit::Slice) => (amount * GRAMS_PER_SLICE, caps.count),
        Some(Unit::Piece) => (amount * GRAMS_PER_PIECE, caps.count),
        Some(Unit::Clove) => (amount * GRAMS_PER_CLOVE, caps.count),
        None => (amount, caps.unitless),
    };

    grams.min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps() -> ConversionCaps {
        ConversionCaps::default()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_volume_uses_density_profile() {
        assert_close(to_grams(1.0, Some(Unit::Cup), "flour", &caps()), 120.0);
        assert_close(to_grams(1.0, Some(Unit::Tbsp), "olive oil", &caps()), 13.6);
        assert_close(to_grams(2.0, Some(Unit::Cup), "water", &caps()), 480.0);
        assert_close(to_grams(250.0, Some(Unit::Ml), "milk", &caps()), 257.5);
    }

    #[test]
    fn test_weight_units_are_density_independent() {
        assert_close(to_grams(1.0, Some(Unit::Lb), "ground beef", &caps()), 453.59);
        assert_close(to_grams(1.0, Some(Unit::Lb), "flour", &caps()), 453.59);
        assert_close(to_grams(2.0, Some(Unit::Oz), "cheddar", &caps()), 56.7);
        assert_close(to_grams(120.0, Some(Unit::G), "flour", &caps()), 120.0);
        assert_close(to_grams(1.5, Some(Unit::Kg), "potatoes", &caps()), 1500.0);
    }

    #[test]
    fn test_count_units() {
        assert_close(to_grams(3.0, Some(Unit::Clove), "garlic", &caps()), 9.0);
        assert_close(to_grams(2.0, Some(Unit::Slice), "bread", &caps()), 50.0);
        assert_close(to_grams(3.0, Some(Unit::Piece), "eggs", &caps()), 150.0);
    }

    #[test]
    fn test_caps_engage() {
        // 10 cups of a water-like food would be 2400g.
        assert_close(to_grams(10.0, Some(Unit::Cup), "lettuce", &caps()), 2000.0);
        assert_close(to_grams(100.0, Some(Unit::Tbsp), "olive oil", &caps()), 200.0);
        assert_close(to_grams(50.0, Some(Unit::Tsp), "salt", &caps()), 100.0);
        assert_close(to_grams(10.0, Some(Unit::Lb), "beef", &caps()), 2000.0);
        assert_close(to_grams(100.0, Some(Unit::Oz), "beef", &caps()), 1000.0);
        assert_close(to_grams(9.0, Some(Unit::Kg), "beef", &caps()), 5000.0);
        assert_close(to_grams(100.0, Some(Unit::Piece), "eggs", &caps()), 1000.0);
    }

    #[test]
    fn test_missing_unit_is_grams_capped() {
        assert_close(to_grams(250.0, None, "rice", &caps()), 250.0);
        assert_close(to_grams(5000.0, None, "rice", &caps()), 1000.0);
    }

    #[test]
    fn test_degenerate_amounts() {
        assert_eq!(to_grams(-2.0, Some(Unit::Cup), "flour", &caps()), 0.0);
        assert_eq!(to_grams(f64::NAN, Some(Unit::Cup), "flour", &caps()), 0.0);
        assert_eq!(to_grams(0.0, Some(Unit::G), "flour", &caps()), 0.0);
    }

    #[test]
    fn test_custom_caps() {
        let tight = ConversionCaps {
            cup: 100.0,
            ..ConversionCaps::default()
        };
        assert_close(to_grams(1.0, Some(Unit::Cup), "water", &tight), 100.0);
    }
}
