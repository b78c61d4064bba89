//! Conservative amounts for ingredient lines that carry no explicit quantity.
//!
//! Free-text recipes often say "salt and pepper" or "olive oil for the pan".
//! Guessing high inflates the whole recipe, so every default here skews low.

use crate::ingredient_parser::{has_keyword, Unit};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultAmount {
    pub amount: f64,
    pub unit: Unit,
}

const fn amount(amount: f64, unit: Unit) -> DefaultAmount {
    DefaultAmount { amount, unit }
}

/// Used when no row of [`DEFAULT_RULES`] matches.
pub const FALLBACK_DEFAULT: DefaultAmount = amount(1.0, Unit::Tbsp);

/// Ordered `(keywords, default)` rows; the first row with a keyword among the
/// clean name's words wins.
pub const DEFAULT_RULES: &[(&[&str], DefaultAmount)] = &[
    // seasonings and aromatics
    (
        &[
            "salt", "pepper", "spice", "herb", "garlic", "onion", "ginger", "basil", "oregano",
            "thyme", "rosemary", "parsley", "cilantro", "cumin", "paprika", "cinnamon", "nutmeg",
            "chili", "turmeric", "dill", "sage", "bay leaf", "bay leaves", "clove", "vanilla",
        ],
        amount(1.0, Unit::Tsp),
    ),
    // oils and fats
    (
        &["oil", "butter", "fat", "lard", "shortening", "ghee", "margarine"],
        amount(0.5, Unit::Tbsp),
    ),
    // sauces and condiments
    (
        &[
            "sauce", "ketchup", "mustard", "mayonnaise", "mayo", "vinegar", "dressing", "salsa",
            "honey", "syrup", "jam",
        ],
        amount(0.5, Unit::Tbsp),
    ),
    // dairy
    (
        &["cheese", "milk", "buttermilk", "cream", "yogurt", "sour cream"],
        amount(0.25, Unit::Cup),
    ),
    // vegetables
    (
        &[
            "lettuce", "spinach", "kale", "cabbage", "carrot", "celery", "tomato", "broccoli",
            "cauliflower", "zucchini", "cucumber", "mushroom", "peas", "corn", "vegetable",
            "greens", "eggplant",
        ],
        amount(0.5, Unit::Cup),
    ),
    // proteins
    (
        &[
            "chicken", "beef", "pork", "fish", "salmon", "tuna", "shrimp", "turkey", "lamb",
            "egg", "tofu", "bean", "lentil", "chickpea", "sausage", "bacon", "ham", "steak",
            "meat",
        ],
        amount(100.0, Unit::G),
    ),
    // grains and starches
    (
        &[
            "rice", "pasta", "noodle", "bread", "breadcrumbs", "flour", "potato", "quinoa", "oat",
            "couscous",
        ],
        amount(0.5, Unit::Cup),
    ),
    // nuts and seeds
    (
        &[
            "almond", "walnut", "pecan", "cashew", "peanut", "pistachio", "hazelnut", "nut",
            "seed",
        ],
        amount(1.0, Unit::Tbsp),
    ),
];

/// Picks a default amount for a name the parser found no quantity for.
pub fn infer_default(clean_name: &str) -> DefaultAmount {
    DEFAULT_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| has_keyword(clean_name, kw)))
        .map(|(_, default)| *default)
        .unwrap_or(FALLBACK_DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasoning_defaults_to_teaspoon() {
        assert_eq!(infer_default("salt and pepper"), amount(1.0, Unit::Tsp));
        assert_eq!(infer_default("garlic"), amount(1.0, Unit::Tsp));
    }

    #[test]
    fn test_fats_and_sauces_default_to_half_tablespoon() {
        assert_eq!(infer_default("olive oil"), amount(0.5, Unit::Tbsp));
        assert_eq!(infer_default("soy sauce"), amount(0.5, Unit::Tbsp));
    }

    #[test]
    fn test_dairy_vegetable_protein_grain() {
        assert_eq!(infer_default("parmesan cheese"), amount(0.25, Unit::Cup));
        assert_eq!(infer_default("lettuce"), amount(0.5, Unit::Cup));
        assert_eq!(infer_default("chicken breast"), amount(100.0, Unit::G));
        assert_eq!(infer_default("eggs"), amount(100.0, Unit::G));
        assert_eq!(infer_default("brown rice"), amount(0.5, Unit::Cup));
        assert_eq!(infer_default("almonds"), amount(1.0, Unit::Tbsp));
    }

    #[test]
    fn test_earlier_rows_win() {
        // "peanut butter" is a fat before it is a nut.
        assert_eq!(infer_default("peanut butter"), amount(0.5, Unit::Tbsp));
        // "onion" is an aromatic even though it is also a vegetable.
        assert_eq!(infer_default("red onion"), amount(1.0, Unit::Tsp));
    }

    #[test]
    fn test_keywords_do_not_match_inside_words() {
        // "sage" inside "sausage", "salt" inside "unsalted".
        assert_eq!(infer_default("sausage"), amount(100.0, Unit::G));
        assert_eq!(infer_default("unsalted butter"), amount(0.5, Unit::Tbsp));
        assert_eq!(infer_default("buttermilk"), amount(0.25, Unit::Cup));
        assert_eq!(infer_default("dried bay leaves"), amount(1.0, Unit::Tsp));
    }

    #[test]
    fn test_unknown_falls_back_to_tablespoon() {
        assert_eq!(infer_default("xyzzy"), FALLBACK_DEFAULT);
        assert_eq!(infer_default(""), FALLBACK_DEFAULT);
    }
}
