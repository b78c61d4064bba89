//! Bundled nutrient table of common recipe ingredients.
//!
//! Values are per 100g (sodium in mg) and approximate USDA figures for the
//! form a recipe usually lists: dry grains and pasta, raw meat and produce.

use super::NutrientProfile;

// name, calories, protein, carbs, fat, fiber, sugar, sodium
type FoodRow = (&'static str, f64, f64, f64, f64, f64, f64, f64);

const BUILTIN_FOODS: &[FoodRow] = &[
    // Baking staples
    ("flour", 364.0, 10.3, 76.3, 1.0, 2.7, 0.3, 2.0),
    ("all purpose flour", 364.0, 10.3, 76.3, 1.0, 2.7, 0.3, 2.0),
    ("whole wheat flour", 340.0, 13.2, 72.0, 2.5, 10.7, 0.4, 2.0),
    ("almond flour", 571.0, 21.4, 21.4, 50.0, 10.7, 3.6, 0.0),
    ("sugar", 387.0, 0.0, 100.0, 0.0, 0.0, 100.0, 1.0),
    ("brown sugar", 380.0, 0.1, 98.1, 0.0, 0.0, 97.0, 28.0),
    ("powdered sugar", 389.0, 0.0, 99.8, 0.0, 0.0, 97.8, 2.0),
    ("baking powder", 53.0, 0.0, 27.7, 0.0, 0.2, 0.0, 10600.0),
    ("baking soda", 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 27360.0),
    ("cornstarch", 381.0, 0.3, 91.3, 0.1, 0.9, 0.0, 9.0),
    ("cocoa powder", 228.0, 19.6, 57.9, 13.7, 37.0, 1.8, 21.0),
    ("chocolate", 546.0, 4.9, 61.0, 31.0, 7.0, 48.0, 24.0),
    ("chocolate chips", 479.0, 4.2, 63.0, 24.0, 5.9, 55.0, 11.0),
    ("yeast", 325.0, 40.4, 41.2, 7.6, 26.9, 0.0, 51.0),
    ("vanilla extract", 288.0, 0.1, 12.7, 0.1, 0.0, 12.7, 9.0),
    ("honey", 304.0, 0.3, 82.4, 0.0, 0.2, 82.1, 4.0),
    ("maple syrup", 260.0, 0.0, 67.0, 0.1, 0.0, 60.5, 12.0),
    // Seasonings
    ("salt", 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 38758.0),
    ("pepper", 251.0, 10.4, 64.0, 3.3, 25.3, 0.6, 20.0),
    ("black pepper", 251.0, 10.4, 64.0, 3.3, 25.3, 0.6, 20.0),
    ("cinnamon", 247.0, 4.0, 80.6, 1.2, 53.1, 2.2, 10.0),
    ("cumin", 375.0, 17.8, 44.2, 22.3, 10.5, 2.3, 168.0),
    ("paprika", 282.0, 14.1, 54.0, 12.9, 34.9, 10.3, 68.0),
    ("chili powder", 282.0, 13.5, 49.7, 14.3, 34.8, 7.2, 2867.0),
    ("oregano", 265.0, 9.0, 68.9, 4.3, 42.5, 4.1, 25.0),
    ("thyme", 101.0, 5.6, 24.5, 1.7, 14.0, 0.0, 9.0),
    ("basil", 23.0, 3.2, 2.7, 0.6, 1.6, 0.3, 4.0),
    ("parsley", 36.0, 3.0, 6.3, 0.8, 3.3, 0.9, 56.0),
    ("cilantro", 23.0, 2.1, 3.7, 0.5, 2.8, 0.9, 46.0),
    ("rosemary", 131.0, 3.3, 20.7, 5.9, 14.1, 0.0, 26.0),
    ("ginger", 80.0, 1.8, 17.8, 0.8, 2.0, 1.7, 13.0),
    ("garlic", 149.0, 6.4, 33.1, 0.5, 2.1, 1.0, 17.0),
    ("garlic powder", 331.0, 16.6, 72.7, 0.7, 9.0, 2.4, 60.0),
    ("onion powder", 341.0, 10.4, 79.1, 1.0, 15.2, 6.6, 73.0),
    // Oils and fats
    ("olive oil", 884.0, 0.0, 0.0, 100.0, 0.0, 0.0, 2.0),
    ("vegetable oil", 884.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0),
    ("canola oil", 884.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0),
    ("coconut oil", 892.0, 0.0, 0.0, 99.1, 0.0, 0.0, 0.0),
    ("sesame oil", 884.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0),
    ("butter", 717.0, 0.9, 0.1, 81.1, 0.0, 0.1, 11.0),
    ("margarine", 717.0, 0.2, 0.7, 80.7, 0.0, 0.0, 700.0),
    ("lard", 902.0, 0.0, 0.0, 100.0, 0.0, 0.0, 0.0),
    ("shortening", 884.0, 0.0, 0.0, 100.0, 0.0, 0.0, 4.0),
    ("mayonnaise", 680.0, 1.0, 0.6, 74.9, 0.0, 0.6, 635.0),
    // Meat, fish, eggs
    ("ground beef", 254.0, 17.2, 0.0, 20.0, 0.0, 0.0, 66.0),
    ("beef", 250.0, 26.0, 0.0, 15.0, 0.0, 0.0, 72.0),
    ("steak", 271.0, 25.0, 0.0, 19.0, 0.0, 0.0, 60.0),
    ("chicken", 239.0, 27.0, 0.0, 14.0, 0.0, 0.0, 82.0),
    ("chicken breast", 165.0, 31.0, 0.0, 3.6, 0.0, 0.0, 74.0),
    ("chicken thigh", 209.0, 26.0, 0.0, 10.9, 0.0, 0.0, 84.0),
    ("ground turkey", 203.0, 27.4, 0.0, 10.4, 0.0, 0.0, 78.0),
    ("turkey", 189.0, 29.0, 0.0, 7.0, 0.0, 0.0, 70.0),
    ("pork", 242.0, 27.3, 0.0, 13.9, 0.0, 0.0, 62.0),
    ("bacon", 541.0, 37.0, 1.4, 42.0, 0.0, 0.0, 1717.0),
    ("ham", 145.0, 21.0, 1.5, 5.5, 0.0, 0.0, 1203.0),
    ("sausage", 301.0, 12.0, 2.0, 27.0, 0.0, 1.0, 749.0),
    ("lamb", 294.0, 25.0, 0.0, 21.0, 0.0, 0.0, 72.0),
    ("salmon", 208.0, 20.4, 0.0, 13.4, 0.0, 0.0, 59.0),
    ("tuna", 132.0, 28.2, 0.0, 1.0, 0.0, 0.0, 47.0),
    ("cod", 82.0, 17.8, 0.0, 0.7, 0.0, 0.0, 54.0),
    ("fish", 206.0, 22.0, 0.0, 12.0, 0.0, 0.0, 61.0),
    ("shrimp", 99.0, 24.0, 0.2, 0.3, 0.0, 0.0, 111.0),
    ("egg", 143.0, 12.6, 0.7, 9.5, 0.0, 0.4, 142.0),
    ("eggs", 143.0, 12.6, 0.7, 9.5, 0.0, 0.4, 142.0),
    ("egg white", 52.0, 10.9, 0.7, 0.2, 0.0, 0.7, 166.0),
    ("egg yolk", 322.0, 15.9, 3.6, 26.5, 0.0, 0.6, 48.0),
    // Plant proteins
    ("tofu", 76.0, 8.1, 1.9, 4.8, 0.3, 0.6, 7.0),
    ("beans", 127.0, 8.7, 22.8, 0.5, 6.4, 0.3, 2.0),
    ("black beans", 132.0, 8.9, 23.7, 0.5, 8.7, 0.3, 1.0),
    ("kidney beans", 127.0, 8.7, 22.8, 0.5, 6.4, 0.3, 2.0),
    ("chickpeas", 164.0, 8.9, 27.4, 2.6, 7.6, 4.8, 7.0),
    ("lentils", 116.0, 9.0, 20.1, 0.4, 7.9, 1.8, 2.0),
    // Dairy
    ("milk", 61.0, 3.2, 4.8, 3.3, 0.0, 5.1, 43.0),
    ("whole milk", 61.0, 3.2, 4.8, 3.3, 0.0, 5.1, 43.0),
    ("skim milk", 34.0, 3.4, 5.0, 0.1, 0.0, 5.0, 42.0),
    ("buttermilk", 40.0, 3.3, 4.8, 0.9, 0.0, 4.8, 105.0),
    ("heavy cream", 340.0, 2.8, 2.7, 36.1, 0.0, 2.9, 27.0),
    ("cream", 340.0, 2.8, 2.7, 36.1, 0.0, 2.9, 27.0),
    ("sour cream", 198.0, 2.4, 4.6, 19.4, 0.0, 3.4, 31.0),
    ("yogurt", 61.0, 3.5, 4.7, 3.3, 0.0, 4.7, 46.0),
    ("greek yogurt", 97.0, 9.0, 3.9, 5.0, 0.0, 3.6, 35.0),
    ("cheese", 402.0, 24.9, 1.3, 33.1, 0.0, 0.5, 621.0),
    ("cheddar cheese", 403.0, 24.9, 1.3, 33.1, 0.0, 0.5, 621.0),
    ("mozzarella", 280.0, 27.5, 3.1, 17.1, 0.0, 1.0, 627.0),
    ("parmesan", 431.0, 38.5, 4.1, 28.6, 0.0, 0.9, 1529.0),
    ("cream cheese", 342.0, 5.9, 4.1, 34.2, 0.0, 3.2, 321.0),
    ("feta cheese", 264.0, 14.2, 4.1, 21.3, 0.0, 4.1, 917.0),
    ("ricotta", 174.0, 11.3, 3.0, 13.0, 0.0, 0.3, 84.0),
    // Grains and starches
    ("rice", 365.0, 7.1, 80.0, 0.7, 1.3, 0.1, 5.0),
    ("white rice", 365.0, 7.1, 80.0, 0.7, 1.3, 0.1, 5.0),
    ("brown rice", 370.0, 7.9, 77.2, 2.9, 3.5, 0.9, 7.0),
    ("pasta", 371.0, 13.0, 74.7, 1.5, 3.2, 2.7, 6.0),
    ("spaghetti", 371.0, 13.0, 74.7, 1.5, 3.2, 2.7, 6.0),
    ("noodles", 384.0, 14.2, 71.3, 4.4, 3.3, 1.9, 21.0),
    ("bread", 265.0, 9.0, 49.0, 3.2, 2.7, 5.0, 491.0),
    ("breadcrumbs", 395.0, 13.4, 71.9, 5.3, 4.5, 6.2, 732.0),
    ("tortilla", 306.0, 8.2, 50.0, 8.0, 3.5, 3.6, 620.0),
    ("quinoa", 368.0, 14.1, 64.2, 6.1, 7.0, 0.0, 5.0),
    ("oats", 389.0, 16.9, 66.3, 6.9, 10.6, 0.0, 2.0),
    ("couscous", 376.0, 12.8, 77.4, 0.6, 5.0, 0.0, 10.0),
    ("potato", 77.0, 2.0, 17.5, 0.1, 2.2, 0.8, 6.0),
    ("potatoes", 77.0, 2.0, 17.5, 0.1, 2.2, 0.8, 6.0),
    ("sweet potato", 86.0, 1.6, 20.1, 0.1, 3.0, 4.2, 55.0),
    // Vegetables
    ("onion", 40.0, 1.1, 9.3, 0.1, 1.7, 4.2, 4.0),
    ("onions", 40.0, 1.1, 9.3, 0.1, 1.7, 4.2, 4.0),
    ("tomato", 18.0, 0.9, 3.9, 0.2, 1.2, 2.6, 5.0),
    ("tomatoes", 18.0, 0.9, 3.9, 0.2, 1.2, 2.6, 5.0),
    ("tomato paste", 82.0, 4.3, 18.9, 0.5, 4.1, 12.2, 59.0),
    ("lettuce", 15.0, 1.4, 2.9, 0.2, 1.3, 0.8, 28.0),
    ("spinach", 23.0, 2.9, 3.6, 0.4, 2.2, 0.4, 79.0),
    ("kale", 49.0, 4.3, 8.8, 0.9, 3.6, 2.3, 38.0),
    ("carrot", 41.0, 0.9, 9.6, 0.2, 2.8, 4.7, 69.0),
    ("carrots", 41.0, 0.9, 9.6, 0.2, 2.8, 4.7, 69.0),
    ("celery", 16.0, 0.7, 3.0, 0.2, 1.6, 1.3, 80.0),
    ("broccoli", 34.0, 2.8, 6.6, 0.4, 2.6, 1.7, 33.0),
    ("cauliflower", 25.0, 1.9, 5.0, 0.3, 2.0, 1.9, 30.0),
    ("bell pepper", 31.0, 1.0, 6.0, 0.3, 2.1, 4.2, 4.0),
    ("zucchini", 17.0, 1.2, 3.1, 0.3, 1.0, 2.5, 8.0),
    ("cucumber", 15.0, 0.7, 3.6, 0.1, 0.5, 1.7, 2.0),
    ("mushrooms", 22.0, 3.1, 3.3, 0.3, 1.0, 2.0, 5.0),
    ("eggplant", 25.0, 1.0, 5.9, 0.2, 3.0, 3.5, 2.0),
    ("cabbage", 25.0, 1.3, 5.8, 0.1, 2.5, 3.2, 18.0),
    ("corn", 86.0, 3.3, 19.0, 1.4, 2.7, 6.3, 15.0),
    ("peas", 81.0, 5.4, 14.5, 0.4, 5.7, 5.7, 5.0),
    ("green beans", 31.0, 1.8, 7.0, 0.2, 2.7, 3.3, 6.0),
    ("avocado", 160.0, 2.0, 8.5, 14.7, 6.7, 0.7, 7.0),
    // Fruit
    ("apple", 52.0, 0.3, 13.8, 0.2, 2.4, 10.4, 1.0),
    ("banana", 89.0, 1.1, 22.8, 0.3, 2.6, 12.2, 1.0),
    ("lemon", 29.0, 1.1, 9.3, 0.3, 2.8, 2.5, 2.0),
    ("lemon juice", 22.0, 0.4, 6.9, 0.2, 0.3, 2.5, 1.0),
    ("lime", 30.0, 0.7, 10.5, 0.2, 2.8, 1.7, 2.0),
    ("orange", 47.0, 0.9, 11.8, 0.1, 2.4, 9.4, 0.0),
    ("strawberries", 32.0, 0.7, 7.7, 0.3, 2.0, 4.9, 1.0),
    ("blueberries", 57.0, 0.7, 14.5, 0.3, 2.4, 10.0, 1.0),
    ("raisins", 299.0, 3.1, 79.2, 0.5, 3.7, 59.2, 11.0),
    // Nuts and seeds
    ("almonds", 579.0, 21.2, 21.6, 49.9, 12.5, 4.4, 1.0),
    ("walnuts", 654.0, 15.2, 13.7, 65.2, 6.7, 2.6, 2.0),
    ("pecans", 691.0, 9.2, 13.9, 72.0, 9.6, 4.0, 0.0),
    ("cashews", 553.0, 18.2, 30.2, 43.9, 3.3, 5.9, 12.0),
    ("peanuts", 567.0, 25.8, 16.1, 49.2, 8.5, 4.0, 18.0),
    ("pistachios", 560.0, 20.2, 27.2, 45.3, 10.6, 7.7, 1.0),
    ("hazelnuts", 628.0, 15.0, 16.7, 60.8, 9.7, 4.3, 0.0),
    ("macadamia nuts", 718.0, 7.9, 13.8, 75.8, 8.6, 4.6, 5.0),
    ("peanut butter", 588.0, 25.1, 20.0, 50.4, 6.0, 9.2, 459.0),
    ("sesame seeds", 573.0, 17.7, 23.5, 49.7, 11.8, 0.3, 11.0),
    ("chia seeds", 486.0, 16.5, 42.1, 30.7, 34.4, 0.0, 16.0),
    ("tahini", 595.0, 17.0, 21.2, 53.8, 9.3, 0.5, 115.0),
    // Sauces, condiments, liquids
    ("soy sauce", 53.0, 8.1, 4.9, 0.6, 0.8, 0.4, 5493.0),
    ("tomato sauce", 24.0, 1.2, 5.3, 0.2, 1.5, 3.6, 474.0),
    ("ketchup", 101.0, 1.0, 27.4, 0.1, 0.3, 22.8, 907.0),
    ("mustard", 66.0, 4.4, 5.3, 4.0, 3.3, 0.9, 1104.0),
    ("vinegar", 18.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0),
    ("balsamic vinegar", 88.0, 0.5, 17.0, 0.0, 0.0, 15.0, 23.0),
    ("salsa", 36.0, 1.5, 7.0, 0.2, 1.9, 4.0, 711.0),
    ("chicken broth", 15.0, 1.6, 1.4, 0.5, 0.0, 0.7, 343.0),
    ("coconut milk", 230.0, 2.3, 5.5, 23.8, 2.2, 3.3, 15.0),
    ("white wine", 82.0, 0.1, 2.6, 0.0, 0.0, 1.0, 5.0),
    ("water", 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 4.0),
];

pub fn builtin_entries() -> impl Iterator<Item = (&'static str, NutrientProfile)> {
    BUILTIN_FOODS.iter().map(
        |&(name, calories, protein, carbs, fat, fiber, sugar, sodium)| {
            (
                name,
                NutrientProfile {
                    calories,
                    protein,
                    carbs,
                    fat,
                    fiber: Some(fiber),
                    sugar: Some(sugar),
                    sodium: Some(sodium),
                },
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_are_unique_and_normalized() {
        let mut seen = HashSet::new();
        for (name, _) in builtin_entries() {
            assert_eq!(name, super::super::normalize_key(name));
            assert!(seen.insert(name), "duplicate builtin food {name}");
        }
    }

    #[test]
    fn test_builtin_values_are_plausible() {
        for (name, p) in builtin_entries() {
            assert!(p.protein + p.carbs + p.fat <= 100.5, "{name} macros exceed 100g");
            assert!(p.calories <= 910.0, "{name} calories too high");
            assert!(p.sodium.unwrap_or(0.0) >= 0.0);
        }
    }
}
