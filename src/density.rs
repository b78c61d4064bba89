//! Volume-to-mass conversion factors grouped by food category.
//!
//! A food name is mapped to a category by scanning [`DENSITY_CATEGORIES`] in
//! order; the first row with a keyword among the name's words wins. Names that
//! match nothing are treated as water-like.

use crate::ingredient_parser::has_keyword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DensityCategory {
    OilFat,
    Cheese,
    Dairy,
    Nuts,
    DryGoods,
    WaterLike,
}

/// Grams per one unit of each volume measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityProfile {
    pub cup: f64,
    pub tbsp: f64,
    pub tsp: f64,
    pub ml: f64,
    pub liter: f64,
}

const OIL_FAT: DensityProfile = DensityProfile {
    cup: 218.0,
    tbsp: 13.6,
    tsp: 4.5,
    ml: 0.92,
    liter: 920.0,
};

// Flour-calibrated: one cup of flour weighs 120g.
const DRY_GOODS: DensityProfile = DensityProfile {
    cup: 120.0,
    tbsp: 7.5,
    tsp: 2.5,
    ml: 0.5,
    liter: 500.0,
};

const NUTS: DensityProfile = DensityProfile {
    cup: 140.0,
    tbsp: 9.0,
    tsp: 3.0,
    ml: 0.6,
    liter: 600.0,
};

const DAIRY: DensityProfile = DensityProfile {
    cup: 245.0,
    tbsp: 15.3,
    tsp: 5.1,
    ml: 1.03,
    liter: 1030.0,
};

// Shredded or grated, which is how recipes usually measure cheese by volume.
const CHEESE: DensityProfile = DensityProfile {
    cup: 113.0,
    tbsp: 7.0,
    tsp: 2.3,
    ml: 0.47,
    liter: 470.0,
};

const WATER_LIKE: DensityProfile = DensityProfile {
    cup: 240.0,
    tbsp: 15.0,
    tsp: 5.0,
    ml: 1.0,
    liter: 1000.0,
};

/// Ordered keyword table. Cheese sits before dairy so "cream cheese" is
/// cheese, and fats sit first so "peanut butter" measures like a fat.
pub const DENSITY_CATEGORIES: &[(&[&str], DensityCategory)] = &[
    (
        &["oil", "butter", "lard", "shortening", "ghee", "margarine"],
        DensityCategory::OilFat,
    ),
    (
        &["cheese", "parmesan", "cheddar", "mozzarella", "feta", "ricotta"],
        DensityCategory::Cheese,
    ),
    (
        &["milk", "buttermilk", "cream", "yogurt", "yoghurt", "kefir"],
        DensityCategory::Dairy,
    ),
    (
        &[
            "almond", "walnut", "pecan", "cashew", "peanut", "pistachio", "hazelnut",
            "macadamia", "nut", "seed",
        ],
        DensityCategory::Nuts,
    ),
    (
        &[
            "flour", "sugar", "salt", "cocoa", "cornstarch", "starch", "powder", "meal",
            "cornmeal", "oat",
        ],
        DensityCategory::DryGoods,
    ),
];

impl DensityCategory {
    pub fn profile(&self) -> &'static DensityProfile {
        match self {
            DensityCategory::OilFat => &OIL_FAT,
            DensityCategory::Cheese => &CHEESE,
            DensityCategory::Dairy => &DAIRY,
            DensityCategory::Nuts => &NUTS,
            DensityCategory::DryGoods => &DRY_GOODS,
            DensityCategory::WaterLike => &WATER_LIKE,
        }
    }
}

pub fn categorize(food_name: &str) -> DensityCategory {
    let name = food_name.to_lowercase();
    DENSITY_CATEGORIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| has_keyword(&name, kw)))
        .map(|(_, category)| *category)
        .unwrap_or(DensityCategory::WaterLike)
}

pub fn profile_for(food_name: &str) -> &'static DensityProfile {
    categorize(food_name).profile()
}
