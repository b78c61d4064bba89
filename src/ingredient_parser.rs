use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Units the parser understands. Everything else is left for the default
/// inferencer.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Cup,
    Tbsp,
    Tsp,
    Oz,
    Lb,
    G,
    Kg,
    Ml,
    Liter,
    Slice,
    Piece,
    Clove,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Cup => "cup",
            Unit::Tbsp => "tbsp",
            Unit::Tsp => "tsp",
            Unit::Oz => "oz",
            Unit::Lb => "lb",
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Ml => "ml",
            Unit::Liter => "l",
            Unit::Slice => "slice",
            Unit::Piece => "piece",
            Unit::Clove => "clove",
        }
    }

    /// Maps a matched unit token (already lowercase) onto the vocabulary.
    fn from_token(token: &str) -> Option<Self> {
        let unit = match token {
            "cup" | "cups" => Unit::Cup,
            "tbsp" | "tbsps" | "tablespoon" | "tablespoons" => Unit::Tbsp,
            "tsp" | "tsps" | "teaspoon" | "teaspoons" => Unit::Tsp,
            "oz" | "ounce" | "ounces" => Unit::Oz,
            "lb" | "lbs" | "pound" | "pounds" => Unit::Lb,
            "g" | "gram" | "grams" => Unit::G,
            "kg" | "kilogram" | "kilograms" => Unit::Kg,
            "ml" | "milliliter" | "milliliters" => Unit::Ml,
            "l" | "liter" | "liters" => Unit::Liter,
            "slice" | "slices" => Unit::Slice,
            "piece" | "pieces" => Unit::Piece,
            "clove" | "cloves" => Unit::Clove,
            _ => return None,
        };
        Some(unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ParsedIngredient {
    /// `None` when the line carried no explicit amount.
    pub quantity: Option<f64>,
    pub unit: Option<Unit>,
    pub clean_name: String,
}

impl ParsedIngredient {
    /// Quantity and unit together, when the line stated both.
    pub fn explicit_amount(&self) -> Option<(f64, Unit)> {
        self.quantity.zip(self.unit)
    }
}

/// True when `keyword` appears in `name` as whole words.
///
/// Multi-word keywords must match consecutive words. The last word may carry
/// a plural `s` or `es`, so "walnut" matches "walnuts" but "salt" does not
/// match "unsalted" and "butter" does not match "buttermilk".
pub fn has_keyword(name: &str, keyword: &str) -> bool {
    let words: Vec<&str> = name
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let wanted: Vec<&str> = keyword.split_whitespace().collect();
    let Some((last, leading)) = wanted.split_last() else {
        return false;
    };

    words.windows(wanted.len()).any(|window| {
        let Some((tail, head)) = window.split_last() else {
            return false;
        };
        head.iter().zip(leading).all(|(w, k)| w.eq_ignore_ascii_case(k))
            && is_word_or_plural(&tail.to_lowercase(), last)
    })
}

fn is_word_or_plural(word: &str, keyword: &str) -> bool {
    word == keyword
        || word.strip_suffix('s') == Some(keyword)
        || word.strip_suffix("es") == Some(keyword)
}

const UNICODE_FRACTIONS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('⅛', "1/8"),
];

/// Rewrites vulgar fraction characters as ASCII fractions, so `1½` reads as
/// `1 1/2`.
fn expand_unicode_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match UNICODE_FRACTIONS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, ascii)) => {
                out.push(' ');
                out.push_str(ascii);
            }
            None => out.push(c),
        }
    }
    out
}

// Longer alternatives come first so `l` never shadows `lbs` and friends.
static AMOUNT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?P<qty>\d+\s+\d+/\d+ | \d+/\d+ | \d+(?:\.\d+)? | \.\d+)
        \s*
        (?P<unit>
            tablespoons? | tbsps? | teaspoons? | tsps? | cups? |
            ounces? | oz | pounds? | lbs? |
            kilograms? | kg | grams? | g |
            milliliters? | ml | liters? |
            large | medium | small | l |
            slices? | pieces? | cloves?
        )\b",
    )
    .ok()
});

static DESCRIPTOR_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:chopped|diced|sliced|minced|grated|shredded|fresh|dried|frozen|canned|raw|cooked|boiled|fried|grilled|baked|thick|thin|large|medium|small)\b",
    )
    .ok()
});

static NON_WORD_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[^\w\s]+").ok());

static NUMBER_TOKEN_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b[\d_]+\b").ok());

/// Parses a numeric amount: `2`, `2.5`, `.5`, `1/2` or `1 1/2`.
fn parse_quantity(text: &str) -> Option<f64> {
    let mut total = 0.0;
    for part in text.split_whitespace() {
        let value = match part.split_once('/') {
            Some((num, den)) => {
                let num: f64 = num.parse().ok()?;
                let den: f64 = den.parse().ok()?;
                if den == 0.0 {
                    return None;
                }
                num / den
            }
            None => part.parse::<f64>().ok()?,
        };
        total += value;
    }
    Some(total)
}

fn replace_all(pattern: &LazyLock<Option<Regex>>, text: &str, with: &str) -> String {
    match pattern.as_ref() {
        Some(re) => re.replace_all(text, with).into_owned(),
        None => text.to_string(),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The alphabetic words of `text`, used when stripping removed everything.
fn alphabetic_tokens(text: &str) -> String {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns a free-text ingredient line into amount, unit and a clean food name.
///
/// Never fails: a line without an amount comes back with `quantity: None`,
/// and a line without any letters comes back with an empty `clean_name`.
pub fn parse(line: &str) -> ParsedIngredient {
    let lowered = expand_unicode_fractions(line.trim().to_lowercase().as_str())
        .trim()
        .to_string();

    let mut quantity = None;
    let mut unit = None;
    let mut remainder = lowered.clone();

    if let Some(caps) = AMOUNT_PATTERN.as_ref().and_then(|re| re.captures(&lowered)) {
        let parsed_qty = caps.name("qty").and_then(|m| parse_quantity(m.as_str()));
        let unit_token = caps.name("unit").map(|m| m.as_str()).unwrap_or_default();

        if let Some(qty) = parsed_qty {
            let (qty, parsed_unit) = match unit_token {
                "large" => (qty * 1.5, Some(Unit::Piece)),
                "medium" => (qty, Some(Unit::Piece)),
                "small" => (qty * 0.5, Some(Unit::Piece)),
                other => (qty, Unit::from_token(other)),
            };
            if parsed_unit.is_some() {
                quantity = Some(qty);
                unit = parsed_unit;
                if let Some(whole) = caps.get(0) {
                    remainder.replace_range(whole.range(), " ");
                }
            }
        }
    }

    let stripped = replace_all(&DESCRIPTOR_PATTERN, &remainder, " ");
    let stripped = replace_all(&NON_WORD_PATTERN, &stripped, " ");
    let stripped = replace_all(&NUMBER_TOKEN_PATTERN, &stripped, " ");
    let mut clean_name = collapse_whitespace(&stripped);

    if clean_name.is_empty() {
        clean_name = alphabetic_tokens(&lowered);
    }

    ParsedIngredient {
        quantity,
        unit,
        clean_name,
    }
}
