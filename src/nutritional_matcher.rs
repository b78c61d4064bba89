//! Resolves a cleaned ingredient name to a key of the nutrient database.
//!
//! Matching runs in tiers and stops at the first tier that produces a key:
//!
//! 1. the whole name is a key;
//! 2. one of its words (longer than 2 characters) is a key;
//! 3. the name contains a key or a key contains the name, both sides at least
//!    4 characters long;
//! 4. one of its words (at least 4 characters) contains a key or is contained
//!    in one, keys at least 4 characters long.
//!
//! Exact matches always outrank fuzzy ones. Within tiers 3 and 4 keys are
//! tried longest first, so "olive oil" beats "oil". The length floors keep
//! short keys such as "egg" from matching inside unrelated words.

use tracing::trace;

use crate::nutrient_db::NutrientDatabase;

const MIN_EXACT_WORD_LEN: usize = 3;
const MIN_FUZZY_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    ExactWord,
    Substring,
    WordSubstring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodMatch<'a> {
    pub key: &'a str,
    pub tier: MatchTier,
}

fn words(name: &str) -> impl Iterator<Item = &str> {
    name.split_whitespace()
}

fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Finds the database key for `clean_name`, reporting which tier matched.
pub fn find_match<'a>(database: &'a NutrientDatabase, clean_name: &str) -> Option<FoodMatch<'a>> {
    let name = clean_name.trim();
    if name.is_empty() {
        return None;
    }

    if let Some((key, _)) = database.get_key_value(name) {
        return Some(FoodMatch {
            key,
            tier: MatchTier::Exact,
        });
    }

    for word in words(name).filter(|w| w.chars().count() >= MIN_EXACT_WORD_LEN) {
        if let Some((key, _)) = database.get_key_value(word) {
            return Some(FoodMatch {
                key,
                tier: MatchTier::ExactWord,
            });
        }
    }

    if name.chars().count() >= MIN_FUZZY_LEN {
        if let Some(key) = database
            .keys_by_specificity()
            .filter(|key| key.chars().count() >= MIN_FUZZY_LEN)
            .find(|key| contains_either(name, key))
        {
            return Some(FoodMatch {
                key,
                tier: MatchTier::Substring,
            });
        }
    }

    for word in words(name).filter(|w| w.chars().count() >= MIN_FUZZY_LEN) {
        if let Some(key) = database
            .keys_by_specificity()
            .filter(|key| key.chars().count() >= MIN_FUZZY_LEN)
            .find(|key| contains_either(word, key))
        {
            return Some(FoodMatch {
                key,
                tier: MatchTier::WordSubstring,
            });
        }
    }

    trace!(name, "No nutrient key matched");
    None
}

/// Canonical key for `clean_name`, or `None` when nothing matches.
pub fn match_key<'a>(database: &'a NutrientDatabase, clean_name: &str) -> Option<&'a str> {
    find_match(database, clean_name).map(|m| m.key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrient_db::NutrientProfile;

    fn fixture(keys: &[&str]) -> NutrientDatabase {
        NutrientDatabase::from_entries(keys.iter().map(|k| (*k, NutrientProfile::default())))
    }

    #[test]
    fn test_exact_match() {
        let db = fixture(&["olive oil", "oil", "salt"]);
        let m = find_match(&db, "olive oil").unwrap();
        assert_eq!(m.key, "olive oil");
        assert_eq!(m.tier, MatchTier::Exact);
    }

    #[test]
    fn test_exact_word_match() {
        let db = fixture(&["salt", "pepper"]);
        let m = find_match(&db, "salt and pepper").unwrap();
        assert_eq!(m.key, "salt");
        assert_eq!(m.tier, MatchTier::ExactWord);
    }

    #[test]
    fn test_short_words_skip_exact_word_tier() {
        let db = fixture(&["of"]);
        assert_eq!(match_key(&db, "pinch of love"), None);
    }

    #[test]
    fn test_substring_prefers_longest_key() {
        let db = fixture(&["oil", "olive oil", "extra"]);
        // "extra" is an exact word, so tier 2 wins over the substring tier.
        assert_eq!(match_key(&db, "extra virgin olive oil"), Some("extra"));

        let db = fixture(&["olive oil", "live"]);
        let m = find_match(&db, "virgin olive oil").unwrap();
        assert_eq!(m.key, "olive oil");
        assert_eq!(m.tier, MatchTier::Substring);
    }

    #[test]
    fn test_name_contained_in_key() {
        let db = fixture(&["cheddar cheese"]);
        let m = find_match(&db, "cheddar").unwrap();
        assert_eq!(m.key, "cheddar cheese");
        assert_eq!(m.tier, MatchTier::Substring);
    }

    #[test]
    fn test_word_substring_tier() {
        let db = fixture(&["carrots"]);
        let m = find_match(&db, "baby carrot sticks").unwrap();
        assert_eq!(m.key, "carrots");
        assert_eq!(m.tier, MatchTier::WordSubstring);
    }

    #[test]
    fn test_short_key_does_not_match_inside_longer_word() {
        let db = fixture(&["egg"]);
        assert_eq!(match_key(&db, "eggplant"), None);
        assert_eq!(match_key(&db, "roasted eggplant"), None);
    }

    #[test]
    fn test_no_match_and_empty_name() {
        let db = NutrientDatabase::builtin();
        assert_eq!(match_key(&db, "xyzzy unknown substance"), None);
        assert_eq!(match_key(&db, ""), None);
        assert_eq!(match_key(&db, "   "), None);
    }

    #[test]
    fn test_builtin_resolves_common_lines() {
        let db = NutrientDatabase::builtin();
        assert_eq!(match_key(&db, "flour"), Some("flour"));
        assert_eq!(match_key(&db, "ground beef"), Some("ground beef"));
        assert_eq!(match_key(&db, "boneless skinless chicken breasts"), Some("chicken"));
        assert_eq!(match_key(&db, "unsalted butter"), Some("butter"));
        assert_eq!(match_key(&db, "eggplant"), Some("eggplant"));
    }
}
