//! Item code generation.
//!
//! Codes have the form `SCHOOL-CAT-NN`: a school abbreviation, a category
//! abbreviation, and the item's 1-based position in the school's
//! submission (`"SIA-PRI-01"`). The scheduler treats codes as opaque.

use crate::models::{LOWER_PRIMARY, PRE_PRIMARY, PRIMARY};

/// Abbreviation used when a school or category cannot be abbreviated.
pub const UNKNOWN_ABBREVIATION: &str = "UNK";

/// Collapses internal whitespace and trims (`"  St  Mary "` → `"St Mary"`).
pub fn normalize_school_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Abbreviates a school name.
///
/// One word: its first three characters. Several words: the first two
/// characters of the first word plus the initial of each following word,
/// capped at four characters. Uppercased.
///
/// ```
/// use event_program::codes::school_abbreviation;
///
/// assert_eq!(school_abbreviation("Sisoni Academy"), "SIA");
/// assert_eq!(school_abbreviation("Spring Academy"), "SPA");
/// assert_eq!(school_abbreviation("Riverside"), "RIV");
/// ```
pub fn school_abbreviation(school_name: &str) -> String {
    let words: Vec<&str> = school_name.split_whitespace().collect();
    let Some((first, rest)) = words.split_first() else {
        return UNKNOWN_ABBREVIATION.to_string();
    };

    if rest.is_empty() {
        return first.chars().take(3).collect::<String>().to_uppercase();
    }

    let mut abbr: String = first.chars().take(2).collect();
    abbr.extend(rest.iter().filter_map(|w| w.chars().next()));
    abbr.chars().take(4).collect::<String>().to_uppercase()
}

/// Abbreviates a school category (`"UNK"` for unknown categories).
pub fn category_abbreviation(category: &str) -> &'static str {
    match category {
        PRE_PRIMARY => "PPR",
        LOWER_PRIMARY => "LPR",
        PRIMARY => "PRI",
        _ => UNKNOWN_ABBREVIATION,
    }
}

/// Builds the code of the `item_number`-th item (1-based) of a submission.
///
/// ```
/// use event_program::codes::item_code;
///
/// assert_eq!(item_code("Sisoni Academy", "Primary", 1), "SIA-PRI-01");
/// assert_eq!(item_code("Riverside", "Lower Primary", 12), "RIV-LPR-12");
/// ```
pub fn item_code(school_name: &str, category: &str, item_number: usize) -> String {
    format!(
        "{}-{}-{:02}",
        school_abbreviation(school_name),
        category_abbreviation(category),
        item_number
    )
}
