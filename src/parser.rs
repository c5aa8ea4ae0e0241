//! Deck list parsing.
//!
//! Accepts MTGO-style deck lists (`"1 Sol Ring"` per line) and extracts the
//! card name from each line. Quantities and leading punctuation are dropped;
//! set codes and casing after the first letter are kept as-is.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CARD_NAME: Regex = Regex::new(r"[A-Za-z].*").unwrap();
}

/// Extract the ordered list of card names from a raw deck list.
///
/// Lines without any ASCII letter (blank lines, bare quantities) are skipped.
/// Duplicate names are kept so each one is fetched on its own.
///
/// ```
/// use deckstats::parser::parse_deck_list;
///
/// let names = parse_deck_list("1 Sol Ring\n\n2 Counterspell");
/// assert_eq!(names, vec!["Sol Ring", "Counterspell"]);
/// ```
pub fn parse_deck_list(deck_list: &str) -> Vec<String> {
    deck_list
        .split('\n')
        .filter_map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            CARD_NAME.find(line).map(|m| m.as_str().to_string())
        })
        .collect()
}
