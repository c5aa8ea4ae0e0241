//! Card name to EDHREC page slug conversion.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a card name into the slug EDHREC uses for its card pages.
///
/// Lowercases, turns spaces into hyphens, drops commas, apostrophes and
/// periods, and strips diacritics by NFD-decomposing and removing the
/// combining marks.
///
/// ```
/// use deckstats::slug::card_slug;
///
/// assert_eq!(card_slug("Jace, the Mind Sculptor"), "jace-the-mind-sculptor");
/// assert_eq!(card_slug("Séance"), "seance");
/// ```
pub fn card_slug(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !matches!(c, ',' | '\'' | '\u{2019}' | '.'))
        .flat_map(char::to_lowercase)
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}
