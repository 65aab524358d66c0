//! core/text.rs
//! Comparison-only text folding plus the two title heuristics built on it.
//!
//! Nothing produced by [`normalize`] is ever written back to a file.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Maximal runs of anything that isn't a lowercase ASCII letter or digit.
static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// "(ft. X)", "(feat. X, Y)", "(Featuring X)" anywhere in a title.
static FEAT_IN_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\((?:ft\.|feat\.|featuring)\s+.+?\)").unwrap());

/// How many words before "remix" may hold a remixer name.
const REMIX_WINDOW: usize = 6;

/// Fold a string to its canonical comparison form.
///
/// NFKD, drop combining marks, lowercase, every run of non `[a-z0-9]` becomes
/// one space, trimmed. "Beyoncé & Jay-Z" -> "beyonce jay z".
pub fn normalize(s: &str) -> String {
    let folded: String = s
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    // to_lowercase keeps 'ß'; full case folding maps it to "ss".
    let folded = folded.replace('ß', "ss");

    let spaced = NON_ALNUM.replace_all(&folded, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True if the title already carries a "(ft. ...)"-style annotation.
pub fn has_feat_in_title(title: &str) -> bool {
    FEAT_IN_TITLE.is_match(title)
}

/// True if `artist_name` shows up in the title *as a remixer*,
/// i.e. within the few words right before the first "remix".
///
/// Caught:
/// - "Song (Zedd Remix)"
/// - "Tiësto's Club Life Remix"
/// - "Song (Skrillex & Zedd Remix)"
///
/// Only the first "remix" is looked at.
pub fn looks_like_remixer_in_title(title: &str, artist_name: &str) -> bool {
    let artist = normalize(artist_name);
    if artist.is_empty() {
        return false;
    }

    let title = normalize(title);
    let words: Vec<&str> = title.split(' ').collect();

    let Some(remix_i) = words.iter().position(|w| *w == "remix") else {
        return false;
    };

    let window = words[remix_i.saturating_sub(REMIX_WINDOW)..remix_i].join(" ");
    window.contains(&artist)
}
