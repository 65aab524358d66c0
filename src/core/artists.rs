//! core/artists.rs
//! Turn a delimited artist field into a list, and pick the main artist.

use std::collections::HashSet;

use super::text::normalize;

/// Split `raw` on the literal delimiter, trim each piece, drop empties.
///
/// - "Daft Punk / Pharrell Williams" + "/" -> ["Daft Punk", "Pharrell Williams"]
/// - "A //  / B" + "/" -> ["A", "B"]
///
/// Fewer than two entries means there is nothing to disentangle.
pub fn split_artists(raw: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        let raw = raw.trim();
        return if raw.is_empty() { Vec::new() } else { vec![raw.to_string()] };
    }

    raw.split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Album artist first, then band, then the first split artist.
///
/// Returns an empty string only when all of them are empty/missing.
pub fn pick_main_artist(albumartist: Option<&str>, band: Option<&str>, artists: &[String]) -> String {
    [albumartist, band]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .or_else(|| artists.first().map(|s| s.trim()))
        .unwrap_or_default()
        .to_string()
}

/// De-dupe by canonical form, keeping the first spelling seen and the original order.
/// Names that fold to nothing are dropped.
pub fn unique_keep_order<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());

    for name in names {
        let name = name.as_ref();
        let key = normalize(name);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        out.push(name.to_string());
    }

    out
}
