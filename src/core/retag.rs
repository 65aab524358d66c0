//! core/retag.rs
//!
//! The decision engine.
//! - [`decide`] is pure: tags in, proposal (or nothing) out.
//! - [`process_file`] wraps it with the tag store: read, decide, maybe write.

use std::path::Path;

use super::artists::{pick_main_artist, split_artists, unique_keep_order};
use super::error::RetagError;
use super::tags::TagStore;
use super::text::{has_feat_in_title, looks_like_remixer_in_title, normalize};
use super::types::{ChangeResult, Proposal, RawTagSnapshot, RetagConfig, TagUpdate};

/// Work out the new artist/title for one file's tags.
///
/// Returns `None` when there is nothing to do:
/// - artist missing, or without the delimiter, or fewer than two artists
/// - no main artist could be picked
/// - the composed artist/title equal the current ones
pub fn decide(tags: &RawTagSnapshot, filename_stem: &str, config: &RetagConfig) -> Option<Proposal> {
    let old_artist = tags.artist.as_deref().map(str::trim).unwrap_or_default();
    if old_artist.is_empty() || config.delimiter.is_empty() || !old_artist.contains(&config.delimiter) {
        return None;
    }

    let artists = split_artists(old_artist, &config.delimiter);
    if artists.len() < 2 {
        return None;
    }

    let old_title = tags
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| filename_stem.trim());

    let main = pick_main_artist(tags.albumartist.as_deref(), tags.band.as_deref(), &artists);
    if main.is_empty() {
        return None;
    }

    // Everyone except the main artist, once each.
    let main_key = normalize(&main);
    let others: Vec<&String> = artists.iter().filter(|a| normalize(a) != main_key).collect();
    let others = unique_keep_order(&others);

    // A name sitting right before "remix" is a remixer credit, not a guest.
    let (remixers, featured): (Vec<String>, Vec<String>) = others
        .into_iter()
        .partition(|a| looks_like_remixer_in_title(old_title, a));

    let new_title = if !featured.is_empty() && !has_feat_in_title(old_title) {
        format!("{old_title} (ft. {})", featured.join(", "))
    } else {
        old_title.to_string()
    };

    // Even with no guests left, the artist field still collapses to the main artist.
    let new_artist = main;

    if new_artist == old_artist && new_title == old_title {
        return None;
    }

    Some(Proposal {
        old_artist: old_artist.to_string(),
        new_artist,
        old_title: old_title.to_string(),
        new_title,
        featured,
        remixers,
    })
}

/// Run the engine over one file.
///
/// - `Ok(None)`: scanned, nothing to change
/// - `Ok(Some(r))` with `r.error` set: file unreadable as a tag container
/// - `Ok(Some(r))` with `r.changed`: change proposed (and written if `config.write`)
/// - `Err(RetagError::Persist)`: the write itself failed
pub fn process_file<S: TagStore + ?Sized>(
    store: &S,
    path: &Path,
    config: &RetagConfig,
) -> Result<Option<ChangeResult>, RetagError> {
    let tags = match store.ensure_header(path).and_then(|()| store.read(path)) {
        Ok(tags) => tags,
        Err(e) => {
            log::warn!("{}: couldn't read tags: {e}", path.display());
            return Ok(Some(ChangeResult::failed(path.to_path_buf(), e)));
        }
    };

    let stem = filename_stem(path);
    let Some(proposal) = decide(&tags, &stem, config) else {
        log::trace!("{}: nothing to change", path.display());
        return Ok(None);
    };

    if !proposal.remixers.is_empty() {
        log::debug!(
            "{}: treating {} as remixer credit(s)",
            path.display(),
            proposal.remixers.join(", ")
        );
    }

    if config.write {
        let update = TagUpdate {
            artist: proposal.new_artist.clone(),
            title: proposal.new_title.clone(),
            albumartist: config
                .set_albumartist
                .then(|| proposal.new_artist.clone()),
        };
        store.write(path, &update)?;
        log::debug!("{}: tags written", path.display());
    }

    Ok(Some(ChangeResult::from_proposal(path.to_path_buf(), proposal)))
}

/// File name without extension, used as the title fallback.
/// Ex: 'song.mp3' -> 'song'
pub fn filename_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
