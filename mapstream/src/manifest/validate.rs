use manifeststream_rs::format::{M3uItem, M3uTagId};

use crate::manifest::parse_playlist;

/// Verify a manifest (master or content) is well-formed enough to work
/// with: the first parsed item must be the `#EXTM3U` marker. Anything
/// else, including empty input or a failed parse, is not valid.
pub fn manifest_valid(playlist: impl AsRef<str>) -> bool {
    let playlist = playlist.as_ref();
    if playlist.trim().is_empty() {
        return false;
    }

    match parse_playlist(playlist) {
        Some(parsed) => match parsed.items.first() {
            Some(M3uItem::Tag(tag)) => tag.id == M3uTagId::ExtM3u,
            _ => false,
        },
        None => false,
    }
}
