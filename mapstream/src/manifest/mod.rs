mod classify;
mod maps;
mod urls;
mod validate;
pub use classify::*;
pub use maps::*;
pub use urls::*;
pub use validate::*;

use std::io::Cursor;

use log::warn;
use manifeststream_rs::{Parser, format::M3uPlaylist};

/// Parse manifest text into a playlist, or `None` with a logged note when
/// the parser cannot produce one. Never propagates an error.
pub(crate) fn parse_playlist(playlist: impl AsRef<str>) -> Option<M3uPlaylist> {
    let mut parser = Parser::new(Cursor::new(playlist.as_ref().to_owned()));
    if let Err(e) = parser.parse() {
        warn!("Playlist parse error: {}", e);
        return None;
    }

    Some(parser.get_result())
}
