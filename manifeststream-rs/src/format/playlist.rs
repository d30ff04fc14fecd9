use smol_str::SmolStr;

use crate::format::M3uTag;

/// One line of a parsed playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum M3uItem {
    /// A directive line
    Tag(M3uTag),
    /// Any non-directive line, e.g. a segment location, kept verbatim
    Line(SmolStr),
}

/// A parsed playlist: its items in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct M3uPlaylist {
    pub items: Vec<M3uItem>,
}

impl M3uPlaylist {
    /// Tags of this playlist, in document order
    pub fn tags(&self) -> impl Iterator<Item = &M3uTag> {
        self.items.iter().filter_map(|x| match x {
            M3uItem::Tag(tag) => Some(tag),
            M3uItem::Line(_) => None,
        })
    }
}
