use smol_str::SmolStr;

use crate::format::directives;

/// Identifier of a playlist directive. Directives the parser does not
/// know about map to [`M3uTagId::Unrecognized`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum M3uTagId {
    ExtM3u,
    ExtXVersion,
    ExtXTargetDuration,
    ExtXMediaSequence,
    ExtXDiscontinuitySequence,
    ExtXIndependentSegments,
    ExtXPlaylistType,
    ExtXMedia,
    ExtXStreamInf,
    ExtXIFrameStreamInf,
    ExtInf,
    ExtXByteRange,
    ExtXDiscontinuity,
    ExtXKey,
    ExtXMap,
    ExtXProgramDateTime,
    ExtXEndList,
    Unrecognized,
}

impl M3uTagId {
    /// Map a directive name (as written in the source, with the leading
    /// `#`) to its identifier. Case-sensitive.
    pub fn from_directive(name: impl AsRef<str>) -> Self {
        match name.as_ref() {
            directives::EXTM3U => Self::ExtM3u,
            directives::EXT_X_VERSION => Self::ExtXVersion,
            directives::EXT_X_TARGETDURATION => Self::ExtXTargetDuration,
            directives::EXT_X_MEDIA_SEQUENCE => Self::ExtXMediaSequence,
            directives::EXT_X_DISCONTINUITY_SEQUENCE => Self::ExtXDiscontinuitySequence,
            directives::EXT_X_INDEPENDENT_SEGMENTS => Self::ExtXIndependentSegments,
            directives::EXT_X_PLAYLIST_TYPE => Self::ExtXPlaylistType,
            directives::EXT_X_MEDIA => Self::ExtXMedia,
            directives::EXT_X_STREAM_INF => Self::ExtXStreamInf,
            directives::EXT_X_I_FRAME_STREAM_INF => Self::ExtXIFrameStreamInf,
            directives::EXTINF => Self::ExtInf,
            directives::EXT_X_BYTERANGE => Self::ExtXByteRange,
            directives::EXT_X_DISCONTINUITY => Self::ExtXDiscontinuity,
            directives::EXT_X_KEY => Self::ExtXKey,
            directives::EXT_X_MAP => Self::ExtXMap,
            directives::EXT_X_PROGRAM_DATE_TIME => Self::ExtXProgramDateTime,
            directives::EXT_X_ENDLIST => Self::ExtXEndList,
            _ => Self::Unrecognized,
        }
    }
}

/// A single key/value pair from a directive's attribute list. Keys stay
/// exactly as written; duplicate keys are kept in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct M3uAttribute {
    pub key: SmolStr,
    pub value: SmolStr,
}

/// A parsed directive line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct M3uTag {
    pub id: M3uTagId,
    /// Directive name as written, including the leading `#`
    pub name: SmolStr,
    /// Raw text after the `:` separator, kept verbatim
    pub value: Option<SmolStr>,
    /// Attributes extracted from the value, in source order
    pub attributes: Vec<M3uAttribute>,
}

impl M3uTag {
    /// First attribute with the given key, in source order
    pub fn attribute(&self, key: impl AsRef<str>) -> Option<&M3uAttribute> {
        let key = key.as_ref();
        self.attributes.iter().find(|x| x.key == key)
    }
}
