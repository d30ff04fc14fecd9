//! Directive names recognised by the parser

/// Every directive line starts with this prefix
pub const TAG_PREFIX: char = '#';

pub const EXTM3U: &str = "#EXTM3U";
pub const EXT_X_VERSION: &str = "#EXT-X-VERSION";
pub const EXT_X_TARGETDURATION: &str = "#EXT-X-TARGETDURATION";
pub const EXT_X_MEDIA_SEQUENCE: &str = "#EXT-X-MEDIA-SEQUENCE";
pub const EXT_X_DISCONTINUITY_SEQUENCE: &str = "#EXT-X-DISCONTINUITY-SEQUENCE";
pub const EXT_X_INDEPENDENT_SEGMENTS: &str = "#EXT-X-INDEPENDENT-SEGMENTS";
pub const EXT_X_PLAYLIST_TYPE: &str = "#EXT-X-PLAYLIST-TYPE";
pub const EXT_X_MEDIA: &str = "#EXT-X-MEDIA";
pub const EXT_X_STREAM_INF: &str = "#EXT-X-STREAM-INF";
pub const EXT_X_I_FRAME_STREAM_INF: &str = "#EXT-X-I-FRAME-STREAM-INF";
pub const EXTINF: &str = "#EXTINF";
pub const EXT_X_BYTERANGE: &str = "#EXT-X-BYTERANGE";
pub const EXT_X_DISCONTINUITY: &str = "#EXT-X-DISCONTINUITY";
pub const EXT_X_KEY: &str = "#EXT-X-KEY";
pub const EXT_X_MAP: &str = "#EXT-X-MAP";
pub const EXT_X_PROGRAM_DATE_TIME: &str = "#EXT-X-PROGRAM-DATE-TIME";
pub const EXT_X_ENDLIST: &str = "#EXT-X-ENDLIST";

/// Attribute key carrying a resource location, e.g. on `#EXT-X-MAP`
pub const URI_ATTRIBUTE: &str = "URI";
