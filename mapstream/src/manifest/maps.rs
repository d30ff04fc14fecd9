use log::debug;
use manifeststream_rs::format::{M3uTagId, directives};

use crate::manifest::parse_playlist;

/// List every MPEG-4 initialisation segment (map) URL in the manifest, in
/// document order. `None` means no usable playlist at all, as opposed to
/// `Some` of an empty list when the playlist simply carries no map tags.
pub fn all_map_urls(playlist: impl AsRef<str>) -> Option<Vec<String>> {
    let playlist = playlist.as_ref();
    if playlist.trim().is_empty() {
        debug!("Null or empty playlist supplied; couldn't find list of map URLs");
        return None;
    }

    let parsed = match parse_playlist(playlist) {
        Some(parsed) => parsed,
        None => {
            debug!("Null playlist parse result; couldn't find map URL");
            return None;
        }
    };

    let mut map_list = Vec::new();
    for tag in parsed.tags() {
        if tag.id != M3uTagId::ExtXMap {
            continue;
        }

        // only the first URI attribute counts, even when duplicated; a
        // map tag without one contributes nothing
        if let Some(attribute) = tag.attribute(directives::URI_ATTRIBUTE) {
            map_list.push(attribute.value.to_string());
        }
    }

    Some(map_list)
}

#[cfg(test)]
mod tests {
    use crate::manifest::all_map_urls;

    #[test]
    fn test_empty_input_yields_none() {
        assert!(all_map_urls("").is_none());
        assert!(all_map_urls("  \n\t ").is_none());
    }

    #[test]
    fn test_no_map_tags_yields_empty_list() {
        let result = all_map_urls("#EXTM3U\n#EXT-X-VERSION:6").unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let result = all_map_urls(
            r#"
#EXTM3U
#EXT-X-VERSION:6
#EXT-X-MAP:URI="A"
#EXTINF:6.00000000,
segment-1.m4s
#EXT-X-MAP:URI="B"
#EXTINF:6.00000000,
segment-2.m4s
#EXT-X-MAP:URI="C"
"#,
        )
        .unwrap();

        assert_eq!(result, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_first_uri_attribute_wins() {
        let result = all_map_urls("#EXTM3U\n#EXT-X-MAP:URI=\"a.mp4\",URI=\"b.mp4\"").unwrap();
        assert_eq!(result, vec!["a.mp4"]);
    }

    #[test]
    fn test_map_without_uri_is_skipped() {
        let result = all_map_urls(
            r#"
#EXTM3U
#EXT-X-MAP:BYTERANGE="720@0"
#EXT-X-MAP:URI="main/init.mp4"
"#,
        )
        .unwrap();

        assert_eq!(result, vec!["main/init.mp4"]);
    }
}
