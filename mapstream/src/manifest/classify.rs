use crate::manifest::all_map_urls;

/// URL path marker of the branded intro (bumper) segments
pub const BUMPER_MARKER: &str = "-BUMPER/";

/// URL path marker of localisation dub-card segments
pub const DUB_CARD_MARKER: &str = "DUB_CARD";

/// A segment URL counts as main content when it carries neither the
/// bumper nor the dub-card marker. Case-sensitive, no normalisation.
pub fn valid_segment_url(url: impl AsRef<str>) -> bool {
    let url = url.as_ref();

    // any marker match is an instant false
    !url.contains(BUMPER_MARKER) && !url.contains(DUB_CARD_MARKER)
}

/// First map URL belonging to the main content, or an empty string when
/// the manifest yields nothing usable.
pub fn main_map_url(playlist: impl AsRef<str>) -> String {
    match all_map_urls(playlist) {
        Some(map_list) => map_list
            .into_iter()
            .find(|url| valid_segment_url(url))
            .unwrap_or_default(),
        None => String::new(),
    }
}

/// First map URL belonging to the intro bumper, or an empty string when
/// the manifest carries none.
pub fn bumper_map_url(playlist: impl AsRef<str>) -> String {
    match all_map_urls(playlist) {
        Some(map_list) => map_list
            .into_iter()
            .find(|url| url.contains(BUMPER_MARKER))
            .unwrap_or_default(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::manifest::{bumper_map_url, main_map_url, valid_segment_url};

    const PLAYLIST: &str = r#"
#EXTM3U
#EXT-X-VERSION:6
#EXT-X-MAP:URI="https://x/seg-BUMPER/init.mp4"
#EXTINF:4.00000000,
https://x/seg-BUMPER/segment-1.m4s
#EXT-X-MAP:URI="https://x/main/init.mp4"
#EXTINF:6.00000000,
https://x/main/segment-1.m4s
"#;

    #[test]
    fn test_valid_segment_url() {
        assert!(valid_segment_url("https://x/main/init.mp4"));
        assert!(!valid_segment_url("https://x/seg-BUMPER/init.mp4"));
        assert!(!valid_segment_url("https://x/seg_DUB_CARD_1/init.mp4"));
        // case-sensitive on purpose
        assert!(valid_segment_url("https://x/seg-bumper/init.mp4"));
    }

    #[test]
    fn test_main_map_skips_bumper() {
        assert_eq!(main_map_url(PLAYLIST), "https://x/main/init.mp4");
    }

    #[test]
    fn test_bumper_map_selected() {
        assert_eq!(bumper_map_url(PLAYLIST), "https://x/seg-BUMPER/init.mp4");
    }

    #[test]
    fn test_empty_input_yields_sentinel() {
        assert_eq!(main_map_url(""), "");
        assert_eq!(bumper_map_url("  \n "), "");
    }

    #[test]
    fn test_dub_card_reaches_neither_selector() {
        let playlist = "#EXTM3U\n#EXT-X-MAP:URI=\"https://x/seg_DUB_CARD_1/init.mp4\"";
        assert_eq!(main_map_url(playlist), "");
        assert_eq!(bumper_map_url(playlist), "");
    }
}
