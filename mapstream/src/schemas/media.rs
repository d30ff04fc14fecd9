use serde::Deserialize;

/// Composite document wrapping a single video and its related metadata
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DmcVideoBundle {
    pub video: Option<DmcVideo>,
}

impl DmcVideoBundle {
    /// First playback (manifest) URL of the wrapped video, when the
    /// platform provided one
    pub fn playback_url(&self) -> Option<&str> {
        self.video
            .as_ref()?
            .media_metadata
            .as_ref()?
            .playback_urls
            .first()?
            .href
            .as_deref()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DmcVideo {
    pub content_id: Option<String>,
    pub internal_title: Option<String>,
    pub media_metadata: Option<MediaMetadata>,
    #[serde(default)]
    pub milestone: Vec<Milestone>,
    pub current_availability: Option<CurrentAvailability>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaMetadata {
    pub active_aspect_ratio: Option<f64>,
    #[serde(default)]
    pub audio_tracks: Vec<AudioTrack>,
    #[serde(default)]
    pub captions: Vec<AudioTrack>,
    #[serde(default)]
    pub facets: Vec<Facet>,
    pub format: Option<String>,
    pub media_id: Option<String>,
    pub phase: Option<String>,
    #[serde(default)]
    pub playback_urls: Vec<PlaybackUrl>,
    pub product_type: Option<String>,
    pub runtime_millis: Option<i64>,
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTrack {
    pub language: Option<String>,
    pub name: Option<String>,
    pub track_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackUrl {
    pub rel: Option<String>,
    pub href: Option<String>,
    #[serde(default)]
    pub templated: bool,
    #[serde(default)]
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facet {
    pub active_aspect_ratio: Option<f64>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentAvailability {
    pub region: Option<String>,
    pub kids_mode: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: Option<String>,
    #[serde(default)]
    pub milestone_time: Vec<MilestoneTime>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneTime {
    pub start_millis: Option<i64>,
    #[serde(rename = "type")]
    pub milestone_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::schemas::DmcVideoBundle;

    #[test]
    fn test_bundle_surfaces_playback_url() {
        let bundle: DmcVideoBundle = serde_json::from_str(
            r#"{
                "video": {
                    "contentId": "abc-123",
                    "internalTitle": "example_title",
                    "mediaMetadata": {
                        "activeAspectRatio": 1.78,
                        "audioTracks": [ { "language": "en", "trackType": "primary" } ],
                        "playbackUrls": [
                            {
                                "rel": "playback",
                                "href": "https://x/r/main.m3u8",
                                "params": [ { "name": "scenario" } ]
                            }
                        ],
                        "runtimeMillis": 5400000,
                        "type": "video"
                    },
                    "milestone": [
                        {
                            "id": "m-1",
                            "milestoneTime": [ { "startMillis": 0, "type": "offset" } ]
                        }
                    ],
                    "currentAvailability": { "region": "US", "kidsMode": false }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(bundle.playback_url(), Some("https://x/r/main.m3u8"));

        let video = bundle.video.as_ref().unwrap();
        assert_eq!(video.content_id.as_deref(), Some("abc-123"));
        assert_eq!(video.milestone.len(), 1);
        assert_eq!(
            video.current_availability.as_ref().unwrap().region.as_deref(),
            Some("US")
        );
    }

    #[test]
    fn test_bundle_without_playback_urls() {
        let bundle: DmcVideoBundle = serde_json::from_str(r#"{ "video": {} }"#).unwrap();
        assert_eq!(bundle.playback_url(), None);
    }
}
