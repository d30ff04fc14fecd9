use log::warn;
use url::Url;

/// Resolve a map or segment URI against the manifest's own URL. Absolute
/// input passes through normalised; anything unparseable comes back
/// unchanged with a logged warning.
pub fn resolve_segment_url(base: impl AsRef<str>, segment: impl AsRef<str>) -> String {
    let segment = segment.as_ref();

    match Url::parse(segment) {
        Ok(v) => v.to_string(),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            // relative location, join with the manifest base
            match Url::parse(base.as_ref()).and_then(|x| x.join(segment)) {
                Ok(joined_url) => joined_url.to_string(),
                Err(e) => {
                    warn!("Failed to join url {}: {}", segment, e);
                    segment.to_owned()
                }
            }
        }
        Err(another_err) => {
            warn!(
                "Failed to parse url {}, keep as-is: {}",
                segment, another_err
            );
            segment.to_owned()
        }
    }
}
