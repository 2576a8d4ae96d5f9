//! Song embeds derived from user-supplied music links.

use url::Url;

/// Query appended to every embed; keeps playback user-initiated.
const EMBED_QUERY: &str = "utm_source=generator&theme=0&autoplay=0";

/// An embeddable player reference for a `/<type>/<id>` music link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongEmbed {
    /// Resource kind from the link path (track, album, playlist, ...)
    pub kind: String,
    /// Resource id from the link path
    pub id: String,
    /// Player URL for an iframe src
    pub url: String,
}

impl SongEmbed {
    /// Derive an embed from a link such as `https://open.spotify.com/track/abc123`.
    ///
    /// Returns `None` for anything that is not an http(s) URL with at least
    /// two path segments. A leading locale segment (`intl-de`) is skipped.
    pub fn from_link(link: &str, embed_base: &str) -> Option<Self> {
        let parsed = Url::parse(link.trim()).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }

        let mut segments = parsed
            .path_segments()?
            .filter(|s| !s.is_empty())
            .skip_while(|s| s.starts_with("intl-"));
        let kind = segments.next()?;
        let id = segments.next()?;
        if !is_path_token(kind) || !is_path_token(id) {
            return None;
        }

        let mut url = Url::parse(embed_base).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().push(kind).push(id);
        url.set_query(Some(EMBED_QUERY));

        Some(Self {
            kind: kind.to_string(),
            id: id.to_string(),
            url: url.to_string(),
        })
    }

    pub fn autoplay_disabled(&self) -> bool {
        self.url.contains("autoplay=0")
    }
}

fn is_path_token(segment: &str) -> bool {
    segment
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://open.spotify.com/embed";

    #[test]
    fn test_track_link() {
        let embed = SongEmbed::from_link("https://open.spotify.com/track/abc123", BASE).unwrap();
        assert_eq!(embed.kind, "track");
        assert_eq!(embed.id, "abc123");
        assert_eq!(
            embed.url,
            "https://open.spotify.com/embed/track/abc123?utm_source=generator&theme=0&autoplay=0"
        );
        assert!(embed.autoplay_disabled());
    }

    #[test]
    fn test_playlist_with_share_query() {
        let embed =
            SongEmbed::from_link("https://open.spotify.com/playlist/37i9dQ?si=xyz", BASE).unwrap();
        assert_eq!(embed.kind, "playlist");
        assert_eq!(embed.id, "37i9dQ");
        assert!(!embed.url.contains("si=xyz"));
    }

    #[test]
    fn test_locale_prefix_skipped() {
        let embed =
            SongEmbed::from_link("https://open.spotify.com/intl-de/album/xyz789", BASE).unwrap();
        assert_eq!(embed.kind, "album");
        assert_eq!(embed.id, "xyz789");
    }

    #[test]
    fn test_unembeddable_links() {
        assert!(SongEmbed::from_link("https://example.com/", BASE).is_none());
        assert!(SongEmbed::from_link("https://example.com/track", BASE).is_none());
        assert!(SongEmbed::from_link("not a url", BASE).is_none());
        assert!(SongEmbed::from_link("", BASE).is_none());
        assert!(SongEmbed::from_link("ftp://host/track/abc", BASE).is_none());
        assert!(SongEmbed::from_link("https://host/track/a%22b", BASE).is_none());
    }
}
