//! Embed-URL resolution for click-to-play video cards.
//!
//! Given the raw URL a site owner pasted into `content.json`, figure out
//! which of the three supported hosts it belongs to and build the URL that
//! plays the video inside a plain iframe, with no provider script API and
//! no keys.
//!
//! ## Provider Detection
//!
//! Hosts are tested in a fixed order (YouTube, then Vimeo, then Google
//! Drive) and the first match wins. A URL no provider claims resolves to
//! `None`, which downstream renders as an inert card. Resolution never
//! errors and never panics; every failure mode is `None`.
//!
//! ## Two-Stage Id Extraction
//!
//! People paste URLs in every state of repair, so YouTube ids are extracted
//! in two independent stages:
//!
//! 1. **Structured**: parse with the `url` crate and read the id from the
//!    hostname + path + query (`watch?v=ID`, `youtu.be/ID`, `/embed/ID`,
//!    `/shorts/ID`).
//! 2. **Pattern**: if structured parsing yields nothing (schemeless paste,
//!    stray whitespace, surrounding text), scan for the same four shapes
//!    loosely embedded anywhere in the string.
//!
//! Both stages are pure; a `url::ParseError` is swallowed, never
//! propagated. Vimeo and Drive ids have a single unambiguous shape each and
//! use the pattern stage only.
//!
//! ## Player Parameters
//!
//! Query parameters on the embed URLs are fixed constants, not
//! user-configurable: inline playback, no related-video suggestions,
//! minimal branding for YouTube; do-not-track and title/byline/portrait
//! suppression for Vimeo.

use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Supported video hosts, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    YouTube,
    Vimeo,
    Drive,
}

impl Provider {
    /// Short lowercase name for CLI display.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::YouTube => "youtube",
            Provider::Vimeo => "vimeo",
            Provider::Drive => "drive",
        }
    }
}

// Inline playback, no related videos, minimal branding / do-not-track,
// no title/byline/portrait overlay.
const YOUTUBE_PARAMS: &str = "playsinline=1&rel=0&modestbranding=1";
const VIMEO_PARAMS: &str = "dnt=1&title=0&byline=0&portrait=0";

/// Detect which provider a raw URL belongs to. First match wins.
pub fn detect(raw: &str) -> Option<Provider> {
    if raw.contains("youtube.com") || raw.contains("youtu.be") {
        Some(Provider::YouTube)
    } else if raw.contains("vimeo.com") {
        Some(Provider::Vimeo)
    } else if raw.contains("drive.google.com") {
        Some(Provider::Drive)
    } else {
        None
    }
}

/// Resolve a raw video URL to an embeddable iframe URL.
///
/// `None` means unsupported provider or no extractable id; the caller
/// renders the card without a playback target.
pub fn embed_url(raw: &str) -> Option<String> {
    match detect(raw)? {
        Provider::YouTube => youtube_id(raw)
            .map(|id| format!("https://www.youtube.com/embed/{id}?{YOUTUBE_PARAMS}")),
        Provider::Vimeo => vimeo_id(raw)
            .map(|id| format!("https://player.vimeo.com/video/{id}?{VIMEO_PARAMS}")),
        Provider::Drive => {
            drive_id(raw).map(|id| format!("https://drive.google.com/file/d/{id}/preview"))
        }
    }
}

// ============================================================================
// YouTube
// ============================================================================

fn youtube_id(raw: &str) -> Option<String> {
    youtube_id_structured(raw).or_else(|| youtube_id_pattern(raw))
}

/// Stage 1: structured extraction via URL parsing.
fn youtube_id_structured(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw).ok()?;
    let host = parsed.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host == "youtu.be" {
        return parsed
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|id| !id.is_empty())
            .map(str::to_string);
    }

    if host == "youtube.com" || host.ends_with(".youtube.com") {
        let path = parsed.path();
        if path.starts_with("/watch") {
            return parsed
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())
                .filter(|id| !id.is_empty());
        }
        if let Some(rest) = path
            .strip_prefix("/embed/")
            .or_else(|| path.strip_prefix("/shorts/"))
        {
            let id = rest.split('/').next().unwrap_or_default();
            if !id.is_empty() {
                return Some(id.to_string());
            }
        }
    }

    None
}

/// Stage 2: pattern scan for any of the four URL shapes embedded loosely in
/// the string. Ids are at least 6 chars of `[A-Za-z0-9_-]`.
fn youtube_id_pattern(raw: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?:[?&]v=|youtu\.be/|/embed/|/shorts/)([A-Za-z0-9_-]{6,})")
            .expect("pattern compiles")
    });
    re.captures(raw).map(|caps| caps[1].to_string())
}

// ============================================================================
// Vimeo
// ============================================================================

/// Extract the numeric id from `vimeo.com/ID`, `vimeo.com/video/ID`, or
/// `player.vimeo.com/video/ID`.
fn vimeo_id(raw: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?:vimeo\.com/(?:video/)?|player\.vimeo\.com/video/)(\d+)")
            .expect("pattern compiles")
    });
    re.captures(raw).map(|caps| caps[1].to_string())
}

// ============================================================================
// Google Drive
// ============================================================================

/// Extract the file id from the path segment following `/d/`.
fn drive_id(raw: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE
        .get_or_init(|| Regex::new(r"/d/([A-Za-z0-9_-]+)").expect("pattern compiles"));
    re.captures(raw).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // YouTube — structured stage
    // =========================================================================

    #[test]
    fn youtube_watch_url() {
        let embed = embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert!(embed.starts_with("https://www.youtube.com/embed/dQw4w9WgXcQ?"));
        assert!(embed.contains("playsinline=1"));
        assert!(embed.contains("rel=0"));
        assert!(embed.contains("modestbranding=1"));
    }

    #[test]
    fn youtube_short_link() {
        let embed = embed_url("https://youtu.be/dQw4w9WgXcQ").unwrap();
        assert!(embed.contains("/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn youtube_embed_path() {
        let embed = embed_url("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap();
        assert!(embed.contains("/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn youtube_shorts_path() {
        let embed = embed_url("https://www.youtube.com/shorts/dQw4w9WgXcQ").unwrap();
        assert!(embed.contains("/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn youtube_bare_host() {
        let embed = embed_url("https://youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert!(embed.contains("/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn youtube_mobile_host() {
        let embed = embed_url("https://m.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert!(embed.contains("/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn youtube_watch_with_extra_params() {
        let embed = embed_url("https://www.youtube.com/watch?t=42&v=dQw4w9WgXcQ&list=PL1").unwrap();
        assert!(embed.contains("/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn youtube_watch_without_id() {
        assert_eq!(embed_url("https://www.youtube.com/watch"), None);
    }

    #[test]
    fn youtube_short_link_without_path() {
        assert_eq!(embed_url("https://youtu.be/"), None);
    }

    // =========================================================================
    // YouTube — pattern fallback
    // =========================================================================

    #[test]
    fn youtube_schemeless_paste_falls_back_to_pattern() {
        // Url::parse rejects a relative URL; the pattern stage still finds it.
        let embed = embed_url("youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert!(embed.contains("/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn youtube_surrounded_by_text_falls_back_to_pattern() {
        let embed = embed_url("check this youtu.be/dQw4w9WgXcQ sometime").unwrap();
        assert!(embed.contains("/embed/dQw4w9WgXcQ"));
    }

    #[test]
    fn pattern_stage_requires_six_id_chars() {
        // "abc" is too short for the loose scan, and the string is not a
        // parseable URL, so both stages miss.
        assert_eq!(embed_url("youtu.be/abc"), None);
    }

    #[test]
    fn structured_stage_accepts_short_ids() {
        // A well-formed URL carries whatever id it carries.
        let embed = embed_url("https://youtu.be/abc").unwrap();
        assert!(embed.contains("/embed/abc?"));
    }

    #[test]
    fn detection_order_prefers_youtube() {
        let embed = embed_url("https://youtu.be/dQw4w9WgXcQ?from=vimeo.com").unwrap();
        assert!(embed.starts_with("https://www.youtube.com/embed/"));
    }

    // =========================================================================
    // Vimeo
    // =========================================================================

    #[test]
    fn vimeo_plain_url() {
        let embed = embed_url("https://vimeo.com/76979871").unwrap();
        assert!(embed.starts_with("https://player.vimeo.com/video/76979871?"));
        assert!(embed.contains("dnt=1"));
        assert!(embed.contains("title=0"));
        assert!(embed.contains("byline=0"));
        assert!(embed.contains("portrait=0"));
    }

    #[test]
    fn vimeo_video_path() {
        let embed = embed_url("https://vimeo.com/video/76979871").unwrap();
        assert!(embed.contains("/video/76979871"));
    }

    #[test]
    fn vimeo_player_url() {
        let embed = embed_url("https://player.vimeo.com/video/76979871").unwrap();
        assert!(embed.contains("/video/76979871"));
    }

    #[test]
    fn vimeo_without_numeric_id() {
        assert_eq!(embed_url("https://vimeo.com/about"), None);
    }

    // =========================================================================
    // Google Drive
    // =========================================================================

    #[test]
    fn drive_view_url() {
        assert_eq!(
            embed_url("https://drive.google.com/file/d/1A2B3c/view").as_deref(),
            Some("https://drive.google.com/file/d/1A2B3c/preview")
        );
    }

    #[test]
    fn drive_id_with_underscore_and_dash() {
        assert_eq!(
            embed_url("https://drive.google.com/file/d/a_b-C9/view?usp=sharing").as_deref(),
            Some("https://drive.google.com/file/d/a_b-C9/preview")
        );
    }

    #[test]
    fn drive_without_file_segment() {
        assert_eq!(embed_url("https://drive.google.com/drive/my-drive"), None);
    }

    // =========================================================================
    // Unsupported input
    // =========================================================================

    #[test]
    fn unrelated_host_is_unsupported() {
        assert_eq!(embed_url("https://example.com/not-a-video"), None);
    }

    #[test]
    fn empty_string_is_unsupported() {
        assert_eq!(embed_url(""), None);
    }

    #[test]
    fn garbage_never_panics() {
        for raw in ["http://", "://youtube.com", "youtube.com", "\u{0}vimeo.com/\u{0}"] {
            let _ = embed_url(raw);
        }
    }

    #[test]
    fn detect_names() {
        assert_eq!(detect("https://youtu.be/x"), Some(Provider::YouTube));
        assert_eq!(detect("https://vimeo.com/1"), Some(Provider::Vimeo));
        assert_eq!(
            detect("https://drive.google.com/file/d/x/view"),
            Some(Provider::Drive)
        );
        assert_eq!(detect("https://example.com"), None);
        assert_eq!(Provider::YouTube.name(), "youtube");
    }
}
