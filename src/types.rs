//! Resolved display values, serialized between the load and generate stages.
//!
//! Everything here is post-defaulting: no field is optional unless the page
//! genuinely renders nothing for it (an unsupported video's embed target, a
//! graphic without a caption). The generate stage consumes these types
//! verbatim and never applies policy of its own.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

/// The manifest written by `load` and consumed by `generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub site: ResolvedSite,
    pub config: SiteConfig,
}

/// Fully default-filled display values for the whole page.
///
/// The footer year is deliberately absent: it is computed fresh at generate
/// time, never stored, so a stale manifest cannot pin the page to the year
/// it was resolved in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSite {
    /// Document title: `"{brand} — Portfolio"` or plain `"Portfolio"`.
    pub title: String,
    pub brand: String,
    pub avatar: String,
    pub cover: String,
    pub taglines: Vec<String>,
    /// Present links only; an absent platform has no element at all.
    pub socials: Vec<SocialLink>,
    /// Raw markdown; rendered to HTML at generate time.
    pub bio: String,
    pub videos: Vec<VideoCard>,
    pub graphics: Vec<GraphicCard>,
    pub brands: Vec<String>,
}

/// One of the page's four social link slots, kept in fixed slot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Slot id suffix (`link-{platform}` in the page).
    pub platform: String,
    /// Human-readable label.
    pub label: String,
    pub url: String,
}

/// One video card. `embed` was resolved exactly once at load time;
/// `None` means the card renders its placeholder and ignores clicks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCard {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub embed: Option<String>,
    pub cat: String,
}

/// One graphics card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicCard {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub caption: Option<String>,
}
