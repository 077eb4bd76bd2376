//! Default resolution: projection from content DTO to display values.
//!
//! Every "what to show when the field is missing" rule lives here, in one
//! pass, producing a [`ResolvedSite`] with no optional hero/about fields
//! left. Rendering is then a pure layout concern.
//!
//! ## Defaulting policy
//!
//! A field counts as absent when it is missing *or* blank after trimming.
//!
//! | field | default |
//! |-------|---------|
//! | avatar | placeholder avatar image |
//! | cover | placeholder cover image |
//! | brand | "Your Name" |
//! | title | "{brand} — Portfolio", or "Portfolio" without a brand |
//! | taglines | one stock tagline |
//! | bio | pointer at `content.json → about.bio` |
//! | social link | absent URL ⇒ the link is omitted entirely |
//! | video category | "video" |
//! | graphic alt | "Graphic" |
//!
//! Video URLs are resolved to embed targets here, once per card; the
//! generate stage and the published page never re-derive them.

use crate::content::{SiteContent, Socials};
use crate::embed;
use crate::types::{GraphicCard, ResolvedSite, SocialLink, VideoCard};

pub const DEFAULT_AVATAR: &str = "https://placehold.co/200x200?text=Avatar";
pub const DEFAULT_COVER: &str = "https://placehold.co/1200x360?text=Cover";
pub const DEFAULT_BRAND: &str = "Your Name";
pub const DEFAULT_TAGLINE: &str = "Video Editor & Motion Designer.";
pub const DEFAULT_BIO: &str = "Add your short bio in content.json → about.bio";

/// Bio shown when `content.json` cannot be loaded at all.
pub const FALLBACK_BIO: &str = "Unable to load content.json. Place one in the content directory.";

const DEFAULT_VIDEO_CAT: &str = "video";
const DEFAULT_GRAPHIC_ALT: &str = "Graphic";

/// The four social slots the page layout exposes, in display order.
const SOCIAL_SLOTS: [(&str, &str); 4] = [
    ("instagram", "Instagram"),
    ("youtube", "YouTube"),
    ("behance", "Behance"),
    ("website", "Website"),
];

/// Return the trimmed value when it is non-blank.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn or_default(value: &Option<String>, default: &str) -> String {
    present(value).unwrap_or(default).to_string()
}

/// Resolve a content DTO into fully-populated display values.
///
/// Pure and idempotent: the same content always resolves to the same
/// values, so re-running the load stage can never accumulate state.
pub fn resolve(content: &SiteContent) -> ResolvedSite {
    let brand_present = present(&content.site.brand);

    let taglines = if content.site.taglines.is_empty() {
        vec![DEFAULT_TAGLINE.to_string()]
    } else {
        content.site.taglines.clone()
    };

    let videos = content
        .videos
        .iter()
        .map(|entry| VideoCard {
            embed: present(&entry.url).and_then(embed::embed_url),
            cat: or_default(&entry.cat, DEFAULT_VIDEO_CAT),
        })
        .collect();

    let graphics = content
        .graphics
        .iter()
        .map(|entry| GraphicCard {
            src: or_default(&entry.src, ""),
            alt: or_default(&entry.alt, DEFAULT_GRAPHIC_ALT),
            caption: present(&entry.caption).map(str::to_string),
        })
        .collect();

    ResolvedSite {
        title: page_title(brand_present),
        brand: brand_present.unwrap_or(DEFAULT_BRAND).to_string(),
        avatar: or_default(&content.site.avatar, DEFAULT_AVATAR),
        cover: or_default(&content.site.cover, DEFAULT_COVER),
        taglines,
        socials: social_links(&content.site.socials),
        bio: or_default(&content.about.bio, DEFAULT_BIO),
        videos,
        graphics,
        brands: content.brands.clone(),
    }
}

/// Display values for a build whose content document failed to load:
/// the fully-default page with the bio region explaining the problem.
/// No video, graphic, or brand cards exist in this state.
pub fn fallback() -> ResolvedSite {
    let mut site = resolve(&SiteContent::default());
    site.bio = FALLBACK_BIO.to_string();
    site
}

fn page_title(brand: Option<&str>) -> String {
    match brand {
        Some(brand) => format!("{brand} — Portfolio"),
        None => "Portfolio".to_string(),
    }
}

/// Project the fixed social slots, keeping only those with a URL.
fn social_links(socials: &Socials) -> Vec<SocialLink> {
    SOCIAL_SLOTS
        .iter()
        .filter_map(|(platform, label)| {
            let url = match *platform {
                "instagram" => &socials.instagram,
                "youtube" => &socials.youtube,
                "behance" => &socials.behance,
                _ => &socials.website,
            };
            present(url).map(|url| SocialLink {
                platform: platform.to_string(),
                label: label.to_string(),
                url: url.to_string(),
            })
        })
        .collect()
}
