//! Content loading and the `content.json` data model.
//!
//! Stage 1 input for the Simple Folio pipeline. The whole site is described
//! by a single JSON document in the content directory:
//!
//! ```json
//! {
//!   "site": {
//!     "avatar": "assets/avatar.jpg",
//!     "cover": "assets/cover.jpg",
//!     "brand": "Ari Vale",
//!     "taglines": ["Video Editor.", "Motion Designer."],
//!     "socials": {
//!       "instagram": "https://instagram.com/arivale",
//!       "youtube": "https://youtube.com/@arivale",
//!       "website": "https://arivale.example"
//!     }
//!   },
//!   "about": { "bio": "I cut **fast** promos and title sequences." },
//!   "videos": [
//!     { "url": "https://youtu.be/dQw4w9WgXcQ", "cat": "promo" }
//!   ],
//!   "graphics": [
//!     { "src": "assets/poster.png", "alt": "Poster", "caption": "Key art" }
//!   ],
//!   "brands": ["assets/logo-one.svg"]
//! }
//! ```
//!
//! ## Everything Is Optional
//!
//! Every field may be absent; absence means "use the documented default",
//! never an error. An empty `{}` is a valid content document and produces a
//! fully default-filled page. Unknown keys are ignored; the content file
//! belongs to the site owner and older documents keep working.
//!
//! A field of the wrong JSON *type* is different: that is a malformed
//! document, reported as a [`LoadError::Json`] and handled by the caller's
//! fallback path.
//!
//! ## One Read Per Build
//!
//! The loader reads the file fresh on every invocation; nothing is cached
//! between builds, so edits are always visible on the next run. Exactly one
//! load attempt is made, with no retry.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Filename of the content document inside the content directory.
pub const CONTENT_FILE: &str = "content.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Root content DTO. Read once per build, never mutated; downstream stages
/// only project it into display values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub site: SiteSection,
    pub about: AboutSection,
    pub videos: Vec<VideoEntry>,
    pub graphics: Vec<GraphicEntry>,
    pub brands: Vec<String>,
}

/// Hero and header content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub avatar: Option<String>,
    pub cover: Option<String>,
    pub brand: Option<String>,
    pub taglines: Vec<String>,
    pub socials: Socials,
}

/// Social links. The platform set is fixed (the page layout has exactly
/// four link slots), and a link with no URL is omitted from the page
/// entirely rather than rendered with an empty href.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Socials {
    pub instagram: Option<String>,
    pub youtube: Option<String>,
    pub behance: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    /// Short bio, markdown allowed.
    pub bio: Option<String>,
}

/// One entry in the video reel. `url` is what makes the card playable;
/// without it (or with a URL no provider claims) the card renders but stays
/// inert. `cat` is a decorative category tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoEntry {
    pub url: Option<String>,
    pub cat: Option<String>,
}

/// One entry in the graphics grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicEntry {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub caption: Option<String>,
}

/// Load and parse `content.json` from the content directory.
pub fn load_content(content_dir: &Path) -> Result<SiteContent, LoadError> {
    let raw = fs::read_to_string(content_dir.join(CONTENT_FILE))?;
    Ok(serde_json::from_str(&raw)?)
}
