//! CLI output formatting for both pipeline stages.
//!
//! Output is information-centric: each entity leads with its semantic
//! identity (positional index + what it is), with technical detail as
//! indented context lines. Each stage has a `format_*` function returning
//! `Vec<String>` for testability and a `print_*` wrapper that writes to
//! stdout. Format functions are pure, with no I/O.
//!
//! ## Load
//!
//! ```text
//! Site
//!     Brand: Ari Vale
//!     Title: Ari Vale — Portfolio
//!     Taglines: 2
//! Socials
//!     instagram → https://instagram.com/arivale
//! Videos
//!     001 promo (youtube dQw4w9WgXcQ)
//!     002 video (unsupported)
//! Graphics
//!     001 Poster
//!         Caption: Key art
//! Brands
//!     2 logos
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Generated 2 video cards, 1 graphic, 2 brand logos
//! ```

use std::path::Path;

use crate::content::SiteContent;
use crate::embed;
use crate::types::ResolvedSite;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{pos:0>3}")
}

/// Pluralize a count: `1 graphic`, `2 graphics`.
fn count_noun(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

// ============================================================================
// Stage 1: Load output
// ============================================================================

/// Format load-stage output: the resolved content inventory.
///
/// Takes both the raw content (for the as-authored video URLs) and the
/// resolved site (for what will actually render).
pub fn format_load_output(content: &SiteContent, site: &ResolvedSite) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Site".to_string());
    lines.push(format!("    Brand: {}", site.brand));
    lines.push(format!("    Title: {}", site.title));
    lines.push(format!("    Taglines: {}", site.taglines.len()));

    lines.push("Socials".to_string());
    if site.socials.is_empty() {
        lines.push("    (none)".to_string());
    }
    for link in &site.socials {
        lines.push(format!("    {} \u{2192} {}", link.platform, link.url));
    }

    if !site.videos.is_empty() {
        lines.push("Videos".to_string());
        for (idx, card) in site.videos.iter().enumerate() {
            let raw_url = content
                .videos
                .get(idx)
                .and_then(|entry| entry.url.as_deref())
                .unwrap_or_default();
            let status = match (&card.embed, embed::detect(raw_url)) {
                (Some(_), Some(provider)) => provider.name().to_string(),
                _ => "unsupported".to_string(),
            };
            lines.push(format!("    {} {} ({})", format_index(idx + 1), card.cat, status));
        }
    }

    if !site.graphics.is_empty() {
        lines.push("Graphics".to_string());
        for (idx, card) in site.graphics.iter().enumerate() {
            lines.push(format!("    {} {}", format_index(idx + 1), card.alt));
            if let Some(caption) = &card.caption {
                lines.push(format!("        Caption: {caption}"));
            }
        }
    }

    if !site.brands.is_empty() {
        lines.push("Brands".to_string());
        lines.push(format!("    {}", count_noun(site.brands.len(), "logo")));
    }

    lines
}

pub fn print_load_output(content: &SiteContent, site: &ResolvedSite) {
    for line in format_load_output(content, site) {
        println!("{line}");
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate-stage output: what was emitted where.
pub fn format_generate_output(site: &ResolvedSite, output_dir: &Path) -> Vec<String> {
    vec![
        format!("Home \u{2192} {}", output_dir.join("index.html").display()),
        format!(
            "Generated {}, {}, {}",
            count_noun(site.videos.len(), "video card"),
            count_noun(site.graphics.len(), "graphic"),
            count_noun(site.brands.len(), "brand logo"),
        ),
    ]
}

pub fn print_generate_output(site: &ResolvedSite, output_dir: &Path) {
    for line in format_generate_output(site, output_dir) {
        println!("{line}");
    }
}
