//! HTML site generation.
//!
//! Stage 2 of the Simple Folio pipeline. Takes the resolved manifest and
//! generates the final static site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html     # The whole portfolio — hero, bio, three grids, footer
//! └── assets/        # Verbatim copy of content/assets/, if present
//! ```
//!
//! ## Named Regions
//!
//! The page exposes a fixed set of region ids (`site-cover`, `site-avatar`,
//! `site-brand`, `typed-tagline`, `link-{platform}`, `about-bio`,
//! `video-grid`, `graphics-grid`, `brands-grid`, `site-brand-footer`,
//! `year`) which the embedded scripts and stylesheet address. Display
//! values arrive fully resolved; this module contains no defaulting logic.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and inlined into the page:
//! - `static/style.css`: base styles (color/layout variables injected from
//!   config.toml above them)
//! - `static/player.js`: click-to-play embed swap (only when video cards
//!   exist)
//! - `static/typed.js`: tagline typing effect (only when animation is on)
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping; the bio
//! is markdown, converted with pulldown-cmark like any other rich text.

use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::{self, SiteConfig};
use crate::taglines;
use crate::types::{GraphicCard, Manifest, ResolvedSite, SocialLink, VideoCard};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const PLAYER_JS: &str = include_str!("../static/player.js");

/// Generate the site from a resolved manifest.
///
/// Output is a pure function of the manifest (plus the calendar year), so
/// regenerating over an existing `dist/` replaces rather than accumulates.
pub fn generate(
    manifest_path: &Path,
    content_dir: &Path,
    output_dir: &Path,
) -> Result<(), GenerateError> {
    let manifest: Manifest = serde_json::from_str(&fs::read_to_string(manifest_path)?)?;

    // Fresh at generate time, never taken from the manifest.
    let year = chrono::Local::now().year();

    let css = assemble_css(&manifest.config);
    let page = render_page(&manifest.site, &manifest.config, year, &css);

    fs::create_dir_all(output_dir)?;
    fs::write(output_dir.join("index.html"), page.into_string())?;

    let assets = content_dir.join("assets");
    if assets.is_dir() {
        let dst = output_dir.join("assets");
        fs::create_dir_all(&dst)?;
        copy_dir_recursive(&assets, &dst)?;
    }

    Ok(())
}

/// Color and layout variables from config, then the embedded base styles.
pub fn assemble_css(site_config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&site_config.colors),
        config::generate_theme_css(&site_config.theme),
        CSS_STATIC
    )
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// ============================================================================
// Page renderer
// ============================================================================

/// Render the whole page.
pub fn render_page(site: &ResolvedSite, site_config: &SiteConfig, year: i32, css: &str) -> Markup {
    let widget = taglines::select(&site_config.taglines);

    let content = html! {
        (hero(site, widget.container(&site.taglines)))
        main {
            (about_section(&site.bio))
            @if !site.videos.is_empty() {
                section {
                    h2 { "Videos" }
                    div id="video-grid" class="grid" {
                        @for card in &site.videos {
                            (video_card(card))
                        }
                    }
                }
            }
            @if !site.graphics.is_empty() {
                section {
                    h2 { "Graphics" }
                    div id="graphics-grid" class="grid" {
                        @for card in &site.graphics {
                            (graphic_card(card))
                        }
                    }
                }
            }
            @if !site.brands.is_empty() {
                section {
                    h2 { "Brands" }
                    div id="brands-grid" {
                        @for src in &site.brands {
                            img src=(src) alt="Brand" loading="lazy";
                        }
                    }
                }
            }
        }
        (footer(&site.brand, year))
        @if !site.videos.is_empty() {
            script { (PreEscaped(PLAYER_JS)) }
        }
        @if let Some(js) = widget.script() {
            script { (PreEscaped(js)) }
        }
    };

    base_document(&site.title, css, content)
}

/// Base HTML document structure.
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Cover, avatar, brand heading, tagline, social links.
fn hero(site: &ResolvedSite, tagline_container: Markup) -> Markup {
    html! {
        header class="hero" {
            img id="site-cover" class="cover" src=(site.cover) alt="";
            div class="hero-inner" {
                img id="site-avatar" class="avatar" src=(site.avatar) alt=(site.brand);
                div class="hero-text" {
                    h1 id="site-brand" { (site.brand) }
                    span class="tagline" { (tagline_container) }
                    (socials_nav(&site.socials))
                }
            }
        }
    }
}

/// One anchor per present link; absent platforms produce no element.
fn socials_nav(socials: &[SocialLink]) -> Markup {
    html! {
        @if !socials.is_empty() {
            nav class="socials" {
                @for link in socials {
                    a id={ "link-" (link.platform) } href=(link.url)
                        target="_blank" rel="noopener" {
                        (link.label)
                    }
                }
            }
        }
    }
}

/// Bio section; the bio is markdown.
fn about_section(bio: &str) -> Markup {
    let mut bio_html = String::new();
    md_html::push_html(&mut bio_html, Parser::new(bio));

    html! {
        section {
            h2 { "About" }
            div id="about-bio" { (PreEscaped(bio_html)) }
        }
    }
}

/// Placeholder card with a Play affordance. The embed URL rides along in
/// `data-embed` for the player script; a card without one is inert.
fn video_card(card: &VideoCard) -> Markup {
    html! {
        div class="card" data-cat=(card.cat) data-embed=[card.embed.as_deref()] {
            div class="thumb" {
                span class="thumb-cat" { (card.cat) }
                span { "Video" }
            }
            div class="play-btn" {
                button aria-label="Play" { "Play \u{25b6}" }
            }
        }
    }
}

fn graphic_card(card: &GraphicCard) -> Markup {
    html! {
        div class="card" {
            img class="thumb" src=(card.src) alt=(card.alt) loading="lazy";
            @if let Some(caption) = &card.caption {
                div class="caption" { (caption) }
            }
        }
    }
}

fn footer(brand: &str, year: i32) -> Markup {
    html! {
        footer {
            "\u{00a9} "
            span id="year" { (year) }
            " "
            span id="site-brand-footer" { (brand) }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
