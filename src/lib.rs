//! # Simple Folio
//!
//! A minimal static site generator for creative portfolios. One JSON file is
//! the data source: `content.json` describes the hero, bio, social links,
//! video reel, graphics, and brand logos, and Simple Folio turns it into a
//! single-page portfolio site with click-to-play video embeds.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Content flows through two independent stages, with a JSON manifest
//! between them:
//!
//! ```text
//! 1. Load      content/content.json  →  resolved.json   (DTO → display values)
//! 2. Generate  resolved.json         →  dist/           (final HTML site)
//! ```
//!
//! The load stage does all the thinking: it parses the content document,
//! fills every missing field with its documented default, and resolves each
//! video URL to a provider embed URL exactly once. The generate stage is a
//! dumb projection of those display values into named page regions. This
//! separation exists for the same reasons as any manifest pipeline:
//!
//! - **Debuggability**: `resolved.json` is human-readable; you can see
//!   exactly what the page will say before any HTML exists.
//! - **Testability**: defaulting and embed resolution are pure functions,
//!   exercised without touching the filesystem or a browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Stage 1 input — the `content.json` DTO and its loader |
//! | [`resolve`] | Defaulting projection from content DTO to display values |
//! | [`embed`] | Provider detection and embed-URL resolution for video cards |
//! | [`types`] | Resolved display values serialized between stages |
//! | [`config`] | `config.toml` loading, merging, validation, CSS variables |
//! | [`taglines`] | Animated vs. static tagline widget selection |
//! | [`generate`] | Stage 2 — renders the final HTML page using Maud |
//! | [`output`] | CLI output formatting for both stages |
//!
//! # Design Decisions
//!
//! ## Click-To-Play, Resolved At Build Time
//!
//! Video cards never embed provider content up front: no autoplay, no
//! prefetch, no provider traffic until the visitor clicks Play. The embed
//! URL for each card is resolved once, at build time, by [`embed`]; the
//! published page carries it in a `data-embed` attribute and a ~20-line
//! vanilla player script swaps in the iframe on click. A card whose URL no
//! provider claims gets no attribute at all and stays inert.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): compile-time
//! checked, type-safe, XSS-escaped by default, and zero template files to
//! ship. The page's named regions (`site-avatar`, `video-grid`, `year`, …)
//! are the render contract; everything else about the layout is owned by
//! the embedded stylesheet.
//!
//! ## Defaults Are Data, Not Scattered Ifs
//!
//! Every "show a placeholder when the field is missing" rule lives in one
//! place, [`resolve`], which produces a fully-populated
//! [`types::ResolvedSite`] before any rendering occurs. The generate stage
//! never asks "is this present?"; by the time it runs, everything is.
//!
//! ## Degrade, Never Break
//!
//! A missing or malformed `content.json` produces a working page whose bio
//! region explains the problem; an unrecognized video URL produces a card
//! that simply does nothing on click. No failure surfaces as a crash or a
//! broken page.
//!
//! # The "Forever Stack"
//!
//! The output is plain HTML, established CSS, and a few dozen lines of
//! vanilla JavaScript. There is no framework and no build step on the
//! published side; embeds are plain iframe URLs. Drop `dist/` on any file
//! server and it works.

pub mod config;
pub mod content;
pub mod embed;
pub mod generate;
pub mod output;
pub mod resolve;
pub mod taglines;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
