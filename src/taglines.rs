//! Tagline display widgets.
//!
//! The hero tagline can be shown two ways, behind the [`TaglineWidget`]
//! trait so the page renderer is widget-agnostic:
//!
//! - [`AnimatedTaglines`] — a typing effect that cycles through the list,
//!   driven by an embedded vanilla script reading its word list and speeds
//!   from data attributes.
//! - [`StaticTaglines`] — all taglines joined with `" • "` as plain text.
//!
//! Selection happens once, at render time, from `config.toml`
//! (`[taglines] animate`). The static path is a supported presentation
//! choice, not an error state, and it is what no-script visitors see either
//! way: the animated container starts out holding the joined text and the
//! script takes over only when it runs.

use maud::{Markup, html};

use crate::config::TaglinesConfig;

/// Separator for the static (and no-script) tagline rendering.
pub const SEPARATOR: &str = " \u{2022} ";

const TYPED_JS: &str = include_str!("../static/typed.js");

/// How the hero tagline region gets filled.
pub trait TaglineWidget {
    /// Render the `typed-tagline` region contents.
    fn container(&self, taglines: &[String]) -> Markup;

    /// Inline script to append to the page, if the widget needs one.
    fn script(&self) -> Option<&'static str>;
}

/// Typing-effect rotation through the tagline list.
pub struct AnimatedTaglines {
    pub type_speed_ms: u32,
    pub back_speed_ms: u32,
    pub back_delay_ms: u32,
}

impl TaglineWidget for AnimatedTaglines {
    fn container(&self, taglines: &[String]) -> Markup {
        let words = serde_json::to_string(taglines).unwrap_or_default();
        html! {
            span id="typed-tagline"
                data-taglines=(words)
                data-type-speed=(self.type_speed_ms)
                data-back-speed=(self.back_speed_ms)
                data-back-delay=(self.back_delay_ms) {
                (taglines.join(SEPARATOR))
            }
        }
    }

    fn script(&self) -> Option<&'static str> {
        Some(TYPED_JS)
    }
}

/// Static join of all taglines.
pub struct StaticTaglines;

impl TaglineWidget for StaticTaglines {
    fn container(&self, taglines: &[String]) -> Markup {
        html! {
            span id="typed-tagline" { (taglines.join(SEPARATOR)) }
        }
    }

    fn script(&self) -> Option<&'static str> {
        None
    }
}

/// Pick the widget for this build.
pub fn select(config: &TaglinesConfig) -> Box<dyn TaglineWidget> {
    if config.animate {
        Box::new(AnimatedTaglines {
            type_speed_ms: config.type_speed_ms,
            back_speed_ms: config.back_speed_ms,
            back_delay_ms: config.back_delay_ms,
        })
    } else {
        Box::new(StaticTaglines)
    }
}
