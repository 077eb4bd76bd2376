//! Site configuration module.
//!
//! Handles loading, merging, and validating the optional `config.toml` that
//! sits next to `content.json` in the content directory. Configuration
//! covers presentation knobs only: colors, layout spacing, and the tagline
//! animation. Page *content* never lives here.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_root = "content"  # Path to content directory
//!
//! [theme]
//! card_gap = "1rem"         # Gap between cards in the three grids
//! grid_padding = "2rem"     # Padding around grid containers
//! max_width = "960px"       # Page column width
//!
//! [taglines]
//! animate = true            # Typing effect; false = static " • " join
//! type_speed_ms = 35        # Per-character typing delay
//! back_speed_ms = 12        # Per-character backspace delay
//! back_delay_ms = 1400      # Hold before backspacing starts
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f5f5f5"       # Card and thumb backgrounds
//! text = "#111111"
//! text_muted = "#666666"    # Taglines, captions, footer
//! border = "#e0e0e0"
//! accent = "#e63946"        # Play button, link hover
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! surface = "#161616"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! accent = "#ff6b6b"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults; user files need only the overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the content directory (informational; the CLI flag wins).
    pub content_root: String,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Layout settings for the card grids.
    pub theme: ThemeConfig,
    /// Tagline display behavior.
    pub taglines: TaglinesConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_root: "content".to_string(),
            colors: ColorConfig::default(),
            theme: ThemeConfig::default(),
            taglines: TaglinesConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.taglines.animate
            && (self.taglines.type_speed_ms == 0 || self.taglines.back_speed_ms == 0)
        {
            return Err(ConfigError::Validation(
                "taglines.type_speed_ms and back_speed_ms must be non-zero when animating".into(),
            ));
        }
        for (mode, scheme) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            if scheme.any_blank() {
                return Err(ConfigError::Validation(format!(
                    "colors.{mode} values must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Tagline display behavior. Speeds mirror the typing widget's knobs and
/// only matter when `animate` is on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaglinesConfig {
    /// Typing effect on the hero tagline; `false` renders all taglines as
    /// static text joined with `" • "`.
    pub animate: bool,
    /// Per-character typing delay, milliseconds.
    pub type_speed_ms: u32,
    /// Per-character backspace delay, milliseconds.
    pub back_speed_ms: u32,
    /// Hold on a fully-typed tagline before backspacing, milliseconds.
    pub back_delay_ms: u32,
}

impl Default for TaglinesConfig {
    fn default() -> Self {
        Self {
            animate: true,
            type_speed_ms: 35,
            back_speed_ms: 12,
            back_delay_ms: 1400,
        }
    }
}

/// Layout settings for the video/graphics/brand grids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Gap between cards (CSS value).
    pub card_gap: String,
    /// Padding around grid containers (CSS value).
    pub grid_padding: String,
    /// Page column width (CSS value).
    pub max_width: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            card_gap: "1rem".to_string(),
            grid_padding: "2rem".to_string(),
            max_width: "960px".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Card and placeholder-thumb background.
    pub surface: String,
    pub text: String,
    /// Taglines, captions, footer.
    pub text_muted: String,
    pub border: String,
    /// Play button and link hover.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f5f5f5".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            accent: "#e63946".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            surface: "#161616".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            accent: "#ff6b6b".to_string(),
        }
    }

    fn any_blank(&self) -> bool {
        [
            &self.background,
            &self.surface,
            &self.text,
            &self.text_muted,
            &self.border,
            &self.accent,
        ]
        .iter()
        .any(|v| v.trim().is_empty())
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Stock defaults as a `toml::Value`, the base layer user overrides merge
/// onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `patch` on top of `base`.
///
/// Tables merge key-by-key; any non-table patch value replaces the base
/// value outright. Base keys the patch does not mention are preserved.
pub fn merge_toml(base: toml::Value, patch: toml::Value) -> toml::Value {
    match (base, patch) {
        (toml::Value::Table(mut base_table), toml::Value::Table(patch_table)) => {
            for (key, patch_val) in patch_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, patch_val),
                    None => patch_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, patch) => patch,
    }
}

/// Read `config.toml` from a directory as a raw TOML value.
///
/// `Ok(None)` when the file does not exist; `Err` when it exists but is
/// invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&config_path)?;
    Ok(Some(toml::from_str(&raw)?))
}

/// Merge an optional overlay onto stock defaults, deserialize, validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(patch) => merge_toml(stock_defaults_value(), patch),
        None => stock_defaults_value(),
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the content directory.
pub fn load_config(content_dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(load_raw_config(content_dir)?)
}

/// Fully-commented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Path to content directory (the --source flag overrides this)
content_root = "content"

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Gap between cards in the video, graphics, and brand grids (CSS value).
card_gap = "1rem"

# Padding around the grid containers (CSS value).
grid_padding = "2rem"

# Page column width (CSS value).
max_width = "960px"

# ---------------------------------------------------------------------------
# Taglines
# ---------------------------------------------------------------------------
[taglines]
# Typing effect on the hero tagline.
# Set to false to show all taglines as static text, joined with " • ".
animate = true

# Per-character typing delay (milliseconds).
type_speed_ms = 35

# Per-character backspace delay (milliseconds).
back_speed_ms = 12

# Hold on a fully-typed tagline before backspacing (milliseconds).
back_delay_ms = 1400

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f5f5f5"       # Card and thumb backgrounds
text = "#111111"
text_muted = "#666666"    # Taglines, captions, footer
border = "#e0e0e0"
accent = "#e63946"        # Play button, link hover

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
surface = "#161616"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
accent = "#ff6b6b"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    fn scheme_vars(scheme: &ColorScheme) -> String {
        format!(
            "    --color-bg: {};\n    --color-surface: {};\n    --color-text: {};\n    --color-text-muted: {};\n    --color-border: {};\n    --color-accent: {};",
            scheme.background,
            scheme.surface,
            scheme.text,
            scheme.text_muted,
            scheme.border,
            scheme.accent,
        )
    }

    format!(
        ":root {{\n{}\n}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{}\n    }}\n}}",
        scheme_vars(&colors.light),
        scheme_vars(&colors.dark)
            .lines()
            .map(|l| format!("    {l}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        ":root {{\n    --card-gap: {};\n    --grid-padding: {};\n    --max-width: {};\n}}",
        theme.card_gap, theme.grid_padding, theme.max_width,
    )
}
