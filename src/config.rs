//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Content (what the
//! site says) lives in `site.toml`; this file controls how it looks: colors,
//! locale, which optional sections render.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! lang = "en"                # <html lang>
//! locale = "en_US"           # Timeline date formatting
//! font_stylesheet = "https://fonts.googleapis.com/css2?family=Muli:wght@300;400;700&display=swap"
//! footer = ""                # Footer text; empty hides the footer
//!
//! [home]
//! show_timeline = false      # Render the timeline under the profile
//!
//! [colors]
//! accent = "#ef5350"         # Active nav link
//! nav_text = "#353535"       # Inactive nav links
//! text = "#353535"
//! background = "#ffffff"
//!
//! [social]
//! hover_opacity = 80         # Percent, applied to each link's hover color
//! spacing = "1.5rem"         # Gap between social links
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! [colors]
//! accent = "#0f62fe"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::color;
use crate::components;
use chrono::Locale;
use log::debug;
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
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Locale for long-form dates, e.g. `en_US`, `fr_FR`.
    pub locale: String,
    /// Stylesheet URL for the web font. Empty to skip.
    pub font_stylesheet: String,
    /// Footer text. Empty hides the footer.
    pub footer: String,
    pub home: HomeConfig,
    pub colors: ColorConfig,
    pub social: SocialConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            locale: "en_US".to_string(),
            font_stylesheet:
                "https://fonts.googleapis.com/css2?family=Muli:wght@300;400;700&display=swap"
                    .to_string(),
            footer: String::new(),
            home: HomeConfig::default(),
            colors: ColorConfig::default(),
            social: SocialConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.social.hover_opacity > 100 {
            return Err(ConfigError::Validation(
                "social.hover_opacity must be 0-100".into(),
            ));
        }
        if self.social.spacing.contains(['{', '}', ';']) {
            return Err(ConfigError::Validation(format!(
                "social.spacing must be a single CSS length, got '{}'",
                self.social.spacing
            )));
        }
        for (key, value) in self.colors.entries() {
            color::parse_hex(value)
                .map_err(|e| ConfigError::Validation(format!("colors.{key}: {e}")))?;
        }
        self.date_locale()?;
        Ok(())
    }

    /// The configured locale as a chrono [`Locale`].
    ///
    /// Only locales with a long-form date pattern are accepted; see
    /// [`components::long_date_pattern`].
    pub fn date_locale(&self) -> Result<Locale, ConfigError> {
        let locale = Locale::try_from(self.locale.as_str())
            .map_err(|_| ConfigError::Validation(format!("unknown locale '{}'", self.locale)))?;
        if components::long_date_pattern(locale).is_none() {
            return Err(ConfigError::Validation(format!(
                "no long date format for locale '{}'",
                self.locale
            )));
        }
        Ok(locale)
    }
}

/// Home page sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HomeConfig {
    /// Render the timeline below the profile.
    pub show_timeline: bool,
}

/// Site colors. All values are hex strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Active nav link.
    pub accent: String,
    /// Inactive nav links.
    pub nav_text: String,
    /// Body text.
    pub text: String,
    pub background: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            accent: "#ef5350".to_string(),
            nav_text: "#353535".to_string(),
            text: "#353535".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("accent", self.accent.as_str()),
            ("nav_text", self.nav_text.as_str()),
            ("text", self.text.as_str()),
            ("background", self.background.as_str()),
        ]
    }
}

/// Social link row settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialConfig {
    /// Opacity (percent) of each link's hover color.
    pub hover_opacity: u8,
    /// Left margin of every link after the first (CSS value).
    pub spacing: String,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            hover_opacity: 80,
            spacing: "1.5rem".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// [`SiteConfig::default`] as a TOML table, the base every `config.toml`
/// is layered onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Layer a sparse `overlay` onto `base`.
///
/// Sections such as `[colors]` merge key by key, so overriding `accent`
/// keeps the stock `background`. Any other value in `overlay` wins outright.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut table), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                let merged = match table.remove(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => value,
                };
                table.insert(key, merged);
            }
            toml::Value::Table(table)
        }
        (_, overlay) => overlay,
    }
}

/// Read `config.toml` from the content directory, if there is one.
pub fn load_raw_config(content_dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let path = content_dir.join("config.toml");
    if !path.exists() {
        debug!("no config.toml in {}, using stock config", content_dir.display());
        return Ok(None);
    }
    Ok(Some(toml::from_str(&fs::read_to_string(&path)?)?))
}

/// Build a validated [`SiteConfig`] from the stock table and the user's
/// `config.toml`, if any. Unknown keys fail deserialization.
pub fn resolve_config(
    base: toml::Value,
    user: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match user {
        Some(user) => merge_toml(base, user),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the site config for a content directory.
pub fn load_config(content_dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(content_dir)?)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# <html lang> attribute.
lang = "en"

# Locale for timeline dates ("Sunday, March 15, 2020" in en_US,
# "dimanche 15 mars 2020" in fr_FR). Supported: en_US, en_GB, fr_FR, de_DE,
# es_ES, it_IT, nl_NL, pt_BR, ja_JP.
locale = "en_US"

# Web font stylesheet. Set to "" to use system fonts only.
font_stylesheet = "https://fonts.googleapis.com/css2?family=Muli:wght@300;400;700&display=swap"

# Footer text on every page. Empty hides the footer.
footer = ""

# ---------------------------------------------------------------------------
# Home page
# ---------------------------------------------------------------------------
[home]
# Show the timeline from site.toml below the profile.
show_timeline = false

# ---------------------------------------------------------------------------
# Colors (hex, 3 or 6 digits)
# ---------------------------------------------------------------------------
[colors]
accent = "#ef5350"        # Active nav link
nav_text = "#353535"      # Inactive nav links
text = "#353535"
background = "#ffffff"

# ---------------------------------------------------------------------------
# Social links
# ---------------------------------------------------------------------------
[social]
# Opacity (percent) applied to each link's hover color.
hover_opacity = 80

# Gap before every link except the first (a CSS length, no braces or ';').
spacing = "1.5rem"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-accent: {accent};
    --color-nav-text: {nav_text};
    --color-text: {text};
    --color-bg: {background};
}}"#,
        accent = colors.accent,
        nav_text = colors.nav_text,
        text = colors.text,
        background = colors.background,
    )
}
