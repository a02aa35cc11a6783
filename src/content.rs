//! Content store.
//!
//! All records the site renders (navigation, profile, social links, work
//! history, timeline and the contact email) are read from `site.toml` in the
//! content directory. Without one, the built-in content compiled into the
//! binary is used.
//!
//! Content is validated once, at load. A nav entry pointing at a page that
//! does not exist, a malformed hover color, or an email without its
//! placeholder are load errors; nothing is checked again while rendering.
//!
//! ## Email Obfuscation
//!
//! The contact email is stored with `@` written as [`EMAIL_PLACEHOLDER`], so
//! the plain address never appears in generated HTML. [`mailto_uri`] turns it
//! back into a `mailto:` target.

use crate::color::{self, ColorError};
use crate::routes::Router;
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Token standing in for `@` in the stored email.
pub const EMAIL_PLACEHOLDER: &str = "[at]";

const BUILTIN_CONTENT: &str = include_str!("../static/site.toml");

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("nav entry '{title}' links to '{link}', which is not a page")]
    UnknownRoute { title: String, link: String },
    #[error("bad color for '{name}': {source}")]
    Color {
        name: String,
        #[source]
        source: ColorError,
    },
    #[error("email must contain '[at]' exactly once and no '@', got '{0}'")]
    Email(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    pub title: String,
    /// Route path, one of the pages registered in [`Router`].
    pub link: String,
    #[serde(default)]
    pub position: NavPosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub short_title: String,
    pub description: String,
    /// Styling flag only; pinned entries are not reordered.
    #[serde(default)]
    pub pinned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkEntry {
    pub month: String,
    pub year: i32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl WorkEntry {
    /// GitHub URL, if present and non-empty.
    pub fn github_url(&self) -> Option<&str> {
        non_empty(&self.github)
    }

    /// Website URL, if present and non-empty.
    pub fn website_url(&self) -> Option<&str> {
        non_empty(&self.website)
    }
}

fn non_empty(url: &Option<String>) -> Option<&str> {
    url.as_deref().map(str::trim).filter(|u| !u.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLinkEntry {
    pub name: String,
    pub link: String,
    pub hover_color: String,
}

/// Color treatment for a link inside the profile text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Anchor {
    pub link: String,
    pub color: String,
    pub background: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Markdown, one entry per paragraph.
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteInfo {
    pub name: String,
    pub short_name: String,
    pub email: String,
}

/// The read-only collection of everything the site renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentStore {
    site: SiteInfo,
    #[serde(default)]
    profile: Profile,
    #[serde(default)]
    nav: Vec<NavEntry>,
    #[serde(default)]
    anchors: Vec<Anchor>,
    #[serde(default)]
    social: Vec<SocialLinkEntry>,
    #[serde(default)]
    work: Vec<WorkEntry>,
    #[serde(default)]
    timeline: Vec<TimelineEntry>,
}

impl ContentStore {
    /// Parse content from TOML without validating it.
    pub fn from_toml_str(s: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(s)?)
    }

    /// The content compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_toml_str(BUILTIN_CONTENT)
    }

    /// Check cross-record invariants.
    pub fn validate(&self, router: &Router) -> Result<(), ContentError> {
        for entry in &self.nav {
            if !router.contains(&entry.link) {
                return Err(ContentError::UnknownRoute {
                    title: entry.title.clone(),
                    link: entry.link.clone(),
                });
            }
        }
        for link in &self.social {
            color::parse_hex(&link.hover_color).map_err(|source| ContentError::Color {
                name: link.name.clone(),
                source,
            })?;
        }
        for anchor in &self.anchors {
            for c in [&anchor.color, &anchor.background] {
                color::parse_hex(c).map_err(|source| ContentError::Color {
                    name: anchor.link.clone(),
                    source,
                })?;
            }
        }
        let email = &self.site.email;
        if email.matches(EMAIL_PLACEHOLDER).count() != 1 || email.contains('@') {
            return Err(ContentError::Email(email.clone()));
        }
        Ok(())
    }

    pub fn site_name(&self) -> &str {
        &self.site.name
    }

    pub fn short_name(&self) -> &str {
        &self.site.short_name
    }

    /// The obfuscated contact email.
    pub fn email(&self) -> &str {
        &self.site.email
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn nav(&self) -> &[NavEntry] {
        &self.nav
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn social(&self) -> &[SocialLinkEntry] {
        &self.social
    }

    pub fn work(&self) -> &[WorkEntry] {
        &self.work
    }

    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    /// Anchor styling for a profile link, if one is configured.
    pub fn anchor_for(&self, link: &str) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.link == link)
    }
}

/// Build the `mailto:` target for an obfuscated address.
///
/// ```
/// assert_eq!(
///     folio::content::mailto_uri("joelhanson025[at]gmail.com"),
///     "mailto:joelhanson025@gmail.com"
/// );
/// ```
pub fn mailto_uri(obfuscated: &str) -> String {
    format!("mailto:{}", obfuscated.replace(EMAIL_PLACEHOLDER, "@"))
}

/// Load `site.toml` from `dir`, falling back to the built-in content.
///
/// The result is validated against `router`.
pub fn load_content(dir: &Path, router: &Router) -> Result<ContentStore, ContentError> {
    let path = dir.join("site.toml");
    let store = if path.exists() {
        debug!("reading content from {}", path.display());
        ContentStore::from_toml_str(&fs::read_to_string(&path)?)?
    } else {
        info!("no site.toml in {}, using built-in content", dir.display());
        ContentStore::builtin()?
    };
    store.validate(router)?;
    Ok(store)
}

/// Returns the documented built-in `site.toml`.
///
/// Used by the `gen-content` CLI command.
pub fn stock_content_toml() -> &'static str {
    BUILTIN_CONTENT
}
