//! Shared test utilities for the folio test suite.
//!
//! Provides a small, fully-valid content file plus record builders so tests
//! can state only the fields they care about.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let site = test_site();
//! let html = render_route(&site, &site.router.resolve("/work")).unwrap();
//!
//! let entry = work_entry(Some("https://github.com/x"), None);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::content::{ContentStore, NavEntry, NavPosition, SocialLinkEntry, WorkEntry};
use crate::site::Site;

/// A minimal `site.toml` exercising every record type.
pub const MINIMAL_CONTENT: &str = r##"
[site]
name = "Test Person"
short_name = "Tester"
email = "me[at]example.com"

[profile]
image = "/images/me.jpg"
paragraphs = ["I am **Tester** and I work at [Acme](https://acme.test)."]

[[nav]]
title = "Home"
link = "/"
position = "left"

[[nav]]
title = "Work"
link = "/work"

[[nav]]
title = "Email"
link = "/contact"
position = "right"

[[anchors]]
link = "https://acme.test"
color = "#0f62fe"
background = "#82cfff"

[[social]]
name = "GitHub"
link = "https://github.com/tester"
hover_color = "#24292e"

[[social]]
name = "Twitter"
link = "https://twitter.com/tester"
hover_color = "#1DA1F2"

[[work]]
month = "March"
year = 2020
title = "First job"
description = "Did things."
github = "https://github.com/tester/first"
website = ""

[[work]]
month = "June"
year = 2021
title = "Second job"
description = "Did more things."
website = "https://second.test"

[[timeline]]
date = "2020-03-15"
short_title = "Started"
description = "The beginning."

[[timeline]]
date = "2021-06-01"
short_title = "Pinned"
description = "Pinned but second."
pinned = true
"##;

// =========================================================================
// Fixture setup
// =========================================================================

pub fn minimal_content() -> ContentStore {
    ContentStore::from_toml_str(MINIMAL_CONTENT).unwrap()
}

pub fn test_site() -> Site {
    test_site_with_config(SiteConfig::default())
}

pub fn test_site_with_config(config: SiteConfig) -> Site {
    Site::new(minimal_content(), config).unwrap()
}

/// A temp content directory containing `site.toml` and, optionally,
/// `config.toml`.
pub fn content_dir(config_toml: Option<&str>) -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "site.toml", MINIMAL_CONTENT);
    if let Some(config) = config_toml {
        write(tmp.path(), "config.toml", config);
    }
    tmp
}

pub fn write(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

// =========================================================================
// Record builders
// =========================================================================

pub fn nav_entry(title: &str, link: &str, position: NavPosition) -> NavEntry {
    NavEntry {
        title: title.to_string(),
        link: link.to_string(),
        position,
    }
}

pub fn social_entry(name: &str, hover_color: &str) -> SocialLinkEntry {
    SocialLinkEntry {
        name: name.to_string(),
        link: format!("https://{}.test", name.to_lowercase()),
        hover_color: hover_color.to_string(),
    }
}

pub fn work_entry(github: Option<&str>, website: Option<&str>) -> WorkEntry {
    WorkEntry {
        month: "March".to_string(),
        year: 2020,
        title: "The Title".to_string(),
        description: "Water is one of the most important substances.".to_string(),
        github: github.map(str::to_string),
        website: website.map(str::to_string),
    }
}
