//! HTML site generation.
//!
//! Renders every registered route plus the not-found page and writes them as
//! a static site any file server can host.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html             # /
//! ├── work/index.html        # /work
//! ├── blogs/index.html       # /blogs
//! ├── contact/index.html     # /contact
//! ├── 404.html               # unmatched routes
//! ├── icons/
//! │   ├── github.svg         # built-in work card icons
//! │   └── link.svg
//! └── ...                    # everything from content/assets/ (copied last)
//! ```
//!
//! User assets are copied after the built-in icons, so a custom
//! `assets/icons/github.svg` replaces the default one.

use crate::color::ColorError;
use crate::pages;
use crate::routes::{Page, RouteState};
use crate::site::{Site, SiteError};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Site(#[from] SiteError),
    #[error("render error: {0}")]
    Render(#[from] ColorError),
}

const BUILTIN_ASSETS: &[(&str, &str)] = &[
    ("icons/github.svg", include_str!("../static/icons/github.svg")),
    ("icons/link.svg", include_str!("../static/icons/link.svg")),
];

/// Contents of a built-in asset by output-relative path, e.g. `icons/link.svg`.
pub fn builtin_asset(relative: &str) -> Option<&'static str> {
    BUILTIN_ASSETS
        .iter()
        .find(|(path, _)| *path == relative)
        .map(|(_, contents)| *contents)
}

/// Path used for the page rendered for unmatched routes.
pub const NOT_FOUND_PATH: &str = "/404";

/// One file written by [`generate`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    /// `None` for the not-found page.
    pub page: Option<Page>,
    pub route: String,
    /// Relative to the output directory.
    pub file: PathBuf,
}

/// Summary of a build, for CLI output.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    pub assets_copied: usize,
}

/// Output file for a route: `/` → `index.html`, `/work` → `work/index.html`.
pub fn output_file(route: &str) -> PathBuf {
    match route.trim_matches('/') {
        "" => PathBuf::from("index.html"),
        path => Path::new(path).join("index.html"),
    }
}

/// Load the site from `source` and write it to `output_dir`.
pub fn generate(source: &Path, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    let site = Site::load(source)?;
    let mut report = write_site(&site, output_dir)?;
    report.assets_copied = copy_assets(&source.join("assets"), output_dir)?;
    info!("site generated at {}", output_dir.display());
    Ok(report)
}

/// Render every page of an already-loaded site into `output_dir`.
pub fn write_site(site: &Site, output_dir: &Path) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;
    let mut report = GenerateReport::default();

    for &(route, page) in site.router.routes() {
        let state = RouteState::Matched { path: route, page };
        let file = output_file(route);
        write_page(site, &state, &output_dir.join(&file))?;
        info!("generated {} → {}", route, file.display());
        report.pages.push(GeneratedPage {
            page: Some(page),
            route: route.to_string(),
            file,
        });
    }

    let not_found = RouteState::Unmatched(NOT_FOUND_PATH.to_string());
    let file = PathBuf::from("404.html");
    write_page(site, &not_found, &output_dir.join(&file))?;
    report.pages.push(GeneratedPage {
        page: None,
        route: NOT_FOUND_PATH.to_string(),
        file,
    });

    for (relative, contents) in BUILTIN_ASSETS {
        let path = output_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
    }

    Ok(report)
}

fn write_page(site: &Site, state: &RouteState, path: &Path) -> Result<(), GenerateError> {
    let html = pages::render_route(site, state)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html.into_string())?;
    Ok(())
}

/// Copy `assets_dir` recursively into `output_dir`. Returns the file count.
///
/// A missing assets directory is not an error.
pub fn copy_assets(assets_dir: &Path, output_dir: &Path) -> Result<usize, GenerateError> {
    if !assets_dir.is_dir() {
        info!("no assets directory at {}", assets_dir.display());
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(assets_dir).min_depth(1) {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(assets_dir) else {
            continue;
        };
        let target = output_dir.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            debug!("copied asset {}", relative.display());
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// Tests
// ============================================================================
