//! Route table and active-link highlighting.
//!
//! Pages are registered in an explicit, ordered table built once at startup.
//! There is no file-path discovery: a route exists iff it is in [`Router`].
//!
//! ```text
//! /          → Page::Home
//! /work      → Page::Work
//! /blogs     → Page::Blog
//! /contact   → Page::Contact
//! (anything) → RouteState::Unmatched
//! ```

use std::fmt;

/// The pages the site knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Work,
    Blog,
    Contact,
}

impl Page {
    /// Suffix/prefix used in the `<title>` of each page.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Work => "Work",
            Page::Blog => "Blogs",
            Page::Contact => "Contact",
        }
    }

    /// Full document title, e.g. `Work | JoelHanson`.
    ///
    /// The home page puts the site name first, matching how it reads in a
    /// browser tab next to other portfolio pages.
    pub fn title(self, site_name: &str) -> String {
        match self {
            Page::Home => format!("{site_name} | {}", self.label()),
            _ => format!("{} | {site_name}", self.label()),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of resolving a requested path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteState {
    Matched { path: &'static str, page: Page },
    /// Terminal for this request; nothing about it is remembered.
    Unmatched(String),
}

impl RouteState {
    /// The path that nav links compare against.
    pub fn current_path(&self) -> &str {
        match self {
            RouteState::Matched { path, .. } => path,
            RouteState::Unmatched(path) => path,
        }
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            RouteState::Matched { page, .. } => Some(*page),
            RouteState::Unmatched(_) => None,
        }
    }
}

/// Ordered mapping from route path to page.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<(&'static str, Page)>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: vec![
                ("/", Page::Home),
                ("/work", Page::Work),
                ("/blogs", Page::Blog),
                ("/contact", Page::Contact),
            ],
        }
    }

    pub fn routes(&self) -> &[(&'static str, Page)] {
        &self.routes
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.iter().any(|(p, _)| *p == path)
    }

    pub fn path_of(&self, page: Page) -> &'static str {
        self.routes
            .iter()
            .find(|(_, p)| *p == page)
            .map(|(path, _)| *path)
            .unwrap_or("/")
    }

    /// Resolve a request path.
    ///
    /// Matching is exact after normalisation: `/work/` and
    /// `/work/index.html` are the file written for `/work`.
    pub fn resolve(&self, requested: &str) -> RouteState {
        let normalized = normalize(requested);
        self.routes
            .iter()
            .find(|(path, _)| *path == normalized)
            .map(|&(path, page)| RouteState::Matched { path, page })
            .unwrap_or_else(|| RouteState::Unmatched(requested.to_string()))
    }
}

fn normalize(path: &str) -> &str {
    let path = path.strip_suffix("index.html").unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Visual state of a nav link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Active,
    Inactive,
}

/// Compare the current route against a link target.
///
/// An empty target never matches: without the guard an unset link would
/// light up whenever the current path is also empty.
pub fn link_state(current: &str, target: &str) -> LinkState {
    if !target.is_empty() && current == target {
        LinkState::Active
    } else {
        LinkState::Inactive
    }
}
